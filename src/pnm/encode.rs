//! PNM encoder: header plus ASCII or binary rows.

use alloc::vec::Vec;
use enough::Stop;

use super::header::PnmHeader;
use super::sample::SampleCodec;
use super::{Encoding, PnmFormat};
use crate::error::PnmError;
use crate::image::Image;
use crate::log::debug;
use crate::pixel::Sample;

/// Serialize `image` with the given sample encoding.
pub(crate) fn encode_image<S: Sample>(
    image: &Image<S>,
    encoding: Encoding,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PnmError> {
    let pixels = image.pixels();
    let (w, h) = pixels.size();
    let header = PnmHeader {
        format: PnmFormat::new(S::KIND, encoding),
        width: w,
        height: h,
        max_value: image.max_value(),
    };

    let body_bytes = match encoding {
        // up to three digits plus a separator per token
        Encoding::Ascii => w.checked_mul(S::TOKENS * 4),
        Encoding::Binary => Some(S::row_bytes(w)),
    }
    .and_then(|row| row.checked_mul(h))
    .ok_or(PnmError::DimensionsTooLarge {
        width: w,
        height: h,
    })?;

    stop.check()?;
    debug!("encoding {} {}x{} max {}", header.format, w, h, header.max_value);

    let mut out = Vec::with_capacity(body_bytes.saturating_add(32));
    header.write(&mut out);

    for (y, row) in pixels.rows().enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        match encoding {
            Encoding::Ascii => {
                for (x, &px) in row.iter().enumerate() {
                    if x > 0 {
                        out.push(b' ');
                    }
                    px.write_ascii(&mut out);
                }
                out.push(b'\n');
            }
            Encoding::Binary => S::encode_row(row, &mut out),
        }
    }

    Ok(out)
}
