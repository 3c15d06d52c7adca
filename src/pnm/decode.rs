//! PNM decoder: header, then ASCII or binary rows into a [`PixelBuffer`].

use alloc::format;
use alloc::vec::Vec;
use enough::Stop;

use super::header::PnmHeader;
use super::reader::ByteReader;
use super::sample::SampleCodec;
use super::Encoding;
use crate::buffer::PixelBuffer;
use crate::error::PnmError;
use crate::image::{AnyImage, Image};
use crate::limits::Limits;
use crate::log::debug;
use crate::pixel::{ImageKind, Sample, RGB8};

/// Decode whichever kind the magic token announces.
pub(crate) fn decode_any(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<AnyImage, PnmError> {
    let mut reader = ByteReader::new(data);
    let header = PnmHeader::parse(&mut reader)?;
    Ok(match header.format.kind() {
        ImageKind::Bitmap => AnyImage::Bitmap(decode_body::<bool>(&mut reader, &header, limits, stop)?),
        ImageKind::Graymap => AnyImage::Graymap(decode_body::<u8>(&mut reader, &header, limits, stop)?),
        ImageKind::Pixmap => AnyImage::Pixmap(decode_body::<RGB8>(&mut reader, &header, limits, stop)?),
    })
}

/// Decode an image of kind `S::KIND`; other magic tokens are rejected.
pub(crate) fn decode_typed<S: Sample>(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image<S>, PnmError> {
    let mut reader = ByteReader::new(data);
    let header = PnmHeader::parse(&mut reader)?;
    if header.format.kind() != S::KIND {
        return Err(PnmError::InvalidFormat(format!(
            "expected a {:?} image, found {}",
            S::KIND,
            header.format
        )));
    }
    decode_body(&mut reader, &header, limits, stop)
}

fn decode_body<S: Sample>(
    reader: &mut ByteReader<'_>,
    header: &PnmHeader,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Image<S>, PnmError> {
    let (w, h) = (header.width, header.height);
    let out_bytes = w
        .checked_mul(h)
        .and_then(|wh| wh.checked_mul(core::mem::size_of::<S>()))
        .ok_or(PnmError::DimensionsTooLarge {
            width: w,
            height: h,
        })?;
    if let Some(limits) = limits {
        limits.check(w, h)?;
        limits.check_memory(out_bytes)?;
    }

    check_available::<S>(reader, header)?;

    stop.check()?;
    debug!(
        "decoding {} {}x{} max {}, pixel data at byte {}",
        header.format,
        w,
        h,
        header.max_value,
        reader.position()
    );

    let mut pixels = PixelBuffer::<S>::new(w, h)?;
    match header.format.encoding() {
        Encoding::Ascii => read_ascii_rows(reader, &mut pixels, stop)?,
        Encoding::Binary => read_binary_rows(reader, &mut pixels, stop)?,
    }
    check_sample_range(&pixels, header.max_value)?;

    Ok(Image::from_parts(pixels, header.format.encoding(), header.max_value))
}

/// Fail before allocating if the input cannot hold `height` rows.
///
/// Binary rows have an exact size. An ASCII row needs at least one byte per
/// token plus one separator or newline after each, except the last.
fn check_available<S: Sample>(reader: &ByteReader<'_>, header: &PnmHeader) -> Result<(), PnmError> {
    let (w, h) = (header.width, header.height);
    let available = reader.remaining();
    let (per_row, slack) = match header.format.encoding() {
        Encoding::Binary => (S::row_bytes(w), 0),
        Encoding::Ascii => (w.saturating_mul(S::TOKENS).saturating_mul(2), 1),
    };
    let needed = per_row.saturating_mul(h).saturating_sub(slack);
    if available >= needed {
        return Ok(());
    }
    // first row whose lower bound is not met
    let row = (available + slack) / per_row.max(1);
    Err(PnmError::TruncatedData {
        row: row.min(h.saturating_sub(1)),
    })
}

/// One text line per row; tokens beyond the row width are ignored.
fn read_ascii_rows<S: Sample>(
    reader: &mut ByteReader<'_>,
    pixels: &mut PixelBuffer<S>,
    stop: &dyn Stop,
) -> Result<(), PnmError> {
    let mut tokens: Vec<&[u8]> = Vec::new();
    for (y, row) in pixels.rows_mut().enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        let line = reader.read_line().ok_or(PnmError::TruncatedData { row: y })?;
        tokens.clear();
        tokens.extend(
            line.split(u8::is_ascii_whitespace)
                .filter(|t| !t.is_empty())
                .take(row.len() * S::TOKENS),
        );
        if tokens.len() < row.len() * S::TOKENS {
            return Err(PnmError::TruncatedData { row: y });
        }
        for (x, (px, group)) in row.iter_mut().zip(tokens.chunks_exact(S::TOKENS)).enumerate() {
            *px = S::parse_tokens(group).ok_or(PnmError::InvalidSample { row: y, column: x })?;
        }
    }
    Ok(())
}

fn read_binary_rows<S: Sample>(
    reader: &mut ByteReader<'_>,
    pixels: &mut PixelBuffer<S>,
    stop: &dyn Stop,
) -> Result<(), PnmError> {
    let row_bytes = S::row_bytes(pixels.width());
    for (y, row) in pixels.rows_mut().enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        let bytes = reader
            .read_bytes(row_bytes)
            .ok_or(PnmError::TruncatedData { row: y })?;
        S::decode_row(bytes, row);
    }
    Ok(())
}

fn check_sample_range<S: Sample>(pixels: &PixelBuffer<S>, max_value: u8) -> Result<(), PnmError> {
    for (y, row) in pixels.rows().enumerate() {
        if let Some(x) = row.iter().position(|px| px.peak() > max_value) {
            return Err(PnmError::SampleOutOfRange {
                row: y,
                column: x,
                value: row[x].peak(),
                max_value,
            });
        }
    }
    Ok(())
}
