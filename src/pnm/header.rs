//! Three-record text header: magic token, `width height`, max value.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use super::PnmFormat;
use super::reader::ByteReader;
use crate::error::PnmError;

/// Parsed Netpbm header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PnmHeader {
    pub format: PnmFormat,
    pub width: usize,
    pub height: usize,
    /// Upper bound of every sample channel; always 1 for bitmaps.
    pub max_value: u8,
}

impl PnmHeader {
    /// Read the header records, one per line, leaving `reader` at the first
    /// byte of pixel data.
    pub(crate) fn parse(reader: &mut ByteReader<'_>) -> Result<Self, PnmError> {
        let magic = reader
            .read_line()
            .ok_or_else(|| PnmError::InvalidFormat("missing magic token".into()))?
            .trim_ascii();
        let format = PnmFormat::from_magic(magic).ok_or_else(|| {
            PnmError::InvalidFormat(format!("magic token {:?}", lossy(magic)))
        })?;

        let dims = reader
            .read_line()
            .ok_or_else(|| PnmError::InvalidDimensions("missing dimensions line".into()))?;
        let mut fields = dims.split(u8::is_ascii_whitespace).filter(|f| !f.is_empty());
        let width = parse_dimension(fields.next(), "width")?;
        let height = parse_dimension(fields.next(), "height")?;

        let max_value = if format.has_max_value() {
            let line = reader
                .read_line()
                .ok_or_else(|| PnmError::InvalidMaxValue("missing max value line".into()))?
                .trim_ascii();
            parse_max_value(line)?
        } else {
            1
        };

        Ok(Self {
            format,
            width,
            height,
            max_value,
        })
    }

    /// Append the header text, each record newline-terminated.
    pub(crate) fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.format.magic().as_bytes());
        out.push(b'\n');
        out.extend_from_slice(format!("{} {}\n", self.width, self.height).as_bytes());
        if self.format.has_max_value() {
            out.extend_from_slice(format!("{}\n", self.max_value).as_bytes());
        }
    }
}

fn parse_dimension(field: Option<&[u8]>, name: &str) -> Result<usize, PnmError> {
    let field = field.ok_or_else(|| PnmError::InvalidDimensions(format!("missing {name}")))?;
    let value: i64 = core::str::from_utf8(field)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| PnmError::InvalidDimensions(format!("{name} {:?}", lossy(field))))?;
    if value <= 0 {
        return Err(PnmError::InvalidDimensions(format!(
            "{name} must be positive, got {value}"
        )));
    }
    usize::try_from(value)
        .map_err(|_| PnmError::InvalidDimensions(format!("{name} {value} too large")))
}

fn parse_max_value(field: &[u8]) -> Result<u8, PnmError> {
    let value: u8 = core::str::from_utf8(field)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| PnmError::InvalidMaxValue(format!("{:?}", lossy(field))))?;
    if value == 0 {
        return Err(PnmError::InvalidMaxValue("must be at least 1".into()));
    }
    Ok(value)
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
