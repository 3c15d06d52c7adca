use crate::error::PnmError;
use crate::pixel::ImageKind;
use crate::pnm::reader::ByteReader;
use crate::pnm::{PnmFormat, PnmHeader};

/// Header summary, available without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: usize,
    pub height: usize,
    pub format: PnmFormat,
    /// 1 for bitmaps.
    pub max_value: u8,
}

impl ImageInfo {
    /// Probe the header of a Netpbm stream.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PnmError> {
        let header = PnmHeader::parse(&mut ByteReader::new(data))?;
        Ok(Self {
            width: header.width,
            height: header.height,
            format: header.format,
            max_value: header.max_value,
        })
    }

    pub fn kind(&self) -> ImageKind {
        self.format.kind()
    }
}
