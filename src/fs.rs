//! Scoped file I/O. Each call opens its own handle and drops it on return,
//! error paths included.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use enough::Unstoppable;

use crate::decode::DecodeRequest;
use crate::error::PnmError;
use crate::image::{AnyImage, Image};
use crate::pixel::Sample;

impl<S: Sample> Image<S> {
    /// Read and decode a file holding an image of this kind.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PnmError> {
        let data = std::fs::read(path)?;
        DecodeRequest::new(&data).decode_as(Unstoppable)
    }

    /// Encode and write to `path`, creating or truncating it.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PnmError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Encode and write to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<(), PnmError> {
        let bytes = self.encode()?;
        writer.write_all(&bytes)?;
        Ok(())
    }
}

impl AnyImage {
    /// Read and decode a file of any Netpbm kind.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PnmError> {
        let data = std::fs::read(path)?;
        DecodeRequest::new(&data).decode(Unstoppable)
    }

    /// Encode and write to `path`, creating or truncating it.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PnmError> {
        match self {
            Self::Bitmap(img) => img.save(path),
            Self::Graymap(img) => img.save(path),
            Self::Pixmap(img) => img.save(path),
        }
    }
}
