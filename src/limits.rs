use alloc::format;

use crate::error::PnmError;

/// Caps applied to a header before any pixel buffer is allocated.
///
/// Every field defaults to `None`, meaning unlimited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Cap on `width * height`.
    pub max_pixels: Option<u64>,
    /// Cap on the decoded sample buffer, in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Reject `width x height` if it breaks a dimension or pixel-count cap.
    pub(crate) fn check(&self, width: usize, height: usize) -> Result<(), PnmError> {
        let (w, h) = (width as u64, height as u64);
        exceeds("width", w, self.max_width)?;
        exceeds("height", h, self.max_height)?;
        exceeds("pixel count", w.saturating_mul(h), self.max_pixels)
    }

    /// Reject a buffer of `bytes` above the memory cap.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), PnmError> {
        exceeds("buffer size", bytes as u64, self.max_memory_bytes)
    }
}

fn exceeds(what: &str, value: u64, cap: Option<u64>) -> Result<(), PnmError> {
    match cap {
        Some(cap) if value > cap => Err(PnmError::LimitExceeded(format!(
            "{what} {value} exceeds limit {cap}"
        ))),
        _ => Ok(()),
    }
}
