use enough::Stop;

use crate::error::PnmError;
use crate::image::{AnyImage, Image};
use crate::limits::Limits;
use crate::pixel::Sample;
use crate::pnm;

/// Decode request builder.
///
/// ```
/// use zenpbm::{DecodeRequest, Limits, Unstoppable};
///
/// let limits = Limits { max_pixels: Some(1 << 20), ..Limits::default() };
/// let image = DecodeRequest::new(b"P1\n2 2\n1 0\n0 1\n")
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// assert_eq!(image.size(), (2, 2));
/// # Ok::<(), zenpbm::PnmError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images exceeding `limits` before any pixel buffer is allocated.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Decode whichever kind the magic token announces.
    pub fn decode(&self, stop: impl Stop) -> Result<AnyImage, PnmError> {
        pnm::decode_any(self.data, self.limits, &stop)
    }

    /// Decode an image of kind `S`; a magic token of another kind is
    /// [`PnmError::InvalidFormat`].
    pub fn decode_as<S: Sample>(&self, stop: impl Stop) -> Result<Image<S>, PnmError> {
        pnm::decode_typed(self.data, self.limits, &stop)
    }
}
