use alloc::vec::Vec;
use enough::Stop;

use crate::error::PnmError;
use crate::image::Image;
use crate::pixel::Sample;
use crate::pnm::{self, Encoding};

/// Encode request builder.
///
/// By default an image is written with its own encoding; an override
/// applies to this request only and leaves the image untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeRequest {
    encoding: Option<Encoding>,
}

impl EncodeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write ASCII or binary regardless of the image's own encoding.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    pub fn encode<S: Sample>(&self, image: &Image<S>, stop: impl Stop) -> Result<Vec<u8>, PnmError> {
        let encoding = self.encoding.unwrap_or(image.encoding());
        pnm::encode_image(image, encoding, &stop)
    }
}
