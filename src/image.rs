//! In-memory Netpbm images: one [`PixelBuffer`] plus format metadata.

use alloc::format;
use alloc::vec::Vec;
use enough::{Stop, Unstoppable};

use crate::buffer::PixelBuffer;
use crate::decode::DecodeRequest;
use crate::encode::EncodeRequest;
use crate::error::PnmError;
use crate::log::trace;
use crate::pixel::{ImageKind, RGB8, Sample, Tonal, luminosity};
use crate::pnm::{Encoding, PnmFormat};

/// A decoded or constructed Netpbm image with samples of type `S`.
///
/// Invariant: every sample channel is `<= max_value`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image<S: Sample> {
    pixels: PixelBuffer<S>,
    encoding: Encoding,
    max_value: u8,
}

/// 1-bit image (P1/P4). `true` is ink (black).
pub type Bitmap = Image<bool>;

/// 8-bit grayscale image (P2/P5).
pub type Graymap = Image<u8>;

/// 24-bit RGB image (P3/P6).
pub type Pixmap = Image<RGB8>;

impl<S: Sample> Image<S> {
    /// Blank `width x height` image with the default max value
    /// (1 for bitmaps, 255 otherwise).
    pub fn new(width: usize, height: usize, encoding: Encoding) -> Result<Self, PnmError> {
        if width == 0 || height == 0 {
            return Err(PnmError::InvalidDimensions(format!(
                "{width}x{height} has an empty side"
            )));
        }
        Ok(Self {
            pixels: PixelBuffer::new(width, height)?,
            encoding,
            max_value: S::DEFAULT_MAX,
        })
    }

    /// Wrap an existing buffer. Fails if any sample exceeds `max_value`.
    pub fn from_buffer(
        pixels: PixelBuffer<S>,
        encoding: Encoding,
        max_value: u8,
    ) -> Result<Self, PnmError> {
        let (width, height) = pixels.size();
        if width == 0 || height == 0 {
            return Err(PnmError::InvalidDimensions(format!(
                "{width}x{height} has an empty side"
            )));
        }
        check_max_value::<S>(max_value)?;
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
        Ok(Self {
            pixels,
            encoding,
            max_value,
        })
    }

    /// Caller guarantees the sample-range invariant.
    pub(crate) fn from_parts(pixels: PixelBuffer<S>, encoding: Encoding, max_value: u8) -> Self {
        Self {
            pixels,
            encoding,
            max_value,
        }
    }

    /// Decode `data`, which must hold an image of this kind.
    pub fn decode(data: &[u8]) -> Result<Self, PnmError> {
        DecodeRequest::new(data).decode_as(Unstoppable)
    }

    /// Encode with the image's own encoding.
    pub fn encode(&self) -> Result<Vec<u8>, PnmError> {
        self.encode_with(Unstoppable)
    }

    /// Encode with the image's own encoding, checking `stop` periodically.
    pub fn encode_with(&self, stop: impl Stop) -> Result<Vec<u8>, PnmError> {
        EncodeRequest::new().encode(self, stop)
    }

    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        self.pixels.size()
    }

    pub fn kind(&self) -> ImageKind {
        S::KIND
    }

    /// Magic-token variant this image encodes to.
    pub fn format(&self) -> PnmFormat {
        PnmFormat::new(S::KIND, self.encoding)
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Switch between the ASCII and binary token of this kind.
    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.encoding = encoding;
    }

    pub fn max_value(&self) -> u8 {
        self.max_value
    }

    pub fn pixels(&self) -> &PixelBuffer<S> {
        &self.pixels
    }

    pub fn into_pixels(self) -> PixelBuffer<S> {
        self.pixels
    }

    /// Sample at `(x, y)`; [`PnmError::OutOfBounds`] outside the image.
    pub fn get(&self, x: usize, y: usize) -> Result<S, PnmError> {
        self.pixels.get_checked(x, y)
    }

    /// Store `value` at `(x, y)`.
    ///
    /// Fails with [`PnmError::OutOfBounds`] outside the image and with
    /// [`PnmError::SampleOutOfRange`] if `value` exceeds the max value.
    /// Raster primitives use the clipping [`Canvas`](crate::draw::Canvas) path instead.
    pub fn set(&mut self, x: usize, y: usize, value: S) -> Result<(), PnmError> {
        if value.peak() > self.max_value {
            // report bounds first so both contracts stay observable
            self.pixels.get_checked(x, y)?;
            return Err(PnmError::SampleOutOfRange {
                row: y,
                column: x,
                value: value.peak(),
                max_value: self.max_value,
            });
        }
        self.pixels.set_checked(x, y, value)
    }

    /// Complement every sample against the image max value.
    pub fn invert(&mut self) {
        let max = self.max_value;
        self.pixels.for_each_mut(|px| *px = px.invert(max));
    }

    /// Horizontal mirror.
    pub fn flip(&mut self) {
        self.pixels.flip_horizontal();
    }

    /// Vertical mirror.
    pub fn flop(&mut self) {
        self.pixels.flip_vertical();
    }

    /// Rotate 90 degrees clockwise; width and height swap.
    pub fn rotate_90_cw(&mut self) {
        // fresh buffer, never rotated in place
        self.pixels = self.pixels.rotated_90_cw();
    }

    pub(crate) fn paint_clamped(&mut self, x: i32, y: i32, value: S) {
        self.pixels.paint(x, y, value.clamp_to(self.max_value));
    }
}

impl<S: Tonal> Image<S> {
    /// Rescale every channel to a new max value (lossy, truncating).
    ///
    /// `channel * new_max / old_max` is computed in floating point and
    /// truncated toward zero.
    pub fn set_max_value(&mut self, max_value: u8) -> Result<(), PnmError> {
        check_max_value::<S>(max_value)?;
        let old = f64::from(self.max_value);
        let new = f64::from(max_value);
        self.pixels.for_each_mut(|px| {
            *px = px.map_channels(|c| (f64::from(c) * new / old) as u8);
        });
        self.max_value = max_value;
        Ok(())
    }

    /// Threshold to a bitmap: ink where the intensity is below `max_value / 2`.
    ///
    /// Color intensity is the floor average of R, G and B.
    pub fn to_bitmap(&self) -> Bitmap {
        let threshold = self.max_value / 2;
        trace!("{:?} -> bitmap, threshold {}", S::KIND, threshold);
        Image::from_parts(
            self.pixels.map(|px| px.intensity() < threshold),
            Encoding::Ascii,
            1,
        )
    }
}

impl Pixmap {
    /// Grayscale by the plain channel average `(R + G + B) / 3`.
    ///
    /// This is the conversion the bitmap threshold is consistent with.
    pub fn to_graymap(&self) -> Graymap {
        trace!("pixmap -> graymap (average)");
        Image::from_parts(
            self.pixels.map(|px| px.intensity()),
            Encoding::Ascii,
            self.max_value,
        )
    }

    /// Grayscale by luminosity, `0.299 R + 0.587 G + 0.114 B` (rounded).
    pub fn to_graymap_luminosity(&self) -> Graymap {
        trace!("pixmap -> graymap (luminosity)");
        Image::from_parts(self.pixels.map(luminosity), Encoding::Ascii, self.max_value)
    }
}

fn check_max_value<S: Sample>(max_value: u8) -> Result<(), PnmError> {
    match S::KIND {
        ImageKind::Bitmap if max_value != 1 => Err(PnmError::InvalidMaxValue(format!(
            "bitmaps have an implicit max of 1, got {max_value}"
        ))),
        _ if max_value == 0 => Err(PnmError::InvalidMaxValue("must be at least 1".into())),
        _ => Ok(()),
    }
}

/// An image of any of the three kinds, as produced by format-agnostic decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyImage {
    Bitmap(Bitmap),
    Graymap(Graymap),
    Pixmap(Pixmap),
}

impl AnyImage {
    pub fn format(&self) -> PnmFormat {
        match self {
            Self::Bitmap(img) => img.format(),
            Self::Graymap(img) => img.format(),
            Self::Pixmap(img) => img.format(),
        }
    }

    pub fn kind(&self) -> ImageKind {
        self.format().kind()
    }

    pub fn width(&self) -> usize {
        self.size().0
    }

    pub fn height(&self) -> usize {
        self.size().1
    }

    pub fn size(&self) -> (usize, usize) {
        match self {
            Self::Bitmap(img) => img.size(),
            Self::Graymap(img) => img.size(),
            Self::Pixmap(img) => img.size(),
        }
    }

    pub fn max_value(&self) -> u8 {
        match self {
            Self::Bitmap(img) => img.max_value(),
            Self::Graymap(img) => img.max_value(),
            Self::Pixmap(img) => img.max_value(),
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, PnmError> {
        match self {
            Self::Bitmap(img) => img.encode(),
            Self::Graymap(img) => img.encode(),
            Self::Pixmap(img) => img.encode(),
        }
    }

    pub fn as_bitmap(&self) -> Option<&Bitmap> {
        match self {
            Self::Bitmap(img) => Some(img),
            _ => None,
        }
    }

    pub fn as_graymap(&self) -> Option<&Graymap> {
        match self {
            Self::Graymap(img) => Some(img),
            _ => None,
        }
    }

    pub fn as_pixmap(&self) -> Option<&Pixmap> {
        match self {
            Self::Pixmap(img) => Some(img),
            _ => None,
        }
    }

    pub fn into_bitmap(self) -> Option<Bitmap> {
        match self {
            Self::Bitmap(img) => Some(img),
            _ => None,
        }
    }

    pub fn into_graymap(self) -> Option<Graymap> {
        match self {
            Self::Graymap(img) => Some(img),
            _ => None,
        }
    }

    pub fn into_pixmap(self) -> Option<Pixmap> {
        match self {
            Self::Pixmap(img) => Some(img),
            _ => None,
        }
    }
}

impl From<Bitmap> for AnyImage {
    fn from(img: Bitmap) -> Self {
        Self::Bitmap(img)
    }
}

impl From<Graymap> for AnyImage {
    fn from(img: Graymap) -> Self {
        Self::Graymap(img)
    }
}

impl From<Pixmap> for AnyImage {
    fn from(img: Pixmap) -> Self {
        Self::Pixmap(img)
    }
}
