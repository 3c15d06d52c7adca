use core::fmt::Debug;

pub use rgb::RGB8;

use crate::pnm::sample::SampleCodec;

/// Image family, independent of the ASCII/binary encoding.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageKind {
    /// 1 bit per pixel (PBM).
    Bitmap,
    /// 8-bit grayscale (PGM).
    Graymap,
    /// 24-bit RGB (PPM).
    Pixmap,
}

/// A sample type that can be stored in an [`Image`](crate::Image).
///
/// Implemented for `bool` (bitmap, `true` = ink), `u8` (grayscale) and
/// [`RGB8`] (color). Sealed.
pub trait Sample: SampleCodec + Copy + PartialEq + Debug + Default + 'static {
    /// Image family this sample belongs to.
    const KIND: ImageKind;

    /// Max value a fresh image of this kind gets.
    const DEFAULT_MAX: u8;

    /// Complement relative to `max_value`.
    fn invert(self, max_value: u8) -> Self;

    /// Largest channel, used to check against the image max value.
    fn peak(self) -> u8;

    /// Clamp every channel to `max_value`.
    fn clamp_to(self, max_value: u8) -> Self;
}

/// Samples with numeric channels that can be rescaled and thresholded.
pub trait Tonal: Sample {
    /// Apply `f` to every channel.
    fn map_channels(self, f: impl Fn(u8) -> u8) -> Self;

    /// Scalar intensity: the value itself for gray, the channel average for RGB.
    fn intensity(self) -> u8;
}

impl Sample for bool {
    const KIND: ImageKind = ImageKind::Bitmap;
    const DEFAULT_MAX: u8 = 1;

    #[inline]
    fn invert(self, _max_value: u8) -> Self {
        !self
    }

    #[inline]
    fn peak(self) -> u8 {
        u8::from(self)
    }

    #[inline]
    fn clamp_to(self, _max_value: u8) -> Self {
        self
    }
}

impl Sample for u8 {
    const KIND: ImageKind = ImageKind::Graymap;
    const DEFAULT_MAX: u8 = 255;

    #[inline]
    fn invert(self, max_value: u8) -> Self {
        max_value.saturating_sub(self)
    }

    #[inline]
    fn peak(self) -> u8 {
        self
    }

    #[inline]
    fn clamp_to(self, max_value: u8) -> Self {
        self.min(max_value)
    }
}

impl Tonal for u8 {
    #[inline]
    fn map_channels(self, f: impl Fn(u8) -> u8) -> Self {
        f(self)
    }

    #[inline]
    fn intensity(self) -> u8 {
        self
    }
}

impl Sample for RGB8 {
    const KIND: ImageKind = ImageKind::Pixmap;
    const DEFAULT_MAX: u8 = 255;

    #[inline]
    fn invert(self, max_value: u8) -> Self {
        self.map_channels(|c| max_value.saturating_sub(c))
    }

    #[inline]
    fn peak(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    #[inline]
    fn clamp_to(self, max_value: u8) -> Self {
        self.map_channels(|c| c.min(max_value))
    }
}

impl Tonal for RGB8 {
    #[inline]
    fn map_channels(self, f: impl Fn(u8) -> u8) -> Self {
        RGB8::new(f(self.r), f(self.g), f(self.b))
    }

    #[inline]
    fn intensity(self) -> u8 {
        ((u16::from(self.r) + u16::from(self.g) + u16::from(self.b)) / 3) as u8
    }
}

/// Luminosity-weighted gray level, `0.299 R + 0.587 G + 0.114 B`, rounded.
#[inline]
pub fn luminosity(px: RGB8) -> u8 {
    let r = u32::from(px.r);
    let g = u32::from(px.g);
    let b = u32::from(px.b);
    ((r * 299 + g * 587 + b * 114 + 500) / 1000) as u8
}
