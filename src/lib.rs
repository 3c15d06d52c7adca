//! # zenpbm
//!
//! Netpbm image codec (PBM, PGM, PPM in both ASCII and binary encodings)
//! with a small raster engine for drawing onto decoded images.
//!
//! ## Supported Formats
//!
//! | Magic | Kind | Encoding | Sample |
//! |---|---|---|---|
//! | `P1` / `P4` | bitmap | ASCII / packed bits, MSB first | `bool` (`true` = ink) |
//! | `P2` / `P5` | graymap | ASCII / one byte | `u8` |
//! | `P3` / `P6` | pixmap | ASCII / three bytes | [`RGB8`] |
//!
//! Headers are three newline-terminated records (magic, `width height`,
//! max value for PGM/PPM); comments are not supported. ASCII pixel data is
//! one image row per line.
//!
//! ## Non-Goals
//!
//! - Compression, 16-bit samples, PAM/PFM
//! - Color management beyond average or luminosity grayscale
//! - Anti-aliased drawing, streaming decode
//!
//! ## Usage
//!
//! ```
//! use zenpbm::draw::{Draw, Point};
//! use zenpbm::{Encoding, Pixmap, RGB8};
//!
//! let mut img = Pixmap::new(8, 8, Encoding::Binary)?;
//! img.draw_filled_circle(Point::new(4, 4), 3, RGB8::new(255, 0, 0));
//! img.rotate_90_cw();
//!
//! let bytes = img.encode()?;
//! let back = Pixmap::decode(&bytes)?;
//! assert_eq!(back, img);
//!
//! let ink = back.to_bitmap();
//! assert_eq!(ink.format().magic(), "P1");
//! # Ok::<(), zenpbm::PnmError>(())
//! ```

#![forbid(unsafe_code)]

extern crate alloc;

mod buffer;
mod decode;
mod encode;
mod error;
mod fs;
mod image;
mod info;
mod limits;
mod log;
mod pixel;

pub mod draw;
pub mod pnm;

// Re-exports
pub use buffer::PixelBuffer;
pub use decode::DecodeRequest;
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::PnmError;
pub use image::{AnyImage, Bitmap, Graymap, Image, Pixmap};
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::{ImageKind, RGB8, Sample, Tonal, luminosity};
pub use pnm::{Encoding, PnmFormat};

/// Decode any Netpbm variant.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<AnyImage, PnmError> {
    DecodeRequest::new(data).decode(stop)
}
