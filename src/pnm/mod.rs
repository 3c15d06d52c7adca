//! Netpbm family: P1/P4 (PBM), P2/P5 (PGM), P3/P6 (PPM).
//!
//! The format is chosen once from the magic token and carried as a
//! [`PnmFormat`] value; the per-kind sample codec is picked statically
//! through the [`Sample`](crate::Sample) type of the image.

mod decode;
mod encode;
mod header;
pub(crate) mod reader;
pub(crate) mod sample;

pub use header::PnmHeader;

pub(crate) use decode::{decode_any, decode_typed};
pub(crate) use encode::encode_image;

use crate::pixel::ImageKind;

/// ASCII (plain) or binary (raw) sample encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// Whitespace-separated decimal tokens, one row per line.
    Ascii,
    /// Packed bits (PBM) or raw bytes (PGM, PPM).
    #[default]
    Binary,
}

/// One of the six Netpbm variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PnmFormat {
    /// P1
    PbmAscii,
    /// P2
    PgmAscii,
    /// P3
    PpmAscii,
    /// P4
    PbmBinary,
    /// P5
    PgmBinary,
    /// P6
    PpmBinary,
}

impl PnmFormat {
    /// Variant for an image kind and encoding.
    pub const fn new(kind: ImageKind, encoding: Encoding) -> Self {
        match (kind, encoding) {
            (ImageKind::Bitmap, Encoding::Ascii) => Self::PbmAscii,
            (ImageKind::Graymap, Encoding::Ascii) => Self::PgmAscii,
            (ImageKind::Pixmap, Encoding::Ascii) => Self::PpmAscii,
            (ImageKind::Bitmap, Encoding::Binary) => Self::PbmBinary,
            (ImageKind::Graymap, Encoding::Binary) => Self::PgmBinary,
            (ImageKind::Pixmap, Encoding::Binary) => Self::PpmBinary,
        }
    }

    /// Parse a magic token (`P1`..`P6`).
    pub fn from_magic(token: &[u8]) -> Option<Self> {
        match token {
            b"P1" => Some(Self::PbmAscii),
            b"P2" => Some(Self::PgmAscii),
            b"P3" => Some(Self::PpmAscii),
            b"P4" => Some(Self::PbmBinary),
            b"P5" => Some(Self::PgmBinary),
            b"P6" => Some(Self::PpmBinary),
            _ => None,
        }
    }

    pub const fn magic(self) -> &'static str {
        match self {
            Self::PbmAscii => "P1",
            Self::PgmAscii => "P2",
            Self::PpmAscii => "P3",
            Self::PbmBinary => "P4",
            Self::PgmBinary => "P5",
            Self::PpmBinary => "P6",
        }
    }

    pub const fn kind(self) -> ImageKind {
        match self {
            Self::PbmAscii | Self::PbmBinary => ImageKind::Bitmap,
            Self::PgmAscii | Self::PgmBinary => ImageKind::Graymap,
            Self::PpmAscii | Self::PpmBinary => ImageKind::Pixmap,
        }
    }

    pub const fn encoding(self) -> Encoding {
        match self {
            Self::PbmAscii | Self::PgmAscii | Self::PpmAscii => Encoding::Ascii,
            Self::PbmBinary | Self::PgmBinary | Self::PpmBinary => Encoding::Binary,
        }
    }

    /// Whether the header carries a max-value line (PGM and PPM only).
    pub const fn has_max_value(self) -> bool {
        !matches!(self.kind(), ImageKind::Bitmap)
    }
}

impl core::fmt::Display for PnmFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.magic())
    }
}
