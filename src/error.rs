use alloc::string::String;
use enough::StopReason;

/// Errors from Netpbm decoding, encoding and checked pixel access.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PnmError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unrecognized format: {0}")]
    InvalidFormat(String),

    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("invalid max value: {0}")]
    InvalidMaxValue(String),

    #[error("truncated pixel data at row {row}")]
    TruncatedData { row: usize },

    #[error("invalid sample at row {row}, column {column}")]
    InvalidSample { row: usize, column: usize },

    #[error("sample {value} at row {row}, column {column} exceeds max value {max_value}")]
    SampleOutOfRange {
        row: usize,
        column: usize,
        value: u8,
        max_value: u8,
    },

    #[error("pixel ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: usize, height: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for PnmError {
    fn from(r: StopReason) -> Self {
        PnmError::Cancelled(r)
    }
}
