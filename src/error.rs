use thiserror::Error;

/// Errors raised by buffer access, operators, the collage composer and the codec adapters.
///
/// Every operator validates its own preconditions and returns one of these
/// without producing a partial buffer. Input buffers are never touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    #[error("coordinate ({x}, {y}) is outside a {width}x{height} buffer")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    #[error("invalid buffer dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("dimension mismatch: expected {expected_width}x{expected_height}, got {width}x{height}")]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("encode failed: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, RasterError>;
