use core::fmt;

use crate::grid::PixelFormat;

/// Broad classification of codec errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is not something the codec knows how to read
    Type,
    /// The input has the right type but is structurally invalid
    Value,
}

/// Error type for all codec operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Pixel buffer format is neither binary nor grayscale and can't be converted
    UnsupportedPixelFormat(PixelFormat),
    /// Raw input holds fewer bytes than the dimensions require
    InputTooShort { expected: usize, actual: usize },
    /// Width or height is zero
    EmptyImage,
    /// Sample count does not match width * height
    DimensionMismatch { expected: usize, actual: usize },
    /// Size of the packed buffer does not fit in usize
    TooLarge,
    /// C array line width must hold at least one byte
    InvalidLineWidth,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedPixelFormat(_) => ErrorKind::Type,
            Error::InputTooShort { .. }
            | Error::EmptyImage
            | Error::DimensionMismatch { .. }
            | Error::TooLarge
            | Error::InvalidLineWidth => ErrorKind::Value,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedPixelFormat(format) => {
                write!(f, "unsupported pixel format: {}", format.repr())
            }
            Error::InputTooShort { expected, actual } => write!(
                f,
                "raw input image too short: expected {expected} bytes, got {actual}"
            ),
            Error::EmptyImage => f.write_str("image has zero width or height"),
            Error::DimensionMismatch { expected, actual } => write!(
                f,
                "pixel count mismatch: expected {expected} samples, got {actual}"
            ),
            Error::TooLarge => f.write_str("image dimensions overflow the packed buffer size"),
            Error::InvalidLineWidth => f.write_str("line width must be at least 1"),
        }
    }
}

impl core::error::Error for Error {}
