use crate::dtype::DType;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Two operands disagree on a non-1 extent at the same (padded) axis.
    ShapeMismatch {
        dim: usize,
        lhs: usize,
        rhs: usize,
    },
    /// An explicitly supplied output does not have the broadcast shape.
    OutputShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },
    InvalidPadding {
        padding: isize,
    },
    InvalidShape {
        message: String,
    },
    DTypeMismatch {
        expected: DType,
        got: DType,
    },
    UnsupportedDType(DType),
    IndexOutOfBounds {
        index: usize,
        size: usize,
    },
    InvalidArgument(String),
    BufferLocked,
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { dim, lhs, rhs } => {
                write!(
                    f,
                    "Shape mismatch at dimension {}: extents {} and {} are neither equal nor 1",
                    dim, lhs, rhs
                )
            }
            Self::OutputShapeMismatch { expected, got } => {
                write!(f, "Output shape mismatch: expected broadcast shape {:?}, got {:?}", expected, got)
            }
            Self::InvalidPadding { padding } => {
                write!(f, "Invalid padding: padding must be zero or greater, got {}", padding)
            }
            Self::InvalidShape { message } => write!(f, "Invalid shape: {}", message),
            Self::DTypeMismatch { expected, got } => {
                write!(f, "DType mismatch: expected {:?}, got {:?}", expected, got)
            }
            Self::UnsupportedDType(dtype) => write!(f, "Unsupported data type: {}", dtype.as_str()),
            Self::IndexOutOfBounds { index, size } => {
                write!(f, "Index out of bounds: index {} is out of bounds for storage with {} slots", index, size)
            }
            Self::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Self::BufferLocked => write!(f, "Buffer is locked"),
        }
    }
}

impl std::error::Error for Error {}
