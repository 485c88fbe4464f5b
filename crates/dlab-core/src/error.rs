use core::fmt;

/// Broad classification of [`Error`].
///
/// Every failure in this workspace is a caller bug detected before any
/// output is written, so there is a single kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SizeMismatch { expected: usize, actual: usize },
    OddDimension { width: usize, height: usize },
    ZeroDimension,
    DimensionOverflow,
    InvalidStride,
    NonContiguous,
    MaskMismatch { expected: usize, actual: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::OddDimension { width, height } => {
                write!(f, "dimensions must be even, got {width}x{height}")
            }
            Self::ZeroDimension => write!(f, "dimensions must be non-zero"),
            Self::DimensionOverflow => write!(f, "image size overflows usize"),
            Self::InvalidStride => write!(f, "invalid stride"),
            Self::NonContiguous => write!(f, "view is not contiguous"),
            Self::MaskMismatch { expected, actual } => {
                write!(
                    f,
                    "mask built for width {actual}, geometry width is {expected}"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
