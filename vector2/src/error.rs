use core::fmt;

/// Error on component access and buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A component index other than 0 (`x`) or 1 (`y`).
    IndexOutOfRange { index: usize },
    /// A buffer holding fewer than the two required scalars.
    BufferTooShort { len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::IndexOutOfRange { index } => write!(
                f,
                "component index out of range: the index is {} but must be 0 or 1",
                index
            ),
            Error::BufferTooShort { len } => write!(
                f,
                "buffer too short: the length is {} but at least 2 elements are required",
                len
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
