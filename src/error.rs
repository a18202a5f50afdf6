//! Error type returned when a barcode can not be generated.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Height or narrow bar width below one pixel.
    #[error("height and narrow bar width must be at least 1 pixel")]
    BadInput,

    /// The message contains a character Code 39 can not encode.
    #[error("invalid character {0:?}: Code 39 only encodes 0-9, A-Z, space and - . $ / + % *")]
    InvalidCharacter(char),

    /// The bitmap for the requested geometry could not be allocated.
    #[error("ran out of memory while allocating the bitmap")]
    OutOfMemory,
}

impl Error {
    /// Numeric result code, with `0` reserved for success.
    pub const fn code(&self) -> i32 {
        match self {
            Error::BadInput => 1,
            Error::InvalidCharacter(_) => 2,
            Error::OutOfMemory => 3,
        }
    }
}
