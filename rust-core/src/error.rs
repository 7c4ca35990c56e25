//! Error types for buffer construction, copy and checked access

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("Invalid buffer size: {0} (must be a positive integer)")]
    InvalidSize(i64),

    #[error("Buffer size {0} is too large to allocate")]
    SizeTooLarge(usize),

    #[error("Trying to copy {src} elements to {dst} elements")]
    LengthMismatch { src: usize, dst: usize },

    #[error("Index {index} out of range for buffer of length {length}")]
    IndexOutOfRange { index: usize, length: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BufferError::LengthMismatch { src: 513, dst: 257 };
        assert_eq!(err.to_string(), "Trying to copy 513 elements to 257 elements");

        let err = BufferError::InvalidSize(-4);
        assert!(err.to_string().contains("-4"));

        let err = BufferError::SizeTooLarge(usize::MAX);
        assert!(err.to_string().contains(&usize::MAX.to_string()));
    }
}
