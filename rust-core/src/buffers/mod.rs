//! Fixed-size numeric buffers
//!
//! Each buffer owns its arrays for its whole lifetime: no resizing, no slicing
//! into shared storage. Dropping a buffer releases everything it allocated.

pub mod real;
pub mod spectral;

pub use real::RealVector;
pub use spectral::SpectralVector;

use crate::error::BufferError;

/// Validate a requested size before anything is allocated.
pub(crate) fn checked_size(size: usize) -> Result<usize, BufferError> {
    match i64::try_from(size) {
        Ok(signed) if signed > 0 => Ok(size),
        Ok(signed) => Err(BufferError::InvalidSize(signed)),
        Err(_) => Err(BufferError::SizeTooLarge(size)),
    }
}

/// Allocate `length` zeroed elements without panicking on overflow
///
/// # Arguments
/// * `length` - Number of elements to allocate
/// * `size` - Size the caller asked for, reported on failure
pub(crate) fn zeroed<T: Copy + Default>(
    length: usize,
    size: usize,
) -> Result<Box<[T]>, BufferError> {
    let mut data = Vec::new();
    data.try_reserve_exact(length)
        .map_err(|_| BufferError::SizeTooLarge(size))?;
    data.resize(length, T::default());
    Ok(data.into_boxed_slice())
}

/// Build the out-of-range error for the checked access tier
#[inline]
pub(crate) fn out_of_range(index: usize, length: usize) -> BufferError {
    BufferError::IndexOutOfRange { index, length }
}
