//! Extended-precision sample buffer
//!
//! Used where error accumulation matters, e.g. the state of recursive filters.

use super::{checked_size, out_of_range, zeroed};
use crate::error::BufferError;
use crate::LSmpl;
use ndarray::{ArrayView1, ArrayViewMut1};

/// Fixed-length buffer of double-precision samples
#[derive(Debug, PartialEq)]
pub struct RealVector {
    /// Number of samples
    length: usize,

    /// Sample data
    data: Box<[LSmpl]>,
}

impl RealVector {
    /// Create a buffer of `length` samples
    ///
    /// # Returns
    /// `BufferError::InvalidSize` for a zero length, with nothing allocated;
    /// `BufferError::SizeTooLarge` if the samples cannot be allocated.
    pub fn new(length: usize) -> Result<Self, BufferError> {
        let length = checked_size(length)?;

        Ok(Self {
            length,
            data: zeroed(length, length)?,
        })
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Read the sample at `position`
    ///
    /// Panics if `position >= length`.
    #[inline]
    pub fn read_sample(&self, position: usize) -> LSmpl {
        self.data[position]
    }

    /// Write `data` at `position`
    #[inline]
    pub fn write_sample(&mut self, data: LSmpl, position: usize) {
        self.data[position] = data;
    }

    /// Read a sample without bounds checking
    ///
    /// # Safety
    /// `position` must be less than [`length`](Self::length).
    #[inline]
    pub unsafe fn read_sample_unchecked(&self, position: usize) -> LSmpl {
        debug_assert!(position < self.length);
        *self.data.get_unchecked(position)
    }

    /// Write a sample without bounds checking
    ///
    /// # Safety
    /// `position` must be less than [`length`](Self::length).
    #[inline]
    pub unsafe fn write_sample_unchecked(&mut self, data: LSmpl, position: usize) {
        debug_assert!(position < self.length);
        *self.data.get_unchecked_mut(position) = data;
    }

    pub fn try_read_sample(&self, position: usize) -> Result<LSmpl, BufferError> {
        self.data
            .get(position)
            .copied()
            .ok_or_else(|| out_of_range(position, self.length))
    }

    pub fn try_write_sample(&mut self, data: LSmpl, position: usize) -> Result<(), BufferError> {
        let length = self.length;
        let slot = self
            .data
            .get_mut(position)
            .ok_or_else(|| out_of_range(position, length))?;
        *slot = data;
        Ok(())
    }

    /// Borrow the sample array
    #[inline]
    pub fn data(&self) -> &[LSmpl] {
        &self.data
    }

    /// Mutably borrow the sample array
    #[inline]
    pub fn data_mut(&mut self) -> &mut [LSmpl] {
        &mut self.data
    }

    pub fn data_view(&self) -> ArrayView1<'_, LSmpl> {
        ArrayView1::from(&self.data[..])
    }

    pub fn data_view_mut(&mut self) -> ArrayViewMut1<'_, LSmpl> {
        ArrayViewMut1::from(&mut self.data[..])
    }

    /// Set every sample to `val`
    pub fn set_all(&mut self, val: LSmpl) {
        self.data.fill(val);
    }

    pub fn zeros(&mut self) {
        self.set_all(0.0);
    }

    pub fn ones(&mut self) {
        self.set_all(1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create() {
        let v = RealVector::new(10).unwrap();
        assert_eq!(v.length(), 10);
        assert_eq!(v.data().len(), 10);

        assert_eq!(RealVector::new(0), Err(BufferError::InvalidSize(0)));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_oversized_length_is_rejected() {
        assert_eq!(
            RealVector::new(1 << 62),
            Err(BufferError::SizeTooLarge(1 << 62))
        );
        assert_eq!(
            RealVector::new(usize::MAX),
            Err(BufferError::SizeTooLarge(usize::MAX))
        );
    }

    #[test]
    fn test_read_write_round_trip() {
        let mut v = RealVector::new(4).unwrap();

        // Value that does not survive a round trip through f32
        let precise = 1.0 + 1e-12;
        v.write_sample(precise, 2);
        assert_eq!(v.read_sample(2), precise);
        assert_eq!(v.read_sample(1), 0.0);

        unsafe {
            v.write_sample_unchecked(-0.5, 3);
            assert_eq!(v.read_sample_unchecked(3), -0.5);
        }
    }

    #[test]
    fn test_checked_access() {
        let mut v = RealVector::new(4).unwrap();

        assert_eq!(v.try_write_sample(2.0, 0), Ok(()));
        assert_eq!(v.try_read_sample(0), Ok(2.0));
        assert_eq!(
            v.try_read_sample(4),
            Err(BufferError::IndexOutOfRange { index: 4, length: 4 })
        );
        assert!(v.try_write_sample(1.0, 9).is_err());
    }

    #[test]
    #[should_panic]
    fn test_write_past_end_panics() {
        let mut v = RealVector::new(4).unwrap();
        v.write_sample(1.0, 4);
    }

    #[test]
    fn test_bulk_fill() {
        let mut v = RealVector::new(100).unwrap();

        v.ones();
        assert!(v.data().iter().all(|&x| x == 1.0));

        v.set_all(0.3);
        assert!(v.data().iter().all(|&x| x == 0.3));
        assert!((v.data_view().sum() - 30.0).abs() < 1e-9);

        v.zeros();
        assert!(v.data().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = RealVector::new(8).unwrap();
        let b = RealVector::new(8).unwrap();

        a.data_mut()[0] = 5.0;
        a.data_view_mut()[7] = 6.0;

        assert_eq!(a.read_sample(0), 5.0);
        assert_eq!(a.read_sample(7), 6.0);
        assert!(b.data().iter().all(|&x| x == 0.0));
    }
}
