//! Spectral frame buffer in polar form
//!
//! Holds one frame of frequency-domain data as two parallel arrays,
//! magnitudes (`norm`) and phases (`phas`), indexed by frequency bin.

use super::{checked_size, out_of_range, zeroed};
use crate::error::BufferError;
use crate::Smpl;
use ndarray::{ArrayView1, ArrayViewMut1};
use num_complex::Complex;

/// Magnitude/phase buffer for the non-redundant bins of a real transform
#[derive(Debug, PartialEq)]
pub struct SpectralVector {
    /// Number of frequency bins (size / 2 + 1)
    length: usize,

    /// Magnitude of each bin
    norm: Box<[Smpl]>,

    /// Phase of each bin, same indexing as `norm`
    phas: Box<[Smpl]>,
}

impl SpectralVector {
    /// Create a spectral buffer for a transform of `size` samples
    ///
    /// # Arguments
    /// * `size` - Transform size N; the buffer holds N/2 + 1 bins
    ///
    /// # Returns
    /// `BufferError::InvalidSize` for a zero size, with nothing allocated;
    /// `BufferError::SizeTooLarge` if the bins cannot be allocated.
    /// Callers needing a clean frame should still call [`zeros_all`](Self::zeros_all).
    pub fn new(size: usize) -> Result<Self, BufferError> {
        let size = checked_size(size)?;
        let length = size / 2 + 1;

        Ok(Self {
            length,
            norm: zeroed(length, size)?,
            phas: zeroed(length, size)?,
        })
    }

    /// Number of frequency bins
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Read the magnitude at bin `position`
    ///
    /// Panics if `position >= length`.
    #[inline]
    pub fn read_norm(&self, position: usize) -> Smpl {
        self.norm[position]
    }

    /// Read the phase at bin `position`
    ///
    /// Panics if `position >= length`.
    #[inline]
    pub fn read_phas(&self, position: usize) -> Smpl {
        self.phas[position]
    }

    /// Write `data` as the magnitude of bin `position`
    #[inline]
    pub fn write_norm(&mut self, data: Smpl, position: usize) {
        self.norm[position] = data;
    }

    /// Write `data` as the phase of bin `position`
    #[inline]
    pub fn write_phas(&mut self, data: Smpl, position: usize) {
        self.phas[position] = data;
    }

    /// Read a magnitude without bounds checking
    ///
    /// # Safety
    /// `position` must be less than [`length`](Self::length).
    #[inline]
    pub unsafe fn read_norm_unchecked(&self, position: usize) -> Smpl {
        debug_assert!(position < self.length);
        *self.norm.get_unchecked(position)
    }

    /// Read a phase without bounds checking
    ///
    /// # Safety
    /// `position` must be less than [`length`](Self::length).
    #[inline]
    pub unsafe fn read_phas_unchecked(&self, position: usize) -> Smpl {
        debug_assert!(position < self.length);
        *self.phas.get_unchecked(position)
    }

    /// Write a magnitude without bounds checking
    ///
    /// # Safety
    /// `position` must be less than [`length`](Self::length).
    #[inline]
    pub unsafe fn write_norm_unchecked(&mut self, data: Smpl, position: usize) {
        debug_assert!(position < self.length);
        *self.norm.get_unchecked_mut(position) = data;
    }

    /// Write a phase without bounds checking
    ///
    /// # Safety
    /// `position` must be less than [`length`](Self::length).
    #[inline]
    pub unsafe fn write_phas_unchecked(&mut self, data: Smpl, position: usize) {
        debug_assert!(position < self.length);
        *self.phas.get_unchecked_mut(position) = data;
    }

    /// Bounds-checked magnitude read
    pub fn try_read_norm(&self, position: usize) -> Result<Smpl, BufferError> {
        self.norm
            .get(position)
            .copied()
            .ok_or_else(|| out_of_range(position, self.length))
    }

    /// Bounds-checked phase read
    pub fn try_read_phas(&self, position: usize) -> Result<Smpl, BufferError> {
        self.phas
            .get(position)
            .copied()
            .ok_or_else(|| out_of_range(position, self.length))
    }

    /// Bounds-checked magnitude write
    pub fn try_write_norm(&mut self, data: Smpl, position: usize) -> Result<(), BufferError> {
        let length = self.length;
        let slot = self
            .norm
            .get_mut(position)
            .ok_or_else(|| out_of_range(position, length))?;
        *slot = data;
        Ok(())
    }

    /// Bounds-checked phase write
    pub fn try_write_phas(&mut self, data: Smpl, position: usize) -> Result<(), BufferError> {
        let length = self.length;
        let slot = self
            .phas
            .get_mut(position)
            .ok_or_else(|| out_of_range(position, length))?;
        *slot = data;
        Ok(())
    }

    /// Borrow the magnitude array
    #[inline]
    pub fn norm(&self) -> &[Smpl] {
        &self.norm
    }

    /// Borrow the phase array
    #[inline]
    pub fn phas(&self) -> &[Smpl] {
        &self.phas
    }

    /// Mutably borrow the magnitude array
    #[inline]
    pub fn norm_mut(&mut self) -> &mut [Smpl] {
        &mut self.norm
    }

    /// Mutably borrow the phase array
    #[inline]
    pub fn phas_mut(&mut self) -> &mut [Smpl] {
        &mut self.phas
    }

    /// Borrow both arrays mutably at once, `(norm, phas)`
    #[inline]
    pub fn split_mut(&mut self) -> (&mut [Smpl], &mut [Smpl]) {
        (&mut self.norm, &mut self.phas)
    }

    /// Magnitudes as an ndarray view
    pub fn norm_view(&self) -> ArrayView1<'_, Smpl> {
        ArrayView1::from(&self.norm[..])
    }

    /// Phases as an ndarray view
    pub fn phas_view(&self) -> ArrayView1<'_, Smpl> {
        ArrayView1::from(&self.phas[..])
    }

    /// Magnitudes as a mutable ndarray view
    pub fn norm_view_mut(&mut self) -> ArrayViewMut1<'_, Smpl> {
        ArrayViewMut1::from(&mut self.norm[..])
    }

    /// Phases as a mutable ndarray view
    pub fn phas_view_mut(&mut self) -> ArrayViewMut1<'_, Smpl> {
        ArrayViewMut1::from(&mut self.phas[..])
    }

    /// Set every magnitude to `val`
    pub fn set_all_norm(&mut self, val: Smpl) {
        self.norm.fill(val);
    }

    /// Set every phase to `val`
    pub fn set_all_phas(&mut self, val: Smpl) {
        self.phas.fill(val);
    }

    pub fn zeros_norm(&mut self) {
        self.set_all_norm(0.0);
    }

    pub fn ones_norm(&mut self) {
        self.set_all_norm(1.0);
    }

    pub fn zeros_phas(&mut self) {
        self.set_all_phas(0.0);
    }

    pub fn ones_phas(&mut self) {
        self.set_all_phas(1.0);
    }

    /// Zero both magnitudes and phases (reset between processing cycles)
    pub fn zeros_all(&mut self) {
        self.zeros_norm();
        self.zeros_phas();
    }

    /// Copy magnitudes and phases into `dst`
    ///
    /// # Returns
    /// `BufferError::LengthMismatch` if the bin counts differ; `dst` is left
    /// untouched in that case.
    pub fn copy_to(&self, dst: &mut SpectralVector) -> Result<(), BufferError> {
        if self.length != dst.length {
            tracing::error!(
                src_len = self.length,
                dst_len = dst.length,
                "trying to copy {} elements to {} elements",
                self.length,
                dst.length
            );
            return Err(BufferError::LengthMismatch {
                src: self.length,
                dst: dst.length,
            });
        }

        dst.norm.copy_from_slice(&self.norm);
        dst.phas.copy_from_slice(&self.phas);
        Ok(())
    }

    /// Compress magnitudes logarithmically: norm = ln(lambda * norm + 1)
    ///
    /// # Arguments
    /// * `lambda` - Compression factor, larger values compress harder
    pub fn log_mag(&mut self, lambda: Smpl) {
        for n in self.norm.iter_mut() {
            *n = (lambda * *n + 1.0).ln();
        }
    }

    /// Fill from a complex spectrum (e.g. the output of a real FFT)
    ///
    /// # Arguments
    /// * `spectrum` - Complex bins, must hold exactly `length` values
    pub fn set_from_complex(&mut self, spectrum: &[Complex<Smpl>]) -> Result<(), BufferError> {
        if spectrum.len() != self.length {
            return Err(BufferError::LengthMismatch {
                src: spectrum.len(),
                dst: self.length,
            });
        }

        for ((n, p), c) in self.norm.iter_mut().zip(self.phas.iter_mut()).zip(spectrum) {
            *n = c.norm();
            *p = c.arg();
        }
        Ok(())
    }

    /// Convert back to rectangular form, one complex value per bin
    pub fn to_complex(&self) -> Vec<Complex<Smpl>> {
        self.norm
            .iter()
            .zip(self.phas.iter())
            .map(|(&n, &p)| Complex::from_polar(n, p))
            .collect()
    }
}
