//! Python bindings for the spectral buffer

use pyo3::prelude::*;
use pyo3::exceptions::PyValueError;
use numpy::{PyArray1, PyReadonlyArray1};
use crate::buffers::SpectralVector;
use crate::error::BufferError;
use crate::Smpl;
use super::size_from_py;

/// Magnitude/phase buffer exposed to Python
#[pyclass(name = "cvec")]
pub struct PyCvec {
    inner: SpectralVector,
}

#[pymethods]
impl PyCvec {
    /// Create a spectral buffer
    /// 
    /// Args:
    ///     size: Transform size N; the buffer holds N/2 + 1 bins
    /// 
    /// Raises:
    ///     ValueError: if size is not positive
    #[new]
    #[pyo3(signature = (size=1024))]
    fn new(size: i64) -> PyResult<Self> {
        let inner = SpectralVector::new(size_from_py(size)?)?;
        Ok(Self { inner })
    }
    
    /// Number of frequency bins
    #[getter]
    fn length(&self) -> usize {
        self.inner.length()
    }
    
    fn __len__(&self) -> usize {
        self.inner.length()
    }
    
    /// Read one magnitude (bounds-checked, raises IndexError)
    fn read_norm(&self, position: usize) -> PyResult<Smpl> {
        Ok(self.inner.try_read_norm(position)?)
    }
    
    /// Read one phase (bounds-checked, raises IndexError)
    fn read_phas(&self, position: usize) -> PyResult<Smpl> {
        Ok(self.inner.try_read_phas(position)?)
    }
    
    fn write_norm(&mut self, data: Smpl, position: usize) -> PyResult<()> {
        Ok(self.inner.try_write_norm(data, position)?)
    }
    
    fn write_phas(&mut self, data: Smpl, position: usize) -> PyResult<()> {
        Ok(self.inner.try_write_phas(data, position)?)
    }
    
    /// Magnitudes as a numpy array (copy)
    fn get_norm<'py>(&self, py: Python<'py>) -> &'py PyArray1<Smpl> {
        PyArray1::from_slice(py, self.inner.norm())
    }
    
    /// Phases as a numpy array (copy)
    fn get_phas<'py>(&self, py: Python<'py>) -> &'py PyArray1<Smpl> {
        PyArray1::from_slice(py, self.inner.phas())
    }
    
    /// Overwrite all magnitudes from a numpy array of matching length
    fn set_norm(&mut self, values: PyReadonlyArray1<Smpl>) -> PyResult<()> {
        let values = values
            .as_slice()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        check_len(values.len(), self.inner.length())?;
        self.inner.norm_mut().copy_from_slice(values);
        Ok(())
    }
    
    /// Overwrite all phases from a numpy array of matching length
    fn set_phas(&mut self, values: PyReadonlyArray1<Smpl>) -> PyResult<()> {
        let values = values
            .as_slice()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        check_len(values.len(), self.inner.length())?;
        self.inner.phas_mut().copy_from_slice(values);
        Ok(())
    }
    
    fn set_all_norm(&mut self, val: Smpl) {
        self.inner.set_all_norm(val);
    }
    
    fn set_all_phas(&mut self, val: Smpl) {
        self.inner.set_all_phas(val);
    }
    
    fn zeros_norm(&mut self) {
        self.inner.zeros_norm();
    }
    
    fn ones_norm(&mut self) {
        self.inner.ones_norm();
    }
    
    fn zeros_phas(&mut self) {
        self.inner.zeros_phas();
    }
    
    fn ones_phas(&mut self) {
        self.inner.ones_phas();
    }
    
    fn zeros(&mut self) {
        self.inner.zeros_all();
    }
    
    /// Take logarithmic magnitude: norm = log(lmbda * norm + 1)
    fn logmag(&mut self, lmbda: Smpl) {
        self.inner.log_mag(lmbda);
    }
    
    /// Copy this buffer into `dst`
    /// 
    /// Raises:
    ///     ValueError: if the two buffers have different lengths
    fn copy_to(&self, mut dst: PyRefMut<'_, PyCvec>) -> PyResult<()> {
        Ok(self.inner.copy_to(&mut dst.inner)?)
    }
    
    #[cfg(feature = "print")]
    fn print(&self) {
        self.inner.print();
    }
    
    #[cfg(feature = "print")]
    fn __str__(&self) -> String {
        self.inner.display().to_string()
    }
}

fn check_len(src: usize, dst: usize) -> Result<(), BufferError> {
    if src != dst {
        return Err(BufferError::LengthMismatch { src, dst });
    }
    Ok(())
}
