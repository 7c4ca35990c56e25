//! Python bindings for the double-precision buffer

use pyo3::prelude::*;
use numpy::PyArray1;
use crate::buffers::RealVector;
use crate::LSmpl;
use super::size_from_py;

/// Double-precision sample buffer exposed to Python
#[pyclass(name = "lvec")]
pub struct PyLvec {
    inner: RealVector,
}

#[pymethods]
impl PyLvec {
    /// Create a sample buffer
    /// 
    /// Args:
    ///     length: Number of samples
    /// 
    /// Raises:
    ///     ValueError: if length is not positive
    #[new]
    #[pyo3(signature = (length=1024))]
    fn new(length: i64) -> PyResult<Self> {
        let inner = RealVector::new(size_from_py(length)?)?;
        Ok(Self { inner })
    }
    
    #[getter]
    fn length(&self) -> usize {
        self.inner.length()
    }
    
    fn __len__(&self) -> usize {
        self.inner.length()
    }
    
    /// Read one sample (bounds-checked, raises IndexError)
    fn read_sample(&self, position: usize) -> PyResult<LSmpl> {
        Ok(self.inner.try_read_sample(position)?)
    }
    
    fn write_sample(&mut self, data: LSmpl, position: usize) -> PyResult<()> {
        Ok(self.inner.try_write_sample(data, position)?)
    }
    
    /// Samples as a numpy array (copy)
    fn get_data<'py>(&self, py: Python<'py>) -> &'py PyArray1<LSmpl> {
        PyArray1::from_slice(py, self.inner.data())
    }
    
    fn set_all(&mut self, val: LSmpl) {
        self.inner.set_all(val);
    }
    
    fn zeros(&mut self) {
        self.inner.zeros();
    }
    
    fn ones(&mut self) {
        self.inner.ones();
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
