//! PyO3 bindings for Python integration

use pyo3::exceptions::{PyIndexError, PyMemoryError, PyValueError};
use pyo3::prelude::*;
use crate::error::BufferError;

mod cvec_bindings;
mod lvec_bindings;

impl From<BufferError> for PyErr {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::IndexOutOfRange { .. } => PyIndexError::new_err(err.to_string()),
            BufferError::SizeTooLarge(_) => PyMemoryError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Convert a Python-side size, rejecting negative values before any allocation
fn size_from_py(size: i64) -> Result<usize, BufferError> {
    usize::try_from(size).map_err(|_| BufferError::InvalidSize(size))
}

/// Python module definition
#[pymodule]
fn spectral_buffers(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<cvec_bindings::PyCvec>()?;
    m.add_class::<lvec_bindings::PyLvec>()?;
    
    Ok(())
}
