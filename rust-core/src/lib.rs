//! Spectral Buffers - Numeric Buffer Core for DSP Pipelines
//! 
//! Polar spectral frames and extended-precision sample vectors, the containers
//! transforms, filters and detectors read from and write into.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod buffers;
pub mod error;
#[cfg(feature = "print")]
pub mod print;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use buffers::{RealVector, SpectralVector};
pub use error::BufferError;
pub use num_complex::Complex;
#[cfg(feature = "print")]
pub use print::PrintFormat;

/// Standard sample precision
#[cfg(not(feature = "double"))]
pub type Smpl = f32;

/// Standard sample precision
#[cfg(feature = "double")]
pub type Smpl = f64;

/// Extended sample precision, used by [`RealVector`]
pub type LSmpl = f64;
