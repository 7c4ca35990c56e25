//! Diagnostic dumps of buffer contents
//!
//! Kept apart from the containers so builds without the `print` feature carry
//! none of it. Values are written in index order with a fixed number of
//! decimals; where they end up is decided by the installed `tracing`
//! subscriber.

use crate::buffers::{RealVector, SpectralVector};
use std::fmt;

/// Target used for every event emitted by the `print` operations
pub const PRINT_TARGET: &str = "spectral_buffers::print";

/// Formatting options for buffer dumps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintFormat {
    /// Decimals written per element
    pub precision: usize,
}

impl Default for PrintFormat {
    fn default() -> Self {
        Self { precision: 6 }
    }
}

/// One labelled line of values, e.g. `norm: 1.000000 0.500000`
pub struct ValuesDisplay<'a, T> {
    label: Option<&'static str>,
    values: &'a [T],
    format: PrintFormat,
}

impl<T: fmt::Display> fmt::Display for ValuesDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = self.label {
            write!(f, "{}:", label)?;
        }
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 || self.label.is_some() {
                f.write_str(" ")?;
            }
            write!(f, "{:.*}", self.format.precision, value)?;
        }
        Ok(())
    }
}

/// Magnitude line followed by phase line
pub struct SpectralDisplay<'a> {
    vector: &'a SpectralVector,
    format: PrintFormat,
}

impl<'a> SpectralDisplay<'a> {
    pub fn norm_line(&self) -> ValuesDisplay<'a, crate::Smpl> {
        ValuesDisplay {
            label: Some("norm"),
            values: self.vector.norm(),
            format: self.format,
        }
    }

    pub fn phas_line(&self) -> ValuesDisplay<'a, crate::Smpl> {
        ValuesDisplay {
            label: Some("phas"),
            values: self.vector.phas(),
            format: self.format,
        }
    }
}

impl fmt::Display for SpectralDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.norm_line())?;
        write!(f, "{}", self.phas_line())
    }
}

impl SpectralVector {
    pub fn display(&self) -> SpectralDisplay<'_> {
        self.display_with(PrintFormat::default())
    }

    pub fn display_with(&self, format: PrintFormat) -> SpectralDisplay<'_> {
        SpectralDisplay {
            vector: self,
            format,
        }
    }

    /// Emit magnitudes then phases as two info events
    pub fn print(&self) {
        let lines = self.display();
        tracing::info!(target: PRINT_TARGET, "{}", lines.norm_line());
        tracing::info!(target: PRINT_TARGET, "{}", lines.phas_line());
    }
}

impl RealVector {
    pub fn display(&self) -> ValuesDisplay<'_, crate::LSmpl> {
        self.display_with(PrintFormat::default())
    }

    pub fn display_with(&self, format: PrintFormat) -> ValuesDisplay<'_, crate::LSmpl> {
        ValuesDisplay {
            label: None,
            values: self.data(),
            format,
        }
    }

    /// Emit all samples as one info event
    pub fn print(&self) {
        tracing::info!(target: PRINT_TARGET, "{}", self.display());
    }
}
