//! Error types for jules-diag.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for jules-diag operations.
pub type Result<T> = std::result::Result<T, DiagError>;

/// Errors that can occur in jules-diag.
#[derive(Debug, Error)]
pub enum DiagError {
    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read NetCDF file.
    #[error("NetCDF error: {0}")]
    NetCDF(String),

    /// Invalid axis metadata or run configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An axis name with no label table.
    #[error("No label table for axis '{axis}'")]
    UnknownAxis { axis: String },

    /// A slice index past the end of an axis label table.
    #[error("Index {index} out of range for axis '{axis}' (table holds {len} labels)")]
    LabelIndex {
        axis: String,
        index: usize,
        len: usize,
    },

    /// A sliced field that matches neither grid orientation.
    #[error("Sliced field has shape {got:?}, expected ({nlat}, {nlon}) or ({nlon}, {nlat})")]
    ShapeMismatch {
        got: Vec<usize>,
        nlat: usize,
        nlon: usize,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DiagError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a Configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an UnknownAxis error.
    pub fn unknown_axis(axis: impl Into<String>) -> Self {
        Self::UnknownAxis { axis: axis.into() }
    }
}

impl From<netcdf::Error> for DiagError {
    fn from(err: netcdf::Error) -> Self {
        Self::NetCDF(err.to_string())
    }
}
