//! Run configuration.
//!
//! Everything the pipeline needs is carried explicitly here, so the core is
//! testable against synthetic arrays without a filesystem or a particular
//! dataset.

use std::path::PathBuf;

use crate::geo::BoundingBox;

/// Configuration for one diagnostic run.
#[derive(Debug, Clone)]
pub struct Config {
    /// The JULES output NetCDF file.
    pub data_file: PathBuf,
    /// Directory the `output/` tree is created under.
    pub output_root: PathBuf,
    /// Variables to process.
    pub variables: Vec<String>,
    /// Calendar year the time axis is restricted to, when set.
    pub year: Option<i32>,
    /// Region the areal mean is computed over.
    pub study_region: BoundingBox,
}

impl Config {
    /// Configuration with the default study region (tropical Africa,
    /// 20°S–15°N, 15°W–50°E).
    pub fn new(data_file: PathBuf, output_root: PathBuf, variables: Vec<String>) -> Self {
        Self {
            data_file,
            output_root,
            variables,
            year: None,
            study_region: BoundingBox::new(-20.0, 15.0, -15.0, 50.0),
        }
    }
}
