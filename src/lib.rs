//! jules-diag - slicing and aggregation diagnostics for gridded JULES output.
//!
//! JULES land-surface-model runs write multi-dimensional NetCDF variables
//! (time, soil layer, carbon pool, plant functional type, lat, lon, ...).
//! This crate enumerates every combination of the non-spatial axis indices,
//! slices each combination down to a 2D lat/lon field, and computes
//! area-weighted aggregates over it, with stable human-readable labels that
//! drive the output layout.
//!
//! # Pipeline
//!
//! - Axis classification: which axes are the spatial grid, which are
//!   iterable ([`axes::AxisPartition`])
//! - Combination enumeration: lexicographic, first axis slowest
//!   ([`axes::Combinations`])
//! - Slicing and aggregation: offset-tracked single-index slices, then
//!   areal mean / zonal mean / zonal integral ([`field`], [`aggregate`])
//! - Labelling: fixed per-axis tables and path-safe composites ([`labels`])
//!
//! # Example
//!
//! ```ignore
//! use jules_diag::config::Config;
//! use jules_diag::pipeline;
//!
//! let config = Config::new(
//!     "u-ck843_preprocessed.nc".into(),
//!     "diagnostics".into(),
//!     vec!["fch4_wetl".into(), "t_soil".into()],
//! );
//! pipeline::run(&config)?;
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod aggregate;
pub mod axes;
pub mod config;
pub mod data;
pub mod error;
pub mod field;
pub mod geo;
pub mod labels;
pub mod output;
pub mod pipeline;
pub mod timeaxis;

pub use error::{DiagError, Result};
