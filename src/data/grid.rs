//! Resolving the dimension keys and coordinate-variable names of the grid.
//!
//! JULES runs are not consistent here: the grid dimensions are `lat`/`lon`
//! in some files and `y`/`x` in others, and the coordinate variables are
//! `latitude`/`longitude` or `lat`/`lon`. This is the alias resolution the
//! axis classifier deliberately does not do.

use super::DatasetHeader;
use crate::error::{DiagError, Result};

/// Resolved names for the spatial grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridKeys {
    /// Dimension key of the latitude axis.
    pub lat_dim: String,
    /// Dimension key of the longitude axis.
    pub lon_dim: String,
    /// Name of the latitude coordinate variable.
    pub lat_var: String,
    /// Name of the longitude coordinate variable.
    pub lon_var: String,
}

impl GridKeys {
    /// The two spatial dimension keys, for the axis classifier.
    pub fn spatial_names(&self) -> [String; 2] {
        [self.lat_dim.clone(), self.lon_dim.clone()]
    }
}

/// Resolve grid keys from a dataset header.
///
/// Fails fast with a configuration error when neither naming convention is
/// present, rather than letting a later slice collapse the wrong axis.
pub fn resolve_grid_keys(header: &DatasetHeader) -> Result<GridKeys> {
    let has = |names: &[String], key: &str| names.iter().any(|n| n == key);

    let (lat_dim, lon_dim) = if has(&header.dimensions, "lat") && has(&header.dimensions, "lon") {
        ("lat", "lon")
    } else if has(&header.dimensions, "y") && has(&header.dimensions, "x") {
        ("y", "x")
    } else {
        return Err(DiagError::configuration(format!(
            "no lat/lon or y/x dimension pair among {:?}",
            header.dimensions
        )));
    };

    let (lat_var, lon_var) = if has(&header.variables, "latitude") && has(&header.variables, "longitude")
    {
        ("latitude", "longitude")
    } else if has(&header.variables, "lat") && has(&header.variables, "lon") {
        ("lat", "lon")
    } else {
        return Err(DiagError::configuration(format!(
            "no latitude/longitude coordinate variables among {:?}",
            header.variables
        )));
    };

    Ok(GridKeys {
        lat_dim: lat_dim.to_string(),
        lon_dim: lon_dim.to_string(),
        lat_var: lat_var.to_string(),
        lon_var: lon_var.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn header(dims: &[&str], vars: &[&str]) -> DatasetHeader {
        DatasetHeader {
            dimensions: dims.iter().map(|s| s.to_string()).collect(),
            variables: vars.iter().map(|s| s.to_string()).collect(),
            global_attributes: HashMap::new(),
        }
    }

    #[test]
    fn lat_lon_convention_resolves() {
        let keys = resolve_grid_keys(&header(
            &["time", "lat", "lon"],
            &["lat", "lon", "t_soil"],
        ))
        .unwrap();
        assert_eq!(keys.lat_dim, "lat");
        assert_eq!(keys.lon_dim, "lon");
        assert_eq!(keys.lat_var, "lat");
        assert_eq!(keys.lon_var, "lon");
    }

    #[test]
    fn y_x_convention_with_long_variable_names() {
        let keys = resolve_grid_keys(&header(
            &["time", "y", "x"],
            &["latitude", "longitude", "fch4_wetl"],
        ))
        .unwrap();
        assert_eq!(keys.lat_dim, "y");
        assert_eq!(keys.lon_dim, "x");
        assert_eq!(keys.lat_var, "latitude");
        assert_eq!(keys.lon_var, "longitude");
    }

    #[test]
    fn missing_grid_is_a_configuration_error() {
        let err = resolve_grid_keys(&header(&["time", "depth"], &["t_soil"])).unwrap_err();
        assert!(matches!(err, DiagError::Configuration(_)));
    }
}
