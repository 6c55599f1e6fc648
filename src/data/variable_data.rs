//! Variable loading and coordinate handling.

use ndarray::{ArrayD, Ix2, IxDyn};
use netcdf::types::{FloatType, IntType, NcVariableType};
use std::path::Path;

use crate::error::{DiagError, Result};

/// A loaded variable: its data as `f64`, one axis name per dimension, and
/// the descriptive metadata the aggregates and labels need.
///
/// The axis-name list always has exactly one entry per array dimension.
#[derive(Debug, Clone)]
pub struct LoadedVariable {
    /// Variable name.
    pub name: String,
    /// Shape of the data (kept alongside `data.shape()` for convenience).
    pub shape: Vec<usize>,
    /// Dimension names, one per axis.
    pub dim_names: Vec<String>,
    /// Physical unit, from the `units` attribute (`"unknown"` when absent).
    pub unit: String,
    /// Descriptive name, from the `long_name` attribute (`"unknown"` when
    /// absent).
    pub long_name: String,
    /// The multi-dimensional data as f64, CF scale/offset already applied.
    pub data: ArrayD<f64>,
}

impl LoadedVariable {
    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }
}

/// Which grid axis a coordinate variable describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    /// Latitude (rows of the field).
    Lat,
    /// Longitude (columns of the field).
    Lon,
}

/// Read one variable from a NetCDF file.
pub fn read_variable(path: &Path, var_name: &str) -> Result<LoadedVariable> {
    let file = netcdf::open(path)?;

    let var = file.variable(var_name).ok_or_else(|| {
        DiagError::NetCDF(format!(
            "Variable '{}' not found in {}",
            var_name,
            path.display()
        ))
    })?;

    let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
    let dim_names: Vec<String> = var
        .dimensions()
        .iter()
        .map(|d| d.name().to_string())
        .collect();

    let unit = attr_string(&var, "units").unwrap_or_else(|| "unknown".to_string());
    let long_name = attr_string(&var, "long_name").unwrap_or_else(|| "unknown".to_string());

    let mut data = read_values(&var, &shape)?;

    // CF convention: packed data carries scale_factor / add_offset.
    let scale_factor = attr_f64(&var, "scale_factor").unwrap_or(1.0);
    let add_offset = attr_f64(&var, "add_offset").unwrap_or(0.0);
    if scale_factor != 1.0 || add_offset != 0.0 {
        data.mapv_inplace(|v| v * scale_factor + add_offset);
    }

    Ok(LoadedVariable {
        name: var_name.to_string(),
        shape,
        dim_names,
        unit,
        long_name,
        data,
    })
}

/// 1D coordinate values for a grid axis.
///
/// Some JULES runs store 2D coordinate meshes; latitude then varies along
/// rows (column 0 is taken) and longitude along columns (row 0 is taken).
pub fn coord_values(var: &LoadedVariable, axis: GridAxis) -> Result<Vec<f64>> {
    match var.ndim() {
        1 => Ok(var.data.iter().copied().collect()),
        2 => {
            let mesh = var
                .data
                .view()
                .into_dimensionality::<Ix2>()
                .map_err(|e| DiagError::configuration(e.to_string()))?;
            let line = match axis {
                GridAxis::Lat => mesh.column(0).to_vec(),
                GridAxis::Lon => mesh.row(0).to_vec(),
            };
            Ok(line)
        }
        n => Err(DiagError::configuration(format!(
            "coordinate variable '{}' has {} dimensions, expected 1 or 2",
            var.name, n
        ))),
    }
}

fn attr_string(var: &netcdf::Variable<'_>, name: &str) -> Option<String> {
    var.attributes()
        .find(|attr| attr.name() == name)
        .map(|attr| super::reader::attr_value_to_string(&attr))
}

fn attr_f64(var: &netcdf::Variable<'_>, name: &str) -> Option<f64> {
    attr_string(var, name).and_then(|s| s.parse().ok())
}

macro_rules! values_as_f64 {
    ($var:expr, $ty:ty) => {{
        let values: Vec<$ty> = $var.get_values(..)?;
        values.into_iter().map(|v| v as f64).collect::<Vec<f64>>()
    }};
}

fn read_values(var: &netcdf::Variable<'_>, shape: &[usize]) -> Result<ArrayD<f64>> {
    let values = match var.vartype() {
        NcVariableType::Float(FloatType::F64) => values_as_f64!(var, f64),
        NcVariableType::Float(FloatType::F32) => values_as_f64!(var, f32),
        NcVariableType::Int(IntType::I64) => values_as_f64!(var, i64),
        NcVariableType::Int(IntType::I32) => values_as_f64!(var, i32),
        NcVariableType::Int(IntType::I16) => values_as_f64!(var, i16),
        NcVariableType::Int(IntType::I8) => values_as_f64!(var, i8),
        NcVariableType::Int(IntType::U64) => values_as_f64!(var, u64),
        NcVariableType::Int(IntType::U32) => values_as_f64!(var, u32),
        NcVariableType::Int(IntType::U16) => values_as_f64!(var, u16),
        NcVariableType::Int(IntType::U8) => values_as_f64!(var, u8),
        other => {
            return Err(DiagError::NetCDF(format!(
                "Unsupported variable type: {:?}",
                other
            )))
        }
    };

    ArrayD::from_shape_vec(IxDyn(shape), values)
        .map_err(|e| DiagError::NetCDF(format!("Invalid shape/data size: {}", e)))
}
