//! The per-variable diagnostic pipeline.
//!
//! Composition of the core pieces: read, sanitize, restrict to the
//! configured year, classify axes, enumerate combinations, slice, aggregate,
//! label, write. Rendering of maps and animations sits outside this crate;
//! consumers get the sliced field, the label set and the aggregates per
//! combination.

use ndarray::Array2;
use tracing::{info, warn};

use crate::aggregate::{areal_mean, is_rate_unit, zonal_integral, zonal_mean};
use crate::axes::AxisPartition;
use crate::config::Config;
use crate::data::{coord_values, read_header, read_variable, resolve_grid_keys, GridAxis, GridKeys};
use crate::error::Result;
use crate::field::{
    global_min_max, sanitize_extreme_values, select_indices, slice_for_combination,
};
use crate::geo::{BoundingBox, EARTH_RADIUS_M};
use crate::labels::{build_label_set, LabelSet};
use crate::output::OutputWriter;
use crate::timeaxis::{decode_times, year_indices};

/// Everything computed for one combination, handed to the consumer.
#[derive(Debug, Clone)]
pub struct ComboResult {
    /// Labels for this combination, leading context first.
    pub labels: LabelSet,
    /// The 2D field, `(nlat, nlon)`.
    pub field: Array2<f64>,
    /// Area-weighted mean over the study region.
    pub areal_mean: f64,
    /// NaN-aware mean across longitude, one value per latitude.
    pub zonal_mean: Vec<f64>,
    /// Area-weighted zonal total, one value per latitude.
    pub zonal_integral: Vec<f64>,
}

/// Run the full pipeline: every configured variable, every combination,
/// writing the text diagnostics.
pub fn run(config: &Config) -> Result<()> {
    let writer = OutputWriter::new(&config.output_root);
    writer.clear_text_outputs()?;

    let header = read_header(&config.data_file)?;
    let keys = resolve_grid_keys(&header)?;

    let lats = coord_values(
        &read_variable(&config.data_file, &keys.lat_var)?,
        GridAxis::Lat,
    )?;
    let lons = coord_values(
        &read_variable(&config.data_file, &keys.lon_var)?,
        GridAxis::Lon,
    )?;
    info!(
        nlat = lats.len(),
        nlon = lons.len(),
        lat_dim = %keys.lat_dim,
        lon_dim = %keys.lon_dim,
        "grid resolved"
    );

    for name in &config.variables {
        if !header.variables.iter().any(|v| v == name) {
            warn!(variable = %name, "not present in dataset, skipping");
            continue;
        }
        process_variable(config, &keys, &lats, &lons, name, |combo| {
            let sub = combo.labels.sub_folder();
            writer.append_areal_mean(name, sub.as_deref(), combo.areal_mean)?;
            writer.append_zonal_mean(name, sub.as_deref(), &combo.zonal_mean)?;
            writer.append_zonal_integral(name, sub.as_deref(), &combo.zonal_integral)?;
            Ok(())
        })?;
    }

    Ok(())
}

/// Process one variable, calling `on_combo` for every combination in
/// enumeration order.
pub fn process_variable<F>(
    config: &Config,
    keys: &GridKeys,
    lats: &[f64],
    lons: &[f64],
    name: &str,
    mut on_combo: F,
) -> Result<()>
where
    F: FnMut(ComboResult) -> Result<()>,
{
    let variable = read_variable(&config.data_file, name)?;

    let spatial = keys.spatial_names();
    if !spatial.iter().all(|s| variable.dim_names.contains(s)) {
        warn!(variable = %name, dims = ?variable.dim_names, "not on the spatial grid, skipping");
        return Ok(());
    }

    let mut data = variable.data;
    sanitize_extreme_values(&mut data);

    let (global_min, global_max) = global_min_max(&data);
    info!(
        variable = %name,
        unit = %variable.unit,
        min = global_min,
        max = global_max,
        "value range"
    );

    if let Some(year) = config.year {
        if let Some(time_axis) = variable.dim_names.iter().position(|d| d == "time") {
            let time = read_variable(&config.data_file, "time")?;
            let raw: Vec<f64> = time.data.iter().copied().collect();
            let times = decode_times(&raw, &time.unit)?;
            let indices = year_indices(&times, year);
            info!(variable = %name, year, steps = indices.len(), "time axis restricted");
            data = select_indices(&data, time_axis, &indices)?;
        }
    }

    let partition = AxisPartition::classify(&variable.dim_names, data.shape(), &spatial)?;
    let leading: Vec<String> = config.year.iter().map(|y| y.to_string()).collect();

    let per_month = is_rate_unit(&variable.unit);
    // Zonal totals run over the whole grid; the study region only scopes the
    // areal mean.
    let whole_grid = BoundingBox::new(-90.0, 90.0, -180.0, 180.0);

    for combo in partition.combinations() {
        let field = slice_for_combination(&data, &partition, &combo, lats.len(), lons.len())?;
        let labels = build_label_set(&combo, &partition.names, &leading)?;

        // Cell areas in m², matching the per-m² flux densities JULES writes;
        // the unit cancels in the mean.
        let mean = areal_mean(&field, lats, lons, &config.study_region, EARTH_RADIUS_M);
        let zmean = zonal_mean(&field);
        let zintg = zonal_integral(&field, lats, lons, &whole_grid, EARTH_RADIUS_M, per_month);

        on_combo(ComboResult {
            labels,
            field,
            areal_mean: mean,
            zonal_mean: zmean,
            zonal_integral: zintg,
        })?;
    }

    Ok(())
}
