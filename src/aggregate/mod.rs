//! Area-weighted spatial aggregates over a 2D lat/lon field.
//!
//! Every aggregate treats "no valid data" as a NaN result, never an error:
//! a bounding box that misses the grid, or an all-NaN slice, must not abort
//! the enumeration of the remaining combinations. NaN propagates downstream
//! and is not rewritten to zero.

use ndarray::Array2;

use crate::geo::{cell_area, BoundingBox};

/// Mean month length in seconds (30.4167 days). Converts a per-second flux
/// density into a per-month total; the value is fixed for numeric
/// reproducibility across runs.
pub const SECONDS_PER_MONTH: f64 = 2.628e6;

/// True when a unit string denotes a rate (per second, per metre, per year).
pub fn is_rate_unit(unit: &str) -> bool {
    ["s-1", "m-1", "y-1"].iter().any(|sub| unit.contains(sub))
}

/// Area-weighted mean of `field` within `bbox`.
///
/// `field` is `(nlat, nlon)`, row `i` at `lats[i]`, column `j` at `lons[j]`.
/// Points outside the box, NaN values and NaN areas are all excluded; the
/// result is `Σ(area·value) / Σ(area)` over what remains, or NaN when the
/// valid area is zero. `radius` fixes the area unit, which cancels here.
pub fn areal_mean(
    field: &Array2<f64>,
    lats: &[f64],
    lons: &[f64],
    bbox: &BoundingBox,
    radius: f64,
) -> f64 {
    let mut weighted_sum = 0.0;
    let mut total_area = 0.0;

    for (i, &lat) in lats.iter().enumerate() {
        for (j, &lon) in lons.iter().enumerate() {
            let value = field[[i, j]];
            if value.is_nan() || !bbox.contains(lat, lon) {
                continue;
            }
            let area = cell_area(lats, lons, lat, lon, radius);
            if area.is_nan() {
                continue;
            }
            weighted_sum += area * value;
            total_area += area;
        }
    }

    if total_area > 0.0 {
        weighted_sum / total_area
    } else {
        f64::NAN
    }
}

/// Mean across longitude for each latitude row, ignoring NaN.
///
/// A row with no valid values yields NaN for that row: NaN propagates, it is
/// not treated as zero.
pub fn zonal_mean(field: &Array2<f64>) -> Vec<f64> {
    field
        .rows()
        .into_iter()
        .map(|row| {
            let mut sum = 0.0;
            let mut count = 0usize;
            for &v in row {
                if !v.is_nan() {
                    sum += v;
                    count += 1;
                }
            }
            if count > 0 {
                sum / count as f64
            } else {
                f64::NAN
            }
        })
        .collect()
}

/// Area-weighted total across longitude for each latitude row.
///
/// Per-point `value × cell area` turns a flux density into a flux; summing
/// across the row inside `bbox` gives the zonal total. When `per_month` is
/// set (the variable is a per-second rate) each row is further multiplied by
/// [`SECONDS_PER_MONTH`]. Rows with no valid points yield NaN. `radius`
/// fixes the area unit and must match the flux-density denominator.
pub fn zonal_integral(
    field: &Array2<f64>,
    lats: &[f64],
    lons: &[f64],
    bbox: &BoundingBox,
    radius: f64,
    per_month: bool,
) -> Vec<f64> {
    lats.iter()
        .enumerate()
        .map(|(i, &lat)| {
            let mut sum = 0.0;
            let mut count = 0usize;
            for (j, &lon) in lons.iter().enumerate() {
                let value = field[[i, j]];
                if value.is_nan() || !bbox.contains(lat, lon) {
                    continue;
                }
                let area = cell_area(lats, lons, lat, lon, radius);
                if area.is_nan() {
                    continue;
                }
                sum += area * value;
                count += 1;
            }
            if count == 0 {
                f64::NAN
            } else if per_month {
                sum * SECONDS_PER_MONTH
            } else {
                sum
            }
        })
        .collect()
}
