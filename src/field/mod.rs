//! Slicing N-dimensional variables down to 2D lat/lon fields.
//!
//! The slice loop is the one piece of this crate where a bookkeeping mistake
//! does not raise: collapsing the wrong axis silently produces plausible but
//! wrong fields. It lives here as a single pure function, exhaustively
//! tested, and nothing else in the crate re-implements it.

use ndarray::{Array2, ArrayD, Axis, Ix2};

use crate::axes::AxisPartition;
use crate::error::{DiagError, Result};

/// Values outside this range are treated as fill-value sentinels.
pub const MIN_VALID: f64 = -1e10;
/// Values outside this range are treated as fill-value sentinels.
pub const MAX_VALID: f64 = 1e10;

/// Fix every iterable axis to the index given by `combo`, yielding a 2D field
/// aligned to the `(nlat, nlon)` grid.
///
/// Axes are collapsed in partition order. Removing an axis shifts the
/// positions of all axes after it, so the axis to collapse at step `k` is
/// `positions[k] - k`. After all slices the remainder must be the two spatial
/// axes; a `(nlon, nlat)` remainder is transposed, anything else is a
/// [`DiagError::ShapeMismatch`].
pub fn slice_for_combination(
    data: &ArrayD<f64>,
    partition: &AxisPartition,
    combo: &[usize],
    nlat: usize,
    nlon: usize,
) -> Result<Array2<f64>> {
    if combo.len() != partition.len() {
        return Err(DiagError::configuration(format!(
            "combination has {} indices for {} iterable axes",
            combo.len(),
            partition.len()
        )));
    }
    for (k, (&index, &len)) in combo.iter().zip(&partition.lengths).enumerate() {
        if index >= len {
            return Err(DiagError::configuration(format!(
                "index {} out of range for axis '{}' (length {})",
                index, partition.names[k], len
            )));
        }
    }

    let mut working = data.to_owned();
    for (removed, (&position, &index)) in partition.positions.iter().zip(combo).enumerate() {
        // The running offset: `removed` axes are already gone.
        working = working.index_axis_move(Axis(position - removed), index);
    }

    let remaining = working.shape().to_vec();
    let field = working
        .into_dimensionality::<Ix2>()
        .map_err(|_| DiagError::ShapeMismatch {
            got: remaining,
            nlat,
            nlon,
        })?;

    let shape = field.dim();
    if shape == (nlat, nlon) {
        Ok(field)
    } else if shape == (nlon, nlat) {
        Ok(field.reversed_axes())
    } else {
        Err(DiagError::ShapeMismatch {
            got: vec![shape.0, shape.1],
            nlat,
            nlon,
        })
    }
}

/// Replace fill-value sentinels (anything outside `[MIN_VALID, MAX_VALID]`)
/// with NaN, in place. NaN already present passes through unchanged.
pub fn sanitize_extreme_values(data: &mut ArrayD<f64>) {
    data.mapv_inplace(|v| {
        if v < MIN_VALID || v > MAX_VALID {
            f64::NAN
        } else {
            v
        }
    });
}

/// NaN-aware global minimum and maximum, for fixed contour scaling across a
/// variable's combinations.
///
/// Constant all-zero and all-one fields fall back to `(0.0, 1.0)` so a
/// downstream contour range is never zero-width. An all-NaN array gives
/// `(NaN, NaN)`.
pub fn global_min_max(data: &ArrayD<f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut seen = false;

    for &v in data.iter() {
        if v.is_nan() {
            continue;
        }
        seen = true;
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    if !seen {
        return (f64::NAN, f64::NAN);
    }
    if (min == 0.0 && max == 0.0) || (min == 1.0 && max == 1.0) {
        return (0.0, 1.0);
    }
    (min, max)
}

/// Keep only `indices` along `axis` (the year-window restriction on the time
/// axis). Order of `indices` is preserved.
pub fn select_indices(data: &ArrayD<f64>, axis: usize, indices: &[usize]) -> Result<ArrayD<f64>> {
    let len = data.shape()[axis];
    if let Some(&bad) = indices.iter().find(|&&i| i >= len) {
        return Err(DiagError::configuration(format!(
            "index {} out of range for axis {} (length {})",
            bad, axis, len
        )));
    }
    Ok(data.select(Axis(axis), indices))
}
