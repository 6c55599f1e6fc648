//! Axis classification for multi-dimensional variables.
//!
//! A gridded JULES variable carries an ordered list of dimension names, two of
//! which are the spatial grid axes used for mapping. Everything else (time,
//! soil layer, carbon pool, plant functional type, ...) is "iterable": the
//! slicing engine enumerates every index combination along those axes.

mod combinations;

pub use combinations::{enumerate_combinations, Combination, Combinations};

use crate::error::{DiagError, Result};

/// The non-spatial axes of a variable, in original axis order.
///
/// Positions refer to the full axis list of the unsliced array. They are kept
/// because collapsing one axis shifts the positions of every axis after it;
/// the slicing engine compensates with a running offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisPartition {
    /// Names of the iterable axes.
    pub names: Vec<String>,
    /// Original positions of the iterable axes in the full axis list.
    pub positions: Vec<usize>,
    /// Lengths of the iterable axes.
    pub lengths: Vec<usize>,
}

impl AxisPartition {
    /// Partition a variable's axes into spatial and iterable.
    ///
    /// An axis is iterable iff its name is not one of `spatial_names`.
    /// `spatial_names` may hold zero, one or two names (fewer than two is a
    /// degenerate but valid grid); each name given must be present in
    /// `axis_names`. Alias resolution ("lat" vs "latitude" vs "y") is the
    /// caller's job, names are compared exactly.
    pub fn classify(
        axis_names: &[String],
        shape: &[usize],
        spatial_names: &[String],
    ) -> Result<Self> {
        if axis_names.len() != shape.len() {
            return Err(DiagError::configuration(format!(
                "{} axis names for {} dimensions",
                axis_names.len(),
                shape.len()
            )));
        }

        for spatial in spatial_names {
            if !axis_names.contains(spatial) {
                return Err(DiagError::configuration(format!(
                    "spatial axis '{}' not among variable axes {:?}",
                    spatial, axis_names
                )));
            }
        }

        let mut names = Vec::new();
        let mut positions = Vec::new();
        let mut lengths = Vec::new();

        for (pos, name) in axis_names.iter().enumerate() {
            if !spatial_names.contains(name) {
                names.push(name.clone());
                positions.push(pos);
                lengths.push(shape[pos]);
            }
        }

        Ok(Self {
            names,
            positions,
            lengths,
        })
    }

    /// Number of iterable axes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the variable has no iterable axes.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Lazy iterator over every index combination of the iterable axes.
    pub fn combinations(&self) -> Combinations {
        Combinations::new(&self.lengths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn classify_splits_spatial_from_iterable() {
        let part = AxisPartition::classify(
            &names(&["time", "soil", "lat", "lon"]),
            &[12, 4, 100, 200],
            &names(&["lat", "lon"]),
        )
        .unwrap();

        assert_eq!(part.names, names(&["time", "soil"]));
        assert_eq!(part.positions, vec![0, 1]);
        assert_eq!(part.lengths, vec![12, 4]);
    }

    #[test]
    fn classify_preserves_original_axis_order() {
        let part = AxisPartition::classify(
            &names(&["soil", "lat", "time", "lon"]),
            &[4, 100, 12, 200],
            &names(&["lat", "lon"]),
        )
        .unwrap();

        assert_eq!(part.names, names(&["soil", "time"]));
        assert_eq!(part.positions, vec![0, 2]);
        assert_eq!(part.lengths, vec![4, 12]);
    }

    #[test]
    fn classify_without_spatial_axes_keeps_everything() {
        let part =
            AxisPartition::classify(&names(&["time", "soil"]), &[12, 4], &[]).unwrap();
        assert_eq!(part.len(), 2);
        assert_eq!(part.positions, vec![0, 1]);
    }

    #[test]
    fn classify_rejects_missing_spatial_axis() {
        let err = AxisPartition::classify(
            &names(&["time", "lat", "lon"]),
            &[12, 100, 200],
            &names(&["lat", "longitude"]),
        )
        .unwrap_err();
        assert!(matches!(err, DiagError::Configuration(_)));
    }

    #[test]
    fn classify_rejects_shape_mismatch() {
        let err = AxisPartition::classify(&names(&["time", "lat"]), &[12], &[]).unwrap_err();
        assert!(matches!(err, DiagError::Configuration(_)));
    }
}
