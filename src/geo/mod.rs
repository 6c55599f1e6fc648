//! Grid-cell geometry on a rectilinear lat/lon grid.

/// Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6.378e6;

/// Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6.378e3;

/// A rectangular lat/lon region.
///
/// Construction resolves min/max per axis, so the two latitudes (and the two
/// longitudes) can be given in either order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Southern edge (degrees).
    pub lat_min: f64,
    /// Northern edge (degrees).
    pub lat_max: f64,
    /// Western edge (degrees).
    pub lon_min: f64,
    /// Eastern edge (degrees).
    pub lon_max: f64,
}

impl BoundingBox {
    /// Build a bounding box from two latitudes and two longitudes, in any
    /// order per axis.
    pub fn new(lat1: f64, lat2: f64, lon1: f64, lon2: f64) -> Self {
        Self {
            lat_min: lat1.min(lat2),
            lat_max: lat1.max(lat2),
            lon_min: lon1.min(lon2),
            lon_max: lon1.max(lon2),
        }
    }

    /// True when the point lies inside the box (edges inclusive).
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.lat_min && lat <= self.lat_max && lon >= self.lon_min && lon <= self.lon_max
    }
}

/// Uniform spacing of a 1D coordinate array (forward difference of the first
/// pair). `None` when the array has fewer than two points.
pub fn grid_spacing(coords: &[f64]) -> Option<f64> {
    if coords.len() < 2 {
        None
    } else {
        Some(coords[1] - coords[0])
    }
}

/// Surface area of the grid box centred on `(lat, lon)`.
///
/// Box bounds span one full grid spacing either side of the centre (twice the
/// native cell width), with the latitude bounds clipped to ±90°. `radius`
/// picks the unit: [`EARTH_RADIUS_M`] gives m², [`EARTH_RADIUS_KM`] gives
/// km². NaN coordinates (masked points) and degenerate grids give NaN.
pub fn cell_area(lats: &[f64], lons: &[f64], lat: f64, lon: f64, radius: f64) -> f64 {
    let (lat_sep, lon_sep) = match (grid_spacing(lats), grid_spacing(lons)) {
        (Some(a), Some(b)) => (a, b),
        _ => return f64::NAN,
    };

    let lat_lo = (lat - lat_sep).clamp(-90.0, 90.0).to_radians();
    let lat_hi = (lat + lat_sep).clamp(-90.0, 90.0).to_radians();
    let lon_lo = (lon - lon_sep).to_radians();
    let lon_hi = (lon + lon_sep).to_radians();

    radius * radius * (lat_hi.sin() - lat_lo.sin()) * (lon_hi - lon_lo)
}
