//! Radius to precision selection for proximity queries.

use std::f64::consts::PI;

/// Equatorial radius in meters (WGS 84).
pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

/// Length of one degree of latitude, in meters.
const LAT_DEGREE_METERS: f64 = EARTH_RADIUS_METERS * (PI / 180.0);

/// Halving steps available per axis.
const AXIS_BITS: u8 = 32;

/// Returns the coarsest precision whose cells are at least
/// `radius_meters` x `radius_meters` around `latitude`.
///
/// At that precision a circle of the radius centered anywhere in a cell fits
/// inside the cell and its eight neighbors:
///
/// ```text
/// |--------|--------|--------|
/// |        |     / -|\       |
/// |--------|--------|--------|
/// |       (|       x|       )|
/// |--------|--------|--------|
/// |        |     \ _|/       |
/// |--------|--------|--------|
/// ```
///
/// The result is 0 when even a single halving of the longitude span is too
/// small, i.e. the radius covers half the globe.
pub fn precision_for_radius(latitude: f64, radius_meters: f64) -> u8 {
    let lon_degree_meters = LAT_DEGREE_METERS * (latitude * PI / 180.0).cos();

    let lat_precision = axis_precision(radius_meters / LAT_DEGREE_METERS, 180.0);
    let lon_precision = axis_precision(radius_meters / lon_degree_meters, 360.0);

    // Longitude shrinks away from the equator and then needs more bits than
    // latitude; drop the trailing latitude bit in that case.
    let precision = if lat_precision < lon_precision {
        lon_precision * 2 - 1
    } else {
        lon_precision * 2
    };

    tracing::debug!(
        latitude,
        radius_meters,
        lat_precision,
        lon_precision,
        precision,
        "selected proximity precision"
    );
    precision
}

/// Counts how many times `span` can be halved while half of it still
/// exceeds `required`.
fn axis_precision(required: f64, mut span: f64) -> u8 {
    let mut bits = 0;
    while bits < AXIS_BITS && required < span / 2.0 {
        span /= 2.0;
        bits += 1;
    }
    bits
}
