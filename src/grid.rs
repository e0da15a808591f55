//! Fixed-point grid coordinates.
//!
//! Each axis is split into 2^32 equal steps: latitude over [-90, 90) and
//! longitude over [-180, 180). Grid values are what the Morton codec
//! interleaves and what neighbor lookup steps through.

use std::ops::Range;

pub const LAT_MIN: f64 = -90.0;
pub const LAT_MAX: f64 = 90.0;
pub const LON_MIN: f64 = -180.0;
pub const LON_MAX: f64 = 180.0;

pub(crate) const LAT_RNG: Range<f64> = LAT_MIN..LAT_MAX;
pub(crate) const LON_RNG: Range<f64> = LON_MIN..LON_MAX;

/// Number of grid steps along one axis, 2^32.
pub(crate) const GRID_SCALE: f64 = (1u64 << 32) as f64;

pub trait RangeExtension {
    type Idx;

    fn length(&self) -> Self::Idx;

    fn center(&self) -> Self::Idx;
}

impl RangeExtension for Range<f64> {
    type Idx = f64;

    fn length(&self) -> f64 {
        self.end - self.start
    }

    fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// A (latitude, longitude) position on the 2^32 x 2^32 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    pub lat: u32,
    pub lon: u32,
}

impl Grid {
    /// Quantizes degrees onto the grid, rounding down.
    ///
    /// Inputs are not validated. Values outside the axis ranges saturate at
    /// the grid edges (NaN maps to 0), following `f64 as u32` semantics.
    pub fn from_coords(latitude: f64, longitude: f64) -> Self {
        Grid {
            lat: to_fixed(latitude, &LAT_RNG),
            lon: to_fixed(longitude, &LON_RNG),
        }
    }

    /// Returns the center of the grid step this position names.
    pub fn to_coords(self) -> (f64, f64) {
        (from_fixed(self.lat, &LAT_RNG), from_fixed(self.lon, &LON_RNG))
    }
}

#[inline]
fn to_fixed(degrees: f64, axis: &Range<f64>) -> u32 {
    // Scale into [0, 1), then into [0, 2^32).
    let offset = (degrees - axis.start) / axis.length();
    (offset * GRID_SCALE) as u32
}

#[inline]
fn from_fixed(value: u32, axis: &Range<f64>) -> f64 {
    let offset = (value as f64 + 0.5) / GRID_SCALE;
    axis.start + offset * axis.length()
}

/// Converts a grid edge (which may be exactly 2^32) back to degrees.
#[inline]
pub(crate) fn edge_to_degrees(edge: u64, axis: &Range<f64>) -> f64 {
    axis.start + (edge as f64 / GRID_SCALE) * axis.length()
}
