use std::cell::OnceCell;
use std::fmt;
use std::ops::Range as Span;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bits::{deinterleave, interleave};
use crate::error::{GeoHashError, Result};
use crate::grid::{edge_to_degrees, Grid, RangeExtension, LAT_RNG, LON_RNG};
use crate::proximity::precision_for_radius;
use crate::range::{merge_ranges, Range};

pub const MIN_PRECISION: u8 = 1;
pub const MAX_PRECISION: u8 = 64;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Every direction, clockwise from north. [`GeoHash::neighbors`] uses
    /// this order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    /// `(latitude, longitude)` unit offsets: north and east are positive.
    pub fn offsets(self) -> (i8, i8) {
        match self {
            Direction::North => (1, 0),
            Direction::NorthEast => (1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (-1, 1),
            Direction::South => (-1, 0),
            Direction::SouthWest => (-1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (1, -1),
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coord {
    /// No range check is done; see [`GeoHash::from_coords`].
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coord {
            latitude,
            longitude,
        }
    }
}

/// The rectangle covered by a cell. South and west edges are inclusive,
/// north and east edges exclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    pub lat_range: Span<f64>,
    pub lon_range: Span<f64>,
}

impl Area {
    pub fn center(&self) -> Coord {
        Coord {
            latitude: self.lat_range.center(),
            longitude: self.lon_range.center(),
        }
    }

    pub fn contains(&self, coord: &Coord) -> bool {
        self.lat_range.contains(&coord.latitude) && self.lon_range.contains(&coord.longitude)
    }
}

/// Neighbor cells in [`Direction::ALL`] order. `None` past a pole.
pub type Neighbors = [Option<GeoHash>; 8];

/// The representation a value was built from.
#[derive(Debug, Clone, Copy)]
enum Origin {
    Coords(Coord),
    Hash(u64),
    Grid(Grid),
}

/// A Morton-coded cell of the Earth's surface.
///
/// A value is built from coordinates (full precision), from a code and a
/// precision, or by stepping to a neighbor. The other representations are
/// derived on first use and cached in the value.
///
/// The caches make `GeoHash` `Send` but not `Sync`: one thread owns a value
/// while it is being filled in. Clone it to share.
#[derive(Debug, Clone)]
pub struct GeoHash {
    origin: Origin,
    precision: u8,
    code: OnceCell<u64>,
    grid: OnceCell<Grid>,
    coords: OnceCell<(f64, f64)>,
}

impl GeoHash {
    /// Full precision cell containing the coordinates.
    ///
    /// Coordinates are not validated. Values past the poles or outside
    /// [-180, 180) land on the nearest grid edge.
    pub fn from_coords(latitude: f64, longitude: f64) -> Self {
        GeoHash {
            origin: Origin::Coords(Coord::new(latitude, longitude)),
            precision: MAX_PRECISION,
            code: OnceCell::new(),
            grid: OnceCell::from(Grid::from_coords(latitude, longitude)),
            coords: OnceCell::new(),
        }
    }

    pub fn from_coord(coord: Coord) -> Self {
        Self::from_coords(coord.latitude, coord.longitude)
    }

    /// Cell named by the top `precision` bits of `code`. Lower bits are
    /// cleared.
    pub fn from_hash(code: u64, precision: u8) -> Result<Self> {
        check_precision(precision)?;
        Ok(Self::truncated(code, precision))
    }

    /// `precision` must already be in range.
    fn truncated(code: u64, precision: u8) -> Self {
        GeoHash {
            origin: Origin::Hash(Range::of_cell(code, precision).min),
            precision,
            code: OnceCell::new(),
            grid: OnceCell::new(),
            coords: OnceCell::new(),
        }
    }

    fn from_grid(grid: Grid, precision: u8) -> Self {
        GeoHash {
            origin: Origin::Grid(grid),
            precision,
            code: OnceCell::new(),
            grid: OnceCell::from(grid),
            coords: OnceCell::new(),
        }
    }

    pub fn hash(&self) -> u64 {
        match self.origin {
            Origin::Hash(code) => code,
            _ => *self.code.get_or_init(|| {
                let grid = self.grid();
                interleave(grid.lat, grid.lon)
            }),
        }
    }

    /// `(latitude, longitude)` in degrees.
    ///
    /// For a value built from coordinates these are returned unchanged.
    /// Otherwise they are the center of the full-resolution grid step the
    /// code names.
    pub fn coordinates(&self) -> (f64, f64) {
        match self.origin {
            Origin::Coords(coord) => (coord.latitude, coord.longitude),
            _ => *self.coords.get_or_init(|| self.grid().to_coords()),
        }
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn grid(&self) -> Grid {
        *self.grid.get_or_init(|| match self.origin {
            Origin::Coords(coord) => Grid::from_coords(coord.latitude, coord.longitude),
            Origin::Hash(code) => {
                let (lat, lon) = deinterleave(code);
                Grid { lat, lon }
            }
            Origin::Grid(grid) => grid,
        })
    }

    /// The enclosing (or same) cell at `precision`.
    pub fn with_precision(&self, precision: u8) -> Result<GeoHash> {
        GeoHash::from_hash(self.hash(), precision)
    }

    /// The cell one step away in `direction` at this value's precision.
    ///
    /// Returns `None` when the step would go past a pole. Steps east and
    /// west wrap around the antimeridian.
    pub fn adjacent(&self, direction: Direction) -> Option<GeoHash> {
        let Grid { mut lat, mut lon } = self.grid();
        let (lat_bits, lon_bits) = step_bits(self.precision);
        let lat_step = grid_step(lat_bits);
        let lon_step = grid_step(lon_bits);

        let (dlat, dlon) = direction.offsets();
        if dlat != 0 {
            let moved = if dlat > 0 {
                u32::try_from(u64::from(lat) + lat_step).ok()
            } else {
                u64::from(lat).checked_sub(lat_step).map(|v| v as u32)
            };
            let Some(moved) = moved else {
                tracing::trace!(?direction, precision = self.precision, "no cell past pole");
                return None;
            };
            lat = moved;
        }

        // A step of 2^32 truncates to 0: a full turn back to the same cell.
        if dlon > 0 {
            lon = lon.wrapping_add(lon_step as u32);
        } else if dlon < 0 {
            lon = lon.wrapping_sub(lon_step as u32);
        }

        Some(GeoHash::from_grid(Grid { lat, lon }, self.precision))
    }

    pub fn neighbors(&self) -> Neighbors {
        Direction::ALL.map(|direction| self.adjacent(direction))
    }

    /// The rectangle this cell covers.
    pub fn bounds(&self) -> Area {
        // Longitude holds the top interleaved bit, so it gets the extra
        // bit on odd precisions.
        let lat_bits = self.precision / 2;
        let lon_bits = self.precision - lat_bits;

        let (lat, lon) = deinterleave(Range::of_cell(self.hash(), self.precision).min);
        let (lat, lon) = (u64::from(lat), u64::from(lon));
        Area {
            lat_range: edge_to_degrees(lat, &LAT_RNG)
                ..edge_to_degrees(lat + grid_step(lat_bits), &LAT_RNG),
            lon_range: edge_to_degrees(lon, &LON_RNG)
                ..edge_to_degrees(lon + grid_step(lon_bits), &LON_RNG),
        }
    }

    /// Code ranges covering a disk of `radius_meters` around this value.
    ///
    /// The ranges span this value's cell and its neighbors at the precision
    /// [`precision_for_radius`] picks, merged so that no two overlap or touch.
    /// Neighbors past a pole are left out. Order is unspecified.
    pub fn ranges_within(&self, radius_meters: f64) -> Vec<Range> {
        let (latitude, _) = self.coordinates();
        let precision = precision_for_radius(latitude, radius_meters);
        if precision < MIN_PRECISION {
            return vec![Range::of_cell(0, 0)];
        }

        let cell = GeoHash::truncated(self.hash(), precision);
        let neighbors = cell.neighbors();
        let cells = std::iter::once(&cell)
            .chain(neighbors.iter().flatten())
            .map(|h| Range::of_cell(h.hash(), precision));

        let ranges = merge_ranges(cells);
        tracing::debug!(precision, ranges = ranges.len(), "built covering ranges");
        ranges
    }
}

impl PartialEq for GeoHash {
    fn eq(&self, other: &Self) -> bool {
        self.precision == other.precision && self.hash() == other.hash()
    }
}

impl Eq for GeoHash {}

impl From<Coord> for GeoHash {
    fn from(coord: Coord) -> Self {
        GeoHash::from_coord(coord)
    }
}

impl fmt::Display for GeoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}/{}", self.hash(), self.precision)
    }
}

fn check_precision(precision: u8) -> Result<()> {
    if (MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        Ok(())
    } else {
        Err(GeoHashError::InvalidPrecision(precision))
    }
}

/// `(latitude, longitude)` bits that neighbor steps move by.
///
/// NOTE: on odd precisions this gives both axes one bit less than the
/// interleave does (longitude owns the top bit, so it really has
/// `precision / 2 + 1`). Neighbors of odd-precision cells are therefore two
/// cells away. Stored ranges depend on this split, keep it.
fn step_bits(precision: u8) -> (u8, u8) {
    let lon_bits = precision / 2;
    let lat_bits = lon_bits.saturating_sub(precision & 1);
    (lat_bits, lon_bits)
}

/// Width of one cell, in grid steps, on an axis split by `bits` bits.
#[inline]
fn grid_step(bits: u8) -> u64 {
    1u64 << (32 - u32::from(bits))
}
