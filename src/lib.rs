//! Integer geohashes.
//!
//! A (latitude, longitude) pair is quantized onto a 2^32 x 2^32 grid and the
//! two grid coordinates are Morton-interleaved into one `u64`. The top `p`
//! bits of the code name a rectangular cell; cells nest as `p` grows, so a
//! cell is a contiguous range of full-resolution codes and proximity queries
//! become a handful of range scans over a sorted store.
//!
//! ```
//! use geohash_int::{Direction, GeoHash};
//!
//! let hash = GeoHash::from_coords(52.52, 13.405);
//! let cell = hash.with_precision(30).unwrap();
//! assert!(cell.adjacent(Direction::North).is_some());
//!
//! for range in hash.ranges_within(1_000.0) {
//!     assert!(range.min <= range.max);
//! }
//! ```

pub mod bits;
pub mod error;
pub mod geohash;
pub mod grid;
pub mod proximity;
pub mod range;

pub use error::{GeoHashError, Result};
pub use geohash::{Area, Coord, Direction, GeoHash, Neighbors, MAX_PRECISION, MIN_PRECISION};
pub use grid::{Grid, LAT_MAX, LAT_MIN, LON_MAX, LON_MIN};
pub use proximity::{precision_for_radius, EARTH_RADIUS_METERS};
pub use range::{merge_ranges, Range};
