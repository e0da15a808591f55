use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeoHashError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeoHashError {
    /// Precision is outside 1..=64.
    #[error("invalid precision: {0} (must be between 1 and 64)")]
    InvalidPrecision(u8),
}
