//! Error types for the strict entry points and configuration loading.

use thiserror::Error;

/// Errors produced by `geoutil`.
///
/// The permissive functions (`geohash::encode`, `geohash::decode`,
/// `spatial::get_boundary`) never return these; only the `try_*` variants,
/// the validators and configuration loading do.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("invalid point: {0}")]
    InvalidPoint(String),

    #[error("invalid radius: {0}")]
    InvalidRadius(String),

    #[error("geohash precision {precision} out of range [1, {max}]")]
    InvalidPrecision { precision: usize, max: usize },

    #[error("invalid geohash character {ch:?} at position {position}")]
    InvalidGeohash { ch: char, position: usize },

    #[error("geohash is empty")]
    EmptyGeohash,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "toml")]
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[cfg(feature = "geojson")]
    #[error("GeoJSON error: {0}")]
    GeoJson(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;
