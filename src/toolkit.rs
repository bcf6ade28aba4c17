//! A configured entry point over the free functions.
//!
//! [`GeoUtil`] carries a [`Config`] so callers pick the distance formula,
//! geohash precision and strictness once instead of at every call site.
//!
//! ```rust
//! use geoutil::{GeoUtil, Point, DistanceFormula};
//!
//! let geo = GeoUtil::builder()
//!     .distance_formula(DistanceFormula::Haversine)
//!     .geohash_precision(8)
//!     .strict(true)
//!     .build()?;
//!
//! let p = Point::new(3.300071631, 101.570323393);
//! assert_eq!(geo.encode(&p)?, "w284z2c2");
//! assert!(geo.encode(&Point::new(120.0, 0.0)).is_err());
//! # Ok::<(), geoutil::GeoError>(())
//! ```

use crate::builder::GeoUtilBuilder;
use crate::config::Config;
use crate::error::Result;
use crate::geohash;
use crate::spatial::{self, DistanceFormula};
use crate::types::{Boundary, Distance, Point};
use crate::validation::{is_valid_point, validate_point};

/// Distance, boundary and geohash operations under one [`Config`].
///
/// In lenient mode (the default) every method succeeds and behaves like the
/// corresponding free function. In strict mode points are validated and the
/// `try_*` variants are used, so malformed input surfaces as an error.
#[derive(Debug, Clone, Default)]
pub struct GeoUtil {
    config: Config,
}

impl GeoUtil {
    /// Create a toolkit from a validated configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "geoutil configured: formula={}, precision={}, strict={}",
            config.distance_formula,
            config.geohash_precision,
            config.strict
        );
        Ok(Self { config })
    }

    pub fn builder() -> GeoUtilBuilder {
        GeoUtilBuilder::new()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn formula(&self) -> DistanceFormula {
        self.config.distance_formula
    }

    pub fn is_strict(&self) -> bool {
        self.config.strict
    }

    /// Distance with the configured formula.
    pub fn distance(&self, p1: &Point, p2: &Point) -> Result<Distance> {
        if self.config.strict {
            validate_point(p1)?;
            validate_point(p2)?;
        }
        Ok(spatial::distance_between(p1, p2, self.config.distance_formula))
    }

    pub fn boundary(&self, point: &Point, radius: Distance) -> Result<Boundary> {
        if self.config.strict {
            spatial::try_get_boundary(point, radius)
        } else {
            Ok(spatial::get_boundary(point, radius))
        }
    }

    /// Geohash at the configured precision.
    pub fn encode(&self, point: &Point) -> Result<String> {
        self.encode_with_precision(point, self.config.geohash_precision)
    }

    /// Geohash at an explicit precision. Lenient mode falls back to the
    /// default precision when `precision` is out of range.
    pub fn encode_with_precision(&self, point: &Point, precision: usize) -> Result<String> {
        if self.config.strict {
            geohash::try_encode(point, precision)
        } else {
            Ok(geohash::encode(point, precision))
        }
    }

    pub fn decode(&self, hash: &str) -> Result<Point> {
        if self.config.strict {
            geohash::try_decode(hash)
        } else {
            Ok(geohash::decode(hash))
        }
    }

    pub fn decode_bounds(&self, hash: &str) -> Result<Boundary> {
        if self.config.strict {
            geohash::try_decode_bounds(hash)
        } else {
            Ok(geohash::decode_bounds(hash))
        }
    }

    pub fn is_valid(&self, point: &Point) -> bool {
        is_valid_point(point)
    }
}
