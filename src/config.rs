//! Configuration for the [`GeoUtil`](crate::toolkit::GeoUtil) facade.
//!
//! ```
//! use geoutil::{Config, DistanceFormula};
//!
//! let config = Config::from_json(r#"{"geohash_precision": 8, "distance_formula": "haversine"}"#)?;
//! assert_eq!(config.geohash_precision, 8);
//! assert_eq!(config.distance_formula, DistanceFormula::Haversine);
//! assert!(!config.strict);
//! # Ok::<(), geoutil::GeoError>(())
//! ```

use crate::error::{GeoError, Result};
use crate::geohash::{DEFAULT_PRECISION, MAX_PRECISION};
use crate::spatial::DistanceFormula;

/// Settings applied by [`GeoUtil`](crate::toolkit::GeoUtil).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Characters per encoded geohash, 1 to 22.
    #[serde(default = "Config::default_geohash_precision")]
    pub geohash_precision: usize,

    #[serde(default)]
    pub distance_formula: DistanceFormula,

    /// Validate inputs and fail instead of falling back silently.
    #[serde(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geohash_precision: Self::default_geohash_precision(),
            distance_formula: DistanceFormula::default(),
            strict: false,
        }
    }
}

impl Config {
    const fn default_geohash_precision() -> usize {
        DEFAULT_PRECISION
    }

    pub fn with_geohash_precision(mut self, precision: usize) -> Self {
        assert!(
            (1..=MAX_PRECISION).contains(&precision),
            "Geohash precision must be between 1 and {}",
            MAX_PRECISION
        );

        self.geohash_precision = precision;
        self
    }

    pub fn with_distance_formula(mut self, formula: DistanceFormula) -> Self {
        self.distance_formula = formula;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_PRECISION).contains(&self.geohash_precision) {
            return Err(GeoError::Config(format!(
                "geohash_precision must be between 1 and {}, got {}",
                MAX_PRECISION, self.geohash_precision
            )));
        }

        if self.geohash_precision > DEFAULT_PRECISION {
            log::warn!(
                "Geohash precision of {} is above the default of {}; \
                cells at precision {} are already under 4 cm across.",
                self.geohash_precision,
                DEFAULT_PRECISION,
                DEFAULT_PRECISION
            );
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
