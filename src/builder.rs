//! Builder for [`GeoUtil`](crate::toolkit::GeoUtil).

use crate::config::Config;
use crate::error::Result;
use crate::spatial::DistanceFormula;
use crate::toolkit::GeoUtil;

/// Step-by-step construction of a [`GeoUtil`]. Values are checked in
/// [`build`](GeoUtilBuilder::build), not in the setters.
#[derive(Debug, Default)]
pub struct GeoUtilBuilder {
    config: Config,
}

impl GeoUtilBuilder {
    /// Start from the default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn geohash_precision(mut self, precision: usize) -> Self {
        self.config.geohash_precision = precision;
        self
    }

    pub fn distance_formula(mut self, formula: DistanceFormula) -> Self {
        self.config.distance_formula = formula;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    pub fn build(self) -> Result<GeoUtil> {
        GeoUtil::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let geo = GeoUtilBuilder::new().build().unwrap();
        assert_eq!(geo.config(), &Config::default());
    }

    #[test]
    fn test_builder_overrides() {
        let geo = GeoUtilBuilder::new()
            .geohash_precision(5)
            .distance_formula(DistanceFormula::Equirectangular)
            .strict(true)
            .build()
            .unwrap();
        assert_eq!(geo.config().geohash_precision, 5);
        assert_eq!(geo.formula(), DistanceFormula::Equirectangular);
        assert!(geo.is_strict());
    }

    #[test]
    fn test_builder_validates_on_build() {
        assert!(GeoUtilBuilder::new().geohash_precision(0).build().is_err());

        let fine = GeoUtilBuilder::new().geohash_precision(20).build().unwrap();
        assert_eq!(fine.config().geohash_precision, 20);

        let config = Config::default().with_strict(true);
        let geo = GeoUtilBuilder::new().config(config.clone()).build().unwrap();
        assert_eq!(geo.config(), &config);
    }
}
