//! Great-circle distance formulas and the square boundary calculator.
//!
//! Every formula uses the same spherical [`EARTH_RADIUS`] so their results
//! are directly comparable.

use crate::error::{GeoError, Result};
use crate::types::units::{Distance, EARTH_RADIUS};
use crate::types::{Boundary, Point};
use crate::validation::{validate_point, validate_radius};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Meters spanned by one degree of latitude, as used by [`get_boundary`].
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Distance formulas for spatial calculations.
///
/// - **LawOfCosines**: exact on the sphere, loses precision for points a few
///   meters apart because `acos` is flat near 1
/// - **Equirectangular**: planar approximation, several times cheaper, only
///   accurate below roughly 200 km
/// - **Haversine**: exact on the sphere and stable for small separations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceFormula {
    #[default]
    #[serde(alias = "cosines")]
    LawOfCosines,
    #[serde(alias = "fast")]
    Equirectangular,
    Haversine,
}

impl DistanceFormula {
    pub const ALL: [DistanceFormula; 3] = [
        DistanceFormula::LawOfCosines,
        DistanceFormula::Equirectangular,
        DistanceFormula::Haversine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceFormula::LawOfCosines => "law_of_cosines",
            DistanceFormula::Equirectangular => "equirectangular",
            DistanceFormula::Haversine => "haversine",
        }
    }
}

impl fmt::Display for DistanceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceFormula {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "law_of_cosines" | "cosines" => Ok(DistanceFormula::LawOfCosines),
            "equirectangular" | "fast" => Ok(DistanceFormula::Equirectangular),
            "haversine" => Ok(DistanceFormula::Haversine),
            other => Err(GeoError::Config(format!(
                "unknown distance formula: {}",
                other
            ))),
        }
    }
}

/// Calculate the distance between two points with the chosen formula.
///
/// # Examples
///
/// ```rust
/// use geoutil::{Point, spatial::{distance_between, DistanceFormula}};
///
/// let nyc = Point::new(40.7128, -74.0060);
/// let la = Point::new(34.0522, -118.2437);
///
/// let dist = distance_between(&nyc, &la, DistanceFormula::Haversine);
/// assert!(dist.kilometers() > 3_900.0 && dist.kilometers() < 4_000.0);
/// ```
pub fn distance_between(p1: &Point, p2: &Point, formula: DistanceFormula) -> Distance {
    match formula {
        DistanceFormula::LawOfCosines => get_distance(p1, p2),
        DistanceFormula::Equirectangular => fast_get_distance(p1, p2),
        DistanceFormula::Haversine => get_distance_haversine(p1, p2),
    }
}

/// Great-circle distance by the spherical law of cosines.
///
/// `d = R * acos(cos(lat1) * cos(lat2) * cos(dlng) + sin(lat1) * sin(lat2))`
///
/// The `acos` argument is clamped to `[-1, 1]` so rounding never yields NaN.
pub fn get_distance(p1: &Point, p2: &Point) -> Distance {
    // acos is too flat near 1 to resolve a zero separation.
    if p1 == p2 {
        return Distance::ZERO;
    }

    let lat1 = p1.lat.to_radians();
    let lat2 = p2.lat.to_radians();
    let dlng = (p2.lng - p1.lng).to_radians();

    let cos_angle = lat1.cos() * lat2.cos() * dlng.cos() + lat1.sin() * lat2.sin();

    Distance(EARTH_RADIUS.meters() * cos_angle.clamp(-1.0, 1.0).acos())
}

/// Equirectangular approximation of the distance between two points.
///
/// Treats the patch between the points as flat, scaling longitude by the
/// cosine of the mean latitude. Avoids `acos`, which makes it several times
/// cheaper than [`get_distance`]; the error is negligible below ~200 km.
///
/// # Examples
///
/// ```rust
/// use geoutil::{Point, spatial::{fast_get_distance, get_distance}};
///
/// let a = Point::new(1.4651887210464056, 103.76371843105089);
/// let b = Point::new(2.084919122258202, 103.26650368581207);
///
/// let exact = get_distance(&a, &b);
/// let fast = fast_get_distance(&a, &b);
/// assert!(((fast - exact).meters() / exact.meters()).abs() < 0.001);
/// ```
pub fn fast_get_distance(p1: &Point, p2: &Point) -> Distance {
    let dlng = p1.lng - p2.lng;
    let dlat = p1.lat - p2.lat;
    let mean = (p1.lat + p2.lat) / 2.0;

    let x = dlng.to_radians() * EARTH_RADIUS.meters() * mean.to_radians().cos();
    let y = dlat.to_radians() * EARTH_RADIUS.meters();

    Distance((x * x + y * y).sqrt())
}

#[inline]
fn haversine(theta: f64) -> f64 {
    (1.0 - theta.cos()) / 2.0
}

/// Great-circle distance by the haversine formula.
///
/// More stable than [`get_distance`] for small separations.
pub fn get_distance_haversine(p1: &Point, p2: &Point) -> Distance {
    let lat1 = p1.lat.to_radians();
    let lat2 = p2.lat.to_radians();

    let dlat = lat2 - lat1;
    let dlng = p2.lng.to_radians() - p1.lng.to_radians();

    let a = haversine(dlat) + lat1.cos() * lat2.cos() * haversine(dlng);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Distance(EARTH_RADIUS.meters() * c)
}

/// Square boundary approximating a circle of `radius` around `point`.
///
/// One degree of latitude is taken as [`METERS_PER_DEGREE`]; the longitude
/// delta is widened by `1 / cos(lat)`. At the poles that factor is infinite
/// and so are the longitude bounds. Use [`try_get_boundary`] to reject such
/// input instead.
///
/// # Examples
///
/// ```rust
/// use geoutil::{Point, METER, spatial::get_boundary};
///
/// let p = Point::new(3.3000716307302, 101.57032339298446);
/// let rect = get_boundary(&p, 10.0 * METER);
///
/// assert!(rect.min.lat < p.lat && p.lat < rect.max.lat);
/// assert!(rect.min.lng < p.lng && p.lng < rect.max.lng);
/// ```
pub fn get_boundary(point: &Point, radius: Distance) -> Boundary {
    let lat_delta = radius.meters() / METERS_PER_DEGREE;
    let lng_delta = lat_delta / point.lat.to_radians().cos();

    Boundary {
        min: Point::new(point.lat - lat_delta, point.lng - lng_delta),
        max: Point::new(point.lat + lat_delta, point.lng + lng_delta),
    }
}

/// Like [`get_boundary`], but rejects invalid points, bad radii and
/// latitudes where `cos(lat)` vanishes (the poles).
pub fn try_get_boundary(point: &Point, radius: Distance) -> Result<Boundary> {
    validate_point(point)?;
    validate_radius(radius)?;

    if point.lat.to_radians().cos() <= f64::EPSILON {
        return Err(GeoError::InvalidPoint(format!(
            "longitude span is unbounded at latitude {}",
            point.lat
        )));
    }

    Ok(get_boundary(point, radius))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::units::{KILOMETER, METER};

    fn kl() -> Point {
        Point::new(3.096249444382203, 101.53713780926184)
    }

    fn sg() -> Point {
        Point::new(1.3361333233860981, 103.83548216216576)
    }

    #[test]
    fn test_law_of_cosines_known_value() {
        let d = get_distance(&kl(), &sg());
        assert!((d.meters() - 321_737.293).abs() < 0.01);
    }

    #[test]
    fn test_haversine_known_value() {
        let d = get_distance_haversine(&kl(), &sg());
        assert!((d.meters() - 321_737.293).abs() < 0.01);
        assert!((d.kilometers() - 321.737).abs() < 0.001);
    }

    #[test]
    fn test_fast_known_value() {
        let d = fast_get_distance(&kl(), &sg());
        assert!((d.meters() - 321_745.320).abs() < 0.01);
    }

    #[test]
    fn test_zero_distance() {
        let points = [
            kl(),
            sg(),
            Point::new(0.0, 0.0),
            Point::new(89.9, 179.9),
            Point::new(-45.123456789, -120.987654321),
        ];
        for p in points {
            for formula in DistanceFormula::ALL {
                assert_eq!(
                    distance_between(&p, &p, formula).meters(),
                    0.0,
                    "{} at {}",
                    formula,
                    p
                );
            }
        }
    }

    #[test]
    fn test_symmetry() {
        let a = Point::new(40.7128, -74.0060);
        let b = Point::new(34.0522, -118.2437);
        for formula in DistanceFormula::ALL {
            let ab = distance_between(&a, &b, formula).meters();
            let ba = distance_between(&b, &a, formula).meters();
            assert!((ab - ba).abs() < 1e-6, "{}: {} vs {}", formula, ab, ba);
        }
    }

    #[test]
    fn test_distance_between_dispatch() {
        let (a, b) = (kl(), sg());
        assert_eq!(
            distance_between(&a, &b, DistanceFormula::LawOfCosines),
            get_distance(&a, &b)
        );
        assert_eq!(
            distance_between(&a, &b, DistanceFormula::Equirectangular),
            fast_get_distance(&a, &b)
        );
        assert_eq!(
            distance_between(&a, &b, DistanceFormula::Haversine),
            get_distance_haversine(&a, &b)
        );
        assert_eq!(DistanceFormula::default(), DistanceFormula::LawOfCosines);
    }

    #[test]
    fn test_agrees_with_geo_haversine() {
        use geo::Distance as _;

        // geo uses a 6371008.8 m mean radius, ours is 6370996.81 m.
        let a = Point::new(40.7128, -74.0060);
        let b = Point::new(34.0522, -118.2437);
        let ours = get_distance_haversine(&a, &b).meters();
        let theirs = geo::Haversine.distance(geo::Point::from(a), geo::Point::from(b));
        assert!(((ours - theirs) / theirs).abs() < 1e-5);
    }

    #[test]
    fn test_formula_parse_and_display() {
        for formula in DistanceFormula::ALL {
            assert_eq!(formula.to_string().parse::<DistanceFormula>().unwrap(), formula);
        }
        assert_eq!(
            "FAST".parse::<DistanceFormula>().unwrap(),
            DistanceFormula::Equirectangular
        );
        assert!("vincenty".parse::<DistanceFormula>().is_err());

        let json = serde_json::to_string(&DistanceFormula::LawOfCosines).unwrap();
        assert_eq!(json, "\"law_of_cosines\"");
    }

    #[test]
    fn test_formula_aliases_deserialize() {
        let fast: DistanceFormula = serde_json::from_str("\"fast\"").unwrap();
        assert_eq!(fast, "fast".parse().unwrap());
        assert_eq!(fast, DistanceFormula::Equirectangular);

        let cosines: DistanceFormula = serde_json::from_str("\"cosines\"").unwrap();
        assert_eq!(cosines, DistanceFormula::LawOfCosines);

        let config = crate::Config::from_json(r#"{"distance_formula": "fast"}"#).unwrap();
        assert_eq!(config.distance_formula, DistanceFormula::Equirectangular);
    }

    #[test]
    fn test_boundary_exact_deltas() {
        let p = Point::new(3.3000716307302, 101.57032339298446);
        let rect = get_boundary(&p, 10.0 * METER);

        let lat_delta = 10.0 / 111_000.0;
        let lng_delta = lat_delta / p.lat.to_radians().cos();
        assert_eq!(rect.min.lat, p.lat - lat_delta);
        assert_eq!(rect.max.lat, p.lat + lat_delta);
        assert_eq!(rect.min.lng, p.lng - lng_delta);
        assert_eq!(rect.max.lng, p.lng + lng_delta);
    }

    #[test]
    fn test_boundary_at_equator_is_square_in_degrees() {
        let rect = get_boundary(&Point::new(0.0, 0.0), 111.0 * KILOMETER);
        assert!((rect.lat_span() - 2.0).abs() < 1e-12);
        assert!((rect.lng_span() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_boundary_at_pole_degenerates() {
        // cos(90 deg) rounds to ~6e-17, so the span is astronomically wide.
        let rect = get_boundary(&Point::new(90.0, 0.0), 1.0 * KILOMETER);
        assert!(rect.lng_span() > 1e10);
        assert!(try_get_boundary(&Point::new(90.0, 0.0), 1.0 * KILOMETER).is_err());
        assert!(try_get_boundary(&Point::new(-90.0, 0.0), 1.0 * KILOMETER).is_err());
        assert!(try_get_boundary(&Point::new(89.0, 0.0), 1.0 * KILOMETER).is_ok());
    }

    #[test]
    fn test_try_get_boundary_rejects_bad_input() {
        assert!(try_get_boundary(&Point::new(91.0, 0.0), 10.0 * METER).is_err());
        assert!(try_get_boundary(&Point::new(0.0, 0.0), Distance(-1.0)).is_err());
        assert!(try_get_boundary(&Point::new(0.0, 0.0), Distance(f64::NAN)).is_err());
        assert!(try_get_boundary(&Point::new(0.0, 0.0), 10.0 * METER).is_ok());
    }
}
