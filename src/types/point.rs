use crate::geohash;
use crate::spatial;
use crate::types::boundary::Boundary;
use crate::types::units::Distance;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic point in degrees.
///
/// Coordinates are not checked on construction; use
/// [`crate::validation::is_valid_point`] before trusting external input.
///
/// # Examples
///
/// ```
/// use geoutil::Point;
///
/// let kl = Point::new(3.096249444382203, 101.53713780926184);
/// let sg = Point::new(1.3361333233860981, 103.83548216216576);
///
/// let distance = kl.distance_to(&sg);
/// assert!((distance.kilometers() - 321.737).abs() < 0.01);
/// assert_eq!(kl.to_string(), "(3.096249444, 101.537137809)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Point {
    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance using the spherical law of cosines.
    #[inline]
    pub fn distance_to(&self, other: &Point) -> Distance {
        spatial::get_distance(self, other)
    }

    /// Square boundary of `radius` centered on this point.
    #[inline]
    pub fn boundary_of(&self, radius: Distance) -> Boundary {
        spatial::get_boundary(self, radius)
    }

    /// Geohash of this point. Out-of-range precisions fall back to
    /// [`geohash::DEFAULT_PRECISION`].
    #[inline]
    pub fn geohash(&self, precision: usize) -> String {
        geohash::encode(self, precision)
    }

    /// Center of the geohash cell. Unknown characters count as `'0'`.
    #[inline]
    pub fn from_geohash(hash: &str) -> Self {
        geohash::decode(hash)
    }

    #[cfg(feature = "geojson")]
    pub fn to_geojson(&self) -> crate::Result<String> {
        use geojson::{Geometry, Value};

        let geom = Geometry::new(Value::Point(vec![self.lng, self.lat]));
        serde_json::to_string(&geom).map_err(|e| {
            crate::GeoError::GeoJson(format!("Failed to serialize point: {}", e))
        })
    }

    #[cfg(feature = "geojson")]
    pub fn from_geojson(geojson: &str) -> crate::Result<Self> {
        use geojson::{Geometry, Value};

        let geom: Geometry = serde_json::from_str(geojson)
            .map_err(|e| crate::GeoError::GeoJson(format!("Failed to parse GeoJSON: {}", e)))?;

        match geom.value {
            Value::Point(coords) => {
                if coords.len() < 2 {
                    return Err(crate::GeoError::GeoJson(
                        "Point must have at least 2 coordinates".to_string(),
                    ));
                }
                Ok(Point::new(coords[1], coords[0]))
            }
            _ => Err(crate::GeoError::GeoJson(
                "GeoJSON geometry is not a Point".to_string(),
            )),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.9}, {:.9})", self.lat, self.lng)
    }
}

/// `geo` stores longitude in `x` and latitude in `y`.
impl From<geo::Point<f64>> for Point {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        geo::Point::new(point.lng, point.lat)
    }
}

impl From<geo::Coord<f64>> for Point {
    fn from(coord: geo::Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}

impl From<Point> for geo::Coord<f64> {
    fn from(point: Point) -> Self {
        geo::coord! { x: point.lng, y: point.lat }
    }
}

/// `(lat, lng)`
impl From<(f64, f64)> for Point {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.lat, point.lng)
    }
}
