use crate::types::point::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned rectangle given by two corner points.
///
/// `min` is not guaranteed to be south-west of `max` unless the boundary was
/// produced by [`crate::spatial::get_boundary`] or decoded from a geohash.
///
/// # Examples
///
/// ```
/// use geoutil::{Boundary, Point};
///
/// let manhattan = Boundary::new(Point::new(40.70, -74.02), Point::new(40.80, -73.93));
/// assert!(manhattan.contains(&Point::new(40.75, -73.98)));
/// assert!(!manhattan.contains(&Point::new(40.75, -73.90)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub min: Point,
    pub max: Point,
}

impl Boundary {
    #[inline]
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Midpoint of the two corners.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.lat + self.max.lat) / 2.0,
            (self.min.lng + self.max.lng) / 2.0,
        )
    }

    /// Height in degrees of latitude.
    pub fn lat_span(&self) -> f64 {
        self.max.lat - self.min.lat
    }

    /// Width in degrees of longitude.
    pub fn lng_span(&self) -> f64 {
        self.max.lng - self.min.lng
    }

    /// Inclusive containment test. Assumes `min` is the south-west corner.
    pub fn contains(&self, point: &Point) -> bool {
        point.lat >= self.min.lat
            && point.lat <= self.max.lat
            && point.lng >= self.min.lng
            && point.lng <= self.max.lng
    }

    /// The four corners, clockwise from `min`.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.min,
            Point::new(self.max.lat, self.min.lng),
            self.max,
            Point::new(self.min.lat, self.max.lng),
        ]
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.min, self.max)
    }
}

/// `geo::Rect` normalizes its corners, so an inverted boundary comes out
/// with min and max swapped per axis.
impl From<Boundary> for geo::Rect<f64> {
    fn from(boundary: Boundary) -> Self {
        geo::Rect::new(
            geo::Coord::from(boundary.min),
            geo::Coord::from(boundary.max),
        )
    }
}

impl From<geo::Rect<f64>> for Boundary {
    fn from(rect: geo::Rect<f64>) -> Self {
        Self::new(Point::from(rect.min()), Point::from(rect.max()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_display() {
        let b = Boundary::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0));
        assert_eq!(
            b.to_string(),
            "((1.000000000, 2.000000000), (3.000000000, 4.000000000))"
        );
    }

    #[test]
    fn test_center_and_spans() {
        let b = Boundary::new(Point::new(-10.0, 20.0), Point::new(10.0, 60.0));
        assert_eq!(b.center(), Point::new(0.0, 40.0));
        assert_eq!(b.lat_span(), 20.0);
        assert_eq!(b.lng_span(), 40.0);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let b = Boundary::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        assert!(b.contains(&Point::new(0.0, 0.0)));
        assert!(b.contains(&Point::new(1.0, 1.0)));
        assert!(b.contains(&Point::new(0.5, 0.5)));
        assert!(!b.contains(&Point::new(1.0001, 0.5)));
        assert!(!b.contains(&Point::new(0.5, -0.0001)));
    }

    #[test]
    fn test_corners() {
        let b = Boundary::new(Point::new(0.0, 0.0), Point::new(1.0, 2.0));
        let corners = b.corners();
        assert_eq!(corners[0], Point::new(0.0, 0.0));
        assert_eq!(corners[1], Point::new(1.0, 0.0));
        assert_eq!(corners[2], Point::new(1.0, 2.0));
        assert_eq!(corners[3], Point::new(0.0, 2.0));
    }

    #[test]
    fn test_rect_conversion() {
        let b = Boundary::new(Point::new(40.70, -74.02), Point::new(40.80, -73.93));
        let rect: geo::Rect<f64> = b.into();
        assert_eq!(rect.min().x, -74.02);
        assert_eq!(rect.min().y, 40.70);
        assert_eq!(rect.max().x, -73.93);
        assert_eq!(rect.max().y, 40.80);
        assert_eq!(Boundary::from(rect), b);
    }
}
