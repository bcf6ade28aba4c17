//! Validation for geographic coordinates and radii.
//!
//! Nothing else in the crate calls these implicitly. The permissive
//! functions accept any input; callers that want guarantees check first,
//! or use the `try_*` entry points which run these validators.

use crate::error::{GeoError, Result};
use crate::types::{Distance, Point};

pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;
pub const MIN_LNG: f64 = -180.0;
pub const MAX_LNG: f64 = 180.0;

/// True iff latitude is in [-90, 90] and longitude in [-180, 180].
///
/// NaN coordinates are never valid.
///
/// # Examples
///
/// ```
/// use geoutil::{Point, validation::is_valid_point};
///
/// assert!(is_valid_point(&Point::new(90.0, 180.0)));
/// assert!(is_valid_point(&Point::new(-90.0, -180.0)));
/// assert!(!is_valid_point(&Point::new(91.0, 0.0)));
/// ```
pub fn is_valid_point(point: &Point) -> bool {
    (MIN_LAT..=MAX_LAT).contains(&point.lat) && (MIN_LNG..=MAX_LNG).contains(&point.lng)
}

/// Validates a point, describing the offending coordinate on failure.
///
/// # Examples
///
/// ```
/// use geoutil::{Point, validation::validate_point};
///
/// assert!(validate_point(&Point::new(40.7128, -74.0060)).is_ok());
/// assert!(validate_point(&Point::new(95.0, -74.0)).is_err());
/// assert!(validate_point(&Point::new(40.0, 200.0)).is_err());
/// ```
pub fn validate_point(point: &Point) -> Result<()> {
    let (lat, lng) = (point.lat, point.lng);

    if !lat.is_finite() {
        return Err(GeoError::InvalidPoint(format!(
            "Latitude must be finite, got: {}",
            lat
        )));
    }

    if !lng.is_finite() {
        return Err(GeoError::InvalidPoint(format!(
            "Longitude must be finite, got: {}",
            lng
        )));
    }

    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(GeoError::InvalidPoint(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            lat
        )));
    }

    if !(MIN_LNG..=MAX_LNG).contains(&lng) {
        return Err(GeoError::InvalidPoint(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            lng
        )));
    }

    Ok(())
}

/// Validates multiple points, reporting the index of the first bad one.
pub fn validate_points(points: &[Point]) -> Result<()> {
    for (idx, point) in points.iter().enumerate() {
        validate_point(point).map_err(|e| match e {
            GeoError::InvalidPoint(reason) => {
                GeoError::InvalidPoint(format!("Point at index {}: {}", idx, reason))
            }
            other => other,
        })?;
    }
    Ok(())
}

/// Validates a radius for boundary calculations.
///
/// Zero is accepted (it yields a degenerate boundary); negative, NaN and
/// infinite radii are not.
///
/// # Examples
///
/// ```
/// use geoutil::{Distance, METER, validation::validate_radius};
///
/// assert!(validate_radius(1000.0 * METER).is_ok());
/// assert!(validate_radius(Distance(0.0)).is_ok());
/// assert!(validate_radius(Distance(-100.0)).is_err());
/// assert!(validate_radius(Distance(f64::NAN)).is_err());
/// ```
pub fn validate_radius(radius: Distance) -> Result<()> {
    let meters = radius.meters();
    if !radius.is_finite() {
        return Err(GeoError::InvalidRadius(format!(
            "Radius must be finite, got: {}",
            meters
        )));
    }
    if meters < 0.0 {
        return Err(GeoError::InvalidRadius(format!(
            "Radius must not be negative, got: {}",
            meters
        )));
    }
    Ok(())
}
