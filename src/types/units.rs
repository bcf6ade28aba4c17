//! Distance newtype and unit constants.
//!
//! A [`Distance`] is always stored in meters. Multiplying a plain number by
//! one of the unit constants is the usual way to build one:
//!
//! ```
//! use geoutil::types::units::{KILOMETER, METER, MILE};
//!
//! let radius = 10.0 * METER;
//! assert_eq!(radius.meters(), 10.0);
//!
//! let trip = 2.0 * MILE;
//! assert!((trip.kilometers() - 3.218688).abs() < 1e-9);
//! assert_eq!((5.0 * KILOMETER).meters(), 5000.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// A distance in meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distance(pub f64);

pub const METER: Distance = Distance(1.0);
pub const INCH: Distance = Distance(0.0254);
pub const FOOT: Distance = Distance(0.3048);
pub const YARD: Distance = Distance(0.9144);
pub const KILOMETER: Distance = Distance(1000.0);
pub const MILE: Distance = Distance(1609.344);
pub const NAUTICAL_MILE: Distance = Distance(1852.0);

/// Mean earth radius shared by every spherical formula in this crate.
pub const EARTH_RADIUS: Distance = Distance(6_370_996.81);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);

    #[inline]
    pub fn meters(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn kilometers(self) -> f64 {
        self.0 / KILOMETER.0
    }

    #[inline]
    pub fn miles(self) -> f64 {
        self.0 / MILE.0
    }

    #[inline]
    pub fn feet(self) -> f64 {
        self.0 / FOOT.0
    }

    /// Alias of [`Distance::feet`].
    #[inline]
    pub fn feets(self) -> f64 {
        self.feet()
    }

    #[inline]
    pub fn inches(self) -> f64 {
        self.0 / INCH.0
    }

    #[inline]
    pub fn yards(self) -> f64 {
        self.0 / YARD.0
    }

    #[inline]
    pub fn nautical_miles(self) -> f64 {
        self.0 / NAUTICAL_MILE.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} meters", self.0)
    }
}

impl From<f64> for Distance {
    fn from(meters: f64) -> Self {
        Self(meters)
    }
}

impl From<Distance> for f64 {
    fn from(distance: Distance) -> Self {
        distance.0
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Distance) -> Distance {
        Distance(self.0 + rhs.0)
    }
}

impl Sub for Distance {
    type Output = Distance;

    fn sub(self, rhs: Distance) -> Distance {
        Distance(self.0 - rhs.0)
    }
}

impl Mul<f64> for Distance {
    type Output = Distance;

    fn mul(self, rhs: f64) -> Distance {
        Distance(self.0 * rhs)
    }
}

impl Mul<Distance> for f64 {
    type Output = Distance;

    fn mul(self, rhs: Distance) -> Distance {
        Distance(self * rhs.0)
    }
}

impl Div<f64> for Distance {
    type Output = Distance;

    fn div(self, rhs: f64) -> Distance {
        Distance(self.0 / rhs)
    }
}

/// Ratio of two distances.
impl Div for Distance {
    type Output = f64;

    fn div(self, rhs: Distance) -> f64 {
        self.0 / rhs.0
    }
}
