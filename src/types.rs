//! Value types: points, boundaries and distances.

pub mod boundary;
pub mod point;
pub mod units;

pub use boundary::Boundary;
pub use point::Point;
pub use units::{
    Distance, EARTH_RADIUS, FOOT, INCH, KILOMETER, METER, MILE, NAUTICAL_MILE, YARD,
};
