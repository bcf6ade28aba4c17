//! Great-circle distances, bounding boxes and geohash encoding for
//! latitude/longitude points.
//!
//! ```rust
//! use geoutil::{Point, METER, geohash, spatial};
//!
//! let kl = Point::new(3.096249444382203, 101.53713780926184);
//! let sg = Point::new(1.3361333233860981, 103.83548216216576);
//!
//! let exact = kl.distance_to(&sg);
//! let stable = spatial::get_distance_haversine(&kl, &sg);
//! assert!((exact - stable).meters().abs() < 0.01);
//!
//! let area = kl.boundary_of(500.0 * METER);
//! assert!(area.contains(&kl));
//!
//! let hash = geohash::encode(&kl, 9);
//! assert!(geohash::decode_bounds(&hash).contains(&kl));
//! ```
//!
//! All functions are pure and need no setup. [`GeoUtil`] bundles a
//! [`Config`] for callers who want one formula, one precision, or strict
//! input checking applied everywhere.

pub mod builder;
pub mod config;
pub mod error;
pub mod geohash;
pub mod spatial;
pub mod toolkit;
pub mod types;
pub mod validation;

pub use builder::GeoUtilBuilder;
pub use config::Config;
pub use error::{GeoError, Result};
pub use toolkit::GeoUtil;

pub use spatial::{
    DistanceFormula, distance_between, fast_get_distance, get_boundary, get_distance,
    get_distance_haversine, try_get_boundary,
};

pub use types::{
    Boundary, Distance, EARTH_RADIUS, FOOT, INCH, KILOMETER, METER, MILE, NAUTICAL_MILE, Point,
    YARD,
};

pub use validation::{is_valid_point, validate_point};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Config, GeoError, GeoUtil, Result};

    pub use crate::{Boundary, Distance, Point};

    pub use crate::{KILOMETER, METER, MILE, NAUTICAL_MILE};

    pub use crate::spatial::{DistanceFormula, distance_between, get_boundary};

    pub use crate::validation::is_valid_point;
}
