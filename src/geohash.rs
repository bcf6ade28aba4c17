//! Geohash encoding and decoding.
//!
//! A geohash is built by repeatedly halving the longitude and latitude
//! ranges and recording which half the point falls in. Bits alternate
//! between the two axes, longitude first, and every five bits become one
//! character of the base-32 [`ALPHABET`] (most significant bit first).
//!
//! ```text
//! lng  lat  lng  lat  lng | lat  lng  lat  lng  lat | ...
//!  1    1    1    0    0  |  0    1    1    1    0  |
//! └──────── 'w' (28) ─────┘└──────── 'f' (14) ──────┘
//! ```
//!
//! [`encode`] and [`decode`] are permissive: an out-of-range precision falls
//! back to [`DEFAULT_PRECISION`] and an unknown character reads as `'0'`.
//! [`try_encode`] and [`try_decode`] reject such input instead.
//!
//! # Examples
//!
//! ```
//! use geoutil::{Point, geohash};
//!
//! let p = Point::new(39.925746, 116.599831);
//! let hash = geohash::encode(&p, 12);
//! assert_eq!(hash, "wx4gjk32kfrx");
//!
//! let center = geohash::decode(&hash);
//! assert!((center.lat - p.lat).abs() < 1e-6);
//! assert!((center.lng - p.lng).abs() < 1e-6);
//! ```

use crate::error::{GeoError, Result};
use crate::types::{Boundary, Point};
use crate::validation::validate_point;

/// Base-32 symbols; `a`, `i`, `l` and `o` are left out.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

pub const DEFAULT_PRECISION: usize = 12;
pub const MAX_PRECISION: usize = 22;

const BITS_PER_CHAR: usize = 5;
const BIT_MASKS: [u8; BITS_PER_CHAR] = [16, 8, 4, 2, 1];
const INVALID: u8 = 0xFF;

/// Byte -> 5-bit value, `INVALID` for bytes outside the alphabet.
static DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// The 5-bit value of a geohash symbol.
#[inline]
pub fn value_of(byte: u8) -> Option<u8> {
    match DECODE_TABLE[byte as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// One axis of the cell being narrowed.
#[derive(Debug, Clone, Copy)]
struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    const LAT: Interval = Interval {
        min: -90.0,
        max: 90.0,
    };
    const LNG: Interval = Interval {
        min: -180.0,
        max: 180.0,
    };

    #[inline]
    fn mid(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Keeps the half containing `value`; true if that is the upper half.
    /// A value sitting exactly on the midpoint goes to the lower half.
    #[inline]
    fn narrow_to(&mut self, value: f64) -> bool {
        let mid = self.mid();
        if value > mid {
            self.min = mid;
            true
        } else {
            self.max = mid;
            false
        }
    }

    #[inline]
    fn take_half(&mut self, upper: bool) {
        let mid = self.mid();
        if upper {
            self.min = mid;
        } else {
            self.max = mid;
        }
    }
}

/// Encode a point with `precision` characters.
///
/// Precisions outside `1..=22` fall back to [`DEFAULT_PRECISION`].
/// Coordinates are not validated; out-of-range values saturate to the
/// nearest edge cell.
pub fn encode(point: &Point, precision: usize) -> String {
    let precision = if (1..=MAX_PRECISION).contains(&precision) {
        precision
    } else {
        log::debug!(
            "geohash precision {} out of range [1, {}], using {}",
            precision,
            MAX_PRECISION,
            DEFAULT_PRECISION
        );
        DEFAULT_PRECISION
    };

    encode_exact(point, precision)
}

/// Encode with [`DEFAULT_PRECISION`] characters.
#[inline]
pub fn encode_default(point: &Point) -> String {
    encode_exact(point, DEFAULT_PRECISION)
}

/// Encode, rejecting invalid points and precisions outside `1..=22`.
///
/// # Examples
///
/// ```
/// use geoutil::{Point, geohash};
///
/// let p = Point::new(57.64911, 10.40744);
/// assert_eq!(geohash::try_encode(&p, 11).unwrap(), "u4pruydqqvj");
/// assert!(geohash::try_encode(&p, 0).is_err());
/// assert!(geohash::try_encode(&Point::new(95.0, 0.0), 5).is_err());
/// ```
pub fn try_encode(point: &Point, precision: usize) -> Result<String> {
    if !(1..=MAX_PRECISION).contains(&precision) {
        return Err(GeoError::InvalidPrecision {
            precision,
            max: MAX_PRECISION,
        });
    }
    validate_point(point)?;

    Ok(encode_exact(point, precision))
}

fn encode_exact(point: &Point, precision: usize) -> String {
    let mut lat = Interval::LAT;
    let mut lng = Interval::LNG;
    let mut even = true;

    let mut hash = String::with_capacity(precision);
    while hash.len() < precision {
        let mut ch = 0u8;
        for mask in BIT_MASKS {
            let upper = if even {
                lng.narrow_to(point.lng)
            } else {
                lat.narrow_to(point.lat)
            };
            if upper {
                ch |= mask;
            }
            even = !even;
        }
        hash.push(ALPHABET[ch as usize] as char);
    }

    hash
}

/// Narrow both intervals by the bits of `values`.
fn narrow_cell(values: impl Iterator<Item = u8>) -> (Interval, Interval) {
    let mut lat = Interval::LAT;
    let mut lng = Interval::LNG;
    let mut even = true;

    for value in values {
        for mask in BIT_MASKS {
            let upper = value & mask != 0;
            if even {
                lng.take_half(upper);
            } else {
                lat.take_half(upper);
            }
            even = !even;
        }
    }

    (lat, lng)
}

fn lenient_values(hash: &str) -> impl Iterator<Item = u8> + '_ {
    let mut warned = false;
    hash.bytes().map(move |b| {
        value_of(b).unwrap_or_else(|| {
            if !warned {
                log::debug!(
                    "unknown geohash character {:?} in {:?}, reading as '0'",
                    b as char,
                    hash
                );
                warned = true;
            }
            0
        })
    })
}

fn strict_values(hash: &str) -> Result<Vec<u8>> {
    if hash.is_empty() {
        return Err(GeoError::EmptyGeohash);
    }
    hash.chars()
        .enumerate()
        .map(|(position, ch)| {
            u8::try_from(ch)
                .ok()
                .and_then(value_of)
                .ok_or(GeoError::InvalidGeohash { ch, position })
        })
        .collect()
}

fn cell_boundary((lat, lng): (Interval, Interval)) -> Boundary {
    Boundary::new(Point::new(lat.min, lng.min), Point::new(lat.max, lng.max))
}

/// Decode a geohash to the center of its cell.
///
/// Unknown bytes are read as `'0'`; an empty string decodes to `(0, 0)`.
pub fn decode(hash: &str) -> Point {
    cell_boundary(narrow_cell(lenient_values(hash))).center()
}

/// Decode, rejecting empty input and characters outside the alphabet.
///
/// # Examples
///
/// ```
/// use geoutil::geohash;
///
/// let p = geohash::try_decode("u4pruydqqvj").unwrap();
/// assert!((p.lat - 57.64911).abs() < 1e-5);
/// assert!((p.lng - 10.40744).abs() < 1e-5);
///
/// assert!(geohash::try_decode("u4pa").is_err());
/// assert!(geohash::try_decode("").is_err());
/// ```
pub fn try_decode(hash: &str) -> Result<Point> {
    let values = strict_values(hash)?;
    Ok(cell_boundary(narrow_cell(values.into_iter())).center())
}

/// The cell a geohash denotes. Same leniency as [`decode`].
pub fn decode_bounds(hash: &str) -> Boundary {
    cell_boundary(narrow_cell(lenient_values(hash)))
}

/// Strict counterpart of [`decode_bounds`].
pub fn try_decode_bounds(hash: &str) -> Result<Boundary> {
    let values = strict_values(hash)?;
    Ok(cell_boundary(narrow_cell(values.into_iter())))
}

/// Height and width in degrees of a cell with `precision` characters.
///
/// Longitude takes the extra bit when `5 * precision` is odd. Precisions
/// above [`MAX_PRECISION`] are clamped to it; `0` is the whole domain.
pub fn cell_size(precision: usize) -> (f64, f64) {
    // At most 110 bits, so the casts below cannot truncate.
    let bits = precision.min(MAX_PRECISION) * BITS_PER_CHAR;
    let lng_bits = bits.div_ceil(2) as i32;
    let lat_bits = (bits / 2) as i32;

    (180.0 / 2f64.powi(lat_bits), 360.0 / 2f64.powi(lng_bits))
}
