//! Point structure for representing planar coordinates

use lazy_static::lazy_static;
use regex::Regex;

use crate::crs::errors::{CrsError, CrsResult};

lazy_static! {
    // Two numbers separated by a comma and/or whitespace
    static ref COORDINATE_PAIR: Regex = Regex::new(
        r"^\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)(?:\s*,\s*|\s+)([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s*$"
    ).expect("coordinate pattern is valid");
}

/// A planar coordinate pair
///
/// In geographic systems `x` holds longitude and `y` latitude, except for
/// the swapped geographic system where the order is reversed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate (longitude in geographic systems)
    pub x: f64,
    /// Y coordinate (latitude in geographic systems)
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Parse a point from text such as "37.6,55.7" or "37.6 55.7"
    pub fn from_string(text: &str) -> CrsResult<Self> {
        let captures = COORDINATE_PAIR.captures(text)
            .ok_or_else(|| CrsError::InvalidCoordinate(format!("expected 'x,y', got '{}'", text.trim())))?;

        let x = captures[1].parse::<f64>()
            .map_err(|_| CrsError::InvalidCoordinate(format!("invalid x value: {}", &captures[1])))?;
        let y = captures[2].parse::<f64>()
            .map_err(|_| CrsError::InvalidCoordinate(format!("invalid y value: {}", &captures[2])))?;

        Ok(Point::new(x, y))
    }

    /// The same point with its coordinates swapped
    pub fn swapped(&self) -> Self {
        Point::new(self.y, self.x)
    }

    /// Check whether both coordinates lie within `tolerance` of another point
    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    /// Coordinates as an `[x, y]` array
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<[f64; 2]> for Point {
    fn from(coords: [f64; 2]) -> Self {
        Point::new(coords[0], coords[1])
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}
