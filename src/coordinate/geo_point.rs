//! Points tagged with their reference system

use std::fmt;

use log::debug;

use super::point::Point;
use crate::crs::errors::{CrsError, CrsResult};
use crate::crs::ReferenceSystem;

/// A point together with the reference system its coordinates are in
#[derive(Debug, Clone)]
pub struct GeoPoint {
    position: Point,
    crs: ReferenceSystem,
}

impl GeoPoint {
    /// Create a new point in the given system
    pub fn new(x: f64, y: f64, crs: &ReferenceSystem) -> Self {
        GeoPoint {
            position: Point::new(x, y),
            crs: crs.clone(),
        }
    }

    /// Create a point from an existing position
    pub fn from_position(position: Point, crs: &ReferenceSystem) -> Self {
        GeoPoint {
            position,
            crs: crs.clone(),
        }
    }

    /// Coordinates of the point
    pub fn position(&self) -> Point {
        self.position
    }

    /// X coordinate
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Y coordinate
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Reference system of the coordinates
    pub fn crs(&self) -> &ReferenceSystem {
        &self.crs
    }

    /// Convert the point into another reference system
    ///
    /// # Returns
    /// A new point in `crs`, or `CrsError::NotConvertible` if no conversion
    /// path exists
    pub fn project_to(&self, crs: &ReferenceSystem) -> CrsResult<GeoPoint> {
        let conversion = self.crs.conversion_to(crs).ok_or_else(|| CrsError::NotConvertible {
            from: self.crs.display_label(),
            to: crs.display_label(),
        })?;

        let projected = conversion.apply(self.position);
        debug!("Projected ({}, {}) from {} to ({}, {}) in {}",
               self.position.x, self.position.y, self.crs, projected.x, projected.y, crs);

        Ok(GeoPoint::from_position(projected, crs))
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) [{}]", self.position.x, self.position.y, self.crs)
    }
}
