//! Bounding box structure for defining regions

use super::point::Point;
use crate::crs::errors::{CrsError, CrsResult};
use crate::crs::ReferenceSystem;

/// An axis-aligned bounding box, optionally tied to a reference system
#[derive(Debug, Clone)]
pub struct BoundingBox {
    /// Minimum X coordinate
    pub min_x: f64,
    /// Minimum Y coordinate
    pub min_y: f64,
    /// Maximum X coordinate
    pub max_x: f64,
    /// Maximum Y coordinate
    pub max_y: f64,
    /// Reference system of the coordinates
    pub crs: Option<ReferenceSystem>,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
            crs: None,
        }
    }

    /// Create a new bounding box in a reference system
    pub fn new_with_crs(min_x: f64, min_y: f64, max_x: f64, max_y: f64, crs: &ReferenceSystem) -> Self {
        BoundingBox {
            crs: Some(crs.clone()),
            ..BoundingBox::new(min_x, min_y, max_x, max_y)
        }
    }

    /// Smallest box holding two corner points, in any order
    pub fn from_corners(a: Point, b: Point) -> Self {
        BoundingBox::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Parse a bounding box from a string (format: "minx,miny,maxx,maxy")
    pub fn from_string(bbox_str: &str) -> CrsResult<Self> {
        let parts: Vec<&str> = bbox_str.split(',').collect();
        if parts.len() != 4 {
            return Err(CrsError::InvalidCoordinate(
                "Bounding box must have 4 comma-separated values".to_string()));
        }

        let mut values = [0.0; 4];
        for (value, (part, name)) in values.iter_mut().zip(parts.iter().zip(["min_x", "min_y", "max_x", "max_y"])) {
            *value = part.trim().parse::<f64>()
                .map_err(|_| CrsError::InvalidCoordinate(format!("Invalid {} value: {}", name, part.trim())))?;
        }

        Ok(BoundingBox::new(values[0], values[1], values[2], values[3]))
    }

    /// Attach a reference system
    pub fn with_crs(mut self, crs: &ReferenceSystem) -> Self {
        self.crs = Some(crs.clone());
        self
    }

    /// Get the width of the bounding box
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Get the height of the bounding box
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Get the center point of the bounding box
    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min_x && point.x <= self.max_x &&
            point.y >= self.min_y && point.y <= self.max_y
    }

    /// Convert the box into another reference system
    ///
    /// Both corners are converted and the result re-ordered so that the
    /// minimum stays below the maximum. Corner conversion is exact only for
    /// conversions that keep axes aligned, such as the Mercator family.
    ///
    /// # Returns
    /// The converted box, or an error if the box has no reference system or
    /// no conversion path exists
    pub fn project_to(&self, crs: &ReferenceSystem) -> CrsResult<BoundingBox> {
        let source = self.crs.as_ref().ok_or_else(|| {
            CrsError::GenericError("Bounding box has no reference system".to_string())
        })?;

        let conversion = source.conversion_to(crs).ok_or_else(|| CrsError::NotConvertible {
            from: source.display_label(),
            to: crs.display_label(),
        })?;

        let min = conversion.apply(Point::new(self.min_x, self.min_y));
        let max = conversion.apply(Point::new(self.max_x, self.max_y));

        Ok(BoundingBox::from_corners(min, max).with_crs(crs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_from_string() {
        let bbox = BoundingBox::from_string("1, 2, 3.5, 4").expect("valid box");
        assert_eq!((bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y), (1.0, 2.0, 3.5, 4.0));
        assert!(bbox.crs.is_none());

        assert!(BoundingBox::from_string("1,2,3").is_err());
        assert!(BoundingBox::from_string("1,2,x,4").is_err());
    }

    #[test]
    fn test_geometry_helpers() {
        let bbox = BoundingBox::new(0.0, 0.0, 4.0, 2.0);
        assert_eq!(bbox.width(), 4.0);
        assert_eq!(bbox.height(), 2.0);
        assert_eq!(bbox.center(), Point::new(2.0, 1.0));
        assert!(bbox.contains(&Point::new(4.0, 2.0)));
        assert!(!bbox.contains(&Point::new(4.1, 1.0)));
    }

    #[test]
    fn test_project_geo_box_keeps_ordering() {
        let catalog = Catalog::new();
        // Geographic is latitude first, so the corners flip axes in WGS84
        let bbox = BoundingBox::new_with_crs(50.0, 30.0, 60.0, 40.0, &catalog.geo);
        let projected = bbox.project_to(&catalog.wgs84).expect("geo reaches wgs84");

        assert_eq!((projected.min_x, projected.min_y, projected.max_x, projected.max_y),
                   (30.0, 50.0, 40.0, 60.0));
        assert!(projected.crs.map(|crs| crs.is_same_instance(&catalog.wgs84)).unwrap_or(false));
    }

    #[test]
    fn test_project_without_crs_fails() {
        let catalog = Catalog::new();
        let bbox = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        assert!(bbox.project_to(&catalog.wgs84).is_err());
    }
}
