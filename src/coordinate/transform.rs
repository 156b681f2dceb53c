//! Coordinate transformation functionality

use log::debug;

use super::bbox::BoundingBox;
use super::point::Point;
use crate::crs::errors::{CrsError, CrsResult};
use crate::crs::ReferenceSystem;

/// Transformer for converting between reference systems
///
/// A thin error-reporting layer over [`ReferenceSystem::conversion_to`]:
/// missing conversion paths become `CrsError::NotConvertible`.
pub struct CoordinateTransformer;

impl CoordinateTransformer {
    /// Transform a point between reference systems
    pub fn transform_point(&self, point: &Point, from_crs: &ReferenceSystem, to_crs: &ReferenceSystem) -> CrsResult<Point> {
        if from_crs.equals(to_crs) {
            return Ok(*point);
        }

        let conversion = from_crs.conversion_to(to_crs).ok_or_else(|| CrsError::NotConvertible {
            from: from_crs.display_label(),
            to: to_crs.display_label(),
        })?;

        let transformed = conversion.apply(*point);
        debug!("Transformed ({}, {}) to ({}, {})", point.x, point.y, transformed.x, transformed.y);

        Ok(transformed)
    }

    /// Transform a batch of points, failing if the systems are not convertible
    pub fn transform_points(&self, points: &[Point], from_crs: &ReferenceSystem, to_crs: &ReferenceSystem) -> CrsResult<Vec<Point>> {
        let conversion = from_crs.conversion_to(to_crs).ok_or_else(|| CrsError::NotConvertible {
            from: from_crs.display_label(),
            to: to_crs.display_label(),
        })?;

        Ok(points.iter().map(|point| conversion.apply(*point)).collect())
    }

    /// Transform a bounding box between reference systems
    pub fn transform_bbox(&self, bbox: &BoundingBox, from_crs: &ReferenceSystem, to_crs: &ReferenceSystem) -> CrsResult<BoundingBox> {
        if from_crs.equals(to_crs) {
            return Ok(bbox.clone().with_crs(to_crs));
        }

        let min_point = Point::new(bbox.min_x, bbox.min_y);
        let max_point = Point::new(bbox.max_x, bbox.max_y);

        let transformed_min = self.transform_point(&min_point, from_crs, to_crs)?;
        let transformed_max = self.transform_point(&max_point, from_crs, to_crs)?;

        Ok(BoundingBox::from_corners(transformed_min, transformed_max).with_crs(to_crs))
    }
}
