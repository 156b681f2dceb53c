//! Coordinate handling on top of reference systems
//!
//! Points, reference-tagged points and bounding boxes, plus a transformer
//! that reports missing conversion paths as errors.

mod bbox;
mod geo_point;
mod point;
mod transform;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::geo_point::GeoPoint;
pub use self::point::Point;
pub use self::transform::CoordinateTransformer;
