pub mod catalog;
pub mod commands;
pub mod config;
pub mod coordinate;
pub mod crs;
pub mod utils;

pub use catalog::{AlbersParameters, Catalog, CATALOG};
pub use coordinate::{BoundingBox, CoordinateTransformer, GeoPoint, Point};
pub use crs::{Conversion, CrsError, CrsResult, ReferenceSystem, SystemDescriptor};
