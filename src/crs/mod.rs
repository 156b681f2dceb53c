//! Coordinate reference systems and conversions between them
//!
//! A [`ReferenceSystem`] owns a table of direct conversions to other
//! systems. Asking for a conversion that is not in the table searches the
//! graph formed by all tables and stores whatever path it finds.

pub mod errors;
mod conversion;
mod discovery;
mod registry;
mod system;

pub use self::conversion::Conversion;
pub use self::errors::{CrsError, CrsResult};
pub(crate) use self::registry::ConversionRegistry;
pub use self::system::{ReferenceSystem, SystemDescriptor};
