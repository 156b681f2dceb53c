//! Configuration of user-defined reference systems
//!
//! Systems beyond the built-in catalog are described in a TOML file and
//! resolved by name before falling back to the catalog.

pub mod definitions;
pub mod system_set;

pub use definitions::{SystemDefinition, SystemDefinitions, SystemKind};
pub use system_set::SystemSet;

/// Default file name for system definitions
pub const DEFAULT_DEFINITIONS_FILE: &str = "crskit.toml";
