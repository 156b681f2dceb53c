//! Error types for reference system handling
//!
//! Conversion lookups themselves never fail with an error: a missing path is
//! reported as `None`. These errors belong to the layers built on top of
//! the lookups (points, boxes, configuration and the CLI).

use std::fmt;
use std::io;

/// Errors raised around reference systems and their conversions
#[derive(Debug)]
pub enum CrsError {
    /// I/O error
    IoError(io::Error),
    /// No conversion path exists between two systems
    NotConvertible {
        /// Display label of the source system
        from: String,
        /// Display label of the target system
        to: String,
    },
    /// A selector did not resolve to any known system
    UnknownSystem(String),
    /// A system descriptor could not be built from its definition
    InvalidDescriptor(String),
    /// Configuration file could not be parsed
    ConfigError(String),
    /// Coordinate text could not be parsed
    InvalidCoordinate(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for CrsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrsError::IoError(e) => write!(f, "I/O error: {}", e),
            CrsError::NotConvertible { from, to } => {
                write!(f, "Cannot convert coordinates from {} to {}", from, to)
            },
            CrsError::UnknownSystem(s) => write!(f, "Unknown reference system: {}", s),
            CrsError::InvalidDescriptor(msg) => write!(f, "Invalid system descriptor: {}", msg),
            CrsError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            CrsError::InvalidCoordinate(s) => write!(f, "Invalid coordinate: {}", s),
            CrsError::GenericError(msg) => write!(f, "CRS error: {}", msg),
        }
    }
}

impl std::error::Error for CrsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CrsError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CrsError {
    fn from(error: io::Error) -> Self {
        CrsError::IoError(error)
    }
}

/// Result type for reference system operations
pub type CrsResult<T> = Result<T, CrsError>;

impl From<String> for CrsError {
    fn from(msg: String) -> Self {
        CrsError::GenericError(msg)
    }
}
