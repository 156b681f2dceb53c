//! Logger utility for application-wide logging
//!
//! Diagnostics go through the `log` facade with `env_logger` as the backend.
//! `Logger` additionally keeps a plain-text transcript of command results
//! in a file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use log::LevelFilter;

use crate::coordinate::Point;
use crate::crs::ReferenceSystem;

/// Transcript writer for command results
pub struct Logger {
    /// File handle for transcript output
    file: Mutex<Option<File>>,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the transcript file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
        })
    }

    /// Creates a logger that discards everything
    pub fn disabled() -> Self {
        Logger {
            file: Mutex::new(None),
        }
    }

    /// Logs a message to the transcript file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs a single conversion in a formatted way
    ///
    /// # Arguments
    ///
    /// * `from` - Source reference system
    /// * `to` - Target reference system
    /// * `input` - Point in the source system
    /// * `output` - Converted point
    pub fn log_conversion(&self, from: &ReferenceSystem, to: &ReferenceSystem, input: &Point, output: &Point) -> io::Result<()> {
        self.log(&format!(
            "{} -> {}: ({}, {}) -> ({}, {})",
            from, to, input.x, input.y, output.x, output.y
        ))
    }

    /// Static method to initialize the global logger
    ///
    /// Uses `RUST_LOG` when set, otherwise `debug` for verbose runs and
    /// `warn` for normal ones.
    pub fn init_global_logger(verbose: bool) {
        let default_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };

        let result = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(default_level.to_string()),
        )
        .format_timestamp(None)
        .try_init();

        if result.is_err() {
            // Logger was already set - this should not happen in normal usage
            eprintln!("Warning: Global logger was already initialized");
        }
    }
}
