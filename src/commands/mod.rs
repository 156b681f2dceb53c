//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod check_command;
pub mod convert_command;
pub mod list_command;

pub use cli::build_cli;
pub use command_traits::{Command, CommandFactory};
pub use check_command::CheckCommand;
pub use convert_command::ConvertCommand;
pub use list_command::ListCommand;

use clap::ArgMatches;

use crate::catalog::Catalog;
use crate::config::SystemSet;
use crate::crs::errors::{CrsError, CrsResult};
use crate::crs::ReferenceSystem;
use crate::utils::logger::Logger;

/// Source and target systems selected on the command line
pub struct SystemPair {
    /// System the input is in
    pub from: ReferenceSystem,
    /// System to convert into
    pub to: ReferenceSystem,
}

/// Resolve the `--from` and `--to` selectors
pub(crate) fn resolve_pair(args: &ArgMatches, catalog: &Catalog, user_systems: &SystemSet) -> CrsResult<SystemPair> {
    let from = args.get_one::<String>("from")
        .ok_or_else(|| CrsError::GenericError("Missing source system (--from)".to_string()))?;
    let to = args.get_one::<String>("to")
        .ok_or_else(|| CrsError::GenericError("Missing target system (--to)".to_string()))?;

    Ok(SystemPair {
        from: user_systems.find(from, catalog)?,
        to: user_systems.find(to, catalog)?,
    })
}

/// Factory for creating command instances based on CLI arguments
pub struct CrskitCommandFactory<'c> {
    catalog: &'c Catalog,
    user_systems: SystemSet,
}

impl<'c> CrskitCommandFactory<'c> {
    /// Create a new factory over a catalog and user-defined systems
    pub fn new(catalog: &'c Catalog, user_systems: SystemSet) -> Self {
        CrskitCommandFactory {
            catalog,
            user_systems,
        }
    }
}

impl<'a, 'c> CommandFactory<'a> for CrskitCommandFactory<'c> {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> CrsResult<Box<dyn Command + 'a>> {
        if args.get_flag("list") {
            Ok(Box::new(ListCommand::new(self.catalog, &self.user_systems, logger)))
        } else if args.get_flag("check") {
            Ok(Box::new(CheckCommand::new(args, self.catalog, &self.user_systems, logger)?))
        } else {
            // Default to converting the given coordinate
            Ok(Box::new(ConvertCommand::new(args, self.catalog, &self.user_systems, logger)?))
        }
    }
}
