//! Convertibility check command

use clap::ArgMatches;
use log::info;

use crate::catalog::Catalog;
use crate::commands::command_traits::Command;
use crate::commands::{resolve_pair, SystemPair};
use crate::config::SystemSet;
use crate::crs::errors::CrsResult;
use crate::utils::logger::Logger;

/// Command reporting whether two systems are convertible
pub struct CheckCommand<'a> {
    systems: SystemPair,
    logger: &'a Logger,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command
    pub fn new(args: &ArgMatches, catalog: &Catalog, user_systems: &SystemSet, logger: &'a Logger) -> CrsResult<Self> {
        Ok(CheckCommand {
            systems: resolve_pair(args, catalog, user_systems)?,
            logger,
        })
    }
}

impl<'a> Command for CheckCommand<'a> {
    fn execute(&self) -> CrsResult<()> {
        let SystemPair { from, to } = &self.systems;
        let convertible = from.can_convert_to(to);
        info!("Checked {} -> {}: {}", from, to, convertible);

        let verdict = if convertible { "convertible" } else { "not convertible" };
        println!("{} -> {}: {}", from, to, verdict);
        self.logger.log(&format!("{} -> {}: {}", from, to, verdict))?;

        Ok(())
    }
}
