//! Coordinate conversion command
//!
//! Converts a single coordinate pair from one reference system to another
//! and prints the result.

use clap::ArgMatches;
use log::info;

use crate::catalog::Catalog;
use crate::commands::command_traits::Command;
use crate::commands::{resolve_pair, SystemPair};
use crate::config::SystemSet;
use crate::coordinate::{CoordinateTransformer, Point};
use crate::crs::errors::{CrsError, CrsResult};
use crate::utils::logger::Logger;

/// Command for converting a coordinate between reference systems
pub struct ConvertCommand<'a> {
    /// Source and target systems
    systems: SystemPair,
    /// Coordinate in the source system
    point: Point,
    /// Logger for recording results
    logger: &'a Logger,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `catalog` - Built-in systems
    /// * `user_systems` - Systems loaded from a definitions file
    /// * `logger` - Logger for recording results
    ///
    /// # Returns
    /// A new ConvertCommand instance or an error
    pub fn new(args: &ArgMatches, catalog: &Catalog, user_systems: &SystemSet, logger: &'a Logger) -> CrsResult<Self> {
        let coordinate = args.get_one::<String>("coordinate")
            .ok_or_else(|| CrsError::InvalidCoordinate("Missing coordinate to convert".to_string()))?;
        let point = Point::from_string(coordinate)?;
        let systems = resolve_pair(args, catalog, user_systems)?;

        Ok(ConvertCommand {
            systems,
            point,
            logger,
        })
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self) -> CrsResult<()> {
        let SystemPair { from, to } = &self.systems;
        info!("Converting ({}, {}) from {} to {}", self.point.x, self.point.y, from, to);

        let converted = CoordinateTransformer.transform_point(&self.point, from, to)?;

        println!("{} {}", converted.x, converted.y);
        self.logger.log_conversion(from, to, &self.point, &converted)?;

        Ok(())
    }
}
