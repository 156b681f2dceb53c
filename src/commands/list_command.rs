//! Command listing the known reference systems

use crate::catalog::Catalog;
use crate::commands::command_traits::Command;
use crate::config::SystemSet;
use crate::crs::errors::CrsResult;
use crate::crs::ReferenceSystem;
use crate::utils::logger::Logger;

/// Command printing catalog and user-defined systems
pub struct ListCommand<'a> {
    /// Built-in systems with their names
    catalog_systems: Vec<(String, ReferenceSystem)>,
    /// User-defined systems with their names
    user_systems: Vec<(String, ReferenceSystem)>,
    logger: &'a Logger,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command
    pub fn new(catalog: &Catalog, user_systems: &SystemSet, logger: &'a Logger) -> Self {
        ListCommand {
            catalog_systems: catalog.systems()
                .into_iter()
                .map(|(name, system)| (name.to_string(), system.clone()))
                .collect(),
            user_systems: user_systems.iter()
                .map(|(name, system)| (name.to_string(), system.clone()))
                .collect(),
            logger,
        }
    }

    fn format_entry(name: &str, system: &ReferenceSystem) -> String {
        let code = match (system.authority(), system.id()) {
            (Some(authority), Some(id)) => format!("{}:{}", authority, id),
            (None, Some(id)) => id.to_string(),
            _ => "-".to_string(),
        };
        let summary = system.details()
            .or(system.wkt())
            .unwrap_or("");

        format!("  {:<24} {:<10} {}", name, code, summary)
    }
}

impl<'a> Command for ListCommand<'a> {
    fn execute(&self) -> CrsResult<()> {
        let mut lines = vec!["Built-in systems:".to_string()];
        lines.extend(self.catalog_systems.iter().map(|(name, system)| Self::format_entry(name, system)));

        if !self.user_systems.is_empty() {
            lines.push("User-defined systems:".to_string());
            lines.extend(self.user_systems.iter().map(|(name, system)| Self::format_entry(name, system)));
        }

        for line in &lines {
            println!("{}", line);
            self.logger.log(line)?;
        }

        Ok(())
    }
}
