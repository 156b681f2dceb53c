//! User-defined reference systems from TOML
//!
//! A definitions file lists `[[system]]` tables. Each one becomes a named
//! reference system; Albers systems are wired to the catalog's WGS84 when
//! built.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{debug, info, warn};

use crate::catalog::{albers_equal_area, normalize_name, AlbersParameters, Catalog};
use crate::crs::errors::{CrsError, CrsResult};
use crate::crs::{ReferenceSystem, SystemDescriptor};
use super::system_set::SystemSet;

/// What kind of system a definition describes
#[derive(Debug, Clone, PartialEq)]
pub enum SystemKind {
    /// A system known only by its descriptor, with no conversions
    Plain(SystemDescriptor),
    /// An Albers Equal-Area system wired to WGS84
    Albers(AlbersParameters),
}

/// One `[[system]]` entry
#[derive(Debug, Clone, PartialEq)]
pub struct SystemDefinition {
    /// Normalized name used to select the system
    pub name: String,
    /// Kind and parameters
    pub kind: SystemKind,
}

/// Parsed contents of a definitions file
#[derive(Debug, Clone, Default)]
pub struct SystemDefinitions {
    /// Definitions in file order
    pub definitions: Vec<SystemDefinition>,
}

impl FromStr for SystemDefinitions {
    type Err = CrsError;

    /// Parse definitions from a TOML string
    fn from_str(content: &str) -> CrsResult<Self> {
        let document: toml::Table = content.parse()
            .map_err(|e| CrsError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let entries = match document.get("system") {
            Some(value) => value.as_array()
                .ok_or_else(|| CrsError::ConfigError("`system` must be an array of tables".to_string()))?
                .clone(),
            None => {
                warn!("Definitions contain no [[system]] entries");
                Vec::new()
            }
        };

        let mut definitions = Vec::with_capacity(entries.len());
        let mut seen = HashSet::new();

        for (index, entry) in entries.iter().enumerate() {
            let table = entry.as_table()
                .ok_or_else(|| CrsError::ConfigError(format!("system #{} is not a table", index + 1)))?;
            let definition = SystemDefinition::from_table(table, index)?;

            if !seen.insert(definition.name.clone()) {
                return Err(CrsError::ConfigError(format!("Duplicate system name: {}", definition.name)));
            }

            debug!("Parsed system definition '{}'", definition.name);
            definitions.push(definition);
        }

        Ok(SystemDefinitions { definitions })
    }
}

impl SystemDefinitions {
    /// Read and parse a definitions file
    pub fn from_file<P: AsRef<Path>>(path: P) -> CrsResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let definitions: SystemDefinitions = content.parse()?;

        info!("Loaded {} system definition(s) from {}",
              definitions.definitions.len(), path.as_ref().display());

        Ok(definitions)
    }

    /// Instantiate every definition against a catalog
    pub fn build(&self, catalog: &Catalog) -> SystemSet {
        let mut set = SystemSet::new();

        for definition in &self.definitions {
            if catalog.find(&definition.name).is_ok() {
                warn!("System '{}' shadows a catalog system of the same name", definition.name);
            }

            let system = match &definition.kind {
                SystemKind::Plain(descriptor) => ReferenceSystem::new(descriptor.clone()),
                SystemKind::Albers(params) => albers_equal_area(&catalog.wgs84, *params),
            };

            set.insert(&definition.name, system);
        }

        set
    }
}

impl SystemDefinition {
    fn from_table(table: &toml::Table, index: usize) -> CrsResult<Self> {
        let name = get_string(table, "name")?
            .map(|name| normalize_name(&name))
            .filter(|name| !name.is_empty())
            .ok_or_else(|| CrsError::InvalidDescriptor(format!("system #{} has no name", index + 1)))?;

        let kind = get_string(table, "kind")?.unwrap_or_else(|| "plain".to_string());

        let kind = match kind.to_lowercase().as_str() {
            "plain" => SystemKind::Plain(parse_descriptor(table, &name)?),
            "albers" => SystemKind::Albers(parse_albers(table, &name)?),
            other => {
                return Err(CrsError::InvalidDescriptor(format!(
                    "system '{}' has unknown kind '{}'", name, other)));
            }
        };

        Ok(SystemDefinition { name, kind })
    }
}

fn parse_descriptor(table: &toml::Table, name: &str) -> CrsResult<SystemDescriptor> {
    let id = match table.get("id") {
        Some(value) => {
            let raw = value.as_integer().ok_or_else(|| {
                CrsError::InvalidDescriptor(format!("system '{}': id must be an integer", name))
            })?;
            Some(u32::try_from(raw).map_err(|_| {
                CrsError::InvalidDescriptor(format!("system '{}': id {} is out of range", name, raw))
            })?)
        },
        None => None,
    };

    let descriptor = SystemDescriptor {
        id,
        authority: get_string(table, "authority")?,
        wkt: get_string(table, "wkt")?,
        details: get_string(table, "details")?,
    };

    if descriptor.id.is_none() && descriptor.wkt.is_none() {
        warn!("System '{}' has neither id nor wkt and only equals itself", name);
    }

    Ok(descriptor)
}

fn parse_albers(table: &toml::Table, name: &str) -> CrsResult<AlbersParameters> {
    for key in ["id", "authority", "wkt", "details"] {
        if table.contains_key(key) {
            warn!("System '{}': `{}` is ignored for Albers systems", name, key);
        }
    }

    let params = AlbersParameters::new(
        require_float(table, "lat0", name)?,
        require_float(table, "lon0", name)?,
        require_float(table, "standard_parallel_1", name)?,
        require_float(table, "standard_parallel_2", name)?,
    );

    if params.cone_constant().abs() < f64::EPSILON {
        return Err(CrsError::InvalidDescriptor(format!(
            "system '{}': standard parallels cancel out", name)));
    }

    Ok(params)
}

fn get_string(table: &toml::Table, key: &str) -> CrsResult<Option<String>> {
    match table.get(key) {
        Some(value) => value.as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| CrsError::InvalidDescriptor(format!("`{}` must be a string", key))),
        None => Ok(None),
    }
}

fn require_float(table: &toml::Table, key: &str, name: &str) -> CrsResult<f64> {
    let value = table.get(key).ok_or_else(|| {
        CrsError::InvalidDescriptor(format!("system '{}' is missing `{}`", name, key))
    })?;

    // Accept `60` as well as `60.0`
    value.as_float()
        .or_else(|| value.as_integer().map(|i| i as f64))
        .ok_or_else(|| CrsError::InvalidDescriptor(format!("system '{}': `{}` must be a number", name, key)))
}
