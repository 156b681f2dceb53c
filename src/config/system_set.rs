//! Named collection of user-defined systems

use crate::catalog::{normalize_name, Catalog};
use crate::crs::errors::CrsResult;
use crate::crs::ReferenceSystem;

/// User-defined systems by name, consulted before the catalog
#[derive(Debug, Clone, Default)]
pub struct SystemSet {
    systems: Vec<(String, ReferenceSystem)>,
}

impl SystemSet {
    /// Create an empty set
    pub fn new() -> Self {
        SystemSet::default()
    }

    /// Add or replace a named system
    pub fn insert(&mut self, name: &str, system: ReferenceSystem) {
        let name = normalize_name(name);
        match self.systems.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = system,
            None => self.systems.push((name, system)),
        }
    }

    /// Look up a system by name
    pub fn get(&self, name: &str) -> Option<&ReferenceSystem> {
        let name = normalize_name(name);
        self.systems
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, system)| system)
    }

    /// Resolve a selector: user names first, then the catalog
    pub fn find(&self, selector: &str, catalog: &Catalog) -> CrsResult<ReferenceSystem> {
        match self.get(selector) {
            Some(system) => Ok(system.clone()),
            None => catalog.find(selector),
        }
    }

    /// Iterate over `(name, system)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReferenceSystem)> {
        self.systems.iter().map(|(name, system)| (name.as_str(), system))
    }

    /// Number of systems
    pub fn len(&self) -> usize {
        self.systems.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crs::SystemDescriptor;

    #[test]
    fn test_user_names_shadow_catalog() {
        let catalog = Catalog::new();
        let mut set = SystemSet::new();
        let custom = ReferenceSystem::new(SystemDescriptor::with_details("custom wgs"));
        set.insert("WGS84", custom.clone());

        assert!(set.find("wgs84", &catalog).map(|s| s.is_same_instance(&custom)).unwrap_or(false));
        assert!(set.find("EPSG:3857", &catalog).map(|s| s.is_same_instance(&catalog.web_mercator)).unwrap_or(false));
        assert!(set.find("nowhere", &catalog).is_err());
    }

    #[test]
    fn test_insert_replaces_by_name() {
        let mut set = SystemSet::new();
        set.insert("a", ReferenceSystem::new(SystemDescriptor::with_details("first")));
        set.insert("A", ReferenceSystem::new(SystemDescriptor::with_details("second")));

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("a").map(|s| s.display_label()), Some("second".to_string()));
    }
}
