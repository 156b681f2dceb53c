//! Per-system table of outgoing conversions

use std::sync::Arc;

use super::conversion::Conversion;
use super::system::{ReferenceSystem, SystemRecord};

/// One outgoing edge of a reference system
struct RegistryEntry {
    /// Target system, kept alive for as long as the entry exists
    target: Arc<SystemRecord>,
    conversion: Conversion,
}

impl RegistryEntry {
    fn points_to(&self, target: &ReferenceSystem) -> bool {
        Arc::ptr_eq(&self.target, target.record())
    }
}

/// Conversions from one system to others, keyed by target identity
///
/// Entries keep their registration order. Overwriting an entry keeps its
/// original position.
#[derive(Default)]
pub struct ConversionRegistry {
    entries: Vec<RegistryEntry>,
}

impl ConversionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        ConversionRegistry::default()
    }

    /// Store a conversion to `target`, replacing any previous one
    pub fn insert(&mut self, target: &ReferenceSystem, conversion: Conversion) {
        match self.entries.iter_mut().find(|entry| entry.points_to(target)) {
            Some(entry) => entry.conversion = conversion,
            None => self.entries.push(RegistryEntry {
                target: Arc::clone(target.record()),
                conversion,
            }),
        }
    }

    /// Look up the conversion registered for exactly this target instance
    pub fn get(&self, target: &ReferenceSystem) -> Option<Conversion> {
        self.entries
            .iter()
            .find(|entry| entry.points_to(target))
            .map(|entry| entry.conversion.clone())
    }

    /// Snapshot of all entries in registration order
    pub fn edges(&self) -> Vec<(ReferenceSystem, Conversion)> {
        self.entries
            .iter()
            .map(|entry| (ReferenceSystem::from_record(Arc::clone(&entry.target)), entry.conversion.clone()))
            .collect()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
