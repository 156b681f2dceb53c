//! Reference system entity and its identity rules

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use log::debug;

use super::conversion::Conversion;
use super::discovery;
use super::ConversionRegistry;

/// Descriptive attributes of a reference system
///
/// All fields are optional. Systems without `id` and `wkt` only compare
/// equal to themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemDescriptor {
    /// Numeric identifier, e.g. an EPSG code
    pub id: Option<u32>,
    /// Authority issuing the identifier, e.g. "EPSG"
    pub authority: Option<String>,
    /// Well-known-text definition, compared as opaque text
    pub wkt: Option<String>,
    /// Free-form description
    pub details: Option<String>,
}

impl SystemDescriptor {
    /// Descriptor identified by an authority code
    pub fn with_id(id: u32, authority: &str) -> Self {
        SystemDescriptor {
            id: Some(id),
            authority: Some(authority.to_string()),
            ..Default::default()
        }
    }

    /// Descriptor identified only by its WKT definition
    pub fn with_wkt(wkt: &str) -> Self {
        SystemDescriptor {
            wkt: Some(wkt.to_string()),
            ..Default::default()
        }
    }

    /// Descriptor carrying only a description
    pub fn with_details(details: &str) -> Self {
        SystemDescriptor {
            details: Some(details.to_string()),
            ..Default::default()
        }
    }

    /// Set the WKT definition
    pub fn wkt(mut self, wkt: &str) -> Self {
        self.wkt = Some(wkt.to_string());
        self
    }

    /// Set the free-form description
    pub fn details(mut self, details: &str) -> Self {
        self.details = Some(details.to_string());
        self
    }
}

/// Shared state behind a `ReferenceSystem` handle
pub(crate) struct SystemRecord {
    descriptor: SystemDescriptor,
    conversions: Mutex<ConversionRegistry>,
}

/// A coordinate reference system
///
/// `ReferenceSystem` is a handle: cloning it yields the same instance, and
/// conversions registered through any clone are visible through all of them.
/// Conversion tables are keyed by instance, while [`equals`](Self::equals)
/// compares systems semantically.
#[derive(Clone)]
pub struct ReferenceSystem {
    record: Arc<SystemRecord>,
}

impl ReferenceSystem {
    /// Create a new reference system with an empty conversion table
    pub fn new(descriptor: SystemDescriptor) -> Self {
        ReferenceSystem {
            record: Arc::new(SystemRecord {
                descriptor,
                conversions: Mutex::new(ConversionRegistry::new()),
            }),
        }
    }

    pub(crate) fn from_record(record: Arc<SystemRecord>) -> Self {
        ReferenceSystem { record }
    }

    pub(crate) fn record(&self) -> &Arc<SystemRecord> {
        &self.record
    }

    /// Stable identity key of this instance
    pub(crate) fn key(&self) -> usize {
        Arc::as_ptr(&self.record) as usize
    }

    /// The descriptor this system was built from
    pub fn descriptor(&self) -> &SystemDescriptor {
        &self.record.descriptor
    }

    /// Numeric identifier, if any
    pub fn id(&self) -> Option<u32> {
        self.record.descriptor.id
    }

    /// Authority name, if any
    pub fn authority(&self) -> Option<&str> {
        self.record.descriptor.authority.as_deref()
    }

    /// WKT definition, if any
    pub fn wkt(&self) -> Option<&str> {
        self.record.descriptor.wkt.as_deref()
    }

    /// Free-form description, if any
    pub fn details(&self) -> Option<&str> {
        self.record.descriptor.details.as_deref()
    }

    /// Check if both handles point to the very same instance
    pub fn is_same_instance(&self, other: &ReferenceSystem) -> bool {
        Arc::ptr_eq(&self.record, &other.record)
    }

    /// Check if `other` represents the same reference system
    ///
    /// True for the same instance, for matching ids, or for matching
    /// non-empty WKT definitions.
    pub fn equals(&self, other: &ReferenceSystem) -> bool {
        if self.is_same_instance(other) {
            return true;
        }

        if let (Some(own_id), Some(other_id)) = (self.id(), other.id()) {
            if own_id == other_id {
                return true;
            }
        }

        match (self.wkt(), other.wkt()) {
            (Some(own_wkt), Some(other_wkt)) => !own_wkt.is_empty() && own_wkt == other_wkt,
            _ => false,
        }
    }

    /// Register a direct conversion from this system to `target`
    ///
    /// Replaces whatever conversion was stored for that target before,
    /// including one found by discovery.
    pub fn register_conversion(&self, target: &ReferenceSystem, conversion: Conversion) {
        debug!("Registering conversion {} -> {}", self, target);
        self.conversions().insert(target, conversion);
    }

    /// Get a conversion from this system to `target`
    ///
    /// Returns a stored conversion when one exists for the target instance,
    /// otherwise searches the conversion graph. Paths found by the search are
    /// stored for later calls. `None` means the systems are not convertible.
    pub fn conversion_to(&self, target: &ReferenceSystem) -> Option<Conversion> {
        let stored = self.conversions().get(target);
        if stored.is_some() {
            return stored;
        }

        discovery::discover(self, target)
    }

    /// Check if coordinates can be converted from this system to `target`
    pub fn can_convert_to(&self, target: &ReferenceSystem) -> bool {
        self.conversion_to(target).is_some()
    }

    /// Check if a conversion to exactly this target instance is stored,
    /// without searching the graph
    pub fn has_cached_conversion(&self, target: &ReferenceSystem) -> bool {
        self.conversions().get(target).is_some()
    }

    /// Number of entries in the conversion table
    pub fn conversion_count(&self) -> usize {
        self.conversions().len()
    }

    /// Short label: the id if present, else the WKT, else the details
    pub fn display_label(&self) -> String {
        let descriptor = self.descriptor();
        if let Some(id) = descriptor.id {
            return id.to_string();
        }
        if let Some(wkt) = &descriptor.wkt {
            return wkt.clone();
        }
        descriptor.details.clone().unwrap_or_default()
    }

    /// Full description of the system's attributes as a JSON-style object
    pub fn description(&self) -> String {
        let descriptor = self.descriptor();
        let mut fields = Vec::new();

        if let Some(id) = descriptor.id {
            fields.push(format!("\"id\":{}", id));
        }
        if let Some(authority) = &descriptor.authority {
            fields.push(format!("\"authority\":{:?}", authority));
        }
        if let Some(wkt) = &descriptor.wkt {
            fields.push(format!("\"wkt\":{:?}", wkt));
        }
        if let Some(details) = &descriptor.details {
            fields.push(format!("\"details\":{:?}", details));
        }

        format!("{{{}}}", fields.join(","))
    }

    /// Snapshot of the outgoing edges, in registration order
    pub(crate) fn edges(&self) -> Vec<(ReferenceSystem, Conversion)> {
        self.conversions().edges()
    }

    /// Store a conversion found by discovery
    pub(crate) fn cache_conversion(&self, target: &ReferenceSystem, conversion: Conversion) {
        self.conversions().insert(target, conversion);
    }

    fn conversions(&self) -> MutexGuard<'_, ConversionRegistry> {
        // Conversions never run while the lock is held, so a poisoned lock
        // still guards a consistent table
        self.record
            .conversions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl PartialEq for ReferenceSystem {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl fmt::Display for ReferenceSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_label())
    }
}

impl fmt::Debug for ReferenceSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceSystem")
            .field("descriptor", self.descriptor())
            .field("conversions", &self.conversion_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Point;

    #[test]
    fn test_equality_rules() {
        let by_id = ReferenceSystem::new(SystemDescriptor::with_id(3857, "EPSG"));
        let by_id_twin = ReferenceSystem::new(SystemDescriptor::with_id(3857, "OTHER"));
        let by_wkt = ReferenceSystem::new(SystemDescriptor::with_wkt("PROJCS[\"x\"]"));
        let by_wkt_twin = ReferenceSystem::new(SystemDescriptor::with_wkt("PROJCS[\"x\"]"));
        let plain = ReferenceSystem::new(SystemDescriptor::with_details("plain"));
        let plain_twin = ReferenceSystem::new(SystemDescriptor::with_details("plain"));

        assert!(by_id.equals(&by_id_twin));
        assert!(by_wkt.equals(&by_wkt_twin));
        assert!(plain.equals(&plain.clone()));
        assert!(!plain.equals(&plain_twin));
        assert!(!by_id.equals(&by_wkt));
    }

    #[test]
    fn test_equality_is_symmetric() {
        let systems = vec![
            ReferenceSystem::new(SystemDescriptor::with_id(4326, "EPSG")),
            ReferenceSystem::new(SystemDescriptor::with_id(4326, "EPSG").wkt("GEOGCS[\"a\"]")),
            ReferenceSystem::new(SystemDescriptor::with_wkt("GEOGCS[\"a\"]")),
            ReferenceSystem::new(SystemDescriptor::with_wkt("")),
            ReferenceSystem::new(SystemDescriptor::with_wkt("")),
            ReferenceSystem::new(SystemDescriptor::default()),
        ];

        for a in &systems {
            for b in &systems {
                assert_eq!(a.equals(b), b.equals(a));
            }
        }
    }

    #[test]
    fn test_empty_wkt_is_not_an_identity() {
        let a = ReferenceSystem::new(SystemDescriptor::with_wkt(""));
        let b = ReferenceSystem::new(SystemDescriptor::with_wkt(""));
        assert!(!a.equals(&b));
    }

    #[test]
    fn test_display_label_priority() {
        let full = ReferenceSystem::new(SystemDescriptor::with_id(84, "OCG").wkt("GEOGCS").details("d"));
        let wkt_only = ReferenceSystem::new(SystemDescriptor::with_wkt("GEOGCS").details("d"));
        let details_only = ReferenceSystem::new(SystemDescriptor::with_details("d"));
        let empty = ReferenceSystem::new(SystemDescriptor::default());

        assert_eq!(full.display_label(), "84");
        assert_eq!(wkt_only.display_label(), "GEOGCS");
        assert_eq!(details_only.to_string(), "d");
        assert_eq!(empty.display_label(), "");
    }

    #[test]
    fn test_description_lists_present_fields() {
        let system = ReferenceSystem::new(SystemDescriptor::with_id(3395, "EPSG"));
        assert_eq!(system.description(), "{\"id\":3395,\"authority\":\"EPSG\"}");
    }

    #[test]
    fn test_register_overwrites_previous_conversion() {
        let a = ReferenceSystem::new(SystemDescriptor::with_details("a"));
        let b = ReferenceSystem::new(SystemDescriptor::with_details("b"));

        a.register_conversion(&b, Conversion::new(|p: Point| Point::new(p.x + 1.0, p.y)));
        a.register_conversion(&b, Conversion::new(|p: Point| Point::new(p.x + 2.0, p.y)));

        let conversion = a.conversion_to(&b);
        assert!(conversion.is_some());
        assert_eq!(conversion.map(|c| c.apply_xy(0.0, 0.0)), Some((2.0, 0.0)));
        assert_eq!(a.conversion_count(), 1);
    }
}
