//! Conversion path discovery
//!
//! Walks the graph formed by the systems' conversion tables depth-first and
//! composes the first chain of conversions that reaches the target. The
//! result is stored in the source's table so that repeated lookups are
//! direct. The first path found wins; it is not necessarily the shortest.

use std::collections::HashSet;

use log::{debug, trace};

use super::conversion::Conversion;
use super::system::ReferenceSystem;

/// Marks a system as being searched for the lifetime of the guard
///
/// The mark is removed when the guard is dropped, so every exit path out of
/// the search clears it.
struct InProgress<'a> {
    visiting: &'a mut HashSet<usize>,
    key: usize,
}

impl<'a> InProgress<'a> {
    /// Mark `system`, or return `None` if it is already being searched
    fn enter(visiting: &'a mut HashSet<usize>, system: &ReferenceSystem) -> Option<Self> {
        let key = system.key();
        if visiting.insert(key) {
            Some(InProgress { visiting, key })
        } else {
            None
        }
    }
}

impl Drop for InProgress<'_> {
    fn drop(&mut self) {
        self.visiting.remove(&self.key);
    }
}

/// Find a conversion from `source` to `target` through the conversion graph
///
/// Returns the identity conversion for equal systems (not stored), and
/// `None` if no chain of conversions connects the two.
pub(crate) fn discover(source: &ReferenceSystem, target: &ReferenceSystem) -> Option<Conversion> {
    let mut visiting = HashSet::new();
    let found = discover_from(source, target, &mut visiting);

    if found.is_none() {
        debug!("No conversion path from {} to {}", source, target);
    }

    found
}

fn discover_from(
    source: &ReferenceSystem,
    target: &ReferenceSystem,
    visiting: &mut HashSet<usize>,
) -> Option<Conversion> {
    if source.equals(target) {
        return Some(Conversion::identity());
    }

    let mut guard = match InProgress::enter(visiting, source) {
        Some(guard) => guard,
        None => {
            trace!("Skipping {}: search already in progress", source);
            return None;
        }
    };

    for (neighbor, edge) in source.edges() {
        if neighbor.equals(target) {
            trace!("Direct edge {} -> {} reaches {}", source, neighbor, target);
            source.cache_conversion(target, edge.clone());
            return Some(edge);
        }

        if let Some(inner) = discover_from(&neighbor, target, &mut *guard.visiting) {
            debug!("Discovered conversion {} -> {} via {}", source, target, neighbor);
            let composed = edge.then(&inner);
            source.cache_conversion(target, composed.clone());
            return Some(composed);
        }
    }

    None
}
