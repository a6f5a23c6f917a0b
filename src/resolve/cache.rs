//! Memoized resolution.

use std::collections::HashMap;
use std::sync::Mutex;

use super::resolver::Resolution;
use super::variant_set::VariantSet;
use crate::props::Props;

/// A [`VariantSet`] wrapper that memoizes resolutions by property bag.
///
/// Rendering tends to resolve the same property bag over and over; this
/// wrapper keys completed resolutions on the bag's canonical serialization
/// (keys serialize sorted, so call-site key order cannot defeat the cache)
/// and hands back clones. Purely an optimization — results are identical
/// with or without it.
///
/// The cache grows one entry per distinct bag and is never evicted
/// automatically; call [`clear`](Self::clear) if a long-lived resolver sees
/// unbounded distinct bags.
///
/// # Example
///
/// ```rust
/// use attire::{CachedResolver, Config, Props, VariantSet};
///
/// let resolver = CachedResolver::new(VariantSet::new(
///     "btn",
///     Config::new().conditional("outline", "btn-outline"),
/// ));
///
/// let props = Props::new().with("outline", true);
/// assert_eq!(resolver.resolve(&props).class_name, "btn btn-outline");
/// assert_eq!(resolver.resolve(&props).class_name, "btn btn-outline");
/// assert_eq!(resolver.len(), 1);
/// ```
#[derive(Debug)]
pub struct CachedResolver {
    set: VariantSet,
    cache: Mutex<HashMap<String, Resolution>>,
}

impl CachedResolver {
    /// Wraps a variant set with an empty cache.
    pub fn new(set: VariantSet) -> Self {
        Self {
            set,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The wrapped variant set.
    pub fn variant_set(&self) -> &VariantSet {
        &self.set
    }

    /// Resolves through the cache.
    pub fn resolve(&self, props: &Props) -> Resolution {
        let key = match serde_json::to_string(props) {
            Ok(key) => key,
            Err(_) => return self.set.resolve(props),
        };

        if let Some(hit) = self.cache.lock().unwrap().get(&key) {
            return hit.clone();
        }

        let resolution = self.set.resolve(props);
        self.cache
            .lock()
            .unwrap()
            .insert(key, resolution.clone());
        resolution
    }

    /// Resolves just the class-name string, through the cache.
    pub fn class_names(&self, props: &Props) -> String {
        self.resolve(props).class_name
    }

    /// Number of cached resolutions.
    pub fn len(&self) -> usize {
        self.cache.lock().unwrap().len()
    }

    /// Returns true if nothing is cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.lock().unwrap().is_empty()
    }

    /// Drops every cached resolution.
    pub fn clear(&self) {
        self.cache.lock().unwrap().clear();
    }
}
