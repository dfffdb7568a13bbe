//! Shared and parallel descriptions.
//!
//! Describing a type is deterministic and free of side effects, so results can be computed
//! concurrently and shared. [`MetadataCache`] keeps one `Arc<TypeMetadata>` per type full
//! name; [`describe_all`] fans a batch of types out over the rayon thread pool.

use std::sync::Arc;

use dashmap::DashMap;
use rayon::prelude::*;

use crate::metadata::{
    configuration::{describe, describe_with, TypeMetadata},
    diagnostics::NullMonitor,
    typesystem::TypeRc,
    validation::ValidationConfig,
};

/// Describes every type in `targets` in parallel, preserving input order.
pub fn describe_all(targets: &[TypeRc]) -> Vec<TypeMetadata> {
    targets.par_iter().map(describe).collect()
}

/// Concurrent memo of descriptions keyed by type full name.
///
/// All lookups go through a shared reference, so one cache can be handed to many threads.
/// Two threads racing on the same missing type may both describe it; both results are
/// equal and the first one stored wins.
#[derive(Debug, Default)]
pub struct MetadataCache {
    config: ValidationConfig,
    entries: DashMap<String, Arc<TypeMetadata>>,
}

impl MetadataCache {
    /// Creates an empty cache using the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ValidationConfig::default())
    }

    /// Creates an empty cache describing types with `config`.
    #[must_use]
    pub fn with_config(config: ValidationConfig) -> Self {
        MetadataCache {
            config,
            entries: DashMap::new(),
        }
    }

    /// Returns the cached description of `target`, describing it on first use.
    pub fn get_or_describe(&self, target: &TypeRc) -> Arc<TypeMetadata> {
        let key = target.fullname();
        if let Some(cached) = self.entries.get(&key) {
            return Arc::clone(cached.value());
        }

        let metadata = Arc::new(describe_with(target, &self.config, &NullMonitor));
        Arc::clone(self.entries.entry(key).or_insert(metadata).value())
    }

    /// Returns the cached description for a type full name, if present.
    pub fn get(&self, fullname: &str) -> Option<Arc<TypeMetadata>> {
        self.entries.get(fullname).map(|entry| Arc::clone(entry.value()))
    }

    /// Number of cached descriptions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached description.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::typesystem::TypeBuilder,
        test::factories::{port_accessors, server_config},
    };

    #[test]
    fn test_cache_reuses_description() {
        let cache = MetadataCache::new();
        assert!(cache.is_empty());

        let target = server_config();
        let first = cache.get_or_describe(&target);
        let second = cache.get_or_describe(&target);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert!(cache.get("com.example.ServerConfig").is_some());
        assert!(cache.get("com.example.Missing").is_none());

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_shared_across_threads() {
        let cache = MetadataCache::new();
        let target = server_config();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    assert!(cache.get_or_describe(&target).is_valid());
                });
            }
        });

        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_describe_all_preserves_order() {
        let targets: Vec<TypeRc> = (0..8)
            .map(|i| {
                port_accessors(TypeBuilder::class("batch", &format!("Config{i}")))
                    .default_constructor()
                    .build()
                    .unwrap()
            })
            .collect();

        let described = describe_all(&targets);
        assert_eq!(described.len(), 8);
        for (i, metadata) in described.iter().enumerate() {
            assert_eq!(metadata.target_type().fullname(), format!("batch.Config{i}"));
            assert!(metadata.is_valid());
        }
    }
}
