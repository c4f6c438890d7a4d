//! Explicit cache of boundary data
//!
//! Callers create a [`DataCache`] once and pass it (or an `Arc` of it) to
//! whatever needs boundary data. There is no process-wide instance.

use crate::error::Result;
use crate::kinds::BoundaryKind;
use brkit_core::BoundaryData;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Keyed store of shared, immutable [`BoundaryData`]
#[derive(Debug, Default)]
pub struct DataCache {
    entries: RwLock<HashMap<String, Arc<BoundaryData>>>,
}

impl DataCache {
    /// Empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache with every built-in kind loaded
    pub fn with_builtins() -> Result<Self> {
        let cache = Self::new();
        for kind in BoundaryKind::ALL {
            cache.builtin(kind)?;
        }
        Ok(cache)
    }

    /// Return the entry for `key`, calling `loader` to populate it if absent
    ///
    /// The loader runs at most once per key even when several threads race:
    /// the write lock is taken and the key re-checked before loading.
    pub fn get_or_load<F>(&self, key: &str, loader: F) -> Result<Arc<BoundaryData>>
    where
        F: FnOnce() -> Result<BoundaryData>,
    {
        if let Some(data) = self.get(key) {
            return Ok(data);
        }

        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if let Some(data) = entries.get(key) {
            return Ok(Arc::clone(data));
        }

        let data = Arc::new(loader()?);
        log::debug!("cached boundary data '{}' under '{}'", data.name(), key);
        entries.insert(key.to_string(), Arc::clone(&data));
        Ok(data)
    }

    /// Built-in data for `kind`, loaded on first use
    pub fn builtin(&self, kind: BoundaryKind) -> Result<Arc<BoundaryData>> {
        self.get_or_load(kind.name(), || kind.build_data())
    }

    /// Store `data` under its own name, replacing any previous entry
    pub fn insert(&self, data: BoundaryData) -> Arc<BoundaryData> {
        let data = Arc::new(data);
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(data.name().to_string(), Arc::clone(&data));
        data
    }

    /// Cached entry for `key`, if any
    pub fn get(&self, key: &str) -> Option<Arc<BoundaryData>> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    /// Sorted keys of every cached entry
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Whether nothing is cached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry; data already handed out stays alive
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn test_builtin_is_shared() {
        let cache = DataCache::new();
        let a = cache.builtin(BoundaryKind::Word).unwrap();
        let b = cache.builtin(BoundaryKind::Word).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_with_builtins() {
        let cache = DataCache::with_builtins().unwrap();
        assert_eq!(cache.names(), vec!["character", "line", "sentence", "word"]);
    }

    #[test]
    fn test_loader_runs_once() {
        let cache = DataCache::new();
        let calls = AtomicUsize::new(0);
        for _ in 0..3 {
            cache
                .get_or_load("custom", || {
                    calls.fetch_add(1, Ordering::SeqCst);
                    BoundaryKind::Character.build_data()
                })
                .unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_loader_error_is_not_cached() {
        let cache = DataCache::new();
        let result = cache.get_or_load("broken", || "nope".parse::<BoundaryKind>()?.build_data());
        assert!(result.is_err());
        assert!(cache.get("broken").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_lookups_share_one_entry() {
        let cache = Arc::new(DataCache::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.builtin(BoundaryKind::Sentence).unwrap())
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for data in &results[1..] {
            assert!(Arc::ptr_eq(&results[0], data));
        }
    }

    #[test]
    fn test_insert_and_clear() {
        let cache = DataCache::new();
        let data = BoundaryKind::Line.build_data().unwrap();
        cache.insert(data);
        assert!(cache.get("line").is_some());
        cache.clear();
        assert!(cache.is_empty());
    }
}
