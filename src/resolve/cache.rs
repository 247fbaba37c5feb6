//! Shared memo table used by the registry and the stack resolver.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::attr::StyleAttr;

/// A thread-safe map from keys to resolved styles.
///
/// Every cached value can be recomputed, so a poisoned lock is recovered
/// rather than propagated. Concurrent misses on the same key may both
/// compute and insert; the later insert overwrites an identical value.
#[derive(Debug)]
pub(crate) struct StyleCache<K> {
    entries: RwLock<HashMap<K, StyleAttr>>,
}

impl<K: Eq + Hash> StyleCache<K> {
    pub(crate) fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<StyleAttr>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.read().get(key).copied()
    }

    pub(crate) fn insert(&self, key: K, value: StyleAttr) {
        self.write().insert(key, value);
    }

    pub(crate) fn clear(&self) -> usize {
        let mut entries = self.write();
        let dropped = entries.len();
        entries.clear();
        dropped
    }

    pub(crate) fn len(&self) -> usize {
        self.read().len()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<K, StyleAttr>> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<K, StyleAttr>> {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<K: Eq + Hash> Default for StyleCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get_clear() {
        let cache: StyleCache<String> = StyleCache::new();
        assert_eq!(cache.get("a"), None);

        cache.insert("a".to_string(), StyleAttr::empty(0));
        assert_eq!(cache.get("a"), Some(StyleAttr::empty(0)));
        assert_eq!(cache.len(), 1);

        assert_eq!(cache.clear(), 1);
        assert_eq!(cache.get("a"), None);
    }
}
