use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::errors::ServiceError;

/// Ordered in-memory map guarded by a mutex held for one operation at a time.
///
/// Used by the in-memory repositories that stand in for SQLite in tests.
#[derive(Debug)]
pub struct MemoryTable<K, V> {
    inner: Mutex<BTreeMap<K, V>>,
}

impl<K, V> Default for MemoryTable<K, V> {
    fn default() -> Self {
        Self { inner: Mutex::new(BTreeMap::new()) }
    }
}

impl<K: Ord, V: Clone> MemoryTable<K, V> {
    fn lock(&self) -> MutexGuard<'_, BTreeMap<K, V>> {
        // a panic mid-operation leaves the map consistent; keep serving
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// All values in key order.
    pub fn list(&self) -> Vec<V> {
        self.lock().values().cloned().collect()
    }

    pub fn get(&self, key: &K) -> Option<V> {
        self.lock().get(key).cloned()
    }

    /// Remove a key; returns whether it existed.
    pub fn remove(&self, key: &K) -> bool {
        self.lock().remove(key).is_some()
    }

    /// Run a mutation with exclusive access to the map.
    pub fn update_map<R, F>(&self, f: F) -> Result<R, ServiceError>
    where
        F: FnOnce(&mut BTreeMap<K, V>) -> Result<R, ServiceError>,
    {
        let mut map = self.lock();
        f(&mut map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_table_crud() {
        let table = MemoryTable::<i32, String>::default();
        assert!(table.list().is_empty());

        table
            .update_map(|m| {
                m.insert(2, "b".into());
                m.insert(1, "a".into());
                Ok(())
            })
            .unwrap();
        assert_eq!(table.list(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(table.get(&2).as_deref(), Some("b"));

        let err = table
            .update_map::<(), _>(|_| Err(ServiceError::Conflict("taken".into())))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        assert!(table.remove(&1));
        assert!(!table.remove(&1));
        assert_eq!(table.list().len(), 1);
    }
}
