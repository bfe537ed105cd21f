use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::portfolio::application::ports::outgoing::{DurableStore, DurableStoreError};

/// Process-local durable store. Clones share the same underlying map, so a
/// test can keep a handle and inspect what the portfolio store wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDurableStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    /// Budget over the summed byte length of all keys and values.
    quota_bytes: Option<usize>,
}

impl InMemoryDurableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects writes once keys + values would exceed `quota_bytes`,
    /// like a browser's local storage limit.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: Arc::default(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Pre-populated store, handy for simulating a previous session.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(Mutex::new(map)),
            quota_bytes: None,
        }
    }

    pub fn keys(&self) -> Vec<String> {
        match self.lock() {
            Ok(entries) => {
                let mut keys: Vec<String> = entries.keys().cloned().collect();
                keys.sort();
                keys
            }
            Err(_) => Vec::new(),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, DurableStoreError> {
        self.entries
            .lock()
            .map_err(|e| DurableStoreError::Unavailable(format!("lock poisoned: {}", e)))
    }
}

impl DurableStore for InMemoryDurableStore {
    fn get(&self, key: &str) -> Result<Option<String>, DurableStoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DurableStoreError> {
        let mut entries = self.lock()?;

        if let Some(limit) = self.quota_bytes {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if others + key.len() + value.len() > limit {
                return Err(DurableStoreError::QuotaExceeded {
                    key: key.to_string(),
                    limit,
                });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key_is_none() {
        let store = InMemoryDurableStore::new();
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn test_clones_share_entries() {
        let store = InMemoryDurableStore::new();
        let handle = store.clone();

        store.set("theme", "dark").unwrap();

        assert_eq!(handle.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_keys_are_listed_sorted() {
        let store = InMemoryDurableStore::with_entries([("theme", "light")]);

        store.set("portfolio_data", "{}").unwrap();

        assert_eq!(store.keys(), vec!["portfolio_data", "theme"]);
    }

    #[test]
    fn test_quota_rejects_oversized_write_and_keeps_previous_value() {
        let store = InMemoryDurableStore::with_quota(16);
        store.set("key", "small").unwrap();

        let err = store.set("key", "this value is far too large").unwrap_err();

        assert_eq!(
            err,
            DurableStoreError::QuotaExceeded {
                key: "key".to_string(),
                limit: 16
            }
        );
        assert_eq!(store.get("key").unwrap().as_deref(), Some("small"));
    }

    #[test]
    fn test_quota_counts_replacement_not_accumulation() {
        let store = InMemoryDurableStore::with_quota(10);

        store.set("k", "123456789").unwrap();
        // same key rewritten, old value no longer counts
        store.set("k", "987654321").unwrap();
    }
}
