// src/modules/portfolio/application/ports/outgoing/durable_store.rs

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurableStoreError {
    #[error("I/O error: {0}")]
    Io(String),

    /// Writing `key` would push the store past its byte budget.
    #[error("Storage quota of {limit} bytes exceeded while writing '{key}'")]
    QuotaExceeded { key: String, limit: usize },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for DurableStoreError {
    fn from(e: std::io::Error) -> Self {
        DurableStoreError::Io(e.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// String key-value storage that survives restarts.
///
/// Writes are synchronous and expected to be visible to the next `get` on
/// the same store. The portfolio store is the only writer.
pub trait DurableStore: Send + Sync {
    /// `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, DurableStoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), DurableStoreError>;
}
