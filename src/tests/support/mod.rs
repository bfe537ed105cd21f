pub mod fixtures;

use serde_json::Value;

use crate::portfolio::adapter::outgoing::InMemoryDurableStore;
use crate::portfolio::application::ports::outgoing::DurableStore;
use crate::portfolio::application::services::portfolio_store::DEFAULT_CONTENT_KEY;
use crate::portfolio::application::services::{PortfolioStore, StoreSettings};

pub type MemoryStore = PortfolioStore<InMemoryDurableStore>;

/// Empty backing storage plus a store opened over a clone of it, so tests
/// can inspect what was written.
pub fn fresh_store() -> (InMemoryDurableStore, MemoryStore) {
    store_over(InMemoryDurableStore::new())
}

/// Store opened over storage that already holds `content` under the content key.
pub fn store_with(content: &Value) -> (InMemoryDurableStore, MemoryStore) {
    store_over(InMemoryDurableStore::with_entries([(
        DEFAULT_CONTENT_KEY,
        content.to_string(),
    )]))
}

pub fn store_over(durable: InMemoryDurableStore) -> (InMemoryDurableStore, MemoryStore) {
    let store = PortfolioStore::open(durable.clone(), StoreSettings::default())
        .expect("store should open over in-memory storage");
    (durable, store)
}

pub fn persisted_content(durable: &InMemoryDurableStore) -> Value {
    let raw = durable
        .get(DEFAULT_CONTENT_KEY)
        .expect("in-memory get never fails")
        .expect("content should have been persisted");
    serde_json::from_str(&raw).expect("persisted content should be valid JSON")
}
