pub mod durable_store;
pub mod theme_observer;

pub use durable_store::{DurableStore, DurableStoreError};
pub use theme_observer::ThemeObserver;
