pub mod modules;
pub use modules::portfolio;
pub mod shared;

pub use portfolio::adapter::outgoing::{FileDurableStore, InMemoryDurableStore};
pub use portfolio::application::ports::outgoing::{DurableStore, DurableStoreError};
pub use portfolio::application::services::{
    PersistStatus, PortfolioStore, PortfolioStoreError, StoreSettings,
};
pub use shared::config::PortfolioConfig;

#[cfg(test)]
mod tests;
