pub mod portfolio_store;

pub use portfolio_store::{PersistStatus, PortfolioStore, PortfolioStoreError, StoreSettings};
