pub mod file_store;
pub mod in_memory_store;
pub mod tracing_theme_observer;

pub use file_store::FileDurableStore;
pub use in_memory_store::InMemoryDurableStore;
pub use tracing_theme_observer::TracingThemeObserver;
