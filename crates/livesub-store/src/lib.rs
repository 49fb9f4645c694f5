//! Settings persistence abstraction for livesub.
//!
//! This crate provides a `SettingsStore` trait that the rule store uses to
//! load and save its settings blob, with a file-backed implementation for
//! native hosts and an in-memory implementation for embedding and tests.
//!
//! # Example
//!
//! ```no_run
//! use livesub_store::{FileSettingsStore, SettingsStore};
//!
//! # #[tokio::main]
//! # async fn main() -> livesub_store::Result<()> {
//! let store = FileSettingsStore::new("plugin-data/data.json");
//! if let Some(blob) = store.load_blob().await? {
//!     println!("{}", blob);
//! }
//! # Ok(())
//! # }
//! ```

mod store;
pub use store::SettingsStore;

#[cfg(feature = "native")]
pub mod native;
#[cfg(feature = "native")]
pub use native::FileSettingsStore;

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "memory")]
pub use memory::MemorySettingsStore;

use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by a settings store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration directory not found")]
    ConfigDirNotFound,

    #[error("Settings store rejected write: {0}")]
    Rejected(String),
}
