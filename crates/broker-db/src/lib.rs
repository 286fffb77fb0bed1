#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::StoreFactory;

// Re-export repository implementations
pub use repositories::SqliteDocumentStore;

// Re-export setup functions for convenient access
pub use setup::open_store;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::open_test_store;

// Linked for the bundled SQLite build only
use libsqlite3_sys as _;
