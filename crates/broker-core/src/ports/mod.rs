//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Capability checks are explicit methods, never inferred by inspection

pub mod document_store;

use thiserror::Error;

pub use document_store::{DocumentStore, StoreAvailability, validate_collection_name};

#[cfg(test)]
pub use document_store::MockDocumentStore;

/// Domain-specific errors for document store operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// so handlers and the diagnostics snapshot can treat every backend alike.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No usable store handle exists.
    #[error("Database not available: {0}")]
    Unavailable(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The collection name cannot be used by the store.
    #[error("Invalid collection name: {0:?}")]
    InvalidCollection(String),
}
