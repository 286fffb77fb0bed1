//! Document store trait definition.
//!
//! This port defines the interface for persisting semi-structured records
//! under named collections. Implementations handle all storage details
//! internally, including identifier assignment and timestamps.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde_json::Value;

use super::StoreError;

/// Persistence collaborator for write-only document collections.
///
/// # Design Rules
///
/// - Works with `serde_json::Value` documents; callers serialize domain types
/// - Identifiers are opaque strings chosen by the store
/// - Implementations must be safe for concurrent use
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Logical name of the underlying database, if it has one.
    fn name(&self) -> Option<String>;

    /// Whether the handle can currently serve requests.
    fn is_connected(&self) -> bool;

    /// Persist `document` under `collection` and return its new identifier.
    ///
    /// Every call creates a new record, even for identical documents.
    async fn create_document(&self, collection: &str, document: Value)
    -> Result<String, StoreError>;

    /// Names of the collections that currently hold documents.
    async fn list_collections(&self) -> Result<Vec<String>, StoreError>;
}

/// What the server knows about its document store.
///
/// Built once at startup by the composition root and never changed.
#[derive(Clone)]
pub enum StoreAvailability {
    /// No store configured at all.
    Missing,
    /// Store configured, but no handle could be created from the configuration.
    Uninitialized,
    /// Opening the store failed with the given reason.
    Failed(String),
    /// A store handle exists.
    Ready(Arc<dyn DocumentStore>),
}

impl StoreAvailability {
    /// Wrap a concrete store as a ready handle.
    pub fn ready(store: impl DocumentStore + 'static) -> Self {
        Self::Ready(Arc::new(store))
    }

    /// Borrow a connected store, or explain why there is none.
    pub fn connected(&self) -> Result<&Arc<dyn DocumentStore>, StoreError> {
        match self {
            Self::Ready(store) if store.is_connected() => Ok(store),
            Self::Ready(_) => Err(StoreError::Unavailable(
                "connection to the document store is closed".to_string(),
            )),
            Self::Missing | Self::Uninitialized => Err(StoreError::Unavailable(
                "check DATABASE_URL and DATABASE_NAME environment variables".to_string(),
            )),
            Self::Failed(reason) => Err(StoreError::Unavailable(reason.clone())),
        }
    }

    /// Short state label for logs.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Uninitialized => "uninitialized",
            Self::Failed(_) => "failed",
            Self::Ready(_) => "ready",
        }
    }
}

impl fmt::Debug for StoreAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(reason) => f.debug_tuple("Failed").field(reason).finish(),
            Self::Ready(store) => f.debug_tuple("Ready").field(&store.name()).finish(),
            Self::Missing => f.write_str("Missing"),
            Self::Uninitialized => f.write_str("Uninitialized"),
        }
    }
}

/// Check that a collection name is usable by every store backend.
///
/// Names must be non-empty and contain only ASCII alphanumerics or `_`.
pub fn validate_collection_name(collection: &str) -> Result<(), StoreError> {
    if !collection.is_empty()
        && collection
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        Ok(())
    } else {
        Err(StoreError::InvalidCollection(collection.to_string()))
    }
}
