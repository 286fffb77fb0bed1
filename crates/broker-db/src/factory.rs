//! Composition utilities for building the document store.
//!
//! This module turns configuration into a [`StoreAvailability`] for the
//! HTTP adapter. It is focused purely on construction and should not
//! contain any domain logic.

use broker_core::{StoreAvailability, StoreConfig, StorePlan};

use crate::setup::open_store;

/// Factory for creating document store instances with `SQLite` backends.
pub struct StoreFactory;

impl StoreFactory {
    /// Resolve the configured store.
    ///
    /// Never fails: a store that cannot be opened is reported as
    /// [`StoreAvailability::Failed`] so the server can still start and
    /// explain the problem through its diagnostics.
    pub async fn resolve(config: &StoreConfig) -> StoreAvailability {
        match config.plan() {
            StorePlan::Disabled => {
                tracing::info!("No DATABASE_URL configured; running without a document store");
                StoreAvailability::Missing
            }
            StorePlan::Incomplete => {
                tracing::warn!("DATABASE_URL is set but DATABASE_NAME is not; store not initialized");
                StoreAvailability::Uninitialized
            }
            StorePlan::Open { url, name } => match open_store(&url, &name).await {
                Ok(store) => {
                    tracing::info!(database = %name, "Document store ready");
                    StoreAvailability::ready(store)
                }
                Err(e) => {
                    tracing::warn!(database = %name, "Failed to open document store: {:#}", e);
                    StoreAvailability::Failed(format!("{e:#}"))
                }
            },
        }
    }
}
