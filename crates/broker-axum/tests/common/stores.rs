//! Hand-written document stores for driving the router.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use broker_core::{DocumentStore, StoreError};
use serde_json::Value;

/// Configurable in-process store that records what it was given.
pub struct FakeStore {
    id: String,
    create_error: Option<String>,
    collections: Result<Vec<String>, String>,
    connected: bool,
    creates: AtomicUsize,
    documents: Mutex<Vec<(String, Value)>>,
}

impl FakeStore {
    /// Store that accepts every document and answers with `id`.
    pub fn returning(id: &str) -> Self {
        Self {
            id: id.to_string(),
            create_error: None,
            collections: Ok(Vec::new()),
            connected: true,
            creates: AtomicUsize::new(0),
            documents: Mutex::new(Vec::new()),
        }
    }

    /// Store whose inserts fail with `message`.
    pub fn failing_create(message: &str) -> Self {
        Self {
            create_error: Some(message.to_string()),
            ..Self::returning("unused")
        }
    }

    pub fn with_collections(mut self, names: &[&str]) -> Self {
        self.collections = Ok(names.iter().map(ToString::to_string).collect());
        self
    }

    pub fn failing_listing(mut self, message: &str) -> Self {
        self.collections = Err(message.to_string());
        self
    }

    pub fn disconnected(mut self) -> Self {
        self.connected = false;
        self
    }

    /// Number of `create_document` calls received.
    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn documents(&self) -> Vec<(String, Value)> {
        self.documents.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for FakeStore {
    fn name(&self) -> Option<String> {
        Some("fake".to_string())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    async fn create_document(
        &self,
        collection: &str,
        document: Value,
    ) -> Result<String, StoreError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.create_error {
            return Err(StoreError::Storage(message.clone()));
        }
        self.documents
            .lock()
            .unwrap()
            .push((collection.to_string(), document));
        Ok(self.id.clone())
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        self.collections.clone().map_err(StoreError::Storage)
    }
}
