//! `SQLite` implementation of the `DocumentStore` trait.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use sqlx::SqlitePool;
use uuid::Uuid;

use broker_core::{DocumentStore, StoreError, validate_collection_name};

/// `SQLite` implementation of the `DocumentStore` trait.
///
/// Stores each document as a JSON blob tagged with its collection.
pub struct SqliteDocumentStore {
    pool: SqlitePool,
    name: String,
}

impl SqliteDocumentStore {
    /// Create a store over an initialized pool.
    pub fn new(pool: SqlitePool, name: impl Into<String>) -> Self {
        Self {
            pool,
            name: name.into(),
        }
    }

    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the underlying pool. The store reports disconnected afterwards.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Load a stored document by id.
    #[cfg(any(test, feature = "test-utils"))]
    pub async fn fetch_document(&self, id: &str) -> Result<Option<Value>, StoreError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT body FROM documents WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        row.map(|(body,)| {
            serde_json::from_str(&body).map_err(|e| StoreError::Serialization(e.to_string()))
        })
        .transpose()
    }

    /// Number of documents stored under `collection`.
    #[cfg(any(test, feature = "test-utils"))]
    pub async fn count_documents(&self, collection: &str) -> Result<i64, StoreError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM documents WHERE collection = ?")
                .bind(collection)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| StoreError::Storage(e.to_string()))?;
        Ok(count)
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    fn name(&self) -> Option<String> {
        Some(self.name.clone())
    }

    fn is_connected(&self) -> bool {
        !self.pool.is_closed()
    }

    async fn create_document(
        &self,
        collection: &str,
        document: Value,
    ) -> Result<String, StoreError> {
        validate_collection_name(collection)?;

        let Value::Object(mut fields) = document else {
            return Err(StoreError::Serialization(
                "documents must be JSON objects".to_string(),
            ));
        };

        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        fields.insert("created_at".to_string(), Value::String(now.clone()));
        fields.insert("updated_at".to_string(), Value::String(now.clone()));

        let body = serde_json::to_string(&fields)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let id = Uuid::new_v4().to_string();

        sqlx::query("INSERT INTO documents (id, collection, body, created_at) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(collection)
            .bind(&body)
            .bind(&now)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        tracing::debug!(collection, id = %id, "Document stored");
        Ok(id)
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT collection FROM documents ORDER BY collection")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| StoreError::Storage(e.to_string()))?;

        Ok(rows.into_iter().map(|(collection,)| collection).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::open_test_store;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_document_stamps_timestamps() {
        let store = open_test_store().await.unwrap();

        let id = store
            .create_document("inquiry", json!({ "name": "Alice", "message": "hi" }))
            .await
            .unwrap();

        let stored = store.fetch_document(&id).await.unwrap().unwrap();
        assert_eq!(stored["name"], "Alice");
        assert_eq!(stored["message"], "hi");
        assert!(stored["created_at"].is_string());
        assert_eq!(stored["created_at"], stored["updated_at"]);
    }

    #[tokio::test]
    async fn test_identical_documents_get_distinct_ids() {
        let store = open_test_store().await.unwrap();
        let doc = json!({ "name": "Alice", "email": "a@x.com", "message": "hi" });

        let first = store.create_document("inquiry", doc.clone()).await.unwrap();
        let second = store.create_document("inquiry", doc).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.count_documents("inquiry").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_list_collections_is_distinct_and_sorted() {
        let store = open_test_store().await.unwrap();
        assert!(store.list_collections().await.unwrap().is_empty());

        for collection in ["inquiry", "callback", "inquiry"] {
            store
                .create_document(collection, json!({ "n": 1 }))
                .await
                .unwrap();
        }

        assert_eq!(
            store.list_collections().await.unwrap(),
            vec!["callback".to_string(), "inquiry".to_string()]
        );
    }

    #[tokio::test]
    async fn test_rejects_non_object_documents() {
        let store = open_test_store().await.unwrap();

        let err = store
            .create_document("inquiry", json!(["not", "an", "object"]))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Serialization(_)));
        assert_eq!(store.count_documents("inquiry").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_rejects_invalid_collection() {
        let store = open_test_store().await.unwrap();

        let err = store
            .create_document("inquiry; DROP TABLE documents", json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::InvalidCollection(_)));
    }

    #[tokio::test]
    async fn test_closed_store_reports_disconnected_and_fails() {
        let store = open_test_store().await.unwrap();
        store.close().await;

        assert!(!store.is_connected());
        let err = store.list_collections().await.unwrap_err();
        assert!(matches!(err, StoreError::Storage(_)));
    }
}
