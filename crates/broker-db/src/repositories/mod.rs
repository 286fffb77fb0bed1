//! `SQLite` implementations of the core ports.

mod sqlite_document_store;

pub use sqlite_document_store::SqliteDocumentStore;
