//! Deployment diagnostics snapshot.
//!
//! [`diagnose`] reports whether the backend can reach its document store.
//! It never fails: every store problem becomes a status string, and any
//! error text it embeds is capped at [`MAX_ERROR_CHARS`] characters.

use serde::{Serialize, Serializer};

use crate::config::DatabaseEnv;
use crate::ports::StoreAvailability;

/// Longest error excerpt included in a report.
pub const MAX_ERROR_CHARS: usize = 50;

/// Most collection names included in a report.
pub const MAX_COLLECTIONS: usize = 10;

pub const BACKEND_RUNNING: &str = "✅ Running";
pub const DB_NOT_AVAILABLE: &str = "❌ Not Available";
pub const DB_MODULE_MISSING: &str = "❌ Database module not found (run enable-database first)";
pub const DB_NOT_INITIALIZED: &str = "⚠️  Available but not initialized";
pub const DB_AVAILABLE: &str = "✅ Available";
pub const DB_WORKING: &str = "✅ Connected & Working";
pub const DB_ERROR_PREFIX: &str = "❌ Error: ";
pub const DB_LIST_ERROR_PREFIX: &str = "⚠️  Connected but Error: ";
pub const CONNECTED: &str = "Connected";
pub const NOT_CONNECTED: &str = "Not Connected";
pub const SETTING_SET: &str = "✅ Set";
pub const SETTING_NOT_SET: &str = "❌ Not Set";

/// Best-effort status report served by `GET /test`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    /// Whether a database URL was configured; says nothing about reachability.
    #[serde(serialize_with = "serialize_setting")]
    pub database_url: bool,
    /// Whether a database name was configured.
    #[serde(serialize_with = "serialize_setting")]
    pub database_name: bool,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl DiagnosticReport {
    fn initial(env: DatabaseEnv) -> Self {
        Self {
            backend: BACKEND_RUNNING.to_string(),
            database: DB_NOT_AVAILABLE.to_string(),
            database_url: env.url_set,
            database_name: env.name_set,
            connection_status: NOT_CONNECTED.to_string(),
            collections: Vec::new(),
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_setting<S: Serializer>(set: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *set { SETTING_SET } else { SETTING_NOT_SET })
}

/// Take the first `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Inspect the store and describe what was found.
pub async fn diagnose(store: &StoreAvailability, env: DatabaseEnv) -> DiagnosticReport {
    let mut report = DiagnosticReport::initial(env);

    match store {
        StoreAvailability::Missing => {
            report.database = DB_MODULE_MISSING.to_string();
        }
        StoreAvailability::Uninitialized => {
            report.database = DB_NOT_INITIALIZED.to_string();
        }
        StoreAvailability::Failed(reason) => {
            report.database = format!(
                "{DB_ERROR_PREFIX}{}",
                truncate_chars(reason, MAX_ERROR_CHARS)
            );
        }
        StoreAvailability::Ready(handle) if !handle.is_connected() => {
            report.database = DB_NOT_INITIALIZED.to_string();
        }
        StoreAvailability::Ready(handle) => {
            report.database = DB_AVAILABLE.to_string();
            report.connection_status = CONNECTED.to_string();

            match handle.list_collections().await {
                Ok(mut names) => {
                    names.truncate(MAX_COLLECTIONS);
                    report.collections = names;
                    report.database = DB_WORKING.to_string();
                }
                Err(e) => {
                    tracing::warn!(
                        store = handle.name().as_deref().unwrap_or("unnamed"),
                        "Listing collections failed: {}",
                        e
                    );
                    report.database = format!(
                        "{DB_LIST_ERROR_PREFIX}{}",
                        truncate_chars(&e.to_string(), MAX_ERROR_CHARS)
                    );
                }
            }
        }
    }

    tracing::debug!(
        store = store.label(),
        database = %report.database,
        "Diagnostics snapshot"
    );

    report
}
