//! Store configuration as supplied by the command line or environment.
//!
//! Presence of the database settings is all the diagnostics endpoint reports;
//! whether they actually point at a reachable store is the store's concern.

/// Default listening port for the HTTP server.
pub const DEFAULT_PORT: u16 = 8000;

/// Document store settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    pub database_url: Option<String>,
    pub database_name: Option<String>,
}

/// What the composition root should do with a [`StoreConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorePlan {
    /// No URL: run without a store.
    Disabled,
    /// URL without a name: the store stays uninitialized.
    Incomplete,
    /// Both settings present: open the store.
    Open { url: String, name: String },
}

/// Which database settings were present at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatabaseEnv {
    pub url_set: bool,
    pub name_set: bool,
}

impl StoreConfig {
    /// Build a config from optional values, treating blank strings as unset.
    pub fn from_parts(database_url: Option<String>, database_name: Option<String>) -> Self {
        Self {
            database_url: non_blank(database_url),
            database_name: non_blank(database_name),
        }
    }

    pub const fn env(&self) -> DatabaseEnv {
        DatabaseEnv {
            url_set: self.database_url.is_some(),
            name_set: self.database_name.is_some(),
        }
    }

    pub fn plan(&self) -> StorePlan {
        match (&self.database_url, &self.database_name) {
            (None, _) => StorePlan::Disabled,
            (Some(_), None) => StorePlan::Incomplete,
            (Some(url), Some(name)) => StorePlan::Open {
                url: url.clone(),
                name: name.clone(),
            },
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
