//! Command-line parser for the server binary.
//!
//! Every setting except CORS origins can also come from the environment.

use broker_axum::{CorsConfig, ServerConfig};
use broker_core::{DEFAULT_PORT, StoreConfig};
use clap::Parser;

/// Maritime broker HTTP API.
#[derive(Debug, Parser)]
#[command(name = "broker-api")]
#[command(about = "Serve the maritime broker profile, services and inquiry API")]
#[command(version)]
pub struct Cli {
    /// Port to listen on (all interfaces)
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// sqlx SQLite URL of the document store, e.g. sqlite://broker.db
    #[arg(long = "database-url", env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Logical database name
    #[arg(long = "database-name", env = "DATABASE_NAME")]
    pub database_name: Option<String>,

    /// Allow only this CORS origin (repeatable; default allows any origin)
    #[arg(long = "cors-origin", value_name = "ORIGIN")]
    pub cors_origins: Vec<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Build the server configuration from the parsed arguments.
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            port: self.port,
            store: StoreConfig::from_parts(self.database_url.clone(), self.database_name.clone()),
            cors: CorsConfig::AllowAll,
        }
        .with_allowed_origins(self.cors_origins.clone())
    }
}
