//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. The document store is resolved here and
//! injected into the handler state.

use std::sync::Arc;

use anyhow::Result;
use broker_core::{BrokerCatalog, DatabaseEnv, StoreAvailability, StoreConfig};
use broker_db::StoreFactory;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins, methods and headers.
    #[default]
    AllowAll,
    /// Allow specific origins only.
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Document store settings.
    pub store: StoreConfig,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Set CORS to allow specific origins.
    ///
    /// An empty list keeps the current setting.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        if !origins.is_empty() {
            self.cors = CorsConfig::AllowOrigins(origins);
        }
        self
    }
}

/// Application context for the Axum adapter.
///
/// Everything in here is read-only after bootstrap.
pub struct AxumContext {
    /// Broker profile and services.
    pub catalog: Arc<BrokerCatalog>,
    /// Document store handle, or why there is none.
    pub store: StoreAvailability,
    /// Which database settings were configured.
    pub database_env: DatabaseEnv,
}

impl AxumContext {
    pub fn new(catalog: BrokerCatalog, store: StoreAvailability, database_env: DatabaseEnv) -> Self {
        Self {
            catalog: Arc::new(catalog),
            store,
            database_env,
        }
    }
}

/// Bootstrap the Axum server context.
///
/// Store problems never abort startup; they surface through `/test` and as
/// 500s on inquiry submission.
pub async fn bootstrap(config: &ServerConfig) -> AxumContext {
    let database_env = config.store.env();
    let store = StoreFactory::resolve(&config.store).await;

    tracing::info!(
        target: "broker.bootstrap",
        store = store.label(),
        database_url_set = database_env.url_set,
        database_name_set = database_env.name_set,
        "Axum bootstrap resolved document store"
    );

    AxumContext::new(BrokerCatalog::reference(), store, database_env)
}

/// Start the web server on the configured port and serve until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Broker API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Broker API shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
