//! Server entry point - the composition root for the binary.
//!
//! Loads the environment, parses arguments, initializes logging and hands
//! the resulting configuration to `broker_axum::start_server`.

use clap::Parser;

use broker_cli::{Cli, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.server_config();
    tracing::info!(port = config.port, cors = ?config.cors, "Starting broker API");

    broker_axum::start_server(config).await
}
