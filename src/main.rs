//! Relay service binary entry point.
//!
//! Runs the producer and the HTTP server in one process, coupled only
//! through the shared log file.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use relay::server::{CliArgs, RelayServer, ServerConfig};
use relay::{Producer, RelayLog};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse CLI arguments
    let args = CliArgs::parse();

    let log_config = args.to_log_config();
    let producer_config = args.to_producer_config().expect("invalid interval");
    let server_config = ServerConfig::from(&args);

    tracing::info!("Opening log at {}", log_config.path.display());

    let log = RelayLog::open(log_config);
    let producer = Producer::new(log.clone(), producer_config);
    let server = RelayServer::new(log.reader(), server_config);

    let producer_task = tokio::spawn(producer.run());

    tokio::select! {
        // Server resolves on SIGINT/SIGTERM.
        _ = server.run() => {}
        // An append failure is fatal for the whole process.
        result = producer_task => {
            if let Ok(Err(e)) = result {
                tracing::error!("producer failed: {}", e);
                std::process::exit(1);
            }
        }
    }
}
