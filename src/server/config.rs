//! CLI arguments and server configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ProducerConfig, parse_duration};
use crate::error::Result;

/// CLI arguments for the relay service.
#[derive(Parser, Debug)]
#[command(name = "relay")]
#[command(about = "File-relay service: appends generated records to a shared log and serves it over HTTP")]
pub struct CliArgs {
    /// Path of the shared log file
    #[arg(short = 'f', long, default_value = "relay.log", env = "RELAY_LOG_PATH")]
    pub path: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value = "8000", env = "RELAY_PORT")]
    pub port: u16,

    /// Interval between producer ticks (e.g. "500ms", "2s", "1m")
    #[arg(short, long, default_value = "2s", env = "RELAY_INTERVAL")]
    pub interval: String,
}

impl CliArgs {
    /// Builds the log configuration from the parsed arguments.
    pub fn to_log_config(&self) -> Config {
        Config {
            path: self.path.clone(),
        }
    }

    /// Builds the producer configuration from the parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval string cannot be parsed.
    pub fn to_producer_config(&self) -> Result<ProducerConfig> {
        Ok(ProducerConfig {
            interval: parse_duration(&self.interval)?,
        })
    }
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8000 }
    }
}

impl From<&CliArgs> for ServerConfig {
    fn from(args: &CliArgs) -> Self {
        Self { port: args.port }
    }
}
