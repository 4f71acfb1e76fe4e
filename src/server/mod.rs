//! HTTP server for the relay log.
//!
//! The server holds only a [`LogReader`](crate::LogReader); it reads the
//! log fresh on every request and keeps no state of its own beyond config
//! and metrics handles.

mod config;
mod error;
pub mod handlers;
mod http;
pub mod metrics;
mod middleware;

pub use config::{CliArgs, ServerConfig};
pub use http::RelayServer;
