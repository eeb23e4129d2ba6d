//! Room-scoped WebSocket chat server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-server
//! cargo run --bin hiroba-server -- --host 0.0.0.0 --port 8000 --delivery-timeout-ms 500
//! ```

use std::time::Duration;

use clap::Parser;
use hiroba_server::{config::ServerConfig, ui::Server};
use hiroba_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "hiroba-server")]
#[command(about = "Room-scoped WebSocket chat server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = ServerConfig::DEFAULT_HOST)]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value_t = ServerConfig::DEFAULT_PORT)]
    port: u16,

    /// Capacity of each member's outbound message queue
    #[arg(long, default_value_t = ServerConfig::DEFAULT_SEND_BUFFER)]
    send_buffer: usize,

    /// Milliseconds to wait for one member to accept a message before dropping it
    #[arg(long, default_value_t = ServerConfig::DEFAULT_DELIVERY_TIMEOUT_MS)]
    delivery_timeout_ms: u64,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            send_buffer: args.send_buffer,
            delivery_timeout: Duration::from_millis(args.delivery_timeout_ms),
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    setup_logger(
        &["hiroba_server", "tower_http"],
        &args.log_level,
    );

    let config = ServerConfig::from(args);
    tracing::debug!("Starting with {:?}", config);

    if let Err(e) = Server::new(config).run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
