//! Server configuration.

use std::time::Duration;

/// Runtime settings of the chat server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Capacity of each member's outbound queue
    pub send_buffer: usize,
    /// Upper bound on one delivery to one member
    pub delivery_timeout: Duration,
}

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 8000;
    pub const DEFAULT_SEND_BUFFER: usize = 64;
    pub const DEFAULT_DELIVERY_TIMEOUT_MS: u64 = 2_000;

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST.to_string(),
            port: Self::DEFAULT_PORT,
            send_buffer: Self::DEFAULT_SEND_BUFFER,
            delivery_timeout: Duration::from_millis(Self::DEFAULT_DELIVERY_TIMEOUT_MS),
        }
    }
}
