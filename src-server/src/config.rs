//! Server Configuration
//!
//! Settings read from the environment at startup.

use std::net::SocketAddr;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_LOG: &str = "info";

/// Startup settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// `TODO_SERVER_ADDR`
    pub addr: SocketAddr,
    /// `TODO_SERVER_SEED`: start with the sample todos
    pub seed: bool,
    /// `TODO_SERVER_LOG`: tracing filter directive
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.parse().expect("default address is valid"),
            seed: true,
            log_filter: DEFAULT_LOG.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let mut config = Self::default();

        if let Some(addr) = lookup("TODO_SERVER_ADDR") {
            config.addr = addr
                .parse()
                .map_err(|e| format!("Invalid TODO_SERVER_ADDR '{}': {}", addr, e))?;
        }
        if let Some(seed) = lookup("TODO_SERVER_SEED") {
            config.seed = match seed.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                other => return Err(format!("Invalid TODO_SERVER_SEED '{}'", other)),
            };
        }
        if let Some(filter) = lookup("TODO_SERVER_LOG") {
            config.log_filter = filter;
        }

        Ok(config)
    }
}
