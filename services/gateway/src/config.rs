//! Environment-driven configuration

use anyhow::Context;
use std::net::SocketAddr;

/// Initial buffer handed to the engine for serialized responses; the
/// handlers grow it on demand.
const DEFAULT_RESPONSE_BUFFER: usize = 10 * 1024;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Listen address, `GATEWAY_ADDR` (default 0.0.0.0:8080)
    pub bind: SocketAddr,
    /// Initial response buffer size in bytes, `GATEWAY_RESPONSE_BUFFER`
    pub response_buffer: usize,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let bind = match std::env::var("GATEWAY_ADDR") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid GATEWAY_ADDR: {}", raw))?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], 8080)),
        };
        let response_buffer = match std::env::var("GATEWAY_RESPONSE_BUFFER") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid GATEWAY_RESPONSE_BUFFER: {}", raw))?,
            Err(_) => DEFAULT_RESPONSE_BUFFER,
        };

        Ok(Self {
            bind,
            response_buffer,
        })
    }
}
