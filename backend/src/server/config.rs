//! Server settings loaded via OrthoConfig.
//!
//! Values are layered from defaults, an optional config file, `USERS_API_*`
//! environment variables and command-line flags.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::inbound::http::payload::DEFAULT_JSON_LIMIT;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Listener and request-handling settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS_API")]
pub struct ServerSettings {
    /// Interface address to bind.
    pub host: Option<String>,
    /// TCP port to bind; `0` asks the OS for a free port.
    pub port: Option<u16>,
    /// Maximum accepted JSON body size in bytes.
    pub json_limit: Option<usize>,
    /// Serve Prometheus metrics on `/metrics` when built with `metrics`.
    #[ortho_config(default = false)]
    pub metrics_enabled: bool,
}

impl ServerSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Configured JSON body limit, falling back to 16 KiB.
    pub fn json_limit(&self) -> usize {
        self.json_limit.unwrap_or(DEFAULT_JSON_LIMIT)
    }

    /// Socket address to bind.
    ///
    /// # Errors
    /// Returns [`std::io::ErrorKind::InvalidInput`] when the host is not an
    /// IP address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let host = self.host();
        let ip: IpAddr = host.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid listen host {host:?}: {err}"),
            )
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}
