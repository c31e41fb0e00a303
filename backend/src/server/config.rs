//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use fleet_backend::outbound::upstream::UpstreamConfig;
use fleet_backend::settings::RuntimeConfig;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) upstream: UpstreamConfig,
}

impl ServerConfig {
    /// Construct a server configuration from validated settings.
    #[must_use]
    pub fn new(runtime: RuntimeConfig) -> Self {
        let RuntimeConfig {
            bind_addr,
            upstream,
        } = runtime;
        Self {
            bind_addr,
            upstream,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
