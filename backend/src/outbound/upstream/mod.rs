//! Upstream fleet API adapter.
//!
//! Provides the reqwest implementation of the `UpstreamGateway` port and the
//! shared client construction used by the typed fleet API client.

mod http_gateway;

pub(crate) use http_gateway::build_client;
pub use http_gateway::{HttpUpstreamGateway, UpstreamConfig, UpstreamSetupError};
