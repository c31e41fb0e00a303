//! Driven port for sending forwarded requests to the fleet API.
//!
//! The proxy service builds an [`UpstreamRequest`] from the inbound call and
//! hands it to this port. Adapters own the transport: base URL, fixed
//! headers, timeouts. They report either the upstream reply, whatever its
//! status, or a transport failure.

use async_trait::async_trait;
use bytes::Bytes;

use super::define_port_error;
use crate::domain::proxy::ProxyMethod;

/// Request the gateway must issue upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    /// HTTP method to use.
    pub method: ProxyMethod,
    /// Path below the upstream base URL, with the query string appended when
    /// one is forwarded. Always starts with `/`.
    pub path_and_query: String,
    /// Inbound `Authorization` header bytes, copied verbatim. Kept as raw
    /// bytes because valid header values need not be ASCII.
    pub authorization: Option<Bytes>,
    /// Raw body bytes for methods that carry one.
    pub body: Option<Bytes>,
}

/// Reply received from the upstream, relayed without inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    /// Upstream status code.
    pub status: u16,
    /// Upstream body bytes.
    pub body: Bytes,
}

define_port_error! {
    /// Failures raised before an upstream reply was available.
    pub enum UpstreamGatewayError {
        /// Connection refused, DNS failure, reset stream and similar.
        Transport { message: String } => "{message}",
        /// The connect or total timeout elapsed.
        Timeout { message: String } => "upstream request timed out: {message}",
    }
}

/// Port for issuing one upstream request per call. Implementations never
/// retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpstreamGateway: Send + Sync {
    /// Send `request` and return the upstream reply.
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamReply, UpstreamGatewayError>;
}
