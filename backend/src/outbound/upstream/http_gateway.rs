//! Reqwest-backed upstream gateway.
//!
//! This adapter owns transport details only: the base URL, fixed headers,
//! timeouts and error mapping. Replies are returned whatever their status.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Url};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::ports::{UpstreamGateway, UpstreamGatewayError, UpstreamReply, UpstreamRequest};
use crate::domain::proxy::ProxyMethod;

const JSON: &str = "application/json";

/// Validated settings for talking to the fleet API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    /// Base URL every path is appended to, e.g. `https://host/api/v2`.
    pub base_url: Url,
    /// Name of the API version header.
    pub api_version_header: String,
    /// Value of the API version header.
    pub api_version: String,
    /// Total per-request timeout.
    pub request_timeout: Duration,
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
}

/// Errors raised while building the gateway.
#[derive(Debug, Error)]
pub enum UpstreamSetupError {
    /// The version header name is not a valid HTTP header name.
    #[error("invalid API version header name `{name}`")]
    HeaderName {
        /// Rejected name.
        name: String,
    },
    /// The version header value is not a valid HTTP header value.
    #[error("invalid API version header value `{value}`")]
    HeaderValue {
        /// Rejected value.
        value: String,
    },
    /// The reqwest client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Fixed headers sent on every fleet API request.
pub(crate) fn default_headers(config: &UpstreamConfig) -> Result<HeaderMap, UpstreamSetupError> {
    let name = HeaderName::from_bytes(config.api_version_header.as_bytes()).map_err(|_| {
        UpstreamSetupError::HeaderName {
            name: config.api_version_header.clone(),
        }
    })?;
    let value =
        HeaderValue::from_str(&config.api_version).map_err(|_| UpstreamSetupError::HeaderValue {
            value: config.api_version.clone(),
        })?;

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
    headers.insert(ACCEPT, HeaderValue::from_static(JSON));
    headers.insert(name, value);
    Ok(headers)
}

/// Build the shared reqwest client: connect and total timeouts plus the
/// fixed headers.
pub(crate) fn build_client(config: &UpstreamConfig) -> Result<Client, UpstreamSetupError> {
    Ok(Client::builder()
        .default_headers(default_headers(config)?)
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .build()?)
}

/// Gateway that re-issues proxied requests against one base URL.
#[derive(Debug, Clone)]
pub struct HttpUpstreamGateway {
    client: Client,
    base: String,
}

impl HttpUpstreamGateway {
    /// Build the gateway. The reqwest client is created once and reused.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamSetupError`] when the version header is invalid or
    /// the client cannot be constructed.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamSetupError> {
        Ok(Self {
            client: build_client(config)?,
            base: config.base_url.as_str().trim_end_matches('/').to_owned(),
        })
    }

    fn url_for(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base, path_and_query)
    }
}

#[async_trait]
impl UpstreamGateway for HttpUpstreamGateway {
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamReply, UpstreamGatewayError> {
        let url = self.url_for(&request.path_and_query);
        debug!(method = %request.method, %url, "forwarding upstream");

        let mut builder = self.client.request(reqwest_method(request.method), url);
        if let Some(authorization) = request.authorization {
            let value = HeaderValue::from_maybe_shared(authorization).map_err(|err| {
                warn!(error = %err, "authorization header cannot be re-encoded");
                UpstreamGatewayError::transport("invalid authorization header")
            })?;
            builder = builder.header(AUTHORIZATION, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_transport_error)?;
        Ok(UpstreamReply { status, body })
    }
}

fn reqwest_method(method: ProxyMethod) -> Method {
    match method {
        ProxyMethod::Get => Method::GET,
        ProxyMethod::Post => Method::POST,
        ProxyMethod::Put => Method::PUT,
        ProxyMethod::Patch => Method::PATCH,
        ProxyMethod::Delete => Method::DELETE,
    }
}

fn map_transport_error(error: reqwest::Error) -> UpstreamGatewayError {
    if error.is_timeout() {
        UpstreamGatewayError::timeout(error.to_string())
    } else {
        UpstreamGatewayError::transport(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config(base: &str) -> UpstreamConfig {
        UpstreamConfig {
            base_url: Url::parse(base).expect("valid base url"),
            api_version_header: "X-API-Version".to_owned(),
            api_version: "v2".to_owned(),
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(30),
        }
    }

    #[rstest]
    #[case("https://fleet.example/api/v2", "/vehicles?page=2", "https://fleet.example/api/v2/vehicles?page=2")]
    #[case("https://fleet.example/api/v2/", "/auth/login", "https://fleet.example/api/v2/auth/login")]
    fn joins_base_and_path(#[case] base: &str, #[case] path: &str, #[case] expected: &str) {
        let gateway = HttpUpstreamGateway::new(&config(base)).expect("gateway builds");
        assert_eq!(gateway.url_for(path), expected);
    }

    #[test]
    fn default_headers_carry_json_and_version() {
        let headers = default_headers(&config("https://fleet.example/api/v2")).expect("headers");
        assert_eq!(headers.get(CONTENT_TYPE).map(HeaderValue::as_bytes), Some(JSON.as_bytes()));
        assert_eq!(headers.get(ACCEPT).map(HeaderValue::as_bytes), Some(JSON.as_bytes()));
        assert_eq!(
            headers.get("x-api-version").map(HeaderValue::as_bytes),
            Some(b"v2".as_slice())
        );
    }

    #[test]
    fn rejects_invalid_header_name() {
        let mut bad = config("https://fleet.example/api/v2");
        bad.api_version_header = "X API Version".to_owned();
        assert!(matches!(
            HttpUpstreamGateway::new(&bad),
            Err(UpstreamSetupError::HeaderName { .. })
        ));
    }
}
