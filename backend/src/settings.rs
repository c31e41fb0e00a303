//! Proxy configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `FLEET_PROXY_*` environment variables and
//! configuration files. [`ProxySettings::initialize`] validates them once at
//! startup into the typed configuration the adapters consume.

use std::ffi::OsString;
use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::outbound::upstream::UpstreamConfig;

/// Production fleet API, including the version segment.
pub const DEFAULT_UPSTREAM_BASE_URL: &str =
    "https://indusjs-fleet-docker-960880113496.asia-south2.run.app/api/v2";
const DEFAULT_API_VERSION_HEADER: &str = "X-API-Version";
const DEFAULT_API_VERSION: &str = "v2";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Raw settings as provided by the operator.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FLEET_PROXY")]
pub struct ProxySettings {
    /// Fleet API base URL requests are forwarded to.
    pub upstream_base_url: Option<String>,
    /// Name of the header carrying the API version.
    pub api_version_header: Option<String>,
    /// API version sent on every upstream request.
    pub api_version: Option<String>,
    /// Socket address the proxy listens on.
    pub bind_addr: Option<String>,
    /// Total per-request timeout, in seconds.
    #[ortho_config(default = 30)]
    pub request_timeout_secs: u64,
    /// Connect timeout, in seconds.
    #[ortho_config(default = 30)]
    pub connect_timeout_secs: u64,
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Transport settings for every upstream call.
    pub upstream: UpstreamConfig,
}

/// Raised when settings cannot be loaded or fail validation.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Sources could not be read or merged.
    #[error("failed to load settings: {0}")]
    Load(String),
    /// The upstream base URL is not an absolute URL.
    #[error("invalid upstream base url {value:?}: {source}")]
    BaseUrl {
        /// Offending value.
        value: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
    /// The upstream base URL does not use http or https.
    #[error("upstream base url must use http or https, got {scheme:?}")]
    Scheme {
        /// Offending scheme.
        scheme: String,
    },
    /// The bind address is not a socket address.
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        /// Offending value.
        value: String,
        /// Parser error.
        #[source]
        source: std::net::AddrParseError,
    },
    /// A timeout of zero seconds was configured.
    #[error("{name} must be greater than zero")]
    ZeroTimeout {
        /// Setting name.
        name: &'static str,
    },
    /// The API version header name is blank.
    #[error("api version header must not be empty")]
    EmptyHeader,
}

impl ProxySettings {
    /// Load settings from the given CLI arguments, the environment and any
    /// configuration file.
    ///
    /// # Errors
    /// Returns [`SettingsError::Load`] when a source is malformed.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::load_from_iter(args).map_err(|err| SettingsError::Load(err.to_string()))
    }

    /// Configured base URL, falling back to production.
    pub fn upstream_base_url(&self) -> &str {
        self.upstream_base_url
            .as_deref()
            .unwrap_or(DEFAULT_UPSTREAM_BASE_URL)
    }

    /// Configured version header name.
    pub fn api_version_header(&self) -> &str {
        self.api_version_header
            .as_deref()
            .unwrap_or(DEFAULT_API_VERSION_HEADER)
    }

    /// Configured API version.
    pub fn api_version(&self) -> &str {
        self.api_version.as_deref().unwrap_or(DEFAULT_API_VERSION)
    }

    /// Configured bind address.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Validate the settings into a [`RuntimeConfig`].
    ///
    /// # Errors
    /// Returns a [`SettingsError`] naming the first invalid value.
    pub fn initialize(&self) -> Result<RuntimeConfig, SettingsError> {
        let raw_url = self.upstream_base_url().trim();
        let base_url = Url::parse(raw_url).map_err(|source| SettingsError::BaseUrl {
            value: raw_url.to_owned(),
            source,
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(SettingsError::Scheme {
                scheme: base_url.scheme().to_owned(),
            });
        }

        let header = self.api_version_header().trim();
        if header.is_empty() {
            return Err(SettingsError::EmptyHeader);
        }

        let raw_addr = self.bind_addr().trim();
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|source| SettingsError::BindAddr {
                value: raw_addr.to_owned(),
                source,
            })?;

        Ok(RuntimeConfig {
            bind_addr,
            upstream: UpstreamConfig {
                base_url,
                api_version_header: header.to_owned(),
                api_version: self.api_version().trim().to_owned(),
                request_timeout: seconds("request_timeout_secs", self.request_timeout_secs)?,
                connect_timeout: seconds("connect_timeout_secs", self.connect_timeout_secs)?,
            },
        })
    }
}

fn seconds(name: &'static str, value: u64) -> Result<Duration, SettingsError> {
    if value == 0 {
        return Err(SettingsError::ZeroTimeout { name });
    }
    Ok(Duration::from_secs(value))
}
