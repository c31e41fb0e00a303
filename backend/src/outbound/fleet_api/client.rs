//! Shared HTTP plumbing for the typed fleet API client.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::outcome::{CallOutcome, invoke};
use crate::domain::session::SessionStore;
use crate::outbound::upstream::{UpstreamConfig, UpstreamSetupError, build_client};

/// Query string pairs appended to a request.
pub type QueryPairs = Vec<(&'static str, String)>;

/// Typed client for the fleet API.
///
/// Point `base_url` at the upstream (`https://host/api/v2`) or at a running
/// proxy (`http://host:8080/api`); paths are identical either way. The
/// reqwest client is built once; the bearer token is read from the session
/// on every request so logins and logouts apply immediately.
#[derive(Clone)]
pub struct FleetClient {
    http: Client,
    base: String,
    session: SessionStore,
}

impl FleetClient {
    /// Build a client from validated configuration and a session store.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamSetupError`] when the version header is invalid or
    /// the reqwest client cannot be constructed.
    pub fn new(config: &UpstreamConfig, session: SessionStore) -> Result<Self, UpstreamSetupError> {
        Ok(Self {
            http: build_client(config)?,
            base: config.base_url.as_str().trim_end_matches('/').to_owned(),
            session,
        })
    }

    /// Session used for bearer tokens.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{path}", self.base));
        match self.session.get() {
            Some(token) => builder.header(AUTHORIZATION, token.bearer()),
            None => builder,
        }
    }

    pub(crate) async fn get<T>(&self, path: &str, query: &[(&'static str, String)]) -> CallOutcome<T>
    where
        T: DeserializeOwned,
    {
        invoke(|| self.request(Method::GET, path).query(query).send()).await
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> CallOutcome<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        invoke(|| self.request(method, path).json(body).send()).await
    }

    pub(crate) async fn send_empty<T>(&self, method: Method, path: &str) -> CallOutcome<T>
    where
        T: DeserializeOwned,
    {
        invoke(|| self.request(method, path).send()).await
    }
}
