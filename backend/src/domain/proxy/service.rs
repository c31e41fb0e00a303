//! Generic forwarding service driven by the routing table.

use std::sync::Arc;

use bytes::Bytes;
use pagination::Envelope;
use tracing::{debug, error, warn};

use super::{ProxyMethod, RouteTable};
use crate::domain::ports::{UpstreamGateway, UpstreamRequest};

/// Body message for unknown paths.
pub const NOT_FOUND_MESSAGE: &str = "Not found";
/// Body message for methods a route does not accept.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";
/// Prefix of the body message for transport failures.
pub const PROXY_ERROR_PREFIX: &str = "Proxy error: ";

const STATUS_NOT_FOUND: u16 = 404;
const STATUS_METHOD_NOT_ALLOWED: u16 = 405;
const STATUS_INTERNAL_ERROR: u16 = 500;

/// Inbound request as seen by the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardRequest {
    /// Request method.
    pub method: ProxyMethod,
    /// Path below the `/api` mount, still percent-encoded.
    pub path: String,
    /// Raw query string without the leading `?`.
    pub query: Option<String>,
    /// Raw `Authorization` header value, if the caller sent one.
    pub authorization: Option<Bytes>,
    /// Raw body bytes.
    pub body: Bytes,
}

/// Response returned to the inbound caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyResponse {
    /// Status code, relayed or synthesised.
    pub status: u16,
    /// JSON body, relayed byte for byte or synthesised as a failure envelope.
    pub body: Bytes,
    /// Methods the route accepts; only set on 405 responses.
    pub allow: Vec<ProxyMethod>,
}

impl ProxyResponse {
    /// Build a synthetic `{"success": false, "message": ..}` response.
    #[must_use]
    pub fn failure(status: u16, message: &str) -> Self {
        Self {
            status,
            body: failure_body(message),
            allow: Vec::new(),
        }
    }

    /// 404 for paths outside the route table.
    #[must_use]
    pub fn not_found() -> Self {
        Self::failure(STATUS_NOT_FOUND, NOT_FOUND_MESSAGE)
    }

    /// 405 listing the accepted methods, if known.
    #[must_use]
    pub fn method_not_allowed(allow: &[ProxyMethod]) -> Self {
        Self {
            allow: allow.to_vec(),
            ..Self::failure(STATUS_METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MESSAGE)
        }
    }

    /// 500 carrying the transport failure detail.
    #[must_use]
    pub fn proxy_error(detail: &str) -> Self {
        Self::failure(STATUS_INTERNAL_ERROR, &format!("{PROXY_ERROR_PREFIX}{detail}"))
    }
}

fn failure_body(message: &str) -> Bytes {
    match serde_json::to_vec(&Envelope::<()>::failure(message)) {
        Ok(encoded) => Bytes::from(encoded),
        Err(err) => {
            error!(error = %err, "failed to encode failure envelope");
            Bytes::from_static(br#"{"success":false}"#)
        }
    }
}

/// Stateless forwarder. Holds only the immutable route table and the
/// gateway; never retries.
#[derive(Clone)]
pub struct ProxyService {
    routes: Arc<RouteTable>,
    gateway: Arc<dyn UpstreamGateway>,
}

impl ProxyService {
    /// Create a service over `routes` sending through `gateway`.
    pub fn new(routes: RouteTable, gateway: Arc<dyn UpstreamGateway>) -> Self {
        Self {
            routes: Arc::new(routes),
            gateway,
        }
    }

    /// Routing table in use.
    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Forward one inbound request and produce the response to relay.
    ///
    /// Every path resolves to a value: unknown paths give 404, rejected
    /// methods give 405 and transport failures give 500, all with failure
    /// envelopes. Upstream replies pass through untouched, whatever their
    /// status.
    pub async fn forward(&self, request: ForwardRequest) -> ProxyResponse {
        let ForwardRequest {
            method,
            path,
            query,
            authorization,
            body,
        } = request;

        let Some((route, params)) = self.routes.resolve(&path) else {
            debug!(%method, %path, "no proxied route for path");
            return ProxyResponse::not_found();
        };
        if !route.allows(method) {
            debug!(%method, %path, route = %route.inbound(), "method not allowed");
            return ProxyResponse::method_not_allowed(route.methods());
        }
        let Some(upstream_path) = route.upstream().render(&params) else {
            error!(route = %route.inbound(), "upstream template references an uncaptured parameter");
            return ProxyResponse::proxy_error("route is misconfigured");
        };

        let (path_and_query, body) = if method.carries_body() {
            (upstream_path, Some(body))
        } else {
            let path_and_query = match query.as_deref() {
                Some(query) if !query.is_empty() => format!("{upstream_path}?{query}"),
                _ => upstream_path,
            };
            (path_and_query, None)
        };

        debug!(%method, upstream = %path_and_query, authorised = authorization.is_some(), "forwarding request");
        let upstream_request = UpstreamRequest {
            method,
            path_and_query,
            authorization,
            body,
        };
        match self.gateway.send(upstream_request).await {
            Ok(reply) => ProxyResponse {
                status: reply.status,
                body: reply.body,
                allow: Vec::new(),
            },
            Err(err) => {
                warn!(%method, %path, error = %err, "upstream request failed");
                ProxyResponse::proxy_error(&err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    //! Forwarding behaviour against a mocked gateway.

    use super::*;
    use crate::domain::ports::{MockUpstreamGateway, UpstreamGatewayError, UpstreamReply};
    use mockall::predicate::always;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn service(gateway: MockUpstreamGateway) -> ProxyService {
        ProxyService::new(
            RouteTable::fleet().expect("fleet routes"),
            Arc::new(gateway),
        )
    }

    fn request(method: ProxyMethod, path: &str) -> ForwardRequest {
        ForwardRequest {
            method,
            path: path.to_owned(),
            query: None,
            authorization: None,
            body: Bytes::new(),
        }
    }

    fn body_json(response: &ProxyResponse) -> Value {
        serde_json::from_slice(&response.body).expect("json body")
    }

    #[tokio::test]
    async fn get_keeps_query_and_drops_body() {
        let mut gateway = MockUpstreamGateway::new();
        gateway
            .expect_send()
            .withf(|sent| {
                sent.method == ProxyMethod::Get
                    && sent.path_and_query == "/vehicles?page=2&per_page=10"
                    && sent.body.is_none()
                    && sent.authorization.as_deref() == Some(b"Bearer abc".as_slice())
            })
            .times(1)
            .returning(|_| {
                Ok(UpstreamReply {
                    status: 200,
                    body: Bytes::from_static(br#"{"success":true,"data":[]}"#),
                })
            });

        let response = service(gateway)
            .forward(ForwardRequest {
                query: Some("page=2&per_page=10".to_owned()),
                authorization: Some(Bytes::from_static(b"Bearer abc")),
                body: Bytes::from_static(b"ignored"),
                ..request(ProxyMethod::Get, "/vehicles")
            })
            .await;

        assert_eq!(response.status, 200);
        assert_eq!(response.body.as_ref(), br#"{"success":true,"data":[]}"#);
    }

    #[tokio::test]
    async fn post_forwards_body_verbatim_without_authorization() {
        let raw = br#"{"email":"a@b.com"}"#;
        let mut gateway = MockUpstreamGateway::new();
        gateway
            .expect_send()
            .withf(move |sent| {
                sent.method == ProxyMethod::Post
                    && sent.path_and_query == "/auth/forgot-password"
                    && sent.authorization.is_none()
                    && sent.body.as_deref() == Some(&raw[..])
            })
            .times(1)
            .returning(|_| {
                Ok(UpstreamReply {
                    status: 422,
                    body: Bytes::from_static(br#"{"success": false, "message": "Unknown email"}"#),
                })
            });

        let response = service(gateway)
            .forward(ForwardRequest {
                query: Some("ignored=1".to_owned()),
                body: Bytes::from_static(raw),
                ..request(ProxyMethod::Post, "/auth/forgot-password")
            })
            .await;

        assert_eq!(response.status, 422);
        assert_eq!(
            response.body.as_ref(),
            br#"{"success": false, "message": "Unknown email"}"#
        );
    }

    #[tokio::test]
    async fn substitutes_path_parameters() {
        let mut gateway = MockUpstreamGateway::new();
        gateway
            .expect_send()
            .withf(|sent| sent.path_and_query == "/trips/T-9/location")
            .times(1)
            .returning(|_| {
                Ok(UpstreamReply {
                    status: 200,
                    body: Bytes::from_static(br#"{"success":true}"#),
                })
            });

        let response = service(gateway)
            .forward(ForwardRequest {
                body: Bytes::from_static(br#"{"current_lat":18.5,"current_lng":73.8}"#),
                ..request(ProxyMethod::Patch, "/trips/T-9/location")
            })
            .await;
        assert_eq!(response.status, 200);
    }

    #[rstest]
    #[case::delete_on_list(ProxyMethod::Delete, "/vehicles")]
    #[case::get_on_login(ProxyMethod::Get, "/auth/login")]
    #[case::post_on_report(ProxyMethod::Post, "/reports/types")]
    #[tokio::test]
    async fn rejected_methods_never_reach_upstream(#[case] method: ProxyMethod, #[case] path: &str) {
        let mut gateway = MockUpstreamGateway::new();
        gateway.expect_send().with(always()).never();

        let response = service(gateway).forward(request(method, path)).await;

        assert_eq!(response.status, 405);
        assert_eq!(
            body_json(&response),
            json!({ "success": false, "message": "Method not allowed" })
        );
        assert!(!response.allow.is_empty());
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let mut gateway = MockUpstreamGateway::new();
        gateway.expect_send().never();

        let response = service(gateway)
            .forward(request(ProxyMethod::Get, "/warehouses"))
            .await;

        assert_eq!(response.status, 404);
        assert_eq!(
            body_json(&response),
            json!({ "success": false, "message": "Not found" })
        );
    }

    #[rstest]
    #[case::raw_dot_dot(ProxyMethod::Post, "/vehicles/../documents")]
    #[case::encoded_dot_dot(ProxyMethod::Post, "/trips/%2e%2e/costs")]
    #[case::encoded_slash(ProxyMethod::Get, "/trips/..%2Fauth%2Flogin/costs")]
    #[tokio::test]
    async fn dot_segment_parameters_are_not_found(
        #[case] method: ProxyMethod,
        #[case] path: &str,
    ) {
        let mut gateway = MockUpstreamGateway::new();
        gateway.expect_send().with(always()).never();

        let response = service(gateway).forward(request(method, path)).await;

        assert_eq!(response.status, 404);
        assert_eq!(
            body_json(&response),
            json!({ "success": false, "message": "Not found" })
        );
    }

    #[rstest]
    #[case::transport(UpstreamGatewayError::transport("connection refused"), "Proxy error: connection refused")]
    #[case::timeout(
        UpstreamGatewayError::timeout("operation timed out"),
        "Proxy error: upstream request timed out: operation timed out"
    )]
    #[tokio::test]
    async fn transport_failures_become_500(
        #[case] failure: UpstreamGatewayError,
        #[case] expected: &str,
    ) {
        let mut gateway = MockUpstreamGateway::new();
        gateway
            .expect_send()
            .times(1)
            .returning(move |_| Err(failure.clone()));

        let response = service(gateway)
            .forward(request(ProxyMethod::Get, "/dashboard"))
            .await;

        assert_eq!(response.status, 500);
        assert_eq!(body_json(&response), json!({ "success": false, "message": expected }));
    }

    #[tokio::test]
    async fn empty_query_is_not_appended() {
        let mut gateway = MockUpstreamGateway::new();
        gateway
            .expect_send()
            .withf(|sent| sent.path_and_query == "/documents/expiring")
            .times(1)
            .returning(|_| {
                Ok(UpstreamReply {
                    status: 200,
                    body: Bytes::new(),
                })
            });

        let response = service(gateway)
            .forward(ForwardRequest {
                query: Some(String::new()),
                ..request(ProxyMethod::Get, "/documents/expiring")
            })
            .await;
        assert_eq!(response.status, 200);
        assert!(response.body.is_empty());
    }
}
