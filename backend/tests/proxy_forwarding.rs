//! End-to-end forwarding through the `/api` catch-all to a loopback upstream.

#[path = "support/upstream.rs"]
#[allow(dead_code)]
mod upstream;

use std::sync::Arc;
use std::time::Duration;

use actix_web::{
    App,
    body::{BoxBody, to_bytes},
    dev::ServiceResponse,
    http::{
        StatusCode,
        header::{self, HeaderValue},
    },
    test::{self, TestRequest},
    web,
};
use fleet_backend::Trace;
use fleet_backend::domain::TRACE_ID_HEADER;
use fleet_backend::domain::proxy::{ProxyService, RouteTable};
use fleet_backend::inbound::http::{proxy, state::HttpState};
use fleet_backend::outbound::upstream::{HttpUpstreamGateway, UpstreamConfig};
use rstest::rstest;
use serde_json::{Value, json};
use upstream::{BASE_PATH, StubUpstream, refused_base_url, upstream_config};

const VEHICLES_PAGE: &str = r#"{"success":true,"data":[{"id":1}],"count":1,"page":2,"per_page":10,"total_pages":3,"has_more":true,"next_page":3}"#;

fn proxy_state(config: &UpstreamConfig) -> web::Data<HttpState> {
    let gateway = HttpUpstreamGateway::new(config).expect("gateway builds");
    let routes = RouteTable::fleet().expect("fleet routes are valid");
    web::Data::new(HttpState::new(Arc::new(ProxyService::new(
        routes,
        Arc::new(gateway),
    ))))
}

macro_rules! init_app {
    ($config:expr) => {
        test::init_service(
            App::new()
                .app_data(proxy_state($config))
                .wrap(Trace)
                .configure(proxy::configure)
                .default_service(web::to(proxy::not_found)),
        )
        .await
    };
}

async fn body_bytes(response: ServiceResponse<BoxBody>) -> Vec<u8> {
    to_bytes(response.into_body())
        .await
        .expect("read body")
        .to_vec()
}

async fn body_json(response: ServiceResponse<BoxBody>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("json body")
}

#[actix_web::test]
async fn get_preserves_query_and_authorization() {
    let stub = StubUpstream::start(200, VEHICLES_PAGE);
    let app = init_app!(&stub.config());

    let request = TestRequest::get()
        .uri("/api/vehicles?page=2&limit=10&status=active")
        .insert_header((header::AUTHORIZATION, "Bearer abc123"))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(TRACE_ID_HEADER));
    assert_eq!(body_bytes(response).await, VEHICLES_PAGE.as_bytes());

    let recorded = stub.recorded();
    assert_eq!(recorded.len(), 1);
    let seen = &recorded[0];
    assert_eq!(seen.method, "GET");
    assert_eq!(seen.path, format!("{BASE_PATH}/vehicles"));
    assert_eq!(seen.query, "page=2&limit=10&status=active");
    assert_eq!(seen.authorization.as_deref(), Some("Bearer abc123"));
    assert_eq!(seen.api_version.as_deref(), Some("v2"));
    assert_eq!(seen.accept.as_deref(), Some("application/json"));
    stub.stop().await;
}

#[actix_web::test]
async fn post_forwards_body_verbatim_without_authorization() {
    let stub = StubUpstream::start(200, r#"{"success":true,"data":{"token":"t"}}"#);
    let app = init_app!(&stub.config());
    let payload = br#"{"identifier":"owner@fleet.test","password":"s3cret"}"#;

    let request = TestRequest::post()
        .uri("/api/auth/login?ignored=1")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload(payload.as_slice())
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let recorded = stub.recorded();
    assert_eq!(recorded.len(), 1);
    let seen = &recorded[0];
    assert_eq!(seen.method, "POST");
    assert_eq!(seen.path, format!("{BASE_PATH}/auth/login"));
    assert_eq!(seen.query, "");
    assert_eq!(seen.body, payload.to_vec());
    assert_eq!(seen.content_type.as_deref(), Some("application/json"));
    assert!(seen.authorization.is_none());
    stub.stop().await;
}

#[actix_web::test]
async fn path_parameters_are_substituted() {
    let stub = StubUpstream::start(200, r#"{"success":true}"#);
    let app = init_app!(&stub.config());

    let request = TestRequest::patch()
        .uri("/api/trips/42/state")
        .set_payload(r#"{"state":"completed"}"#)
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let recorded = stub.recorded();
    assert_eq!(recorded[0].method, "PATCH");
    assert_eq!(recorded[0].path, format!("{BASE_PATH}/trips/42/state"));
    stub.stop().await;
}

#[rstest]
#[case::unauthorised(401, r#"{"success":false,"message":"Invalid credentials"}"#)]
#[case::missing(404, r#"{"success":false,"message":"Vehicle not found"}"#)]
#[case::server_error(500, r#"{"success":false,"message":"Database unavailable"}"#)]
#[actix_web::test]
async fn upstream_errors_pass_through(#[case] status: u16, #[case] body: &str) {
    let stub = StubUpstream::start(status, body);
    let app = init_app!(&stub.config());

    let response =
        test::call_service(&app, TestRequest::get().uri("/api/vehicles/9").to_request()).await;

    assert_eq!(response.status().as_u16(), status);
    assert_eq!(body_bytes(response).await, body.as_bytes());
    stub.stop().await;
}

#[actix_web::test]
async fn unknown_route_never_reaches_upstream() {
    let stub = StubUpstream::start(200, r#"{"success":true}"#);
    let app = init_app!(&stub.config());

    let response =
        test::call_service(&app, TestRequest::get().uri("/api/unknown/path").to_request()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "success": false, "message": "Not found" })
    );
    assert!(stub.recorded().is_empty());
    stub.stop().await;
}

#[rstest]
#[case::raw_dot_dot("/api/vehicles/../documents")]
#[case::encoded_dot_dot("/api/trips/%2e%2e/costs")]
#[case::encoded_slash("/api/trips/x%2F..%2F..%2Fauth/costs")]
#[actix_web::test]
async fn dot_segment_parameters_never_reach_upstream(#[case] uri: &str) {
    let stub = StubUpstream::start(200, r#"{"success":true}"#);
    let app = init_app!(&stub.config());

    let request = TestRequest::post()
        .uri(uri)
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload(r#"{"amount":10}"#)
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({ "success": false, "message": "Not found" })
    );
    assert!(stub.recorded().is_empty());
    stub.stop().await;
}

#[actix_web::test]
async fn non_ascii_authorization_is_forwarded_byte_for_byte() {
    let stub = StubUpstream::start(200, r#"{"success":true,"data":{}}"#);
    let app = init_app!(&stub.config());
    let token = b"Bearer caf\xe9";

    let request = TestRequest::get()
        .uri("/api/profile")
        .insert_header((
            header::AUTHORIZATION,
            HeaderValue::from_bytes(token).expect("obs-text is a valid header value"),
        ))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let recorded = stub.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].raw_authorization.as_deref(), Some(token.as_slice()));
    stub.stop().await;
}

#[actix_web::test]
async fn rejected_method_lists_allowed_methods() {
    let stub = StubUpstream::start(200, r#"{"success":true}"#);
    let app = init_app!(&stub.config());

    let response =
        test::call_service(&app, TestRequest::patch().uri("/api/vehicles").to_request()).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response
            .headers()
            .get(header::ALLOW)
            .and_then(|value| value.to_str().ok()),
        Some("GET, POST")
    );
    assert_eq!(
        body_json(response).await,
        json!({ "success": false, "message": "Method not allowed" })
    );
    assert!(stub.recorded().is_empty());
    stub.stop().await;
}

#[actix_web::test]
async fn connection_refused_becomes_proxy_error() {
    let config = upstream_config(refused_base_url(), Duration::from_secs(5));
    let app = init_app!(&config);

    let response =
        test::call_service(&app, TestRequest::get().uri("/api/dashboard").to_request()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(false));
    assert!(
        body["message"]
            .as_str()
            .is_some_and(|message| message.starts_with("Proxy error: ")),
        "unexpected body: {body}"
    );
}

#[actix_web::test]
async fn slow_upstream_times_out() {
    let stub = StubUpstream::start_with_delay(
        200,
        r#"{"success":true}"#,
        Some(Duration::from_secs(2)),
    );
    let config = upstream_config(stub.base_url(), Duration::from_millis(200));
    let app = init_app!(&config);

    let response =
        test::call_service(&app, TestRequest::get().uri("/api/dashboard").to_request()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(
        body["message"]
            .as_str()
            .is_some_and(|message| message.contains("timed out")),
        "unexpected body: {body}"
    );
    stub.stop().await;
}
