//! Catch-all handler under `/api`.
//!
//! Translates an Actix request into a [`ForwardRequest`], hands it to the
//! domain service and relays the [`ProxyResponse`] as JSON.

use std::str::FromStr;

use actix_web::{
    HttpRequest, HttpResponse,
    http::{StatusCode, header},
    web,
};
use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;
use tracing::warn;

use crate::domain::{
    Error,
    proxy::{ForwardRequest, NOT_FOUND_MESSAGE, ProxyMethod, ProxyResponse, ProxyService},
};
use crate::inbound::http::{ApiResult, state::HttpState};

/// Prefix stripped from inbound paths before route matching.
pub const API_MOUNT: &str = "/api";

/// Register the catch-all proxy scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope(API_MOUNT).default_service(web::to(forward)));
}

/// Forward any request below `/api` to the fleet API.
pub async fn forward(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<HttpState>,
) -> ApiResult<HttpResponse> {
    let path = inbound_path(&req);
    let Ok(method) = ProxyMethod::from_str(req.method().as_str()) else {
        return relay(unsupported_method(&state.proxy, path));
    };

    let body = read_body(payload).await?;
    let request = ForwardRequest {
        method,
        path: path.to_owned(),
        query: Some(req.query_string())
            .filter(|query| !query.is_empty())
            .map(str::to_owned),
        authorization: req
            .headers()
            .get(header::AUTHORIZATION)
            .map(|value| Bytes::copy_from_slice(value.as_bytes())),
        body,
    };

    relay(state.proxy.forward(request).await)
}

/// Respond 404 for anything outside the proxy and health routes.
pub async fn not_found() -> ApiResult<HttpResponse> {
    Err(Error::not_found(NOT_FOUND_MESSAGE))
}

fn inbound_path(req: &HttpRequest) -> &str {
    match req.path().strip_prefix(API_MOUNT) {
        Some("") | None => "/",
        Some(rest) => rest,
    }
}

// HEAD, OPTIONS and friends never reach the upstream.
fn unsupported_method(proxy: &ProxyService, path: &str) -> ProxyResponse {
    match proxy.routes().resolve(path) {
        Some((route, _)) => ProxyResponse::method_not_allowed(route.methods()),
        None => ProxyResponse::not_found(),
    }
}

async fn read_body(mut payload: web::Payload) -> Result<Bytes, Error> {
    let mut body = BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|err| {
            warn!(error = %err, "failed to read request body");
            Error::invalid_request("Request body could not be read")
        })?;
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}

fn relay(response: ProxyResponse) -> ApiResult<HttpResponse> {
    let ProxyResponse {
        status,
        body,
        allow,
    } = response;
    let status = StatusCode::from_u16(status).map_err(|err| {
        warn!(%status, error = %err, "upstream returned an unrepresentable status");
        Error::internal("invalid upstream status")
    })?;

    let mut builder = HttpResponse::build(status);
    builder.insert_header(header::ContentType::json());
    if !allow.is_empty() {
        let methods = allow
            .iter()
            .map(|method| method.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        builder.insert_header((header::ALLOW, methods));
    }
    Ok(builder.body(body))
}
