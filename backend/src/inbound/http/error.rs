//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn failures into the same `{"success": false, "message": ..}`
//! envelope the fleet API uses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use pagination::Envelope;
use tracing::error;

pub use crate::domain::ApiResult;
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

const REDACTED_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn public_message(error: &Error) -> &str {
    if matches!(error.code(), ErrorCode::InternalError) {
        REDACTED_MESSAGE
    } else {
        error.message()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(Envelope::<()>::failure(public_message(self)))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(REDACTED_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn body_json(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body()).await.expect("read body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[rstest]
    #[case(Error::invalid_request("bad body"), StatusCode::BAD_REQUEST)]
    #[case(Error::not_found("Not found"), StatusCode::NOT_FOUND)]
    #[case(Error::method_not_allowed("Method not allowed"), StatusCode::METHOD_NOT_ALLOWED)]
    #[case(Error::upstream_unavailable("down"), StatusCode::BAD_GATEWAY)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn maps_codes_to_statuses(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[actix_web::test]
    async fn renders_failure_envelope_with_trace_header() {
        let error = Error::not_found("Not found").with_trace_id("abc");
        let response = error.error_response();
        assert_eq!(
            response
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok()),
            Some("abc")
        );
        assert_eq!(
            body_json(response).await,
            json!({ "success": false, "message": "Not found" })
        );
    }

    #[actix_web::test]
    async fn redacts_internal_messages() {
        let response = Error::internal("db password is hunter2").error_response();
        assert_eq!(
            body_json(response).await,
            json!({ "success": false, "message": "Internal server error" })
        );
    }
}
