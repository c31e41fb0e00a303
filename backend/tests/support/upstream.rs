//! Loopback fleet API stub for integration tests.
//!
//! Binds an Actix server to `127.0.0.1:0`, records every request it sees and
//! answers each with one canned status and body.

use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use fleet_backend::outbound::upstream::UpstreamConfig;
use url::Url;

/// Version segment the stub serves under, mirroring production.
pub const BASE_PATH: &str = "/api/v2";

/// One request as received by the stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
    pub raw_authorization: Option<Vec<u8>>,
    pub api_version: Option<String>,
    pub content_type: Option<String>,
    pub accept: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Clone)]
struct StubState {
    status: u16,
    body: String,
    delay: Option<Duration>,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Running stub; stop it with [`StubUpstream::stop`].
pub struct StubUpstream {
    addr: SocketAddr,
    handle: ServerHandle,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubUpstream {
    /// Start a stub that answers every request with `status` and `body`.
    pub fn start(status: u16, body: &str) -> Self {
        Self::start_with_delay(status, body, None)
    }

    /// Start a stub that waits `delay` before answering.
    pub fn start_with_delay(status: u16, body: &str, delay: Option<Duration>) -> Self {
        let recorded = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status,
            body: body.to_owned(),
            delay,
            recorded: Arc::clone(&recorded),
        };
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        let addr = listener.local_addr().expect("stub address");
        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(state.clone()))
                .default_service(web::to(record))
        })
        .workers(1)
        .listen(listener)
        .expect("listen on stub socket")
        .run();
        let handle = server.handle();
        actix_rt::spawn(server);

        Self {
            addr,
            handle,
            recorded,
        }
    }

    /// Base URL including the version segment.
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}{BASE_PATH}", self.addr)).expect("stub url")
    }

    /// Upstream configuration pointing at this stub.
    pub fn config(&self) -> UpstreamConfig {
        upstream_config(self.base_url(), Duration::from_secs(5))
    }

    /// Requests received so far.
    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().expect("recorded lock").clone()
    }

    /// Stop the server without waiting for in-flight requests.
    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

/// Configuration with test-friendly defaults.
pub fn upstream_config(base_url: Url, request_timeout: Duration) -> UpstreamConfig {
    UpstreamConfig {
        base_url,
        api_version_header: "X-API-Version".to_owned(),
        api_version: "v2".to_owned(),
        request_timeout,
        connect_timeout: Duration::from_secs(2),
    }
}

/// Base URL of a port nothing listens on.
pub fn refused_base_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway address");
    drop(listener);
    Url::parse(&format!("http://{addr}{BASE_PATH}")).expect("refused url")
}

async fn record(req: HttpRequest, body: web::Bytes, state: web::Data<StubState>) -> HttpResponse {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };
    state
        .recorded
        .lock()
        .expect("recorded lock")
        .push(RecordedRequest {
            method: req.method().as_str().to_owned(),
            path: req.path().to_owned(),
            query: req.query_string().to_owned(),
            authorization: header("authorization"),
            raw_authorization: req
                .headers()
                .get("authorization")
                .map(|value| value.as_bytes().to_vec()),
            api_version: header("x-api-version"),
            content_type: header("content-type"),
            accept: header("accept"),
            body: body.to_vec(),
        });

    if let Some(delay) = state.delay {
        actix_rt::time::sleep(delay).await;
    }

    HttpResponse::build(StatusCode::from_u16(state.status).expect("valid stub status"))
        .content_type("application/json")
        .body(state.body.clone())
}
