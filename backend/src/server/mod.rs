//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use fleet_backend::Trace;
use fleet_backend::domain::proxy::{ProxyService, RouteTable};
use fleet_backend::inbound::http::health::{HealthState, live, ready};
use fleet_backend::inbound::http::proxy;
use fleet_backend::inbound::http::state::HttpState;
use fleet_backend::outbound::upstream::HttpUpstreamGateway;

fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let routes = RouteTable::fleet()
        .map_err(|e| std::io::Error::other(format!("invalid route table: {e}")))?;
    let gateway = HttpUpstreamGateway::new(&config.upstream)
        .map_err(|e| std::io::Error::other(format!("upstream gateway setup failed: {e}")))?;
    info!(
        routes = routes.len(),
        upstream = %config.upstream.base_url,
        "proxy routes loaded"
    );
    let service = ProxyService::new(routes, Arc::new(gateway));
    Ok(web::Data::new(HttpState::new(Arc::new(service))))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(ready)
        .service(live)
        .configure(proxy::configure)
        .default_service(web::to(proxy::not_found))
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when the gateway cannot be built or binding
/// the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config)?;
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "fleet proxy listening");
    health_state.mark_ready();
    Ok(server)
}
