//! Proxy entry-point: loads settings, wires the forwarding service and runs
//! the HTTP server.

mod server;

use actix_web::web;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use fleet_backend::inbound::http::health::HealthState;
use fleet_backend::settings::ProxySettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let runtime = ProxySettings::load_from_args(std::env::args_os())
        .and_then(|settings| settings.initialize())
        .map_err(|e| {
            error!(error = %e, "invalid proxy settings");
            std::io::Error::other(e)
        })?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), ServerConfig::new(runtime))?;
    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome
}
