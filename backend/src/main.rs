//! Users API entry-point: loads settings, installs logging and serves HTTP.

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use users_api::inbound::http::health::HealthState;
use users_api::outbound::memory::MemoryUserRepository;
use users_api::server::{ServerSettings, create_server};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).json().try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let health_state = web::Data::new(HealthState::new());
    let (server, _addr) = create_server(
        health_state.clone(),
        &settings,
        Arc::new(MemoryUserRepository::new()),
    )?;

    let result = server.await;
    health_state.mark_unhealthy();
    info!("The server has stopped.");
    result
}
