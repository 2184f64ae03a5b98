//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;

pub use config::ServerSettings;
#[cfg(feature = "metrics")]
pub use metrics::{METRICS_PATH, MetricsLayer};

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::UserRepository;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::payload::json_config;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users;

/// Shared state handed to every worker's [`App`].
#[derive(Clone)]
pub struct AppDependencies {
    /// Readiness and liveness flags.
    pub health_state: web::Data<HealthState>,
    /// Users resource behind the handlers.
    pub http_state: web::Data<HttpState>,
    /// Request body limit in bytes.
    pub json_limit: usize,
}

/// Assemble the users and health routes behind the trace middleware.
///
/// Debug builds also mount Swagger UI.
///
/// [`create_server`] calls this once per worker; tests can serve it directly.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        json_limit,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config(json_limit))
        .wrap(Trace)
        .configure(users::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind the HTTP server for `settings`, serving users from `repository`.
///
/// Readiness is flipped once the listener is bound; callers drive the
/// returned [`Server`] and should mark the state unhealthy when it stops.
/// The second element is the bound address, which differs from the
/// configured one when port `0` is requested.
///
/// # Errors
/// Propagates [`std::io::Error`] for an invalid host or a failed bind.
pub fn create_server<R>(
    health_state: web::Data<HealthState>,
    settings: &ServerSettings,
    repository: Arc<R>,
) -> std::io::Result<(Server, SocketAddr)>
where
    R: UserRepository + 'static,
{
    let bind_addr = settings.bind_addr()?;
    let http_state = web::Data::new(HttpState::with_repository(repository));
    let json_limit = settings.json_limit();
    let server_health_state = health_state.clone();

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_settings(settings.metrics_enabled);

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            json_limit,
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?;

    let local_addr = server.addrs().first().copied().unwrap_or(bind_addr);
    info!(addr = %local_addr, "The server is listening.");
    health_state.mark_ready();
    Ok((server.run(), local_addr))
}
