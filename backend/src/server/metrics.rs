//! Prometheus request metrics, switchable at startup.

use std::sync::Arc;

use actix_service::{
    Service, ServiceExt as _, Transform,
    boxed::{self, BoxService},
};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Compat;
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

/// Path serving the metrics exposition.
pub const METRICS_PATH: &str = "/metrics";

/// Middleware that records request metrics when enabled and is a pass-through
/// otherwise, so both builds share one app type.
#[derive(Clone)]
pub enum MetricsLayer {
    /// Record metrics and serve [`METRICS_PATH`].
    Enabled(Arc<PrometheusMetrics>),
    /// Forward requests untouched.
    Disabled,
}

impl MetricsLayer {
    /// Build the layer from settings. A registry error disables metrics
    /// instead of failing startup.
    #[must_use]
    pub fn from_settings(enabled: bool) -> Self {
        if !enabled {
            return Self::Disabled;
        }
        Self::from_builder(|| {
            PrometheusMetricsBuilder::new("users_api")
                .endpoint(METRICS_PATH)
                .build()
        })
    }

    fn from_builder<F, E>(build: F) -> Self
    where
        F: FnOnce() -> Result<PrometheusMetrics, E>,
        E: std::fmt::Display,
    {
        match build() {
            Ok(metrics) => Self::Enabled(Arc::new(metrics)),
            Err(error) => {
                warn!(%error, "metrics disabled: Prometheus registry setup failed");
                Self::Disabled
            }
        }
    }

    /// Whether requests will be measured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }
}

impl<S, B> Transform<S, ServiceRequest> for MetricsLayer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BoxService<ServiceRequest, ServiceResponse<BoxBody>, actix_web::Error>;
    type Future = LocalBoxFuture<'static, Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        match self {
            Self::Enabled(metrics) => {
                let pending = Compat::new(PrometheusMetrics::clone(metrics)).new_transform(service);
                Box::pin(async move { Ok(boxed::service(pending.await?)) })
            }
            Self::Disabled => Box::pin(async move {
                let passthrough =
                    service.map(|res: ServiceResponse<B>| res.map_into_boxed_body());
                Ok(boxed::service(passthrough))
            }),
        }
    }
}
