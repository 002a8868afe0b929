// src/api.rs

//! HTTP surface: metrics scrape, health probe and the fan cleaning trigger.

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use prometheus::Registry;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::{error, info, warn};

use crate::driver::{Sensor, SharedSensor};
use crate::metrics::encode_text;
use crate::supervisor::HealthFlag;

/// Requests declaring a larger body are rejected with `413`.
pub const MAX_BODY_BYTES: usize = 1024;

const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

pub struct ApiState<S> {
    pub health: HealthFlag,
    pub registry: Registry,
    /// The poller's sensor, used for maintenance commands.
    pub sensor: SharedSensor<S>,
    pub clean_enabled: bool,
}

impl<S> Clone for ApiState<S> {
    fn clone(&self) -> Self {
        Self {
            health: self.health.clone(),
            registry: self.registry.clone(),
            sensor: self.sensor.clone(),
            clean_enabled: self.clean_enabled,
        }
    }
}

pub fn router<S>(state: ApiState<S>) -> Router
where
    S: Sensor + 'static,
{
    Router::new()
        .route("/metrics", get(metrics::<S>))
        .route("/healthz", get(healthz::<S>))
        .route("/clean", any(clean::<S>))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}

async fn metrics<S>(State(state): State<ApiState<S>>) -> Response {
    match encode_text(&state.registry) {
        Ok(body) => ([(header::CONTENT_TYPE, METRICS_CONTENT_TYPE)], body).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to encode metrics").into_response()
        }
    }
}

async fn healthz<S>(State(state): State<ApiState<S>>) -> (StatusCode, &'static str) {
    if state.health.is_healthy() {
        (StatusCode::OK, "ok")
    } else {
        warn!("Health check failed");
        (StatusCode::SERVICE_UNAVAILABLE, "sensor error")
    }
}

async fn clean<S>(State(state): State<ApiState<S>>, method: Method) -> (StatusCode, &'static str)
where
    S: Sensor,
{
    if !state.clean_enabled {
        return (StatusCode::NOT_FOUND, "404 page not found");
    }
    if method != Method::POST {
        return (StatusCode::METHOD_NOT_ALLOWED, "POST only");
    }

    let mut sensor = state.sensor;
    match sensor.clean().await {
        Ok(()) => {
            info!("Sensor cleaning started via /clean");
            (StatusCode::OK, "cleaning started")
        }
        Err(e) => {
            error!(error = %e, "Sensor cleaning failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to start cleaning")
        }
    }
}
