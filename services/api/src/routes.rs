use crate::assets::static_asset;
use crate::auth::require_basic_auth;
use crate::infra::AppState;
use artist_verdict::config::AuthConfig;
use artist_verdict::store::EvaluationStore;
use artist_verdict::{evaluation_router, EvaluationService};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{middleware, Extension, Json, Router};
use serde_json::json;
use std::sync::Arc;

/// Full application router: liveness stays open, everything else sits behind basic auth.
pub(crate) fn with_service_routes<S>(
    service: Arc<EvaluationService<S>>,
    state: AppState,
    auth: AuthConfig,
) -> Router
where
    S: EvaluationStore + 'static,
{
    let protected = evaluation_router(service)
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .fallback(static_asset)
        .layer(middleware::from_fn_with_state(auth, require_basic_auth));

    Router::new()
        .route("/health", get(healthcheck))
        .merge(protected)
        .layer(Extension(state))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "ok": true }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
