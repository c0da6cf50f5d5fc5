use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::service::{history_limit, EvaluationService, EvaluationServiceError};
use crate::store::EvaluationStore;
use crate::verdict::{EvaluationInput, VerdictError};

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Router exposing evaluation and history endpoints.
pub fn evaluation_router<S>(service: Arc<EvaluationService<S>>) -> Router
where
    S: EvaluationStore + 'static,
{
    Router::new()
        .route("/api/evaluate", post(evaluate_handler::<S>))
        .route("/api/history", get(history_handler::<S>))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<String>,
}

pub(crate) async fn evaluate_handler<S>(
    State(service): State<Arc<EvaluationService<S>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response
where
    S: EvaluationStore + 'static,
{
    let payload = match read_payload(&headers, &body) {
        Ok(payload) => payload,
        Err(err) => {
            warn!(error = %err, "unreadable evaluation payload");
            let body = json!({
                "error": "INVALID_JSON",
                "message": err.to_string(),
            });
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    let input = EvaluationInput::from_value(payload);
    let outcome = tokio::task::spawn_blocking(move || service.evaluate(input)).await;
    match outcome.map_err(EvaluationServiceError::from).and_then(|result| result) {
        Ok(verdict) => (StatusCode::OK, Json(verdict)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn history_handler<S>(
    State(service): State<Arc<EvaluationService<S>>>,
    Query(query): Query<HistoryQuery>,
) -> Response
where
    S: EvaluationStore + 'static,
{
    let limit = history_limit(query.limit.as_deref());
    let outcome = tokio::task::spawn_blocking(move || service.history(limit)).await;
    match outcome.map_err(EvaluationServiceError::from).and_then(|result| result) {
        Ok(items) => (StatusCode::OK, Json(json!({ "items": items }))).into_response(),
        Err(err) => error_response(err),
    }
}

/// Empty bodies and non-JSON content types carry no fields; only JSON that
/// fails to parse is an error.
fn read_payload(headers: &HeaderMap, body: &Bytes) -> Result<Value, serde_json::Error> {
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(is_json_content_type)
        .unwrap_or(false);

    if !is_json || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_slice(body)
}

fn is_json_content_type(value: &str) -> bool {
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}

fn error_response(err: EvaluationServiceError) -> Response {
    match err {
        EvaluationServiceError::Verdict(VerdictError::Validation(error)) => {
            let payload = json!({
                "error": "VALIDATION_ERROR",
                "details": error.details,
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        EvaluationServiceError::Verdict(VerdictError::InvalidEnum(error)) => {
            let payload = json!({
                "error": "INVALID_ENUM_VALUE",
                "field": error.field,
                "allowed": error.allowed,
                "message": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        err @ (EvaluationServiceError::Store(_) | EvaluationServiceError::Worker(_)) => {
            let payload = json!({
                "error": "INTERNAL_ERROR",
                "message": err.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
