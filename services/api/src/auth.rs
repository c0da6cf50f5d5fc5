use artist_verdict::config::{AuthConfig, Credentials};
use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::json;
use subtle::ConstantTimeEq;
use tracing::debug;

const CHALLENGE: &str = "Basic realm=\"Verdict\"";

/// Rejects requests lacking the configured basic-auth credentials.
pub(crate) async fn require_basic_auth(
    State(auth): State<AuthConfig>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = auth.credentials() else {
        let payload = json!({ "error": "ServerAuthNotConfigured" });
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response();
    };

    let supplied = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(decode_basic);

    match supplied {
        Some((username, password)) if credentials_match(expected, &username, &password) => {
            next.run(request).await
        }
        _ => {
            debug!(path = %request.uri().path(), "rejected unauthenticated request");
            (StatusCode::UNAUTHORIZED, [(header::WWW_AUTHENTICATE, CHALLENGE)]).into_response()
        }
    }
}

/// Splits `Basic <base64(user:pass)>` at the first colon.
fn decode_basic(value: &str) -> Option<(String, String)> {
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let raw = String::from_utf8_lossy(&decoded);
    let (username, password) = raw.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

fn credentials_match(expected: &Credentials, username: &str, password: &str) -> bool {
    let username_ok = expected.username.as_bytes().ct_eq(username.as_bytes());
    let password_ok = expected.password.as_bytes().ct_eq(password.as_bytes());
    (username_ok & password_ok).into()
}
