use crate::infra::AppState;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use std::path::PathBuf;
use tracing::debug;

/// Serves the browser front end from the configured web root.
pub(crate) async fn static_asset(
    Extension(state): Extension<AppState>,
    method: Method,
    uri: Uri,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::NOT_FOUND.into_response();
    }
    let Some(relative) = asset_path(uri.path()) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let path = state.web_root.join(relative);
    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.to_string())], bytes).into_response()
        }
        Err(err) => {
            debug!(path = %path.display(), error = %err, "static asset unavailable");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

/// Maps a request path onto a file below the web root; `None` for traversal attempts.
fn asset_path(request_path: &str) -> Option<PathBuf> {
    let mut resolved = PathBuf::new();
    for segment in request_path.split('/') {
        match segment {
            "" | "." => {}
            ".." => return None,
            other if other.contains('\\') => return None,
            other => resolved.push(other),
        }
    }

    if resolved.as_os_str().is_empty() || request_path.ends_with('/') {
        resolved.push("index.html");
    }
    Some(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_directories_resolve_to_index() {
        assert_eq!(asset_path("/"), Some(PathBuf::from("index.html")));
        assert_eq!(asset_path("/docs/"), Some(PathBuf::from("docs/index.html")));
        assert_eq!(asset_path("/app.js"), Some(PathBuf::from("app.js")));
    }

    #[test]
    fn traversal_is_refused() {
        assert_eq!(asset_path("/../secrets.env"), None);
        assert_eq!(asset_path("/css/../../verdict.sqlite"), None);
        assert_eq!(asset_path("/..\\verdict.sqlite"), None);
    }
}
