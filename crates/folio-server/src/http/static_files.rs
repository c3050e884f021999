// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

fn safe_filename(raw: &str) -> bool {
    !raw.is_empty()
        && !raw.starts_with('.')
        && raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
}

fn content_type_for(filename: &str) -> &'static str {
    match filename.rsplit_once('.').map(|(_, ext)| ext) {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Serves previously uploaded logos. In the original deployment the web
/// tier served these directly from the public directory.
pub(crate) async fn serve_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    if !safe_filename(&filename) {
        return StatusCode::NOT_FOUND.into_response();
    }
    let path = state.api.upload_root.join(&filename);
    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type_for(&filename))],
            bytes,
        )
            .into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_segments_are_rejected() {
        assert!(!safe_filename("../etc/passwd"));
        assert!(!safe_filename(".hidden"));
        assert!(!safe_filename(""));
        assert!(safe_filename("skill-1700000000123000042.png"));
    }

    #[test]
    fn content_types_cover_the_allowlist() {
        assert_eq!(content_type_for("a.png"), "image/png");
        assert_eq!(content_type_for("a.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("a.svg"), "image/svg+xml");
        assert_eq!(content_type_for("a.bin"), "application/octet-stream");
    }
}
