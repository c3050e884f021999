// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_api::{http_status_for, ApiError, ApiErrorCode};
use folio_store::StoreError;
use serde_json::json;
use tracing::error;

#[must_use]
pub(crate) fn api_error_response(err: ApiError) -> Response {
    let status = StatusCode::from_u16(http_status_for(err.code))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({"error": err}))).into_response()
}

/// Collapses store failures into the wire taxonomy. `fallback_message`
/// is the operation-specific generic message the client sees on 500;
/// the real cause goes to the log only.
#[must_use]
pub(crate) fn store_error_response(
    e: &StoreError,
    request_id: &str,
    fallback_message: &str,
) -> Response {
    match e {
        StoreError::DuplicateName(_) => api_error_response(ApiError::skill_exists()),
        StoreError::NotFound(id) => api_error_response(ApiError::skill_not_found(*id)),
        StoreError::Corrupt(_) | StoreError::Sqlite(_) => {
            error!(request_id = %request_id, "store failure: {e}");
            api_error_response(ApiError::new(
                ApiErrorCode::Internal,
                fallback_message,
                json!({}),
            ))
        }
    }
}

/// Routes behind the admin flag answer as if they do not exist.
#[must_use]
pub(crate) fn admin_disabled_response() -> Response {
    StatusCode::NOT_FOUND.into_response()
}
