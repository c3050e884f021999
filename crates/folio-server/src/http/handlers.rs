// SPDX-License-Identifier: Apache-2.0

use axum::response::IntoResponse;
use axum::Json;
use folio_api::API_VERSION;
use serde_json::json;

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    Json(json!({"status": "ok", "version": API_VERSION}))
}
