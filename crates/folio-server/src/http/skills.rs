// SPDX-License-Identifier: Apache-2.0

use crate::http::response_contract::store_error_response;
use crate::AppState;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_api::SkillDto;
use tracing::info;

/// Public read-only listing feeding the marketing page. Same rows as
/// the admin listing; consumers apply their own fallback when this
/// fails or comes back empty.
pub(crate) async fn public_list_handler(State(state): State<AppState>) -> Response {
    let request_id = state.next_request_id();
    info!(request_id = %request_id, route = "/api/skills", "request start");
    let store = state.store.lock().await;
    match store.list() {
        Ok(rows) => {
            let dtos: Vec<SkillDto> = rows.into_iter().map(SkillDto::from).collect();
            Json(dtos).into_response()
        }
        Err(e) => store_error_response(&e, &request_id, "Failed to fetch skills"),
    }
}
