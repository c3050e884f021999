// SPDX-License-Identifier: Apache-2.0

use crate::http::response_contract::{
    admin_disabled_response, api_error_response, store_error_response,
};
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_api::{draft_from_payload, ApiError, MessageDto, SkillDto, SkillPayloadDto};
use tracing::info;

pub(crate) async fn list_handler(State(state): State<AppState>) -> Response {
    if !state.api.admin_enabled {
        return admin_disabled_response();
    }
    let request_id = state.next_request_id();
    info!(request_id = %request_id, route = "/api/admin/skills", "request start");
    let store = state.store.lock().await;
    match store.list() {
        Ok(rows) => {
            let dtos: Vec<SkillDto> = rows.into_iter().map(SkillDto::from).collect();
            Json(dtos).into_response()
        }
        Err(e) => store_error_response(&e, &request_id, "Failed to fetch skills"),
    }
}

pub(crate) async fn create_handler(
    State(state): State<AppState>,
    Json(payload): Json<SkillPayloadDto>,
) -> Response {
    if !state.api.admin_enabled {
        return admin_disabled_response();
    }
    let request_id = state.next_request_id();
    info!(request_id = %request_id, route = "/api/admin/skills", method = "POST", "request start");
    let draft = match draft_from_payload(&payload) {
        Ok(d) => d,
        Err(e) => return api_error_response(e),
    };

    let mut store = state.store.lock().await;
    // Pre-check shapes the 409; the unique index in the store is what
    // actually guarantees it under concurrency.
    match store.find_by_normalized_name(&draft.name.normalized(), None) {
        Ok(Some(_)) => return api_error_response(ApiError::skill_exists()),
        Ok(None) => {}
        Err(e) => return store_error_response(&e, &request_id, "Failed to create skill"),
    }
    match store.create(&draft) {
        Ok(skill) => (StatusCode::CREATED, Json(SkillDto::from(skill))).into_response(),
        Err(e) => store_error_response(&e, &request_id, "Failed to create skill"),
    }
}

pub(crate) async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SkillPayloadDto>,
) -> Response {
    if !state.api.admin_enabled {
        return admin_disabled_response();
    }
    let request_id = state.next_request_id();
    info!(request_id = %request_id, route = "/api/admin/skills/:id", method = "PUT", id, "request start");
    let draft = match draft_from_payload(&payload) {
        Ok(d) => d,
        Err(e) => return api_error_response(e),
    };

    let mut store = state.store.lock().await;
    // Self-exclusion: updating a row to its own current name must pass.
    match store.find_by_normalized_name(&draft.name.normalized(), Some(id)) {
        Ok(Some(_)) => return api_error_response(ApiError::skill_exists()),
        Ok(None) => {}
        Err(e) => return store_error_response(&e, &request_id, "Failed to update skill"),
    }
    match store.update(id, &draft) {
        Ok(skill) => Json(SkillDto::from(skill)).into_response(),
        Err(e) => store_error_response(&e, &request_id, "Failed to update skill"),
    }
}

pub(crate) async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    if !state.api.admin_enabled {
        return admin_disabled_response();
    }
    let request_id = state.next_request_id();
    info!(request_id = %request_id, route = "/api/admin/skills/:id", method = "DELETE", id, "request start");
    let mut store = state.store.lock().await;
    match store.delete(id) {
        Ok(()) => Json(MessageDto {
            message: "Skill deleted successfully".to_string(),
        })
        .into_response(),
        Err(e) => store_error_response(&e, &request_id, "Failed to delete skill"),
    }
}
