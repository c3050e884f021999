#![forbid(unsafe_code)]
//! Portfolio HTTP server.
//!
//! Routes: a public read-only skills listing, an admin CRUD surface
//! gated by a deployment flag, a multipart logo upload, and static
//! serving of previously uploaded files. All state lives in
//! [`AppState`]; [`build_router`] is listener-agnostic so tests can
//! bind an ephemeral port.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use folio_store::SkillStore;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

mod config;
mod http;

pub use config::ApiConfig;

pub const CRATE_NAME: &str = "folio-server";

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<SkillStore>>,
    pub api: Arc<ApiConfig>,
    request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(store: SkillStore, api: ApiConfig) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            api: Arc::new(api),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }

    pub(crate) fn next_request_id(&self) -> String {
        format!("req-{}", self.request_id_seed.fetch_add(1, Ordering::Relaxed))
    }
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.api.max_upload_bytes.saturating_add(64 * 1024);
    Router::new()
        .route("/healthz", get(http::handlers::healthz_handler))
        .route("/api/skills", get(http::skills::public_list_handler))
        .route(
            "/api/admin/skills",
            get(http::admin_skills::list_handler).post(http::admin_skills::create_handler),
        )
        .route(
            "/api/admin/skills/:id",
            axum::routing::put(http::admin_skills::update_handler)
                .delete(http::admin_skills::delete_handler),
        )
        .route("/api/upload", post(http::upload::upload_handler))
        .route("/skills/:filename", get(http::static_files::serve_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
