#![forbid(unsafe_code)]

use folio_server::{build_router, ApiConfig, AppState};
use folio_store::SkillStore;
use std::env;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("FOLIO_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let bind_addr = env::var("FOLIO_BIND").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let db_path =
        PathBuf::from(env::var("FOLIO_DB_PATH").unwrap_or_else(|_| "data/folio.sqlite".to_string()));
    let api = ApiConfig {
        admin_enabled: env_bool("FOLIO_ADMIN_ENABLED", false),
        max_upload_bytes: env_usize("FOLIO_MAX_UPLOAD_BYTES", 5 * 1024 * 1024),
        upload_root: PathBuf::from(
            env::var("FOLIO_UPLOAD_ROOT").unwrap_or_else(|_| "public/skills".to_string()),
        ),
        ..ApiConfig::default()
    };

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("create db dir {}: {e}", parent.display()))?;
        }
    }
    let store = SkillStore::open(&db_path).map_err(|e| format!("open store: {e}"))?;
    let admin_enabled = api.admin_enabled;
    let state = AppState::new(store, api);
    let app = build_router(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr}: {e}"))?;
    info!("folio-server listening on {bind_addr} (admin_enabled={admin_enabled})");
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))
}
