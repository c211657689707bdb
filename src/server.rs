use crate::{config::Config, fs::JailedFs};
use anyhow::Context;
use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub fs: Arc<JailedFs>,
}

pub async fn serve(cfg: Config, fs: JailedFs) -> anyhow::Result<()> {
    let shared = AppState {
        cfg: Arc::new(cfg),
        fs: Arc::new(fs),
    };

    let app = build_router(shared.clone());

    let addr: std::net::SocketAddr =
        format!("{}:{}", shared.cfg.server.bind_addr, shared.cfg.server.port)
            .parse()
            .context("parsing bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(shared: AppState) -> Router {
    let base = shared.cfg.server.base_path.clone();
    let mount = if base.is_empty() { "/".to_string() } else { base.clone() };
    Router::new()
        .route("/healthz", get(health))
        .route(&mount, get(serve_root))
        .route(&format!("{base}/*name"), get(serve_name))
        .with_state(shared)
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status":"ok"})))
}

async fn serve_root(State(state): State<AppState>, req: Request) -> Response {
    respond(&state, String::new(), req).await
}

async fn serve_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
    req: Request,
) -> Response {
    respond(&state, name, req).await
}

async fn respond(state: &AppState, name: String, req: Request) -> Response {
    let started = Instant::now();
    let request_id = uuid::Uuid::new_v4().to_string();
    let method = req.method().to_string();
    let res = state.fs.serve_file(req, &name).await;
    access_log(
        &request_id,
        &method,
        &name,
        res.status().as_u16(),
        started.elapsed().as_millis() as u64,
    );
    res
}

fn access_log(request_id: &str, method: &str, name: &str, status: u16, duration_ms: u64) {
    tracing::info!(
        request_id = request_id,
        method = method,
        name = name,
        status = status,
        duration_ms = duration_ms,
        "access"
    );
}
