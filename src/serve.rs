//! Interactive web UI and the query-parameter JSON mode.
//!
//! One route serves both surfaces: GET `/` renders the form page unless
//! `api=true` is in the query string, which bypasses rendering and answers
//! the programmatic JSON contract; POST `/` classifies the submitted form
//! message. Artifacts are read-only shared state behind the process-wide
//! one-time-initialization guard, so handlers need no locking.

use crate::artifacts::{self, ArtifactPaths};
use crate::cli::ServeArgs;
use crate::classify;
use crate::config::{self, SpamcheckConfig, UiConfig};
use crate::page::{self, PageState};
use crate::{api, SpamcheckError};
use axum::{
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;

struct AppState {
    paths: ArtifactPaths,
    ui: UiConfig,
}

#[derive(Deserialize)]
struct IndexQuery {
    api: Option<String>,
    message: Option<String>,
}

#[derive(Deserialize)]
struct CheckForm {
    #[serde(default)]
    message: String,
}

/// Programmatic mode activates on the literal value `true` only.
fn api_requested(q: &IndexQuery) -> bool {
    q.api.as_deref() == Some("true")
}

async fn index(State(state): State<Arc<AppState>>, Query(q): Query<IndexQuery>) -> Response {
    if api_requested(&q) {
        let response = api::respond(artifacts::get(&state.paths), q.message.as_deref());
        let outcome = match &response {
            api::ApiResponse::Success { prediction, .. } => prediction,
            api::ApiResponse::Error { .. } => "error",
        };
        log::info!("api check: {outcome}");
        return Json(response).into_response();
    }
    Html(page::render(&state.ui, &PageState::Blank)).into_response()
}

async fn submit(State(state): State<Arc<AppState>>, Form(form): Form<CheckForm>) -> Html<String> {
    if form.message.is_empty() {
        return Html(page::render(&state.ui, &PageState::Warning));
    }

    let verdict = classify::classify_message(artifacts::get(&state.paths), &form.message);
    log::info!(
        "checked {} bytes: {}",
        form.message.len(),
        verdict.style_tag()
    );
    Html(page::render(
        &state.ui,
        &PageState::Result {
            verdict,
            message: form.message,
        },
    ))
}

/// Build the serve router: GET `/` renders the page or answers the
/// `api=true` JSON mode, POST `/` classifies the submitted form message.
pub fn router(paths: ArtifactPaths, ui: UiConfig) -> Router {
    let state = Arc::new(AppState { paths, ui });
    Router::new()
        .route("/", get(index).post(submit))
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("ctrl-c handler failed: {e}");
    }
}

pub fn handle_serve(
    args: &ServeArgs,
    paths: &ArtifactPaths,
    config: &SpamcheckConfig,
) -> Result<(), SpamcheckError> {
    let bind = config::resolve_bind(args.bind.as_deref(), config);
    let addr: SocketAddr = bind
        .parse()
        .map_err(|e| SpamcheckError::Config(format!("invalid bind address {bind:?}: {e}")))?;

    // Surface a missing artifact at startup rather than on the first
    // request. The server starts either way and degrades per request.
    if artifacts::get(paths).is_none() {
        eprintln!("spamcheck: artifacts missing — serving the fixed server-error verdict");
    }

    let app = router(paths.clone(), config.ui.clone());

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(SpamcheckError::Io)?;

    rt.block_on(async {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        eprintln!("spamcheck: serving on http://{addr}");
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        eprintln!("spamcheck: serve stopped");
        Ok(())
    })
}
