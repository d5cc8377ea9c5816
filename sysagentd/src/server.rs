use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use sysagent_core::Collector;

/// Embedded dashboard page
const DASHBOARD_HTML: &str = include_str!("dashboard.html");

/// Build the HTTP surface: the dashboard at `/` and the JSON snapshot at
/// `/metrics`. Both routes accept GET only; axum answers other methods with
/// 405.
pub fn router(collector: Arc<dyn Collector>) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/metrics", get(metrics))
        .with_state(collector)
}

async fn dashboard() -> impl IntoResponse {
    Html(DASHBOARD_HTML)
}

async fn metrics(State(collector): State<Arc<dyn Collector>>) -> impl IntoResponse {
    match collector.metrics() {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(e) => {
            log::error!("failed to assemble metrics: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
