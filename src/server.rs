//! HTTP Router
//!
//! Wires the dataset and search handlers into a single Axum router. The root
//! page is a static document that drives the JSON endpoints from the browser.

use crate::dataset::handlers::{handle_options, handle_stats};
use crate::dataset::types::Dataset;
use crate::search::handlers::{handle_search, handle_search_form};
use crate::search::types::SearchSettings;
use axum::response::Html;
use axum::{
    Json, Router,
    extract::Extension,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;

pub fn build_router(dataset: Arc<Dataset>, settings: SearchSettings) -> Router {
    Router::new()
        .route("/", get(ui))
        .route("/api/options", get(handle_options))
        .route("/api/results", get(handle_search))
        .route("/results", post(handle_search_form))
        .route("/debug/stats", get(handle_stats))
        .route("/health", get(health))
        .layer(Extension(dataset))
        .layer(Extension(settings))
}

async fn ui() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
