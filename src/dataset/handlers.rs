use super::types::{Dataset, FilterOptions};
use crate::search::types::SearchSettings;
use axum::{Extension, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub listings: usize,
    pub ranking: String,
    pub dedup: bool,
}

pub async fn handle_options(Extension(dataset): Extension<Arc<Dataset>>) -> Json<FilterOptions> {
    Json(dataset.options().clone())
}

pub async fn handle_stats(
    Extension(dataset): Extension<Arc<Dataset>>,
    Extension(settings): Extension<SearchSettings>,
) -> Json<StatsResponse> {
    Json(StatsResponse {
        listings: dataset.len(),
        ranking: settings.ranking.to_string(),
        dedup: settings.dedup,
    })
}
