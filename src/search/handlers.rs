use super::engine::search;
use super::types::{FilterParams, SearchResponse, SearchSettings};
use crate::dataset::types::Dataset;
use crate::error::SearchError;
use axum::extract::{Form, Query};
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_search(
    Query(params): Query<FilterParams>,
    Extension(dataset): Extension<Arc<Dataset>>,
    Extension(settings): Extension<SearchSettings>,
) -> Result<Json<SearchResponse>, SearchError> {
    run_search(params, &dataset, settings).map(Json)
}

pub async fn handle_search_form(
    Extension(dataset): Extension<Arc<Dataset>>,
    Extension(settings): Extension<SearchSettings>,
    Form(params): Form<FilterParams>,
) -> Result<Json<SearchResponse>, SearchError> {
    run_search(params, &dataset, settings).map(Json)
}

pub fn run_search(
    params: FilterParams,
    dataset: &Dataset,
    settings: SearchSettings,
) -> Result<SearchResponse, SearchError> {
    let criteria = params.into_criteria()?;
    tracing::debug!("Search with criteria {:?}", criteria);

    let outcome = search(dataset, &criteria, settings);
    tracing::debug!(
        "Search matched {} listings, returning {}",
        outcome.total_count,
        outcome.top5.len()
    );

    Ok(SearchResponse {
        filters: criteria.describe(),
        ranking: settings.ranking.to_string(),
        total_count: outcome.total_count,
        count: outcome.top5.len(),
        top5: outcome.top5.into_iter().cloned().collect(),
        results: outcome.results.into_iter().cloned().collect(),
    })
}
