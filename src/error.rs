//! Error types for the Car Chooser application.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the listings file. All of them are fatal at
/// startup.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to open dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV at row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("row {row} has {found} fields, header has {expected}")]
    TooManyFields {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("CSV header has none of the expected listing columns (found: {0})")]
    NoKnownColumns(String),
}

/// Rejected filter input. Rendered to the client as a 400 with a JSON body.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("invalid value '{value}' for {field}: {reason}")]
    InvalidFilter {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("{field}: minimum is greater than maximum")]
    InvalidRange { field: &'static str },
}

impl SearchError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidFilter { field, .. } => field,
            Self::InvalidRange { field } => field,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub field: String,
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected filter input: {}", self);
        let body = ErrorBody {
            error: self.to_string(),
            field: self.field().to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
