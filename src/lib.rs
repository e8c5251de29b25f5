//! Car Chooser Library
//!
//! A small local web application for browsing car auction listings exported
//! to CSV, narrowing them down with filters and picking a TOP5 shortlist.
//!
//! ## Modules
//! - **`config`**: Command line and environment configuration.
//! - **`dataset`**: Loads the CSV once at startup into an immutable, ordered
//!   in-memory `Dataset`.
//! - **`search`**: Filter validation, the scan/rank pipeline and its handlers.
//! - **`server`**: The Axum router tying the handlers together.
//! - **`error`**: Error types for startup and request validation.

pub mod config;
pub mod dataset;
pub mod error;
pub mod search;
pub mod server;
