//! Dataset Module
//!
//! Owns the listings loaded from the auction CSV export.
//!
//! ## Lifecycle
//! 1. **Load**: `loader::load_dataset` reads the file once before the HTTP
//!    listener is bound. Any failure aborts startup.
//! 2. **Normalize**: Scraper headers (`Fuel Type`, `power[HP]`, ...) are mapped
//!    onto `Listing` fields and numeric cells are coerced leniently.
//! 3. **Share**: The resulting `Dataset` is wrapped in an `Arc` and handed to
//!    the router. It is never mutated afterwards, so no locking is needed.
//!
//! ## Submodules
//! - **`loader`**: CSV parsing and cell coercion.
//! - **`handlers`**: Read-only HTTP endpoints (filter options, stats).
//! - **`types`**: `Listing`, `Dataset` and `FilterOptions`.

pub mod handlers;
pub mod loader;
pub mod types;
