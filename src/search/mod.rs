//! Search Service Module
//!
//! Turns user filter input into the TOP5 shortlist.
//!
//! ## Pipeline
//! 1. **Validation**: Raw string parameters become `FilterCriteria`; malformed
//!    numbers and inverted ranges are rejected with a field-level message.
//! 2. **Filtering**: A source-ordered scan keeps listings satisfying every
//!    active constraint (equality on categories, bounds on numbers).
//! 3. **De-duplication** (optional): Repeated auctions are dropped by link.
//! 4. **Ranking**: Either dataset order or a preference score.
//! 5. **Cut**: The first five become the shortlist; the first fifty form the
//!    preview list.
//!
//! ## Submodules
//! - **`criteria`**: Parameter parsing and validation.
//! - **`engine`**: Filtering, de-duplication, ranking.
//! - **`scoring`**: Preference score for the weighted mode.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Request/response DTOs and search settings.

pub mod criteria;
pub mod engine;
pub mod handlers;
pub mod scoring;
pub mod types;
