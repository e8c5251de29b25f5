//! Dataset Types
//!
//! The in-memory representation of the listings file. Everything here is
//! built once at startup and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Maximum number of distinct values offered per categorical filter.
pub const MAX_OPTION_VALUES: usize = 200;

/// A single car auction listing (one CSV row).
///
/// `id` is the 0-based position of the row in the source file, so sorting by
/// `id` always restores source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: usize,
    pub title: Option<String>,
    pub link: Option<String>,
    pub price: Option<f64>,
    pub mileage: Option<f64>,
    pub mileage_km: Option<f64>,
    pub year: Option<i32>,
    pub power_hp: Option<f64>,
    pub capacity_cm3: Option<f64>,
    pub fuel_type: Option<String>,
    pub gearbox: Option<String>,
    pub city: Option<String>,
    pub voivodeship: Option<String>,
    pub other_info: Option<String>,
}

/// Distinct categorical values used to populate the filter form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub fuel_types: Vec<String>,
    pub gearboxes: Vec<String>,
    pub voivodeships: Vec<String>,
}

/// Ordered, read-only collection of listings.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    listings: Vec<Listing>,
    options: FilterOptions,
}

impl Dataset {
    /// Builds a dataset and its distinct-value tables.
    ///
    /// Listing ids are reassigned to match their position so that the
    /// "id == source row" invariant holds regardless of the caller.
    pub fn from_listings(mut listings: Vec<Listing>) -> Self {
        for (idx, listing) in listings.iter_mut().enumerate() {
            listing.id = idx;
        }

        let options = FilterOptions {
            fuel_types: distinct(&listings, |l| l.fuel_type.as_deref()),
            gearboxes: distinct(&listings, |l| l.gearbox.as_deref()),
            voivodeships: distinct(&listings, |l| l.voivodeship.as_deref()),
        };

        Self { listings, options }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: usize) -> Option<&Listing> {
        self.listings.get(id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }
}

fn distinct<F>(listings: &[Listing], field: F) -> Vec<String>
where
    F: Fn(&Listing) -> Option<&str>,
{
    listings
        .iter()
        .filter_map(&field)
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .take(MAX_OPTION_VALUES)
        .map(str::to_string)
        .collect()
}
