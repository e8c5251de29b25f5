//! Preference score used by the weighted ranking mode.
//!
//! Each component measures how much headroom a listing leaves against the
//! user's own limit (budget, mileage cap, minimum year, minimum power). Mileage
//! dominates the weighting.

use super::types::FilterCriteria;
use crate::dataset::types::Listing;
use std::cmp::Ordering;

pub const W_PRICE: f64 = 0.25;
pub const W_MILEAGE: f64 = 0.50;
pub const W_YEAR: f64 = 0.15;
pub const W_POWER: f64 = 0.10;
pub const CURRENT_YEAR: i32 = 2025;

/// Completeness bonus per present link / price.
const COMPLETENESS_BONUS: f64 = 0.01;

fn clamp01(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

fn safe_div(num: f64, den: f64) -> f64 {
    if den == 0.0 { 0.0 } else { num / den }
}

pub fn score_listing(listing: &Listing, criteria: &FilterCriteria) -> f64 {
    let s_price = match (listing.price, criteria.price_max) {
        (Some(price), Some(max)) => clamp01(safe_div(max - price, max)),
        _ => 0.0,
    };

    let s_mileage = match (listing.mileage, criteria.mileage_max) {
        (Some(mileage), Some(max)) => clamp01(safe_div(max - mileage, max)),
        _ => 0.0,
    };

    let s_year = match (listing.year, criteria.year_min) {
        (Some(year), Some(min)) if min != 0 => {
            let span = (CURRENT_YEAR - min).max(1);
            clamp01(safe_div(f64::from(year - min), f64::from(span)))
        }
        _ => 0.0,
    };

    let s_power = match (listing.power_hp, criteria.power_min) {
        (Some(power), Some(min)) if min != 0.0 => {
            clamp01(safe_div(power - min, min.max(10.0)))
        }
        _ => 0.0,
    };

    let mut bonus = 0.0;
    if listing.link.is_some() {
        bonus += COMPLETENESS_BONUS;
    }
    if listing.price.is_some() {
        bonus += COMPLETENESS_BONUS;
    }

    W_PRICE * s_price + W_MILEAGE * s_mileage + W_YEAR * s_year + W_POWER * s_power + bonus
}

/// Orders two scored listings: higher score first, then lower mileage, lower
/// price, newer year. Missing values lose every tie-break.
pub fn compare_scored(a: (f64, &Listing), b: (f64, &Listing)) -> Ordering {
    b.0.total_cmp(&a.0)
        .then_with(|| ascending_missing_last(a.1.mileage, b.1.mileage))
        .then_with(|| ascending_missing_last(a.1.price, b.1.price))
        .then_with(|| match (a.1.year, b.1.year) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

fn ascending_missing_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
