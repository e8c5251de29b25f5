use super::scoring::{compare_scored, score_listing};
use super::types::{
    FilterCriteria, PREVIEW_LIMIT, RankingMode, SearchOutcome, SearchSettings, TOP_N,
};
use crate::dataset::types::{Dataset, Listing};
use std::collections::HashSet;

pub fn search<'a>(
    dataset: &'a Dataset,
    criteria: &FilterCriteria,
    settings: SearchSettings,
) -> SearchOutcome<'a> {
    let mut candidates = filter(dataset, criteria);
    if settings.dedup {
        candidates = dedup_listings(candidates);
    }
    let total_count = candidates.len();

    let ranked = rank(candidates, criteria, settings.ranking);
    let results: Vec<&Listing> = ranked.into_iter().take(PREVIEW_LIMIT).collect();
    let top5 = results.iter().copied().take(TOP_N).collect();

    SearchOutcome {
        total_count,
        top5,
        results,
    }
}

/// Scans the dataset in source order, keeping listings that satisfy every
/// active constraint.
pub fn filter<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> Vec<&'a Listing> {
    dataset
        .listings()
        .iter()
        .filter(|listing| matches(listing, criteria))
        .collect()
}

/// A constraint on a field the listing does not have excludes the listing.
pub fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    fn equals(value: &Option<String>, wanted: &Option<String>) -> bool {
        match wanted {
            Some(wanted) => value.as_deref() == Some(wanted.as_str()),
            None => true,
        }
    }

    fn at_least<T: PartialOrd>(value: Option<T>, bound: Option<T>) -> bool {
        match bound {
            Some(bound) => value.is_some_and(|v| v >= bound),
            None => true,
        }
    }

    fn at_most<T: PartialOrd>(value: Option<T>, bound: Option<T>) -> bool {
        match bound {
            Some(bound) => value.is_some_and(|v| v <= bound),
            None => true,
        }
    }

    equals(&listing.fuel_type, &criteria.fuel_type)
        && equals(&listing.gearbox, &criteria.gearbox)
        && equals(&listing.voivodeship, &criteria.voivodeship)
        && at_least(listing.price, criteria.price_min)
        && at_most(listing.price, criteria.price_max)
        && at_least(listing.year, criteria.year_min)
        && at_most(listing.year, criteria.year_max)
        && at_most(listing.mileage, criteria.mileage_max)
        && at_least(listing.power_hp, criteria.power_min)
}

#[derive(Debug, PartialEq, Eq, Hash)]
enum DedupKey {
    Link(String),
    NoLink {
        title: String,
        price: Option<i64>,
        year: Option<i32>,
        mileage: Option<i64>,
    },
}

fn dedup_key(listing: &Listing) -> DedupKey {
    match &listing.link {
        Some(link) => DedupKey::Link(link.trim().trim_end_matches('/').to_lowercase()),
        None => DedupKey::NoLink {
            title: listing
                .title
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_lowercase(),
            price: listing.price.map(|p| p.trunc() as i64),
            year: listing.year,
            mileage: listing.mileage.map(|m| m.trunc() as i64),
        },
    }
}

/// Keeps the first occurrence of each listing, identified by its link or, when
/// there is none, by title, price, year and mileage.
pub fn dedup_listings(candidates: Vec<&Listing>) -> Vec<&Listing> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|listing| seen.insert(dedup_key(listing)))
        .collect()
}

pub fn rank<'a>(
    candidates: Vec<&'a Listing>,
    criteria: &FilterCriteria,
    mode: RankingMode,
) -> Vec<&'a Listing> {
    match mode {
        RankingMode::Source => candidates,
        RankingMode::Weighted => {
            let mut scored: Vec<(f64, &Listing)> = candidates
                .into_iter()
                .map(|listing| (score_listing(listing, criteria), listing))
                .collect();
            // Stable, so full ties keep source order.
            scored.sort_by(|a, b| compare_scored(*a, *b));
            scored.into_iter().map(|(_, listing)| listing).collect()
        }
    }
}
