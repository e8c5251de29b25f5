use crate::dataset::types::Listing;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Number of listings in the shortlist.
pub const TOP_N: usize = 5;
/// Number of listings returned in the preview list below the shortlist.
pub const PREVIEW_LIMIT: usize = 50;

/// Raw filter input as it arrives from the query string or the form.
///
/// Everything is a string so that malformed numbers can be reported back to
/// the user instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterParams {
    pub fuel_type: Option<String>,
    pub gearbox: Option<String>,
    pub voivodeship: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub year_min: Option<String>,
    pub year_max: Option<String>,
    pub mileage_max: Option<String>,
    pub power_min: Option<String>,
}

/// Validated constraints. `None` means "do not filter on this field".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterCriteria {
    pub fuel_type: Option<String>,
    pub gearbox: Option<String>,
    pub voivodeship: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub mileage_max: Option<f64>,
    pub power_min: Option<f64>,
}

impl FilterCriteria {
    /// Active constraints keyed by parameter name, for echoing back.
    pub fn describe(&self) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        let mut put = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                out.insert(key.to_string(), value);
            }
        };
        put("fuel_type", self.fuel_type.clone());
        put("gearbox", self.gearbox.clone());
        put("voivodeship", self.voivodeship.clone());
        put("price_min", self.price_min.map(|v| v.to_string()));
        put("price_max", self.price_max.map(|v| v.to_string()));
        put("year_min", self.year_min.map(|v| v.to_string()));
        put("year_max", self.year_max.map(|v| v.to_string()));
        put("mileage_max", self.mileage_max.map(|v| v.to_string()));
        put("power_min", self.power_min.map(|v| v.to_string()));
        out
    }
}

/// How the filtered subset is ordered before the shortlist is cut.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RankingMode {
    /// Keep dataset order; the shortlist is the first five matches.
    #[default]
    Source,
    /// Sort by the preference score derived from the user's limits.
    Weighted,
}

impl fmt::Display for RankingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Weighted => write!(f, "weighted"),
        }
    }
}

/// Process-wide search behaviour, fixed at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchSettings {
    pub ranking: RankingMode,
    pub dedup: bool,
}

/// Result of running the search pipeline against the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<'a> {
    /// Matches after de-duplication.
    pub total_count: usize,
    /// At most `TOP_N` listings, a prefix of `results`.
    pub top5: Vec<&'a Listing>,
    /// At most `PREVIEW_LIMIT` listings in final order.
    pub results: Vec<&'a Listing>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub filters: BTreeMap<String, String>,
    pub ranking: String,
    pub total_count: usize,
    pub count: usize,
    pub top5: Vec<Listing>,
    pub results: Vec<Listing>,
}
