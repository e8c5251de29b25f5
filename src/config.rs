use crate::search::types::{RankingMode, SearchSettings};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Car Chooser: browse auction listings and get a TOP5 shortlist.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Config {
    /// Address the HTTP server binds to.
    #[arg(long, env = "CAR_CHOOSER_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Path to the listings CSV.
    #[arg(long, env = "CAR_CHOOSER_DATA", default_value = "data/cleaned_aukcje.csv")]
    pub data: PathBuf,

    /// Import only the first N rows of the CSV (0 imports everything).
    #[arg(long, env = "CAR_CHOOSER_ROW_LIMIT")]
    pub row_limit: Option<usize>,

    /// Ordering applied before the shortlist is cut.
    #[arg(long, env = "CAR_CHOOSER_RANKING", value_enum, default_value_t = RankingMode::Source)]
    pub ranking: RankingMode,

    /// Drop repeated auctions (same link) from results.
    #[arg(long, env = "CAR_CHOOSER_DEDUP")]
    pub dedup: bool,

    /// Maximum log level (error, warn, info, debug, trace).
    #[arg(long, env = "CAR_CHOOSER_LOG", default_value = "info")]
    pub log_level: tracing::Level,
}

impl Config {
    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            ranking: self.ranking,
            dedup: self.dedup,
        }
    }
}
