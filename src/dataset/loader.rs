use super::types::{Dataset, Listing};
use crate::error::DatasetError;
use regex::Regex;
use std::fs::File;
use std::path::Path;
use std::sync::LazyLock;

static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9\-,\.]").expect("static regex"));

/// Listing field a CSV header maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Title,
    Link,
    Price,
    Mileage,
    MileageKm,
    Year,
    PowerHp,
    CapacityCm3,
    FuelType,
    Gearbox,
    City,
    Voivodeship,
    OtherInfo,
}

impl Column {
    /// Maps a header as exported by the scraper (or its snake-case form).
    pub fn from_header(header: &str) -> Option<Self> {
        let column = match header.trim() {
            "Title" | "title" => Self::Title,
            "Link" | "link" => Self::Link,
            "Price" | "price" => Self::Price,
            "Mileage" | "mileage" => Self::Mileage,
            "Mileage[KM]" | "mileage_km" => Self::MileageKm,
            "Year" | "year" => Self::Year,
            "power[HP]" | "power_hp" => Self::PowerHp,
            "capacity[cm3]" | "capacity_cm3" => Self::CapacityCm3,
            "Fuel Type" | "fuel_type" => Self::FuelType,
            "Gearbox" | "gearbox" => Self::Gearbox,
            "City" | "city" => Self::City,
            "Voivodeship" | "voivodeship" => Self::Voivodeship,
            "other_info" => Self::OtherInfo,
            _ => return None,
        };
        Some(column)
    }

    fn apply(self, listing: &mut Listing, raw: &str) {
        match self {
            Self::Title => listing.title = parse_text(raw),
            Self::Link => listing.link = parse_text(raw),
            Self::Price => listing.price = parse_number(raw),
            Self::Mileage => listing.mileage = parse_number(raw),
            Self::MileageKm => listing.mileage_km = parse_number(raw),
            Self::Year => listing.year = parse_year(raw),
            Self::PowerHp => listing.power_hp = parse_number(raw),
            Self::CapacityCm3 => listing.capacity_cm3 = parse_number(raw),
            Self::FuelType => listing.fuel_type = parse_text(raw),
            Self::Gearbox => listing.gearbox = parse_text(raw),
            Self::City => listing.city = parse_text(raw),
            Self::Voivodeship => listing.voivodeship = parse_text(raw),
            Self::OtherInfo => listing.other_info = parse_text(raw),
        }
    }
}

/// Loads the listings file into memory.
///
/// `row_limit` keeps only the first N data rows; `0` means no limit. A
/// header-only file yields an empty dataset and short rows leave their
/// missing trailing cells empty. A missing file, a row with more fields than
/// the header or a header without a single known column is an error.
pub fn load_dataset(path: &Path, row_limit: Option<usize>) -> Result<Dataset, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::NotFound(path.to_path_buf()));
    }

    tracing::info!("Loading listings from {}", path.display());

    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
    let row_limit = row_limit.filter(|&limit| limit > 0);

    let headers = reader
        .headers()
        .map_err(|source| DatasetError::Csv { row: 0, source })?
        .clone();

    let columns: Vec<Option<Column>> = headers.iter().map(Column::from_header).collect();
    if columns.iter().all(Option::is_none) {
        let found = headers.iter().collect::<Vec<_>>().join(", ");
        return Err(DatasetError::NoKnownColumns(found));
    }
    for (header, column) in headers.iter().zip(&columns) {
        if column.is_none() {
            tracing::debug!("Ignoring unknown column '{}'", header);
        }
    }

    let mut listings = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        if row_limit.is_some_and(|limit| idx >= limit) {
            break;
        }
        // Header is row 1 in the file.
        let record = record.map_err(|source| DatasetError::Csv {
            row: idx + 2,
            source,
        })?;
        if record.len() > headers.len() {
            return Err(DatasetError::TooManyFields {
                row: idx + 2,
                expected: headers.len(),
                found: record.len(),
            });
        }

        let mut listing = Listing {
            id: idx,
            ..Listing::default()
        };
        for (raw, column) in record.iter().zip(&columns) {
            if let Some(column) = column {
                column.apply(&mut listing, raw);
            }
        }
        listings.push(listing);

        if listings.len() % 10_000 == 0 {
            tracing::debug!("Imported {} listings", listings.len());
        }
    }

    tracing::info!("Imported {} listings in total", listings.len());
    Ok(Dataset::from_listings(listings))
}

pub fn parse_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Lenient numeric coercion: drops units and thousand separators, accepts a
/// decimal comma. Anything that still does not parse becomes `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned = NON_NUMERIC.replace_all(raw, "").replace(',', ".");
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn parse_year(raw: &str) -> Option<i32> {
    let value = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    let truncated = value.trunc();
    if truncated < i32::MIN as f64 || truncated > i32::MAX as f64 {
        return None;
    }
    Some(truncated as i32)
}
