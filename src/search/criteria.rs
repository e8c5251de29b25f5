use super::types::{FilterCriteria, FilterParams};
use crate::error::SearchError;

impl FilterParams {
    /// Validates raw input into criteria.
    ///
    /// Blank values are treated as absent. Numbers may use a decimal comma and
    /// spaces as thousand separators.
    pub fn into_criteria(self) -> Result<FilterCriteria, SearchError> {
        let criteria = FilterCriteria {
            fuel_type: parse_category(self.fuel_type),
            gearbox: parse_category(self.gearbox),
            voivodeship: parse_category(self.voivodeship),
            price_min: parse_non_negative("price_min", self.price_min)?,
            price_max: parse_non_negative("price_max", self.price_max)?,
            year_min: parse_year("year_min", self.year_min)?,
            year_max: parse_year("year_max", self.year_max)?,
            mileage_max: parse_non_negative("mileage_max", self.mileage_max)?,
            power_min: parse_non_negative("power_min", self.power_min)?,
        };

        if let (Some(min), Some(max)) = (criteria.price_min, criteria.price_max) {
            if min > max {
                return Err(SearchError::InvalidRange { field: "price" });
            }
        }
        if let (Some(min), Some(max)) = (criteria.year_min, criteria.year_max) {
            if min > max {
                return Err(SearchError::InvalidRange { field: "year" });
            }
        }

        Ok(criteria)
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_category(raw: Option<String>) -> Option<String> {
    non_blank(raw)
}

fn parse_number(field: &'static str, raw: Option<String>) -> Result<Option<f64>, SearchError> {
    let Some(value) = non_blank(raw) else {
        return Ok(None);
    };

    let normalized: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    match normalized.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(Some(number)),
        Ok(_) => Err(SearchError::InvalidFilter {
            field,
            value,
            reason: "must be a finite number",
        }),
        Err(_) => Err(SearchError::InvalidFilter {
            field,
            value,
            reason: "not a number",
        }),
    }
}

fn parse_non_negative(
    field: &'static str,
    raw: Option<String>,
) -> Result<Option<f64>, SearchError> {
    let original = raw.clone();
    match parse_number(field, raw)? {
        Some(number) if number < 0.0 => Err(SearchError::InvalidFilter {
            field,
            value: original.unwrap_or_default().trim().to_string(),
            reason: "must not be negative",
        }),
        other => Ok(other),
    }
}

fn parse_year(field: &'static str, raw: Option<String>) -> Result<Option<i32>, SearchError> {
    let original = raw.clone();
    let Some(number) = parse_number(field, raw)? else {
        return Ok(None);
    };

    let invalid = |reason| SearchError::InvalidFilter {
        field,
        value: original.clone().unwrap_or_default().trim().to_string(),
        reason,
    };

    if number.fract() != 0.0 {
        return Err(invalid("year must be a whole number"));
    }
    if !(0.0..=9999.0).contains(&number) {
        return Err(invalid("year out of range"));
    }
    Ok(Some(number as i32))
}
