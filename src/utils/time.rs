//! Time and number utilities: epoch formatting, parsing user quantities.

use crate::errors::{AppError, AppResult};
use chrono::{Local, TimeZone};

pub const DEFAULT_DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Render epoch milliseconds in local time.
pub fn format_epoch_ms(ms: i64, fmt: &str) -> String {
    match Local.timestamp_millis_opt(ms).single() {
        Some(dt) => dt.format(fmt).to_string(),
        None => ms.to_string(),
    }
}

/// Parse a user-entered quantity (rate or inventory): finite and >= 0.
pub fn parse_quantity(input: &str) -> AppResult<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidQuantity(input.to_string()))?;
    check_quantity(value)
}

pub fn check_quantity(value: f64) -> AppResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AppError::InvalidQuantity(value.to_string()))
    }
}

/// Trim and reject empty labels.
pub fn clean_name(input: &str, what: &str) -> AppResult<String> {
    let name = input.trim();
    if name.is_empty() {
        return Err(AppError::InvalidName(format!("{} name cannot be empty", what)));
    }
    Ok(name.to_string())
}
