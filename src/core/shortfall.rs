use crate::core::projection::current_inventory;
use crate::errors::{AppError, AppResult};
use crate::models::{Profile, Row};

/// Quantity still missing for `row` to last `hours`, never negative.
pub fn shortfall(row: &Row, hours: f64, now_ms: i64) -> f64 {
    let needed = row.rate() * hours;
    (needed - current_inventory(row, now_ms)).max(0.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShortfallLine {
    pub name: String,
    pub current: f64,
    pub missing: f64,
}

pub struct ShortfallLogic;

impl ShortfallLogic {
    /// Resolve the horizon: explicit value first, then the profile setting.
    pub fn resolve_hours(requested: Option<f64>, profile: &Profile) -> AppResult<f64> {
        let hours = requested
            .or(profile.config.desired_hours)
            .ok_or_else(|| AppError::InvalidHours("no hours given and none stored".into()))?;

        if !hours.is_finite() || hours <= 0.0 {
            return Err(AppError::InvalidHours(hours.to_string()));
        }
        Ok(hours)
    }

    pub fn report(profile: &Profile, hours: f64, now_ms: i64) -> Vec<ShortfallLine> {
        profile
            .rows
            .iter()
            .map(|row| ShortfallLine {
                name: row.name.clone(),
                current: current_inventory(row, now_ms),
                missing: shortfall(row, hours, now_ms),
            })
            .collect()
    }
}
