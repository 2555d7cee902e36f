//! Depletion projection: live inventory from a snapshot and a clock value.
//!
//! Everything here is pure arithmetic on `f64`. Nothing is validated:
//! callers reject non-finite or negative user input before reaching this
//! module.

use crate::models::row::{Row, Snapshot};

pub const MS_PER_HOUR: f64 = 3_600_000.0;
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Sentinel for a row that never runs out.
pub const INFINITE: &str = "∞";

/// Milliseconds elapsed since the snapshot, never negative.
///
/// A missing (or zero) timestamp means no time has passed.
fn elapsed_ms(snapshot: &Snapshot, now_ms: i64) -> i64 {
    match snapshot.updated_at_ms {
        Some(at) if at != 0 => now_ms.saturating_sub(at).max(0),
        _ => 0,
    }
}

/// Current inventory of `row` at `now_ms`.
///
/// `inventory_at_update - rate * elapsed_hours`, floored at zero. A clock
/// running backwards yields zero elapsed time, so it never adds stock.
pub fn current_inventory(row: &Row, now_ms: i64) -> f64 {
    let hours = elapsed_ms(&row.snapshot, now_ms) as f64 / MS_PER_HOUR;
    let consumed = row.rate() * hours;
    let current = row.snapshot.inventory_at_update.unwrap_or(0.0) - consumed;

    // NaN lands here too
    if current > 0.0 { current } else { 0.0 }
}

/// Time left before `inventory` runs out at `consumption_per_hour`, as `"{d}d{h}h{m}m"`.
///
/// Total minutes are floored once. Days and hours are floored divisions and
/// minutes keep the sign of the total, so a negative stock reads as
/// `"-1d-1h-30m"` rather than wrapping toward zero.
pub fn duration_string(consumption_per_hour: f64, inventory: f64) -> String {
    if consumption_per_hour.is_nan() || consumption_per_hour <= 0.0 {
        return INFINITE.to_string();
    }

    let minutes_left = (inventory / consumption_per_hour * 60.0).floor();
    if !minutes_left.is_finite() {
        return INFINITE.to_string();
    }

    let total_minutes = minutes_left as i64;
    let days = total_minutes.div_euclid(MINUTES_PER_DAY);
    let hours = (total_minutes % MINUTES_PER_DAY).div_euclid(60);
    let minutes = total_minutes % 60;

    format!("{}d{}h{}m", days, hours, minutes)
}

/// Fresh snapshot taken at `now_ms` under the row's current rate.
pub fn reconcile(row: &Row, now_ms: i64) -> Snapshot {
    Snapshot::new(current_inventory(row, now_ms), now_ms)
}

/// Collapse the projection into the stored snapshot.
///
/// Must run before the rate of `row` changes.
pub fn reset_snapshot(row: &mut Row, now_ms: i64) {
    row.snapshot = reconcile(row, now_ms);
}
