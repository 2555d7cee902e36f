use crate::core::projection;
use crate::utils::id::generate_id;
use serde::{Deserialize, Serialize};

/// A known inventory level at a known instant.
///
/// Both fields are always replaced together, never one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_at_update: Option<f64>, // ⇔ rows.inventory_at_update (REAL NULL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at_ms: Option<i64>, // ⇔ rows.updated_at_ms (INTEGER NULL, epoch ms)
}

impl Snapshot {
    pub fn new(inventory: f64, at_ms: i64) -> Self {
        Self {
            inventory_at_update: Some(inventory),
            updated_at_ms: Some(at_ms),
        }
    }
}

/// One consumable line item of a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumption_per_hour: Option<f64>,
    #[serde(flatten)]
    pub snapshot: Snapshot,
}

impl Row {
    /// Create a row whose snapshot starts at `now_ms` with the initial stock.
    pub fn new(name: &str, consumption_per_hour: f64, inventory: f64, now_ms: i64) -> Self {
        Self {
            id: generate_id("row"),
            name: name.to_string(),
            consumption_per_hour: Some(consumption_per_hour),
            snapshot: Snapshot::new(inventory, now_ms),
        }
    }

    /// A missing or NaN rate counts as no consumption.
    pub fn rate(&self) -> f64 {
        self.consumption_per_hour.filter(|r| !r.is_nan()).unwrap_or(0.0)
    }

    /// Manual count: the new value is ground truth, projected decay is discarded.
    pub fn correct_inventory(&mut self, value: f64, now_ms: i64) {
        self.snapshot = Snapshot::new(value, now_ms);
    }

    /// Reconcile under the old rate first, then switch to the new one.
    pub fn change_rate(&mut self, consumption_per_hour: f64, now_ms: i64) {
        projection::reset_snapshot(self, now_ms);
        self.consumption_per_hour = Some(consumption_per_hour);
    }
}
