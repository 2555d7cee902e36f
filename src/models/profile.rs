use super::row::Row;
use crate::errors::{AppError, AppResult};
use crate::utils::id::generate_id;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileConfig {
    /// Default horizon (hours) for the shortfall calculation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_hours: Option<f64>,
}

/// A named location holding its own list of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rows: Vec<Row>,
    #[serde(default)]
    pub config: ProfileConfig,
}

impl Profile {
    pub fn new(name: &str) -> Self {
        Self {
            id: generate_id("profile"),
            name: name.to_string(),
            rows: Vec::new(),
            config: ProfileConfig::default(),
        }
    }

    /// Replace the row with the same id, or append it.
    pub fn upsert_row(&mut self, row: Row) {
        match self.rows.iter_mut().find(|r| r.id == row.id) {
            Some(existing) => *existing = row,
            None => self.rows.push(row),
        }
    }

    pub fn remove_row(&mut self, row_id: &str) -> AppResult<Row> {
        let idx = self
            .rows
            .iter()
            .position(|r| r.id == row_id)
            .ok_or_else(|| AppError::RowNotFound(row_id.to_string()))?;
        Ok(self.rows.remove(idx))
    }

    pub fn set_desired_hours(&mut self, hours: f64) {
        self.config.desired_hours = Some(hours);
    }

    fn row_index(&self, key: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|r| r.id == key)
            .or_else(|| self.rows.iter().position(|r| r.name == key))
            .or_else(|| {
                let lower = key.to_lowercase();
                self.rows.iter().position(|r| r.name.to_lowercase() == lower)
            })
    }

    /// Lookup by id, then exact name, then case-insensitive name.
    pub fn find_row(&self, key: &str) -> AppResult<&Row> {
        self.row_index(key)
            .map(|i| &self.rows[i])
            .ok_or_else(|| AppError::RowNotFound(key.to_string()))
    }

    pub fn find_row_mut(&mut self, key: &str) -> AppResult<&mut Row> {
        match self.row_index(key) {
            Some(i) => Ok(&mut self.rows[i]),
            None => Err(AppError::RowNotFound(key.to_string())),
        }
    }
}
