use crate::config::Config;
use crate::core::store;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Row;
use crate::utils::formatting::trim_number;
use crate::utils::time::{check_quantity, clean_name};

/// High-level operations on the rows of the selected profile.
pub struct RowLogic;

impl RowLogic {
    pub fn add(
        pool: &mut DbPool,
        cfg: &Config,
        now_ms: i64,
        name: &str,
        rate: f64,
        inventory: f64,
    ) -> AppResult<Row> {
        let name = clean_name(name, "row")?;
        let rate = check_quantity(rate)?;
        let inventory = check_quantity(inventory)?;

        let mut state = store::load(pool, cfg)?;
        let row = Row::new(&name, rate, inventory, now_ms);
        state.selected_mut()?.upsert_row(row.clone());

        store::commit(
            pool,
            &state,
            "add",
            &row.name,
            &format!(
                "Added row: rate={}/h inventory={}",
                trim_number(rate, 4),
                trim_number(inventory, 4)
            ),
        )?;
        Ok(row)
    }

    /// Change the consumption rate, keeping the depletion incurred so far.
    pub fn set_rate(
        pool: &mut DbPool,
        cfg: &Config,
        now_ms: i64,
        key: &str,
        rate: f64,
    ) -> AppResult<Row> {
        let rate = check_quantity(rate)?;

        let mut state = store::load(pool, cfg)?;
        let row = state.selected_mut()?.find_row_mut(key)?;
        let old_rate = row.rate();
        row.change_rate(rate, now_ms);
        let row = row.clone();

        store::commit(
            pool,
            &state,
            "rate",
            &row.name,
            &format!(
                "Rate {} → {}/h, inventory reconciled to {}",
                trim_number(old_rate, 4),
                trim_number(rate, 4),
                trim_number(row.snapshot.inventory_at_update.unwrap_or(0.0), 4)
            ),
        )?;
        Ok(row)
    }

    /// Manual count: overwrite the snapshot with ground truth.
    pub fn set_inventory(
        pool: &mut DbPool,
        cfg: &Config,
        now_ms: i64,
        key: &str,
        value: f64,
    ) -> AppResult<Row> {
        let value = check_quantity(value)?;

        let mut state = store::load(pool, cfg)?;
        let row = state.selected_mut()?.find_row_mut(key)?;
        row.correct_inventory(value, now_ms);
        let row = row.clone();

        store::commit(
            pool,
            &state,
            "stock",
            &row.name,
            &format!("Inventory set to {}", trim_number(value, 4)),
        )?;
        Ok(row)
    }

    pub fn rename(pool: &mut DbPool, cfg: &Config, key: &str, name: &str) -> AppResult<Row> {
        let name = clean_name(name, "row")?;

        let mut state = store::load(pool, cfg)?;
        let row = state.selected_mut()?.find_row_mut(key)?;
        let old_name = std::mem::replace(&mut row.name, name);
        let row = row.clone();

        store::commit(
            pool,
            &state,
            "edit",
            &row.name,
            &format!("Renamed from '{}'", old_name),
        )?;
        Ok(row)
    }

    pub fn remove(pool: &mut DbPool, cfg: &Config, key: &str) -> AppResult<Row> {
        let mut state = store::load(pool, cfg)?;
        let profile = state.selected_mut()?;
        let id = profile.find_row(key)?.id.clone();
        let removed = profile.remove_row(&id)?;

        store::commit(pool, &state, "del", &removed.name, "Removed row")?;
        Ok(removed)
    }
}
