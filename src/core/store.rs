//! Load / save round trip shared by every mutating operation.

use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_state, save_state};
use crate::errors::AppResult;
use crate::models::State;
use crate::ui::messages::warning;

pub fn load(pool: &DbPool, cfg: &Config) -> AppResult<State> {
    load_state(&pool.conn, &cfg.default_profile_name)
}

/// Persist `state` and record the operation in the internal log.
///
/// A failing log write only produces a warning.
pub fn commit(
    pool: &mut DbPool,
    state: &State,
    operation: &str,
    target: &str,
    message: &str,
) -> AppResult<()> {
    pool.with_conn(|conn| save_state(conn, state))?;

    if let Err(e) = ttlog(&pool.conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
    Ok(())
}
