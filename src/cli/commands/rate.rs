use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::rows::RowLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::trim_number;
use crate::utils::time::parse_quantity;

/// Change a consumption rate. The snapshot is reconciled under the old rate first.
pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Rate { row, value } = cmd {
        let rate = parse_quantity(value)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let updated = RowLogic::set_rate(&mut pool, cfg, clock.now_ms(), row, rate)?;

        success(format!(
            "'{}' now consumes {}/h (inventory reconciled to {})",
            updated.name,
            trim_number(rate, 4),
            trim_number(updated.snapshot.inventory_at_update.unwrap_or(0.0), 2)
        ));
    }

    Ok(())
}
