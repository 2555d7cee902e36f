use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::rows::RowLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::trim_number;
use crate::utils::time::parse_quantity;

pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Stock { row, value } = cmd {
        let quantity = parse_quantity(value)?;

        let mut pool = DbPool::new(&cfg.database)?;
        let updated = RowLogic::set_inventory(&mut pool, cfg, clock.now_ms(), row, quantity)?;

        success(format!(
            "Inventory of '{}' set to {}",
            updated.name,
            trim_number(quantity, 4)
        ));
    }

    Ok(())
}
