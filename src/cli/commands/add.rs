use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::projection::duration_string;
use crate::core::rows::RowLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Add a row to the selected profile.
pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Add {
        name,
        rate,
        inventory,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let row = RowLogic::add(&mut pool, cfg, clock.now_ms(), name, *rate, *inventory)?;

        success(format!(
            "Added '{}' ({}), time left: {}",
            row.name,
            row.id,
            duration_string(row.rate(), *inventory)
        ));
    }

    Ok(())
}
