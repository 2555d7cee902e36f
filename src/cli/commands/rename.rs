use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::rows::RowLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rename { row, name } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let updated = RowLogic::rename(&mut pool, cfg, row, name)?;
        success(format!("Row renamed to '{}'", updated.name));
    }

    Ok(())
}
