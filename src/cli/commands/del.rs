use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::rows::RowLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { row, yes } = cmd {
        let prompt = format!("Remove row '{}'? This action is irreversible.", row);
        if !confirm(&prompt, *yes) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let removed = RowLogic::remove(&mut pool, cfg, row)?;
        success(format!("Row '{}' has been removed.", removed.name));
    }

    Ok(())
}
