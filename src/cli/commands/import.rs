use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ImportLogic;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { src, file, yes } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match ImportLogic::import(&mut pool, cfg, src.as_deref(), file.as_deref(), *yes)? {
            Some(state) => {
                let selected = state.selected()?;
                success(format!(
                    "Imported {} profiles, selected '{}'",
                    state.profiles.len(),
                    selected.name
                ));
            }
            None => info("Import cancelled."),
        }
    }
    Ok(())
}
