use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::shortfall::ShortfallLogic;
use crate::core::store;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::trim_number;
use crate::utils::table::{Column, Table};

/// Shortfall report for the selected profile.
pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Calc { hours } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let state = store::load(&pool, cfg)?;
        let profile = state.selected()?;

        if profile.rows.is_empty() {
            info(format!("Profile '{}' has no rows: nothing to compute.", profile.name));
            return Ok(());
        }

        let hours = ShortfallLogic::resolve_hours(*hours, profile)?;
        let lines = ShortfallLogic::report(profile, hours, clock.now_ms());

        header(format!("{} ({} h)", profile.name, trim_number(hours, 2)));

        let mut table = Table::new(vec![
            Column::left("Name"),
            Column::right("Inventory"),
            Column::right("Missing"),
        ]);
        for line in lines {
            table.add_row(vec![
                line.name,
                format!("{}", line.current.floor()),
                format!("{:.2}", line.missing),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
