use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::Clock;
use crate::core::projection::{current_inventory, duration_string};
use crate::core::store;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::Profile;
use crate::ui::messages::{header, info};
use crate::utils::formatting::trim_number;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_epoch_ms;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::List { watch } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        if !*watch {
            return print_selected(&pool, cfg, clock.now_ms());
        }

        let period = Duration::from_secs(cfg.refresh_interval_secs.max(1));
        loop {
            // clear screen, cursor home
            print!("\x1b[2J\x1b[H");
            print_selected(&pool, cfg, clock.now_ms())?;
            io::stdout().flush()?;
            thread::sleep(period);
        }
    }
    Ok(())
}

fn print_selected(pool: &DbPool, cfg: &Config, now_ms: i64) -> AppResult<()> {
    let state = store::load(pool, cfg)?;
    let profile = state.selected()?;

    header(&profile.name);
    if profile.rows.is_empty() {
        info("No rows in this profile. Add one with `rsupply add <NAME> --rate <R> --inventory <I>`.");
        return Ok(());
    }

    print!("{}", render_profile(profile, now_ms, &cfg.datetime_format));
    Ok(())
}

/// Status table: live inventory (floored), last snapshot time, time left.
pub fn render_profile(profile: &Profile, now_ms: i64, datetime_format: &str) -> String {
    let mut table = Table::new(vec![
        Column::left("Name"),
        Column::right("Rate/h"),
        Column::right("Inventory"),
        Column::left("Updated"),
        Column::right("Time left"),
        Column::left("ID"),
    ]);

    for row in &profile.rows {
        let current = current_inventory(row, now_ms);
        let updated = row
            .snapshot
            .updated_at_ms
            .filter(|ms| *ms != 0)
            .unwrap_or(now_ms);

        table.add_row(vec![
            row.name.clone(),
            trim_number(row.rate(), 4),
            format!("{}", current.floor()),
            format_epoch_ms(updated, datetime_format),
            duration_string(row.rate(), current),
            row.id.clone(),
        ]);
    }

    table.render()
}
