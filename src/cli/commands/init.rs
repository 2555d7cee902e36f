use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries::save_state;
use crate::errors::AppResult;
use crate::models::State;
use crate::ui::messages::{success, warning};

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
///  - the default profile, when the database has none
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing rSupply…");
    println!("🗄️  Database   : {}", &cfg.database);

    let mut pool = DbPool::new(&cfg.database)?;

    let profiles: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM profiles", [], |row| row.get(0))?;
    if profiles == 0 {
        let state = State::with_default_profile(&cfg.default_profile_name);
        pool.with_conn(|conn| save_state(conn, &state))?;
        success(format!("Created default profile '{}'", cfg.default_profile_name));
    }

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success("rSupply initialization completed!");
    Ok(())
}
