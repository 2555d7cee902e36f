//! rSupply library root.
//! Exposes the CLI parser, the high-level run() function, the projection
//! engine and the storage modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use crate::cli::commands;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::clock::{Clock, FixedClock, SystemClock};
use crate::errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Profile { .. } => commands::profile::handle(&cli.command, cfg),
        Commands::Add { .. } => commands::add::handle(&cli.command, cfg, clock),
        Commands::List { .. } => commands::list::handle(&cli.command, cfg, clock),
        Commands::Rate { .. } => commands::rate::handle(&cli.command, cfg, clock),
        Commands::Stock { .. } => commands::stock::handle(&cli.command, cfg, clock),
        Commands::Rename { .. } => commands::rename::handle(&cli.command, cfg),
        Commands::Del { .. } => commands::del::handle(&cli.command, cfg),
        Commands::Calc { .. } => commands::calc::handle(&cli.command, cfg, clock),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
        Commands::Import { .. } => commands::import::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once, then --db overrides the database path
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(custom_db)
            .to_string_lossy()
            .to_string();
    }

    match cli.now_ms {
        Some(ms) => dispatch(&cli, &cfg, &FixedClock(ms)),
        None => dispatch(&cli, &cfg, &SystemClock),
    }
}
