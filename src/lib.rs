//! CheckMate library root.
//! Exposes the reminder engine (`core`), the CLI parser, the high-level
//! run() function and the supporting modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use chrono::{DateTime, Utc};
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Company { .. } => cli::commands::company::handle(&cli.command, cfg),
        Commands::Project { .. } => cli::commands::project::handle(&cli.command, cfg),
        Commands::Equipment { .. } => cli::commands::equipment::handle(&cli.command, cfg),
        Commands::Asset { .. } => cli::commands::asset::handle(&cli.command, cfg),
        Commands::Certificate { .. } => cli::commands::certificate::handle(&cli.command, cfg),
        Commands::Ticket { .. } => cli::commands::ticket::handle(&cli.command, cfg),
        Commands::Reminders { .. } => cli::commands::reminders::handle(&cli.command, cfg, now),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, now),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let now = match &cli.now {
        Some(raw) => utils::date::parse_iso_instant(raw)
            .ok_or_else(|| AppError::InvalidDate(raw.clone()))?,
        None => utils::date::now(),
    };

    dispatch(&cli, &cfg, now)
}
