use crate::cli::commands::reminders::build_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::cmlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use chrono::{DateTime, Utc};

pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        scope,
        force,
    } = cmd
    {
        let report = build_report(scope, cfg, now)?;
        let written = ExportLogic::export(&report.items, *format, file, *force)?;

        if written > 0 {
            let pool = DbPool::new(&cfg.database)?;
            cmlog_quiet(
                &pool.conn,
                "export",
                format.as_str(),
                &format!("{} reminders exported to {}", written, file),
            );
        }
    }
    Ok(())
}
