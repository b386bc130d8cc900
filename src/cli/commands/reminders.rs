use crate::cli::parser::{Commands, ScopeArgs};
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_reminder_inputs;
use crate::errors::{AppError, AppResult};
use crate::models::reminder::{ReminderReport, ReminderStatus};
use crate::models::role::Role;
use crate::models::scope::{Scope, Viewer};
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_days, color_for_status, colorize};
use crate::utils::describe_days;
use crate::utils::formatting::short_date;
use crate::utils::table::Table;
use chrono::{DateTime, Utc};

const STATUS_COL: usize = 0;
const DAYS_COL: usize = 1;

/// Build the viewer scope: CLI flags first, config values as fallback.
pub(crate) fn resolve_scope(args: &ScopeArgs, cfg: &Config, now: DateTime<Utc>) -> AppResult<Scope> {
    let role = match &args.role {
        Some(r) => Role::from_code(r).ok_or_else(|| AppError::InvalidRole(r.clone()))?,
        None => cfg.role()?,
    };

    let viewer = Viewer {
        role,
        company_id: args.company.or(cfg.company_id),
        employee_id: args.employee.or(cfg.employee_id),
    };

    if !viewer.has_target() {
        return Err(AppError::MissingScope);
    }

    Ok(Scope::new(viewer, now))
}

/// Load the scope's records and aggregate them.
pub(crate) fn build_report(args: &ScopeArgs, cfg: &Config, now: DateTime<Utc>) -> AppResult<ReminderReport> {
    let scope = resolve_scope(args, cfg, now)?;
    let pool = DbPool::new(&cfg.database)?;
    let inputs = load_reminder_inputs(&pool.conn, &scope.viewer)?;
    Ok(Core::build_reminder_report(&inputs, &scope, args.category))
}

pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    if let Commands::Reminders { scope, json } = cmd {
        let report = build_report(scope, cfg, now)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        print_report(&report, cfg, now);
    }
    Ok(())
}

fn print_report(report: &ReminderReport, cfg: &Config, now: DateTime<Utc>) {
    header(format!("Reminders as of {}", now.format("%Y-%m-%d %H:%M UTC")));

    if report.items.is_empty() {
        info("No expired or expiring items.");
        return;
    }

    let mut table = Table::new(&["STATUS", "DUE", "CATEGORY", "ITEM", "EXPIRY", "REMIND"]);
    for item in &report.items {
        table.add_row(vec![
            item.status.as_str().to_string(),
            describe_days(item.days_until_expiry),
            item.category.as_str().to_string(),
            item.label.clone(),
            short_date(&item.expiry_date),
            item.thresholds().label(),
        ]);
    }

    let items = &report.items;
    let rendered = table.render_with(&cfg.separator_char, |row, col, cell| match col {
        STATUS_COL => colorize(&cell, color_for_status(items[row].status)),
        DAYS_COL => colorize(&cell, color_for_days(items[row].days_until_expiry)),
        _ => cell,
    });
    print!("{}", rendered);

    println!(
        "\n{} reminders: {} {} | {} {}",
        report.counts.total(),
        report.counts.expired,
        ReminderStatus::Expired.as_str(),
        report.counts.expiring_soon,
        ReminderStatus::ExpiringSoon.as_str()
    );

    if report.counts.invalid_date > 0 {
        info(format!(
            "{} item(s) have an unreadable date and are listed as expired.",
            report.counts.invalid_date
        ));
    }
}
