use crate::cli::parser::{Commands, TicketAction};
use crate::config::Config;
use crate::core::records::RecordLogic;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::ticket::Ticket;
use crate::ui::messages::info;
use crate::utils::date::normalize_optional;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ticket { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            TicketAction::Add {
                employee,
                ticket_type,
                title,
                expiry,
                no_reminder,
            } => {
                let mut ticket =
                    Ticket::new(*employee, ticket_type, title, normalize_optional(expiry.as_ref()));
                if *no_reminder {
                    ticket.has_7_day_reminder = false;
                    ticket.has_30_day_reminder = false;
                }
                RecordLogic::add_ticket(&mut pool, &ticket)?;
            }
            TicketAction::List { employee } => {
                let tickets = queries::list_tickets(&pool.conn, *employee)?;
                if tickets.is_empty() {
                    info(format!("No tickets for employee #{}.", employee));
                    return Ok(());
                }

                let mut table = Table::new(&["ID", "TYPE", "TITLE", "EXPIRY", "REMIND"]);
                for t in tickets {
                    let remind = t.thresholds().label();
                    table.add_row(vec![
                        t.id.to_string(),
                        t.ticket_type,
                        t.title,
                        t.expiry_date.unwrap_or_else(|| "--".into()),
                        remind,
                    ]);
                }
                print!("{}", table.render(&cfg.separator_char));
            }
        }
    }
    Ok(())
}
