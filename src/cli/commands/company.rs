use crate::cli::parser::{Commands, CompanyAction};
use crate::config::Config;
use crate::core::records::RecordLogic;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Company { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            CompanyAction::Add { name } => {
                RecordLogic::add_company(&mut pool, name)?;
            }
            CompanyAction::List => {
                let companies = queries::list_companies(&pool.conn)?;
                if companies.is_empty() {
                    info("No companies registered.");
                    return Ok(());
                }

                let mut table = Table::new(&["ID", "NAME"]);
                for c in companies {
                    table.add_row(vec![c.id.to_string(), c.name]);
                }
                print!("{}", table.render(&cfg.separator_char));
            }
        }
    }
    Ok(())
}
