use crate::cli::parser::{Commands, ProjectAction};
use crate::config::Config;
use crate::core::records::RecordLogic;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::company::Project;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Project { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            ProjectAction::Add {
                company,
                name,
                location,
            } => {
                let project = Project {
                    id: 0,
                    company_id: *company,
                    name: name.clone(),
                    location: location.clone(),
                };
                RecordLogic::add_project(&mut pool, &project)?;
            }
            ProjectAction::List { company } => {
                let projects = queries::load_company(&pool.conn, *company)?.projects;
                if projects.is_empty() {
                    info(format!("No projects for company #{}.", company));
                    return Ok(());
                }

                let mut table = Table::new(&["ID", "NAME", "LOCATION"]);
                for p in projects {
                    table.add_row(vec![
                        p.id.to_string(),
                        p.name,
                        p.location.unwrap_or_else(|| "--".to_string()),
                    ]);
                }
                print!("{}", table.render(&cfg.separator_char));
            }
        }
    }
    Ok(())
}
