use crate::cli::parser::{AssetAction, Commands};
use crate::config::Config;
use crate::core::records::RecordLogic;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Asset { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            AssetAction::Add { company, name } => {
                RecordLogic::add_asset(&mut pool, *company, name)?;
            }
            AssetAction::List { company } => {
                let assets = queries::list_assets(&pool.conn, *company)?;
                if assets.is_empty() {
                    info(format!("No assets for company #{}.", company));
                    return Ok(());
                }

                let mut table = Table::new(&["ASSET", "NAME", "CERT", "CERTIFICATE", "EXPIRY", "REMIND"]);
                for a in assets {
                    if a.certificates.is_empty() {
                        table.add_row(vec![
                            a.id.to_string(),
                            a.name.clone(),
                            "--".into(),
                            "--".into(),
                            "--".into(),
                            "--".into(),
                        ]);
                    }
                    for c in &a.certificates {
                        table.add_row(vec![
                            a.id.to_string(),
                            a.name.clone(),
                            c.id.to_string(),
                            c.name.clone(),
                            c.expiry_date.clone().unwrap_or_else(|| "--".into()),
                            c.thresholds().label(),
                        ]);
                    }
                }
                print!("{}", table.render(&cfg.separator_char));
            }
        }
    }
    Ok(())
}
