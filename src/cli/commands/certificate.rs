use crate::cli::parser::{CertificateAction, Commands};
use crate::config::Config;
use crate::core::records::RecordLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::certificate::Certificate;
use crate::utils::date::normalize_optional;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Certificate { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            CertificateAction::Add {
                asset,
                name,
                expiry,
                r7,
                r30,
            } => {
                let certificate = Certificate {
                    id: 0,
                    asset_id: *asset,
                    name: name.clone(),
                    expiry_date: normalize_optional(expiry.as_ref()),
                    has_7_day_reminder: *r7,
                    has_30_day_reminder: *r30,
                };
                RecordLogic::add_certificate(&mut pool, &certificate)?;
            }
        }
    }
    Ok(())
}
