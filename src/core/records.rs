//! Creation of companies, projects, equipment, assets, certificates and
//! tickets, each followed by an audit log line.

use crate::db::log::cmlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::certificate::Certificate;
use crate::models::company::Project;
use crate::models::equipment::Equipment;
use crate::models::ticket::Ticket;
use crate::ui::messages::success;

pub struct RecordLogic;

impl RecordLogic {
    pub fn add_company(pool: &mut DbPool, name: &str) -> AppResult<i64> {
        let id = queries::insert_company(&pool.conn, name)?;
        cmlog_quiet(&pool.conn, "add", "company", &format!("Company #{} '{}'", id, name));
        success(format!("Company #{} '{}' created.", id, name));
        Ok(id)
    }

    pub fn add_project(pool: &mut DbPool, project: &Project) -> AppResult<i64> {
        let id = queries::insert_project(&pool.conn, project)?;
        cmlog_quiet(
            &pool.conn,
            "add",
            "project",
            &format!("Project #{} '{}' for company #{}", id, project.name, project.company_id),
        );
        success(format!("Project #{} '{}' created.", id, project.name));
        Ok(id)
    }

    pub fn add_equipment(pool: &mut DbPool, equipment: &Equipment) -> AppResult<i64> {
        let id = queries::insert_equipment(&pool.conn, equipment)?;
        cmlog_quiet(
            &pool.conn,
            "add",
            "equipment",
            &format!(
                "Equipment #{} '{}' ({}) for company #{}",
                id,
                equipment.name,
                equipment.kind.code(),
                equipment.company_id
            ),
        );
        success(format!(
            "Equipment #{} '{}' ({}) created.",
            id,
            equipment.name,
            equipment.kind.code()
        ));
        Ok(id)
    }

    pub fn add_asset(pool: &mut DbPool, company_id: i64, name: &str) -> AppResult<i64> {
        let id = queries::insert_asset(&pool.conn, company_id, name)?;
        cmlog_quiet(
            &pool.conn,
            "add",
            "asset",
            &format!("Asset #{} '{}' for company #{}", id, name, company_id),
        );
        success(format!("Asset #{} '{}' created.", id, name));
        Ok(id)
    }

    pub fn add_certificate(pool: &mut DbPool, certificate: &Certificate) -> AppResult<i64> {
        let id = queries::insert_certificate(&pool.conn, certificate)?;
        cmlog_quiet(
            &pool.conn,
            "add",
            "certificate",
            &format!(
                "Certificate #{} '{}' for asset #{}",
                id, certificate.name, certificate.asset_id
            ),
        );
        success(format!("Certificate #{} '{}' created.", id, certificate.name));
        Ok(id)
    }

    pub fn add_ticket(pool: &mut DbPool, ticket: &Ticket) -> AppResult<i64> {
        let id = queries::insert_ticket(&pool.conn, ticket)?;
        cmlog_quiet(
            &pool.conn,
            "add",
            "ticket",
            &format!(
                "Ticket #{} '{}' for employee #{}",
                id, ticket.title, ticket.employee_id
            ),
        );
        success(format!("Ticket #{} '{}' created.", id, ticket.title));
        Ok(id)
    }
}
