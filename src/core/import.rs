//! Bulk load of companies, assets and tickets from a JSON document shaped
//! like the upstream API payload (camelCase keys).

use crate::db::log::cmlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::certificate::Certificate;
use crate::models::company::Company;
use crate::models::ticket::Ticket;
use crate::ui::messages::success;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDocument {
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub assets: Vec<AssetImport>,
    #[serde(default)]
    pub tickets: Vec<Ticket>,
}

/// Asset entry; `company_index` points into `ImportDocument::companies`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetImport {
    pub company_index: usize,
    pub name: String,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub companies: usize,
    pub projects: usize,
    pub equipment: usize,
    pub assets: usize,
    pub certificates: usize,
    pub tickets: usize,
}

impl ImportSummary {
    pub fn describe(&self) -> String {
        format!(
            "{} companies, {} projects, {} equipment, {} assets, {} certificates, {} tickets",
            self.companies,
            self.projects,
            self.equipment,
            self.assets,
            self.certificates,
            self.tickets
        )
    }
}

pub struct ImportLogic;

impl ImportLogic {
    /// Import `file` in a single transaction; nothing is written on error.
    pub fn import_file(pool: &mut DbPool, file: &str) -> AppResult<ImportSummary> {
        let content = fs::read_to_string(Path::new(file))?;
        let doc: ImportDocument = serde_json::from_str(&content)?;

        let tx = pool.conn.transaction()?;
        let summary = Self::import_document(&tx, &doc)?;
        tx.commit()?;

        cmlog_quiet(&pool.conn, "import", file, &summary.describe());
        success(format!("Imported {}.", summary.describe()));
        Ok(summary)
    }

    pub fn import_document(conn: &Connection, doc: &ImportDocument) -> AppResult<ImportSummary> {
        let mut summary = ImportSummary::default();
        let mut company_ids = Vec::with_capacity(doc.companies.len());

        for company in &doc.companies {
            let company_id = queries::insert_company(conn, &company.name)?;
            company_ids.push(company_id);
            summary.companies += 1;

            for project in &company.projects {
                let mut project = project.clone();
                project.company_id = company_id;
                queries::insert_project(conn, &project)?;
                summary.projects += 1;
            }

            for equipment in &company.equipment {
                let mut equipment = equipment.clone();
                equipment.company_id = company_id;
                queries::insert_equipment(conn, &equipment)?;
                summary.equipment += 1;
            }
        }

        for asset in &doc.assets {
            let company_id = *company_ids.get(asset.company_index).ok_or_else(|| {
                AppError::Other(format!(
                    "asset '{}' refers to company index {} but the document has {} companies",
                    asset.name,
                    asset.company_index,
                    company_ids.len()
                ))
            })?;

            let asset_id = queries::insert_asset(conn, company_id, &asset.name)?;
            summary.assets += 1;

            for certificate in &asset.certificates {
                let mut certificate = certificate.clone();
                certificate.asset_id = asset_id;
                queries::insert_certificate(conn, &certificate)?;
                summary.certificates += 1;
            }
        }

        for ticket in &doc.tickets {
            queries::insert_ticket(conn, ticket)?;
            summary.tickets += 1;
        }

        Ok(summary)
    }
}
