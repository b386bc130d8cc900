use crate::errors::{AppError, AppResult};
use crate::models::certificate::{Certificate, EquipmentItem};
use crate::models::company::{Company, Project};
use crate::models::equipment::{Equipment, EquipmentType};
use crate::models::scope::{ReminderInputs, Viewer};
use crate::models::ticket::Ticket;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn created_at() -> String {
    Local::now().to_rfc3339()
}

fn flag(row: &Row, column: &str) -> Result<bool> {
    Ok(row.get::<_, i32>(column)? != 0)
}

/// Fail with `NotFound` unless `table` has a row with `id`.
fn ensure_exists(conn: &Connection, table: &str, entity: &'static str, id: i64) -> AppResult<()> {
    let sql = format!("SELECT 1 FROM {} WHERE id = ?1", table);
    let found = conn
        .query_row(&sql, [id], |_| Ok(()))
        .optional()?
        .is_some();

    if found {
        Ok(())
    } else {
        Err(AppError::NotFound { entity, id })
    }
}

// ---------------------------
// Companies & projects
// ---------------------------

pub fn insert_company(conn: &Connection, name: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO companies (name, created_at) VALUES (?1, ?2)",
        params![name, created_at()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_companies(conn: &Connection) -> AppResult<Vec<Company>> {
    let mut stmt = conn.prepare("SELECT id, name FROM companies ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(Company::new(row.get("id")?, &row.get::<_, String>("name")?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Load a company with its equipment and projects.
pub fn load_company(conn: &Connection, company_id: i64) -> AppResult<Company> {
    let name: Option<String> = conn
        .query_row(
            "SELECT name FROM companies WHERE id = ?1",
            [company_id],
            |row| row.get(0),
        )
        .optional()?;

    let name = name.ok_or(AppError::NotFound {
        entity: "company",
        id: company_id,
    })?;

    Ok(Company {
        id: company_id,
        name,
        equipment: list_equipment(conn, company_id)?,
        projects: list_projects(conn, company_id)?,
    })
}

pub fn insert_project(conn: &Connection, project: &Project) -> AppResult<i64> {
    ensure_exists(conn, "companies", "company", project.company_id)?;
    conn.execute(
        "INSERT INTO projects (company_id, name, location, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![
            project.company_id,
            project.name,
            project.location,
            created_at()
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_projects(conn: &Connection, company_id: i64) -> AppResult<Vec<Project>> {
    let mut stmt = conn.prepare(
        "SELECT id, company_id, name, location FROM projects WHERE company_id = ?1 ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([company_id], |row| {
        Ok(Project {
            id: row.get("id")?,
            company_id: row.get("company_id")?,
            name: row.get("name")?,
            location: row.get("location")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Equipment
// ---------------------------

pub fn insert_equipment(conn: &Connection, eq: &Equipment) -> AppResult<i64> {
    ensure_exists(conn, "companies", "company", eq.company_id)?;
    conn.execute(
        "INSERT INTO equipment (company_id, name, kind, serial_number,
                                thorough_examination_date, has_7_day_reminder, has_30_day_reminder,
                                mot_date, has_mot_7_day_reminder, has_mot_30_day_reminder, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            eq.company_id,
            eq.name,
            eq.kind.to_db_str(),
            eq.serial_number,
            eq.thorough_examination_date,
            eq.has_7_day_reminder as i32,
            eq.has_30_day_reminder as i32,
            eq.mot_date,
            eq.has_mot_7_day_reminder as i32,
            eq.has_mot_30_day_reminder as i32,
            created_at(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn map_equipment(row: &Row) -> Result<Equipment> {
    let kind_str: String = row.get("kind")?;
    let kind = EquipmentType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEquipmentType(kind_str.clone())),
        )
    })?;

    Ok(Equipment {
        id: row.get("id")?,
        company_id: row.get("company_id")?,
        name: row.get("name")?,
        kind,
        serial_number: row.get("serial_number")?,
        thorough_examination_date: row.get("thorough_examination_date")?,
        has_7_day_reminder: flag(row, "has_7_day_reminder")?,
        has_30_day_reminder: flag(row, "has_30_day_reminder")?,
        mot_date: row.get("mot_date")?,
        has_mot_7_day_reminder: flag(row, "has_mot_7_day_reminder")?,
        has_mot_30_day_reminder: flag(row, "has_mot_30_day_reminder")?,
    })
}

pub fn list_equipment(conn: &Connection, company_id: i64) -> AppResult<Vec<Equipment>> {
    let mut stmt =
        conn.prepare("SELECT * FROM equipment WHERE company_id = ?1 ORDER BY id ASC")?;
    let rows = stmt.query_map([company_id], map_equipment)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Asset registry & certificates
// ---------------------------

pub fn insert_asset(conn: &Connection, company_id: i64, name: &str) -> AppResult<i64> {
    ensure_exists(conn, "companies", "company", company_id)?;
    conn.execute(
        "INSERT INTO assets (company_id, name, created_at) VALUES (?1, ?2, ?3)",
        params![company_id, name, created_at()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_certificate(conn: &Connection, cert: &Certificate) -> AppResult<i64> {
    ensure_exists(conn, "assets", "asset", cert.asset_id)?;
    conn.execute(
        "INSERT INTO certificates (asset_id, name, expiry_date, has_7_day_reminder, has_30_day_reminder, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            cert.asset_id,
            cert.name,
            cert.expiry_date,
            cert.has_7_day_reminder as i32,
            cert.has_30_day_reminder as i32,
            created_at(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn list_certificates(conn: &Connection, asset_id: i64) -> AppResult<Vec<Certificate>> {
    let mut stmt = conn.prepare(
        "SELECT id, asset_id, name, expiry_date, has_7_day_reminder, has_30_day_reminder
         FROM certificates WHERE asset_id = ?1 ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([asset_id], |row| {
        Ok(Certificate {
            id: row.get("id")?,
            asset_id: row.get("asset_id")?,
            name: row.get("name")?,
            expiry_date: row.get("expiry_date")?,
            has_7_day_reminder: flag(row, "has_7_day_reminder")?,
            has_30_day_reminder: flag(row, "has_30_day_reminder")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Assets of a company, each with its certificates.
pub fn list_assets(conn: &Connection, company_id: i64) -> AppResult<Vec<EquipmentItem>> {
    let assets: Vec<(i64, String)> = {
        let mut stmt =
            conn.prepare("SELECT id, name FROM assets WHERE company_id = ?1 ORDER BY id ASC")?;
        let rows = stmt.query_map([company_id], |row| Ok((row.get(0)?, row.get(1)?)))?;
        let collected: Result<Vec<(i64, String)>> = rows.collect();
        collected?
    };

    let mut out = Vec::with_capacity(assets.len());
    for (id, name) in assets {
        out.push(EquipmentItem {
            id,
            company_id,
            name,
            certificates: list_certificates(conn, id)?,
        });
    }
    Ok(out)
}

// ---------------------------
// Tickets
// ---------------------------

pub fn insert_ticket(conn: &Connection, ticket: &Ticket) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO tickets (employee_id, ticket_type, title, expiry_date, has_7_day_reminder, has_30_day_reminder, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            ticket.employee_id,
            ticket.ticket_type,
            ticket.title,
            ticket.expiry_date,
            ticket.has_7_day_reminder as i32,
            ticket.has_30_day_reminder as i32,
            created_at(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_tickets(conn: &Connection, employee_id: i64) -> AppResult<Vec<Ticket>> {
    let mut stmt = conn.prepare(
        "SELECT id, employee_id, ticket_type, title, expiry_date, has_7_day_reminder, has_30_day_reminder
         FROM tickets WHERE employee_id = ?1 ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([employee_id], |row| {
        Ok(Ticket {
            id: row.get("id")?,
            employee_id: row.get("employee_id")?,
            ticket_type: row.get("ticket_type")?,
            title: row.get("title")?,
            expiry_date: row.get("expiry_date")?,
            has_7_day_reminder: flag(row, "has_7_day_reminder")?,
            has_30_day_reminder: flag(row, "has_30_day_reminder")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------
// Engine input
// ---------------------------

/// Materialise the records the viewer's scope touches.
pub fn load_reminder_inputs(conn: &Connection, viewer: &Viewer) -> AppResult<ReminderInputs> {
    let mut inputs = ReminderInputs::default();

    if let Some(company_id) = viewer.company_id {
        inputs.companies.push(load_company(conn, company_id)?);
        inputs.assets = list_assets(conn, company_id)?;
    }

    if let Some(employee_id) = viewer.employee_id {
        inputs.tickets = list_tickets(conn, employee_id)?;
    }

    Ok(inputs)
}
