#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use checkmate::models::certificate::{Certificate, EquipmentItem};
use checkmate::models::company::Company;
use checkmate::models::equipment::{Equipment, EquipmentType};
use checkmate::models::ticket::Ticket;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Reference instant shared by the CLI tests (`--now`).
pub const NOW: &str = "2025-06-01T00:00:00Z";

pub fn cm() -> Command {
    cargo_bin_cmd!("checkmate")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_checkmate.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize an empty DB through the CLI
pub fn init_db(db_path: &str) {
    cm().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Company #1 "Acme Plant Hire" with an excavator, a van and an asset with
/// two certificates. Relative to `NOW`:
/// - excavator thorough examination 10 days overdue (30d reminder)
/// - van MOT in 5 days (7d reminder)
/// - hoist LOLER certificate in 20 days (7d + 30d)
/// - hoist PAT certificate in 90 days (valid)
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    cm().args(["--db", db_path, "company", "add", "--name", "Acme Plant Hire"])
        .assert()
        .success();

    cm().args([
        "--db",
        db_path,
        "equipment",
        "add",
        "--company",
        "1",
        "--name",
        "Excavator 14t",
        "--type",
        "plant",
        "--exam-date",
        "2025-05-22",
        "--exam-30",
    ])
    .assert()
    .success();

    cm().args([
        "--db",
        db_path,
        "equipment",
        "add",
        "--company",
        "1",
        "--name",
        "Transit Van",
        "--type",
        "vehicles",
        "--mot-date",
        "2025-06-06",
        "--mot-7",
    ])
    .assert()
    .success();

    cm().args(["--db", db_path, "asset", "add", "--company", "1", "--name", "Site Hoist"])
        .assert()
        .success();

    cm().args([
        "--db",
        db_path,
        "certificate",
        "add",
        "--asset",
        "1",
        "--name",
        "LOLER",
        "--expiry",
        "2025-06-21",
        "--r7",
        "--r30",
    ])
    .assert()
    .success();

    cm().args([
        "--db",
        db_path,
        "certificate",
        "add",
        "--asset",
        "1",
        "--name",
        "PAT",
        "--expiry",
        "2025-08-30",
        "--r30",
    ])
    .assert()
    .success();
}

// ---------------------------
// Library fixtures
// ---------------------------

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap()
}

/// RFC 3339 string `days` whole days after `now`.
pub fn in_days(now: DateTime<Utc>, days: i64) -> String {
    (now + Duration::days(days)).to_rfc3339()
}

pub fn plant(id: i64, company_id: i64, exam: Option<String>, r7: bool, r30: bool) -> Equipment {
    let mut e = Equipment::new(company_id, &format!("Plant {}", id), EquipmentType::Plant);
    e.id = id;
    e.thorough_examination_date = exam;
    e.has_7_day_reminder = r7;
    e.has_30_day_reminder = r30;
    e
}

pub fn vehicle(id: i64, company_id: i64, mot: Option<String>, r7: bool, r30: bool) -> Equipment {
    let mut e = Equipment::new(company_id, &format!("Vehicle {}", id), EquipmentType::Vehicles);
    e.id = id;
    e.mot_date = mot;
    e.has_mot_7_day_reminder = r7;
    e.has_mot_30_day_reminder = r30;
    e
}

pub fn company(id: i64, equipment: Vec<Equipment>) -> Company {
    let mut c = Company::new(id, &format!("Company {}", id));
    c.equipment = equipment;
    c
}

pub fn certificate(id: i64, asset_id: i64, expiry: Option<String>, r7: bool, r30: bool) -> Certificate {
    Certificate {
        id,
        asset_id,
        name: format!("Cert {}", id),
        expiry_date: expiry,
        has_7_day_reminder: r7,
        has_30_day_reminder: r30,
    }
}

pub fn asset(id: i64, company_id: i64, certificates: Vec<Certificate>) -> EquipmentItem {
    EquipmentItem {
        id,
        company_id,
        name: format!("Asset {}", id),
        certificates,
    }
}

pub fn ticket(id: i64, employee_id: i64, expiry: Option<String>) -> Ticket {
    let mut t = Ticket::new(employee_id, "cscs", &format!("Ticket {}", id), expiry);
    t.id = id;
    t
}
