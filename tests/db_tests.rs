mod common;
use checkmate::core::import::{ImportDocument, ImportLogic};
use checkmate::core::logic::Core;
use checkmate::db::initialize::init_db;
use checkmate::db::migrate::applied_versions;
use checkmate::db::queries;
use checkmate::errors::AppError;
use checkmate::models::certificate::Certificate;
use checkmate::models::equipment::{Equipment, EquipmentType};
use checkmate::models::role::Role;
use checkmate::models::scope::{Scope, Viewer};
use checkmate::models::ticket::Ticket;
use common::{fixed_now, in_days};
use rusqlite::Connection;

fn memory_db() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    init_db(&conn).expect("init schema");
    conn
}

#[test]
fn test_migrations_are_idempotent() {
    let conn = memory_db();
    init_db(&conn).expect("second run");

    let versions = applied_versions(&conn).expect("versions");
    assert_eq!(
        versions,
        vec![
            "20250310_0001_base_schema".to_string(),
            "20250402_0002_lookup_indexes".to_string()
        ]
    );
}

#[test]
fn test_unknown_owner_is_not_found() {
    let conn = memory_db();

    let err = queries::insert_asset(&conn, 99, "Ghost").unwrap_err();
    assert!(matches!(err, AppError::NotFound { entity: "company", id: 99 }));

    let cert = Certificate {
        id: 0,
        asset_id: 7,
        name: "LOLER".into(),
        expiry_date: None,
        has_7_day_reminder: true,
        has_30_day_reminder: false,
    };
    let err = queries::insert_certificate(&conn, &cert).unwrap_err();
    assert!(matches!(err, AppError::NotFound { entity: "asset", id: 7 }));

    let err = queries::load_company(&conn, 3).unwrap_err();
    assert!(matches!(err, AppError::NotFound { entity: "company", id: 3 }));
}

#[test]
fn test_stored_records_feed_the_engine() {
    let conn = memory_db();
    let now = fixed_now();

    let company_id = queries::insert_company(&conn, "Acme").unwrap();

    let mut excavator = Equipment::new(company_id, "Excavator", EquipmentType::Plant);
    excavator.serial_number = Some("EX-001".into());
    excavator.thorough_examination_date = Some(in_days(now, -4));
    excavator.has_30_day_reminder = true;
    queries::insert_equipment(&conn, &excavator).unwrap();

    let mut generator = Equipment::new(company_id, "Genny", EquipmentType::CatGenny);
    generator.thorough_examination_date = Some(in_days(now, 1));
    generator.has_7_day_reminder = true;
    queries::insert_equipment(&conn, &generator).unwrap();

    let asset_id = queries::insert_asset(&conn, company_id, "Hoist").unwrap();
    queries::insert_certificate(
        &conn,
        &Certificate {
            id: 0,
            asset_id,
            name: "LOLER".into(),
            expiry_date: Some(in_days(now, 6)),
            has_7_day_reminder: true,
            has_30_day_reminder: false,
        },
    )
    .unwrap();

    queries::insert_ticket(&conn, &Ticket::new(42, "cscs", "CSCS card", Some(in_days(now, 2)))).unwrap();
    queries::insert_ticket(&conn, &Ticket::new(43, "cpcs", "CPCS", Some(in_days(now, 2)))).unwrap();

    let viewer = Viewer {
        role: Role::Mechanic,
        company_id: Some(company_id),
        employee_id: Some(42),
    };
    let inputs = queries::load_reminder_inputs(&conn, &viewer).unwrap();

    assert_eq!(inputs.companies.len(), 1);
    assert_eq!(inputs.companies[0].equipment.len(), 2);
    assert_eq!(inputs.companies[0].equipment[0].serial_number.as_deref(), Some("EX-001"));
    assert_eq!(inputs.assets.len(), 1);
    assert_eq!(inputs.assets[0].certificates.len(), 1);
    assert_eq!(inputs.tickets.len(), 1);
    assert!(inputs.tickets[0].has_7_day_reminder && inputs.tickets[0].has_30_day_reminder);

    let report = Core::build_reminder_report(&inputs, &Scope::new(viewer, now), None);
    let labels: Vec<&str> = report.items.iter().map(|i| i.label.as_str()).collect();

    assert_eq!(
        labels,
        vec!["Excavator (thorough examination)", "CSCS card (cscs)", "Hoist: LOLER"]
    );
    assert_eq!(report.counts.expired, 1);
    assert_eq!(report.counts.expiring_soon, 2);
}

#[test]
fn test_import_document_resolves_company_index() {
    let mut conn = memory_db();
    let raw = r#"{
        "companies": [
            {
                "name": "North Yard",
                "projects": [{ "name": "Depot", "location": "Leeds" }],
                "equipment": [
                    { "name": "Dumper", "type": "plant", "thoroughExaminationDate": "2025-06-05", "has7DayReminder": true },
                    { "name": "Pickup", "type": "vehicles", "motDate": "2025-05-01", "hasMot30DayReminder": true }
                ]
            },
            { "name": "South Yard" }
        ],
        "assets": [
            {
                "companyIndex": 1,
                "name": "Compressor",
                "certificates": [{ "name": "PSSR", "expiryDate": "2025-06-20", "has30DayReminder": true }]
            }
        ],
        "tickets": [
            { "employeeId": 5, "type": "first-aid", "title": "First Aid", "expiryDate": "2025-06-10" }
        ]
    }"#;
    let doc: ImportDocument = serde_json::from_str(raw).unwrap();

    let tx = conn.transaction().unwrap();
    let summary = ImportLogic::import_document(&tx, &doc).unwrap();
    tx.commit().unwrap();

    assert_eq!(summary.companies, 2);
    assert_eq!(summary.projects, 1);
    assert_eq!(summary.equipment, 2);
    assert_eq!(summary.assets, 1);
    assert_eq!(summary.certificates, 1);
    assert_eq!(summary.tickets, 1);

    assert!(queries::list_assets(&conn, 1).unwrap().is_empty());
    let south = queries::list_assets(&conn, 2).unwrap();
    assert_eq!(south[0].name, "Compressor");

    let tickets = queries::list_tickets(&conn, 5).unwrap();
    assert!(tickets[0].has_7_day_reminder);
    assert!(tickets[0].has_30_day_reminder);

    let projects = queries::list_projects(&conn, 1).unwrap();
    assert_eq!(projects[0].location.as_deref(), Some("Leeds"));
}

#[test]
fn test_import_rejects_bad_company_index() {
    let mut conn = memory_db();
    let raw = r#"{
        "companies": [{ "name": "Only One" }],
        "assets": [{ "companyIndex": 3, "name": "Stray" }]
    }"#;
    let doc: ImportDocument = serde_json::from_str(raw).unwrap();

    let tx = conn.transaction().unwrap();
    let err = ImportLogic::import_document(&tx, &doc).unwrap_err();
    drop(tx);

    assert!(matches!(err, AppError::Other(_)));
    assert!(queries::list_companies(&conn).unwrap().is_empty());
}
