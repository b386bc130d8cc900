mod common;
use checkmate::core::access::{CERTIFICATE_VIEWERS, can_view};
use checkmate::core::aggregator::{aggregate, collect_sources, count, filter_category};
use checkmate::core::logic::Core;
use checkmate::models::equipment::{Equipment, EquipmentType};
use checkmate::models::reminder::{ReminderCategory, ReminderStatus, SourceKind};
use checkmate::models::role::Role;
use checkmate::models::scope::{ReminderInputs, Scope, Viewer};
use common::{asset, certificate, company, fixed_now, in_days, plant, ticket, vehicle};

fn company_scope(role: Role, company_id: i64) -> Scope {
    Scope::new(Viewer::company(role, company_id), fixed_now())
}

#[test]
fn test_single_vehicle_mot_reminder() {
    let now = fixed_now();
    let inputs = ReminderInputs {
        companies: vec![company(1, vec![vehicle(7, 1, Some(in_days(now, 10)), false, true)])],
        ..Default::default()
    };

    let items = aggregate(&inputs, &company_scope(Role::Employee, 1));

    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item.id, 7);
    assert_eq!(item.kind, SourceKind::VehicleEquipment);
    assert_eq!(item.category, ReminderCategory::PlantAndVehicles);
    assert_eq!(item.status, ReminderStatus::ExpiringSoon);
    assert_eq!(item.days_until_expiry, Some(10));
    assert!(item.has_30_day_reminder);
    assert!(!item.has_7_day_reminder);
    assert!(!item.invalid_date);
    assert_eq!(item.label, "Vehicle 7 (MOT)");
}

#[test]
fn test_fields_without_reminder_flags_are_ignored() {
    let now = fixed_now();
    let inputs = ReminderInputs {
        companies: vec![company(
            1,
            vec![
                plant(1, 1, Some(in_days(now, -100)), false, false),
                vehicle(2, 1, Some(in_days(now, -3)), false, false),
                plant(3, 1, Some("garbage".to_string()), false, false),
            ],
        )],
        assets: vec![asset(1, 1, vec![certificate(1, 1, Some(in_days(now, -1)), false, false)])],
        tickets: {
            let mut muted = ticket(1, 42, Some(in_days(now, -5)));
            muted.has_7_day_reminder = false;
            muted.has_30_day_reminder = false;
            vec![muted]
        },
    };

    let viewer = Viewer {
        role: Role::Mechanic,
        company_id: Some(1),
        employee_id: Some(42),
    };
    let items = aggregate(&inputs, &Scope::new(viewer, now));

    assert!(items.is_empty(), "unexpected reminders: {items:?}");
}

#[test]
fn test_valid_items_are_excluded() {
    let now = fixed_now();
    let inputs = ReminderInputs {
        companies: vec![company(
            1,
            vec![
                plant(1, 1, Some(in_days(now, 31)), true, true),
                plant(2, 1, Some(in_days(now, 400)), true, true),
                plant(3, 1, Some(in_days(now, 30)), true, false),
            ],
        )],
        ..Default::default()
    };

    let items = aggregate(&inputs, &company_scope(Role::Company, 1));

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 3);
    assert_eq!(items[0].days_until_expiry, Some(30));
}

#[test]
fn test_sorted_by_signed_delta() {
    let now = fixed_now();
    let inputs = ReminderInputs {
        companies: vec![company(
            1,
            vec![
                plant(1, 1, Some(in_days(now, 5)), true, true),
                vehicle(2, 1, Some(in_days(now, -10)), true, true),
                plant(3, 1, Some(in_days(now, 0)), true, true),
                vehicle(4, 1, Some(in_days(now, 20)), true, true),
            ],
        )],
        ..Default::default()
    };

    let items = aggregate(&inputs, &company_scope(Role::Employee, 1));
    let deltas: Vec<Option<i64>> = items.iter().map(|i| i.days_until_expiry).collect();

    assert_eq!(deltas, vec![Some(-10), Some(0), Some(5), Some(20)]);
    assert_eq!(items[0].status, ReminderStatus::Expired);
}

#[test]
fn test_invalid_dates_sort_first_and_are_flagged() {
    let now = fixed_now();
    let inputs = ReminderInputs {
        companies: vec![company(
            1,
            vec![
                plant(1, 1, Some(in_days(now, -30)), true, false),
                vehicle(2, 1, Some("31/02/2025".to_string()), false, true),
            ],
        )],
        ..Default::default()
    };

    let items = aggregate(&inputs, &company_scope(Role::Employee, 1));

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, 2);
    assert!(items[0].invalid_date);
    assert_eq!(items[0].status, ReminderStatus::Expired);
    assert_eq!(items[0].days_until_expiry, None);
    assert_eq!(items[0].expiry_date, "31/02/2025");
    assert_eq!(items[1].days_until_expiry, Some(-30));
}

#[test]
fn test_equipment_type_selects_tracked_date() {
    let now = fixed_now();
    let due = Some(in_days(now, 3));

    // Plant with an MOT date and a vehicle with an exam date: neither counts.
    let mut plant_with_mot = plant(1, 1, None, false, false);
    plant_with_mot.mot_date = due.clone();
    plant_with_mot.has_mot_7_day_reminder = true;

    let mut vehicle_with_exam = vehicle(2, 1, None, false, false);
    vehicle_with_exam.thorough_examination_date = due.clone();
    vehicle_with_exam.has_7_day_reminder = true;

    let mut lifting = Equipment::new(1, "Chain block", EquipmentType::Lifting);
    lifting.id = 3;
    lifting.thorough_examination_date = due.clone();
    lifting.has_7_day_reminder = true;

    let inputs = ReminderInputs {
        companies: vec![company(1, vec![plant_with_mot, vehicle_with_exam, lifting])],
        ..Default::default()
    };

    assert!(aggregate(&inputs, &company_scope(Role::Company, 1)).is_empty());
}

#[test]
fn test_missing_dates_are_skipped() {
    let inputs = ReminderInputs {
        companies: vec![company(
            1,
            vec![
                plant(1, 1, None, true, true),
                vehicle(2, 1, Some("   ".to_string()), true, true),
            ],
        )],
        ..Default::default()
    };

    assert!(aggregate(&inputs, &company_scope(Role::Company, 1)).is_empty());
}

#[test]
fn test_certificate_reminders_are_role_gated() {
    let now = fixed_now();
    let inputs = ReminderInputs {
        companies: vec![company(1, vec![])],
        assets: vec![asset(
            5,
            1,
            vec![
                certificate(1, 5, Some(in_days(now, 2)), true, false),
                certificate(2, 5, Some(in_days(now, -4)), false, true),
                certificate(3, 5, Some(in_days(now, 60)), true, true),
            ],
        )],
        ..Default::default()
    };

    let employee = Core::build_reminder_report(
        &inputs,
        &company_scope(Role::Employee, 1),
        Some(ReminderCategory::EquipmentCertificates),
    );
    assert!(employee.items.is_empty());

    let mechanic = Core::build_reminder_report(
        &inputs,
        &company_scope(Role::Mechanic, 1),
        Some(ReminderCategory::EquipmentCertificates),
    );
    let ids: Vec<i64> = mechanic.items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(mechanic.items[0].owner_id, 5);
    assert_eq!(mechanic.items[0].label, "Asset 5: Cert 2");
}

#[test]
fn test_certificate_viewer_allow_list() {
    for role in CERTIFICATE_VIEWERS {
        assert!(can_view(role, ReminderCategory::EquipmentCertificates));
    }
    assert!(!can_view(Role::Employee, ReminderCategory::EquipmentCertificates));
    assert!(!can_view(Role::Supervisor, ReminderCategory::EquipmentCertificates));
    assert!(can_view(Role::Employee, ReminderCategory::PlantAndVehicles));
    assert!(can_view(Role::Employee, ReminderCategory::Tickets));
}

#[test]
fn test_other_companies_are_out_of_scope() {
    let now = fixed_now();
    let inputs = ReminderInputs {
        companies: vec![
            company(1, vec![plant(1, 1, Some(in_days(now, 1)), true, true)]),
            company(2, vec![plant(2, 2, Some(in_days(now, 1)), true, true)]),
        ],
        assets: vec![asset(9, 2, vec![certificate(1, 9, Some(in_days(now, 1)), true, true)])],
        ..Default::default()
    };

    let items = aggregate(&inputs, &company_scope(Role::Administrator, 1));

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, 1);
    assert_eq!(items[0].owner_id, 1);
}

#[test]
fn test_tickets_belong_to_the_viewer() {
    let now = fixed_now();
    let inputs = ReminderInputs {
        tickets: vec![
            ticket(1, 42, Some(in_days(now, 14))),
            ticket(2, 43, Some(in_days(now, -1))),
            ticket(3, 42, None),
            ticket(4, 42, Some(in_days(now, -2))),
        ],
        ..Default::default()
    };

    let items = aggregate(&inputs, &Scope::new(Viewer::employee(42), now));
    let ids: Vec<i64> = items.iter().map(|i| i.id).collect();

    assert_eq!(ids, vec![4, 1]);
    assert!(items.iter().all(|i| i.category == ReminderCategory::Tickets));
    assert_eq!(items[1].label, "Ticket 1 (cscs)");
}

#[test]
fn test_category_partition_keeps_order() {
    let now = fixed_now();
    let inputs = ReminderInputs {
        companies: vec![company(
            1,
            vec![
                vehicle(1, 1, Some(in_days(now, 8)), true, false),
                plant(2, 1, Some(in_days(now, -2)), true, false),
            ],
        )],
        assets: vec![asset(3, 1, vec![certificate(4, 3, Some(in_days(now, 1)), true, false)])],
        tickets: vec![],
    };

    let all = aggregate(&inputs, &company_scope(Role::Management, 1));
    assert_eq!(all.len(), 3);

    let plant_tab = filter_category(&all, ReminderCategory::PlantAndVehicles);
    let cert_tab = filter_category(&all, ReminderCategory::EquipmentCertificates);

    assert_eq!(plant_tab.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2, 1]);
    assert_eq!(cert_tab.iter().map(|i| i.id).collect::<Vec<_>>(), vec![4]);
    assert_eq!(plant_tab.len() + cert_tab.len(), all.len());

    let counts = count(&all);
    assert_eq!(counts.expired, 1);
    assert_eq!(counts.expiring_soon, 2);
    assert_eq!(counts.total(), 3);
    assert_eq!(counts.invalid_date, 0);
}

#[test]
fn test_aggregation_is_idempotent() {
    let now = fixed_now();
    let inputs = ReminderInputs {
        companies: vec![company(
            1,
            vec![
                plant(1, 1, Some(in_days(now, 3)), true, true),
                vehicle(2, 1, Some(in_days(now, -3)), false, true),
                plant(3, 1, Some("bad".to_string()), true, false),
            ],
        )],
        assets: vec![asset(1, 1, vec![certificate(1, 1, Some(in_days(now, 3)), true, true)])],
        tickets: vec![ticket(1, 9, Some(in_days(now, 3)))],
    };
    let viewer = Viewer {
        role: Role::Company,
        company_id: Some(1),
        employee_id: Some(9),
    };
    let scope = Scope::new(viewer, now);

    let first = aggregate(&inputs, &scope);
    let second = aggregate(&inputs, &scope);

    assert_eq!(first.len(), 5);
    assert_eq!(first, second);
}

#[test]
fn test_collect_sources_dispatches_by_kind() {
    let now = fixed_now();
    let inputs = ReminderInputs {
        companies: vec![company(
            1,
            vec![
                plant(1, 1, Some(in_days(now, 1)), true, true),
                vehicle(2, 1, Some(in_days(now, 1)), true, true),
                Equipment::new(1, "Genny", EquipmentType::CatGenny),
            ],
        )],
        ..Default::default()
    };

    let sources = collect_sources(&inputs, &Viewer::company(Role::Employee, 1));
    let kinds: Vec<SourceKind> = sources.iter().map(|s| s.kind()).collect();

    assert_eq!(kinds, vec![SourceKind::PlantEquipment, SourceKind::VehicleEquipment]);
}
