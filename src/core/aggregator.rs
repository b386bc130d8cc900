//! Reminder aggregation across company equipment, the asset registry and
//! employee tickets.

use crate::core::access::can_view;
use crate::core::classifier::classify;
use crate::models::certificate::{Certificate, EquipmentItem};
use crate::models::company::Company;
use crate::models::equipment::{Equipment, EquipmentType};
use crate::models::reminder::{
    ReminderCategory, ReminderCounts, ReminderItem, ReminderStatus, ReminderThresholds, SourceKind,
};
use crate::models::scope::{ReminderInputs, Scope, Viewer};
use crate::models::ticket::Ticket;
use chrono::{DateTime, Utc};

/// A record that may yield one reminder.
#[derive(Debug, Clone, Copy)]
pub enum ReminderSource<'a> {
    PlantEquipment(&'a Equipment),
    VehicleEquipment(&'a Equipment),
    CertificateRecord {
        asset: &'a EquipmentItem,
        certificate: &'a Certificate,
    },
    TicketRecord(&'a Ticket),
}

/// The date a source is tracked on, with its opt-in flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatedField<'a> {
    pub date: &'a str,
    pub thresholds: ReminderThresholds,
}

impl<'a> ReminderSource<'a> {
    /// Wrap a company equipment record; types without a tracked date give `None`.
    pub fn from_equipment(equipment: &'a Equipment) -> Option<Self> {
        match equipment.kind {
            EquipmentType::Plant => Some(ReminderSource::PlantEquipment(equipment)),
            EquipmentType::Vehicles => Some(ReminderSource::VehicleEquipment(equipment)),
            EquipmentType::Lifting
            | EquipmentType::Electrical
            | EquipmentType::CatGenny
            | EquipmentType::Other => None,
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            ReminderSource::PlantEquipment(_) => SourceKind::PlantEquipment,
            ReminderSource::VehicleEquipment(_) => SourceKind::VehicleEquipment,
            ReminderSource::CertificateRecord { .. } => SourceKind::Certificate,
            ReminderSource::TicketRecord(_) => SourceKind::Ticket,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            ReminderSource::PlantEquipment(e) | ReminderSource::VehicleEquipment(e) => e.id,
            ReminderSource::CertificateRecord { certificate, .. } => certificate.id,
            ReminderSource::TicketRecord(t) => t.id,
        }
    }

    /// Company for equipment, asset for certificates, employee for tickets.
    pub fn owner_id(&self) -> i64 {
        match self {
            ReminderSource::PlantEquipment(e) | ReminderSource::VehicleEquipment(e) => e.company_id,
            ReminderSource::CertificateRecord { asset, .. } => asset.id,
            ReminderSource::TicketRecord(t) => t.employee_id,
        }
    }

    pub fn label(&self) -> String {
        match self {
            ReminderSource::PlantEquipment(e) => format!("{} (thorough examination)", e.name),
            ReminderSource::VehicleEquipment(e) => format!("{} (MOT)", e.name),
            ReminderSource::CertificateRecord { asset, certificate } => {
                format!("{}: {}", asset.name, certificate.name)
            }
            ReminderSource::TicketRecord(t) => format!("{} ({})", t.title, t.ticket_type),
        }
    }

    pub fn dated_field(&self) -> Option<DatedField<'a>> {
        let (date, thresholds) = match *self {
            ReminderSource::PlantEquipment(e) => (
                e.thorough_examination_date.as_deref(),
                e.examination_thresholds(),
            ),
            ReminderSource::VehicleEquipment(e) => (e.mot_date.as_deref(), e.mot_thresholds()),
            ReminderSource::CertificateRecord { certificate, .. } => {
                (certificate.expiry_date.as_deref(), certificate.thresholds())
            }
            ReminderSource::TicketRecord(t) => (t.expiry_date.as_deref(), t.thresholds()),
        };

        date.filter(|d| !d.trim().is_empty())
            .map(|date| DatedField { date, thresholds })
    }
}

/// Collect every source the viewer is entitled to, in input order.
pub fn collect_sources<'a>(inputs: &'a ReminderInputs, viewer: &Viewer) -> Vec<ReminderSource<'a>> {
    let mut out = Vec::new();

    if let Some(company_id) = viewer.company_id {
        let companies = inputs.companies.iter().filter(|c| c.id == company_id);
        out.extend(companies.flat_map(company_sources));

        if can_view(viewer.role, ReminderCategory::EquipmentCertificates) {
            for asset in inputs.assets.iter().filter(|a| a.company_id == company_id) {
                out.extend(
                    asset
                        .certificates
                        .iter()
                        .map(|certificate| ReminderSource::CertificateRecord { asset, certificate }),
                );
            }
        }
    }

    if let Some(employee_id) = viewer.employee_id {
        out.extend(
            inputs
                .tickets
                .iter()
                .filter(|t| t.employee_id == employee_id)
                .map(ReminderSource::TicketRecord),
        );
    }

    out
}

fn company_sources(company: &Company) -> impl Iterator<Item = ReminderSource<'_>> {
    company
        .equipment
        .iter()
        .filter_map(ReminderSource::from_equipment)
}

/// Build the reminder for one source, or `None` when it is not actionable:
/// no date, no opt-in flag, or still valid.
pub fn reminder_for(source: &ReminderSource<'_>, now: DateTime<Utc>) -> Option<ReminderItem> {
    let field = source.dated_field()?;
    if !field.thresholds.any() {
        return None;
    }

    let classification = classify(field.date, now);
    if !classification.status.is_actionable() {
        return None;
    }

    let kind = source.kind();
    Some(ReminderItem {
        id: source.id(),
        owner_id: source.owner_id(),
        label: source.label(),
        category: kind.category(),
        kind,
        expiry_date: field.date.trim().to_string(),
        days_until_expiry: classification.days_until_expiry,
        status: classification.status,
        has_7_day_reminder: field.thresholds.seven_day,
        has_30_day_reminder: field.thresholds.thirty_day,
        invalid_date: classification.is_invalid_date(),
    })
}

/// Aggregate every actionable reminder in scope, most urgent first.
pub fn aggregate(inputs: &ReminderInputs, scope: &Scope) -> Vec<ReminderItem> {
    let mut items: Vec<ReminderItem> = collect_sources(inputs, &scope.viewer)
        .iter()
        .filter_map(|source| reminder_for(source, scope.now))
        .collect();

    sort_by_urgency(&mut items);
    items
}

/// Ascending day delta; unparsable dates first. Stable for equal deltas.
pub fn sort_by_urgency(items: &mut [ReminderItem]) {
    items.sort_by_key(|item| match item.days_until_expiry {
        None => (0, 0),
        Some(days) => (1, days),
    });
}

/// Items of one category, keeping the sorted order.
pub fn filter_category(items: &[ReminderItem], category: ReminderCategory) -> Vec<ReminderItem> {
    items
        .iter()
        .filter(|item| item.category == category)
        .cloned()
        .collect()
}

pub fn count(items: &[ReminderItem]) -> ReminderCounts {
    items
        .iter()
        .fold(ReminderCounts::default(), |mut counts, item| {
            match item.status {
                ReminderStatus::Expired => counts.expired += 1,
                ReminderStatus::ExpiringSoon => counts.expiring_soon += 1,
                ReminderStatus::Valid => {}
            }
            if item.invalid_date {
                counts.invalid_date += 1;
            }
            counts
        })
}
