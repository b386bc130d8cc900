use crate::cli::parser::{Commands, EquipmentAction};
use crate::config::Config;
use crate::core::records::RecordLogic;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::equipment::{Equipment, EquipmentType};
use crate::models::reminder::ReminderThresholds;
use crate::ui::messages::{info, warning};
use crate::utils::date::normalize_optional;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Equipment { action } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        match action {
            EquipmentAction::Add {
                company,
                name,
                kind,
                serial,
                exam_date,
                exam_7,
                exam_30,
                mot_date,
                mot_7,
                mot_30,
            } => {
                let kind = EquipmentType::from_code(kind)
                    .ok_or_else(|| AppError::InvalidEquipmentType(kind.to_string()))?;

                let mut equipment = Equipment::new(*company, name, kind);
                equipment.serial_number = serial.clone();
                equipment.thorough_examination_date = normalize_optional(exam_date.as_ref());
                equipment.has_7_day_reminder = *exam_7;
                equipment.has_30_day_reminder = *exam_30;
                equipment.mot_date = normalize_optional(mot_date.as_ref());
                equipment.has_mot_7_day_reminder = *mot_7;
                equipment.has_mot_30_day_reminder = *mot_30;

                // Dates on other types are stored but never produce reminders.
                if kind != EquipmentType::Plant && equipment.thorough_examination_date.is_some() {
                    warning("Thorough examination reminders only apply to plant equipment.");
                }
                if kind != EquipmentType::Vehicles && equipment.mot_date.is_some() {
                    warning("MOT reminders only apply to vehicles.");
                }

                RecordLogic::add_equipment(&mut pool, &equipment)?;
            }
            EquipmentAction::List { company } => {
                let equipment = queries::list_equipment(&pool.conn, *company)?;
                if equipment.is_empty() {
                    info(format!("No equipment for company #{}.", company));
                    return Ok(());
                }

                let mut table = Table::new(&["ID", "NAME", "TYPE", "EXAM", "MOT"]);
                for e in equipment {
                    let exam = dated(&e.thorough_examination_date, e.examination_thresholds());
                    let mot = dated(&e.mot_date, e.mot_thresholds());
                    table.add_row(vec![
                        e.id.to_string(),
                        e.name,
                        e.kind.code().to_string(),
                        exam,
                        mot,
                    ]);
                }
                print!("{}", table.render(&cfg.separator_char));
            }
        }
    }
    Ok(())
}

/// "2025-06-01 [7d/30d]" or "--"
fn dated(date: &Option<String>, thresholds: ReminderThresholds) -> String {
    match date {
        Some(d) => format!("{} [{}]", d, thresholds.label()),
        None => "--".to_string(),
    }
}
