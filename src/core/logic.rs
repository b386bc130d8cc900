use crate::core::aggregator::{aggregate, count, filter_category};
use crate::models::reminder::{ReminderCategory, ReminderReport};
use crate::models::scope::{ReminderInputs, Scope};

pub struct Core;

impl Core {
    /// Aggregate reminders for `scope`, optionally narrowed to one tab.
    pub fn build_reminder_report(
        inputs: &ReminderInputs,
        scope: &Scope,
        category: Option<ReminderCategory>,
    ) -> ReminderReport {
        let all = aggregate(inputs, scope);

        let items = match category {
            Some(c) => filter_category(&all, c),
            None => all,
        };

        ReminderReport {
            counts: count(&items),
            items,
        }
    }
}
