//! Human-readable rule summaries.

use cadence_core::types::month_name;
use cadence_core::Frequency;

use crate::rule::RecurrenceRule;

/// ## Summary
/// Describes a recurrence rule in plain English.
///
/// Total function: every rule produces a string, including malformed ones.
/// The wording intentionally matches the editing surface's fixtures, which
/// means two known asymmetries are preserved: the weekly-with-weekdays and
/// yearly branches do not mention the interval even when it is greater
/// than 1.
#[must_use]
pub fn describe(rule: &RecurrenceRule) -> String {
    let interval = rule.interval;
    match rule.frequency {
        Frequency::Daily => {
            if interval > 1 {
                format!("Every {interval} days")
            } else {
                "Every day".to_string()
            }
        }
        Frequency::Weekly => {
            if rule.weekdays.is_empty() {
                if interval > 1 {
                    format!("Every {interval} weeks")
                } else {
                    "Every week".to_string()
                }
            } else {
                let names: Vec<&str> = rule.weekdays.iter().map(|day| day.name()).collect();
                format!("Every {}", names.join(", "))
            }
        }
        Frequency::Monthly => {
            let cadence = if interval > 1 {
                format!("{interval} months")
            } else {
                "month".to_string()
            };
            match rule.ordinal {
                Some(ordinal) => format!(
                    "The {} {} of every {cadence}",
                    ordinal.week.name().to_lowercase(),
                    ordinal.weekday.name().to_lowercase(),
                ),
                None => format!("Day {} of every {cadence}", rule.start_date.day),
            }
        }
        Frequency::Yearly => match month_name(rule.start_date.month) {
            Some(month) => format!("Every {month} {}", rule.start_date.day),
            // Start month out of range; stay total rather than echoing garbage.
            None => "Every year".to_string(),
        },
    }
}
