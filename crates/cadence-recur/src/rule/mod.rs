//! Recurrence rule value type.

mod edit;

use serde::{Deserialize, Serialize};

use cadence_core::constants::{INTERVAL_MAX, INTERVAL_MIN};
use cadence_core::{Date, Frequency, MonthWeek, Weekday};

use crate::error::RuleError;

/// Weekday paired with its ordinal position within a month.
///
/// Used by monthly and yearly rules in "Nth weekday" mode. Keeping the pair
/// in one type makes "ordinal and weekday are both present or both absent"
/// unrepresentable to violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdinalWeekday {
    /// Which match within the month (first through fourth, or last).
    #[serde(rename = "monthWeek")]
    pub week: MonthWeek,
    /// The day of the week to match.
    #[serde(rename = "monthWeekday")]
    pub weekday: Weekday,
}

impl OrdinalWeekday {
    /// Creates an ordinal weekday.
    #[must_use]
    pub const fn new(week: MonthWeek, weekday: Weekday) -> Self {
        Self { week, weekday }
    }
}

/// A recurrence rule.
///
/// Immutable value type: the engine never mutates a caller's rule, and every
/// edit operation in [`edit`](self) returns a new rule. The serde shape uses
/// camelCase field names and the upper-case enum tags of the JSON rules an
/// editing surface produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    /// Repeat cadence.
    pub frequency: Frequency,

    /// Every N units of the frequency (default 1).
    #[serde(default = "default_interval")]
    pub interval: u32,

    /// Selected weekdays, meaningful only for weekly rules. Kept unique and
    /// sorted in canonical Sunday-through-Saturday order. Empty means "same
    /// weekday as the start date".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weekdays: Vec<Weekday>,

    /// "Nth weekday of the month" selector, meaningful only for monthly and
    /// yearly rules.
    #[serde(flatten)]
    pub ordinal: Option<OrdinalWeekday>,

    /// First occurrence. Always included in generated output when it names a
    /// valid calendar day.
    pub start_date: Date,

    /// Inclusive upper bound for generated occurrences.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,

    /// Stored cap on the number of occurrences. Combined with the caller's
    /// requested count by taking the minimum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

const fn default_interval() -> u32 {
    1
}

impl RecurrenceRule {
    /// Creates the default editing rule: weekly, every week, no weekday
    /// selection, unbounded.
    #[must_use]
    pub const fn starting(start_date: Date) -> Self {
        Self::with_frequency_and_start(Frequency::Weekly, start_date)
    }

    /// Creates a daily rule.
    #[must_use]
    pub const fn daily(start_date: Date) -> Self {
        Self::with_frequency_and_start(Frequency::Daily, start_date)
    }

    /// Creates a weekly rule.
    #[must_use]
    pub const fn weekly(start_date: Date) -> Self {
        Self::with_frequency_and_start(Frequency::Weekly, start_date)
    }

    /// Creates a monthly rule.
    #[must_use]
    pub const fn monthly(start_date: Date) -> Self {
        Self::with_frequency_and_start(Frequency::Monthly, start_date)
    }

    /// Creates a yearly rule.
    #[must_use]
    pub const fn yearly(start_date: Date) -> Self {
        Self::with_frequency_and_start(Frequency::Yearly, start_date)
    }

    const fn with_frequency_and_start(frequency: Frequency, start_date: Date) -> Self {
        Self {
            frequency,
            interval: 1,
            weekdays: Vec::new(),
            ordinal: None,
            start_date,
            end_date: None,
            count: None,
        }
    }

    /// Strictly checks the rule's invariants.
    ///
    /// The expansion and preview functions never require this: they degrade
    /// gracefully on malformed rules. This exists for callers that want to
    /// surface problems instead.
    ///
    /// ## Errors
    ///
    /// Returns a [`RuleError::ValidationError`] naming the first violated
    /// invariant.
    pub fn validate(&self) -> Result<(), RuleError> {
        if !self.start_date.is_valid() {
            return Err(RuleError::ValidationError(format!(
                "start date {} is not a valid calendar day",
                self.start_date
            )));
        }
        if !(INTERVAL_MIN..=INTERVAL_MAX).contains(&self.interval) {
            return Err(RuleError::ValidationError(format!(
                "interval {} outside {INTERVAL_MIN}..={INTERVAL_MAX}",
                self.interval
            )));
        }
        if let Some(end) = self.end_date {
            if !end.is_valid() {
                return Err(RuleError::ValidationError(format!(
                    "end date {end} is not a valid calendar day"
                )));
            }
            if end < self.start_date {
                return Err(RuleError::ValidationError(format!(
                    "end date {end} precedes start date {}",
                    self.start_date
                )));
            }
        }
        if !self.weekdays.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(RuleError::ValidationError(
                "weekday set is not unique and in canonical order".to_string(),
            ));
        }
        if self.frequency != Frequency::Weekly && !self.weekdays.is_empty() {
            return Err(RuleError::ValidationError(format!(
                "weekday set is meaningless for {} rules",
                self.frequency
            )));
        }
        if self.ordinal.is_some()
            && !matches!(self.frequency, Frequency::Monthly | Frequency::Yearly)
        {
            return Err(RuleError::ValidationError(format!(
                "ordinal weekday is meaningless for {} rules",
                self.frequency
            )));
        }
        Ok(())
    }
}
