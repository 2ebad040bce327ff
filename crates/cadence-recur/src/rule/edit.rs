//! Rule edit transforms.
//!
//! Each user edit is expressed as a pure transform from an old rule to a new
//! one. Normalization happens here, at the mutation boundary: switching
//! frequency drops the fields the new frequency cannot use, intervals are
//! clamped, and the weekday set stays unique and canonically ordered. The
//! expansion and preview functions can therefore assume a mostly-consistent
//! rule while still tolerating a hand-built inconsistent one.

use cadence_core::constants::{INTERVAL_MAX, INTERVAL_MIN};
use cadence_core::{Date, Frequency, MonthWeek, Weekday};

use super::{OrdinalWeekday, RecurrenceRule};

impl RecurrenceRule {
    /// Returns the rule with a new frequency.
    ///
    /// Weekday selection is cleared unless the new frequency is weekly, and
    /// the ordinal selector is cleared unless it is monthly or yearly.
    #[must_use]
    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        if frequency != Frequency::Weekly {
            self.weekdays.clear();
        }
        if !matches!(frequency, Frequency::Monthly | Frequency::Yearly) {
            self.ordinal = None;
        }
        self
    }

    /// Returns the rule with the interval clamped to the supported range.
    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval.clamp(INTERVAL_MIN, INTERVAL_MAX);
        self
    }

    /// Returns the rule with the given weekday added to the selection if
    /// absent, or removed if present. The set stays unique and sorted in
    /// canonical Sunday-through-Saturday order.
    #[must_use]
    pub fn toggled_weekday(mut self, weekday: Weekday) -> Self {
        match self.weekdays.binary_search(&weekday) {
            Ok(i) => {
                self.weekdays.remove(i);
            }
            Err(i) => {
                self.weekdays.insert(i, weekday);
            }
        }
        self
    }

    /// Returns the rule with an "Nth weekday of the month" selector.
    #[must_use]
    pub fn with_ordinal(mut self, week: MonthWeek, weekday: Weekday) -> Self {
        self.ordinal = Some(OrdinalWeekday::new(week, weekday));
        self
    }

    /// Returns the rule without an ordinal selector.
    #[must_use]
    pub fn without_ordinal(mut self) -> Self {
        self.ordinal = None;
        self
    }

    /// Returns the rule with a new start date.
    #[must_use]
    pub fn with_start_date(mut self, start_date: Date) -> Self {
        self.start_date = start_date;
        self
    }

    /// Returns the rule with a new end bound, or none.
    #[must_use]
    pub fn with_end_date(mut self, end_date: Option<Date>) -> Self {
        self.end_date = end_date;
        self
    }

    /// Returns the rule with a stored occurrence cap.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> Date {
        Date::new(2026, 1, 5)
    }

    #[test]
    fn frequency_change_clears_weekdays() {
        let rule = RecurrenceRule::weekly(monday())
            .toggled_weekday(Weekday::Monday)
            .toggled_weekday(Weekday::Thursday)
            .with_frequency(Frequency::Daily);
        assert!(rule.weekdays.is_empty());
    }

    #[test]
    fn frequency_change_clears_ordinal() {
        let rule = RecurrenceRule::monthly(monday())
            .with_ordinal(MonthWeek::Second, Weekday::Tuesday)
            .with_frequency(Frequency::Weekly);
        assert!(rule.ordinal.is_none());
    }

    #[test]
    fn monthly_to_yearly_keeps_ordinal() {
        let rule = RecurrenceRule::monthly(monday())
            .with_ordinal(MonthWeek::Last, Weekday::Friday)
            .with_frequency(Frequency::Yearly);
        assert_eq!(
            rule.ordinal,
            Some(OrdinalWeekday::new(MonthWeek::Last, Weekday::Friday))
        );
    }

    #[test]
    fn interval_is_clamped() {
        assert_eq!(RecurrenceRule::daily(monday()).with_interval(0).interval, 1);
        assert_eq!(
            RecurrenceRule::daily(monday()).with_interval(9999).interval,
            365
        );
        assert_eq!(
            RecurrenceRule::daily(monday()).with_interval(14).interval,
            14
        );
    }

    #[test]
    fn weekday_toggle_keeps_canonical_order() {
        let rule = RecurrenceRule::weekly(monday())
            .toggled_weekday(Weekday::Thursday)
            .toggled_weekday(Weekday::Sunday)
            .toggled_weekday(Weekday::Monday);
        assert_eq!(
            rule.weekdays,
            vec![Weekday::Sunday, Weekday::Monday, Weekday::Thursday]
        );
    }

    #[test]
    fn weekday_toggle_removes_existing() {
        let rule = RecurrenceRule::weekly(monday())
            .toggled_weekday(Weekday::Monday)
            .toggled_weekday(Weekday::Thursday)
            .toggled_weekday(Weekday::Monday);
        assert_eq!(rule.weekdays, vec![Weekday::Thursday]);
    }

    #[test]
    fn transforms_do_not_alias_shared_state() {
        let base = RecurrenceRule::weekly(monday()).toggled_weekday(Weekday::Monday);
        let edited = base.clone().toggled_weekday(Weekday::Friday);
        assert_eq!(base.weekdays, vec![Weekday::Monday]);
        assert_eq!(edited.weekdays, vec![Weekday::Monday, Weekday::Friday]);
    }
}
