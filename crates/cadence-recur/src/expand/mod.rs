//! Occurrence expansion.
//!
//! Turns a recurrence rule into the ordered list of calendar dates it
//! denotes. The algorithm keeps a cursor at the most recent occurrence and
//! computes each successor from it, so every branch only has to answer one
//! question: given this date, what is the next one?

pub mod calendar;

use chrono::{Datelike, Days, Months, NaiveDate};

use cadence_core::constants::MAX_OCCURRENCES;
use cadence_core::{Date, Frequency, Weekday};

use crate::rule::{OrdinalWeekday, RecurrenceRule};

/// ## Summary
/// Expands a recurrence rule into at most `count` occurrence dates.
///
/// The result is strictly increasing, starts with the rule's start date when
/// that names a valid calendar day, and never passes the rule's inclusive
/// end date. Malformed rules degrade instead of erroring: an invalid start
/// date yields an empty list, a non-positive interval is treated as 1, and
/// an invalid end date is ignored. A stored `rule.count` cap and a global
/// safety ceiling both bound the requested `count`.
#[must_use]
pub fn generate(rule: &RecurrenceRule, count: usize) -> Vec<Date> {
    let stored_cap = rule
        .count
        .map_or(usize::MAX, |c| usize::try_from(c).unwrap_or(usize::MAX));
    let limit = count.min(stored_cap).min(MAX_OCCURRENCES);
    if limit == 0 {
        return Vec::new();
    }

    let Some(start) = rule.start_date.to_naive() else {
        tracing::trace!(start = %rule.start_date, "invalid start date, nothing to expand");
        return Vec::new();
    };
    let end = rule.end_date.and_then(Date::to_naive);
    let interval = rule.interval.max(1);

    let mut dates = Vec::with_capacity(limit.min(64));
    let Some(first) = Date::from_naive(start) else {
        return Vec::new();
    };
    dates.push(first);

    let mut cursor = start;
    while dates.len() < limit {
        let Some(next) = next_occurrence(rule, interval, cursor) else {
            break;
        };
        if end.is_some_and(|bound| next > bound) {
            break;
        }
        let Some(date) = Date::from_naive(next) else {
            break;
        };
        dates.push(date);
        cursor = next;
    }

    dates
}

/// Computes the occurrence following `cursor`, or `None` when date
/// arithmetic runs off the calendar.
fn next_occurrence(
    rule: &RecurrenceRule,
    interval: u32,
    cursor: NaiveDate,
) -> Option<NaiveDate> {
    match rule.frequency {
        Frequency::Daily => cursor.checked_add_days(Days::new(u64::from(interval))),
        Frequency::Weekly => {
            if rule.weekdays.is_empty() {
                cursor.checked_add_days(Days::new(7 * u64::from(interval)))
            } else {
                next_selected_weekday(cursor, &rule.weekdays, interval)
            }
        }
        Frequency::Monthly => match rule.ordinal {
            Some(ordinal) => nth_in_month_ahead(cursor, ordinal, interval),
            None => cursor.checked_add_months(Months::new(interval)),
        },
        Frequency::Yearly => match rule.ordinal {
            Some(ordinal) => nth_in_month_ahead(cursor, ordinal, interval.checked_mul(12)?),
            None => cursor.checked_add_months(Months::new(interval.checked_mul(12)?)),
        },
    }
}

/// Advances to the next date whose weekday is in `weekdays`.
///
/// Scans the remainder of the cursor's week first; once the week is
/// exhausted, skips `interval - 1` whole weeks and lands on the earliest
/// selected weekday of the week after that. This gives "every Monday and
/// Thursday, every 2 weeks" its alternate-then-skip shape.
fn next_selected_weekday(
    cursor: NaiveDate,
    weekdays: &[Weekday],
    interval: u32,
) -> Option<NaiveDate> {
    let scan = cursor.checked_add_days(Days::new(1))?;
    let scan_number = Weekday::from_chrono(scan.weekday()).number();

    // The rule keeps the set sorted and unique, but hand-built rules may not.
    let mut numbers: Vec<u8> = weekdays.iter().map(|day| day.number()).collect();
    numbers.sort_unstable();
    numbers.dedup();

    if let Some(&within_week) = numbers.iter().find(|&&n| n >= scan_number) {
        return scan.checked_add_days(Days::new(u64::from(within_week - scan_number)));
    }

    let earliest = u64::from(*numbers.first()?);
    let rest_of_week = u64::from(7 - scan_number);
    let skipped_weeks = 7 * u64::from(interval - 1);
    scan.checked_add_days(Days::new(rest_of_week + skipped_weeks + earliest))
}

/// Selects the ordinal weekday in the month `months_ahead` after the
/// cursor's month.
fn nth_in_month_ahead(
    cursor: NaiveDate,
    ordinal: OrdinalWeekday,
    months_ahead: u32,
) -> Option<NaiveDate> {
    let target = cursor
        .with_day(1)?
        .checked_add_months(Months::new(months_ahead))?;
    nth_weekday_of_month(target.year(), target.month(), ordinal)
}

/// Finds the ordinal occurrence of a weekday within a month.
///
/// `Last` takes the final match. If the month has fewer matches than the
/// requested position (a "fifth Friday" in a four-Friday month), the last
/// match wins rather than rolling into the next month.
fn nth_weekday_of_month(year: i32, month: u32, ordinal: OrdinalWeekday) -> Option<NaiveDate> {
    let wanted = ordinal.week.position();
    let mut day = NaiveDate::from_ymd_opt(year, month, 1)?;
    let mut matched = 0u8;
    let mut last_match = None;

    while day.month() == month {
        if Weekday::from_chrono(day.weekday()) == ordinal.weekday {
            matched += 1;
            last_match = Some(day);
            if wanted == Some(matched) {
                return Some(day);
            }
        }
        day = day.succ_opt()?;
    }

    last_match
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::MonthWeek;

    fn dates(rule: &RecurrenceRule, count: usize) -> Vec<String> {
        generate(rule, count)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test_log::test]
    fn daily_simple() {
        let rule = RecurrenceRule::daily(Date::new(2026, 1, 1));
        assert_eq!(
            dates(&rule, 5),
            ["2026-01-01", "2026-01-02", "2026-01-03", "2026-01-04", "2026-01-05"]
        );
    }

    #[test]
    fn daily_with_interval() {
        let rule = RecurrenceRule::daily(Date::new(2026, 1, 1)).with_interval(3);
        assert_eq!(
            dates(&rule, 4),
            ["2026-01-01", "2026-01-04", "2026-01-07", "2026-01-10"]
        );
    }

    #[test]
    fn weekly_without_weekdays_keeps_start_weekday() {
        // 2026-01-05 is a Monday.
        let rule = RecurrenceRule::weekly(Date::new(2026, 1, 5)).with_interval(2);
        assert_eq!(dates(&rule, 3), ["2026-01-05", "2026-01-19", "2026-02-02"]);
    }

    #[test]
    fn weekly_with_weekdays_visits_set_in_order() {
        let rule = RecurrenceRule::weekly(Date::new(2026, 1, 5))
            .toggled_weekday(Weekday::Monday)
            .toggled_weekday(Weekday::Thursday);
        assert_eq!(
            dates(&rule, 4),
            ["2026-01-05", "2026-01-08", "2026-01-12", "2026-01-15"]
        );
    }

    #[test_log::test]
    fn weekly_with_weekdays_and_interval_skips_weeks() {
        // Active week Mon+Thu, then one skipped week.
        let rule = RecurrenceRule::weekly(Date::new(2026, 1, 5))
            .toggled_weekday(Weekday::Monday)
            .toggled_weekday(Weekday::Thursday)
            .with_interval(2);
        assert_eq!(
            dates(&rule, 6),
            [
                "2026-01-05", "2026-01-08", "2026-01-19", "2026-01-22", "2026-02-02",
                "2026-02-05"
            ]
        );
    }

    #[test]
    fn weekly_start_outside_selection_still_leads() {
        // Start on a Tuesday with only Friday selected: start leads, Fridays follow.
        let rule = RecurrenceRule::weekly(Date::new(2026, 1, 6))
            .toggled_weekday(Weekday::Friday);
        assert_eq!(dates(&rule, 3), ["2026-01-06", "2026-01-09", "2026-01-16"]);
    }

    #[test]
    fn monthly_plain_clamps_short_months() {
        let rule = RecurrenceRule::monthly(Date::new(2026, 1, 31));
        assert_eq!(dates(&rule, 3), ["2026-01-31", "2026-02-28", "2026-03-28"]);
    }

    #[test]
    fn monthly_second_tuesday_every_three_months() {
        let rule = RecurrenceRule::monthly(Date::new(2026, 1, 13))
            .with_ordinal(MonthWeek::Second, Weekday::Tuesday)
            .with_interval(3);
        assert_eq!(dates(&rule, 3), ["2026-01-13", "2026-04-14", "2026-07-14"]);
    }

    #[test]
    fn monthly_last_friday_falls_back_in_four_friday_months() {
        // February 2026 has exactly four Fridays; the last is the 27th.
        let rule = RecurrenceRule::monthly(Date::new(2026, 1, 30))
            .with_ordinal(MonthWeek::Last, Weekday::Friday);
        assert_eq!(dates(&rule, 3), ["2026-01-30", "2026-02-27", "2026-03-27"]);
    }

    #[test]
    fn yearly_plain_clamps_leap_day() {
        let rule = RecurrenceRule::yearly(Date::new(2024, 2, 29));
        assert_eq!(dates(&rule, 3), ["2024-02-29", "2025-02-28", "2026-02-28"]);
    }

    #[test]
    fn yearly_ordinal_honors_interval_in_years() {
        // First Monday of January: 2026-01-05, 2028-01-03.
        let rule = RecurrenceRule::yearly(Date::new(2026, 1, 5))
            .with_ordinal(MonthWeek::First, Weekday::Monday)
            .with_interval(2);
        assert_eq!(dates(&rule, 2), ["2026-01-05", "2028-01-03"]);
    }

    #[test]
    fn end_date_wins_over_count() {
        let rule = RecurrenceRule::daily(Date::new(2026, 1, 1))
            .with_end_date(Some(Date::new(2026, 1, 3)));
        assert_eq!(dates(&rule, 10), ["2026-01-01", "2026-01-02", "2026-01-03"]);
    }

    #[test]
    fn end_before_start_yields_only_start() {
        let rule = RecurrenceRule::daily(Date::new(2026, 1, 5))
            .with_end_date(Some(Date::new(2026, 1, 1)));
        assert_eq!(dates(&rule, 10), ["2026-01-05"]);
    }

    #[test]
    fn invalid_start_yields_empty() {
        let rule = RecurrenceRule::daily(Date::new(2026, 2, 30));
        assert!(generate(&rule, 10).is_empty());
    }

    #[test]
    fn invalid_end_is_ignored() {
        let rule = RecurrenceRule::daily(Date::new(2026, 1, 1))
            .with_end_date(Some(Date::new(2026, 2, 30)));
        assert_eq!(generate(&rule, 4).len(), 4);
    }

    #[test]
    fn zero_count_yields_empty() {
        let rule = RecurrenceRule::daily(Date::new(2026, 1, 1));
        assert!(generate(&rule, 0).is_empty());
    }

    #[test]
    fn stored_count_caps_request() {
        let rule = RecurrenceRule::daily(Date::new(2026, 1, 1)).with_count(3);
        assert_eq!(generate(&rule, 10).len(), 3);
    }

    #[test]
    fn zero_interval_treated_as_one() {
        let mut rule = RecurrenceRule::daily(Date::new(2026, 1, 1));
        rule.interval = 0;
        assert_eq!(dates(&rule, 3), ["2026-01-01", "2026-01-02", "2026-01-03"]);
    }

    #[test]
    fn nth_weekday_positions() {
        let second_tuesday = nth_weekday_of_month(
            2026,
            1,
            OrdinalWeekday::new(MonthWeek::Second, Weekday::Tuesday),
        );
        assert_eq!(second_tuesday, NaiveDate::from_ymd_opt(2026, 1, 13));

        let last_friday = nth_weekday_of_month(
            2026,
            2,
            OrdinalWeekday::new(MonthWeek::Last, Weekday::Friday),
        );
        assert_eq!(last_friday, NaiveDate::from_ymd_opt(2026, 2, 27));
    }
}
