//! End-to-end expansion scenarios on real calendar data.

use cadence_core::{Date, MonthWeek, Weekday};
use cadence_recur::{describe, generate, month_grid, RecurrenceRule};

fn ymd(year: u16, month: u8, day: u8) -> Date {
    Date::new(year, month, day)
}

#[test]
fn alternating_weekdays_with_biweekly_skip() {
    // "Every Monday & Thursday, every 2 weeks", starting on a Monday:
    // both days of the active week, then a full skipped week.
    let rule = RecurrenceRule::weekly(ymd(2026, 1, 5))
        .toggled_weekday(Weekday::Monday)
        .toggled_weekday(Weekday::Thursday)
        .with_interval(2);

    let got = generate(&rule, 8);
    let want = [
        ymd(2026, 1, 5),
        ymd(2026, 1, 8),
        ymd(2026, 1, 19),
        ymd(2026, 1, 22),
        ymd(2026, 2, 2),
        ymd(2026, 2, 5),
        ymd(2026, 2, 16),
        ymd(2026, 2, 19),
    ];
    assert_eq!(got, want);

    for pair in got.windows(2) {
        assert!(pair[0] < pair[1], "occurrences must strictly increase");
    }
}

#[test]
fn quarterly_second_tuesday_spans_year_boundary() {
    let rule = RecurrenceRule::monthly(ymd(2026, 1, 13))
        .with_ordinal(MonthWeek::Second, Weekday::Tuesday)
        .with_interval(3);

    assert_eq!(
        generate(&rule, 5),
        [
            ymd(2026, 1, 13),
            ymd(2026, 4, 14),
            ymd(2026, 7, 14),
            ymd(2026, 10, 13),
            ymd(2027, 1, 12),
        ]
    );
}

#[test]
fn missing_fifth_occurrence_falls_back_to_last_match() {
    // February 2026 has four Fridays; "last Friday" lands on the 27th rather
    // than rolling into March.
    let rule = RecurrenceRule::monthly(ymd(2026, 1, 30))
        .with_ordinal(MonthWeek::Last, Weekday::Friday);

    let got = generate(&rule, 2);
    assert_eq!(got, [ymd(2026, 1, 30), ymd(2026, 2, 27)]);
}

#[test]
fn end_date_is_inclusive() {
    let rule = RecurrenceRule::weekly(ymd(2026, 1, 5))
        .with_end_date(Some(ymd(2026, 1, 19)));

    assert_eq!(
        generate(&rule, 30),
        [ymd(2026, 1, 5), ymd(2026, 1, 12), ymd(2026, 1, 19)]
    );
}

#[test]
fn generated_dates_light_up_the_month_grid() {
    let rule = RecurrenceRule::weekly(ymd(2026, 1, 5))
        .toggled_weekday(Weekday::Monday)
        .toggled_weekday(Weekday::Wednesday);
    let occurrences = generate(&rule, 10);

    let grid = month_grid(ymd(2026, 1, 1), &occurrences, ymd(2026, 1, 5));
    let selected: Vec<Date> = grid
        .iter()
        .filter(|cell| cell.is_selected)
        .map(|cell| cell.date)
        .collect();

    // Every selected grid cell is a generated occurrence, in order.
    assert!(!selected.is_empty());
    assert!(selected.iter().all(|d| occurrences.contains(d)));
    assert_eq!(describe(&rule), "Every Monday, Wednesday");
}

#[test]
fn edits_rederive_rather_than_accumulate() {
    // Frequency round-trip drops weekly state; the regenerated preview and
    // occurrence list match a rule built fresh.
    let edited = RecurrenceRule::weekly(ymd(2026, 1, 5))
        .toggled_weekday(Weekday::Monday)
        .with_frequency(cadence_core::Frequency::Monthly)
        .with_frequency(cadence_core::Frequency::Weekly);
    let fresh = RecurrenceRule::weekly(ymd(2026, 1, 5));

    assert_eq!(edited, fresh);
    assert_eq!(generate(&edited, 5), generate(&fresh, 5));
}
