//! Month-grid helpers for rendering an occurrence preview.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use cadence_core::{Date, Weekday};

/// One cell of a rendered month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    /// The calendar date of this cell.
    pub date: Date,
    /// Whether the cell belongs to the anchor month (as opposed to the
    /// leading/trailing days that pad the grid to whole weeks).
    pub is_current_month: bool,
    /// Whether the date is in the selected occurrence list.
    pub is_selected: bool,
    /// Whether the date equals the caller-supplied "today".
    pub is_today: bool,
}

/// ## Summary
/// Builds a Sunday-aligned month grid around the anchor date's month.
///
/// The grid runs from the Sunday on or before the first of the month through
/// the Saturday on or after its last day, so it always contains whole weeks.
/// `selected` marks occurrence cells; `today` is supplied by the caller so
/// the function stays clock-free. An anchor that is not a valid calendar day
/// yields an empty grid.
#[must_use]
pub fn month_grid(anchor: Date, selected: &[Date], today: Date) -> Vec<CalendarDay> {
    let Some(anchor) = anchor.to_naive() else {
        return Vec::new();
    };
    let Some(first) = anchor.with_day(1) else {
        return Vec::new();
    };
    let Some(last) = last_day_of_month(first) else {
        return Vec::new();
    };

    let lead = u64::from(Weekday::from_chrono(first.weekday()).number());
    let trail = u64::from(6 - Weekday::from_chrono(last.weekday()).number());
    let (Some(grid_start), Some(grid_end)) = (
        first.checked_sub_days(Days::new(lead)),
        last.checked_add_days(Days::new(trail)),
    ) else {
        return Vec::new();
    };

    let mut cells = Vec::new();
    let mut current = grid_start;
    while current <= grid_end {
        let Some(date) = Date::from_naive(current) else {
            break;
        };
        cells.push(CalendarDay {
            date,
            is_current_month: current.month() == anchor.month()
                && current.year() == anchor.year(),
            is_selected: selected.contains(&date),
            is_today: date == today,
        });
        let Some(next) = current.succ_opt() else {
            break;
        };
        current = next;
    }
    cells
}

/// Lists every calendar day from `start` through `end`, inclusive.
///
/// Returns an empty list when either bound is invalid or `end` precedes
/// `start`.
#[must_use]
pub fn days_in_range(start: Date, end: Date) -> Vec<Date> {
    let (Some(start), Some(end)) = (start.to_naive(), end.to_naive()) else {
        return Vec::new();
    };

    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        let Some(date) = Date::from_naive(current) else {
            break;
        };
        days.push(date);
        let Some(next) = current.succ_opt() else {
            break;
        };
        current = next;
    }
    days
}

fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    first
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
}
