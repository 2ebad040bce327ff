//! Calendar date value type.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;
use crate::types::Weekday;

/// A local calendar date without time component.
///
/// The fields are not validated at construction: a `Date` may hold a
/// combination that no calendar contains (for example February 30). Callers
/// that need a real calendar day go through [`Date::to_naive`], which returns
/// `None` for such values. This mirrors how partially-typed input arrives
/// from an editing surface, where "not a date yet" must still be
/// representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    /// Year (e.g., 2026).
    pub year: u16,
    /// Month (1-12).
    pub month: u8,
    /// Day of month (1-31).
    pub day: u8,
}

impl Date {
    /// Creates a new date.
    #[must_use]
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Converts to a chrono `NaiveDate`, or `None` if the fields do not name
    /// a valid calendar day.
    #[must_use]
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }

    /// Converts from a chrono `NaiveDate`.
    ///
    /// Returns `None` for years outside the `u16` range.
    #[must_use]
    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        let year = u16::try_from(date.year()).ok()?;
        let month = u8::try_from(date.month()).ok()?;
        let day = u8::try_from(date.day()).ok()?;
        Some(Self { year, month, day })
    }

    /// Returns whether the fields name a valid calendar day.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.to_naive().is_some()
    }

    /// Returns the day of the week, or `None` for an invalid date.
    #[must_use]
    pub fn weekday(self) -> Option<Weekday> {
        self.to_naive().map(|d| Weekday::from_chrono(d.weekday()))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = CoreError;

    /// Parses a `YYYY-MM-DD` date string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(CoreError::ParseError(format!(
                "expected YYYY-MM-DD, got {s:?}"
            )));
        };
        fn field<T: FromStr>(value: &str, what: &str, input: &str) -> Result<T, CoreError> {
            value
                .parse()
                .map_err(|_| CoreError::ParseError(format!("invalid {what} in date {input:?}")))
        }
        Ok(Self {
            year: field(y, "year", s)?,
            month: field(m, "month", s)?,
            day: field(d, "day", s)?,
        })
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(DeError::custom)
    }
}
