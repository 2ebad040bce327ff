//! Core value types shared across the cadence crates.
//!
//! Everything here is dependency-light and free of recurrence logic: calendar
//! primitives, shared constants, the core error type, and configuration
//! loading for the binary.

pub mod config;
pub mod constants;
pub mod date;
pub mod error;
pub mod types;

pub use date::Date;
pub use error::{CoreError, CoreResult};
pub use types::{Frequency, MonthWeek, Weekday};
