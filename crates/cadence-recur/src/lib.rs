//! Recurrence rule engine.
//!
//! This crate turns a [`rule::RecurrenceRule`] into the things a calendar
//! surface needs:
//! - [`expand::generate`] — the ordered occurrence dates the rule denotes
//! - [`preview::describe`] — a human-readable summary of the rule
//! - [`expand::calendar`] — month-grid helpers for rendering a preview
//!
//! All entry points are pure: no clock, no I/O, no retained state. Malformed
//! input degrades to an empty or truncated result instead of an error, so a
//! live-editing caller can feed partial rules without guarding every call.

pub mod error;
pub mod expand;
pub mod preview;
pub mod rule;

pub use error::{RuleError, RuleResult};
pub use expand::calendar::{CalendarDay, days_in_range, month_grid};
pub use expand::generate;
pub use preview::describe;
pub use rule::{OrdinalWeekday, RecurrenceRule};
