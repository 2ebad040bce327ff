/// Interval bounds enforced at rule-edit boundaries.
pub const INTERVAL_MIN: u32 = 1;
pub const INTERVAL_MAX: u32 = 365;

/// Default number of occurrences generated for a calendar preview.
pub const DEFAULT_PREVIEW_COUNT: usize = 30;

/// Hard ceiling on occurrences produced by a single expansion.
///
/// This prevents runaway loops from malformed or extremely long-running
/// rules, independent of what the caller asks for.
pub const MAX_OCCURRENCES: usize = 10_000;
