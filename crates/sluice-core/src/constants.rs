//! Allocation constants. All percentages are plain percent values (100.0 = 100%).

/// The total every program's wallet splits must reach, in percent.
pub const SPLIT_TOTAL_PERCENT: f64 = 100.0;

/// Tolerance applied when checking the split total.
///
/// A total is acceptable when `|total - SPLIT_TOTAL_PERCENT|` is strictly
/// below this value, so `100.0099` passes and `100.01` does not.
pub const SPLIT_TOLERANCE: f64 = 0.01;

/// Upper bound for a program's allocation of projected yield, in percent.
/// The lower bound is exclusive: an allocation of exactly 0 is invalid.
pub const MAX_ALLOCATION_PERCENT: f64 = 100.0;

/// Percent seeded into the first wallet row of a fresh split set.
///
/// A single-payee program is valid without any percent edits; rows added
/// after the first start at 0 and must be assigned a share explicitly.
pub const INITIAL_SPLIT_PERCENT: f64 = 100.0;
