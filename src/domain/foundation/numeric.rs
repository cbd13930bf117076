//! Named numeric guards shared by every scoring method.
//!
//! Degenerate inputs (zero column range, zero weight sum, zero denominator)
//! are never errors. Each guard below defines the neutral value used instead.

/// Floor under which a weight sum counts as zero; uniform weights are used instead.
pub const WEIGHT_SUM_EPSILON: f64 = 1e-9;

/// Floor for ratio denominators (vector norms, closeness ratios, VIKOR spreads).
pub const DENOMINATOR_EPSILON: f64 = 1e-12;

/// Added to min-max column ranges in RSM and UTA so constant columns normalise to 0.
pub const RANGE_EPSILON: f64 = 1e-6;

/// Divides `numerator` by `denominator`, returning `fallback` when the
/// denominator does not exceed [`DENOMINATOR_EPSILON`].
pub fn guarded_div(numerator: f64, denominator: f64, fallback: f64) -> f64 {
    if denominator > DENOMINATOR_EPSILON {
        numerator / denominator
    } else {
        fallback
    }
}

/// Ratio of two raw counters, `part / (part + rest)`, with 0/0 defined as 0.0.
pub fn counter_ratio(part: f64, rest: f64) -> f64 {
    let total = part + rest;
    if total > 0.0 {
        part / total
    } else {
        0.0
    }
}
