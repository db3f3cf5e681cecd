//! Numeric policies shared by the heat-kernel and index pipelines.

/// Denominator magnitudes below this floor make a ratio undefined.
pub const RATIO_DENOMINATOR_FLOOR: f64 = 1e-30;

/// Returns half the ratio `num / den`, or NaN when the denominator is
/// effectively zero.
///
/// The NaN sentinel is the contract for "undefined", not an error: a
/// vanishing denominator means the leading coefficient cancelled and the
/// ratio carries no information at that order.
pub fn half_ratio(num: f64, den: f64) -> f64 {
    if den.abs() < RATIO_DENOMINATOR_FLOOR {
        f64::NAN
    } else {
        0.5 * (num / den)
    }
}

/// Rounds a value to the 1e-9 granularity recorded in reports.
///
/// NaN passes through unchanged so the undefined sentinel survives
/// report assembly.
pub fn round_value(value: f64) -> f64 {
    if value.is_nan() {
        value
    } else {
        (value * 1e9).round() / 1e9
    }
}
