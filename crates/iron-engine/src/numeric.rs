//! Percentage rounding. Credit sums are never rounded.

/// Round `value` half away from zero to `decimals` places.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    (value * factor).round() / factor
}

/// `part / whole * 100`, rounded. A zero `whole` counts as fully satisfied.
#[must_use]
pub fn percentage(part: f64, whole: f64, decimals: u32) -> f64 {
    if whole <= 0.0 {
        return 100.0;
    }
    round_to(part / whole * 100.0, decimals)
}
