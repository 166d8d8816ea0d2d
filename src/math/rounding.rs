//! Decimal rounding for physical measurements and percentages

/// Round to one decimal place, exact halves to even
///
/// Ties are judged on the exact binary value, not on the scaled product:
/// `6.25` is a true half and becomes `6.2`, while `0.35` is stored slightly
/// below its decimal value and becomes `0.3`.
pub fn round_to_tenth(value: f64) -> f64 {
    let scaled = value * 10.0;
    // Exact error of the scaling step
    let residual = value.mul_add(10.0, -scaled);
    let floor = scaled.floor();

    // Exact halves only; anything else rounds to nearest unambiguously
    #[allow(clippy::float_cmp)]
    let is_half = scaled - floor == 0.5;

    let rounded = if !is_half {
        scaled.round()
    } else if residual > 0.0 {
        floor + 1.0
    } else if residual < 0.0 {
        floor
    } else {
        scaled.round_ties_even()
    };
    rounded / 10.0
}

/// Express `part / whole` as a percentage rounded to one decimal place
///
/// A zero `whole` yields 0.0 rather than NaN.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_to_tenth(part as f64 / whole as f64 * 100.0)
}
