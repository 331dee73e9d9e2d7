/// Round to `decimals` places, ties to even.
///
/// `12.125` goes to `12.12` and `0.25` to `0.2`. Values too large to
/// scale have no fractional digits left and are returned as is.
/// Negative zero is normalised so serialized output never shows `-0.0`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round_ties_even() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Money and demand values are reported to the cent.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Percentages are reported to one decimal place.
pub fn round1(value: f64) -> f64 {
    round_to(value, 1)
}
