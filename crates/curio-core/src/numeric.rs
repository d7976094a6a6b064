//! Decimal rounding shared by every score computation.

/// Round `value` to `places` decimal places, half away from zero.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::round_to;

    #[test]
    fn rounds_to_one_decimal() {
        assert!((round_to(7.644_444, 1) - 7.6).abs() < f64::EPSILON);
        assert!((round_to(8.25, 1) - 8.3).abs() < f64::EPSILON);
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert!((round_to(3.456, 2) - 3.46).abs() < 1e-9);
    }
}
