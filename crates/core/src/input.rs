//! Raw text-field parsing at the widget boundary
//!
//! The UI collaborator hands the engine the raw contents of its input
//! fields. Composite feet/inches fields are tolerant: anything that fails to
//! parse counts as zero, so a value in one field still converts while the
//! other is blank or mistyped. Scalar fields are strict: a failed parse
//! yields NaN so the operation's validation rejects it.

use crate::core_types::units::FEET_TO_INCHES;

/// Parse one feet/inches component field, defaulting to 0 on empty,
/// non-numeric, or non-finite input.
#[must_use]
pub fn parse_component(field: &str) -> f64 {
    match field.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Parse a scalar input field. A failed parse yields NaN, which every
/// conversion operation treats as invalid input.
#[must_use]
pub fn parse_scalar(field: &str) -> f64 {
    field.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Combine raw feet and inches fields into a single decimal-feet value.
///
/// Range validation (negative totals, both fields empty) is the calling
/// operation's responsibility.
#[must_use]
pub fn decimal_feet(feet: &str, inches: &str) -> f64 {
    parse_component(feet) + parse_component(inches) / FEET_TO_INCHES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_defaults_to_zero() {
        assert_eq!(parse_component(""), 0.0);
        assert_eq!(parse_component("abc"), 0.0);
        assert_eq!(parse_component("3abc"), 0.0);
        assert_eq!(parse_component("inf"), 0.0);
    }

    #[test]
    fn test_component_parses_numbers() {
        assert_eq!(parse_component("3"), 3.0);
        assert_eq!(parse_component(" 4.5 "), 4.5);
        assert_eq!(parse_component("-2"), -2.0);
    }

    #[test]
    fn test_scalar_keeps_failures_as_nan() {
        assert!(parse_scalar("").is_nan());
        assert!(parse_scalar("abc").is_nan());
        assert_eq!(parse_scalar("25.5"), 25.5);
    }

    #[test]
    fn test_decimal_feet() {
        assert_eq!(decimal_feet("5", "6"), 5.5);
        assert_eq!(decimal_feet("", "6"), 0.5);
        assert_eq!(decimal_feet("3", ""), 3.0);
        assert_eq!(decimal_feet("", ""), 0.0);
    }

    #[test]
    fn test_decimal_feet_can_go_negative() {
        // The parser itself does not range-check; callers do.
        assert_eq!(decimal_feet("-1", ""), -1.0);
        assert_eq!(decimal_feet("1", "-24"), -1.0);
    }
}
