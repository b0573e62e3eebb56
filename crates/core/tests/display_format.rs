//! Display formatting properties of the conversion engine
//!
//! Checks the composite feet/inches rules, the fixed output formats of each
//! operation, and the rounding tolerance of converting through metres.

use approx::assert_abs_diff_eq;
use convert_core::convert::{
    feet_inches_to_metres, feet_inches_to_millimetres, format_feet_inches,
    metres_to_feet_inches, millimetres_to_feet_inches, square_feet_to_square_metres,
    square_feet_to_square_millimetres, square_metres_to_square_feet,
    square_millimetres_to_square_feet,
};
use convert_core::core_types::units::MILLIMETRES_TO_FEET;
use convert_core::{Feet, NO_RESULT};

#[test]
fn millimetre_conversion_matches_the_composite_formatter() {
    for mm in [0.0, 1.0, 25.4, 304.8, 1000.0, 2500.0, 10_000.0, 123_456.7] {
        assert_eq!(
            millimetres_to_feet_inches(mm),
            format_feet_inches(mm * MILLIMETRES_TO_FEET),
            "mismatch at {mm} mm"
        );
    }
}

#[test]
fn zero_formats_with_both_components() {
    assert_eq!(format_feet_inches(0.0), "0' 0\"");
    assert_eq!(millimetres_to_feet_inches(0.0), "0' 0\"");
}

#[test]
fn half_foot_rounds_to_six_inches() {
    assert_eq!(format_feet_inches(5.5), "5' 6\"");
}

#[test]
fn sub_foot_lengths_omit_the_feet_component() {
    assert_eq!(format_feet_inches(0.25), "3\"");
    // ~76 mm is three inches
    assert_eq!(millimetres_to_feet_inches(76.2), "3\"");
}

#[test]
fn whole_feet_omit_the_inches_component() {
    assert_eq!(format_feet_inches(2.0), "2'");
}

#[test]
fn formatter_rejects_invalid_input() {
    assert_eq!(format_feet_inches(-0.1), NO_RESULT);
    assert_eq!(format_feet_inches(f64::NAN), NO_RESULT);
}

#[test]
fn inches_rounding_to_twelve_is_not_carried() {
    // Known quirk, preserved: just under a whole foot rounds the inches
    // component up to 12 without carrying into feet.
    assert_eq!(format_feet_inches(1.9999), "1' 12\"");
    assert_eq!(metres_to_feet_inches(0.6095), "1' 12\"");
}

#[test]
fn metric_outputs_use_fixed_formats() {
    assert_eq!(feet_inches_to_millimetres("3", ""), "914 mm");
    assert_eq!(feet_inches_to_metres("3", ""), "0.91 m");
    assert_eq!(square_metres_to_square_feet(10.0), "108 sq ft");
    assert_eq!(square_millimetres_to_square_feet(500_000.0), "5 sq ft");
    assert_eq!(square_feet_to_square_millimetres(5.0), "464516 mm²");
    assert_eq!(square_feet_to_square_metres(100.0), "9.29 m²");
}

#[test]
fn converting_through_metres_stays_within_a_millimetre() {
    for (feet, inches) in [(0.0, 1.0), (1.0, 0.0), (3.0, 0.0), (5.0, 6.0), (12.0, 11.0)] {
        let decimal = Feet::new(feet + inches / 12.0);

        let direct_mm = decimal.to_millimetres().value();
        let via_metres_mm = decimal.to_metres().value() * 1000.0;

        assert_abs_diff_eq!(direct_mm, via_metres_mm, epsilon = 1.0);
    }
}
