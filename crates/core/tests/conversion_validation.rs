//! Validation behavior across the conversion operations
//!
//! Every operation is total: bad input degrades to the sentinel rather than
//! panicking or erroring, and the enumerated dispatch accepts any input
//! shape.

use convert_core::convert::{
    feet_inches_to_metres, feet_inches_to_millimetres, metres_to_feet_inches,
    millimetres_to_feet_inches, square_feet_to_square_metres, square_feet_to_square_millimetres,
    square_metres_to_square_feet, square_millimetres_to_square_feet,
};
use convert_core::{Conversion, ConversionInput, NO_RESULT};

#[test]
fn negative_scalar_input_renders_sentinel_everywhere() {
    assert_eq!(millimetres_to_feet_inches(-1.0), NO_RESULT);
    assert_eq!(metres_to_feet_inches(-1.0), NO_RESULT);
    assert_eq!(square_millimetres_to_square_feet(-1.0), NO_RESULT);
    assert_eq!(square_metres_to_square_feet(-1.0), NO_RESULT);
    assert_eq!(square_feet_to_square_millimetres(-1.0), NO_RESULT);
    assert_eq!(square_feet_to_square_metres(-1.0), NO_RESULT);
}

#[test]
fn non_finite_scalar_input_renders_sentinel_everywhere() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(millimetres_to_feet_inches(bad), NO_RESULT);
        assert_eq!(metres_to_feet_inches(bad), NO_RESULT);
        assert_eq!(square_millimetres_to_square_feet(bad), NO_RESULT);
        assert_eq!(square_metres_to_square_feet(bad), NO_RESULT);
        assert_eq!(square_feet_to_square_millimetres(bad), NO_RESULT);
        assert_eq!(square_feet_to_square_metres(bad), NO_RESULT);
    }
}

#[test]
fn composite_input_requires_at_least_one_field() {
    assert_eq!(feet_inches_to_millimetres("", ""), NO_RESULT);
    assert_eq!(feet_inches_to_metres("", ""), NO_RESULT);

    // One populated field is enough.
    assert_eq!(feet_inches_to_millimetres("3", ""), "914 mm");
    assert_eq!(feet_inches_to_millimetres("", "6"), "152 mm");
}

#[test]
fn composite_fields_treat_garbage_as_zero() {
    // An unparseable component silently counts as zero, so the other field
    // still converts.
    assert_eq!(feet_inches_to_millimetres("3", "abc"), "914 mm");
    assert_eq!(feet_inches_to_metres("abc", "6"), "0.15 m");

    // Both garbage: zero feet, still a defined output.
    assert_eq!(feet_inches_to_millimetres("abc", "xyz"), "0 mm");
}

#[test]
fn composite_negative_total_renders_sentinel() {
    assert_eq!(feet_inches_to_millimetres("-1", ""), NO_RESULT);
    assert_eq!(feet_inches_to_millimetres("1", "-24"), NO_RESULT);
    assert_eq!(feet_inches_to_metres("-0.5", "0"), NO_RESULT);

    // A negative component that nets out non-negative still converts.
    assert_eq!(feet_inches_to_millimetres("1", "-12"), "0 mm");
}

#[test]
fn dispatch_is_total_over_input_shapes() {
    let scalar = ConversionInput::Scalar("25");
    let pair = ConversionInput::FeetAndInches {
        feet: "5",
        inches: "6",
    };

    for conversion in Conversion::ALL {
        // Whatever the arity, both shapes produce a defined string.
        let from_scalar = conversion.convert(scalar);
        let from_pair = conversion.convert(pair);
        assert!(!from_scalar.is_empty(), "{conversion:?} returned empty");
        assert!(!from_pair.is_empty(), "{conversion:?} returned empty");
    }
}

#[test]
fn dispatch_parses_scalar_fields_like_the_widget() {
    let out = Conversion::MetresToFeetInches.convert(ConversionInput::Scalar(""));
    assert_eq!(out, NO_RESULT, "empty scalar field is indeterminate");

    let out = Conversion::MetresToFeetInches.convert(ConversionInput::Scalar("two"));
    assert_eq!(out, NO_RESULT, "non-numeric scalar field is invalid");

    let out = Conversion::MetresToFeetInches.convert(ConversionInput::Scalar(" 1 "));
    assert_eq!(out, "3' 3\"", "surrounding whitespace is tolerated");
}

#[test]
fn conversions_are_deterministic() {
    for _ in 0..3 {
        assert_eq!(millimetres_to_feet_inches(2500.0), "8' 2\"");
        assert_eq!(square_metres_to_square_feet(10.0), "108 sq ft");
    }
}
