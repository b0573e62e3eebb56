//! The conversion engine
//!
//! Eight pure operations mapping a raw input value (or pair of raw text
//! fields) in one unit to a display string in another. Every operation is
//! total: invalid input (non-numeric, non-finite, negative, or an empty
//! composite pair) degrades to the [`NO_RESULT`] sentinel instead of an
//! error, so the caller can render the result without branching.

use crate::core_types::{
    Feet, FeetInches, Metres, Millimetres, SquareFeet, SquareMetres, SquareMillimetres,
};
use crate::input;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Sentinel rendered for any invalid or indeterminate input.
pub const NO_RESULT: &str = "—";

/// A measurement is usable when it is a finite, non-negative number.
#[inline]
fn valid(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Format a decimal-feet length as a composite feet/inches string.
///
/// Invalid input (NaN, infinite, or negative) renders the sentinel.
#[must_use]
pub fn format_feet_inches(total_feet: f64) -> String {
    if !valid(total_feet) {
        return NO_RESULT.to_string();
    }
    FeetInches::from_decimal(Feet::new(total_feet)).to_string()
}

/// Convert millimetres to a composite feet/inches string.
#[must_use]
pub fn millimetres_to_feet_inches(mm: f64) -> String {
    if !valid(mm) {
        return NO_RESULT.to_string();
    }
    FeetInches::from_decimal(Millimetres::new(mm).to_feet()).to_string()
}

/// Convert metres to a composite feet/inches string.
#[must_use]
pub fn metres_to_feet_inches(metres: f64) -> String {
    if !valid(metres) {
        return NO_RESULT.to_string();
    }
    FeetInches::from_decimal(Metres::new(metres).to_feet()).to_string()
}

/// Convert raw feet and inches fields to whole millimetres.
///
/// The sentinel is rendered when both raw fields are empty or the combined
/// decimal feet value is negative; a single blank or unparseable field
/// counts as zero.
#[must_use]
pub fn feet_inches_to_millimetres(feet: &str, inches: &str) -> String {
    if feet.is_empty() && inches.is_empty() {
        return NO_RESULT.to_string();
    }
    let decimal = input::decimal_feet(feet, inches);
    if decimal < 0.0 {
        return NO_RESULT.to_string();
    }
    Feet::new(decimal).to_millimetres().to_string()
}

/// Convert raw feet and inches fields to metres (two decimal places).
#[must_use]
pub fn feet_inches_to_metres(feet: &str, inches: &str) -> String {
    if feet.is_empty() && inches.is_empty() {
        return NO_RESULT.to_string();
    }
    let decimal = input::decimal_feet(feet, inches);
    if decimal < 0.0 {
        return NO_RESULT.to_string();
    }
    Feet::new(decimal).to_metres().to_string()
}

/// Convert square millimetres to whole square feet.
#[must_use]
pub fn square_millimetres_to_square_feet(sq_mm: f64) -> String {
    if !valid(sq_mm) {
        return NO_RESULT.to_string();
    }
    SquareMillimetres::new(sq_mm).to_square_feet().to_string()
}

/// Convert square metres to whole square feet.
#[must_use]
pub fn square_metres_to_square_feet(sq_m: f64) -> String {
    if !valid(sq_m) {
        return NO_RESULT.to_string();
    }
    SquareMetres::new(sq_m).to_square_feet().to_string()
}

/// Convert square feet to whole square millimetres.
#[must_use]
pub fn square_feet_to_square_millimetres(sq_ft: f64) -> String {
    if !valid(sq_ft) {
        return NO_RESULT.to_string();
    }
    SquareFeet::new(sq_ft).to_square_millimetres().to_string()
}

/// Convert square feet to square metres (two decimal places).
#[must_use]
pub fn square_feet_to_square_metres(sq_ft: f64) -> String {
    if !valid(sq_ft) {
        return NO_RESULT.to_string();
    }
    SquareFeet::new(sq_ft).to_square_metres().to_string()
}

// ============================================================================
// ENUMERATED DISPATCH
// ============================================================================

/// Every conversion the widget offers, forward and reverse.
///
/// Replaces string-keyed lookup of handlers with a closed variant type and a
/// total mapping in [`Conversion::convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conversion {
    /// Millimetres to composite feet/inches
    MillimetresToFeetInches,
    /// Metres to composite feet/inches
    MetresToFeetInches,
    /// Composite feet/inches to whole millimetres
    FeetInchesToMillimetres,
    /// Composite feet/inches to metres
    FeetInchesToMetres,
    /// Square millimetres to whole square feet
    SquareMillimetresToSquareFeet,
    /// Square metres to whole square feet
    SquareMetresToSquareFeet,
    /// Square feet to whole square millimetres
    SquareFeetToSquareMillimetres,
    /// Square feet to square metres
    SquareFeetToSquareMetres,
}

/// Raw input for one conversion, in the shape the operation expects.
#[derive(Debug, Clone, Copy)]
pub enum ConversionInput<'a> {
    /// A single raw value field
    Scalar(&'a str),
    /// The feet and inches field pair
    FeetAndInches {
        /// Raw feet field
        feet: &'a str,
        /// Raw inches field
        inches: &'a str,
    },
}

impl Conversion {
    /// All conversions, in widget display order.
    pub const ALL: [Conversion; 8] = [
        Conversion::MillimetresToFeetInches,
        Conversion::FeetInchesToMillimetres,
        Conversion::MetresToFeetInches,
        Conversion::FeetInchesToMetres,
        Conversion::SquareMillimetresToSquareFeet,
        Conversion::SquareFeetToSquareMillimetres,
        Conversion::SquareMetresToSquareFeet,
        Conversion::SquareFeetToSquareMetres,
    ];

    /// Section title shown above the input fields.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Conversion::MillimetresToFeetInches => "Millimetres to feet & inches",
            Conversion::MetresToFeetInches => "Metres to feet & inches",
            Conversion::FeetInchesToMillimetres => "Feet & inches to millimetres",
            Conversion::FeetInchesToMetres => "Feet & inches to metres",
            Conversion::SquareMillimetresToSquareFeet => "Square millimetres to square feet",
            Conversion::SquareMetresToSquareFeet => "Square metres to square feet",
            Conversion::SquareFeetToSquareMillimetres => "Square feet to square millimetres",
            Conversion::SquareFeetToSquareMetres => "Square feet to square metres",
        }
    }

    /// Labels for the input fields this conversion reads.
    #[must_use]
    pub fn input_labels(self) -> &'static [&'static str] {
        match self {
            Conversion::MillimetresToFeetInches => &["mm"],
            Conversion::MetresToFeetInches => &["m"],
            Conversion::FeetInchesToMillimetres | Conversion::FeetInchesToMetres => {
                &["feet", "inches"]
            }
            Conversion::SquareMillimetresToSquareFeet => &["sq mm"],
            Conversion::SquareMetresToSquareFeet => &["sq m"],
            Conversion::SquareFeetToSquareMillimetres | Conversion::SquareFeetToSquareMetres => {
                &["sq ft"]
            }
        }
    }

    /// The opposite conversion direction.
    #[must_use]
    pub fn inverse(self) -> Conversion {
        match self {
            Conversion::MillimetresToFeetInches => Conversion::FeetInchesToMillimetres,
            Conversion::MetresToFeetInches => Conversion::FeetInchesToMetres,
            Conversion::FeetInchesToMillimetres => Conversion::MillimetresToFeetInches,
            Conversion::FeetInchesToMetres => Conversion::MetresToFeetInches,
            Conversion::SquareMillimetresToSquareFeet => Conversion::SquareFeetToSquareMillimetres,
            Conversion::SquareMetresToSquareFeet => Conversion::SquareFeetToSquareMetres,
            Conversion::SquareFeetToSquareMillimetres => Conversion::SquareMillimetresToSquareFeet,
            Conversion::SquareFeetToSquareMetres => Conversion::SquareMetresToSquareFeet,
        }
    }

    /// Run this conversion over raw input.
    ///
    /// Total over the input domain: an input shape that does not match the
    /// operation's arity renders the sentinel like any other invalid input.
    #[must_use]
    pub fn convert(self, raw: ConversionInput<'_>) -> String {
        debug!("dispatching {:?}", self);
        match (self, raw) {
            (Conversion::MillimetresToFeetInches, ConversionInput::Scalar(field)) => {
                millimetres_to_feet_inches(input::parse_scalar(field))
            }
            (Conversion::MetresToFeetInches, ConversionInput::Scalar(field)) => {
                metres_to_feet_inches(input::parse_scalar(field))
            }
            (Conversion::FeetInchesToMillimetres, ConversionInput::FeetAndInches { feet, inches }) => {
                feet_inches_to_millimetres(feet, inches)
            }
            (Conversion::FeetInchesToMetres, ConversionInput::FeetAndInches { feet, inches }) => {
                feet_inches_to_metres(feet, inches)
            }
            (Conversion::SquareMillimetresToSquareFeet, ConversionInput::Scalar(field)) => {
                square_millimetres_to_square_feet(input::parse_scalar(field))
            }
            (Conversion::SquareMetresToSquareFeet, ConversionInput::Scalar(field)) => {
                square_metres_to_square_feet(input::parse_scalar(field))
            }
            (Conversion::SquareFeetToSquareMillimetres, ConversionInput::Scalar(field)) => {
                square_feet_to_square_millimetres(input::parse_scalar(field))
            }
            (Conversion::SquareFeetToSquareMetres, ConversionInput::Scalar(field)) => {
                square_feet_to_square_metres(input::parse_scalar(field))
            }
            _ => NO_RESULT.to_string(),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
