//! Composite feet-and-inches representation of a length
//!
//! A length expressed as an integer feet part plus an inches remainder,
//! reducible to and from a single decimal-feet value. Formatting follows the
//! widget display rules (`5' 6"`, `3"`, `0' 0"`).

use crate::core_types::units::{Feet, FEET_TO_INCHES};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A length split into whole feet and rounded inches.
///
/// The inches component is rounded to the nearest whole inch and may be 12
/// when the fractional feet round up (e.g. 1.999 decimal feet renders as
/// `1' 12"`); it is not carried into the feet component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeetInches {
    feet: u32,
    inches: u32,
}

impl FeetInches {
    /// Split a non-negative decimal-feet length into whole feet and rounded
    /// inches.
    #[must_use]
    pub fn from_decimal(total: Feet) -> Self {
        let value = total.value();
        let feet = value.floor() as u32;
        let inches = ((value - value.floor()) * FEET_TO_INCHES).round() as u32;
        FeetInches { feet, inches }
    }

    /// Whole feet component
    #[inline]
    #[must_use]
    pub fn feet(self) -> u32 {
        self.feet
    }

    /// Rounded inches component (may be 12, see type docs)
    #[inline]
    #[must_use]
    pub fn inches(self) -> u32 {
        self.inches
    }
}

impl fmt::Display for FeetInches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.feet == 0 && self.inches == 0 {
            return write!(f, "0' 0\"");
        }

        if self.feet > 0 {
            write!(f, "{}'", self.feet)?;
        }
        // The inches component always appears when there are no whole feet,
        // so a non-trivial value never renders as an empty string.
        if self.inches > 0 || self.feet == 0 {
            if self.feet > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}\"", self.inches)?;
        }

        Ok(())
    }
}
