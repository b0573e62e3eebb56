//! Semantic unit types for type-safe measurement handling
//!
//! This module provides newtype wrappers for the measurements the converter
//! works with, preventing accidental mixing of incompatible units (e.g.
//! millimetres with square millimetres, or metres with decimal feet).
//!
//! # Design Philosophy
//! - All quantities use f64 (display-precision arithmetic, no hot loops)
//! - Implements common traits (Add, Sub, Mul, Div, Ord, Display, etc.)
//! - Provides explicit conversion methods between metric and imperial types
//! - Serde support for serialization
//! - Total ordering via Ord trait (NaN handled via `total_cmp`)
//! - Private inner fields with validated constructors
//!
//! # Usage
//! ```
//! use convert_core::core_types::units::{Metres, Feet};
//!
//! let m = Metres::new(1.0);
//! let ft: Feet = m.to_feet();
//! assert!((ft.value() - 3.28084).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, DerefMut, Div, Mul, Sub};

// ============================================================================
// CONVERSION CONSTANTS
// ============================================================================

/// Feet per metre (international foot)
pub const METRES_TO_FEET: f64 = 3.28084;

/// Inches per foot
pub const FEET_TO_INCHES: f64 = 12.0;

/// Feet per millimetre
pub const MILLIMETRES_TO_FEET: f64 = 0.00328084;

/// Square feet per square metre
pub const SQUARE_METRES_TO_SQUARE_FEET: f64 = 10.7639;

/// Square feet per square millimetre
pub const SQUARE_MM_TO_SQUARE_FEET: f64 = 1.07639e-5;

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// LINEAR LENGTH TYPES
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Millimetres(f64);

impl Eq for Millimetres {}

impl PartialOrd for Millimetres {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Millimetres {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Millimetres {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Millimetres {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Millimetres {
    /// Create a new length in millimetres. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(
            value >= 0.0,
            "Millimetres::new: negative length is invalid"
        );
        Millimetres(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (non-negative length).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        Millimetres(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to decimal feet
    #[inline]
    #[must_use]
    pub fn to_feet(self) -> Feet {
        Feet(self.0 * MILLIMETRES_TO_FEET)
    }
}

impl From<f64> for Millimetres {
    fn from(v: f64) -> Self {
        Millimetres(v)
    }
}

impl From<Millimetres> for f64 {
    fn from(mm: Millimetres) -> f64 {
        mm.0
    }
}

impl Add for Millimetres {
    type Output = Millimetres;
    fn add(self, rhs: Millimetres) -> Millimetres {
        Millimetres(self.0 + rhs.0)
    }
}

impl Sub for Millimetres {
    type Output = Millimetres;
    fn sub(self, rhs: Millimetres) -> Millimetres {
        Millimetres(self.0 - rhs.0)
    }
}

impl Mul<f64> for Millimetres {
    type Output = Millimetres;
    fn mul(self, rhs: f64) -> Millimetres {
        Millimetres(self.0 * rhs)
    }
}

impl Div<f64> for Millimetres {
    type Output = Millimetres;
    fn div(self, rhs: f64) -> Millimetres {
        Millimetres(self.0 / rhs)
    }
}

// Widget output fragment: whole millimetres
impl fmt::Display for Millimetres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mm", self.0.round() as i64)
    }
}

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Metres(f64);

impl Eq for Metres {}

impl PartialOrd for Metres {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Metres {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Metres {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Metres {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Metres {
    /// Create a new length in metres. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "Metres::new: negative length is invalid");
        Metres(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (non-negative length).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        Metres(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to decimal feet
    #[inline]
    #[must_use]
    pub fn to_feet(self) -> Feet {
        Feet(self.0 * METRES_TO_FEET)
    }
}

impl From<f64> for Metres {
    fn from(v: f64) -> Self {
        Metres(v)
    }
}

impl From<Metres> for f64 {
    fn from(m: Metres) -> f64 {
        m.0
    }
}

impl Add for Metres {
    type Output = Metres;
    fn add(self, rhs: Metres) -> Metres {
        Metres(self.0 + rhs.0)
    }
}

impl Sub for Metres {
    type Output = Metres;
    fn sub(self, rhs: Metres) -> Metres {
        Metres(self.0 - rhs.0)
    }
}

impl Mul<f64> for Metres {
    type Output = Metres;
    fn mul(self, rhs: f64) -> Metres {
        Metres(self.0 * rhs)
    }
}

impl Div<f64> for Metres {
    type Output = Metres;
    fn div(self, rhs: f64) -> Metres {
        Metres(self.0 / rhs)
    }
}

// Widget output fragment: two decimal places
impl fmt::Display for Metres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m", self.0)
    }
}

/// Length in decimal feet (fractional part represents inches)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Feet(f64);

impl Eq for Feet {}

impl PartialOrd for Feet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Feet {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Feet {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Feet {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Feet {
    /// Create a new length in decimal feet. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "Feet::new: negative length is invalid");
        Feet(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (non-negative length).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        Feet(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to metres
    #[inline]
    #[must_use]
    pub fn to_metres(self) -> Metres {
        Metres(self.0 / METRES_TO_FEET)
    }

    /// Convert to millimetres
    #[inline]
    #[must_use]
    pub fn to_millimetres(self) -> Millimetres {
        Millimetres(self.0 / METRES_TO_FEET * 1000.0)
    }
}

impl From<f64> for Feet {
    fn from(v: f64) -> Self {
        Feet(v)
    }
}

impl From<Feet> for f64 {
    fn from(ft: Feet) -> f64 {
        ft.0
    }
}

impl Add for Feet {
    type Output = Feet;
    fn add(self, rhs: Feet) -> Feet {
        Feet(self.0 + rhs.0)
    }
}

impl Sub for Feet {
    type Output = Feet;
    fn sub(self, rhs: Feet) -> Feet {
        Feet(self.0 - rhs.0)
    }
}

impl Mul<f64> for Feet {
    type Output = Feet;
    fn mul(self, rhs: f64) -> Feet {
        Feet(self.0 * rhs)
    }
}

impl Div<f64> for Feet {
    type Output = Feet;
    fn div(self, rhs: f64) -> Feet {
        Feet(self.0 / rhs)
    }
}

impl fmt::Display for Feet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ft", self.0)
    }
}

// ============================================================================
// AREA TYPES
// ============================================================================

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SquareMillimetres(f64);

impl Eq for SquareMillimetres {}

impl PartialOrd for SquareMillimetres {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SquareMillimetres {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for SquareMillimetres {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for SquareMillimetres {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl SquareMillimetres {
    /// Create a new area in square millimetres. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(
            value >= 0.0,
            "SquareMillimetres::new: negative area is invalid"
        );
        SquareMillimetres(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (non-negative area).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        SquareMillimetres(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to square feet
    #[inline]
    #[must_use]
    pub fn to_square_feet(self) -> SquareFeet {
        SquareFeet(self.0 * SQUARE_MM_TO_SQUARE_FEET)
    }
}

impl From<f64> for SquareMillimetres {
    fn from(v: f64) -> Self {
        SquareMillimetres(v)
    }
}

impl From<SquareMillimetres> for f64 {
    fn from(a: SquareMillimetres) -> f64 {
        a.0
    }
}

impl Add for SquareMillimetres {
    type Output = SquareMillimetres;
    fn add(self, rhs: SquareMillimetres) -> SquareMillimetres {
        SquareMillimetres(self.0 + rhs.0)
    }
}

impl Sub for SquareMillimetres {
    type Output = SquareMillimetres;
    fn sub(self, rhs: SquareMillimetres) -> SquareMillimetres {
        SquareMillimetres(self.0 - rhs.0)
    }
}

// Widget output fragment: whole square millimetres
impl fmt::Display for SquareMillimetres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mm²", self.0.round() as i64)
    }
}

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SquareMetres(f64);

impl Eq for SquareMetres {}

impl PartialOrd for SquareMetres {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SquareMetres {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for SquareMetres {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for SquareMetres {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl SquareMetres {
    /// Create a new area in square metres. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "SquareMetres::new: negative area is invalid");
        SquareMetres(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (non-negative area).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        SquareMetres(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to square feet
    #[inline]
    #[must_use]
    pub fn to_square_feet(self) -> SquareFeet {
        SquareFeet(self.0 * SQUARE_METRES_TO_SQUARE_FEET)
    }
}

impl From<f64> for SquareMetres {
    fn from(v: f64) -> Self {
        SquareMetres(v)
    }
}

impl From<SquareMetres> for f64 {
    fn from(a: SquareMetres) -> f64 {
        a.0
    }
}

impl Add for SquareMetres {
    type Output = SquareMetres;
    fn add(self, rhs: SquareMetres) -> SquareMetres {
        SquareMetres(self.0 + rhs.0)
    }
}

impl Sub for SquareMetres {
    type Output = SquareMetres;
    fn sub(self, rhs: SquareMetres) -> SquareMetres {
        SquareMetres(self.0 - rhs.0)
    }
}

// Widget output fragment: two decimal places
impl fmt::Display for SquareMetres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m²", self.0)
    }
}

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SquareFeet(f64);

impl Eq for SquareFeet {}

impl PartialOrd for SquareFeet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SquareFeet {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for SquareFeet {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for SquareFeet {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl SquareFeet {
    /// Create a new area in square feet. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "SquareFeet::new: negative area is invalid");
        SquareFeet(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0 (non-negative area).
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        SquareFeet(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to square millimetres
    #[inline]
    #[must_use]
    pub fn to_square_millimetres(self) -> SquareMillimetres {
        SquareMillimetres(self.0 / SQUARE_MM_TO_SQUARE_FEET)
    }

    /// Convert to square metres
    #[inline]
    #[must_use]
    pub fn to_square_metres(self) -> SquareMetres {
        SquareMetres(self.0 / SQUARE_METRES_TO_SQUARE_FEET)
    }
}

impl From<f64> for SquareFeet {
    fn from(v: f64) -> Self {
        SquareFeet(v)
    }
}

impl From<SquareFeet> for f64 {
    fn from(a: SquareFeet) -> f64 {
        a.0
    }
}

impl Add for SquareFeet {
    type Output = SquareFeet;
    fn add(self, rhs: SquareFeet) -> SquareFeet {
        SquareFeet(self.0 + rhs.0)
    }
}

impl Sub for SquareFeet {
    type Output = SquareFeet;
    fn sub(self, rhs: SquareFeet) -> SquareFeet {
        SquareFeet(self.0 - rhs.0)
    }
}

// Widget output fragment: whole square feet
impl fmt::Display for SquareFeet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sq ft", self.0.round() as i64)
    }
}

// ============================================================================
// TESTS
// ============================================================================
