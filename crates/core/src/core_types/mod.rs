//! Core types and utilities

pub mod feet_inches;
pub mod units;

pub use feet_inches::FeetInches;
pub use units::*;
