//! Conversion Widget Core Library
//!
//! The pure engine behind a metric/imperial conversion widget: typed
//! measurement units, composite feet/inches formatting, tolerant input-field
//! parsing, and the eight conversion operations, plus the immutable view
//! state that drives a shell UI.
//!
//! Every conversion is a total, stateless function: invalid input renders a
//! sentinel string instead of raising an error, so a shell can display the
//! result of any keystroke directly.

// Core types and utilities
pub mod core_types;

// Conversion engine and widget state
pub mod capability;
pub mod convert;
pub mod input;
pub mod view;

// Re-export core types
pub use core_types::{
    Feet, FeetInches, Metres, Millimetres, SquareFeet, SquareMetres, SquareMillimetres,
};

// Re-export engine entry points
pub use convert::{Conversion, ConversionInput, NO_RESULT};

// Re-export widget state types
pub use view::{render, ConversionKind, Direction, Rendered, Theme, ViewState};

// Re-export capability seams
pub use capability::{copy_output, Clipboard, ClipboardError, PreferenceError, PreferenceStore};
