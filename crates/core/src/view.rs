//! Immutable view state for the widget shell
//!
//! The UI layer holds two ephemeral selectors (which converter is active and
//! whether it runs reversed) plus the theme. Here that state is an explicit
//! immutable value: every transition returns a new [`ViewState`], and
//! [`render`] is a pure function from state and raw input to what the shell
//! should display.

use crate::convert::{Conversion, ConversionInput, NO_RESULT};
use serde::{Deserialize, Serialize};

/// Visual theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light mode (default)
    #[default]
    Light,
    /// Dark mode
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Lowercase name, as persisted.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// The four selectable converters.
///
/// Each pairs with [`Direction`] to resolve the concrete [`Conversion`] in
/// [`ViewState::active_conversion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversionKind {
    /// Millimetres ↔ feet & inches
    MillimetresToFeet,
    /// Metres ↔ feet & inches
    MetresToFeet,
    /// Square millimetres ↔ square feet
    SquareMillimetresToSquareFeet,
    /// Square metres ↔ square feet
    SquareMetresToSquareFeet,
}

impl ConversionKind {
    /// All selectable converters, in widget display order.
    pub const ALL: [ConversionKind; 4] = [
        ConversionKind::MillimetresToFeet,
        ConversionKind::MetresToFeet,
        ConversionKind::SquareMillimetresToSquareFeet,
        ConversionKind::SquareMetresToSquareFeet,
    ];

    /// Short selector label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ConversionKind::MillimetresToFeet => "mm to ft/in",
            ConversionKind::MetresToFeet => "m to ft/in",
            ConversionKind::SquareMillimetresToSquareFeet => "sq mm to sq ft",
            ConversionKind::SquareMetresToSquareFeet => "sq m to sq ft",
        }
    }

    /// The conversion this selector runs in the forward direction.
    #[must_use]
    pub fn forward(self) -> Conversion {
        match self {
            ConversionKind::MillimetresToFeet => Conversion::MillimetresToFeetInches,
            ConversionKind::MetresToFeet => Conversion::MetresToFeetInches,
            ConversionKind::SquareMillimetresToSquareFeet => {
                Conversion::SquareMillimetresToSquareFeet
            }
            ConversionKind::SquareMetresToSquareFeet => Conversion::SquareMetresToSquareFeet,
        }
    }

    /// The conversion this selector runs when reversed.
    #[must_use]
    pub fn reversed(self) -> Conversion {
        self.forward().inverse()
    }
}

/// Which way the selected converter runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// Metric input, imperial output (default)
    #[default]
    Forward,
    /// Imperial input, metric output
    Reversed,
}

impl Direction {
    /// The other direction.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Direction::Forward => Direction::Reversed,
            Direction::Reversed => Direction::Forward,
        }
    }
}

/// The widget's entire ephemeral state, as an immutable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    selection: Option<ConversionKind>,
    direction: Direction,
    theme: Theme,
}

impl ViewState {
    /// Initial state: nothing selected, forward direction, light theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected converter, if any.
    #[must_use]
    pub fn selection(self) -> Option<ConversionKind> {
        self.selection
    }

    /// Current conversion direction.
    #[must_use]
    pub fn direction(self) -> Direction {
        self.direction
    }

    /// Current theme.
    #[must_use]
    pub fn theme(self) -> Theme {
        self.theme
    }

    /// Select a converter. Selecting always resets to the forward direction.
    #[must_use]
    pub fn select(self, kind: ConversionKind) -> Self {
        Self {
            selection: Some(kind),
            direction: Direction::Forward,
            ..self
        }
    }

    /// Flip the conversion direction. No-op while nothing is selected.
    #[must_use]
    pub fn toggle_direction(self) -> Self {
        if self.selection.is_none() {
            return self;
        }
        Self {
            direction: self.direction.toggled(),
            ..self
        }
    }

    /// Replace the theme.
    #[must_use]
    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    /// Flip the theme.
    #[must_use]
    pub fn toggle_theme(self) -> Self {
        self.with_theme(self.theme.toggled())
    }

    /// The conversion the widget currently runs: a total mapping from
    /// selection and direction, `None` only while nothing is selected.
    #[must_use]
    pub fn active_conversion(self) -> Option<Conversion> {
        self.selection.map(|kind| match self.direction {
            Direction::Forward => kind.forward(),
            Direction::Reversed => kind.reversed(),
        })
    }
}

/// What the shell should display for the active section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Section title
    pub title: &'static str,
    /// Converted output (or the sentinel)
    pub output: String,
    /// Whether the output may be copied (the sentinel may not)
    pub copy_enabled: bool,
}

/// Pure render function: `None` while no converter is selected (the section
/// container stays hidden), otherwise the section to show.
#[must_use]
pub fn render(state: ViewState, raw: ConversionInput<'_>) -> Option<Rendered> {
    let conversion = state.active_conversion()?;
    let output = conversion.convert(raw);
    let copy_enabled = output != NO_RESULT;
    Some(Rendered {
        title: conversion.title(),
        output,
        copy_enabled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_resets_direction() {
        let state = ViewState::new()
            .select(ConversionKind::MillimetresToFeet)
            .toggle_direction();
        assert_eq!(state.direction(), Direction::Reversed);

        let state = state.select(ConversionKind::MetresToFeet);
        assert_eq!(state.direction(), Direction::Forward);
    }

    #[test]
    fn test_toggle_direction_requires_selection() {
        let state = ViewState::new().toggle_direction();
        assert_eq!(state.direction(), Direction::Forward);
    }

    #[test]
    fn test_active_conversion_covers_every_pair() {
        for kind in ConversionKind::ALL {
            let forward = ViewState::new().select(kind);
            assert_eq!(forward.active_conversion(), Some(kind.forward()));

            let reversed = forward.toggle_direction();
            assert_eq!(reversed.active_conversion(), Some(kind.reversed()));
        }
    }

    #[test]
    fn test_render_hidden_without_selection() {
        let out = render(ViewState::new(), ConversionInput::Scalar("25"));
        assert!(out.is_none());
    }

    #[test]
    fn test_render_forward_and_reversed() {
        let state = ViewState::new().select(ConversionKind::MetresToFeet);
        let out = render(state, ConversionInput::Scalar("1")).unwrap();
        assert_eq!(out.output, "3' 3\"");
        assert!(out.copy_enabled);

        let state = state.toggle_direction();
        let raw = ConversionInput::FeetAndInches {
            feet: "3",
            inches: "3",
        };
        let out = render(state, raw).unwrap();
        assert_eq!(out.output, "0.99 m");
    }

    #[test]
    fn test_render_disables_copy_for_sentinel() {
        let state = ViewState::new().select(ConversionKind::SquareMetresToSquareFeet);
        let out = render(state, ConversionInput::Scalar("not a number")).unwrap();
        assert_eq!(out.output, NO_RESULT);
        assert!(!out.copy_enabled);
    }

    #[test]
    fn test_theme_round_trip() {
        let state = ViewState::new().toggle_theme();
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(state.toggle_theme().theme(), Theme::Light);
    }
}
