//! Interactive Conversion Widget Demo
//!
//! A terminal shell for the conversion engine. Pick a converter, type
//! values, and the converted output re-renders after every edit, the way the
//! widget reacts to input events.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package demo-interactive
//! ```
//!
//! # Commands
//!
//! - `use <mm|m|sqmm|sqm>` - Select a converter
//! - `reverse` - Flip the selected converter's direction
//! - `<value>` (or `<feet> <inches>`) - Enter input and convert
//! - `clear` - Clear the input fields
//! - `copy` - Copy the current output to the session clipboard
//! - `theme` - Toggle light/dark theme (persisted between runs)
//! - `status` - Show the widget state
//! - `help` - Show available commands
//! - `quit` - Exit

use convert_core::{
    copy_output, render, Clipboard, ClipboardError, Conversion, ConversionInput, ConversionKind,
    PreferenceError, PreferenceStore, Theme, ViewState,
};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Where the theme preference is stored between runs
const PREFERENCES_FILE: &str = ".convert-widget.json";

/// Theme preference persisted as a small JSON file.
struct FilePreferences {
    path: PathBuf,
}

impl PreferenceStore for FilePreferences {
    fn load_theme(&self) -> Result<Option<Theme>, PreferenceError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)
            .map_err(|e| PreferenceError::LoadFailed(e.to_string()))?;
        let theme = serde_json::from_str(&contents)
            .map_err(|e| PreferenceError::ParseFailed(e.to_string()))?;
        Ok(Some(theme))
    }

    fn save_theme(&mut self, theme: Theme) -> Result<(), PreferenceError> {
        let contents = serde_json::to_string_pretty(&theme)
            .map_err(|e| PreferenceError::SerializeFailed(e.to_string()))?;
        fs::write(&self.path, contents).map_err(|e| PreferenceError::SaveFailed(e.to_string()))
    }
}

/// Session-local clipboard: keeps everything copied during the run.
#[derive(Default)]
struct SessionClipboard {
    history: Vec<String>,
}

impl Clipboard for SessionClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.history.push(text.to_string());
        Ok(())
    }
}

/// The raw input field contents the widget owns.
#[derive(Default)]
struct Fields {
    first: String,
    second: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║           Metric / Imperial Conversion Widget             ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    let mut prefs = FilePreferences {
        path: PathBuf::from(PREFERENCES_FILE),
    };

    let mut state = ViewState::new();
    match prefs.load_theme() {
        Ok(Some(theme)) => state = state.with_theme(theme),
        Ok(None) => {}
        Err(e) => warn!("could not load theme preference: {e}"),
    }
    info!("starting with {} theme", state.theme().label());

    let mut clipboard = SessionClipboard::default();
    let mut fields = Fields::default();

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to create readline: {}", e);
            return;
        }
    };

    println!("Converters: mm, m, sqmm, sqm. Type 'help' for all commands.\n");

    loop {
        let readline = rl.readline("convert> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                let parts: Vec<&str> = line.split_whitespace().collect();

                if parts.is_empty() {
                    continue;
                }

                match parts[0].to_lowercase().as_str() {
                    "use" | "u" => {
                        if let Some(kind) = parts.get(1).copied().and_then(parse_kind) {
                            state = state.select(kind);
                            fields = Fields::default();
                            println!("Selected: {}", kind.label());
                            show_section(state, &fields);
                        } else {
                            println!("Usage: use <mm|m|sqmm|sqm>");
                        }
                    }
                    "reverse" | "r" => {
                        if state.selection().is_none() {
                            println!("Select a converter before reversing.");
                        } else {
                            state = state.toggle_direction();
                            fields = Fields::default();
                            show_section(state, &fields);
                        }
                    }
                    "clear" => {
                        fields = Fields::default();
                        show_section(state, &fields);
                    }
                    "copy" | "c" => copy_current(state, &fields, &mut clipboard),
                    "theme" | "t" => {
                        state = state.toggle_theme();
                        match prefs.save_theme(state.theme()) {
                            Ok(()) => println!("Theme: {}", state.theme().label()),
                            Err(e) => eprintln!("Theme not saved: {e}"),
                        }
                    }
                    "status" | "st" => show_status(state, &fields, &clipboard),
                    "help" | "h" => show_help(),
                    "quit" | "q" | "exit" => break,
                    _ => enter_values(state, &mut fields, &parts),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {}", e);
                break;
            }
        }
    }

    println!("Bye.");
}

/// Map a selector token to a converter.
fn parse_kind(token: &str) -> Option<ConversionKind> {
    match token {
        "mm" => Some(ConversionKind::MillimetresToFeet),
        "m" => Some(ConversionKind::MetresToFeet),
        "sqmm" | "sq-mm" => Some(ConversionKind::SquareMillimetresToSquareFeet),
        "sqm" | "sq-m" => Some(ConversionKind::SquareMetresToSquareFeet),
        _ => None,
    }
}

/// Treat a non-command line as input-field contents and re-render.
fn enter_values(state: ViewState, fields: &mut Fields, parts: &[&str]) {
    let Some(conversion) = state.active_conversion() else {
        println!("Unknown command. Type 'help', or 'use <mm|m|sqmm|sqm>' to start.");
        return;
    };

    fields.first = parts[0].to_string();
    if conversion.input_labels().len() == 2 {
        fields.second = parts.get(1).copied().unwrap_or("").to_string();
    } else if parts.len() > 1 {
        println!("This converter takes a single value; extra input ignored.");
    }

    show_section(state, fields);
}

/// Shape the raw field contents the way the active conversion expects.
fn field_input<'a>(conversion: Conversion, fields: &'a Fields) -> ConversionInput<'a> {
    if conversion.input_labels().len() == 2 {
        ConversionInput::FeetAndInches {
            feet: &fields.first,
            inches: &fields.second,
        }
    } else {
        ConversionInput::Scalar(&fields.first)
    }
}

/// Render the active section the way the widget would show it.
fn show_section(state: ViewState, fields: &Fields) {
    let Some(conversion) = state.active_conversion() else {
        println!("No converter selected.");
        return;
    };

    if let Some(rendered) = render(state, field_input(conversion, fields)) {
        println!();
        println!("  {}", rendered.title);
        for (label, value) in conversion
            .input_labels()
            .iter()
            .zip([&fields.first, &fields.second])
        {
            println!("    {label}: {value}");
        }
        println!("    = {}", rendered.output);
        println!();
    }
}

/// Copy the current output through the injected clipboard capability.
fn copy_current(state: ViewState, fields: &Fields, clipboard: &mut SessionClipboard) {
    let Some(conversion) = state.active_conversion() else {
        println!("Nothing to copy.");
        return;
    };

    let Some(rendered) = render(state, field_input(conversion, fields)) else {
        println!("Nothing to copy.");
        return;
    };

    match copy_output(clipboard, &rendered.output) {
        Ok(true) => println!("Copied: {}", rendered.output),
        Ok(false) => println!("No result to copy."),
        Err(e) => eprintln!("{e}"),
    }
}

fn show_status(state: ViewState, fields: &Fields, clipboard: &SessionClipboard) {
    match state.selection() {
        Some(kind) => println!("Converter: {}", kind.label()),
        None => println!("Converter: none"),
    }
    println!("Direction: {:?}", state.direction());
    println!("Theme:     {}", state.theme().label());
    println!("Fields:    '{}' '{}'", fields.first, fields.second);
    println!("Copied:    {} item(s) this session", clipboard.history.len());
}

fn show_help() {
    println!("Commands:");
    println!("  use <mm|m|sqmm|sqm>  - Select a converter");
    println!("  reverse              - Flip the conversion direction");
    println!("  <value>              - Enter a value and convert");
    println!("  <feet> <inches>      - Enter both fields (reversed length modes)");
    println!("  clear                - Clear the input fields");
    println!("  copy                 - Copy the current output");
    println!("  theme                - Toggle light/dark theme");
    println!("  status               - Show widget state");
    println!("  quit                 - Exit");
}
