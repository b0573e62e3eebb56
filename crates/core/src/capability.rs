//! Injected side-effecting collaborators
//!
//! The core never touches a platform API. The shell supplies a clipboard and
//! a preference store behind these traits; the engine stays pure and
//! testable with in-memory fakes.

use crate::convert::NO_RESULT;
use crate::view::Theme;

/// Write text to the system clipboard.
pub trait Clipboard {
    /// Place `text` on the clipboard.
    ///
    /// # Errors
    /// Returns an error if the clipboard is unavailable or the write fails.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Errors that can occur writing to a clipboard
#[derive(Debug)]
pub enum ClipboardError {
    /// No clipboard available in this environment
    Unavailable(String),
    /// The clipboard rejected the write
    WriteFailed(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "Clipboard unavailable: {msg}"),
            ClipboardError::WriteFailed(msg) => write!(f, "Failed to copy: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Persist and recall the theme preference.
pub trait PreferenceStore {
    /// Read the saved theme, if one was ever saved.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read or parsed.
    fn load_theme(&self) -> Result<Option<Theme>, PreferenceError>;

    /// Save the theme preference.
    ///
    /// # Errors
    /// Returns an error if the preference cannot be serialized or written.
    fn save_theme(&mut self, theme: Theme) -> Result<(), PreferenceError>;
}

/// Errors that can occur with preference store operations
#[derive(Debug)]
pub enum PreferenceError {
    /// Failed to load the store
    LoadFailed(String),
    /// Failed to parse the stored contents
    ParseFailed(String),
    /// Failed to serialize the preference
    SerializeFailed(String),
    /// Failed to save the store
    SaveFailed(String),
}

impl std::fmt::Display for PreferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferenceError::LoadFailed(msg) => write!(f, "Failed to load: {msg}"),
            PreferenceError::ParseFailed(msg) => write!(f, "Failed to parse: {msg}"),
            PreferenceError::SerializeFailed(msg) => write!(f, "Failed to serialize: {msg}"),
            PreferenceError::SaveFailed(msg) => write!(f, "Failed to save: {msg}"),
        }
    }
}

impl std::error::Error for PreferenceError {}

/// Copy a rendered output to the clipboard.
///
/// The sentinel shown for invalid input is never copied; returns whether
/// anything was placed on the clipboard.
///
/// # Errors
/// Propagates the clipboard's write error.
pub fn copy_output(clipboard: &mut dyn Clipboard, output: &str) -> Result<bool, ClipboardError> {
    if output == NO_RESULT {
        return Ok(false);
    }
    clipboard.write_text(output)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeClipboard {
        contents: Vec<String>,
    }

    impl Clipboard for FakeClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.contents.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_output_writes_text() {
        let mut clipboard = FakeClipboard::default();
        let copied = copy_output(&mut clipboard, "914 mm").unwrap();
        assert!(copied);
        assert_eq!(clipboard.contents, vec!["914 mm".to_string()]);
    }

    #[test]
    fn test_copy_output_skips_sentinel() {
        let mut clipboard = FakeClipboard::default();
        let copied = copy_output(&mut clipboard, NO_RESULT).unwrap();
        assert!(!copied);
        assert!(clipboard.contents.is_empty());
    }
}
