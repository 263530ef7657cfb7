//! Keybindings matching utilities.
//!
//! Converts key events to the string form used in `keybindings.yaml` and
//! checks them against configured bindings.

#[cfg(feature = "native")]
use std::path::{Path, PathBuf};

use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::{AppKeyEvent, KeyCode};

#[cfg(feature = "native")]
const KEYBINDINGS_FILE: &str = "keybindings.yaml";

impl KeybindingsConfig {
    /// Convert a key event to binding notation.
    ///
    /// Examples:
    /// - `Char('a')` -> `"a"`
    /// - `Char('c')` with ctrl -> `"ctrl+c"`
    /// - `Char('J')` with shift -> `"shift+j"`
    /// - `Char('+')` with shift -> `"+"`
    /// - `Char(' ')` -> `"space"`
    pub fn app_key_to_string(key: &AppKeyEvent) -> String {
        let mut parts = Vec::new();

        if key.ctrl {
            parts.push("ctrl");
        }
        if key.alt {
            parts.push("alt");
        }

        let key_str = match &key.code {
            KeyCode::Char(' ') => "space".to_string(),
            KeyCode::Char(c) => {
                // Shifted symbols already arrive as the symbol itself
                if key.shift && c.is_alphabetic() {
                    parts.push("shift");
                }
                c.to_lowercase().to_string()
            }
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Tab => {
                if key.shift {
                    parts.push("shift");
                }
                "tab".to_string()
            }
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Delete => "delete".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Up => "up".to_string(),
            KeyCode::Down => "down".to_string(),
            KeyCode::Left => "left".to_string(),
            KeyCode::Right => "right".to_string(),
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::PageUp => "pageup".to_string(),
            KeyCode::PageDown => "pagedown".to_string(),
            KeyCode::F(n) => format!("f{n}"),
            #[cfg(feature = "native")]
            KeyCode::BackTab => {
                parts.push("shift");
                "tab".to_string()
            }
            _ => return String::new(),
        };

        parts.push(&key_str);
        parts.join("+")
    }

    /// Check if a key event matches any of the configured bindings.
    pub fn matches(key: &AppKeyEvent, bindings: &[String]) -> bool {
        let key_str = Self::app_key_to_string(key);
        if key_str.is_empty() {
            return false;
        }
        bindings.iter().any(|b| b.eq_ignore_ascii_case(&key_str))
    }

    #[cfg(feature = "native")]
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(KEYBINDINGS_FILE)
    }

    /// Load keybindings from the data directory. A missing or unreadable
    /// file falls back to the defaults.
    #[cfg(feature = "native")]
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_saphyr::from_str(&content) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Loaded keybindings");
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Invalid keybindings file, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read keybindings, using defaults");
                Self::default()
            }
        }
    }
}
