// src/core/keyboard.rs
use crate::core::builtin::{ENGLISH_KEYBOARD, HINDI_KEYBOARD};
use crate::core::types::Language;
use serde::Serialize;

/// A key press on the virtual keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Text(String),
    Space,
    Backspace,
    Shift,
    Enter,
}

impl Key {
    /// Maps a layout label (`"SPACE"`, `"⌫"`, `"क"`, ...) to the key it stands for.
    pub fn from_label(label: &str) -> Self {
        match label {
            "SPACE" => Key::Space,
            "ENTER" => Key::Enter,
            "SHIFT" => Key::Shift,
            "⌫" => Key::Backspace,
            other => Key::Text(other.to_string()),
        }
    }
}

/// Rows of key labels for a language.
pub fn layout(language: Language) -> &'static [&'static [&'static str]] {
    match language {
        Language::English => ENGLISH_KEYBOARD,
        Language::Hindi => HINDI_KEYBOARD,
    }
}

/// What a key press produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Edited,
    /// Enter on a non-blank buffer; carries the trimmed text.
    Submitted(String),
    Ignored,
}

/// The typing buffer plus the one-shot shift latch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeyboardState {
    pub buffer: String,
    pub shift: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key, language: Language) -> KeyOutcome {
        match key {
            Key::Text(text) => {
                let text = self.display_label(&text, language);
                self.type_str(&text, language);
                KeyOutcome::Edited
            }
            Key::Space => {
                self.type_str(" ", language);
                KeyOutcome::Edited
            }
            Key::Backspace => {
                if self.buffer.pop().is_some() {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Shift => {
                self.shift = !self.shift;
                KeyOutcome::Edited
            }
            Key::Enter => {
                let text = self.buffer.trim();
                if text.is_empty() {
                    return KeyOutcome::Ignored;
                }
                let text = text.to_string();
                self.buffer.clear();
                KeyOutcome::Submitted(text)
            }
        }
    }

    /// How a letter key is labelled right now. Casing only applies to English.
    pub fn display_label(&self, label: &str, language: Language) -> String {
        match language {
            Language::English if self.shift => label.to_uppercase(),
            Language::English => label.to_lowercase(),
            Language::Hindi => label.to_string(),
        }
    }

    /// Appends already-cased text. The English shift latch releases after one key.
    fn type_str(&mut self, text: &str, language: Language) {
        self.buffer.push_str(text);
        if self.shift && language == Language::English {
            self.shift = false;
        }
    }
}
