// src/core/view.rs
//! View-mode state and the read-only snapshot handed to renderers.

use crate::core::keyboard::KeyboardState;
use crate::core::style::{CardStyle, StripStyle};
use crate::core::types::{Category, Language, SymbolEntry};
use crate::speech::VoiceSettings;
use serde::Serialize;

/// Store key for the color-coding preference (`"true"` / `"false"`).
pub const COLOR_CODING_KEY: &str = "colorCodingEnabled";

/// Orthogonal view axes: language, category, query, color coding, keyboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub language: Language,
    pub category: Category,
    pub search_query: String,
    pub color_coding: bool,
    pub keyboard: KeyboardState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            language: Language::English,
            category: Category::Core,
            search_query: String::new(),
            color_coding: false,
            keyboard: KeyboardState::new(),
        }
    }
}

impl ViewState {
    /// True when the grid shows cross-category search results.
    pub fn is_searching(&self) -> bool {
        !self.category.is_keyboard() && !self.search_query.trim().is_empty()
    }
}

/// One card of the symbol grid, resolved for the current language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub entry: SymbolEntry,
    pub text: String,
    pub translation: String,
    pub category: Category,
    /// Index into the custom store when the card is user-added and deletable.
    pub custom_index: Option<usize>,
    pub style: CardStyle,
    /// Source category label, only on search results.
    pub category_label: Option<&'static str>,
}

/// One word of the sentence strip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StripWord {
    pub pictogram: String,
    pub text: String,
    pub style: StripStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardStats {
    pub total_words: usize,
    pub core_words: usize,
    pub categories: usize,
}

/// Everything a renderer needs to draw the board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardSnapshot {
    pub view: ViewState,
    pub categories: Vec<(Category, &'static str)>,
    pub cards: Vec<Card>,
    pub sentence: Vec<StripWord>,
    pub quick_phrases: &'static [&'static str],
    /// Key labels as currently displayed; only while on the keyboard.
    pub keyboard_rows: Option<Vec<Vec<String>>>,
    pub legend_visible: bool,
    pub voice: VoiceSettings,
    pub stats: BoardStats,
}
