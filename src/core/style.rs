// src/core/style.rs
//! Presentation rules for the color-coding overlay and core-word emphasis.
//! Pure functions of (entry, flag); renderers decide how a style looks.

use crate::core::types::{EntryKind, SymbolEntry, WordType};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayColor {
    Yellow,
    Blue,
    Green,
    Purple,
    Orange,
    Brown,
    Red,
    White,
}

impl DisplayColor {
    pub const fn name(self) -> &'static str {
        match self {
            DisplayColor::Yellow => "yellow",
            DisplayColor::Blue => "blue",
            DisplayColor::Green => "green",
            DisplayColor::Purple => "purple",
            DisplayColor::Orange => "orange",
            DisplayColor::Brown => "brown",
            DisplayColor::Red => "red",
            DisplayColor::White => "white",
        }
    }
}

/// Legend rows shown while color coding is on.
pub const LEGEND: [(WordType, &str); 8] = [
    (WordType::Core, "Core words"),
    (WordType::Noun, "Nouns"),
    (WordType::Verb, "Verbs"),
    (WordType::Descriptor, "Describing"),
    (WordType::Preposition, "Prepositions"),
    (WordType::Question, "Questions"),
    (WordType::Feeling, "Feelings"),
    (WordType::Social, "Social"),
];

/// How a symbol card in the grid is emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "style", content = "color")]
pub enum CardStyle {
    Plain,
    /// Core word with a CORE badge; only while color coding is off.
    CoreBadge,
    Colored(DisplayColor),
}

/// How a word in the sentence strip is emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "style", content = "color")]
pub enum StripStyle {
    Plain,
    Typed,
    Core,
    Colored(DisplayColor),
}

pub fn card_style(entry: &SymbolEntry, color_coding: bool) -> CardStyle {
    match (&entry.word_type, color_coding) {
        (Some(word_type), true) => CardStyle::Colored(word_type.color()),
        (_, false) if entry.core => CardStyle::CoreBadge,
        _ => CardStyle::Plain,
    }
}

/// Search results ignore color coding: core words always carry the badge.
pub fn search_card_style(entry: &SymbolEntry) -> CardStyle {
    if entry.core {
        CardStyle::CoreBadge
    } else {
        CardStyle::Plain
    }
}

pub fn strip_style(entry: &SymbolEntry, color_coding: bool) -> StripStyle {
    if entry.kind == EntryKind::Typed {
        return StripStyle::Typed;
    }
    match &entry.word_type {
        Some(word_type) if color_coding => StripStyle::Colored(word_type.color()),
        _ if entry.core => StripStyle::Core,
        _ => StripStyle::Plain,
    }
}
