// src/core/types.rs
use crate::core::builtin;
use crate::core::style::DisplayColor;
use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shown when an entry has no picture of its own.
pub const FALLBACK_GLYPH: &str = "❓";
/// Pictogram used for typed words and quick phrases.
pub const SPEECH_BUBBLE: &str = "💬";

/// One of the two board languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    /// Locale tag handed to the speech engine.
    pub const fn locale(self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Hindi => "hi-IN",
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }

    pub const fn other(self) -> Language {
        match self {
            Language::English => Language::Hindi,
            Language::Hindi => Language::English,
        }
    }
}

impl FromStr for Language {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "hi" | "hindi" => Ok(Language::Hindi),
            other => Err(BoardError::UnknownLanguage(other.to_string())),
        }
    }
}

/// The closed set of board categories, in display order.
/// `Keyboard` is the typing surface and never holds entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Core,
    Pronouns,
    Adjectives,
    Feelings,
    Food,
    People,
    Actions,
    Places,
    Body,
    Needs,
    Animals,
    Colors,
    Numbers,
    School,
    Toys,
    Keyboard,
}

impl Category {
    pub const ALL: [Category; 16] = [
        Category::Core,
        Category::Pronouns,
        Category::Adjectives,
        Category::Feelings,
        Category::Food,
        Category::People,
        Category::Actions,
        Category::Places,
        Category::Body,
        Category::Needs,
        Category::Animals,
        Category::Colors,
        Category::Numbers,
        Category::School,
        Category::Toys,
        Category::Keyboard,
    ];

    /// Every category that can hold symbols, in declaration order.
    pub fn symbol_categories() -> impl Iterator<Item = Category> {
        Self::ALL.into_iter().filter(|c| !c.is_keyboard())
    }

    pub const fn is_keyboard(self) -> bool {
        matches!(self, Category::Keyboard)
    }

    /// Key used in the persisted custom-symbol mapping.
    pub const fn key(self) -> &'static str {
        match self {
            Category::Core => "core",
            Category::Pronouns => "pronouns",
            Category::Adjectives => "adjectives",
            Category::Feelings => "feelings",
            Category::Food => "food",
            Category::People => "people",
            Category::Actions => "actions",
            Category::Places => "places",
            Category::Body => "body",
            Category::Needs => "needs",
            Category::Animals => "animals",
            Category::Colors => "colors",
            Category::Numbers => "numbers",
            Category::School => "school",
            Category::Toys => "toys",
            Category::Keyboard => "keyboard",
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        builtin::category_label(self, language)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.key() == wanted)
            .ok_or(BoardError::UnknownCategory(wanted))
    }
}

/// Grammatical classification driving the color-coding overlay.
/// Values outside the fixed set are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WordType {
    Core,
    Noun,
    Verb,
    Descriptor,
    Preposition,
    Question,
    Feeling,
    Social,
    Other(String),
}

impl WordType {
    pub fn as_str(&self) -> &str {
        match self {
            WordType::Core => "core",
            WordType::Noun => "noun",
            WordType::Verb => "verb",
            WordType::Descriptor => "descriptor",
            WordType::Preposition => "preposition",
            WordType::Question => "question",
            WordType::Feeling => "feeling",
            WordType::Social => "social",
            WordType::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, WordType::Other(_))
    }

    pub fn color(&self) -> DisplayColor {
        match self {
            WordType::Core => DisplayColor::Yellow,
            WordType::Noun => DisplayColor::Blue,
            WordType::Verb => DisplayColor::Green,
            WordType::Descriptor => DisplayColor::Purple,
            WordType::Preposition => DisplayColor::Orange,
            WordType::Question => DisplayColor::Brown,
            WordType::Feeling => DisplayColor::Red,
            WordType::Social | WordType::Other(_) => DisplayColor::White,
        }
    }
}

impl From<String> for WordType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "core" => WordType::Core,
            "noun" => WordType::Noun,
            "verb" => WordType::Verb,
            "descriptor" => WordType::Descriptor,
            "preposition" => WordType::Preposition,
            "question" => WordType::Question,
            "feeling" => WordType::Feeling,
            "social" => WordType::Social,
            _ => WordType::Other(raw),
        }
    }
}

impl From<WordType> for String {
    fn from(word_type: WordType) -> Self {
        match word_type {
            WordType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// The picture side of a symbol card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pictogram {
    /// An emoji or other literal glyph.
    Glyph(String),
    /// An embedded image, e.g. `data:image/png;base64,...`.
    DataUri(String),
}

impl Pictogram {
    pub fn from_reference(reference: impl Into<String>) -> Self {
        let reference = reference.into();
        if reference.starts_with("data:") {
            Pictogram::DataUri(reference)
        } else {
            Pictogram::Glyph(reference)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Pictogram::Glyph(s) | Pictogram::DataUri(s) => s,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Pictogram::DataUri(_))
    }
}

impl Default for Pictogram {
    fn default() -> Self {
        Pictogram::Glyph(FALLBACK_GLYPH.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Symbol,
    /// Free text committed from the keyboard.
    Typed,
    /// A quick phrase shortcut.
    Phrase,
}

/// A single board symbol: picture plus English and Hindi text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredSymbol", into = "StoredSymbol")]
pub struct SymbolEntry {
    pub pictogram: Pictogram,
    pub en: String,
    pub hi: String,
    pub core: bool,
    pub word_type: Option<WordType>,
    pub kind: EntryKind,
}

impl SymbolEntry {
    pub fn new(pictogram: Pictogram, en: impl Into<String>, hi: impl Into<String>) -> Self {
        Self {
            pictogram,
            en: en.into(),
            hi: hi.into(),
            core: false,
            word_type: None,
            kind: EntryKind::Symbol,
        }
    }

    pub fn with_core(mut self, core: bool) -> Self {
        self.core = core;
        self
    }

    pub fn with_word_type(mut self, word_type: WordType) -> Self {
        self.word_type = Some(word_type);
        self
    }

    pub fn typed(text: impl Into<String>) -> Self {
        Self::literal(text.into(), EntryKind::Typed)
    }

    pub fn phrase(text: impl Into<String>) -> Self {
        Self::literal(text.into(), EntryKind::Phrase)
    }

    fn literal(text: String, kind: EntryKind) -> Self {
        Self {
            pictogram: Pictogram::Glyph(SPEECH_BUBBLE.to_string()),
            en: text.clone(),
            hi: text,
            core: false,
            word_type: None,
            kind,
        }
    }

    /// Text shown and spoken in `language`.
    pub fn text(&self, language: Language) -> &str {
        match language {
            Language::English => &self.en,
            Language::Hindi => &self.hi,
        }
    }

    /// Text in the other language, shown under the main label.
    pub fn translation(&self, language: Language) -> &str {
        self.text(language.other())
    }

    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowered(&self, needle: &str) -> bool {
        self.en.to_lowercase().contains(needle) || self.hi.to_lowercase().contains(needle)
    }
}

/// Wire shape of a symbol in the `customSymbols` blob.
#[derive(Serialize, Deserialize)]
struct StoredSymbol {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    emoji: Option<String>,
    en: String,
    hi: String,
    #[serde(default)]
    core: bool,
    #[serde(rename = "wordType", default, skip_serializing_if = "Option::is_none")]
    word_type: Option<WordType>,
    #[serde(rename = "isTyped", default, skip_serializing_if = "is_false")]
    is_typed: bool,
    #[serde(rename = "isPhrase", default, skip_serializing_if = "is_false")]
    is_phrase: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl From<StoredSymbol> for SymbolEntry {
    fn from(stored: StoredSymbol) -> Self {
        let pictogram = stored
            .img
            .filter(|r| !r.is_empty())
            .or(stored.emoji.filter(|r| !r.is_empty()))
            .map(Pictogram::from_reference)
            .unwrap_or_default();
        let kind = if stored.is_typed {
            EntryKind::Typed
        } else if stored.is_phrase {
            EntryKind::Phrase
        } else {
            EntryKind::Symbol
        };
        Self {
            pictogram,
            en: stored.en,
            hi: stored.hi,
            core: stored.core,
            word_type: stored.word_type,
            kind,
        }
    }
}

impl From<SymbolEntry> for StoredSymbol {
    fn from(entry: SymbolEntry) -> Self {
        let img = match entry.pictogram {
            Pictogram::Glyph(s) | Pictogram::DataUri(s) => s,
        };
        Self {
            img: Some(img),
            emoji: None,
            en: entry.en,
            hi: entry.hi,
            core: entry.core,
            word_type: entry.word_type,
            is_typed: entry.kind == EntryKind::Typed,
            is_phrase: entry.kind == EntryKind::Phrase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_both_picture_field_names() {
        let from_img: SymbolEntry =
            serde_json::from_str(r#"{"img":"🥭","en":"Mango","hi":"आम","core":false}"#).unwrap();
        let from_emoji: SymbolEntry =
            serde_json::from_str(r#"{"emoji":"🥭","en":"Mango","hi":"आम"}"#).unwrap();
        assert_eq!(from_img.pictogram, Pictogram::Glyph("🥭".to_string()));
        assert_eq!(from_img, from_emoji);
    }

    #[test]
    fn test_data_uri_pictogram() {
        let entry: SymbolEntry = serde_json::from_str(
            r#"{"img":"data:image/png;base64,AAAA","en":"Me","hi":"मैं","core":true}"#,
        )
        .unwrap();
        assert!(entry.pictogram.is_image());
        assert!(entry.core);
    }

    #[test]
    fn test_empty_img_uses_emoji() {
        let entry: SymbolEntry =
            serde_json::from_str(r#"{"img":"","emoji":"🥭","en":"Mango","hi":"आम"}"#).unwrap();
        assert_eq!(entry.pictogram, Pictogram::Glyph("🥭".to_string()));
    }

    #[test]
    fn test_missing_picture_falls_back() {
        let entry: SymbolEntry = serde_json::from_str(r#"{"en":"Kite","hi":"पतंग"}"#).unwrap();
        assert_eq!(entry.pictogram.as_str(), FALLBACK_GLYPH);
    }

    #[test]
    fn test_unknown_word_type_kept_and_white() {
        let entry: SymbolEntry =
            serde_json::from_str(r#"{"img":"x","en":"A","hi":"B","wordType":"adverb"}"#).unwrap();
        let word_type = entry.word_type.clone().unwrap();
        assert_eq!(word_type, WordType::Other("adverb".to_string()));
        assert_eq!(word_type.color(), DisplayColor::White);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["wordType"], "adverb");
    }

    #[test]
    fn test_serializes_custom_shape() {
        let entry = SymbolEntry::new(Pictogram::Glyph("🥭".into()), "Mango", "आम");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"img": "🥭", "en": "Mango", "hi": "आम", "core": false})
        );
    }

    #[test]
    fn test_typed_entry_uses_same_text() {
        let entry = SymbolEntry::typed("hello there");
        assert_eq!(entry.text(Language::English), "hello there");
        assert_eq!(entry.text(Language::Hindi), "hello there");
        assert_eq!(entry.kind, EntryKind::Typed);
    }

    #[test]
    fn test_category_parse_and_order() {
        assert_eq!("Animals".parse::<Category>().unwrap(), Category::Animals);
        assert!("vehicles".parse::<Category>().is_err());
        assert_eq!(Category::symbol_categories().count(), 15);
        assert_eq!(Category::symbol_categories().next(), Some(Category::Core));
    }

    #[test]
    fn test_language_locale() {
        assert_eq!(Language::English.locale(), "en-US");
        assert_eq!(Language::Hindi.locale(), "hi-IN");
        assert_eq!("hi".parse::<Language>().unwrap(), Language::Hindi);
    }
}
