// File: src/core/composer.rs
use crate::core::types::{Language, SymbolEntry};

/// The utterance under construction. Lives for the session only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composer {
    words: Vec<SymbolEntry>,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word at the end. There is no length limit.
    pub fn append(&mut self, entry: SymbolEntry) {
        self.words.push(entry);
    }

    /// Removes the word at `index`, shifting later words down by one.
    /// Returns `None` when the index is out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<SymbolEntry> {
        (index < self.words.len()).then(|| self.words.remove(index))
    }

    pub fn remove_last(&mut self) -> Option<SymbolEntry> {
        self.words.pop()
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// The sentence as one utterance: texts joined by single spaces.
    pub fn spoken_text(&self, language: Language) -> String {
        self.words
            .iter()
            .map(|w| w.text(language))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn words(&self) -> &[SymbolEntry] {
        &self.words
    }
}
