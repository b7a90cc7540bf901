// src/core/catalog.rs
use crate::core::builtin::{Rows, TABLES};
use crate::core::types::{Category, Pictogram, SymbolEntry, WordType};
use std::collections::BTreeMap;

/// The fixed, built-in symbol taxonomy. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: BTreeMap<Category, Vec<SymbolEntry>>,
}

impl Catalog {
    /// Builds the shipped board content.
    pub fn builtin() -> Self {
        let tables = TABLES
            .iter()
            .map(|table| {
                let entries: Vec<SymbolEntry> = match table.rows {
                    Rows::Tagged(rows) => rows
                        .iter()
                        .map(|&(glyph, en, hi, tag)| {
                            seed(glyph, en, hi, table.core)
                                .with_word_type(WordType::from(tag.to_string()))
                        })
                        .collect(),
                    Rows::Plain(rows) => rows
                        .iter()
                        .map(|&(glyph, en, hi)| seed(glyph, en, hi, table.core))
                        .collect(),
                };
                (table.category, entries)
            })
            .collect();
        Self { tables }
    }

    /// Builds a catalog from explicit tables. The keyboard category is ignored.
    pub fn from_tables(tables: impl IntoIterator<Item = (Category, Vec<SymbolEntry>)>) -> Self {
        Self {
            tables: tables
                .into_iter()
                .filter(|(category, _)| !category.is_keyboard())
                .collect(),
        }
    }

    /// Built-in entries of a category in display order; empty for the keyboard.
    pub fn entries_of(&self, category: Category) -> &[SymbolEntry] {
        self.tables.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_entries(&self) -> usize {
        self.tables.values().map(Vec::len).sum()
    }

    pub fn core_entries(&self) -> usize {
        self.tables.values().flatten().filter(|e| e.core).count()
    }
}

fn seed(glyph: &str, en: &str, hi: &str, core: bool) -> SymbolEntry {
    SymbolEntry::new(Pictogram::from_reference(glyph), en, hi).with_core(core)
}
