// File: src/custom.rs
use crate::core::types::{Category, SymbolEntry};
use crate::error::BoardError;
use crate::persistence::KeyValueStore;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Store key holding the JSON-encoded library.
pub const CUSTOM_SYMBOLS_KEY: &str = "customSymbols";

/// User-added symbols, layered per category on top of the catalog.
/// A category with no symbols has no key at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CustomSymbolStore {
    symbols: BTreeMap<Category, Vec<SymbolEntry>>,
}

impl CustomSymbolStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the library from `store`. Missing or malformed data yields an
    /// empty library; this never fails.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let Some(text) = store.get(CUSTOM_SYMBOLS_KEY) else {
            debug!("no custom symbols saved");
            return Self::new();
        };
        match Self::from_json(&text) {
            Ok(library) => library,
            Err(e) => {
                warn!(error = %e, "saved custom symbols are malformed, ignoring them");
                Self::new()
            }
        }
    }

    /// Parses the persisted mapping. Unknown categories, the keyboard and
    /// empty lists are dropped.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let raw: BTreeMap<String, Vec<SymbolEntry>> = serde_json::from_str(text)?;
        let mut symbols = BTreeMap::new();
        for (key, entries) in raw {
            match key.parse::<Category>() {
                Ok(category) if !category.is_keyboard() && !entries.is_empty() => {
                    symbols.insert(category, entries);
                }
                Ok(_) => {}
                Err(_) => warn!(category = %key, "dropping custom symbols for unknown category"),
            }
        }
        Ok(Self { symbols })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn entries_of(&self, category: Category) -> &[SymbolEntry] {
        self.symbols.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Categories that currently hold custom symbols.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.symbols.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn core_entries(&self) -> usize {
        self.symbols.values().flatten().filter(|e| e.core).count()
    }

    /// Appends `entry` to `category` and writes the whole library back.
    /// Returns the entry's index within the category's custom list.
    pub fn add(
        &mut self,
        store: &mut dyn KeyValueStore,
        category: Category,
        entry: SymbolEntry,
    ) -> Result<usize, BoardError> {
        if category.is_keyboard() {
            return Err(BoardError::NotASymbolCategory(category));
        }
        let list = self.symbols.entry(category).or_default();
        list.push(entry);
        let index = list.len() - 1;

        if let Err(e) = self.persist(store) {
            self.take_at(category, index);
            return Err(e);
        }
        info!(%category, index, "custom symbol added");
        Ok(index)
    }

    /// Removes the custom symbol at `index` in `category` and writes the
    /// whole library back. Confirming with the user is the caller's job.
    pub fn delete_at(
        &mut self,
        store: &mut dyn KeyValueStore,
        category: Category,
        index: usize,
    ) -> Result<SymbolEntry, BoardError> {
        let len = self.entries_of(category).len();
        if index >= len {
            return Err(BoardError::IndexOutOfRange { index, len });
        }
        let removed = self.take_at(category, index);

        if let Err(e) = self.persist(store) {
            self.symbols
                .entry(category)
                .or_default()
                .insert(index, removed);
            return Err(e);
        }
        info!(%category, index, "custom symbol deleted");
        Ok(removed)
    }

    /// Index must be valid. Drops the category key once its list is empty.
    fn take_at(&mut self, category: Category, index: usize) -> SymbolEntry {
        let list = self.symbols.entry(category).or_default();
        let removed = list.remove(index);
        if list.is_empty() {
            self.symbols.remove(&category);
        }
        removed
    }

    fn persist(&self, store: &mut dyn KeyValueStore) -> Result<(), BoardError> {
        let text = self.to_json()?;
        store.set(CUSTOM_SYMBOLS_KEY, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Pictogram;
    use crate::error::StoreError;
    use crate::persistence::MemoryStore;
    use std::io;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&mut self, _key: &str, _value: String) -> Result<(), StoreError> {
            Err(StoreError::Io(io::Error::new(io::ErrorKind::Other, "disk full")))
        }
        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Ok(())
        }
    }

    fn mango() -> SymbolEntry {
        SymbolEntry::new(Pictogram::Glyph("🥭".into()), "Mango", "आम")
    }

    #[test]
    fn test_load_missing_is_empty() {
        let store = MemoryStore::new();
        assert!(CustomSymbolStore::load(&store).is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let mut store = MemoryStore::new();
        store.set(CUSTOM_SYMBOLS_KEY, "{not json".to_string()).unwrap();
        assert!(CustomSymbolStore::load(&store).is_empty());

        store.set(CUSTOM_SYMBOLS_KEY, r#"{"food":[{"img":"x"}]}"#.to_string()).unwrap();
        assert!(CustomSymbolStore::load(&store).is_empty());
    }

    #[test]
    fn test_load_skips_unknown_and_empty_categories() {
        let library = CustomSymbolStore::from_json(
            r#"{"vehicles":[{"img":"🚲","en":"Cycle","hi":"साइकिल"}],
                "keyboard":[{"img":"k","en":"K","hi":"क"}],
                "toys":[],
                "food":[{"img":"🥭","en":"Mango","hi":"आम","core":false}]}"#,
        )
        .unwrap();
        assert_eq!(library.categories().collect::<Vec<_>>(), vec![Category::Food]);
        assert_eq!(library.entries_of(Category::Food)[0].en, "Mango");
    }

    #[test]
    fn test_add_persists_full_mapping() {
        let mut store = MemoryStore::new();
        let mut library = CustomSymbolStore::new();
        let index = library.add(&mut store, Category::Food, mango()).unwrap();
        assert_eq!(index, 0);

        let saved = store.get(CUSTOM_SYMBOLS_KEY).unwrap();
        let json: serde_json::Value = serde_json::from_str(&saved).unwrap();
        assert_eq!(json["food"][0]["en"], "Mango");
        assert_eq!(json["food"][0]["hi"], "आम");
        assert_eq!(CustomSymbolStore::load(&store), library);
    }

    #[test]
    fn test_add_then_delete_round_trips() {
        let mut store = MemoryStore::new();
        let mut library = CustomSymbolStore::new();
        let kite = SymbolEntry::new(Pictogram::Glyph("🪁".into()), "Kite", "पतंग");
        library.add(&mut store, Category::Toys, kite).unwrap();
        let before = library.clone();

        let index = library.add(&mut store, Category::Toys, mango()).unwrap();
        let removed = library.delete_at(&mut store, Category::Toys, index).unwrap();
        assert_eq!(removed, mango());
        assert_eq!(library, before);
    }

    #[test]
    fn test_deleting_last_entry_drops_key() {
        let mut store = MemoryStore::new();
        let mut library = CustomSymbolStore::new();
        library.add(&mut store, Category::Food, mango()).unwrap();
        library.delete_at(&mut store, Category::Food, 0).unwrap();

        let saved = store.get(CUSTOM_SYMBOLS_KEY).unwrap();
        let json: serde_json::Value = serde_json::from_str(&saved).unwrap();
        assert!(json.as_object().unwrap().get("food").is_none());
        assert_eq!(saved, "{}");
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut store = MemoryStore::new();
        let mut library = CustomSymbolStore::new();
        let err = library.delete_at(&mut store, Category::Food, 0).unwrap_err();
        assert!(matches!(err, BoardError::IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn test_keyboard_rejected() {
        let mut store = MemoryStore::new();
        let mut library = CustomSymbolStore::new();
        let err = library.add(&mut store, Category::Keyboard, mango()).unwrap_err();
        assert!(matches!(err, BoardError::NotASymbolCategory(Category::Keyboard)));
        assert!(library.is_empty());
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let mut library = CustomSymbolStore::new();
        let err = library.add(&mut BrokenStore, Category::Food, mango()).unwrap_err();
        assert!(matches!(err, BoardError::Storage(_)));
        assert!(library.is_empty());
    }
}
