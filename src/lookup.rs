// File: src/lookup.rs
use crate::core::catalog::Catalog;
use crate::core::types::{Category, SymbolEntry};
use crate::custom::CustomSymbolStore;

/// A search match, tagged with where it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    pub entry: &'a SymbolEntry,
    pub category: Category,
    /// Position within the category's combined list.
    pub position: usize,
}

/// Read-only view resolving categories over the catalog plus the user's
/// custom symbols.
#[derive(Clone, Copy)]
pub struct Lookup<'a> {
    catalog: &'a Catalog,
    custom: &'a CustomSymbolStore,
}

impl<'a> Lookup<'a> {
    pub fn new(catalog: &'a Catalog, custom: &'a CustomSymbolStore) -> Self {
        Self { catalog, custom }
    }

    /// Built-in entries followed by custom ones. Built-ins always come first,
    /// so a custom entry's displayed position minus the built-in count is its
    /// index in the custom store.
    pub fn combined_entries(&self, category: Category) -> Vec<&'a SymbolEntry> {
        self.catalog
            .entries_of(category)
            .iter()
            .chain(self.custom.entries_of(category))
            .collect()
    }

    pub fn builtin_count(&self, category: Category) -> usize {
        self.catalog.entries_of(category).len()
    }

    /// Every real category in declaration order, filtered by `query`, results
    /// concatenated category by category. No ranking.
    pub fn search_all_categories(&self, query: &str) -> Vec<SearchHit<'a>> {
        let needle = query.to_lowercase();
        Category::symbol_categories()
            .flat_map(|category| {
                self.combined_entries(category)
                    .into_iter()
                    .enumerate()
                    .filter(|(_, entry)| needle.is_empty() || entry.matches_lowered(&needle))
                    .map(move |(position, entry)| SearchHit { entry, category, position })
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

/// Case-insensitive substring match against either language's text.
/// An empty query returns `entries` unchanged.
pub fn filter_by_query<'e>(entries: Vec<&'e SymbolEntry>, query: &str) -> Vec<&'e SymbolEntry> {
    if query.is_empty() {
        return entries;
    }
    let needle = query.to_lowercase();
    entries
        .into_iter()
        .filter(|entry| entry.matches_lowered(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Pictogram;
    use crate::persistence::MemoryStore;

    fn entry(en: &str, hi: &str) -> SymbolEntry {
        SymbolEntry::new(Pictogram::Glyph("·".into()), en, hi)
    }

    fn library_with(category: Category, entries: Vec<SymbolEntry>) -> CustomSymbolStore {
        let mut store = MemoryStore::new();
        let mut library = CustomSymbolStore::new();
        for e in entries {
            library.add(&mut store, category, e).unwrap();
        }
        library
    }

    #[test]
    fn test_combined_entries_builtins_first() {
        let catalog = Catalog::builtin();
        let library = library_with(Category::Food, vec![entry("Mango", "आम")]);
        let lookup = Lookup::new(&catalog, &library);

        for category in Category::symbol_categories() {
            let combined = lookup.combined_entries(category);
            let builtin = catalog.entries_of(category);
            assert_eq!(combined.len(), builtin.len() + library.entries_of(category).len());
            for (a, b) in combined.iter().zip(builtin) {
                assert_eq!(*a, b);
            }
        }
        let food = lookup.combined_entries(Category::Food);
        assert_eq!(food.len(), 31);
        assert_eq!(food[30].en, "Mango");
    }

    #[test]
    fn test_keyboard_combined_is_empty() {
        let catalog = Catalog::builtin();
        let library = CustomSymbolStore::new();
        assert!(Lookup::new(&catalog, &library)
            .combined_entries(Category::Keyboard)
            .is_empty());
    }

    #[test]
    fn test_empty_query_is_identity() {
        let items = vec![entry("Apple", "सेब"), entry("Tea", "चाय")];
        let refs: Vec<&SymbolEntry> = items.iter().collect();
        assert_eq!(filter_by_query(refs.clone(), ""), refs);
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let items = vec![entry("Apple", "सेब"), entry("Pineapple", "अनानास"), entry("Tea", "चाय")];
        let refs: Vec<&SymbolEntry> = items.iter().collect();

        let hits = filter_by_query(refs.clone(), "APPLE");
        assert_eq!(hits.iter().map(|e| e.en.as_str()).collect::<Vec<_>>(), ["Apple", "Pineapple"]);

        let hits = filter_by_query(refs, "चा");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].en, "Tea");
    }

    #[test]
    fn test_search_cat_follows_category_order() {
        let catalog = Catalog::builtin();
        let library = CustomSymbolStore::new();
        let hits = Lookup::new(&catalog, &library).search_all_categories("cat");

        let cat = hits
            .iter()
            .position(|h| h.entry.en == "Cat" && h.entry.hi == "बिल्ली")
            .expect("animals should contain Cat");
        assert_eq!(hits[cat].category, Category::Animals);
        assert_eq!(hits[cat].position, 1);

        let order: Vec<usize> = hits
            .iter()
            .map(|h| Category::ALL.iter().position(|c| *c == h.category).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] <= w[1]));
        assert!(hits[..cat].iter().all(|h| h.category <= Category::Animals));
        assert!(hits[cat + 1..].iter().all(|h| h.category >= Category::Animals));
    }

    #[test]
    fn test_search_includes_custom_entries() {
        let catalog = Catalog::builtin();
        let library = library_with(Category::Toys, vec![entry("Catapult", "गुलेल")]);
        let hits = Lookup::new(&catalog, &library).search_all_categories("catap");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, Category::Toys);
        assert_eq!(hits[0].position, catalog.entries_of(Category::Toys).len());
    }
}
