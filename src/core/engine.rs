use crate::core::builtin::{QUICK_PHRASES_EN, QUICK_PHRASES_HI};
use crate::core::catalog::Catalog;
use crate::core::composer::Composer;
use crate::core::draft::{DraftId, ImageSlot, ImageTicket, SymbolDraft};
use crate::core::keyboard::{self, Key, KeyOutcome};
use crate::core::style::{card_style, search_card_style, strip_style};
use crate::core::types::{Category, Language, SymbolEntry};
use crate::core::view::{BoardSnapshot, BoardStats, Card, StripWord, ViewState, COLOR_CODING_KEY};
use crate::custom::CustomSymbolStore;
use crate::error::BoardError;
use crate::image::{self, ImageLoaded};
use crate::lookup::{filter_by_query, Lookup};
use crate::persistence::{FileStore, KeyValueStore};
use crate::speech::{voice_test_phrase, SpeechDispatcher, SpeechOutput, VoiceSettings};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::{debug, info, warn};

/// Result of saving the add-symbol form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Added { category: Category, index: usize },
    /// The picture is still loading; the symbol is stored once it arrives.
    AwaitingImage,
}

// The board owns every piece of state; each operation runs to completion
// before the next one starts.
pub struct AacBoard {
    catalog: Catalog,
    custom: CustomSymbolStore,
    composer: Composer,
    view: ViewState,
    speech: SpeechDispatcher,
    storage: Box<dyn KeyValueStore>,
    draft: Option<SymbolDraft>,
    next_draft: u64,
    next_image: u64,
    image_tx: Sender<ImageLoaded>,
    image_rx: Receiver<ImageLoaded>,
}

impl AacBoard {
    /// Runs the startup load: custom symbols and the color-coding preference
    /// are restored before anything is shown.
    pub fn new(
        catalog: Catalog,
        storage: Box<dyn KeyValueStore>,
        output: Box<dyn SpeechOutput>,
        settings: VoiceSettings,
    ) -> Self {
        let custom = CustomSymbolStore::load(&*storage);
        let color_coding = storage.get(COLOR_CODING_KEY).as_deref() == Some("true");
        let (image_tx, image_rx) = mpsc::channel();
        debug!(custom = custom.len(), color_coding, "board loaded");

        Self {
            catalog,
            custom,
            composer: Composer::new(),
            view: ViewState {
                color_coding,
                ..ViewState::default()
            },
            speech: SpeechDispatcher::new(output, settings),
            storage,
            draft: None,
            next_draft: 0,
            next_image: 0,
            image_tx,
            image_rx,
        }
    }

    /// Built-in catalog over a store file at `path`.
    pub fn from_file_or_new(path: &Path, output: Box<dyn SpeechOutput>, settings: VoiceSettings) -> Self {
        Self::new(
            Catalog::builtin(),
            Box::new(FileStore::open(path)),
            output,
            settings,
        )
    }

    // ---- read side -------------------------------------------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn custom_symbols(&self) -> &CustomSymbolStore {
        &self.custom
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn voice_settings(&self) -> VoiceSettings {
        self.speech.settings()
    }

    pub fn draft(&self) -> Option<&SymbolDraft> {
        self.draft.as_ref()
    }

    pub fn lookup(&self) -> Lookup<'_> {
        Lookup::new(&self.catalog, &self.custom)
    }

    pub fn quick_phrases(&self) -> &'static [&'static str] {
        match self.view.language {
            Language::English => QUICK_PHRASES_EN,
            Language::Hindi => QUICK_PHRASES_HI,
        }
    }

    pub fn stats(&self) -> BoardStats {
        BoardStats {
            total_words: self.catalog.total_entries() + self.custom.len(),
            core_words: self.catalog.core_entries() + self.custom.core_entries(),
            categories: Category::symbol_categories().count(),
        }
    }

    /// The grid as it should be drawn right now: search results across all
    /// categories while a query is active, else the active category, else
    /// nothing on the keyboard.
    pub fn visible_cards(&self) -> Vec<Card> {
        let language = self.view.language;
        let color_coding = self.view.color_coding;
        let lookup = self.lookup();

        if self.view.category.is_keyboard() {
            return Vec::new();
        }

        if self.view.is_searching() {
            return lookup
                .search_all_categories(&self.view.search_query)
                .into_iter()
                .map(|hit| Card {
                    entry: hit.entry.clone(),
                    text: hit.entry.text(language).to_string(),
                    translation: hit.entry.translation(language).to_string(),
                    category: hit.category,
                    custom_index: None,
                    style: search_card_style(hit.entry),
                    category_label: Some(hit.category.label(language)),
                })
                .collect();
        }

        let category = self.view.category;
        let builtin = lookup.builtin_count(category);
        lookup
            .combined_entries(category)
            .into_iter()
            .enumerate()
            .map(|(position, entry)| Card {
                entry: entry.clone(),
                text: entry.text(language).to_string(),
                translation: entry.translation(language).to_string(),
                category,
                custom_index: position.checked_sub(builtin),
                style: card_style(entry, color_coding),
                category_label: None,
            })
            .collect()
    }

    /// Entries of `category` matching `query` (built-ins then custom).
    pub fn filtered_entries(&self, category: Category, query: &str) -> Vec<&SymbolEntry> {
        filter_by_query(self.lookup().combined_entries(category), query)
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let language = self.view.language;
        let keyboard_rows = self.view.category.is_keyboard().then(|| {
            keyboard::layout(language)
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|label| match Key::from_label(label) {
                            Key::Text(text) => self.view.keyboard.display_label(&text, language),
                            _ => label.to_string(),
                        })
                        .collect()
                })
                .collect()
        });

        BoardSnapshot {
            view: self.view.clone(),
            categories: Category::ALL
                .into_iter()
                .map(|c| (c, c.label(language)))
                .collect(),
            cards: self.visible_cards(),
            sentence: self
                .composer
                .words()
                .iter()
                .map(|word| StripWord {
                    pictogram: word.pictogram.as_str().to_string(),
                    text: word.text(language).to_string(),
                    style: strip_style(word, self.view.color_coding),
                })
                .collect(),
            quick_phrases: self.quick_phrases(),
            keyboard_rows,
            legend_visible: self.view.color_coding,
            voice: self.speech.settings(),
            stats: self.stats(),
        }
    }

    // ---- view transitions ------------------------------------------------

    /// Keeps the sentence and the search query; text is re-derived on the
    /// next snapshot.
    pub fn set_language(&mut self, language: Language) {
        self.view.language = language;
    }

    /// Clears the search query and swaps between grid and keyboard.
    pub fn set_category(&mut self, category: Category) {
        self.view.category = category;
        self.view.search_query.clear();
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.view.search_query = query.to_string();
    }

    /// Flips color coding and saves the preference. Returns the new value.
    pub fn toggle_color_coding(&mut self) -> Result<bool, BoardError> {
        let enabled = !self.view.color_coding;
        self.storage.set(COLOR_CODING_KEY, enabled.to_string())?;
        self.view.color_coding = enabled;
        Ok(enabled)
    }

    pub fn set_voice_settings(&mut self, settings: VoiceSettings) {
        self.speech.set_settings(settings);
    }

    // ---- sentence --------------------------------------------------------

    /// Speaks the entry's text alone and appends it to the sentence.
    pub fn select_entry(&mut self, entry: SymbolEntry) {
        self.speech.speak(entry.text(self.view.language), self.view.language);
        self.composer.append(entry);
    }

    /// Selects the symbol at `index` of a category's combined list.
    pub fn select_symbol(&mut self, category: Category, index: usize) -> Result<(), BoardError> {
        let entries = self.lookup().combined_entries(category);
        let len = entries.len();
        let entry = entries
            .get(index)
            .map(|e| (*e).clone())
            .ok_or(BoardError::IndexOutOfRange { index, len })?;
        self.select_entry(entry);
        Ok(())
    }

    /// Selects the card at `index` of the grid currently on screen.
    pub fn select_card(&mut self, index: usize) -> Result<(), BoardError> {
        let mut cards = self.visible_cards();
        let len = cards.len();
        if index >= len {
            return Err(BoardError::IndexOutOfRange { index, len });
        }
        let card = cards.swap_remove(index);
        self.select_entry(card.entry);
        Ok(())
    }

    /// Speaks a phrase and appends it as one word.
    pub fn add_phrase(&mut self, text: &str) {
        self.speech.speak(text, self.view.language);
        self.composer.append(SymbolEntry::phrase(text));
    }

    pub fn add_quick_phrase(&mut self, index: usize) -> Result<(), BoardError> {
        let phrases = self.quick_phrases();
        let phrase = phrases.get(index).ok_or(BoardError::IndexOutOfRange {
            index,
            len: phrases.len(),
        })?;
        self.add_phrase(phrase);
        Ok(())
    }

    /// Feeds one key to the virtual keyboard. Enter on a non-blank buffer
    /// speaks the text and appends it as a typed word.
    pub fn press_key(&mut self, key: Key) -> KeyOutcome {
        let language = self.view.language;
        let outcome = self.view.keyboard.press(key, language);
        if let KeyOutcome::Submitted(text) = &outcome {
            self.speech.speak(text, language);
            self.composer.append(SymbolEntry::typed(text.as_str()));
        }
        outcome
    }

    pub fn remove_word(&mut self, index: usize) -> Result<SymbolEntry, BoardError> {
        let len = self.composer.len();
        self.composer
            .remove_at(index)
            .ok_or(BoardError::IndexOutOfRange { index, len })
    }

    pub fn remove_last_word(&mut self) -> Option<SymbolEntry> {
        self.composer.remove_last()
    }

    pub fn clear_sentence(&mut self) {
        self.composer.clear();
    }

    /// Speaks the whole sentence as one utterance.
    pub fn speak_sentence(&mut self) -> Result<(), BoardError> {
        if self.composer.is_empty() {
            return Err(BoardError::EmptySentence);
        }
        let text = self.composer.spoken_text(self.view.language);
        self.speech.speak(&text, self.view.language);
        Ok(())
    }

    pub fn speak_text(&mut self, text: &str) {
        self.speech.speak(text, self.view.language);
    }

    pub fn test_voice(&mut self) {
        self.speak_text(voice_test_phrase(self.view.language));
    }

    // ---- custom symbols --------------------------------------------------

    /// Opens the add-symbol form, replacing any unfinished one. The category
    /// defaults to the active one, or core while typing.
    pub fn begin_add_symbol(&mut self, category: Option<Category>) -> DraftId {
        let category = category
            .filter(|c| !c.is_keyboard())
            .unwrap_or(match self.view.category {
                Category::Keyboard => Category::Core,
                active => active,
            });
        self.next_draft += 1;
        let id = DraftId::new(self.next_draft);
        self.draft = Some(SymbolDraft::new(id, category));
        id
    }

    pub fn draft_mut(&mut self) -> Option<&mut SymbolDraft> {
        self.draft.as_mut()
    }

    pub fn cancel_add_symbol(&mut self) {
        if let Some(draft) = self.draft.take() {
            debug!(draft = ?draft.id(), "add-symbol form abandoned");
        }
    }

    /// Starts reading a picture for the open form in the background. A
    /// newer attach supersedes any read still in flight.
    pub fn attach_image(&mut self, path: PathBuf) -> Result<ImageTicket, BoardError> {
        let draft = self.draft.as_mut().ok_or(BoardError::NoActiveDraft)?;
        self.next_image += 1;
        let ticket = ImageTicket {
            draft: draft.id(),
            attempt: self.next_image,
        };
        draft.image = ImageSlot::Loading(ticket.attempt);
        image::spawn_read(ticket, path, self.image_tx.clone());
        Ok(ticket)
    }

    /// Validates and stores the open form. While its picture is still loading
    /// the save is remembered and completed by `poll_images`.
    pub fn save_symbol(&mut self) -> Result<SaveOutcome, BoardError> {
        let draft = self.draft.as_mut().ok_or(BoardError::NoActiveDraft)?;
        draft.validate()?;
        if draft.is_awaiting_image() {
            draft.save_requested = true;
            return Ok(SaveOutcome::AwaitingImage);
        }
        self.commit_draft()
    }

    /// Applies finished image reads. Returns the outcomes of saves that were
    /// waiting on them.
    pub fn poll_images(&mut self) -> Vec<Result<SaveOutcome, BoardError>> {
        let mut outcomes = Vec::new();
        while let Ok(loaded) = self.image_rx.try_recv() {
            if let Some(outcome) = self.handle_image_loaded(loaded) {
                outcomes.push(outcome);
            }
        }
        outcomes
    }

    /// Applies one image completion if it is the latest read of the open
    /// form; stale completions are dropped.
    pub fn handle_image_loaded(&mut self, loaded: ImageLoaded) -> Option<Result<SaveOutcome, BoardError>> {
        let draft = match self.draft.as_mut() {
            Some(draft) if draft.is_waiting_for(loaded.ticket) => draft,
            _ => {
                debug!(ticket = ?loaded.ticket, "ignoring superseded image read");
                return None;
            }
        };
        draft.image = match loaded.result {
            Ok(uri) => ImageSlot::Ready(uri),
            Err(e) => {
                warn!(error = %e, "could not read picture, falling back to emoji");
                ImageSlot::Failed
            }
        };
        let pending = draft.save_requested;
        pending.then(|| self.commit_draft())
    }

    fn commit_draft(&mut self) -> Result<SaveOutcome, BoardError> {
        let draft = self.draft.as_ref().ok_or(BoardError::NoActiveDraft)?;
        let Some(pictogram) = draft.pictogram() else {
            return Ok(SaveOutcome::AwaitingImage);
        };
        let category = draft.category;
        let entry = draft.to_entry(pictogram);

        let index = self.custom.add(&mut *self.storage, category, entry)?;
        self.draft = None;
        self.view.category = category;
        Ok(SaveOutcome::Added { category, index })
    }

    /// Deletes a custom symbol by its index in the custom store.
    pub fn delete_custom_symbol(&mut self, category: Category, index: usize) -> Result<SymbolEntry, BoardError> {
        self.custom.delete_at(&mut *self.storage, category, index)
    }

    /// Deletes the custom symbol shown at grid position `index` of the active
    /// category. Built-in cards cannot be deleted.
    pub fn delete_card(&mut self, index: usize) -> Result<SymbolEntry, BoardError> {
        let cards = self.visible_cards();
        let card = cards.get(index).ok_or(BoardError::IndexOutOfRange {
            index,
            len: cards.len(),
        })?;
        let custom_index = card.custom_index.ok_or(BoardError::NotCustom(index))?;
        let removed = self.delete_custom_symbol(card.category, custom_index)?;
        info!(category = %card.category, custom_index, "deleted from grid");
        Ok(removed)
    }
}
