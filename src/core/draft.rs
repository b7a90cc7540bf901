// src/core/draft.rs
use crate::core::types::{Category, Pictogram, SymbolEntry};
use crate::error::BoardError;

/// Identifies one pass through the add-symbol form. Image completions carry
/// it so that results for an abandoned form can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DraftId(u64);

impl DraftId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// One picture read for one form. Attaching again to the same form starts a
/// new attempt, and completions of earlier attempts are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageTicket {
    pub draft: DraftId,
    pub attempt: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSlot {
    Empty,
    /// Waiting on the read with this attempt number.
    Loading(u64),
    Ready(String),
    Failed,
}

/// The add-symbol form while it is being filled in.
#[derive(Debug, Clone)]
pub struct SymbolDraft {
    id: DraftId,
    pub category: Category,
    pub en: String,
    pub hi: String,
    pub emoji: String,
    pub core: bool,
    pub(crate) image: ImageSlot,
    pub(crate) save_requested: bool,
}

impl SymbolDraft {
    pub(crate) fn new(id: DraftId, category: Category) -> Self {
        Self {
            id,
            category,
            en: String::new(),
            hi: String::new(),
            emoji: String::new(),
            core: false,
            image: ImageSlot::Empty,
            save_requested: false,
        }
    }

    pub fn id(&self) -> DraftId {
        self.id
    }

    pub fn image(&self) -> &ImageSlot {
        &self.image
    }

    pub fn is_awaiting_image(&self) -> bool {
        matches!(self.image, ImageSlot::Loading(_))
    }

    /// True only for the most recent read started for this form.
    pub fn is_waiting_for(&self, ticket: ImageTicket) -> bool {
        self.id == ticket.draft && self.image == ImageSlot::Loading(ticket.attempt)
    }

    /// Both texts are required; whitespace alone does not count.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.en.trim().is_empty() || self.hi.trim().is_empty() {
            return Err(BoardError::MissingText);
        }
        Ok(())
    }

    /// Picture to store: the uploaded image, else the typed emoji, else the
    /// fallback glyph. `None` while the image is still loading.
    pub fn pictogram(&self) -> Option<Pictogram> {
        match &self.image {
            ImageSlot::Loading(_) => None,
            ImageSlot::Ready(uri) => Some(Pictogram::DataUri(uri.clone())),
            ImageSlot::Empty | ImageSlot::Failed => {
                let emoji = self.emoji.trim();
                Some(if emoji.is_empty() {
                    Pictogram::default()
                } else {
                    Pictogram::from_reference(emoji)
                })
            }
        }
    }

    pub(crate) fn to_entry(&self, pictogram: Pictogram) -> SymbolEntry {
        SymbolEntry::new(pictogram, self.en.trim(), self.hi.trim()).with_core(self.core)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::FALLBACK_GLYPH;

    fn filled() -> SymbolDraft {
        let mut draft = SymbolDraft::new(DraftId::new(1), Category::Food);
        draft.en = " Mango ".into();
        draft.hi = "आम".into();
        draft
    }

    #[test]
    fn test_requires_both_texts() {
        let mut draft = filled();
        assert!(draft.validate().is_ok());
        draft.hi = "   ".into();
        assert!(matches!(draft.validate(), Err(BoardError::MissingText)));
    }

    #[test]
    fn test_pictogram_priority() {
        let mut draft = filled();
        assert_eq!(draft.pictogram().unwrap().as_str(), FALLBACK_GLYPH);

        draft.emoji = "🥭".into();
        assert_eq!(draft.pictogram(), Some(Pictogram::Glyph("🥭".into())));

        draft.image = ImageSlot::Loading(1);
        assert_eq!(draft.pictogram(), None);

        draft.image = ImageSlot::Ready("data:image/png;base64,AA".into());
        assert!(draft.pictogram().unwrap().is_image());

        draft.image = ImageSlot::Failed;
        assert_eq!(draft.pictogram(), Some(Pictogram::Glyph("🥭".into())));
    }

    #[test]
    fn test_only_latest_attempt_is_awaited() {
        let mut draft = filled();
        draft.image = ImageSlot::Loading(2);
        let ticket = |attempt| ImageTicket { draft: DraftId::new(1), attempt };
        assert!(draft.is_waiting_for(ticket(2)));
        assert!(!draft.is_waiting_for(ticket(1)));
        assert!(!draft.is_waiting_for(ImageTicket { draft: DraftId::new(9), attempt: 2 }));
    }

    #[test]
    fn test_entry_text_is_trimmed() {
        let entry = filled().to_entry(Pictogram::default());
        assert_eq!(entry.en, "Mango");
        assert!(!entry.core);
    }
}
