use aac_core::core::keyboard::Key;
use aac_core::core::style::CardStyle;
use aac_core::custom::CUSTOM_SYMBOLS_KEY;
use aac_core::persistence::{FileStore, KeyValueStore};
use aac_core::speech::{MemorySpeech, VoiceSettings};
use aac_core::{AacBoard, BoardError, Category, Language, SaveOutcome};
use std::path::Path;

fn open(path: &Path) -> (AacBoard, MemorySpeech) {
    let speech = MemorySpeech::new();
    let board = AacBoard::from_file_or_new(path, Box::new(speech.clone()), VoiceSettings::default());
    (board, speech)
}

fn add_mango(board: &mut AacBoard) -> SaveOutcome {
    board.begin_add_symbol(Some(Category::Food));
    let draft = board.draft_mut().unwrap();
    draft.en = "Mango".into();
    draft.hi = "आम".into();
    draft.emoji = "🥭".into();
    board.save_symbol().unwrap()
}

#[test]
fn custom_symbol_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board_store.bin");

    let (mut board, _) = open(&path);
    board.set_category(Category::Food);
    assert_eq!(board.visible_cards().len(), 30);
    assert_eq!(add_mango(&mut board), SaveOutcome::Added { category: Category::Food, index: 0 });
    assert_eq!(board.visible_cards().len(), 31);
    drop(board);

    let (mut board, _) = open(&path);
    board.set_category(Category::Food);
    let cards = board.visible_cards();
    assert_eq!(cards.len(), 31);
    assert_eq!(cards[30].text, "Mango");
    assert_eq!(cards[30].translation, "आम");
    assert_eq!(cards[30].entry.pictogram.as_str(), "🥭");
}

#[test]
fn search_for_cat_spans_categories() {
    let dir = tempfile::tempdir().unwrap();
    let (mut board, _) = open(&dir.path().join("store.bin"));
    board.set_search_query("cat");

    let cards = board.visible_cards();
    assert!(!cards.is_empty());
    assert!(cards
        .iter()
        .all(|c| c.entry.en.to_lowercase().contains("cat") || c.entry.hi.to_lowercase().contains("cat")));
    let animals = cards.iter().position(|c| c.category == Category::Animals && c.text == "Cat");
    assert!(animals.is_some());

    // results come category by category in board order
    let order: Vec<Category> = cards.iter().map(|c| c.category).collect();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(order, sorted);
}

#[test]
fn color_coding_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.bin");

    let (mut board, _) = open(&path);
    assert!(!board.view().color_coding);
    assert!(board.toggle_color_coding().unwrap());
    drop(board);

    let (board, _) = open(&path);
    let snapshot = board.snapshot();
    assert!(snapshot.view.color_coding);
    assert!(snapshot.legend_visible);
    assert!(matches!(snapshot.cards[0].style, CardStyle::Colored(_)));
}

#[test]
fn color_coding_restores_last_written_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.bin");

    let (mut board, _) = open(&path);
    assert!(board.toggle_color_coding().unwrap());
    assert!(!board.toggle_color_coding().unwrap());
    drop(board);

    let (board, _) = open(&path);
    assert!(!board.view().color_coding);
    assert!(!board.snapshot().legend_visible);
    assert_eq!(FileStore::open(&path).get("colorCodingEnabled").as_deref(), Some("false"));
}

#[test]
fn deleting_last_custom_symbol_drops_category() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.bin");

    let (mut board, _) = open(&path);
    add_mango(&mut board);
    assert!(matches!(board.delete_card(0), Err(BoardError::NotCustom(0))));
    board.delete_card(30).unwrap();
    assert_eq!(board.visible_cards().len(), 30);
    drop(board);

    let store = FileStore::open(&path);
    assert_eq!(store.get(CUSTOM_SYMBOLS_KEY).as_deref(), Some("{}"));
}

#[test]
fn sentence_is_spoken_as_one_utterance() {
    let dir = tempfile::tempdir().unwrap();
    let (mut board, speech) = open(&dir.path().join("store.bin"));

    board.select_symbol(Category::Core, 0).unwrap();
    board.select_symbol(Category::Core, 8).unwrap();
    board.set_category(Category::Keyboard);
    for ch in ["SHIFT", "t", "e", "a"] {
        board.press_key(Key::from_label(ch));
    }
    board.press_key(Key::Enter);
    board.add_quick_phrase(7).unwrap();
    assert_eq!(board.composer().len(), 4);

    board.speak_sentence().unwrap();
    assert_eq!(speech.last_text().as_deref(), Some("I Want Tea Please"));

    board.remove_word(1).unwrap();
    board.set_language(Language::Hindi);
    board.speak_sentence().unwrap();
    assert_eq!(speech.last_text().as_deref(), Some("मैं Tea Please"));
    assert_eq!(speech.spoken().last().unwrap().lang, "hi-IN");

    board.clear_sentence();
    assert!(matches!(board.speak_sentence(), Err(BoardError::EmptySentence)));
}

#[test]
fn image_attachment_is_embedded() {
    let dir = tempfile::tempdir().unwrap();
    let picture = dir.path().join("kite.png");
    std::fs::write(&picture, b"hi!").unwrap();
    let (mut board, _) = open(&dir.path().join("store.bin"));

    board.begin_add_symbol(Some(Category::Toys));
    {
        let draft = board.draft_mut().unwrap();
        draft.en = "Kite".into();
        draft.hi = "पतंग".into();
    }
    board.attach_image(picture).unwrap();
    assert_eq!(board.save_symbol().unwrap(), SaveOutcome::AwaitingImage);

    let mut outcomes = Vec::new();
    for _ in 0..200 {
        outcomes.extend(board.poll_images());
        if !outcomes.is_empty() {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(10));
    }
    assert_eq!(
        outcomes.pop().unwrap().unwrap(),
        SaveOutcome::Added { category: Category::Toys, index: 0 }
    );
    let entry = &board.custom_symbols().entries_of(Category::Toys)[0];
    assert_eq!(entry.pictogram.as_str(), "data:image/png;base64,aGkh");
}
