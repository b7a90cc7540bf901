use aac_core::config::{self, BoardConfig, SpeechBackend};
use aac_core::core::keyboard::{Key, KeyOutcome};
use aac_core::core::style::{CardStyle, DisplayColor, StripStyle, LEGEND};
use aac_core::core::view::{BoardSnapshot, Card};
use aac_core::speech::{CommandSpeech, ConsoleSpeech, SpeechOutput, VoiceSettings};
use aac_core::{AacBoard, BoardError, Category, Language, SaveOutcome};
use crossterm::style::{Color, StyledContent, Stylize};
use std::error::Error;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Commands:
  <n>               pick card n (speaks it and adds it to the sentence)
  lang en|hi        switch language          cat <name>     open a category
  find <text>       search every category    find           clear the search
  speak             speak the sentence       phrase <n>     add quick phrase n
  rm <n>            remove word n            back           remove the last word
  clear             clear the sentence       colors         toggle color coding
  key <label>       press a keyboard key     type <text>    type text on the keyboard
  space | bksp | shift | enter               keyboard controls
  voice rate|pitch|volume <x>                voice test
  add               add a custom symbol      del <n>        delete custom card n
  stats             word counts              json           dump the board as JSON
  help              this text                exit           quit";

fn main() -> Result<(), Box<dyn Error>> {
    let config_path = config::config_path();
    let config = BoardConfig::load_or_init(&config_path).unwrap_or_else(|e| {
        eprintln!("[WARN] Could not write default config: {}", e);
        BoardConfig::default()
    });

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output: Box<dyn SpeechOutput> = match config.speech {
        SpeechBackend::Console => Box::new(ConsoleSpeech),
        SpeechBackend::Command => Box::new(CommandSpeech::new(config.speech_program.clone())),
    };
    let mut board = AacBoard::from_file_or_new(&config.store_path, output, config.voice);
    board.set_language(config.language);
    let mut notice = String::from("Type 'help' for commands.");

    loop {
        for outcome in board.poll_images() {
            notice = match outcome {
                Ok(outcome) => describe_save(&outcome),
                Err(e) => e.to_string(),
            };
        }
        print_ui(&board.snapshot(), &notice)?;
        notice.clear();

        let Some(input) = read_line("> ")? else { break };
        let (cmd, arg) = match input.split_once(' ') {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (input.as_str(), ""),
        };

        let result: Result<Option<String>, BoardError> = match cmd {
            "" => Ok(None),
            "exit" | "quit" => break,
            "help" => Ok(Some(HELP.to_string())),
            "lang" => arg.parse::<Language>().map(|language| {
                board.set_language(language);
                None
            }),
            "cat" => arg.parse::<Category>().map(|category| {
                board.set_category(category);
                None
            }),
            "find" => {
                board.set_search_query(arg);
                Ok(None)
            }
            "speak" => board.speak_sentence().map(|_| None),
            "phrase" => parse_position(arg).and_then(|i| board.add_quick_phrase(i)).map(|_| None),
            "rm" => parse_position(arg)
                .and_then(|i| board.remove_word(i))
                .map(|word| Some(format!("Removed '{}'", word.en))),
            "back" => Ok(board.remove_last_word().map(|word| format!("Removed '{}'", word.en))),
            "clear" => {
                board.clear_sentence();
                Ok(None)
            }
            "colors" => board
                .toggle_color_coding()
                .map(|on| Some(format!("Color coding {}", if on { "on" } else { "off" }))),
            "key" => Ok(press(&mut board, Key::from_label(arg))),
            "type" => {
                for ch in arg.chars() {
                    let key = if ch == ' ' { Key::Space } else { Key::Text(ch.to_string()) };
                    board.press_key(key);
                }
                Ok(None)
            }
            "space" => Ok(press(&mut board, Key::Space)),
            "bksp" => Ok(press(&mut board, Key::Backspace)),
            "shift" => Ok(press(&mut board, Key::Shift)),
            "enter" => Ok(press(&mut board, Key::Enter)),
            "voice" => voice_command(&mut board, arg),
            "add" => Ok(add_symbol(&mut board).unwrap_or_else(|e| Some(form_read_failure(&mut board, &e)))),
            "del" => delete_card(&mut board, arg),
            "stats" => {
                let stats = board.stats();
                Ok(Some(format!(
                    "{} words, {} core words, {} categories",
                    stats.total_words, stats.core_words, stats.categories
                )))
            }
            "json" => serde_json::to_string_pretty(&board.snapshot())
                .map(Some)
                .map_err(BoardError::from),
            n => parse_position(n)
                .and_then(|i| board.select_card(i))
                .map(|_| None),
        };

        match result {
            Ok(Some(message)) => notice = message,
            Ok(None) => {}
            Err(e) => notice = e.to_string(),
        }
    }

    println!("\nGoodbye.");
    Ok(())
}

/// Reads one trimmed line; `None` on end of input.
fn read_line(prompt: &str) -> std::io::Result<Option<String>> {
    print!("{}", prompt);
    stdout().flush()?;
    let mut input = String::new();
    if stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Cards, words and phrases are numbered from 1 on screen.
fn parse_position(arg: &str) -> Result<usize, BoardError> {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(BoardError::UnknownCommand(arg.to_string())),
    }
}

fn press(board: &mut AacBoard, key: Key) -> Option<String> {
    match board.press_key(key) {
        KeyOutcome::Submitted(text) => Some(format!("Added '{}'", text)),
        KeyOutcome::Edited | KeyOutcome::Ignored => None,
    }
}

fn voice_command(board: &mut AacBoard, arg: &str) -> Result<Option<String>, BoardError> {
    if arg == "test" {
        board.test_voice();
        return Ok(None);
    }
    let mut settings: VoiceSettings = board.voice_settings();
    let (field, value) = arg.split_once(' ').unwrap_or((arg, ""));
    let Ok(value) = value.trim().parse::<f32>() else {
        return Ok(Some("usage: voice rate|pitch|volume <number> | voice test".to_string()));
    };
    match field {
        "rate" => settings.rate = value.clamp(0.5, 2.0),
        "pitch" => settings.pitch = value.clamp(0.5, 2.0),
        "volume" => settings.volume = value.clamp(0.0, 1.0),
        _ => return Ok(Some(format!("unknown voice setting '{}'", field))),
    }
    board.set_voice_settings(settings);
    Ok(None)
}

fn delete_card(board: &mut AacBoard, arg: &str) -> Result<Option<String>, BoardError> {
    let index = parse_position(arg)?;
    let answer = read_line("Delete this symbol? (y/n) ").ok().flatten().unwrap_or_default();
    if !answer.eq_ignore_ascii_case("y") {
        return Ok(None);
    }
    board
        .delete_card(index)
        .map(|entry| Some(format!("Deleted '{}'", entry.en)))
}

/// Walks the add-symbol form field by field.
fn add_symbol(board: &mut AacBoard) -> std::io::Result<Option<String>> {
    board.begin_add_symbol(None);
    let default_category = board.draft().map(|d| d.category).unwrap_or(Category::Core);

    let category = read_line(&format!("Category [{}]: ", default_category))?.unwrap_or_default();
    let en = read_line("English text: ")?.unwrap_or_default();
    let hi = read_line("Hindi text: ")?.unwrap_or_default();
    let emoji = read_line("Emoji (optional): ")?.unwrap_or_default();
    let image = read_line("Picture file (optional): ")?.unwrap_or_default();
    let core = read_line("Core word? (y/n) ")?.unwrap_or_default();

    let Some(draft) = board.draft_mut() else {
        return Ok(None);
    };
    if let Ok(category) = category.parse::<Category>() {
        if !category.is_keyboard() {
            draft.category = category;
        }
    }
    draft.en = en;
    draft.hi = hi;
    draft.emoji = emoji;
    draft.core = core.eq_ignore_ascii_case("y");

    if !image.is_empty() {
        if let Err(e) = board.attach_image(PathBuf::from(image)) {
            return Ok(Some(e.to_string()));
        }
    }
    Ok(Some(match board.save_symbol() {
        Ok(outcome) => describe_save(&outcome),
        // the form stays open; run 'add' again to start over
        Err(e) => e.to_string(),
    }))
}

/// Terminal input broke off mid-form; the half-filled form is dropped.
fn form_read_failure(board: &mut AacBoard, error: &std::io::Error) -> String {
    board.cancel_add_symbol();
    format!("Could not read the symbol form: {}", error)
}

fn describe_save(outcome: &SaveOutcome) -> String {
    match outcome {
        SaveOutcome::Added { category, .. } => format!("Symbol added to {}", category),
        SaveOutcome::AwaitingImage => "Picture is loading; the symbol is saved once it is ready".to_string(),
    }
}

fn color_of(color: DisplayColor) -> Color {
    match color {
        DisplayColor::Yellow => Color::Yellow,
        DisplayColor::Blue => Color::Blue,
        DisplayColor::Green => Color::Green,
        DisplayColor::Purple => Color::Magenta,
        DisplayColor::Orange => Color::Rgb { r: 255, g: 165, b: 0 },
        DisplayColor::Brown => Color::Rgb { r: 150, g: 90, b: 40 },
        DisplayColor::Red => Color::Red,
        DisplayColor::White => Color::White,
    }
}

fn picture(pictogram: &str) -> &str {
    if pictogram.starts_with("data:") {
        "[img]"
    } else {
        pictogram
    }
}

fn card_line(n: usize, card: &Card) -> String {
    let text: StyledContent<String> = match card.style {
        CardStyle::Colored(color) => card.text.clone().with(color_of(color)),
        CardStyle::CoreBadge => card.text.clone().bold(),
        CardStyle::Plain => card.text.clone().stylize(),
    };
    let mut line = format!(
        "{:>3}. {} {} ({})",
        n,
        picture(card.entry.pictogram.as_str()),
        text,
        card.translation
    );
    if card.style == CardStyle::CoreBadge {
        line.push_str(&format!(" {}", "CORE".black().on_yellow()));
    }
    if let Some(label) = card.category_label {
        line.push_str(&format!(" [{}]", label).dark_grey().to_string());
    }
    if card.custom_index.is_some() {
        line.push_str(" *");
    }
    line
}

fn print_ui(snapshot: &BoardSnapshot, notice: &str) -> std::io::Result<()> {
    let view = &snapshot.view;
    println!("\n{}", "AAC Board".bold());
    println!("---------------------------------------------------------------");
    let tabs: Vec<String> = snapshot
        .categories
        .iter()
        .map(|(category, label)| {
            if *category == view.category {
                format!("[{}]", label).reverse().to_string()
            } else {
                label.to_string()
            }
        })
        .collect();
    println!("{}", tabs.join(" | "));
    println!(
        "Language: {}   Search: '{}'   Rate {:.1} Pitch {:.1} Volume {:.1}",
        view.language.code(),
        view.search_query,
        snapshot.voice.rate,
        snapshot.voice.pitch,
        snapshot.voice.volume
    );

    let sentence: Vec<String> = snapshot
        .sentence
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let text = match word.style {
                StripStyle::Typed => word.text.clone().italic(),
                StripStyle::Core => word.text.clone().bold(),
                StripStyle::Colored(color) => word.text.clone().with(color_of(color)),
                StripStyle::Plain => word.text.clone().stylize(),
            };
            format!("{}:{} {}", i + 1, picture(&word.pictogram), text)
        })
        .collect();
    println!("\nSentence: {}", sentence.join("  "));

    if let Some(rows) = &snapshot.keyboard_rows {
        println!("\nKeyboard: [{}]", view.keyboard.buffer);
        for row in rows {
            println!("  {}", row.join(" "));
        }
    } else {
        println!();
        for (i, card) in snapshot.cards.iter().enumerate() {
            println!("{}", card_line(i + 1, card));
        }
        if snapshot.cards.is_empty() {
            println!("  (no symbols)");
        }
    }

    let phrases: Vec<String> = snapshot
        .quick_phrases
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}:{}", i + 1, p))
        .collect();
    println!("\nQuick phrases: {}", phrases.join("  "));

    if snapshot.legend_visible {
        let legend: Vec<String> = LEGEND
            .iter()
            .map(|(word_type, label)| label.with(color_of(word_type.color())).to_string())
            .collect();
        println!("Legend: {}", legend.join("  "));
    }
    println!(
        "{} words, {} core, {} categories",
        snapshot.stats.total_words, snapshot.stats.core_words, snapshot.stats.categories
    );

    if !notice.is_empty() {
        println!("\n{}", notice);
    }
    stdout().flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aac_core::core::catalog::Catalog;
    use aac_core::persistence::MemoryStore;
    use aac_core::speech::MemorySpeech;
    use std::io;

    #[test]
    fn test_form_read_failure_is_not_a_storage_error() {
        let mut board = AacBoard::new(
            Catalog::builtin(),
            Box::new(MemoryStore::new()),
            Box::new(MemorySpeech::new()),
            VoiceSettings::default(),
        );
        board.begin_add_symbol(None);
        let error = io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed");

        let message = form_read_failure(&mut board, &error);
        assert_eq!(message, "Could not read the symbol form: stdin closed");
        assert!(!message.contains("storage"));
        assert!(board.draft().is_none());
        assert!(board.custom_symbols().is_empty());
    }

    #[test]
    fn test_positions_are_one_based() {
        assert_eq!(parse_position("1").unwrap(), 0);
        assert!(matches!(parse_position("0"), Err(BoardError::UnknownCommand(_))));
    }
}
