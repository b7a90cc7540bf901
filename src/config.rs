// File: src/config.rs
use crate::core::types::Language;
use crate::error::ConfigError;
use crate::speech::VoiceSettings;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::warn;

const APP_DIR: &str = "aac-board";
pub const CONFIG_FILE: &str = "config.json";
const STORE_FILE: &str = "board_store.bin";

/// `<config_dir>/aac-board`, or `./.aac-board` when the platform has none.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(".").join(format!(".{APP_DIR}")))
}

pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

fn default_store_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(config_dir)
        .join(STORE_FILE)
}

/// Reads a JSON file, falling back to defaults when it is missing or corrupt.
pub fn load_json_config<T: DeserializeOwned + Default>(path: &Path) -> T {
    if !path.exists() {
        return T::default();
    }
    let content = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read config");
            return T::default();
        }
    };
    match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "corrupt config, using defaults");
            T::default()
        }
    }
}

/// Writes a JSON file atomically: temp file in the same directory, then rename.
pub fn save_json_config<T: Serialize>(path: &Path, config: &T) -> Result<(), ConfigError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let json = serde_json::to_string_pretty(config)?;
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(json.as_bytes())?;
    temp.flush()?;
    temp.persist(path)?;
    Ok(())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechBackend {
    /// Print utterances to stdout.
    #[default]
    Console,
    /// Run `speech_program` for every utterance.
    Command,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub voice: VoiceSettings,
    pub language: Language,
    pub speech: SpeechBackend,
    pub speech_program: String,
    pub store_path: PathBuf,
    pub log_filter: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            voice: VoiceSettings::default(),
            language: Language::English,
            speech: SpeechBackend::Console,
            speech_program: "espeak-ng".to_string(),
            store_path: default_store_path(),
            log_filter: "warn".to_string(),
        }
    }
}

impl BoardConfig {
    pub fn load_from(path: &Path) -> Self {
        load_json_config(path)
    }

    /// Loads the config, writing the defaults out first if there is no file yet.
    pub fn load_or_init(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            return Ok(Self::load_from(path));
        }
        let config = Self::default();
        save_json_config(path, &config)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        save_json_config(path, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BoardConfig::load_from(&dir.path().join("config.json"));
        assert_eq!(config.speech, SpeechBackend::Console);
        assert_eq!(config.speech_program, "espeak-ng");
        assert_eq!(config.log_filter, "warn");
        assert!(config.store_path.ends_with("aac-board/board_store.bin"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"language":"hindi","speech":"command","voice":{"rate":1.2,"pitch":1.0,"volume":0.8}}"#).unwrap();

        let config = BoardConfig::load_from(&path);
        assert_eq!(config.language, Language::Hindi);
        assert_eq!(config.speech, SpeechBackend::Command);
        assert_eq!(config.voice.rate, 1.2);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(BoardConfig::load_from(&path).language, Language::English);
    }

    #[test]
    fn test_load_or_init_writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let first = BoardConfig::load_or_init(&path).unwrap();
        assert!(path.exists());

        let mut edited = first.clone();
        edited.log_filter = "debug".to_string();
        edited.save_to(&path).unwrap();

        let second = BoardConfig::load_or_init(&path).unwrap();
        assert_eq!(second.log_filter, "debug");
        let leftovers = fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 1);
    }
}
