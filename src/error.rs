// src/error.rs
use std::io;

use thiserror::Error;

use crate::core::types::Category;

/// Failures of the backing key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("could not encode store: {0}")]
    Encode(#[from] bincode::Error),
    #[error("could not replace store file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Everything a board operation can report. None of these are fatal: the
/// front end shows them as a notice and carries on.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Please select symbols first!")]
    EmptySentence,
    #[error("Please fill in both English and Hindi text!")]
    MissingText,
    #[error("index {index} is out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("'{0}' cannot hold symbols")]
    NotASymbolCategory(Category),
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("unknown language '{0}'")]
    UnknownLanguage(String),
    #[error("unknown command '{0}' (type 'help')")]
    UnknownCommand(String),
    #[error("card {0} is a built-in symbol and cannot be deleted")]
    NotCustom(usize),
    #[error("no symbol is being added")]
    NoActiveDraft,
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
    #[error("could not encode symbols: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failures reading or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("could not encode config: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("could not replace config file: {0}")]
    Persist(#[from] tempfile::PersistError),
}
