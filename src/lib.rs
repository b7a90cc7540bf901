// src/lib.rs

pub mod config;
pub mod core;
pub mod custom;
pub mod error;
pub mod image;
pub mod lookup;
pub mod persistence;
pub mod speech;

pub use crate::core::engine::{AacBoard, SaveOutcome};
pub use crate::core::types::{Category, Language, Pictogram, SymbolEntry, WordType};
pub use crate::error::BoardError;
