// src/core/mod.rs
pub(crate) mod builtin;
pub mod catalog;
pub mod composer;
pub mod draft;
pub mod engine;
pub mod keyboard;
pub mod style;
pub mod types;
pub mod view;
