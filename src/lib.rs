//! Keyboard Shortcuts - shortcut catalogs for third-party apps, replayed
//! through OS-level key injection.
//!
//! Pipeline: catalog source -> validator -> parser -> argument encoder ->
//! injection engine.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod runner;
pub mod shortcuts;
