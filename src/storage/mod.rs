//! # Storage Layer
//!
//! Persistence for the task list and user configuration.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Tasks | Pipe-delimited lines | `data/cow.txt` (configurable) |
//! | Config | TOML | `~/.config/cow/config.toml` |
//!
//! ## Key Types
//!
//! - [`TaskStore`] - Loads and saves the task file
//! - [`codec`] - Encodes one task per line
//! - [`Config`] - User configuration

pub mod codec;
mod config;
mod store;

pub use codec::CodecError;
pub use config::{Config, ConfigError, DEFAULT_DATA_FILE};
pub use store::{LoadReport, SkippedLine, TaskStore};
