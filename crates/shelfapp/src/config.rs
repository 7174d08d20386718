//! # Configuration
//!
//! shelfapp configuration is managed by [`confique`], layered as:
//!
//! 1. **Environment variables**: `SHELFAPP_DATA_DIR`, `SHELFAPP_SEED_SHELVES`
//! 2. **Config file**: `shelfapp.toml` in the data directory
//! 3. **Compiled defaults**: via `#[config(default = ...)]`
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data dir | Where books, shelves and the goal are stored |
//! | `seed_predefined_shelves` | `true` | Create the four predefined shelves on first use |
//! | `title_display_width` | `60` | Titles in messages are cut to this many characters |
//!
//! `data_dir` decides where `shelfapp.toml` is looked up, so in practice it is
//! set through the environment or by the embedding application.

use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "shelfapp.toml";

/// Configuration for shelfapp, stored in `shelfapp.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Directory holding the JSON store.
    #[config(env = "SHELFAPP_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Create missing predefined shelf rows when the store is opened.
    #[config(env = "SHELFAPP_SEED_SHELVES", default = true)]
    pub seed_predefined_shelves: bool,

    /// Width titles are truncated to in user-facing messages.
    #[config(default = 60)]
    pub title_display_width: usize,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            seed_predefined_shelves: true,
            title_display_width: 60,
        }
    }
}

impl ShelfConfig {
    /// Loads configuration from the environment and `dir/shelfapp.toml`.
    /// A missing file is not an error.
    pub fn load(dir: &Path) -> Result<Self> {
        let config = ShelfConfig::builder()
            .env()
            .file(dir.join(CONFIG_FILE_NAME))
            .load()?;
        Ok(config)
    }

    /// Loads configuration from the environment only.
    pub fn from_env() -> Result<Self> {
        Ok(ShelfConfig::builder().env().load()?)
    }
}
