//! # Bootstrapping
//!
//! [`initialize`] wires a ready-to-use [`ShelfApi`] over the JSON file store.
//!
//! ## Data Directory Resolution
//!
//! 1. `data_override`, when given.
//! 2. `SHELFAPP_DATA_DIR` from the environment.
//! 3. The OS data directory for shelfapp (via the `directories` crate), e.g.
//!    `~/.local/share/shelfapp` on Linux.
//!
//! Configuration is then read from `shelfapp.toml` inside that directory, and
//! the store is opened there, seeding the predefined shelves unless
//! `seed_predefined_shelves` is off.

use crate::api::ShelfApi;
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use log::debug;
use std::path::PathBuf;

pub struct ShelfContext {
    pub api: ShelfApi<FileStore>,
    pub config: ShelfConfig,
    pub data_dir: PathBuf,
}

/// The per-user data directory, if the platform has one.
pub fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "shelfapp", "shelfapp").map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = ShelfConfig::from_env()?.data_dir {
        return Ok(path);
    }
    default_data_dir()
        .ok_or_else(|| ShelfError::Store("Could not determine a data directory".to_string()))
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<ShelfContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let mut config = ShelfConfig::load(&data_dir)?;
    config.data_dir = Some(data_dir.clone());
    debug!("Opening book store at {}", data_dir.display());

    let store = FileStore::open(data_dir.clone(), config.seed_predefined_shelves)?;
    let api = ShelfApi::new(store, config.clone());

    Ok(ShelfContext {
        api,
        config,
        data_dir,
    })
}
