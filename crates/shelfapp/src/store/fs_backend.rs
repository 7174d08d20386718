use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use crate::model::{Book, CustomShelf, PredefinedShelf, ReadingGoal};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

const BOOKS_FILE: &str = "books.json";
const SHELVES_FILE: &str = "shelves.json";
const CUSTOM_SHELVES_FILE: &str = "custom_shelves.json";
const GOAL_FILE: &str = "goal.json";

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ShelfError::Io)?;
        }
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(&self, file_name: &str) -> Result<Option<T>> {
        let path = self.root.join(file_name);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(ShelfError::Io)?;
        let value = serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(Some(value))
    }

    fn write_json<T: Serialize + ?Sized>(&self, file_name: &str, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(value).map_err(ShelfError::Serialization)?;

        // Atomic write
        let stem = file_name.trim_end_matches(".json");
        let tmp_file = self.root.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(ShelfError::Io)?;
        if let Err(err) = fs::rename(&tmp_file, self.root.join(file_name)) {
            let _ = fs::remove_file(&tmp_file);
            return Err(ShelfError::Io(err));
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_books(&self) -> Result<Vec<Book>> {
        Ok(self.read_json(BOOKS_FILE)?.unwrap_or_default())
    }

    fn save_books(&self, books: &[Book]) -> Result<()> {
        self.write_json(BOOKS_FILE, books)
    }

    fn load_predefined_shelves(&self) -> Result<Vec<PredefinedShelf>> {
        Ok(self.read_json(SHELVES_FILE)?.unwrap_or_default())
    }

    fn save_predefined_shelves(&self, shelves: &[PredefinedShelf]) -> Result<()> {
        self.write_json(SHELVES_FILE, shelves)
    }

    fn load_custom_shelves(&self) -> Result<Vec<CustomShelf>> {
        Ok(self.read_json(CUSTOM_SHELVES_FILE)?.unwrap_or_default())
    }

    fn save_custom_shelves(&self, shelves: &[CustomShelf]) -> Result<()> {
        self.write_json(CUSTOM_SHELVES_FILE, shelves)
    }

    fn load_goal(&self) -> Result<Option<ReadingGoal>> {
        self.read_json(GOAL_FILE)
    }

    fn save_goal(&self, goal: Option<&ReadingGoal>) -> Result<()> {
        match goal {
            Some(goal) => self.write_json(GOAL_FILE, goal),
            None => {
                let path = self.root.join(GOAL_FILE);
                if path.exists() {
                    fs::remove_file(path).map_err(ShelfError::Io)?;
                }
                Ok(())
            }
        }
    }

    fn location(&self) -> PathBuf {
        self.root.clone()
    }
}
