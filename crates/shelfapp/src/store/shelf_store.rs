use super::backend::StorageBackend;
use super::BookStore;
use crate::error::{Result, ShelfError};
use crate::model::{Book, CustomShelf, PredefinedShelf, ReadingGoal, ShelfCategory};
use log::debug;
use std::path::PathBuf;
use uuid::Uuid;

pub struct ShelfStore<B: StorageBackend> {
    /// The underlying storage backend.
    pub(crate) backend: B,
}

impl<B: StorageBackend> ShelfStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }

    /// Creates a predefined shelf row for every category that has none.
    /// Returns how many rows were added.
    pub fn seed_predefined_shelves(&mut self) -> Result<usize> {
        let mut shelves = self.backend.load_predefined_shelves()?;
        let missing: Vec<ShelfCategory> = ShelfCategory::ALL
            .into_iter()
            .filter(|c| !shelves.iter().any(|s| s.category == *c))
            .collect();
        if missing.is_empty() {
            return Ok(0);
        }
        for category in &missing {
            shelves.push(PredefinedShelf::new(*category));
        }
        self.backend.save_predefined_shelves(&shelves)?;
        debug!("Seeded {} predefined shelves", missing.len());
        Ok(missing.len())
    }

    /// Appends a predefined shelf row as-is, without checking for an existing
    /// row of the same category.
    pub fn add_predefined_shelf(&mut self, shelf: PredefinedShelf) -> Result<()> {
        let mut shelves = self.backend.load_predefined_shelves()?;
        shelves.push(shelf);
        self.backend.save_predefined_shelves(&shelves)
    }

    /// Removes every predefined shelf row with `category`.
    pub fn remove_predefined_shelves(&mut self, category: ShelfCategory) -> Result<usize> {
        let mut shelves = self.backend.load_predefined_shelves()?;
        let before = shelves.len();
        shelves.retain(|s| s.category != category);
        let removed = before - shelves.len();
        if removed > 0 {
            self.backend.save_predefined_shelves(&shelves)?;
        }
        Ok(removed)
    }
}

impl<B: StorageBackend> BookStore for ShelfStore<B> {
    fn list_books(&self) -> Result<Vec<Book>> {
        self.backend.load_books()
    }

    fn find_books_by_shelf_category(&self, category: ShelfCategory) -> Result<Vec<Book>> {
        Ok(self
            .backend
            .load_books()?
            .into_iter()
            .filter(|b| b.category() == category)
            .collect())
    }

    fn get_book(&self, id: &Uuid) -> Result<Book> {
        self.backend
            .load_books()?
            .into_iter()
            .find(|b| b.id == *id)
            .ok_or(ShelfError::BookNotFound(*id))
    }

    fn save_book(&mut self, book: &Book) -> Result<Book> {
        let mut books = self.backend.load_books()?;
        match books.iter_mut().find(|b| b.id == book.id) {
            Some(existing) => *existing = book.clone(),
            None => books.push(book.clone()),
        }
        self.backend.save_books(&books)?;
        Ok(book.clone())
    }

    fn delete_book(&mut self, id: &Uuid) -> Result<()> {
        let mut books = self.backend.load_books()?;
        let before = books.len();
        books.retain(|b| b.id != *id);
        if books.len() == before {
            return Err(ShelfError::BookNotFound(*id));
        }
        self.backend.save_books(&books)
    }

    fn find_shelves_matching(&self, category: ShelfCategory) -> Result<Vec<PredefinedShelf>> {
        Ok(self
            .backend
            .load_predefined_shelves()?
            .into_iter()
            .filter(|s| s.category == category)
            .collect())
    }

    fn find_custom_shelves_by_name(&self, name: &str) -> Result<Vec<CustomShelf>> {
        let name = name.trim();
        Ok(self
            .backend
            .load_custom_shelves()?
            .into_iter()
            .filter(|s| s.name.trim().eq_ignore_ascii_case(name))
            .collect())
    }

    fn list_custom_shelves(&self) -> Result<Vec<CustomShelf>> {
        self.backend.load_custom_shelves()
    }

    fn save_custom_shelf(&mut self, shelf: &CustomShelf) -> Result<()> {
        let mut shelves = self.backend.load_custom_shelves()?;
        match shelves.iter_mut().find(|s| s.id == shelf.id) {
            Some(existing) => *existing = shelf.clone(),
            None => shelves.push(shelf.clone()),
        }
        self.backend.save_custom_shelves(&shelves)
    }

    fn reading_goal(&self) -> Result<Option<ReadingGoal>> {
        self.backend.load_goal()
    }

    fn save_reading_goal(&mut self, goal: &ReadingGoal) -> Result<()> {
        self.backend.save_goal(Some(goal))
    }

    fn delete_reading_goal(&mut self) -> Result<bool> {
        let existed = self.backend.load_goal()?.is_some();
        if existed {
            self.backend.save_goal(None)?;
        }
        Ok(existed)
    }
}
