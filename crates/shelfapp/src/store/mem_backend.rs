use super::backend::StorageBackend;
use crate::error::{Result, ShelfError};
use crate::model::{Book, CustomShelf, PredefinedShelf, ReadingGoal, ShelfCategory};
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since shelfapp is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    books: RefCell<Vec<Book>>,
    shelves: RefCell<Vec<PredefinedShelf>>,
    custom_shelves: RefCell<Vec<CustomShelf>>,
    goal: RefCell<Option<ReadingGoal>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds one predefined shelf row per category.
    pub fn with_predefined_shelves() -> Self {
        let backend = Self::default();
        *backend.shelves.borrow_mut() = ShelfCategory::ALL
            .into_iter()
            .map(PredefinedShelf::new)
            .collect();
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    fn check_writable(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ShelfError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn load_books(&self) -> Result<Vec<Book>> {
        Ok(self.books.borrow().clone())
    }

    fn save_books(&self, books: &[Book]) -> Result<()> {
        self.check_writable()?;
        *self.books.borrow_mut() = books.to_vec();
        Ok(())
    }

    fn load_predefined_shelves(&self) -> Result<Vec<PredefinedShelf>> {
        Ok(self.shelves.borrow().clone())
    }

    fn save_predefined_shelves(&self, shelves: &[PredefinedShelf]) -> Result<()> {
        self.check_writable()?;
        *self.shelves.borrow_mut() = shelves.to_vec();
        Ok(())
    }

    fn load_custom_shelves(&self) -> Result<Vec<CustomShelf>> {
        Ok(self.custom_shelves.borrow().clone())
    }

    fn save_custom_shelves(&self, shelves: &[CustomShelf]) -> Result<()> {
        self.check_writable()?;
        *self.custom_shelves.borrow_mut() = shelves.to_vec();
        Ok(())
    }

    fn load_goal(&self) -> Result<Option<ReadingGoal>> {
        Ok(self.goal.borrow().clone())
    }

    fn save_goal(&self, goal: Option<&ReadingGoal>) -> Result<()> {
        self.check_writable()?;
        *self.goal.borrow_mut() = goal.cloned();
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://shelfapp")
    }
}
