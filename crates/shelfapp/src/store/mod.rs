//! # Storage Layer
//!
//! The [`BookStore`] trait is the repository seam between the form workflow and
//! wherever books actually live. Commands only ever talk to `BookStore`.
//!
//! ## Layers
//!
//! - [`backend::StorageBackend`]: raw load/save of whole collections.
//! - [`shelf_store::ShelfStore`]: the `BookStore` logic on top of any backend
//!   (upserts that keep insertion order, shelf lookups, goal overwrite, seeding).
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON files on disk.
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! ├── books.json           # every book, in insertion order
//! ├── shelves.json         # predefined shelf rows
//! ├── custom_shelves.json  # user-created shelves
//! ├── goal.json            # the reading goal, absent when unset
//! └── shelfapp.toml        # optional configuration
//! ```
//!
//! ## Shelf rows
//!
//! Predefined shelves are stored rows, not just enum values. A healthy store
//! holds exactly one row per [`ShelfCategory`]; the save command treats zero
//! or several matching rows as a data-integrity problem and refuses to move a
//! book onto that shelf.

use crate::error::Result;
use crate::model::{Book, CustomShelf, PredefinedShelf, ReadingGoal, ShelfCategory};
use uuid::Uuid;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod shelf_store;

/// Abstract interface for book, shelf and goal storage.
pub trait BookStore {
    /// All books, in insertion order.
    fn list_books(&self) -> Result<Vec<Book>>;

    /// Books whose predefined shelf has `category`, in insertion order.
    fn find_books_by_shelf_category(&self, category: ShelfCategory) -> Result<Vec<Book>>;

    fn get_book(&self, id: &Uuid) -> Result<Book>;

    /// Create or update a book. Returns the stored value.
    fn save_book(&mut self, book: &Book) -> Result<Book>;

    fn delete_book(&mut self, id: &Uuid) -> Result<()>;

    /// Every predefined shelf row with `category`.
    fn find_shelves_matching(&self, category: ShelfCategory) -> Result<Vec<PredefinedShelf>>;

    /// Custom shelves whose name equals `name` (case-insensitive).
    fn find_custom_shelves_by_name(&self, name: &str) -> Result<Vec<CustomShelf>>;

    fn list_custom_shelves(&self) -> Result<Vec<CustomShelf>>;

    fn save_custom_shelf(&mut self, shelf: &CustomShelf) -> Result<()>;

    fn reading_goal(&self) -> Result<Option<ReadingGoal>>;

    /// Stores `goal`, replacing the previous one.
    fn save_reading_goal(&mut self, goal: &ReadingGoal) -> Result<()>;

    /// Removes the goal. Returns whether one existed.
    fn delete_reading_goal(&mut self) -> Result<bool>;
}
