use crate::error::Result;
use crate::model::{Book, CustomShelf, PredefinedShelf, ReadingGoal};
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while ShelfStore handles the "what" (lookups, ordering, goal replacement).
///
/// Collections are loaded and saved whole. Book order is insertion order and
/// backends must preserve it.
pub trait StorageBackend {
    // --- Books ---

    fn load_books(&self) -> Result<Vec<Book>>;

    fn save_books(&self, books: &[Book]) -> Result<()>;

    // --- Shelves ---

    fn load_predefined_shelves(&self) -> Result<Vec<PredefinedShelf>>;

    fn save_predefined_shelves(&self, shelves: &[PredefinedShelf]) -> Result<()>;

    fn load_custom_shelves(&self) -> Result<Vec<CustomShelf>>;

    fn save_custom_shelves(&self, shelves: &[CustomShelf]) -> Result<()>;

    // --- Reading goal ---

    /// Returns Ok(None) when no goal has been set.
    fn load_goal(&self) -> Result<Option<ReadingGoal>>;

    /// Stores `goal`, replacing any previous one. `None` removes it.
    fn save_goal(&self, goal: Option<&ReadingGoal>) -> Result<()>;

    /// Where the data lives. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
