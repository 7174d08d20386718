use super::fs_backend::FsBackend;
use super::shelf_store::ShelfStore;
use crate::error::Result;
use std::path::PathBuf;

/// Book storage backed by JSON files in a data directory.
pub type FileStore = ShelfStore<FsBackend>;

impl FileStore {
    /// Opens the store at `root`. With `seed` set, any missing predefined
    /// shelf rows are created on the spot.
    pub fn open(root: PathBuf, seed: bool) -> Result<Self> {
        let mut store = ShelfStore::with_backend(FsBackend::new(root));
        if seed {
            store.seed_predefined_shelves()?;
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Author, Book, ShelfCategory};
    use crate::store::BookStore;
    use tempfile::tempdir;

    #[test]
    fn books_survive_reopening() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path().to_path_buf(), true).unwrap();
        let shelf = store
            .find_shelves_matching(ShelfCategory::Reading)
            .unwrap()
            .remove(0);
        let book = Book::new("Middlemarch", Author::new("George", "Eliot"), shelf);
        store.save_book(&book).unwrap();

        let reopened = FileStore::open(dir.path().to_path_buf(), true).unwrap();
        assert_eq!(reopened.get_book(&book.id).unwrap(), book);
        assert_eq!(
            reopened
                .find_shelves_matching(ShelfCategory::Reading)
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn unseeded_store_has_no_shelves() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path().to_path_buf(), false).unwrap();
        assert!(store
            .find_shelves_matching(ShelfCategory::Read)
            .unwrap()
            .is_empty());
        assert_eq!(store.location(), dir.path().to_path_buf());
    }
}
