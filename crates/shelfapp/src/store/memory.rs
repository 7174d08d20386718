use super::mem_backend::MemBackend;
use super::shelf_store::ShelfStore;

pub type InMemoryStore = ShelfStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// A store with the four predefined shelves already in place.
    pub fn new() -> Self {
        ShelfStore::with_backend(MemBackend::with_predefined_shelves())
    }

    /// A store with no shelf rows at all.
    pub fn empty() -> Self {
        ShelfStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Author, Book, CustomShelf, RatingScale, ShelfCategory};
    use crate::store::BookStore;
    use chrono::NaiveDate;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn book(&self, title: &str, category: ShelfCategory) -> Book {
            let shelf = self
                .store
                .find_shelves_matching(category)
                .unwrap()
                .into_iter()
                .next()
                .expect("fixture store has a shelf per category");
            Book::new(title, Author::new("Test", "Author"), shelf)
        }

        pub fn with_book(mut self, title: &str, category: ShelfCategory) -> Self {
            let book = self.book(title, category);
            self.store.save_book(&book).unwrap();
            self
        }

        pub fn with_read_book(
            mut self,
            title: &str,
            pages: Option<u32>,
            finished: Option<NaiveDate>,
        ) -> Self {
            let mut book = self.book(title, ShelfCategory::Read);
            book.number_of_pages = pages;
            book.date_finished_reading = finished;
            self.store.save_book(&book).unwrap();
            self
        }

        pub fn with_rated_book(mut self, title: &str, rating: RatingScale) -> Self {
            let mut book = self.book(title, ShelfCategory::Read);
            book.rating = Some(rating);
            self.store.save_book(&book).unwrap();
            self
        }

        pub fn with_custom_shelf(mut self, name: &str) -> Self {
            self.store.save_custom_shelf(&CustomShelf::new(name)).unwrap();
            self
        }
    }
}
