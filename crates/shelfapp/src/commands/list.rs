use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ShelfCategory;
use crate::store::BookStore;

/// Books on the `category` shelf, in the order they were added.
pub fn run<S: BookStore>(store: &S, category: ShelfCategory) -> Result<CmdResult> {
    let books = store.find_books_by_shelf_category(category)?;
    let mut result = CmdResult::default();
    if books.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No books on the {} shelf",
            category.display_name()
        )));
    }
    Ok(result.with_listed_books(books))
}

/// Books on the custom shelf called `name`.
pub fn on_custom_shelf<S: BookStore>(store: &S, name: &str) -> Result<CmdResult> {
    let name = name.trim();
    let books = store
        .list_books()?
        .into_iter()
        .filter(|b| {
            b.custom_shelf
                .as_ref()
                .is_some_and(|s| s.name.trim().eq_ignore_ascii_case(name))
        })
        .collect();
    Ok(CmdResult::default().with_listed_books(books))
}

pub fn custom_shelves<S: BookStore>(store: &S) -> Result<CmdResult> {
    let shelves = store.list_custom_shelves()?;
    Ok(CmdResult::default().with_custom_shelves(shelves))
}

/// Every shelf name a book can be filed under: the predefined ones first,
/// then custom shelves.
pub fn shelf_names<S: BookStore>(store: &S) -> Result<Vec<String>> {
    let mut names: Vec<String> = ShelfCategory::ALL
        .iter()
        .map(|c| c.display_name().to_string())
        .collect();
    names.extend(store.list_custom_shelves()?.into_iter().map(|s| s.name));
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CustomShelf;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_books_on_one_shelf() {
        let fixture = StoreFixture::new()
            .with_book("Kindred", ShelfCategory::Reading)
            .with_book("Dawn", ShelfCategory::ToRead)
            .with_book("Wild Seed", ShelfCategory::Reading);

        let result = run(&fixture.store, ShelfCategory::Reading).unwrap();
        let titles: Vec<&str> = result.listed_books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Kindred", "Wild Seed"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn empty_shelf_reports_info() {
        let fixture = StoreFixture::new();
        let result = run(&fixture.store, ShelfCategory::DidNotFinish).unwrap();
        assert!(result.listed_books.is_empty());
        assert_eq!(
            result.messages[0].content,
            "No books on the Did not finish shelf"
        );
    }

    #[test]
    fn lists_books_on_custom_shelf() {
        let mut fixture = StoreFixture::new().with_custom_shelf("Holiday");
        let holiday = fixture.store.list_custom_shelves().unwrap().remove(0);
        let mut book = fixture.book("Beach read", ShelfCategory::ToRead);
        book.custom_shelf = Some(holiday);
        fixture.store.save_book(&book).unwrap();
        let other = fixture.book("Elsewhere", ShelfCategory::ToRead);
        fixture.store.save_book(&other).unwrap();

        let result = on_custom_shelf(&fixture.store, "holiday").unwrap();
        assert_eq!(result.listed_books, vec![book]);
    }

    #[test]
    fn shelf_names_include_custom_shelves() {
        let mut fixture = StoreFixture::new();
        fixture
            .store
            .save_custom_shelf(&CustomShelf::new("Comfort reads"))
            .unwrap();

        let names = shelf_names(&fixture.store).unwrap();
        assert_eq!(
            names,
            vec!["To read", "Reading", "Read", "Did not finish", "Comfort reads"]
        );
        assert_eq!(custom_shelves(&fixture.store).unwrap().custom_shelves.len(), 1);
    }
}
