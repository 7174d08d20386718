use crate::commands::{CmdMessage, CmdResult, DELETE_FAILED};
use crate::error::{Result, ShelfError};
use crate::form::BookForm;
use crate::model::truncate_title;
use crate::store::BookStore;
use log::{error, info};

/// Deletes the book bound to `form` and closes the form.
pub fn run<S: BookStore>(store: &mut S, form: &mut BookForm, title_width: usize) -> Result<CmdResult> {
    let book = form
        .bound_book()
        .cloned()
        .ok_or_else(|| ShelfError::Api("No book selected to delete".to_string()))?;

    store.delete_book(&book.id).map_err(|err| match err {
        ShelfError::BookNotFound(_) => err,
        other => {
            error!("Could not delete '{}': {}", book.title, other);
            ShelfError::Persistence(DELETE_FAILED.to_string())
        }
    })?;
    info!("Deleted book {}", book.id);

    form.complete_delete();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted {}",
        truncate_title(&book.title, title_width)
    )));
    Ok(result.with_affected_books(vec![book]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ShelfCategory;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deletes_bound_book() {
        let mut fixture = StoreFixture::new().with_book("Beloved", ShelfCategory::Read);
        let book = fixture.store.list_books().unwrap().remove(0);
        let mut form = BookForm::new();
        form.open_for_edit(book.clone());

        let result = run(&mut fixture.store, &mut form, 60).unwrap();

        assert!(fixture.store.list_books().unwrap().is_empty());
        assert_eq!(result.messages[0].content, "Deleted Beloved");
        assert_eq!(form.bound_book(), None);
        assert!(!form.is_open());
        assert_eq!(form.save_label(), "Add book");
    }

    #[test]
    fn nothing_bound_is_an_error() {
        let mut fixture = StoreFixture::new().with_book("Beloved", ShelfCategory::Read);
        let mut form = BookForm::new();
        form.open_for_add();

        assert!(matches!(
            run(&mut fixture.store, &mut form, 60),
            Err(ShelfError::Api(_))
        ));
        assert_eq!(fixture.store.list_books().unwrap().len(), 1);
    }

    #[test]
    fn write_failure_keeps_book_bound() {
        let mut fixture = StoreFixture::new().with_book("Beloved", ShelfCategory::Read);
        let book = fixture.store.list_books().unwrap().remove(0);
        let mut form = BookForm::new();
        form.open_for_edit(book.clone());
        fixture.store.backend().set_simulate_write_error(true);

        let err = run(&mut fixture.store, &mut form, 60).unwrap_err();

        assert_eq!(err.to_string(), DELETE_FAILED);
        assert_eq!(form.bound_book(), Some(&book));
        assert!(form.is_open());
    }

    #[test]
    fn already_deleted_book_reports_not_found() {
        let mut fixture = StoreFixture::new();
        let book = fixture.book("Ghost", ShelfCategory::ToRead);
        let mut form = BookForm::new();
        form.open_for_edit(book);

        assert!(matches!(
            run(&mut fixture.store, &mut form, 60),
            Err(ShelfError::BookNotFound(_))
        ));
    }
}
