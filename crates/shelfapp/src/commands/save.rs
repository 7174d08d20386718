//! Saving the book form.
//!
//! 1. Validate every field. Any error aborts before the store is touched.
//! 2. No bound book: build a new one from the form values.
//!    Bound book: move a copy onto the chosen shelf and apply the edits.
//! 3. Either way the chosen category must resolve to exactly one predefined
//!    shelf row. Zero or several rows is a data-integrity problem; the bound
//!    book is left as it was and nothing is written.
//! 4. Write the book with the final category's reset fields dropped. A failed
//!    store read or write leaves the form open with its values.
//! 5. On success, clear the same fields on the form and close it.

use crate::commands::{CmdMessage, CmdResult, SAVE_FAILED};
use crate::error::{Result, ShelfError};
use crate::form::BookForm;
use crate::model::{truncate_title, Book, CustomShelf, PredefinedShelf, ShelfCategory};
use crate::store::BookStore;
use chrono::NaiveDate;
use log::{error, info, warn};

pub fn run<S: BookStore>(
    store: &mut S,
    form: &mut BookForm,
    today: NaiveDate,
    title_width: usize,
) -> Result<CmdResult> {
    if let Err(errors) = form.validate(today) {
        error!("Book form is invalid, not saving: {}", errors);
        return Err(ShelfError::Validation(errors));
    }

    let values = form.values_to_save();
    let (_, _, category) = values.required_parts()?;
    let shelf = resolve_shelf(store, category)?;
    let mut result = CmdResult::default();

    let mut book = match form.bound_book() {
        Some(bound) => {
            let mut book = bound.clone();
            book.predefined_shelf = shelf;
            book
        }
        None => {
            let (title, author, _) = values.required_parts()?;
            Book::new(title, author, shelf)
        }
    };
    values.apply_to(&mut book)?;
    book.custom_shelf = match values.custom_shelf_name() {
        Some(name) => {
            resolve_custom_shelf(store, &name, book.custom_shelf.as_ref(), &mut result)?
        }
        None => None,
    };

    let saved = store.save_book(&book).map_err(save_failed)?;
    info!("Saved book {} on {}", saved.id, saved.category());

    result.add_message(CmdMessage::success(format!(
        "Saved {}",
        truncate_title(&saved.title, title_width)
    )));
    form.complete_save(saved.clone());
    Ok(result.with_affected_books(vec![saved]))
}

fn save_failed(err: ShelfError) -> ShelfError {
    error!("Could not save book: {}", err);
    ShelfError::Persistence(SAVE_FAILED.to_string())
}

/// The single predefined shelf row for `category`.
pub fn resolve_shelf<S: BookStore>(store: &S, category: ShelfCategory) -> Result<PredefinedShelf> {
    let mut shelves = store.find_shelves_matching(category).map_err(save_failed)?;
    if shelves.len() != 1 {
        warn!(
            "Expected one {} shelf but found {}; leaving the book where it is",
            category,
            shelves.len()
        );
        return Err(ShelfError::DataIntegrity {
            category,
            found: shelves.len(),
        });
    }
    Ok(shelves.remove(0))
}

/// Looks up the custom shelf called `name`. Only an unambiguous match is
/// attached; otherwise a warning goes into `result`. A book that already sits
/// on a shelf with that name keeps it.
fn resolve_custom_shelf<S: BookStore>(
    store: &S,
    name: &str,
    current: Option<&CustomShelf>,
    result: &mut CmdResult,
) -> Result<Option<CustomShelf>> {
    if let Some(current) = current {
        if current.name.trim().eq_ignore_ascii_case(name) {
            return Ok(Some(current.clone()));
        }
    }
    let mut matches = store.find_custom_shelves_by_name(name).map_err(save_failed)?;
    if matches.len() == 1 {
        return Ok(Some(matches.remove(0)));
    }
    warn!(
        "Expected one custom shelf named '{}' but found {}; not attaching it",
        name,
        matches.len()
    );
    result.add_message(CmdMessage::warning(format!(
        "No single shelf named {}; saved without it",
        name
    )));
    Ok(None)
}
