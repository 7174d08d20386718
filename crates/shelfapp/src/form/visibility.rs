//! Per-shelf field visibility.
//!
//! | Category | date started | date finished | rating/review | pages read | cleared on save |
//! |----------|--------------|---------------|---------------|------------|-----------------|
//! | To read | hidden | hidden | hidden | hidden | pages read, both dates, rating, review |
//! | Reading | shown | hidden | hidden | hidden | pages read, date finished, rating, review |
//! | Read | shown | shown | shown | hidden | pages read |
//! | Did not finish | shown | hidden | hidden | shown | date finished, rating, review |
//!
//! Every shelf-dependent field is either shown or cleared for a given category,
//! never both. The match arms below are exhaustive over [`ShelfCategory`], so a
//! new category does not compile until it has a row here.

use super::field::{FieldSet, FormField};
use crate::model::ShelfCategory;

/// Fields that are visible regardless of the selected shelf.
pub const BASE_FIELDS: [FormField; 8] = [
    FormField::Title,
    FormField::AuthorFirstName,
    FormField::AuthorLastName,
    FormField::PredefinedShelf,
    FormField::CustomShelf,
    FormField::Genre,
    FormField::NumberOfPages,
    FormField::InSeries,
];

/// Fields whose visibility depends on the selected shelf.
pub const SHELF_DEPENDENT_FIELDS: [FormField; 5] = [
    FormField::DateStarted,
    FormField::DateFinished,
    FormField::Rating,
    FormField::Review,
    FormField::PagesRead,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShelfVisibility {
    pub date_started: bool,
    pub date_finished: bool,
    pub rating_and_review: bool,
    pub pages_read: bool,
}

impl ShelfVisibility {
    /// The shelf-dependent fields this decision shows.
    pub fn shown_fields(&self) -> FieldSet {
        let mut fields = FieldSet::new();
        if self.date_started {
            fields.insert(FormField::DateStarted);
        }
        if self.date_finished {
            fields.insert(FormField::DateFinished);
        }
        if self.rating_and_review {
            fields.insert(FormField::Rating);
            fields.insert(FormField::Review);
        }
        if self.pages_read {
            fields.insert(FormField::PagesRead);
        }
        fields
    }
}

pub fn visibility_for(category: ShelfCategory) -> ShelfVisibility {
    match category {
        ShelfCategory::ToRead => ShelfVisibility {
            date_started: false,
            date_finished: false,
            rating_and_review: false,
            pages_read: false,
        },
        ShelfCategory::Reading => ShelfVisibility {
            date_started: true,
            date_finished: false,
            rating_and_review: false,
            pages_read: false,
        },
        ShelfCategory::Read => ShelfVisibility {
            date_started: true,
            date_finished: true,
            rating_and_review: true,
            pages_read: false,
        },
        ShelfCategory::DidNotFinish => ShelfVisibility {
            date_started: true,
            date_finished: false,
            rating_and_review: false,
            pages_read: true,
        },
    }
}

/// Fields dropped when a book is saved under `category`.
pub fn reset_fields_for(category: ShelfCategory) -> FieldSet {
    match category {
        ShelfCategory::ToRead => FieldSet::from([
            FormField::PagesRead,
            FormField::DateStarted,
            FormField::DateFinished,
            FormField::Rating,
            FormField::Review,
        ]),
        ShelfCategory::Reading => FieldSet::from([
            FormField::PagesRead,
            FormField::DateFinished,
            FormField::Rating,
            FormField::Review,
        ]),
        ShelfCategory::Read => FieldSet::from([FormField::PagesRead]),
        ShelfCategory::DidNotFinish => FieldSet::from([
            FormField::DateFinished,
            FormField::Rating,
            FormField::Review,
        ]),
    }
}

pub fn base_fields() -> FieldSet {
    FieldSet::from(BASE_FIELDS)
}

/// Base fields plus the shelf-dependent fields shown for `category`.
/// The series position is not included; it follows the in-series toggle.
pub fn visible_fields_for(category: ShelfCategory) -> FieldSet {
    base_fields().union(&visibility_for(category).shown_fields())
}
