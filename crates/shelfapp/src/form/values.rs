use chrono::NaiveDate;

use super::field::{FieldSet, FormField};
use crate::error::{Result, ShelfError};
use crate::model::{Author, Book, Genre, RatingScale, ShelfCategory};

/// The raw values currently entered in the book form.
///
/// Values are kept exactly as the user entered them, including ones that will
/// fail validation (a series position of `0`, a finish date before the start
/// date). `None` means "not set"; whether a value is acceptable is decided by
/// [`super::validation`], not by its type here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub title: Option<String>,
    pub author_first_name: Option<String>,
    pub author_last_name: Option<String>,
    pub predefined_shelf: Option<ShelfCategory>,
    pub custom_shelf: Option<String>,
    pub genre: Option<Genre>,
    pub number_of_pages: Option<i64>,
    pub in_series: bool,
    pub series_position: Option<i64>,
    pub date_started: Option<NaiveDate>,
    pub date_finished: Option<NaiveDate>,
    pub pages_read: Option<i64>,
    pub rating: Option<f64>,
    pub review: Option<String>,
}

impl FormValues {
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: Some(book.title.clone()),
            author_first_name: Some(book.author.first_name.clone()),
            author_last_name: Some(book.author.last_name.clone()),
            predefined_shelf: Some(book.category()),
            custom_shelf: book.custom_shelf.as_ref().map(|s| s.name.clone()),
            genre: book.genre,
            number_of_pages: book.number_of_pages.map(i64::from),
            in_series: book.series_position.is_some(),
            series_position: book.series_position.map(i64::from),
            date_started: book.date_started_reading,
            date_finished: book.date_finished_reading,
            pages_read: book.pages_read.map(i64::from),
            rating: book.rating.and_then(|r| r.value()),
            review: book.book_review.clone(),
        }
    }

    pub fn clear(&mut self, field: FormField) {
        match field {
            FormField::Title => self.title = None,
            FormField::AuthorFirstName => self.author_first_name = None,
            FormField::AuthorLastName => self.author_last_name = None,
            FormField::PredefinedShelf => self.predefined_shelf = None,
            FormField::CustomShelf => self.custom_shelf = None,
            FormField::Genre => self.genre = None,
            FormField::NumberOfPages => self.number_of_pages = None,
            FormField::InSeries => self.in_series = false,
            FormField::SeriesPosition => self.series_position = None,
            FormField::DateStarted => self.date_started = None,
            FormField::DateFinished => self.date_finished = None,
            FormField::PagesRead => self.pages_read = None,
            FormField::Rating => self.rating = None,
            FormField::Review => self.review = None,
        }
    }

    pub fn clear_fields(&mut self, fields: &FieldSet) {
        for field in fields.iter() {
            self.clear(field);
        }
    }

    pub fn is_set(&self, field: FormField) -> bool {
        match field {
            FormField::Title => self.title.is_some(),
            FormField::AuthorFirstName => self.author_first_name.is_some(),
            FormField::AuthorLastName => self.author_last_name.is_some(),
            FormField::PredefinedShelf => self.predefined_shelf.is_some(),
            FormField::CustomShelf => self.custom_shelf.is_some(),
            FormField::Genre => self.genre.is_some(),
            FormField::NumberOfPages => self.number_of_pages.is_some(),
            FormField::InSeries => self.in_series,
            FormField::SeriesPosition => self.series_position.is_some(),
            FormField::DateStarted => self.date_started.is_some(),
            FormField::DateFinished => self.date_finished.is_some(),
            FormField::PagesRead => self.pages_read.is_some(),
            FormField::Rating => self.rating.is_some(),
            FormField::Review => self.review.is_some(),
        }
    }

    /// Extracts the values every book must have, in form order. The first
    /// missing one aborts with [`ShelfError::MissingField`].
    pub fn required_parts(&self) -> Result<(String, Author, ShelfCategory)> {
        let title = required_text(&self.title, FormField::Title)?;
        let first_name = required_text(&self.author_first_name, FormField::AuthorFirstName)?;
        let last_name = required_text(&self.author_last_name, FormField::AuthorLastName)?;
        let category = self
            .predefined_shelf
            .ok_or(ShelfError::MissingField(FormField::PredefinedShelf))?;
        Ok((title, Author::new(first_name, last_name), category))
    }

    /// Writes title, author and every optional value onto `book`.
    ///
    /// The predefined and custom shelves are left alone: both need a store
    /// lookup and are resolved by the save command.
    pub fn apply_to(&self, book: &mut Book) -> Result<()> {
        let (title, author, _) = self.required_parts()?;
        book.title = title;
        book.author = author;
        book.genre = self.genre;
        book.number_of_pages = self.number_of_pages.and_then(positive_u32);
        book.series_position = if self.in_series {
            self.series_position.and_then(positive_u32)
        } else {
            None
        };
        book.date_started_reading = self.date_started;
        book.date_finished_reading = self.date_finished;
        book.pages_read = self.pages_read.and_then(|p| u32::try_from(p).ok());
        book.rating = self.rating.and_then(RatingScale::from_f64);
        book.book_review = optional_text(&self.review);
        Ok(())
    }

    /// The custom shelf name, if one was chosen.
    pub fn custom_shelf_name(&self) -> Option<String> {
        optional_text(&self.custom_shelf)
    }
}

fn required_text(value: &Option<String>, field: FormField) -> Result<String> {
    value
        .as_ref()
        .map(|v| v.trim().to_string())
        .ok_or(ShelfError::MissingField(field))
}

fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn positive_u32(value: i64) -> Option<u32> {
    u32::try_from(value).ok().filter(|v| *v > 0)
}
