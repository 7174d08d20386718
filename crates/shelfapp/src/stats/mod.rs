//! # Statistics
//!
//! Derived metrics over a snapshot of books. Nothing here is cached or stored:
//! every value is recomputed from the books handed in, and every metric is an
//! `Option` that is `None` when there is nothing to measure. Empty input is
//! never an error.
//!
//! - [`pages::PageStatistics`]: longest, shortest and average book length
//! - [`ratings::RatingStatistics`]: highest, lowest and average rating
//! - [`goal::GoalProgress`]: progress towards the reading goal for this year
//!
//! Where two books tie for a maximum or minimum, the first one in the
//! snapshot wins.

use crate::model::Book;
use chrono::{Datelike, NaiveDate};

pub mod goal;
pub mod pages;
pub mod ratings;

/// Books finished in the same calendar year as `today`.
pub fn finished_in_year_of(books: &[Book], today: NaiveDate) -> Vec<Book> {
    books
        .iter()
        .filter(|b| {
            b.date_finished_reading
                .is_some_and(|finished| finished.year() == today.year())
        })
        .cloned()
        .collect()
}

/// Returns the first item whose key beats every earlier key according to
/// `better`. Ties keep the earlier item.
pub(crate) fn first_extreme<'a, T, F>(
    items: impl Iterator<Item = (&'a Book, T)>,
    better: F,
) -> Option<&'a Book>
where
    T: Copy,
    F: Fn(T, T) -> bool,
{
    items
        .fold(None, |best: Option<(&'a Book, T)>, (book, key)| match best {
            Some((_, best_key)) if !better(key, best_key) => best,
            _ => Some((book, key)),
        })
        .map(|(book, _)| book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Author, PredefinedShelf, ShelfCategory};

    fn finished(title: &str, date: Option<NaiveDate>) -> Book {
        let mut book = Book::new(
            title,
            Author::new("A", "B"),
            PredefinedShelf::new(ShelfCategory::Read),
        );
        book.date_finished_reading = date;
        book
    }

    #[test]
    fn this_year_filter_uses_finish_date() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let books = vec![
            finished("this year", NaiveDate::from_ymd_opt(2025, 1, 1)),
            finished("last year", NaiveDate::from_ymd_opt(2024, 12, 31)),
            finished("unknown", None),
        ];

        let filtered = finished_in_year_of(&books, today);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "this year");
    }
}
