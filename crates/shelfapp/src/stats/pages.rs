use super::{finished_in_year_of, first_extreme};
use crate::model::Book;
use chrono::NaiveDate;

/// Page-count metrics over a snapshot of read books.
///
/// Books without a page count are left out of every metric.
#[derive(Debug, Clone)]
pub struct PageStatistics {
    books: Vec<Book>,
    this_year: Vec<Book>,
}

impl PageStatistics {
    pub fn new(read_books: Vec<Book>, today: NaiveDate) -> Self {
        let this_year = finished_in_year_of(&read_books, today);
        Self {
            books: read_books,
            this_year,
        }
    }

    pub fn most_pages(&self) -> Option<&Book> {
        most(&self.books)
    }

    pub fn least_pages(&self) -> Option<&Book> {
        least(&self.books)
    }

    pub fn average_page_length(&self) -> Option<f64> {
        average(&self.books)
    }

    pub fn most_pages_this_year(&self) -> Option<&Book> {
        most(&self.this_year)
    }

    pub fn least_pages_this_year(&self) -> Option<&Book> {
        least(&self.this_year)
    }

    pub fn average_page_length_this_year(&self) -> Option<f64> {
        average(&self.this_year)
    }
}

fn with_pages(books: &[Book]) -> impl Iterator<Item = (&Book, u32)> {
    books
        .iter()
        .filter_map(|b| b.number_of_pages.map(|pages| (b, pages)))
}

fn most(books: &[Book]) -> Option<&Book> {
    first_extreme(with_pages(books), |a, b| a > b)
}

fn least(books: &[Book]) -> Option<&Book> {
    first_extreme(with_pages(books), |a, b| a < b)
}

fn average(books: &[Book]) -> Option<f64> {
    let (total, count) = with_pages(books).fold((0u64, 0u64), |(total, count), (_, pages)| {
        (total + u64::from(pages), count + 1)
    });
    if count == 0 {
        None
    } else {
        Some(total as f64 / count as f64)
    }
}
