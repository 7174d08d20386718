use super::first_extreme;
use crate::model::Book;

/// Rating metrics over the read books that carry a rating.
#[derive(Debug, Clone)]
pub struct RatingStatistics {
    books: Vec<Book>,
}

impl RatingStatistics {
    pub fn new(read_books: Vec<Book>) -> Self {
        Self { books: read_books }
    }

    fn rated(&self) -> impl Iterator<Item = (&Book, f64)> {
        self.books
            .iter()
            .filter_map(|b| b.rating.and_then(|r| r.value()).map(|v| (b, v)))
    }

    pub fn highest_rated(&self) -> Option<&Book> {
        first_extreme(self.rated(), |a, b| a > b)
    }

    pub fn lowest_rated(&self) -> Option<&Book> {
        first_extreme(self.rated(), |a, b| a < b)
    }

    pub fn average_rating(&self) -> Option<f64> {
        let (total, count) = self
            .rated()
            .fold((0.0, 0u32), |(total, count), (_, v)| (total + v, count + 1));
        if count == 0 {
            None
        } else {
            Some(total / f64::from(count))
        }
    }
}
