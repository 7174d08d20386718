use crate::error::Result;
use crate::model::{Book, ShelfCategory};
use crate::stats::goal::GoalProgress;
use crate::stats::pages::PageStatistics;
use crate::stats::ratings::RatingStatistics;
use crate::store::BookStore;
use chrono::NaiveDate;

/// Every statistic shown on the statistics page. `None` means "not available".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsReport {
    pub read_count: usize,
    pub most_pages: Option<Book>,
    pub least_pages: Option<Book>,
    pub average_page_length: Option<f64>,
    pub most_pages_this_year: Option<Book>,
    pub least_pages_this_year: Option<Book>,
    pub average_page_length_this_year: Option<f64>,
    pub highest_rated: Option<Book>,
    pub lowest_rated: Option<Book>,
    pub average_rating: Option<f64>,
    pub goal: Option<GoalProgress>,
}

pub fn run<S: BookStore>(store: &S, today: NaiveDate) -> Result<StatisticsReport> {
    let read = store.find_books_by_shelf_category(ShelfCategory::Read)?;
    let goal = store
        .reading_goal()?
        .map(|goal| GoalProgress::compute(&goal, &read, today));

    let pages = PageStatistics::new(read.clone(), today);
    let ratings = RatingStatistics::new(read.clone());

    Ok(StatisticsReport {
        read_count: read.len(),
        most_pages: pages.most_pages().cloned(),
        least_pages: pages.least_pages().cloned(),
        average_page_length: pages.average_page_length(),
        most_pages_this_year: pages.most_pages_this_year().cloned(),
        least_pages_this_year: pages.least_pages_this_year().cloned(),
        average_page_length_this_year: pages.average_page_length_this_year(),
        highest_rated: ratings.highest_rated().cloned(),
        lowest_rated: ratings.lowest_rated().cloned(),
        average_rating: ratings.average_rating(),
        goal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GoalType, RatingScale, ReadingGoal};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()
    }

    #[test]
    fn empty_store_has_nothing_available() {
        let store = InMemoryStore::new();
        let report = run(&store, today()).unwrap();
        assert_eq!(report, StatisticsReport::default());
    }

    #[test]
    fn only_read_books_are_counted() {
        let fixture = StoreFixture::new()
            .with_read_book("Read", Some(100), Some(today()))
            .with_read_book("Also read", Some(10), None)
            .with_book("Still reading", ShelfCategory::Reading);

        let report = run(&fixture.store, today()).unwrap();

        assert_eq!(report.read_count, 2);
        assert_eq!(report.most_pages.unwrap().title, "Read");
        assert_eq!(report.least_pages.unwrap().title, "Also read");
        assert_eq!(report.average_page_length, Some(55.0));
        assert_eq!(report.average_page_length_this_year, Some(100.0));
    }

    #[test]
    fn ratings_come_from_read_books() {
        let fixture = StoreFixture::new()
            .with_rated_book("Superb", RatingScale::Ten)
            .with_rated_book("Decent", RatingScale::Six)
            .with_rated_book("Unrated", RatingScale::NoRating);

        let report = run(&fixture.store, today()).unwrap();

        assert_eq!(report.read_count, 3);
        assert_eq!(report.highest_rated.unwrap().title, "Superb");
        assert_eq!(report.lowest_rated.unwrap().title, "Decent");
        assert_eq!(report.average_rating, Some(8.0));
    }

    #[test]
    fn includes_goal_progress_when_set() {
        let mut fixture = StoreFixture::new().with_read_book("Read", Some(250), Some(today()));
        fixture
            .store
            .save_reading_goal(&ReadingGoal::new(1000, GoalType::Pages))
            .unwrap();

        let report = run(&fixture.store, today()).unwrap();
        let goal = report.goal.unwrap();
        assert_eq!(goal.achieved, 250);
        assert_eq!(goal.percentage, 25.0);
    }
}
