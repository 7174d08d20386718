use super::finished_in_year_of;
use crate::model::{Book, GoalType, ReadingGoal};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Where the reader stands against the pace needed to meet the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    OnTrack,
    Ahead(u32),
    Behind(u32),
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schedule::OnTrack => write!(f, "on track"),
            Schedule::Ahead(n) => write!(f, "{} ahead of schedule", n),
            Schedule::Behind(n) => write!(f, "{} behind schedule", n),
        }
    }
}

/// Progress towards a reading goal, counting only books finished this year.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalProgress {
    pub goal: ReadingGoal,
    /// Books finished, or pages read in finished books, depending on goal type.
    pub achieved: u32,
    /// What should be done by `today` at an even pace, rounded up.
    pub expected_by_today: u32,
    /// 0.0 to 100.0.
    pub percentage: f64,
    pub schedule: Schedule,
}

impl GoalProgress {
    pub fn compute(goal: &ReadingGoal, read_books: &[Book], today: NaiveDate) -> Self {
        let this_year = finished_in_year_of(read_books, today);
        let achieved = match goal.goal_type {
            GoalType::Books => this_year.len() as u32,
            GoalType::Pages => this_year
                .iter()
                .filter_map(|b| b.number_of_pages)
                .fold(0u32, |total, pages| total.saturating_add(pages)),
        };
        let expected_by_today = expected_by(goal.target, today);
        let schedule = match achieved.cmp(&expected_by_today) {
            std::cmp::Ordering::Equal => Schedule::OnTrack,
            std::cmp::Ordering::Greater => Schedule::Ahead(achieved - expected_by_today),
            std::cmp::Ordering::Less => Schedule::Behind(expected_by_today - achieved),
        };
        Self {
            goal: goal.clone(),
            achieved,
            expected_by_today,
            percentage: percentage(achieved, goal.target),
            schedule,
        }
    }

    pub fn is_met(&self) -> bool {
        self.achieved >= self.goal.target
    }

    /// How many books or pages are still missing.
    pub fn remaining(&self) -> u32 {
        self.goal.target.saturating_sub(self.achieved)
    }
}

fn days_in_year(year: i32) -> u32 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}

fn expected_by(target: u32, today: NaiveDate) -> u32 {
    let elapsed = u64::from(today.ordinal());
    let total = u64::from(days_in_year(today.year()));
    let expected = (u64::from(target) * elapsed).div_ceil(total);
    u32::try_from(expected).unwrap_or(u32::MAX)
}

fn percentage(achieved: u32, target: u32) -> f64 {
    if target == 0 {
        return 100.0;
    }
    (f64::from(achieved) / f64::from(target) * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Author, PredefinedShelf, ShelfCategory};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn finished(pages: u32, date: NaiveDate) -> Book {
        let mut book = Book::new(
            "Book",
            Author::new("A", "B"),
            PredefinedShelf::new(ShelfCategory::Read),
        );
        book.number_of_pages = Some(pages);
        book.date_finished_reading = Some(date);
        book
    }

    #[test]
    fn counts_only_books_finished_this_year() {
        let goal = ReadingGoal::new(4, GoalType::Books);
        let books = vec![
            finished(100, day(2025, 1, 10)),
            finished(100, day(2024, 12, 31)),
        ];
        let progress = GoalProgress::compute(&goal, &books, day(2025, 12, 31));
        assert_eq!(progress.achieved, 1);
        assert_eq!(progress.percentage, 25.0);
        assert_eq!(progress.remaining(), 3);
        assert_eq!(progress.schedule, Schedule::Behind(3));
    }

    #[test]
    fn page_goals_sum_page_counts() {
        let goal = ReadingGoal::new(500, GoalType::Pages);
        let books = vec![finished(300, day(2025, 2, 1)), finished(400, day(2025, 3, 1))];
        let progress = GoalProgress::compute(&goal, &books, day(2025, 3, 2));
        assert_eq!(progress.achieved, 700);
        assert_eq!(progress.percentage, 100.0);
        assert!(progress.is_met());
        assert_eq!(progress.remaining(), 0);
    }

    #[test]
    fn expected_pace_is_proportional_to_day_of_year() {
        let goal = ReadingGoal::new(52, GoalType::Books);
        // 2025-07-02 is day 183 of 365
        let progress = GoalProgress::compute(&goal, &[], day(2025, 7, 2));
        assert_eq!(progress.expected_by_today, 27);
        assert_eq!(progress.schedule, Schedule::Behind(27));
    }

    #[test]
    fn ahead_when_above_pace() {
        let goal = ReadingGoal::new(10, GoalType::Books);
        let books: Vec<Book> = (1..=3).map(|d| finished(50, day(2025, 1, d))).collect();
        let progress = GoalProgress::compute(&goal, &books, day(2025, 1, 5));
        assert_eq!(progress.expected_by_today, 1);
        assert_eq!(progress.schedule, Schedule::Ahead(2));
        assert_eq!(progress.schedule.to_string(), "2 ahead of schedule");
    }
}
