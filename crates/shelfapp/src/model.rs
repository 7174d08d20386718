//! # Domain Model: Books, Shelves and Reading Goals
//!
//! This module defines the persisted data structures of shelfapp: [`Book`],
//! [`PredefinedShelf`], [`CustomShelf`] and [`ReadingGoal`], together with the
//! closed enums that classify them ([`ShelfCategory`], [`Genre`], [`RatingScale`],
//! [`GoalType`]).
//!
//! ## Shelves
//!
//! Every book sits on exactly one predefined shelf. The predefined shelves are a
//! fixed set of four reading states:
//!
//! | Category | Display name |
//! |----------|--------------|
//! | `ToRead` | To read |
//! | `Reading` | Reading |
//! | `Read` | Read |
//! | `DidNotFinish` | Did not finish |
//!
//! A predefined shelf is also a persisted row ([`PredefinedShelf`]) so that a book
//! references the row, not just the category. The store is expected to hold
//! exactly one row per category; anything else is a data-integrity fault that the
//! save command refuses to paper over.
//!
//! A custom shelf is a user-defined secondary label. It is independent of the
//! predefined shelf: moving a book between predefined shelves never touches it.
//!
//! ## Optional Values
//!
//! Everything beyond title, author and predefined shelf is optional and modeled as
//! `Option`. Numeric values on a [`Book`] are always already validated (positive);
//! raw, possibly-invalid user input lives in [`crate::form::FormValues`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::ShelfError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShelfCategory {
    ToRead,
    Reading,
    Read,
    DidNotFinish,
}

impl ShelfCategory {
    pub const ALL: [ShelfCategory; 4] = [
        ShelfCategory::ToRead,
        ShelfCategory::Reading,
        ShelfCategory::Read,
        ShelfCategory::DidNotFinish,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ShelfCategory::ToRead => "To read",
            ShelfCategory::Reading => "Reading",
            ShelfCategory::Read => "Read",
            ShelfCategory::DidNotFinish => "Did not finish",
        }
    }

    /// The identifier used at the storage and UI boundary (`TO_READ`, ...).
    pub fn code(&self) -> &'static str {
        match self {
            ShelfCategory::ToRead => "TO_READ",
            ShelfCategory::Reading => "READING",
            ShelfCategory::Read => "READ",
            ShelfCategory::DidNotFinish => "DID_NOT_FINISH",
        }
    }
}

impl fmt::Display for ShelfCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ShelfCategory {
    type Err = ShelfError;

    /// Accepts either the code (`DID_NOT_FINISH`) or the display name
    /// (`Did not finish`), case-insensitively. Anything else is rejected;
    /// there is no fallback category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ShelfCategory::ALL
            .into_iter()
            .find(|c| {
                c.code().eq_ignore_ascii_case(needle)
                    || c.display_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ShelfError::UnsupportedCategory(needle.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredefinedShelf {
    pub id: Uuid,
    pub category: ShelfCategory,
}

impl PredefinedShelf {
    pub fn new(category: ShelfCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomShelf {
    pub id: Uuid,
    pub name: String,
}

impl CustomShelf {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Adventure,
    Biography,
    Classic,
    Crime,
    Fantasy,
    HistoricalFiction,
    Horror,
    Humour,
    Mystery,
    NonFiction,
    Poetry,
    Romance,
    ScienceFiction,
    SelfHelp,
    Thriller,
}

impl Genre {
    pub fn display_name(&self) -> &'static str {
        match self {
            Genre::Adventure => "Adventure",
            Genre::Biography => "Biography",
            Genre::Classic => "Classic",
            Genre::Crime => "Crime",
            Genre::Fantasy => "Fantasy",
            Genre::HistoricalFiction => "Historical fiction",
            Genre::Horror => "Horror",
            Genre::Humour => "Humour",
            Genre::Mystery => "Mystery",
            Genre::NonFiction => "Non-fiction",
            Genre::Poetry => "Poetry",
            Genre::Romance => "Romance",
            Genre::ScienceFiction => "Science fiction",
            Genre::SelfHelp => "Self-help",
            Genre::Thriller => "Thriller",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A discrete rating from 0 to 10, or no rating at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RatingScale {
    NoRating,
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
}

impl RatingScale {
    const SCALE: [RatingScale; 11] = [
        RatingScale::Zero,
        RatingScale::One,
        RatingScale::Two,
        RatingScale::Three,
        RatingScale::Four,
        RatingScale::Five,
        RatingScale::Six,
        RatingScale::Seven,
        RatingScale::Eight,
        RatingScale::Nine,
        RatingScale::Ten,
    ];

    /// Converts the numeric value of a rating widget into a rating.
    ///
    /// Only whole numbers between 0 and 10 map onto the scale. Returns `None`
    /// for anything else (fractions, negatives, NaN, values above 10).
    pub fn from_f64(value: f64) -> Option<RatingScale> {
        if !value.is_finite() || value.fract() != 0.0 || !(0.0..=10.0).contains(&value) {
            return None;
        }
        Self::SCALE.get(value as usize).copied()
    }

    /// Numeric value, `None` for [`RatingScale::NoRating`].
    pub fn value(&self) -> Option<f64> {
        Self::SCALE
            .iter()
            .position(|r| r == self)
            .map(|idx| idx as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: Author,
    pub predefined_shelf: PredefinedShelf,
    #[serde(default)]
    pub custom_shelf: Option<CustomShelf>,
    #[serde(default)]
    pub genre: Option<Genre>,
    #[serde(default)]
    pub series_position: Option<u32>,
    #[serde(default)]
    pub number_of_pages: Option<u32>,
    #[serde(default)]
    pub date_started_reading: Option<NaiveDate>,
    #[serde(default)]
    pub date_finished_reading: Option<NaiveDate>,
    #[serde(default)]
    pub rating: Option<RatingScale>,
    #[serde(default)]
    pub book_review: Option<String>,
    #[serde(default)]
    pub pages_read: Option<u32>,
}

impl Book {
    pub fn new(title: impl Into<String>, author: Author, predefined_shelf: PredefinedShelf) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            author,
            predefined_shelf,
            custom_shelf: None,
            genre: None,
            series_position: None,
            number_of_pages: None,
            date_started_reading: None,
            date_finished_reading: None,
            rating: None,
            book_review: None,
            pages_read: None,
        }
    }

    pub fn category(&self) -> ShelfCategory {
        self.predefined_shelf.category
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalType {
    Books,
    Pages,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingGoal {
    pub target: u32,
    pub goal_type: GoalType,
}

impl ReadingGoal {
    pub fn new(target: u32, goal_type: GoalType) -> Self {
        Self { target, goal_type }
    }
}

/// Shortens a title for user-facing messages, appending an ellipsis when cut.
pub fn truncate_title(title: &str, width: usize) -> String {
    let clean = title.trim();
    if width == 0 || clean.chars().count() <= width {
        return clean.to_string();
    }
    let truncated: String = clean.chars().take(width - 1).collect();
    format!("{}…", truncated)
}
