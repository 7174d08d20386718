//! Book form validation.
//!
//! Rules:
//! - Title, author first name and author last name are required and must not be blank
//! - A predefined shelf must be chosen
//! - Series position and number of pages are optional, but must be positive when set
//! - Dates are optional and must not lie in the future
//! - A finish date must not be earlier than the start date (the same day is fine)
//! - Pages read cannot be negative, and a rating must be a whole number from 0 to 10
//!
//! Every rule looks at a single field except the finish-date ordering rule, which
//! also reads the start date. [`affected_by`] tells the form which fields to
//! re-check after an edit.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::field::{FieldSet, FormField};
use super::values::FormValues;
use crate::model::{RatingScale, ShelfCategory};

/// Which reading date a date error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingDate {
    Started,
    Finished,
}

impl fmt::Display for ReadingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadingDate::Started => f.write_str("started"),
            ReadingDate::Finished => f.write_str("finished"),
        }
    }
}

/// Error type for a single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FieldError {
    /// Title is missing or blank
    TitleRequired,
    /// Author first name is missing or blank
    FirstNameRequired,
    /// Author last name is missing or blank
    LastNameRequired,
    /// No predefined shelf chosen
    ShelfRequired,
    /// Series position is zero or negative
    SeriesPositionNotPositive,
    /// Number of pages is zero or negative
    PageCountNotPositive,
    /// A number is larger than a book can hold
    NumberTooLarge,
    /// A reading date lies after today
    DateAfterToday(ReadingDate),
    /// Finish date is earlier than the start date
    FinishedBeforeStarted,
    /// Pages read is negative
    PagesReadNegative,
    /// Rating is not a whole number between 0 and 10
    RatingOffScale,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::TitleRequired => write!(f, "Please enter a book title"),
            FieldError::FirstNameRequired => write!(f, "Please enter the author's first name"),
            FieldError::LastNameRequired => write!(f, "Please enter the author's last name"),
            FieldError::ShelfRequired => write!(f, "Please select a shelf"),
            FieldError::SeriesPositionNotPositive => {
                write!(f, "Series position must be at least 1")
            }
            FieldError::PageCountNotPositive => {
                write!(f, "The page number must be larger than 0")
            }
            FieldError::NumberTooLarge => write!(f, "The number entered is too large"),
            FieldError::DateAfterToday(which) => write!(
                f,
                "The date you {} reading the book cannot be after today's date.",
                which
            ),
            FieldError::FinishedBeforeStarted => write!(
                f,
                "The date you finished reading the book cannot be earlier than the date you started reading the book"
            ),
            FieldError::PagesReadNegative => write!(f, "Pages read cannot be negative"),
            FieldError::RatingOffScale => {
                write!(f, "The rating must be a whole number between 0 and 10")
            }
        }
    }
}

impl std::error::Error for FieldError {}

/// Field-level errors of one validation pass, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<FormField, FieldError>);

impl ValidationErrors {
    pub fn get(&self, field: FormField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &FieldError)> {
        self.0.iter().map(|(field, err)| (*field, err))
    }

    fn record(&mut self, field: FormField, result: Result<(), FieldError>) {
        if let Err(err) = result {
            self.0.insert(field, err);
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, err)| format!("{}: {}", field, err))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Whether a string is acceptable as an author name.
///
/// Only presence is checked: any non-blank string passes.
pub fn is_allowed_author_name(name: &str) -> bool {
    !name.trim().is_empty()
}

pub fn validate_title(title: Option<&str>) -> Result<(), FieldError> {
    match title {
        Some(t) if !t.trim().is_empty() => Ok(()),
        _ => Err(FieldError::TitleRequired),
    }
}

pub fn validate_first_name(name: Option<&str>) -> Result<(), FieldError> {
    match name {
        Some(n) if is_allowed_author_name(n) => Ok(()),
        _ => Err(FieldError::FirstNameRequired),
    }
}

pub fn validate_last_name(name: Option<&str>) -> Result<(), FieldError> {
    match name {
        Some(n) if is_allowed_author_name(n) => Ok(()),
        _ => Err(FieldError::LastNameRequired),
    }
}

pub fn validate_shelf(shelf: Option<ShelfCategory>) -> Result<(), FieldError> {
    shelf.map(|_| ()).ok_or(FieldError::ShelfRequired)
}

pub fn validate_series_position(position: Option<i64>) -> Result<(), FieldError> {
    positive_number(position, FieldError::SeriesPositionNotPositive)
}

pub fn validate_number_of_pages(pages: Option<i64>) -> Result<(), FieldError> {
    positive_number(pages, FieldError::PageCountNotPositive)
}

fn positive_number(value: Option<i64>, not_positive: FieldError) -> Result<(), FieldError> {
    match value {
        None => Ok(()),
        Some(n) if n <= 0 => Err(not_positive),
        Some(n) if n > i64::from(u32::MAX) => Err(FieldError::NumberTooLarge),
        Some(_) => Ok(()),
    }
}

pub fn validate_date_started(
    started: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(), FieldError> {
    match started {
        Some(date) if date > today => Err(FieldError::DateAfterToday(ReadingDate::Started)),
        _ => Ok(()),
    }
}

pub fn validate_date_finished(
    started: Option<NaiveDate>,
    finished: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(), FieldError> {
    let Some(finished) = finished else {
        return Ok(());
    };
    if let Some(started) = started {
        if finished < started {
            return Err(FieldError::FinishedBeforeStarted);
        }
    }
    if finished > today {
        return Err(FieldError::DateAfterToday(ReadingDate::Finished));
    }
    Ok(())
}

pub fn validate_pages_read(pages_read: Option<i64>) -> Result<(), FieldError> {
    match pages_read {
        Some(n) if n < 0 => Err(FieldError::PagesReadNegative),
        Some(n) if n > i64::from(u32::MAX) => Err(FieldError::NumberTooLarge),
        _ => Ok(()),
    }
}

pub fn validate_rating(rating: Option<f64>) -> Result<(), FieldError> {
    match rating {
        Some(value) if RatingScale::from_f64(value).is_none() => Err(FieldError::RatingOffScale),
        _ => Ok(()),
    }
}

/// Runs the validator bound to a single field.
pub fn validate_field(
    values: &FormValues,
    field: FormField,
    today: NaiveDate,
) -> Result<(), FieldError> {
    match field {
        FormField::Title => validate_title(values.title.as_deref()),
        FormField::AuthorFirstName => validate_first_name(values.author_first_name.as_deref()),
        FormField::AuthorLastName => validate_last_name(values.author_last_name.as_deref()),
        FormField::PredefinedShelf => validate_shelf(values.predefined_shelf),
        FormField::SeriesPosition if !values.in_series => Ok(()),
        FormField::SeriesPosition => validate_series_position(values.series_position),
        FormField::NumberOfPages => validate_number_of_pages(values.number_of_pages),
        FormField::DateStarted => validate_date_started(values.date_started, today),
        FormField::DateFinished => {
            validate_date_finished(values.date_started, values.date_finished, today)
        }
        FormField::PagesRead => validate_pages_read(values.pages_read),
        FormField::Rating => validate_rating(values.rating),
        FormField::CustomShelf | FormField::Genre | FormField::InSeries | FormField::Review => {
            Ok(())
        }
    }
}

/// Fields whose validity can change when `field` is edited.
pub fn affected_by(field: FormField) -> FieldSet {
    match field {
        FormField::DateStarted => FieldSet::from([FormField::DateStarted, FormField::DateFinished]),
        other => FieldSet::from([other]),
    }
}

/// Validates every field, collecting all failures.
pub fn validate(values: &FormValues, today: NaiveDate) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for field in FormField::ALL {
        errors.record(field, validate_field(values, field, today));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        day(2024, 6, 15)
    }

    fn valid() -> FormValues {
        FormValues {
            title: Some("Middlemarch".into()),
            author_first_name: Some("George".into()),
            author_last_name: Some("Eliot".into()),
            predefined_shelf: Some(ShelfCategory::Read),
            ..Default::default()
        }
    }

    #[test]
    fn minimal_book_is_valid() {
        assert!(validate(&valid(), today()).is_ok());
    }

    #[test]
    fn title_required() {
        assert_eq!(validate_title(None), Err(FieldError::TitleRequired));
        assert_eq!(validate_title(Some("")), Err(FieldError::TitleRequired));
        assert_eq!(validate_title(Some("   ")), Err(FieldError::TitleRequired));
        assert!(validate_title(Some("Emma")).is_ok());
    }

    #[test]
    fn author_names_reject_blank() {
        assert!(!is_allowed_author_name(""));
        assert!(!is_allowed_author_name(" \t"));
        assert!(is_allowed_author_name("Ursula"));
        assert_eq!(
            validate_first_name(Some(" ")),
            Err(FieldError::FirstNameRequired)
        );
        assert_eq!(validate_last_name(None), Err(FieldError::LastNameRequired));
    }

    #[test]
    fn shelf_required() {
        assert_eq!(validate_shelf(None), Err(FieldError::ShelfRequired));
        assert!(validate_shelf(Some(ShelfCategory::ToRead)).is_ok());
    }

    #[test]
    fn series_position_must_be_positive_when_present() {
        assert!(validate_series_position(None).is_ok());
        assert!(validate_series_position(Some(1)).is_ok());
        assert_eq!(
            validate_series_position(Some(0)),
            Err(FieldError::SeriesPositionNotPositive)
        );
        assert_eq!(
            validate_series_position(Some(-3)),
            Err(FieldError::SeriesPositionNotPositive)
        );
    }

    #[test]
    fn page_count_must_be_positive_when_present() {
        assert!(validate_number_of_pages(None).is_ok());
        assert_eq!(
            validate_number_of_pages(Some(0)),
            Err(FieldError::PageCountNotPositive)
        );
        assert_eq!(
            validate_number_of_pages(Some(i64::from(u32::MAX) + 1)),
            Err(FieldError::NumberTooLarge)
        );
    }

    #[test]
    fn start_date_cannot_be_in_the_future() {
        assert!(validate_date_started(Some(today()), today()).is_ok());
        assert_eq!(
            validate_date_started(Some(day(2024, 6, 16)), today()),
            Err(FieldError::DateAfterToday(ReadingDate::Started))
        );
    }

    #[test]
    fn same_day_start_and_finish_is_valid() {
        let d = day(2024, 3, 1);
        assert!(validate_date_finished(Some(d), Some(d), today()).is_ok());
    }

    #[test]
    fn finish_before_start_is_rejected() {
        assert_eq!(
            validate_date_finished(Some(day(2024, 3, 2)), Some(day(2024, 3, 1)), today()),
            Err(FieldError::FinishedBeforeStarted)
        );
    }

    #[test]
    fn missing_dates_always_pass_ordering() {
        assert!(validate_date_finished(None, Some(day(2024, 3, 1)), today()).is_ok());
        assert!(validate_date_finished(Some(day(2024, 3, 1)), None, today()).is_ok());
        assert!(validate_date_finished(None, None, today()).is_ok());
    }

    #[test]
    fn finish_date_cannot_be_in_the_future() {
        assert_eq!(
            validate_date_finished(None, Some(day(2025, 1, 1)), today()),
            Err(FieldError::DateAfterToday(ReadingDate::Finished))
        );
    }

    #[test]
    fn collects_all_errors() {
        let values = FormValues {
            title: None,
            in_series: true,
            series_position: Some(0),
            date_started: Some(day(2024, 5, 2)),
            date_finished: Some(day(2024, 5, 1)),
            ..valid()
        };
        let errors = validate(&values, today()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(FormField::Title), Some(&FieldError::TitleRequired));
        assert_eq!(
            errors.get(FormField::DateFinished),
            Some(&FieldError::FinishedBeforeStarted)
        );
        assert!(errors.get(FormField::DateStarted).is_none());
    }

    #[test]
    fn series_position_ignored_without_checkbox() {
        let values = FormValues {
            in_series: false,
            series_position: Some(0),
            ..valid()
        };
        assert!(validate(&values, today()).is_ok());
        assert_eq!(
            validate_field(
                &FormValues {
                    in_series: true,
                    ..values
                },
                FormField::SeriesPosition,
                today()
            ),
            Err(FieldError::SeriesPositionNotPositive)
        );
    }

    #[test]
    fn editing_start_date_rechecks_finish_date() {
        let affected = affected_by(FormField::DateStarted);
        assert!(affected.contains(FormField::DateFinished));
        assert_eq!(affected_by(FormField::Title).len(), 1);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            FieldError::DateAfterToday(ReadingDate::Started).to_string(),
            "The date you started reading the book cannot be after today's date."
        );
        assert_eq!(
            FieldError::SeriesPositionNotPositive.to_string(),
            "Series position must be at least 1"
        );
    }
}
