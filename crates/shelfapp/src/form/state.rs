//! # Book Form State Machine
//!
//! [`BookForm`] holds everything the UI needs to render the book form: which
//! fields are visible, which fields get cleared, the values entered so far, and
//! whether an existing book is being edited.
//!
//! ## States
//!
//! The form is either `Unselected` (no predefined shelf chosen yet) or
//! `Selected(category)`. The only transition is [`BookForm::select_category`];
//! editing any other field never changes the state.
//!
//! ## Layout
//!
//! The visible-field set and the reset-field set are computed together by
//! [`FormLayout::for_state`] and replaced as one value, so the two always
//! describe the same category. Only the reset set of the category the book is
//! saved under is applied; intermediate selections clear nothing.
//!
//! The series position field is outside the shelf policy: it is shown while the
//! in-series checkbox is ticked and cleared when it is unticked.
//!
//! ## Lifecycle
//!
//! - [`BookForm::open_for_add`]: Unselected, all fields cleared, nothing bound
//! - [`BookForm::open_for_edit`]: binds a book, rebuilds layout from its shelf
//! - [`BookForm::reset`]: the Reset button; clears everything and unbinds
//! - [`BookForm::close`]: hides the form, keeping entered values
//!
//! Saving and deleting are commands ([`crate::commands::save`],
//! [`crate::commands::delete`]) that finish by calling back into the form.

use chrono::NaiveDate;
use log::error;

use super::field::{FieldSet, FormField};
use super::validation::{self, FieldError, ValidationErrors};
use super::values::FormValues;
use super::visibility::{base_fields, reset_fields_for, visible_fields_for};
use crate::error::Result;
use crate::model::{Book, Genre, ShelfCategory};

pub const LABEL_ADD_BOOK: &str = "Add book";
pub const LABEL_UPDATE_BOOK: &str = "Update book";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Unselected,
    Selected(ShelfCategory),
}

impl FormState {
    pub fn category(&self) -> Option<ShelfCategory> {
        match self {
            FormState::Unselected => None,
            FormState::Selected(category) => Some(*category),
        }
    }
}

/// Visible fields and fields-to-clear for one form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    visible: FieldSet,
    reset: FieldSet,
}

impl FormLayout {
    pub fn for_state(state: FormState, in_series: bool) -> Self {
        let (mut visible, reset) = match state {
            FormState::Unselected => (base_fields(), FieldSet::new()),
            FormState::Selected(category) => {
                (visible_fields_for(category), reset_fields_for(category))
            }
        };
        if in_series {
            visible.insert(FormField::SeriesPosition);
        }
        Self { visible, reset }
    }

    pub fn visible(&self) -> &FieldSet {
        &self.visible
    }

    pub fn reset(&self) -> &FieldSet {
        &self.reset
    }

    pub fn is_visible(&self, field: FormField) -> bool {
        self.visible.contains(field)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Add,
    Edit(Box<Book>),
}

#[derive(Debug, Clone)]
pub struct BookForm {
    state: FormState,
    layout: FormLayout,
    values: FormValues,
    mode: FormMode,
    open: bool,
}

impl Default for BookForm {
    fn default() -> Self {
        Self::new()
    }
}

impl BookForm {
    pub fn new() -> Self {
        Self {
            state: FormState::Unselected,
            layout: FormLayout::for_state(FormState::Unselected, false),
            values: FormValues::default(),
            mode: FormMode::Add,
            open: false,
        }
    }

    pub fn open_for_add(&mut self) {
        self.reset();
        self.open = true;
    }

    pub fn open_for_edit(&mut self, book: Book) {
        self.values = FormValues::from_book(&book);
        self.state = FormState::Selected(book.category());
        self.layout = FormLayout::for_state(self.state, self.values.in_series);
        self.mode = FormMode::Edit(Box::new(book));
        self.open = true;
    }

    /// Moves the form to `category` by swapping in the category's layout.
    /// Nothing is cleared here; the reset set is applied when the book is saved.
    pub fn select_category(&mut self, category: ShelfCategory) {
        let state = FormState::Selected(category);
        self.layout = FormLayout::for_state(state, self.values.in_series);
        self.values.predefined_shelf = Some(category);
        self.state = state;
    }

    /// Selects a category by its code or display name. An unknown name is
    /// logged and leaves the form exactly as it was.
    pub fn select_category_named(&mut self, name: &str) -> Result<()> {
        match name.parse::<ShelfCategory>() {
            Ok(category) => {
                self.select_category(category);
                Ok(())
            }
            Err(err) => {
                error!("Ignoring shelf selection: {}", err);
                Err(err)
            }
        }
    }

    pub fn set_in_series(&mut self, in_series: bool) {
        self.values.in_series = in_series;
        if !in_series {
            self.values.clear(FormField::SeriesPosition);
        }
        self.layout = FormLayout::for_state(self.state, in_series);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.values.title = Some(title.into());
    }

    pub fn set_author(&mut self, first_name: impl Into<String>, last_name: impl Into<String>) {
        self.values.author_first_name = Some(first_name.into());
        self.values.author_last_name = Some(last_name.into());
    }

    pub fn set_custom_shelf(&mut self, name: Option<String>) {
        self.values.custom_shelf = name;
    }

    pub fn set_genre(&mut self, genre: Option<Genre>) {
        self.values.genre = genre;
    }

    pub fn set_number_of_pages(&mut self, pages: Option<i64>) {
        self.values.number_of_pages = pages;
    }

    pub fn set_series_position(&mut self, position: Option<i64>) {
        self.values.series_position = position;
    }

    pub fn set_date_started(&mut self, date: Option<NaiveDate>) {
        self.values.date_started = date;
    }

    pub fn set_date_finished(&mut self, date: Option<NaiveDate>) {
        self.values.date_finished = date;
    }

    pub fn set_pages_read(&mut self, pages: Option<i64>) {
        self.values.pages_read = pages;
    }

    pub fn set_rating(&mut self, rating: Option<f64>) {
        self.values.rating = rating;
    }

    pub fn set_review(&mut self, review: Option<String>) {
        self.values.review = review;
    }

    /// Clears every field, returns to `Unselected` and forgets any bound book.
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.state = FormState::Unselected;
        self.layout = FormLayout::for_state(self.state, false);
        self.mode = FormMode::Add;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Validates the values that would be saved. Fields in the current reset
    /// set are dropped on save and never block it.
    pub fn validate(&self, today: NaiveDate) -> std::result::Result<(), ValidationErrors> {
        validation::validate(&self.values_to_save(), today)
    }

    /// The entered values with the current category's reset set cleared.
    pub fn values_to_save(&self) -> FormValues {
        let mut values = self.values.clone();
        values.clear_fields(self.layout.reset());
        values
    }

    pub fn can_save(&self, today: NaiveDate) -> bool {
        self.validate(today).is_ok()
    }

    /// Re-checks the fields an edit of `field` can affect. Editing the start
    /// date also re-checks the finish date.
    pub fn check_after_edit(
        &self,
        field: FormField,
        today: NaiveDate,
    ) -> Vec<(FormField, std::result::Result<(), FieldError>)> {
        validation::affected_by(field)
            .iter()
            .map(|f| (f, validation::validate_field(&self.values, f, today)))
            .collect()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn layout(&self) -> &FormLayout {
        &self.layout
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn bound_book(&self) -> Option<&Book> {
        match &self.mode {
            FormMode::Add => None,
            FormMode::Edit(book) => Some(book.as_ref()),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn save_label(&self) -> &'static str {
        match self.mode {
            FormMode::Add => LABEL_ADD_BOOK,
            FormMode::Edit(_) => LABEL_UPDATE_BOOK,
        }
    }

    /// Finishes a successful save: clears the final category's reset set,
    /// refreshes the bound book when editing, and closes the form.
    pub(crate) fn complete_save(&mut self, saved: Book) {
        let reset = self.layout.reset().clone();
        self.values.clear_fields(&reset);
        if matches!(self.mode, FormMode::Edit(_)) {
            self.mode = FormMode::Edit(Box::new(saved));
        }
        self.open = false;
    }

    pub(crate) fn complete_delete(&mut self) {
        self.mode = FormMode::Add;
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Author, PredefinedShelf};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fill_progress(form: &mut BookForm) {
        form.set_date_started(Some(day(2024, 1, 1)));
        form.set_date_finished(Some(day(2024, 1, 9)));
        form.set_pages_read(Some(40));
        form.set_rating(Some(8.0));
        form.set_review(Some("Loved it".into()));
    }

    #[test]
    fn starts_unselected_with_base_fields() {
        let form = BookForm::new();
        assert_eq!(form.state(), FormState::Unselected);
        assert_eq!(form.layout().visible(), &base_fields());
        assert!(form.layout().reset().is_empty());
        assert!(!form.is_open());
        assert_eq!(form.save_label(), LABEL_ADD_BOOK);
    }

    #[test]
    fn selecting_category_updates_layout_as_a_unit() {
        let mut form = BookForm::new();
        form.select_category(ShelfCategory::Read);
        assert_eq!(form.state(), FormState::Selected(ShelfCategory::Read));
        assert_eq!(
            form.layout(),
            &FormLayout::for_state(FormState::Selected(ShelfCategory::Read), false)
        );
        assert!(form.layout().is_visible(FormField::Rating));
    }

    #[test]
    fn switching_to_to_read_drops_progress_from_every_category() {
        for from in ShelfCategory::ALL {
            let mut form = BookForm::new();
            form.select_category(from);
            fill_progress(&mut form);

            form.select_category(ShelfCategory::ToRead);

            let values = form.values_to_save();
            assert_eq!(values.pages_read, None, "from {from}");
            assert_eq!(values.date_started, None, "from {from}");
            assert_eq!(values.date_finished, None, "from {from}");
            assert_eq!(values.rating, None, "from {from}");
            assert_eq!(values.review, None, "from {from}");
        }
    }

    #[test]
    fn selecting_a_category_clears_nothing() {
        let mut form = BookForm::new();
        form.select_category(ShelfCategory::Read);
        fill_progress(&mut form);

        form.select_category(ShelfCategory::ToRead);
        assert_eq!(form.values().date_finished, Some(day(2024, 1, 9)));
        assert_eq!(form.values().rating, Some(8.0));

        form.select_category(ShelfCategory::Read);
        let values = form.values_to_save();
        assert_eq!(values.date_started, Some(day(2024, 1, 1)));
        assert_eq!(values.date_finished, Some(day(2024, 1, 9)));
        assert_eq!(values.rating, Some(8.0));
        assert_eq!(values.review.as_deref(), Some("Loved it"));
        assert_eq!(values.pages_read, None);
    }

    #[test]
    fn hidden_values_do_not_block_saving() {
        let today = day(2024, 6, 1);
        let mut form = BookForm::new();
        form.set_title("Kindred");
        form.set_author("Octavia", "Butler");
        form.select_category(ShelfCategory::Read);
        form.set_date_finished(Some(day(2024, 12, 1)));
        assert!(!form.can_save(today));

        form.select_category(ShelfCategory::ToRead);
        assert!(form.can_save(today));
    }

    #[test]
    fn editing_other_fields_does_not_transition() {
        let mut form = BookForm::new();
        form.set_title("Persuasion");
        form.set_number_of_pages(Some(250));
        assert_eq!(form.state(), FormState::Unselected);
    }

    #[test]
    fn unknown_category_name_leaves_form_untouched() {
        let mut form = BookForm::new();
        form.select_category(ShelfCategory::Reading);
        form.set_date_started(Some(day(2024, 2, 2)));
        let before = form.layout().clone();

        assert!(form.select_category_named("SHELVED_FOREVER").is_err());
        assert_eq!(form.state(), FormState::Selected(ShelfCategory::Reading));
        assert_eq!(form.layout(), &before);
        assert!(form.values().date_started.is_some());
    }

    #[test]
    fn category_can_be_selected_by_name() {
        let mut form = BookForm::new();
        form.select_category_named("Did not finish").unwrap();
        assert!(form.layout().is_visible(FormField::PagesRead));
    }

    #[test]
    fn in_series_toggle_is_independent_of_shelf() {
        let mut form = BookForm::new();
        form.select_category(ShelfCategory::ToRead);
        form.set_in_series(true);
        form.set_series_position(Some(3));
        assert!(form.layout().is_visible(FormField::SeriesPosition));

        form.select_category(ShelfCategory::Read);
        assert!(form.layout().is_visible(FormField::SeriesPosition));
        assert_eq!(form.values().series_position, Some(3));

        form.set_in_series(false);
        assert!(!form.layout().is_visible(FormField::SeriesPosition));
        assert_eq!(form.values().series_position, None);
    }

    #[test]
    fn open_for_edit_rebuilds_layout_and_series_visibility() {
        let mut book = Book::new(
            "The Two Towers",
            Author::new("J.R.R.", "Tolkien"),
            PredefinedShelf::new(ShelfCategory::DidNotFinish),
        );
        book.series_position = Some(2);
        book.pages_read = Some(120);

        let mut form = BookForm::new();
        form.open_for_edit(book.clone());

        assert!(form.is_open());
        assert_eq!(form.save_label(), LABEL_UPDATE_BOOK);
        assert_eq!(form.state(), FormState::Selected(ShelfCategory::DidNotFinish));
        assert!(form.layout().is_visible(FormField::PagesRead));
        assert!(form.layout().is_visible(FormField::SeriesPosition));
        assert_eq!(form.values().pages_read, Some(120));
        assert_eq!(form.bound_book(), Some(&book));
    }

    #[test]
    fn open_for_edit_hides_series_when_not_in_series() {
        let book = Book::new(
            "Standalone",
            Author::new("A", "B"),
            PredefinedShelf::new(ShelfCategory::Read),
        );
        let mut form = BookForm::new();
        form.open_for_edit(book);
        assert!(!form.layout().is_visible(FormField::SeriesPosition));
        assert!(!form.values().in_series);
    }

    #[test]
    fn open_for_add_starts_fresh() {
        let book = Book::new(
            "Old",
            Author::new("A", "B"),
            PredefinedShelf::new(ShelfCategory::Read),
        );
        let mut form = BookForm::new();
        form.open_for_edit(book);
        form.close();

        form.open_for_add();
        assert!(form.is_open());
        assert_eq!(form.state(), FormState::Unselected);
        assert_eq!(form.values(), &FormValues::default());
        assert!(form.bound_book().is_none());
        assert_eq!(form.save_label(), LABEL_ADD_BOOK);
    }

    #[test]
    fn reset_clears_everything() {
        let mut form = BookForm::new();
        form.open_for_add();
        form.set_title("Title");
        form.select_category(ShelfCategory::Read);
        form.set_in_series(true);
        form.reset();

        assert_eq!(form.values(), &FormValues::default());
        assert_eq!(form.state(), FormState::Unselected);
        assert!(!form.layout().is_visible(FormField::SeriesPosition));
        assert!(form.is_open());
    }

    #[test]
    fn start_date_edit_rechecks_finish_date() {
        let mut form = BookForm::new();
        form.select_category(ShelfCategory::Read);
        form.set_date_finished(Some(day(2024, 3, 1)));
        form.set_date_started(Some(day(2024, 3, 5)));

        let checks = form.check_after_edit(FormField::DateStarted, day(2024, 6, 1));
        assert_eq!(checks.len(), 2);
        let finished = checks
            .iter()
            .find(|(f, _)| *f == FormField::DateFinished)
            .unwrap();
        assert_eq!(finished.1, Err(FieldError::FinishedBeforeStarted));
    }

    #[test]
    fn can_save_follows_validity() {
        let today = day(2024, 6, 1);
        let mut form = BookForm::new();
        form.open_for_add();
        assert!(!form.can_save(today));

        form.set_title("Beloved");
        form.set_author("Toni", "Morrison");
        form.select_category(ShelfCategory::Reading);
        assert!(form.can_save(today));

        form.set_in_series(true);
        form.set_series_position(Some(0));
        assert!(!form.can_save(today));
    }
}
