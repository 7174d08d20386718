//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for the UI layer that renders the book form, the shelves and
//! the statistics page.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., shelf names typed by the user into categories)
//! - **Supplies ambient values** from [`ShelfConfig`] (title display width)
//! - **Returns structured types** (`Result<CmdResult>`, reports, `Option`s)
//!
//! The form objects ([`BookForm`], [`CustomShelfForm`]) are owned by the
//! caller and passed in by reference; the API never keeps UI state.
//!
//! ## Generic Over BookStore
//!
//! `ShelfApi<S: BookStore>` is generic over the storage backend:
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`

use crate::commands::{self, stats::StatisticsReport, CmdResult};
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::form::custom_shelf::CustomShelfForm;
use crate::form::BookForm;
use crate::model::{GoalType, ReadingGoal, ShelfCategory};
use crate::stats::goal::GoalProgress;
use crate::stats::pages::PageStatistics;
use crate::store::BookStore;
use chrono::NaiveDate;
use log::error;
use uuid::Uuid;

/// The main API facade for shelfapp operations.
pub struct ShelfApi<S: BookStore> {
    store: S,
    config: ShelfConfig,
}

impl<S: BookStore> ShelfApi<S> {
    pub fn new(store: S, config: ShelfConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn config(&self) -> &ShelfConfig {
        &self.config
    }

    // --- Book form ---

    /// Loads the book `id` and opens `form` to edit it.
    pub fn edit_book(&self, form: &mut BookForm, id: &Uuid) -> Result<()> {
        let book = self.store.get_book(id)?;
        form.open_for_edit(book);
        Ok(())
    }

    pub fn save_book(&mut self, form: &mut BookForm, today: NaiveDate) -> Result<CmdResult> {
        commands::save::run(
            &mut self.store,
            form,
            today,
            self.config.title_display_width,
        )
    }

    pub fn delete_book(&mut self, form: &mut BookForm) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, form, self.config.title_display_width)
    }

    /// Closes the form without saving. Entered values are kept.
    pub fn cancel(&self, form: &mut BookForm) {
        form.close();
    }

    // --- Shelves ---

    pub fn list_books(&self, category: ShelfCategory) -> Result<CmdResult> {
        commands::list::run(&self.store, category)
    }

    /// Like [`Self::list_books`], taking the shelf's code or display name.
    pub fn list_books_on(&self, shelf: &str) -> Result<CmdResult> {
        let category = shelf.parse::<ShelfCategory>().map_err(|err| {
            error!("Not listing books: {}", err);
            err
        })?;
        commands::list::run(&self.store, category)
    }

    pub fn list_books_on_custom_shelf(&self, name: &str) -> Result<CmdResult> {
        commands::list::on_custom_shelf(&self.store, name)
    }

    pub fn custom_shelves(&self) -> Result<CmdResult> {
        commands::list::custom_shelves(&self.store)
    }

    pub fn shelf_names(&self) -> Result<Vec<String>> {
        commands::list::shelf_names(&self.store)
    }

    pub fn open_custom_shelf_form(&self, form: &mut CustomShelfForm) -> Result<()> {
        commands::custom_shelf::open(&self.store, form)
    }

    pub fn create_custom_shelf(&mut self, form: &mut CustomShelfForm) -> Result<CmdResult> {
        commands::custom_shelf::create(&mut self.store, form)
    }

    // --- Reading goal ---

    pub fn set_goal(&mut self, target: u32, goal_type: GoalType) -> Result<CmdResult> {
        commands::goal::set(&mut self.store, target, goal_type)
    }

    pub fn goal(&self) -> Result<Option<ReadingGoal>> {
        commands::goal::get(&self.store)
    }

    pub fn delete_goal(&mut self) -> Result<CmdResult> {
        commands::goal::delete(&mut self.store)
    }

    pub fn goal_progress(&self, today: NaiveDate) -> Result<Option<GoalProgress>> {
        commands::goal::progress(&self.store, today)
    }

    // --- Statistics ---

    pub fn statistics(&self, today: NaiveDate) -> Result<StatisticsReport> {
        commands::stats::run(&self.store, today)
    }

    pub fn page_statistics(&self, today: NaiveDate) -> Result<PageStatistics> {
        let read = self.store.find_books_by_shelf_category(ShelfCategory::Read)?;
        Ok(PageStatistics::new(read, today))
    }
}
