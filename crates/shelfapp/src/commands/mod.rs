//! # Command Layer
//!
//! This module contains the **core business logic** of shelfapp. Each command lives
//! in its own submodule and implements plain functions over a [`BookStore`].
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Turn form state into books and hand them to the store
//! - Resolve shelf rows and report data-integrity problems
//! - Return structured [`CmdResult`] values with affected books and messages
//! - Are completely UI-agnostic
//!
//! Commands never render anything. User-facing text is returned as
//! [`CmdMessage`]s and the caller decides how to show it.
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore` and cover every branch, including the
//! failure paths (invalid form, missing shelf rows, write errors).
//!
//! ## Command Modules
//!
//! - [`save`]: create or update the book bound to the form
//! - [`delete`]: delete the book bound to the form
//! - [`list`]: books on a shelf, custom shelf names
//! - [`custom_shelf`]: open and submit the custom shelf form
//! - [`goal`]: set, read and delete the reading goal
//! - [`stats`]: the statistics snapshot
//!
//! [`BookStore`]: crate::store::BookStore

use crate::model::{Book, CustomShelf};
use serde::Serialize;

pub mod custom_shelf;
pub mod delete;
pub mod goal;
pub mod list;
pub mod save;
pub mod stats;

/// Shown when a book cannot be written to the store.
pub const SAVE_FAILED: &str = "We could not save your book.";

/// Shown when a book cannot be removed from the store.
pub const DELETE_FAILED: &str = "We could not delete your book.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<Book>,
    pub custom_shelves: Vec<CustomShelf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_custom_shelves(mut self, shelves: Vec<CustomShelf>) -> Self {
        self.custom_shelves = shelves;
        self
    }
}
