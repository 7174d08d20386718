use crate::form::custom_shelf::ShelfNameError;
use crate::form::{FormField, ValidationErrors};
use crate::model::ShelfCategory;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Book not found: {0}")]
    BookNotFound(Uuid),

    #[error("Invalid book: {0}")]
    Validation(ValidationErrors),

    #[error("Missing required value: {0}")]
    MissingField(FormField),

    #[error("Shelf {0} not yet supported")]
    UnsupportedCategory(String),

    #[error("Expected exactly one {category} shelf, found {found}")]
    DataIntegrity {
        category: ShelfCategory,
        found: usize,
    },

    #[error("Invalid shelf name: {0}")]
    InvalidShelfName(#[from] ShelfNameError),

    /// A store write failed. Carries the message shown to the user; the
    /// underlying cause is logged where it happens.
    #[error("{0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl ShelfError {
    /// Whether the user can fix this by changing what they entered.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ShelfError::Validation(_)
                | ShelfError::MissingField(_)
                | ShelfError::InvalidShelfName(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
