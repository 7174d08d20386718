//! The "add custom shelf" form.
//!
//! A single name field. The name is rejected when blank or when a predefined or
//! custom shelf already uses it (case-insensitive). A fresh or blank form is not
//! flagged invalid; it just cannot be saved. Saving or closing clears the field,
//! so reopening always starts empty.

use std::fmt;

use crate::model::ShelfCategory;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShelfNameError {
    Empty,
    InUse(String),
}

impl fmt::Display for ShelfNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShelfNameError::Empty => write!(f, "Please enter a shelf name"),
            ShelfNameError::InUse(name) => {
                write!(f, "A shelf called '{}' already exists", name)
            }
        }
    }
}

impl std::error::Error for ShelfNameError {}

/// Names a new custom shelf may not take: every predefined shelf code and
/// display name, plus `custom_names`.
pub fn reserved_names<I, S>(custom_names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut names: Vec<String> = ShelfCategory::ALL
        .iter()
        .flat_map(|c| [c.code().to_string(), c.display_name().to_string()])
        .collect();
    names.extend(custom_names.into_iter().map(Into::into));
    names
}

pub fn validate_shelf_name(name: &str, taken: &[String]) -> Result<(), ShelfNameError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ShelfNameError::Empty);
    }
    if taken.iter().any(|t| t.trim().eq_ignore_ascii_case(name)) {
        return Err(ShelfNameError::InUse(name.to_string()));
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct CustomShelfForm {
    name: String,
    taken: Vec<String>,
    open: bool,
}

impl CustomShelfForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the form with an empty name. `taken` is the list of names that
    /// are already in use, typically from [`reserved_names`].
    pub fn open(&mut self, taken: Vec<String>) {
        self.name.clear();
        self.taken = taken;
        self.open = true;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn error(&self) -> Option<ShelfNameError> {
        validate_shelf_name(&self.name, &self.taken).err()
    }

    /// Only a name clash marks the field invalid; an empty field does not.
    pub fn is_invalid(&self) -> bool {
        matches!(self.error(), Some(ShelfNameError::InUse(_)))
    }

    pub fn can_save(&self) -> bool {
        self.error().is_none()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.name.clear();
        self.open = false;
    }
}
