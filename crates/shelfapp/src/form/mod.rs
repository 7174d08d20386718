//! # Book Form Workflow
//!
//! The book form is a multi-field entry form whose visible fields, validation and
//! reset behaviour all depend on the predefined shelf the user picks. This module
//! keeps that logic UI-agnostic: the surrounding UI layer calls explicit
//! transition methods and renders whatever state comes back.
//!
//! ## Pieces
//!
//! - [`field`]: field identifiers ([`FormField`]) and sets of them ([`FieldSet`])
//! - [`visibility`]: the per-category policy table (what is shown, what is cleared)
//! - [`validation`]: field validators and their error messages
//! - [`values`]: the raw, possibly-invalid values currently entered in the form
//! - [`state`]: the form state machine ([`BookForm`])
//! - [`custom_shelf`]: the small "add custom shelf" form
//!
//! ## Shelf-Driven Layout
//!
//! ```text
//!   Unselected ──select(c)──▶ Selected(c) ──select(c')──▶ Selected(c')
//!        │                         │
//!        └── base fields only      └── base + visibility_for(c), reset_fields_for(c)
//! ```
//!
//! Visible fields and fields-to-clear are derived together into one
//! [`FormLayout`] value and swapped in as a whole, so a reader never sees one
//! without the other.
//!
//! Saving and deleting live in the command layer ([`crate::commands::save`],
//! [`crate::commands::delete`]) because they talk to the store.

pub mod custom_shelf;
pub mod field;
pub mod state;
pub mod validation;
pub mod values;
pub mod visibility;

pub use field::{FieldSet, FormField};
pub use state::{BookForm, FormLayout, FormMode, FormState};
pub use validation::{FieldError, ValidationErrors};
pub use values::FormValues;
pub use visibility::{reset_fields_for, visibility_for, visible_fields_for, ShelfVisibility};
