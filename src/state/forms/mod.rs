//! Form domain layer
//!
//! Type-safe form handling for the edit-person view: fields with their
//! native constraints, and the snapshot taken when the form is submitted.

mod field;
mod form_state;
mod snapshot;

pub use field::FormField;
pub use form_state::{Form, FormSource, PersonEditForm};
pub use snapshot::FieldSnapshot;
