//! Form state management and form structs

use super::field::{ConstraintViolation, FormField};
use super::snapshot::FieldSnapshot;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;

    /// Iterate the fields in document order
    fn fields(&self) -> impl Iterator<Item = &FormField> {
        (0..self.field_count()).filter_map(move |i| self.get_field(i))
    }
}

/// What a submit handler may read from the form that fired the event
pub trait FormSource {
    /// Capture every field's current name/value pair
    fn snapshot(&self) -> FieldSnapshot;

    /// Run the native constraints, reporting the first failure in document order
    fn check_validity(&self) -> Result<(), ConstraintViolation>;
}

impl<F: Form> FormSource for F {
    fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot::from_pairs(
            self.fields()
                .map(|f| (f.name.clone(), f.as_text().to_string())),
        )
    }

    fn check_validity(&self) -> Result<(), ConstraintViolation> {
        self.fields().try_for_each(FormField::validity)
    }
}

/// Lowest accepted year of birth for a library patron
pub const MIN_YEAR_OF_BIRTH: i64 = 1900;
/// Patrons must be older than 14
pub const MAX_YEAR_OF_BIRTH: i64 = 2010;

// Person Edit Form
#[derive(Debug, Clone)]
pub struct PersonEditForm {
    pub name: FormField,
    pub year_of_birth: FormField,
    pub active_field_index: usize,
}

impl PersonEditForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name").required(),
            year_of_birth: FormField::number("yearOfBirth", "Year of birth")
                .required()
                .range(MIN_YEAR_OF_BIRTH, MAX_YEAR_OF_BIRTH),
            active_field_index: 0,
        }
    }

    /// Prefill the form with a person's current values
    pub fn with_values(name: Option<String>, year_of_birth: Option<i64>) -> Self {
        let mut form = Self::new();
        if let Some(name) = name {
            form.name.set_text(name);
        }
        if let Some(year) = year_of_birth {
            form.year_of_birth.set_text(year.to_string());
        }
        form
    }
}

impl Default for PersonEditForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for PersonEditForm {
    fn field_count(&self) -> usize {
        2
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.name,
            _ => &mut self.year_of_birth,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.year_of_birth),
            _ => None,
        }
    }
}
