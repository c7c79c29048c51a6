//! Form field value objects

use thiserror::Error;

/// Input kind of a field, mirroring the HTML input types the edit page uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Number,
}

/// A failed native form constraint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    #[error("{label} must not be empty")]
    ValueMissing { label: String },
    #[error("{label} must be a number")]
    BadInput { label: String },
    #[error("{label} must be at least {min}")]
    RangeUnderflow { label: String, min: i64 },
    #[error("{label} must be at most {max}")]
    RangeOverflow { label: String, max: i64 },
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    value: String,
    pub required: bool,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: FieldKind::Text,
            value: String::new(),
            required: false,
            min: None,
            max: None,
        }
    }

    /// Create a new numeric field
    pub fn number(name: &str, label: &str) -> Self {
        Self {
            kind: FieldKind::Number,
            ..Self::text(name, label)
        }
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restrict a numeric field to an inclusive range
    pub fn range(mut self, min: i64, max: i64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Get the raw value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Set the raw value
    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value.
    /// Number fields only accept digits and a leading minus sign.
    pub fn push_char(&mut self, c: char) {
        match self.kind {
            FieldKind::Text => self.value.push(c),
            FieldKind::Number => {
                if c.is_ascii_digit() || (c == '-' && self.value.is_empty()) {
                    self.value.push(c);
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Check the native constraints (required, numeric range)
    pub fn validity(&self) -> Result<(), ConstraintViolation> {
        // Whitespace satisfies `required`; only number parsing trims
        if self.value.is_empty() {
            if self.required {
                return Err(ConstraintViolation::ValueMissing {
                    label: self.label.clone(),
                });
            }
            return Ok(());
        }

        if self.kind == FieldKind::Number {
            let number: i64 = self.value.trim().parse().map_err(|_| ConstraintViolation::BadInput {
                label: self.label.clone(),
            })?;
            if let Some(min) = self.min {
                if number < min {
                    return Err(ConstraintViolation::RangeUnderflow {
                        label: self.label.clone(),
                        min,
                    });
                }
            }
            if let Some(max) = self.max {
                if number > max {
                    return Err(ConstraintViolation::RangeOverflow {
                        label: self.label.clone(),
                        max,
                    });
                }
            }
        }

        Ok(())
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match (self.kind, self.min, self.max) {
            (FieldKind::Number, Some(min), Some(max)) if self.value.is_empty() => {
                format!("{min}-{max}")
            }
            _ => self.value.clone(),
        }
    }
}
