//! Request-body validation helpers.
//!
//! Handlers accumulate per-field messages and fail with a single 400 carrying
//! a `details.fieldErrors` object, so the client sees every problem at once.

use serde_json::{json, Map, Value};

use crate::errors::AppError;

/// Accumulates field-level validation errors for one request body.
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    /// Requires `value` to contain at least one non-whitespace character.
    pub fn require_non_empty(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, "must be a non-empty string");
        }
    }

    /// Ok if nothing was recorded, otherwise a 400 with the details object.
    pub fn finish(self) -> Result<(), AppError> {
        if self.errors.is_empty() {
            return Ok(());
        }

        let mut field_errors = Map::new();
        for (field, message) in self.errors {
            field_errors
                .entry(field.to_string())
                .or_insert_with(|| Value::Array(Vec::new()))
                .as_array_mut()
                .expect("fieldErrors values are arrays")
                .push(Value::String(message));
        }

        Err(AppError::Validation(json!({ "fieldErrors": field_errors })))
    }
}
