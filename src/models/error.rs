use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldViolation {
    #[schema(value_type = String, example = "title")]
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation failed: {}", describe(.0))]
    Validation(Vec<FieldViolation>),
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: &'static str, id: String },
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        StoreError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Turns a list of collected violations into an error, or `Ok` when empty.
    pub fn check(violations: Vec<FieldViolation>) -> Result<(), StoreError> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(StoreError::Validation(violations))
        }
    }
}

fn describe(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub(crate) fn require_text(
    violations: &mut Vec<FieldViolation>,
    field: &'static str,
    value: &str,
) {
    if value.is_empty() {
        violations.push(FieldViolation::new(
            field,
            format!("{field} should not be empty"),
        ));
    }
}

pub(crate) fn require_min_chars(
    violations: &mut Vec<FieldViolation>,
    field: &'static str,
    value: &str,
    min: usize,
) {
    if value.chars().count() < min {
        violations.push(FieldViolation::new(
            field,
            format!("{field} must be longer than or equal to {min} characters"),
        ));
    }
}
