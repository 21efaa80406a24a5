//! Form submission errors

use crate::types::Field;
use thiserror::Error;

/// Reasons a form submission is blocked
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Required field is empty: {0}")]
    MissingField(Field),

    #[error("Amount is not a number: {0}")]
    InvalidAmount(String),

    #[error("Invalid date in {field}: {value}")]
    InvalidDate { field: Field, value: String },
}

impl FormError {
    pub fn field(&self) -> Field {
        match self {
            FormError::MissingField(field) => *field,
            FormError::InvalidAmount(_) => Field::Amount,
            FormError::InvalidDate { field, .. } => *field,
        }
    }
}
