// File: src/error.rs
// Purpose: Binding errors raised by the form controller

use thiserror::Error;

/// Errors from registering fields or binding values to them.
///
/// Rule violations are not errors of this kind; they are reported as
/// [`crate::ValidationError`] values in the form state.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormError {
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("field '{0}' is already registered")]
    DuplicateField(String),

    #[error("field '{field}' expects a {expected} value, got {got}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        got: &'static str,
    },

    #[error("'{value}' is not an option of field '{field}'")]
    UnknownOption { field: String, value: String },

    #[error("no Tokio runtime to run the success banner timer")]
    NoRuntime,
}
