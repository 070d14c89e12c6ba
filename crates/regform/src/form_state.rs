// File: src/form_state.rs
// Purpose: Current field values and the errors of the last validation pass

use crate::validation::ValidationError;
use crate::value::FieldValue;
use std::collections::HashMap;

/// Field name to current raw value
pub type FormValues = HashMap<String, FieldValue>;

/// Field name to the first failing rule of the last validation pass
pub type FieldErrors = HashMap<String, ValidationError>;

/// Values and errors owned by the form controller
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: FormValues,
    errors: FieldErrors,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_value(&mut self, field: &str, value: FieldValue) {
        self.values.insert(field.to_string(), value);
    }

    /// Get the current value for a field
    pub fn get_value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Records the outcome of validating one field
    pub fn record(&mut self, field: &str, outcome: Result<(), ValidationError>) {
        match outcome {
            Ok(()) => {
                self.errors.remove(field);
            }
            Err(err) => {
                self.errors.insert(field.to_string(), err);
            }
        }
    }

    /// Replaces every error with the result of a full validation pass
    pub fn replace_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    /// Check if field has an error
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get error for a field
    pub fn get_error(&self, field: &str) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::RuleKind;

    #[test]
    fn test_record_sets_and_clears() {
        let mut state = FormState::new();
        state.record("email", Err(ValidationError::new(RuleKind::Pattern, "bad")));
        assert!(state.has_error("email"));
        assert_eq!(state.get_error("email").unwrap().message, "bad");

        state.record("email", Ok(()));
        assert!(!state.has_error("email"));
        assert!(!state.has_errors());
    }

    #[test]
    fn test_values() {
        let mut state = FormState::new();
        state.set_value("fullName", "Ayu".into());
        assert_eq!(state.get_value("fullName"), Some(&FieldValue::from("Ayu")));
        assert!(state.get_value("missing").is_none());
    }
}
