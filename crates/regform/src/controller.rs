// File: src/controller.rs
// Purpose: Form controller - field binding, validation passes and the submit lifecycle

use crate::config::Config;
use crate::error::FormError;
use crate::field::FieldSpec;
use crate::form_state::{FieldErrors, FormState, FormValues};
use crate::registration::registration_fields;
use crate::sink::{Submission, SubmissionSink, TracingSink};
use crate::success_banner::{BannerState, SuccessBanner};
use crate::validation::ValidationError;
use crate::value::FieldValue;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Every field passed; these values went to the sink
    Accepted(Submission),
    /// Names of the failing fields, in field order
    Rejected(Vec<String>),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// Owns the registered fields, their values and errors, and the success
/// banner.
///
/// Values are only validated on submit until the first submit attempt;
/// after that every change re-validates the changed field. A successful
/// submit resets the form back to that initial mode.
pub struct FormController {
    fields: Vec<FieldSpec>,
    state: FormState,
    submit_attempted: bool,
    banner: SuccessBanner,
    sink: Box<dyn SubmissionSink>,
}

impl FormController {
    /// Empty controller; fields are added with [`FormController::register_field`]
    pub fn new(banner_duration: Duration) -> Self {
        Self {
            fields: Vec::new(),
            state: FormState::new(),
            submit_attempted: false,
            banner: SuccessBanner::new(banner_duration),
            sink: Box::new(TracingSink),
        }
    }

    /// Controller with the conference registration fields registered.
    /// Accepted submits start the banner timer, so [`FormController::submit`]
    /// must run inside a Tokio runtime.
    pub fn registration(config: &Config) -> Self {
        let mut controller = Self::new(config.banner.duration());
        for spec in registration_fields() {
            // Names in the static table are unique
            if let Err(e) = controller.register_field(spec) {
                warn!("skipping registration field: {}", e);
            }
        }
        controller
    }

    pub fn with_sink(mut self, sink: impl SubmissionSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Binds a field: its value starts empty and its rules become the
    /// contract checked on submit.
    pub fn register_field(&mut self, spec: FieldSpec) -> Result<(), FormError> {
        if self.field(spec.name).is_some() {
            return Err(FormError::DuplicateField(spec.name.to_string()));
        }
        debug!(field = spec.name, "field registered");
        self.state.set_value(spec.name, spec.empty_value());
        self.fields.push(spec);
        Ok(())
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn require_field(&self, name: &str) -> Result<&FieldSpec, FormError> {
        self.field(name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    /// Binds a new value to a field
    pub fn set_value(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), FormError> {
        let spec = self.require_field(name)?;
        let value = spec.coerce(value.into())?;
        self.store(name, value);
        Ok(())
    }

    /// Binds the raw string an input produced
    pub fn set_input(&mut self, name: &str, raw: &str) -> Result<(), FormError> {
        let value = self.require_field(name)?.parse_input(raw)?;
        self.store(name, value);
        Ok(())
    }

    /// Puts a field back to its empty value
    pub fn clear_value(&mut self, name: &str) -> Result<(), FormError> {
        let value = self.require_field(name)?.empty_value();
        self.store(name, value);
        Ok(())
    }

    fn store(&mut self, name: &str, value: FieldValue) {
        if self.submit_attempted {
            if let Some(spec) = self.field(name) {
                let outcome = spec.validate(&value);
                self.state.record(name, outcome);
            }
        }
        self.state.set_value(name, value);
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.state.get_value(name)
    }

    pub fn values(&self) -> &FormValues {
        self.state.values()
    }

    pub fn errors(&self) -> &FieldErrors {
        self.state.errors()
    }

    pub fn error(&self, name: &str) -> Option<&ValidationError> {
        self.state.get_error(name)
    }

    /// Checks a value against a registered field's rules without touching state
    pub fn validate(&self, name: &str, value: &FieldValue) -> Result<Result<(), ValidationError>, FormError> {
        Ok(self.require_field(name)?.validate(value))
    }

    /// Validates every field. On success the banner (re)starts its window,
    /// the values go to the sink and the form resets; on failure only the
    /// errors change.
    ///
    /// A valid submit needs a Tokio runtime for the banner timer. Without one
    /// it returns `FormError::NoRuntime` before anything is logged or reset.
    pub fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        self.submit_attempted = true;

        let mut errors = FieldErrors::new();
        let mut failed = Vec::new();
        for spec in &self.fields {
            let empty = spec.empty_value();
            let value = self.state.get_value(spec.name).unwrap_or(&empty);
            if let Err(err) = spec.validate(value) {
                failed.push(spec.name.to_string());
                errors.insert(spec.name.to_string(), err);
            }
        }
        self.state.replace_errors(errors);

        if !failed.is_empty() {
            debug!(failed = ?failed, "submit rejected");
            return Ok(SubmitOutcome::Rejected(failed));
        }

        let submission = Submission {
            fields: self
                .fields
                .iter()
                .map(|spec| {
                    let value = self
                        .state
                        .get_value(spec.name)
                        .cloned()
                        .unwrap_or_else(|| spec.empty_value());
                    (spec.name.to_string(), value)
                })
                .collect(),
        };
        self.banner.show()?;
        self.sink.emit(&submission);
        self.reset();
        info!(fields = submission.fields.len(), "submit accepted");

        Ok(SubmitOutcome::Accepted(submission))
    }

    /// Clears values and errors and leaves re-validate-on-change mode.
    /// The banner is left alone.
    pub fn reset(&mut self) {
        for spec in &self.fields {
            self.state.set_value(spec.name, spec.empty_value());
        }
        self.state.clear_errors();
        self.submit_attempted = false;
    }

    /// Whether the success banner is currently shown
    pub fn is_submitted(&self) -> bool {
        self.banner.is_visible()
    }

    pub fn banner_state(&self) -> BannerState {
        self.banner.state()
    }

    pub fn subscribe_banner(&self) -> watch::Receiver<BannerState> {
        self.banner.subscribe()
    }

    /// Teardown: cancels the pending banner timer and hides the banner
    pub fn shutdown(&mut self) {
        self.banner.hide();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::InputType;
    use crate::validation::{RuleKind, RuleSet};

    fn controller() -> FormController {
        let mut form = FormController::new(Duration::from_millis(3000));
        form.register_field(FieldSpec::new(
            "name",
            "Name",
            InputType::Text,
            RuleSet::new().required("name required").min_length(3, "name short"),
        ))
        .unwrap();
        form.register_field(FieldSpec::new(
            "agree",
            "Agree",
            InputType::Checkbox,
            RuleSet::new().required("must agree"),
        ))
        .unwrap();
        form
    }

    #[test]
    fn test_register_initialises_values() {
        let form = controller();
        assert_eq!(form.value("name"), Some(&FieldValue::empty_text()));
        assert_eq!(form.value("agree"), Some(&FieldValue::Bool(false)));
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut form = controller();
        let err = form
            .register_field(FieldSpec::new("name", "Again", InputType::Text, RuleSet::new()))
            .unwrap_err();
        assert_eq!(err, FormError::DuplicateField("name".to_string()));
        assert_eq!(form.fields().len(), 2);
    }

    #[test]
    fn test_unknown_field() {
        let mut form = controller();
        assert_eq!(
            form.set_value("nope", "x").unwrap_err(),
            FormError::UnknownField("nope".to_string())
        );
        assert!(form.validate("nope", &FieldValue::empty_text()).is_err());
    }

    #[test]
    fn test_no_validation_before_first_submit() {
        let mut form = controller();
        form.set_value("name", "ab").unwrap();
        assert!(form.errors().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_submit_then_revalidate_on_change() {
        let mut form = controller();

        let outcome = form.submit().unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(vec!["name".to_string(), "agree".to_string()])
        );
        assert_eq!(form.error("name").unwrap().kind, RuleKind::Required);
        assert!(!form.is_submitted());

        form.set_value("name", "ab").unwrap();
        assert_eq!(form.error("name").unwrap().message, "name short");

        form.set_value("name", "abc").unwrap();
        assert!(form.error("name").is_none());
        // Untouched field keeps its error
        assert!(form.error("agree").is_some());
    }

    #[tokio::test]
    async fn test_accepted_submit_resets() {
        let mut form = controller();
        form.set_value("name", "Ayu").unwrap();
        form.set_input("agree", "on").unwrap();

        let outcome = form.submit().unwrap();
        let SubmitOutcome::Accepted(submission) = outcome else {
            panic!("expected accepted submit");
        };
        assert_eq!(submission.get("name"), Some(&FieldValue::from("Ayu")));
        assert_eq!(submission.get("agree"), Some(&FieldValue::Bool(true)));

        assert!(form.is_submitted());
        assert_eq!(form.value("name"), Some(&FieldValue::empty_text()));
        assert_eq!(form.value("agree"), Some(&FieldValue::Bool(false)));

        // Back to submit-only validation
        form.set_value("name", "a").unwrap();
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_valid_submit_without_runtime_keeps_form() {
        let mut form = controller();
        form.set_value("name", "Ayu").unwrap();
        form.set_value("agree", true).unwrap();

        assert_eq!(form.submit(), Err(FormError::NoRuntime));
        assert_eq!(form.value("name"), Some(&FieldValue::from("Ayu")));
        assert_eq!(form.value("agree"), Some(&FieldValue::Bool(true)));
        assert!(!form.is_submitted());
    }

    #[tokio::test]
    async fn test_shutdown_hides_banner() {
        let mut form = controller();
        form.set_value("name", "Ayu").unwrap();
        form.set_value("agree", true).unwrap();
        assert!(form.submit().unwrap().is_accepted());

        form.shutdown();
        assert!(!form.is_submitted());
    }
}
