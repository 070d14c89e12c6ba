// File: src/validation.rs
// Purpose: Declarative rule sets and first-failure-wins evaluation

use crate::value::FieldValue;
use regex::Regex;
use serde::Serialize;
use serde_json::{json, Map, Value as JsonValue};
use thiserror::Error;

/// Kind of rule that rejected a value, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleKind {
    Required,
    MinLength,
    MaxLength,
    Pattern,
    Min,
    Max,
    Validate,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::MinLength => "minLength",
            RuleKind::MaxLength => "maxLength",
            RuleKind::Pattern => "pattern",
            RuleKind::Min => "min",
            RuleKind::Max => "max",
            RuleKind::Validate => "validate",
        }
    }
}

/// A failed rule: which one, and the message shown next to the field
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: RuleKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Rule parameter paired with its message
#[derive(Debug, Clone)]
pub struct Rule<T> {
    pub value: T,
    pub message: String,
}

impl<T> Rule<T> {
    fn new(value: T, message: impl Into<String>) -> Self {
        Self {
            value,
            message: message.into(),
        }
    }
}

/// Custom predicate over the raw value. Returns true when the value is valid.
pub type Predicate = fn(&FieldValue) -> bool;

/// The validation contract attached to one field.
///
/// Any subset of rules may be present. Evaluation order is fixed:
/// required, minLength, maxLength, pattern, min, max, validate.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    pub required: Option<String>,
    pub min_length: Option<Rule<usize>>,
    pub max_length: Option<Rule<usize>>,
    pub pattern: Option<Rule<Regex>>,
    pub min: Option<Rule<f64>>,
    pub max: Option<Rule<f64>>,
    pub validate: Option<Rule<Predicate>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = Some(message.into());
        self
    }

    pub fn min_length(mut self, n: usize, message: impl Into<String>) -> Self {
        self.min_length = Some(Rule::new(n, message));
        self
    }

    pub fn max_length(mut self, n: usize, message: impl Into<String>) -> Self {
        self.max_length = Some(Rule::new(n, message));
        self
    }

    pub fn pattern(mut self, regex: Regex, message: impl Into<String>) -> Self {
        self.pattern = Some(Rule::new(regex, message));
        self
    }

    pub fn min(mut self, n: f64, message: impl Into<String>) -> Self {
        self.min = Some(Rule::new(n, message));
        self
    }

    pub fn max(mut self, n: f64, message: impl Into<String>) -> Self {
        self.max = Some(Rule::new(n, message));
        self
    }

    pub fn validate(mut self, predicate: Predicate, message: impl Into<String>) -> Self {
        self.validate = Some(Rule::new(predicate, message));
        self
    }

    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }

    /// Evaluates the rules against `value` and returns the first failure.
    ///
    /// An empty value only answers to `required`: when the field is optional
    /// it is valid no matter what the other rules say.
    pub fn check(&self, value: &FieldValue) -> Result<(), ValidationError> {
        if value.is_empty() {
            return match &self.required {
                Some(message) => Err(ValidationError::new(RuleKind::Required, message)),
                None => Ok(()),
            };
        }

        let text = value.to_string();

        if let Some(rule) = &self.min_length {
            if !regform_validation::has_min_length(&text, rule.value) {
                return Err(ValidationError::new(RuleKind::MinLength, &rule.message));
            }
        }

        if let Some(rule) = &self.max_length {
            if !regform_validation::has_max_length(&text, rule.value) {
                return Err(ValidationError::new(RuleKind::MaxLength, &rule.message));
            }
        }

        if let Some(rule) = &self.pattern {
            if !rule.value.is_match(&text) {
                return Err(ValidationError::new(RuleKind::Pattern, &rule.message));
            }
        }

        if self.min.is_some() || self.max.is_some() {
            self.check_range(value)?;
        }

        if let Some(rule) = &self.validate {
            if !(rule.value)(value) {
                return Err(ValidationError::new(RuleKind::Validate, &rule.message));
            }
        }

        Ok(())
    }

    fn check_range(&self, value: &FieldValue) -> Result<(), ValidationError> {
        let Some(number) = value.as_number() else {
            // Text that is not a number cannot sit inside the range; report it
            // with the first bound's message.
            let (kind, rule) = match (&self.min, &self.max) {
                (Some(rule), _) => (RuleKind::Min, rule),
                (None, Some(rule)) => (RuleKind::Max, rule),
                (None, None) => return Ok(()),
            };
            return Err(ValidationError::new(kind, &rule.message));
        };

        if let Some(rule) = &self.min {
            if !regform_validation::is_at_least(number, rule.value) {
                return Err(ValidationError::new(RuleKind::Min, &rule.message));
            }
        }

        if let Some(rule) = &self.max {
            if !regform_validation::is_at_most(number, rule.value) {
                return Err(ValidationError::new(RuleKind::Max, &rule.message));
            }
        }

        Ok(())
    }

    /// JSON description of the rule set for the `data-validate` attribute.
    /// Custom predicates cannot be shipped, only flagged.
    pub fn describe(&self) -> JsonValue {
        let mut rules = Map::new();

        if let Some(message) = &self.required {
            rules.insert("required".into(), json!({ "message": message }));
        }
        if let Some(rule) = &self.min_length {
            rules.insert("minLength".into(), json!({ "value": rule.value, "message": rule.message }));
        }
        if let Some(rule) = &self.max_length {
            rules.insert("maxLength".into(), json!({ "value": rule.value, "message": rule.message }));
        }
        if let Some(rule) = &self.pattern {
            rules.insert(
                "pattern".into(),
                json!({ "value": rule.value.as_str(), "message": rule.message }),
            );
        }
        if let Some(rule) = &self.min {
            rules.insert("min".into(), json!({ "value": rule.value, "message": rule.message }));
        }
        if let Some(rule) = &self.max {
            rules.insert("max".into(), json!({ "value": rule.value, "message": rule.message }));
        }
        if let Some(rule) = &self.validate {
            rules.insert("validate".into(), json!({ "message": rule.message }));
        }

        JsonValue::Object(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn username_rules() -> RuleSet {
        RuleSet::new()
            .required("required")
            .min_length(6, "too short")
            .max_length(20, "too long")
    }

    fn age_rules() -> RuleSet {
        RuleSet::new()
            .required("required")
            .min(18.0, "below")
            .max(100.0, "above")
    }

    #[test]
    fn test_required_wins_over_everything() {
        let rules = username_rules().pattern(Regex::new("^x").unwrap(), "pattern");
        let err = rules.check(&FieldValue::empty_text()).unwrap_err();
        assert_eq!(err.kind, RuleKind::Required);
        assert_eq!(err.message, "required");
    }

    #[test]
    fn test_length_before_pattern() {
        let rules = username_rules().pattern(Regex::new("^[0-9]+$").unwrap(), "digits only");
        // Fails both minLength and pattern; minLength is reported
        let err = rules.check(&FieldValue::from("abc")).unwrap_err();
        assert_eq!(err.kind, RuleKind::MinLength);

        let err = rules.check(&FieldValue::from("abcdefg")).unwrap_err();
        assert_eq!(err.kind, RuleKind::Pattern);
    }

    #[test]
    fn test_range_before_custom() {
        fn never(_: &FieldValue) -> bool {
            false
        }
        let rules = age_rules().validate(never, "custom");
        assert_eq!(rules.check(&FieldValue::Number(5.0)).unwrap_err().kind, RuleKind::Min);
        assert_eq!(rules.check(&FieldValue::Number(50.0)).unwrap_err().kind, RuleKind::Validate);
    }

    #[rstest]
    #[case("abcde", Some(RuleKind::MinLength))]
    #[case("abcdef", None)]
    #[case("abcdefghijklmnopqrst", None)]
    #[case("abcdefghijklmnopqrstu", Some(RuleKind::MaxLength))]
    fn test_length_bounds(#[case] input: &str, #[case] expected: Option<RuleKind>) {
        let result = username_rules().check(&FieldValue::from(input));
        assert_eq!(result.err().map(|e| e.kind), expected);
    }

    #[rstest]
    #[case(17.0, Some(RuleKind::Min))]
    #[case(18.0, None)]
    #[case(100.0, None)]
    #[case(101.0, Some(RuleKind::Max))]
    fn test_range_bounds(#[case] age: f64, #[case] expected: Option<RuleKind>) {
        let result = age_rules().check(&FieldValue::Number(age));
        assert_eq!(result.err().map(|e| e.kind), expected);
    }

    #[test]
    fn test_numeric_text_is_ranged() {
        assert!(age_rules().check(&FieldValue::from("30")).is_ok());
        assert_eq!(
            age_rules().check(&FieldValue::from("twelve")).unwrap_err().kind,
            RuleKind::Min
        );
    }

    #[test]
    fn test_optional_empty_skips_pattern() {
        let rules = RuleSet::new().pattern(Regex::new("^a+$").unwrap(), "only a");
        assert!(rules.check(&FieldValue::empty_text()).is_ok());
        assert!(rules.check(&FieldValue::from("b")).is_err());
    }

    #[test]
    fn test_unchecked_box_is_empty() {
        let rules = RuleSet::new().required("must agree");
        assert_eq!(
            rules.check(&FieldValue::Bool(false)).unwrap_err().message,
            "must agree"
        );
        assert!(rules.check(&FieldValue::Bool(true)).is_ok());
    }

    #[test]
    fn test_describe() {
        let json = username_rules().describe();
        assert_eq!(json["required"]["message"], "required");
        assert_eq!(json["minLength"]["value"], 6);
        assert_eq!(json["maxLength"]["value"], 20);
        assert!(json.get("pattern").is_none());

        let json = age_rules().describe();
        assert_eq!(json["min"]["value"], 18.0);
    }
}
