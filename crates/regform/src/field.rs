// File: src/field.rs
// Purpose: Immutable field descriptors and the input attributes derived from them

use crate::error::FormError;
use crate::validation::{RuleSet, ValidationError};
use crate::value::{format_number, FieldValue};

/// Kind of input rendered for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Password,
    Number,
    Url,
    Checkbox,
    Select,
}

impl InputType {
    /// Value of the HTML `type` attribute (selects have none)
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
            InputType::Number => "number",
            InputType::Url => "url",
            InputType::Checkbox => "checkbox",
            InputType::Select => "select",
        }
    }

    /// Kind of value the input produces, for binding errors
    fn value_kind(&self) -> &'static str {
        match self {
            InputType::Checkbox => "boolean",
            InputType::Number => "number",
            _ => "text",
        }
    }
}

/// Static description of one form field: what to render and which rules
/// guard it. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: InputType,
    pub rules: RuleSet,
    /// Choices offered by a select; empty for every other input
    pub options: &'static [&'static str],
}

impl FieldSpec {
    pub fn new(name: &'static str, label: &'static str, input_type: InputType, rules: RuleSet) -> Self {
        Self {
            name,
            label,
            input_type,
            rules,
            options: &[],
        }
    }

    pub fn with_options(mut self, options: &'static [&'static str]) -> Self {
        self.options = options;
        self
    }

    /// Value an untouched input holds
    pub fn empty_value(&self) -> FieldValue {
        match self.input_type {
            InputType::Checkbox => FieldValue::Bool(false),
            _ => FieldValue::empty_text(),
        }
    }

    /// Checks `value` against this field's rules
    pub fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        self.rules.check(value)
    }

    /// Converts a bound value into the shape this input holds.
    ///
    /// Numeric inputs keep unparseable text as-is so the range rules can
    /// report it; selects only accept their own options.
    pub fn coerce(&self, value: FieldValue) -> Result<FieldValue, FormError> {
        match (self.input_type, value) {
            (InputType::Checkbox, FieldValue::Bool(b)) => Ok(FieldValue::Bool(b)),
            (InputType::Number, FieldValue::Number(n)) => Ok(FieldValue::Number(n)),
            (InputType::Number, FieldValue::Text(s)) => Ok(match regform_validation::parse_number(&s) {
                Some(n) => FieldValue::Number(n),
                None => FieldValue::Text(s),
            }),
            (InputType::Select, FieldValue::Text(s)) => {
                if s.is_empty() || regform_validation::is_one_of(&s, self.options) {
                    Ok(FieldValue::Text(s))
                } else {
                    Err(FormError::UnknownOption {
                        field: self.name.to_string(),
                        value: s,
                    })
                }
            }
            (InputType::Checkbox | InputType::Number | InputType::Select, other) => {
                Err(self.mismatch(&other))
            }
            (_, FieldValue::Text(s)) => Ok(FieldValue::Text(s)),
            (_, other) => Err(self.mismatch(&other)),
        }
    }

    /// Parses the string a host received for this input
    pub fn parse_input(&self, raw: &str) -> Result<FieldValue, FormError> {
        if self.input_type != InputType::Checkbox {
            return self.coerce(FieldValue::from(raw));
        }

        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "1" | "yes" => Ok(FieldValue::Bool(true)),
            "false" | "off" | "0" | "no" | "" => Ok(FieldValue::Bool(false)),
            _ => Err(self.mismatch(&FieldValue::from(raw))),
        }
    }

    fn mismatch(&self, got: &FieldValue) -> FormError {
        FormError::TypeMismatch {
            field: self.name.to_string(),
            expected: self.input_type.value_kind(),
            got: got.kind(),
        }
    }

    /// HTML attributes derived from the rule set
    pub fn attrs(&self) -> FieldAttrs {
        let rules = &self.rules;
        FieldAttrs {
            required: rules.is_required(),
            minlength: rules.min_length.as_ref().map(|r| r.value),
            maxlength: rules.max_length.as_ref().map(|r| r.value),
            min: rules.min.as_ref().map(|r| format_number(r.value)),
            max: rules.max.as_ref().map(|r| format_number(r.value)),
            pattern: rules.pattern.as_ref().map(|r| html_pattern(r.value.as_str())),
            data_validate: rules.describe().to_string(),
        }
    }
}

/// HTML5 hint attributes plus the `data-validate` rule description
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldAttrs {
    pub required: bool,
    pub minlength: Option<usize>,
    pub maxlength: Option<usize>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub pattern: Option<String>,
    /// JSON string for client-side mirroring of the rules
    pub data_validate: String,
}

/// The `pattern` attribute is implicitly anchored, so strip explicit anchors.
/// Browsers compile it with the `v` flag, where a literal `-` at either end of
/// a character class must be escaped.
fn html_pattern(regex: &str) -> String {
    let trimmed = regex.strip_prefix('^').unwrap_or(regex);
    let trimmed = trimmed.strip_suffix('$').unwrap_or(trimmed);

    let chars: Vec<char> = trimmed.chars().collect();
    let mut out = String::with_capacity(trimmed.len() + 4);
    let mut in_class = false;
    let mut escaped = false;
    let mut prev = '\0';

    for (i, &c) in chars.iter().enumerate() {
        if escaped {
            out.push(c);
            escaped = false;
            prev = c;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '-' if in_class => {
                let at_start = prev == '[' || (prev == '^' && i >= 2 && chars[i - 2] == '[');
                let at_end = chars.get(i + 1) == Some(&']');
                if at_start || at_end {
                    out.push('\\');
                }
            }
            _ => {}
        }
        out.push(c);
        prev = c;
    }
    out
}
