// File: src/value.rs
// Purpose: Raw values held by form inputs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current raw value of one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Empty text for text-like inputs
    pub fn empty_text() -> Self {
        FieldValue::Text(String::new())
    }

    /// Whether a `required` rule would reject this value.
    ///
    /// Only the empty string and an unchecked box count as empty; whitespace
    /// is a value like any other.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Bool(b) => !*b,
            FieldValue::Number(_) => false,
            FieldValue::Text(s) => s.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view: numbers directly, text when it parses
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => regform_validation::parse_number(s),
            FieldValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Kind name used in binding errors
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Bool(_) => "boolean",
            FieldValue::Number(_) => "number",
            FieldValue::Text(_) => "text",
        }
    }
}

/// Format a number the way a numeric input shows it (no trailing `.0`)
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Number(n) => f.write_str(&format_number(*n)),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emptiness() {
        assert!(FieldValue::empty_text().is_empty());
        assert!(FieldValue::Bool(false).is_empty());
        assert!(!FieldValue::Bool(true).is_empty());
        assert!(!FieldValue::from(" ").is_empty());
        assert!(!FieldValue::Number(0.0).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::Number(18.0).to_string(), "18");
        assert_eq!(FieldValue::Number(18.5).to_string(), "18.5");
        assert_eq!(FieldValue::Bool(true).to_string(), "true");
        assert_eq!(FieldValue::from("VIP").to_string(), "VIP");
    }

    #[test]
    fn test_numeric_view() {
        assert_eq!(FieldValue::from("42").as_number(), Some(42.0));
        assert_eq!(FieldValue::from("forty").as_number(), None);
        assert_eq!(FieldValue::Bool(true).as_number(), None);
    }

    #[test]
    fn test_serializes_untagged() {
        let json = serde_json::to_string(&vec![
            FieldValue::from("a"),
            FieldValue::Number(25.0),
            FieldValue::Bool(true),
        ])
        .unwrap();
        assert_eq!(json, r#"["a",25.0,true]"#);
    }
}
