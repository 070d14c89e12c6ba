// File: src/sink.rs
// Purpose: Diagnostic sink for accepted submissions

use crate::value::FieldValue;
use serde_json::{Map, Value as JsonValue};
use std::fmt;
use tracing::info;

/// Values of an accepted submission, in field order
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub fields: Vec<(String, FieldValue)>,
}

impl Submission {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Key/value dump as a JSON object, keys in field order
    pub fn to_json(&self) -> JsonValue {
        let map: Map<String, JsonValue> = self
            .fields
            .iter()
            .map(|(name, value)| {
                let json = serde_json::to_value(value).unwrap_or(JsonValue::Null);
                (name.clone(), json)
            })
            .collect();
        JsonValue::Object(map)
    }
}

impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

/// Where accepted submissions are written
pub trait SubmissionSink: Send + Sync {
    fn emit(&self, submission: &Submission);
}

/// Default sink: one `info` event per submission
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn emit(&self, submission: &Submission) {
        info!(target: "regform::submission", values = %submission, "registration submitted");
    }
}
