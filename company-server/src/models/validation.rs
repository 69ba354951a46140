//! Validation error types
//!
//! Serialized as the 422 body: `{"detail": [{"loc": [...], "msg": ..., "type": ...}]}`.
//! `loc` names where the problem is (`["body", "name"]`, `["path", "company_id"]`).

use std::fmt;

use serde::Serialize;
use serde_json::{json, Value as JsonValue};

/// One step of an error location: a key or a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for LocSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<usize> for LocSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub loc: Vec<LocSegment>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctx: Option<JsonValue>,
}

impl FieldError {
    fn new(loc: Vec<LocSegment>, kind: &'static str, msg: &str) -> Self {
        Self {
            loc,
            msg: msg.to_owned(),
            kind,
            input: None,
            ctx: None,
        }
    }

    fn with_input(mut self, input: JsonValue) -> Self {
        self.input = Some(input);
        self
    }

    /// Required value absent.
    pub fn missing(loc: Vec<LocSegment>) -> Self {
        Self::new(loc, "missing", "Field required")
    }

    /// Value present but not a string.
    pub fn string_type(loc: Vec<LocSegment>, input: JsonValue) -> Self {
        Self::new(loc, "string_type", "Input should be a valid string").with_input(input)
    }

    /// Value could not be read as an integer.
    pub fn int_parsing(loc: Vec<LocSegment>, input: &str) -> Self {
        Self::new(
            loc,
            "int_parsing",
            "Input should be a valid integer, unable to parse string as an integer",
        )
        .with_input(JsonValue::String(input.to_owned()))
    }

    /// Body expected to be a JSON object but was something else.
    pub fn not_an_object(input: JsonValue) -> Self {
        Self::new(
            vec!["body".into()],
            "model_attributes_type",
            "Input should be a valid dictionary or object to extract fields from",
        )
        .with_input(input)
    }

    /// Body is not parseable JSON; `position` is the byte offset of the failure.
    pub fn json_invalid(position: usize, reason: String) -> Self {
        let mut err = Self::new(
            vec!["body".into(), position.into()],
            "json_invalid",
            "JSON decode error",
        );
        err.ctx = Some(json!({ "error": reason }));
        err
    }
}

/// Collected validation failures for one request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationErrors {
    pub detail: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(error: FieldError) -> Self {
        Self {
            detail: vec![error],
        }
    }

    pub fn push(&mut self, error: FieldError) {
        self.detail.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.detail.is_empty()
    }

    pub fn len(&self) -> usize {
        self.detail.len()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .detail
            .iter()
            .map(|e| {
                let loc: Vec<String> = e
                    .loc
                    .iter()
                    .map(|seg| match seg {
                        LocSegment::Key(k) => k.clone(),
                        LocSegment::Index(i) => i.to_string(),
                    })
                    .collect();
                format!("{}: {}", loc.join("."), e.msg)
            })
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}
