//! Company record and its create/update payload

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use super::validation::{FieldError, ValidationErrors};

/// A persisted company. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub location: String,
}

impl Company {
    /// This record with its name and location replaced; the id stays.
    pub fn replaced_with(self, payload: CompanyPayload) -> Company {
        Company {
            id: self.id,
            name: payload.name,
            location: payload.location,
        }
    }
}

/// Body of create and update requests.
///
/// Only presence and type are checked; empty strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyPayload {
    pub name: String,
    pub location: String,
}

impl CompanyPayload {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }

    /// Parse a raw request body.
    ///
    /// # Example
    /// ```
    /// use company_server::models::CompanyPayload;
    ///
    /// let payload = CompanyPayload::from_json_bytes(br#"{"name":"Acme","location":"NYC"}"#).unwrap();
    /// assert_eq!(payload.name, "Acme");
    ///
    /// let errors = CompanyPayload::from_json_bytes(br#"{"name":"Acme"}"#).unwrap_err();
    /// assert_eq!(errors.len(), 1);
    /// ```
    pub fn from_json_bytes(body: &[u8]) -> Result<Self, ValidationErrors> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ValidationErrors::single(FieldError::missing(vec![
                "body".into(),
            ])));
        }

        let value: JsonValue = serde_json::from_slice(body).map_err(|e| {
            let position = char_offset(body, e.line(), e.column());
            ValidationErrors::single(FieldError::json_invalid(position, e.to_string()))
        })?;

        Self::from_value(value)
    }

    /// Validate an already-parsed JSON value, reporting every bad field.
    pub fn from_value(value: JsonValue) -> Result<Self, ValidationErrors> {
        let map = match value {
            JsonValue::Object(map) => map,
            other => return Err(ValidationErrors::single(FieldError::not_an_object(other))),
        };

        let mut errors = ValidationErrors::new();
        let name = required_string(&map, "name", &mut errors);
        let location = required_string(&map, "location", &mut errors);

        match (name, location) {
            (Some(name), Some(location)) if errors.is_empty() => Ok(Self { name, location }),
            _ => Err(errors),
        }
    }
}

fn required_string(
    map: &Map<String, JsonValue>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    let loc = vec!["body".into(), field.into()];
    match map.get(field) {
        Some(JsonValue::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.push(FieldError::string_type(loc, other.clone()));
            None
        }
        None => {
            let mut err = FieldError::missing(loc);
            err.input = Some(JsonValue::Object(map.clone()));
            errors.push(err);
            None
        }
    }
}

/// Convert serde_json's 1-based line/column into a byte offset.
fn byte_offset(body: &[u8], line: usize, column: usize) -> usize {
    let preceding: usize = body
        .split(|b| *b == b'\n')
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();
    (preceding + column.saturating_sub(1)).min(body.len())
}

/// Character (not byte) offset of a parse error, as reported in `loc`.
fn char_offset(body: &[u8], line: usize, column: usize) -> usize {
    let end = byte_offset(body, line, column);
    String::from_utf8_lossy(&body[..end]).chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocSegment;
    use serde_json::json;

    fn loc(parts: &[&str]) -> Vec<LocSegment> {
        parts.iter().map(|p| LocSegment::from(*p)).collect()
    }

    #[test]
    fn accepts_complete_payload() {
        let payload =
            CompanyPayload::from_value(json!({"name": "Acme", "location": "NYC"})).unwrap();
        assert_eq!(payload, CompanyPayload::new("Acme", "NYC"));
    }

    #[test]
    fn ignores_extra_fields() {
        let payload = CompanyPayload::from_value(
            json!({"name": "Acme", "location": "NYC", "id": 99, "ceo": "Wile E."}),
        )
        .unwrap();
        assert_eq!(payload.name, "Acme");
    }

    #[test]
    fn accepts_empty_strings() {
        let payload = CompanyPayload::from_value(json!({"name": "", "location": ""})).unwrap();
        assert!(payload.name.is_empty());
    }

    #[test]
    fn reports_every_missing_field() {
        let errors = CompanyPayload::from_value(json!({})).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.detail.iter().all(|e| e.kind == "missing"));
        assert_eq!(errors.detail[0].loc, loc(&["body", "name"]));
        assert_eq!(errors.detail[1].loc, loc(&["body", "location"]));
    }

    #[test]
    fn rejects_non_string_fields() {
        let errors =
            CompanyPayload::from_value(json!({"name": 42, "location": "NYC"})).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.detail[0].kind, "string_type");
        assert_eq!(errors.detail[0].input, Some(json!(42)));
    }

    #[test]
    fn rejects_null_field() {
        let errors =
            CompanyPayload::from_value(json!({"name": "Acme", "location": null})).unwrap_err();
        assert_eq!(errors.detail[0].kind, "string_type");
    }

    #[test]
    fn rejects_non_object_body() {
        let errors = CompanyPayload::from_value(json!(["Acme", "NYC"])).unwrap_err();
        assert_eq!(errors.detail[0].kind, "model_attributes_type");
        assert_eq!(errors.detail[0].loc, loc(&["body"]));
    }

    #[test]
    fn empty_body_is_missing() {
        let errors = CompanyPayload::from_json_bytes(b"").unwrap_err();
        assert_eq!(errors.detail[0].kind, "missing");
        assert_eq!(errors.detail[0].loc, loc(&["body"]));
    }

    #[test]
    fn malformed_json_reports_position() {
        let errors = CompanyPayload::from_json_bytes(br#"{"name": }"#).unwrap_err();
        let err = &errors.detail[0];
        assert_eq!(err.kind, "json_invalid");
        assert_eq!(err.loc[0], LocSegment::from("body"));
        assert!(matches!(err.loc[1], LocSegment::Index(_)));
    }

    #[test]
    fn byte_offset_spans_lines() {
        let body = b"{\n  \"a\": x\n}";
        // line 2, column 8 is the 'x'
        assert_eq!(byte_offset(body, 2, 8), 9);
        assert_eq!(body[9], b'x');
    }

    #[test]
    fn char_offset_counts_multibyte_once() {
        let body = "{\"é\": x}".as_bytes();
        // the 'x' sits at byte 7, character 6
        assert_eq!(byte_offset(body, 1, 8), 7);
        assert_eq!(char_offset(body, 1, 8), 6);
    }

    #[test]
    fn malformed_json_position_ignores_encoding_width() {
        let ascii = CompanyPayload::from_json_bytes(br#"{"e": x}"#).unwrap_err();
        let accented = CompanyPayload::from_json_bytes("{\"é\": x}".as_bytes()).unwrap_err();
        assert_eq!(ascii.detail[0].loc, accented.detail[0].loc);
    }

    #[test]
    fn replaced_with_keeps_id() {
        let company = Company {
            id: 3,
            name: "Acme".into(),
            location: "NYC".into(),
        };
        let updated = company.replaced_with(CompanyPayload::new("Acme Corp", "Boston"));
        assert_eq!(
            updated,
            Company {
                id: 3,
                name: "Acme Corp".into(),
                location: "Boston".into(),
            }
        );
    }

    #[test]
    fn company_serializes_flat() {
        let company = Company {
            id: 1,
            name: "Acme".into(),
            location: "NYC".into(),
        };
        assert_eq!(
            serde_json::to_value(&company).unwrap(),
            json!({"id": 1, "name": "Acme", "location": "NYC"})
        );
    }
}
