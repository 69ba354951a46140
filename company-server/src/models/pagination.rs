//! Offset/limit window for list queries

use super::validation::{FieldError, ValidationErrors};

/// Default number of rows skipped
pub const DEFAULT_SKIP: i64 = 0;

/// Default maximum rows returned
pub const DEFAULT_LIMIT: i64 = 100;

/// List window: skip `skip` rows, return at most `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    skip: i64,
    limit: i64,
}

impl ListParams {
    /// Create a window. Negative values are clamped to 0.
    pub fn new(skip: i64, limit: i64) -> Self {
        Self {
            skip: skip.max(0),
            limit: limit.max(0),
        }
    }

    /// Parse raw query-string values, falling back to defaults when absent.
    pub fn parse(skip: Option<&str>, limit: Option<&str>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let skip = parse_int("skip", skip, DEFAULT_SKIP, &mut errors);
        let limit = parse_int("limit", limit, DEFAULT_LIMIT, &mut errors);

        if errors.is_empty() {
            Ok(Self::new(skip, limit))
        } else {
            Err(errors)
        }
    }

    /// SQL OFFSET value.
    pub fn skip(&self) -> i64 {
        self.skip
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn parse_int(
    field: &'static str,
    raw: Option<&str>,
    default: i64,
    errors: &mut ValidationErrors,
) -> i64 {
    match raw {
        None => default,
        Some(s) => s.parse().unwrap_or_else(|_| {
            errors.push(FieldError::int_parsing(vec!["query".into(), field.into()], s));
            default
        }),
    }
}
