//! Schema validation for request inputs.
//!
//! Every handler builds a *fields* struct straight from the HTTP request and
//! hands it to [`Schema::parse`]. Only a successful parse produces the typed
//! input that the business layer accepts, so unvalidated data never crosses
//! the handler boundary.
//!
//! Field rules are declared with `validator` derive attributes on the fields
//! structs. Problems found while *reading* the request (wrong JSON type, bad
//! header encoding) are collected beforehand and merged into the same issue
//! list.

use serde::Serialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// A single problem with one request field.
///
/// Serialized as-is into the body of a `400 Bad Request` response:
///
/// ```json
/// { "code": "required", "path": ["token"], "message": "Required" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub code: String,
    pub path: Vec<String>,
    pub message: String,
}

impl ValidationIssue {
    /// Creates an issue for a top-level field.
    pub fn new(
        code: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            path: vec![field.into()],
            message: message.into(),
        }
    }

    /// Field is present but has the wrong type.
    pub fn invalid_type(field: impl Into<String>, expected: &str) -> Self {
        Self::new("invalid_type", field, format!("Expected {expected}"))
    }

    /// Returns `true` if the issue is about the given top-level field.
    #[cfg(test)]
    pub(crate) fn is_for(&self, field: &str) -> bool {
        self.path.first().is_some_and(|segment| segment == field)
    }
}

/// Request input rejected by a schema.
///
/// Always carries at least one issue. Issues are ordered by path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} validation issue(s)", .issues.len())]
pub struct ValidationFailure {
    issues: Vec<ValidationIssue>,
}

impl ValidationFailure {
    pub fn new(mut issues: Vec<ValidationIssue>) -> Self {
        issues.sort_by(|a, b| a.path.cmp(&b.path));
        Self { issues }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }
}

impl From<ValidationErrors> for ValidationFailure {
    fn from(errors: ValidationErrors) -> Self {
        Self::new(issues_from(&errors))
    }
}

/// Flattens `validator` field errors into issues.
fn issues_from(errors: &ValidationErrors) -> Vec<ValidationIssue> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", error.code));

                ValidationIssue::new(error.code.to_string(), field.to_string(), message)
            })
        })
        .collect()
}

/// A validated request input built from its raw fields.
///
/// Implementors only describe how to move already-validated fields into the
/// typed input; [`Schema::parse`] owns the validation step.
pub trait Schema: Sized {
    /// Raw, optional fields as read from the request.
    type Fields: Validate;

    /// Builds the input. Only called after `fields.validate()` succeeded.
    fn from_validated(fields: Self::Fields) -> Self;

    /// Validates `fields` and builds the input.
    ///
    /// `read_issues` holds problems found while reading the request. A field
    /// that already has such an issue is not reported again by the schema
    /// rules (a mistyped field would otherwise also show up as missing).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationFailure`] if any issue was found.
    fn parse(
        fields: Self::Fields,
        read_issues: Vec<ValidationIssue>,
    ) -> Result<Self, ValidationFailure> {
        let mut issues = read_issues;

        if let Err(errors) = fields.validate() {
            for issue in issues_from(&errors) {
                if !issues.iter().any(|known| known.path == issue.path) {
                    issues.push(issue);
                }
            }
        }

        if issues.is_empty() {
            Ok(Self::from_validated(fields))
        } else {
            Err(ValidationFailure::new(issues))
        }
    }
}
