//! Reading raw fields out of HTTP requests.
//!
//! Readers never fail the request on their own. Problems are pushed to the
//! caller's issue list and the field is reported as absent, so that the schema
//! can report everything wrong with a request in one `400` response.

use axum::{
    Json,
    body::Bytes,
    extract::{
        Path, Query,
        rejection::{BytesRejection, PathRejection, QueryRejection},
    },
    http::{HeaderMap, header},
};
use serde_json::{Map, Value};

use crate::validation::ValidationIssue;

/// Reads the `Authorization` header verbatim as the `token` field.
///
/// No scheme parsing is done; the value is forwarded opaquely to the business
/// layer.
pub fn authorization_token(
    headers: &HeaderMap,
    issues: &mut Vec<ValidationIssue>,
) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?;

    match value.to_str() {
        Ok(token) => Some(token.to_string()),
        Err(_) => {
            issues.push(ValidationIssue::invalid_type("token", "string"));
            None
        }
    }
}

/// Reads a single route parameter.
pub fn route_param(
    param: Result<Path<String>, PathRejection>,
    field: &str,
    issues: &mut Vec<ValidationIssue>,
) -> Option<String> {
    match param {
        Ok(Path(value)) => Some(value),
        Err(rejection) => {
            issues.push(ValidationIssue::new(
                "invalid_param",
                field,
                rejection.body_text(),
            ));
            None
        }
    }
}

/// Reads a deserialized query string, falling back to defaults when it is
/// malformed.
///
/// A rejection that names one of `fields` (a repeated `?q=a&q=b`, for
/// instance) is reported on that field; anything else on `query`.
pub fn query_params<T: Default>(
    query: Result<Query<T>, QueryRejection>,
    fields: &[&str],
    issues: &mut Vec<ValidationIssue>,
) -> T {
    match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            let reason = rejection.body_text();
            let issue = match fields
                .iter()
                .find(|field| reason.contains(&format!("`{field}`")))
            {
                Some(field) => ValidationIssue::new("invalid_type", *field, reason),
                None => ValidationIssue::new("invalid_query", "query", reason),
            };
            issues.push(issue);
            T::default()
        }
    }
}

/// Top-level fields of a JSON request body.
#[derive(Debug, Default)]
pub struct BodyFields(Map<String, Value>);

impl BodyFields {
    /// Parses the request body.
    ///
    /// An empty body or a body without a JSON content type has no fields.
    /// Malformed JSON and non-object documents are reported on the `body` path.
    ///
    /// # Errors
    ///
    /// Returns the rejection when the body could not be buffered at all (for
    /// example over the size limit). Nothing is known about its fields then.
    pub fn read(
        headers: &HeaderMap,
        body: Result<Bytes, BytesRejection>,
        issues: &mut Vec<ValidationIssue>,
    ) -> Result<Self, BytesRejection> {
        let bytes = body?;

        if bytes.is_empty() || !is_json_content_type(headers) {
            return Ok(Self::default());
        }

        let fields = match Json::<Value>::from_bytes(&bytes) {
            Ok(Json(Value::Object(map))) => Self(map),
            Ok(Json(_)) => {
                issues.push(ValidationIssue::invalid_type("body", "object"));
                Self::default()
            }
            Err(rejection) => {
                issues.push(ValidationIssue::new(
                    "invalid_json",
                    "body",
                    rejection.body_text(),
                ));
                Self::default()
            }
        };

        Ok(fields)
    }

    /// Returns a string field. `null` counts as absent.
    pub fn string(&self, field: &str, issues: &mut Vec<ValidationIssue>) -> Option<String> {
        match self.0.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(value)) => Some(value.clone()),
            Some(_) => {
                issues.push(ValidationIssue::invalid_type(field, "string"));
                None
            }
        }
    }
}

/// `application/json` or any `application/*+json` media type.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(mime) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<mime::Mime>().ok())
    else {
        return false;
    };

    mime.type_() == mime::APPLICATION
        && (mime.subtype() == mime::JSON || mime.suffix().is_some_and(|suffix| suffix == mime::JSON))
}
