//! Schema for listing posts.

use serde::Deserialize;
use validator::Validate;

use crate::validation::Schema;

/// Query string of `GET /posts`.
#[derive(Debug, Default, Deserialize)]
pub struct GetPostsQuery {
    /// Optional search text.
    pub q: Option<String>,
}

#[derive(Debug, Default, Validate)]
pub struct GetPostsFields {
    #[validate(length(min = 1, message = "Must not be empty"))]
    pub q: Option<String>,

    #[validate(
        required(message = "Required"),
        length(min = 1, message = "Must not be empty")
    )]
    pub token: Option<String>,
}

/// Validated input of the list operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetPostsInput {
    pub q: Option<String>,
    pub token: String,
}

impl Schema for GetPostsInput {
    type Fields = GetPostsFields;

    fn from_validated(fields: GetPostsFields) -> Self {
        Self {
            q: fields.q,
            token: fields.token.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_text_is_optional() {
        let input = GetPostsInput::parse(
            GetPostsFields {
                q: None,
                token: Some("tok".to_string()),
            },
            Vec::new(),
        )
        .unwrap();

        assert_eq!(input.q, None);
        assert_eq!(input.token, "tok");
    }

    #[test]
    fn test_search_text_is_kept() {
        let input = GetPostsInput::parse(
            GetPostsFields {
                q: Some("rust".to_string()),
                token: Some("tok".to_string()),
            },
            Vec::new(),
        )
        .unwrap();

        assert_eq!(input.q.as_deref(), Some("rust"));
    }

    #[test]
    fn test_empty_search_text_rejected() {
        let failure = GetPostsInput::parse(
            GetPostsFields {
                q: Some(String::new()),
                token: Some("tok".to_string()),
            },
            Vec::new(),
        )
        .unwrap_err();

        assert_eq!(failure.issues().len(), 1);
        assert!(failure.issues()[0].is_for("q"));
    }

    #[test]
    fn test_missing_token_rejected() {
        let failure = GetPostsInput::parse(GetPostsFields::default(), Vec::new()).unwrap_err();

        assert_eq!(failure.issues().len(), 1);
        assert!(failure.issues()[0].is_for("token"));
        assert_eq!(failure.issues()[0].code, "required");
    }
}
