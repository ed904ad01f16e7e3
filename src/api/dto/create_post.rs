//! Schema for creating a post.

use validator::Validate;

use crate::validation::Schema;

#[derive(Debug, Default, Validate)]
pub struct CreatePostFields {
    #[validate(
        required(message = "Required"),
        length(min = 1, message = "Must not be empty")
    )]
    pub content: Option<String>,

    #[validate(
        required(message = "Required"),
        length(min = 1, message = "Must not be empty")
    )]
    pub token: Option<String>,
}

/// Validated input of the create operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePostInput {
    pub content: String,
    pub token: String,
}

impl Schema for CreatePostInput {
    type Fields = CreatePostFields;

    fn from_validated(fields: CreatePostFields) -> Self {
        Self {
            content: fields.content.unwrap_or_default(),
            token: fields.token.unwrap_or_default(),
        }
    }
}
