//! Schema for editing a post.

use validator::Validate;

use crate::validation::Schema;

#[derive(Debug, Default, Validate)]
pub struct EditPostFields {
    #[validate(
        required(message = "Required"),
        length(min = 1, message = "Must not be empty")
    )]
    pub id: Option<String>,

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

/// Validated input of the edit operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPostInput {
    pub id: String,
    pub content: String,
    pub token: String,
}

impl Schema for EditPostInput {
    type Fields = EditPostFields;

    fn from_validated(fields: EditPostFields) -> Self {
        Self {
            id: fields.id.unwrap_or_default(),
            content: fields.content.unwrap_or_default(),
            token: fields.token.unwrap_or_default(),
        }
    }
}
