//! Schema for deleting a post.

use validator::Validate;

use crate::validation::Schema;

#[derive(Debug, Default, Validate)]
pub struct DeletePostFields {
    #[validate(
        required(message = "Required"),
        length(min = 1, message = "Must not be empty")
    )]
    pub id: Option<String>,

    #[validate(
        required(message = "Required"),
        length(min = 1, message = "Must not be empty")
    )]
    pub token: Option<String>,
}

/// Validated input of the delete operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePostInput {
    pub id: String,
    pub token: String,
}

impl Schema for DeletePostInput {
    type Fields = DeletePostFields;

    fn from_validated(fields: DeletePostFields) -> Self {
        Self {
            id: fields.id.unwrap_or_default(),
            token: fields.token.unwrap_or_default(),
        }
    }
}
