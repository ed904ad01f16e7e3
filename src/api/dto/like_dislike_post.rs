//! Schema for liking or disliking a post.
//!
//! No route is mounted for this operation. The schema is exported so that
//! business implementations and future handlers share the same rules.

use validator::Validate;

use crate::validation::Schema;

#[derive(Debug, Default, Validate)]
pub struct LikeDislikePostFields {
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

    /// `true` to like, `false` to dislike.
    #[validate(required(message = "Required"))]
    pub like: Option<bool>,
}

/// Validated input of the like/dislike operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeDislikePostInput {
    pub id: String,
    pub token: String,
    pub like: bool,
}

impl Schema for LikeDislikePostInput {
    type Fields = LikeDislikePostFields;

    fn from_validated(fields: LikeDislikePostFields) -> Self {
        Self {
            id: fields.id.unwrap_or_default(),
            token: fields.token.unwrap_or_default(),
            like: fields.like.unwrap_or_default(),
        }
    }
}
