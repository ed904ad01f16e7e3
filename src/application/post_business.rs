//! Business operations invoked by the post handlers.

use async_trait::async_trait;

use crate::api::dto::{CreatePostInput, DeletePostInput, EditPostInput, GetPostsInput};
use crate::error::BusinessError;

/// Result value of a business operation.
///
/// Handlers do not inspect it; it is written to the response body unchanged.
pub type BusinessOutput = serde_json::Value;

/// Use cases behind the post endpoints, one method per handler.
///
/// Every method receives an already-validated input. The `token` inside each
/// input is the raw `Authorization` header value; verifying it is the
/// implementor's job.
///
/// Expected failures should be returned as
/// [`BusinessError::Application`](crate::error::BusinessError::Application) so
/// their status and message reach the client. Anything else becomes a generic
/// `500 Internal Server Error`.
///
/// # Implementations
///
/// Provided by the embedding application and injected via
/// [`crate::state::AppState::new`]. Test mocks available with `cfg(test)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostBusiness: Send + Sync {
    /// Lists posts, optionally filtered by the search text in `input.q`.
    async fn get_posts(&self, input: GetPostsInput) -> Result<BusinessOutput, BusinessError>;

    /// Creates a post owned by the caller.
    async fn create_post(&self, input: CreatePostInput)
    -> Result<BusinessOutput, BusinessError>;

    /// Replaces the content of an existing post.
    async fn edit_post(&self, input: EditPostInput) -> Result<BusinessOutput, BusinessError>;

    /// Deletes a post.
    async fn delete_post(&self, input: DeletePostInput)
    -> Result<BusinessOutput, BusinessError>;
}
