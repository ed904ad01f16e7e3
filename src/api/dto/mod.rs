//! Request schemas for the post endpoints.
//!
//! Each operation has two types:
//!
//! - a `*Fields` struct holding the raw, optional values read from the request,
//!   annotated with `validator` rules
//! - a `*Input` struct holding the validated values, obtainable only through
//!   [`crate::validation::Schema::parse`]

pub mod create_post;
pub mod delete_post;
pub mod edit_post;
pub mod get_posts;
pub mod like_dislike_post;

pub use create_post::{CreatePostFields, CreatePostInput};
pub use delete_post::{DeletePostFields, DeletePostInput};
pub use edit_post::{EditPostFields, EditPostInput};
pub use get_posts::{GetPostsFields, GetPostsInput, GetPostsQuery};
pub use like_dislike_post::{LikeDislikePostFields, LikeDislikePostInput};
