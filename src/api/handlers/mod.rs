//! HTTP request handlers for API endpoints.

pub mod posts;

pub use posts::{create_post_handler, delete_post_handler, edit_post_handler, get_posts_handler};
