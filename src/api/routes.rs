//! API route configuration.

use crate::api::handlers::{
    create_post_handler, delete_post_handler, edit_post_handler, get_posts_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// Post endpoints.
///
/// # Endpoints
///
/// - `GET    /posts`        - List posts, optional `?q=` search text
/// - `POST   /posts`        - Create a post
/// - `PUT    /posts/{id}`   - Edit a post's content
/// - `PATCH  /posts/{id}`   - Same as `PUT`
/// - `DELETE /posts/{id}`   - Delete a post
///
/// Every endpoint expects the caller's token in the `Authorization` header.
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(get_posts_handler).post(create_post_handler))
        .route(
            "/posts/{id}",
            put(edit_post_handler)
                .patch(edit_post_handler)
                .delete(delete_post_handler),
        )
}
