//! Handlers for post endpoints (list, create, edit, delete).
//!
//! Every handler runs the same linear pipeline:
//!
//! 1. Read the operation's fields from the query string, route, body and headers
//! 2. Validate them into the typed input via [`Schema::parse`]
//! 3. Call exactly one [`crate::application::PostBusiness`] operation
//! 4. Write the output as JSON with the operation's success status
//!
//! Any failure is classified as an [`ApiError`], logged, and rendered as the
//! only response of the request. Nothing is retried.

use axum::{
    Json,
    body::Bytes,
    extract::{
        Path, Query, State,
        rejection::{BytesRejection, PathRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use crate::api::dto::{
    CreatePostFields, CreatePostInput, DeletePostFields, DeletePostInput, EditPostFields,
    EditPostInput, GetPostsFields, GetPostsInput, GetPostsQuery,
};
use crate::application::BusinessOutput;
use crate::error::ApiError;
use crate::state::AppState;
use crate::utils::request_fields::{BodyFields, authorization_token, query_params, route_param};
use crate::validation::Schema;

/// Lists posts.
///
/// # Endpoint
///
/// `GET /posts?q=<search>`
///
/// # Response Codes
///
/// - **200 OK**: business output
/// - **400 Bad Request**: list of validation issues
/// - application error status with its message, or **500** otherwise
pub async fn get_posts_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<GetPostsQuery>, QueryRejection>,
) -> Response {
    respond("get_posts", StatusCode::OK, get_posts(&state, &headers, query)).await
}

/// Creates a post.
///
/// # Endpoint
///
/// `POST /posts`
///
/// # Request Body
///
/// ```json
/// { "content": "hello" }
/// ```
///
/// # Response Codes
///
/// - **201 Created**: business output
/// - **400 Bad Request**: list of validation issues
/// - **413 Payload Too Large**: body over the size limit
/// - application error status with its message, or **500** otherwise
pub async fn create_post_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    respond(
        "create_post",
        StatusCode::CREATED,
        create_post(&state, &headers, body),
    )
    .await
}

/// Replaces the content of a post.
///
/// # Endpoint
///
/// `PUT /posts/{id}` or `PATCH /posts/{id}`
///
/// # Request Body
///
/// ```json
/// { "content": "edited" }
/// ```
pub async fn edit_post_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    respond(
        "edit_post",
        StatusCode::OK,
        edit_post(&state, id, &headers, body),
    )
    .await
}

/// Deletes a post.
///
/// # Endpoint
///
/// `DELETE /posts/{id}`
pub async fn delete_post_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    headers: HeaderMap,
) -> Response {
    respond(
        "delete_post",
        StatusCode::OK,
        delete_post(&state, id, &headers),
    )
    .await
}

async fn get_posts(
    state: &AppState,
    headers: &HeaderMap,
    query: Result<Query<GetPostsQuery>, QueryRejection>,
) -> Result<BusinessOutput, ApiError> {
    let mut issues = Vec::new();
    let params = query_params(query, &["q"], &mut issues);

    let fields = GetPostsFields {
        q: params.q,
        token: authorization_token(headers, &mut issues),
    };
    let input = GetPostsInput::parse(fields, issues)?;

    Ok(state.posts.get_posts(input).await?)
}

async fn create_post(
    state: &AppState,
    headers: &HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<BusinessOutput, ApiError> {
    let mut issues = Vec::new();
    let body = BodyFields::read(headers, body, &mut issues)?;

    let fields = CreatePostFields {
        content: body.string("content", &mut issues),
        token: authorization_token(headers, &mut issues),
    };
    let input = CreatePostInput::parse(fields, issues)?;

    Ok(state.posts.create_post(input).await?)
}

async fn edit_post(
    state: &AppState,
    id: Result<Path<String>, PathRejection>,
    headers: &HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<BusinessOutput, ApiError> {
    let mut issues = Vec::new();
    let id = route_param(id, "id", &mut issues);
    let body = BodyFields::read(headers, body, &mut issues)?;

    let fields = EditPostFields {
        id,
        content: body.string("content", &mut issues),
        token: authorization_token(headers, &mut issues),
    };
    let input = EditPostInput::parse(fields, issues)?;

    Ok(state.posts.edit_post(input).await?)
}

async fn delete_post(
    state: &AppState,
    id: Result<Path<String>, PathRejection>,
    headers: &HeaderMap,
) -> Result<BusinessOutput, ApiError> {
    let mut issues = Vec::new();

    let fields = DeletePostFields {
        id: route_param(id, "id", &mut issues),
        token: authorization_token(headers, &mut issues),
    };
    let input = DeletePostInput::parse(fields, issues)?;

    Ok(state.posts.delete_post(input).await?)
}

/// Turns the outcome of one request into its single response.
async fn respond<F>(operation: &'static str, success: StatusCode, outcome: F) -> Response
where
    F: Future<Output = Result<BusinessOutput, ApiError>>,
{
    match outcome.await {
        Ok(output) => (success, Json(output)).into_response(),
        Err(err) => {
            err.record(operation);
            err.into_response()
        }
    }
}
