//! # Post Handlers
//!
//! HTTP request-handling layer for a social posting feature, built with Axum.
//!
//! Each endpoint validates its input, calls one business operation, and maps
//! the outcome to exactly one response. Business logic, authentication and
//! persistence live behind the [`application::PostBusiness`] trait, supplied by
//! the embedding application.
//!
//! ## Architecture
//!
//! - **Application Layer** ([`application`]) - Business collaborator seam
//! - **API Layer** ([`api`]) - REST handlers, request schemas, and middleware
//! - **Validation** ([`validation`]) - Schema trait and validation issues
//! - **Errors** ([`error`]) - Error taxonomy and HTTP mapping
//!
//! ## Error Mapping
//!
//! | Failure                       | Status            | Body                 |
//! |-------------------------------|-------------------|----------------------|
//! | Input fails its schema        | `400`             | JSON list of issues  |
//! | Body cannot be buffered       | `413` or similar  | axum rejection text  |
//! | [`AppError`] from the business| the error's status| the error's message  |
//! | Anything else                 | `500`             | `Unexpected error`   |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use post_handlers::{config, server, telemetry};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = config::load_from_env()?;
//!     telemetry::init(&config)?;
//!     config.print_summary();
//!
//!     server::run(config, Arc::new(MyPostBusiness::new())).await
//! }
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod error;
pub mod state;
pub mod utils;
pub mod validation;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::{ApiError, AppError, BusinessError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports the types needed to implement the business collaborator and
/// mount the router.
pub mod prelude {
    pub use crate::api::dto::{CreatePostInput, DeletePostInput, EditPostInput, GetPostsInput};
    pub use crate::application::{BusinessOutput, PostBusiness};
    pub use crate::error::{AppError, BusinessError};
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}
