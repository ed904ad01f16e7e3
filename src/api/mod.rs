//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into business operations and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Request schemas and validated inputs
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
