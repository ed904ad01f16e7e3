//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::PostBusiness;

/// State cloned into each request.
///
/// Holds only the business collaborator; handlers keep no state of their own.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostBusiness>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostBusiness>) -> Self {
        Self { posts }
    }
}
