#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use post_handlers::api::routes::post_routes;
use post_handlers::prelude::*;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// What every stubbed business operation answers with.
#[derive(Debug, Clone)]
pub enum Outcome {
    Success(Value),
    Application(StatusCode, String),
    Unexpected(String),
}

/// A business call as received by the stub.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetPosts(GetPostsInput),
    CreatePost(CreatePostInput),
    EditPost(EditPostInput),
    DeletePost(DeletePostInput),
}

/// Business collaborator that records its inputs and replays a fixed outcome.
pub struct StubPosts {
    outcome: Outcome,
    calls: Mutex<Vec<Call>>,
}

impl StubPosts {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: Call) -> Result<BusinessOutput, BusinessError> {
        self.calls.lock().unwrap().push(call);

        match &self.outcome {
            Outcome::Success(output) => Ok(output.clone()),
            Outcome::Application(status, message) => {
                Err(AppError::new(*status, message.clone()).into())
            }
            Outcome::Unexpected(message) => Err(anyhow::anyhow!(message.clone()).into()),
        }
    }
}

#[async_trait]
impl PostBusiness for StubPosts {
    async fn get_posts(&self, input: GetPostsInput) -> Result<BusinessOutput, BusinessError> {
        self.answer(Call::GetPosts(input))
    }

    async fn create_post(
        &self,
        input: CreatePostInput,
    ) -> Result<BusinessOutput, BusinessError> {
        self.answer(Call::CreatePost(input))
    }

    async fn edit_post(&self, input: EditPostInput) -> Result<BusinessOutput, BusinessError> {
        self.answer(Call::EditPost(input))
    }

    async fn delete_post(
        &self,
        input: DeletePostInput,
    ) -> Result<BusinessOutput, BusinessError> {
        self.answer(Call::DeletePost(input))
    }
}

pub fn make_server(outcome: Outcome) -> (TestServer, Arc<StubPosts>) {
    let stub = Arc::new(StubPosts::new(outcome));
    let app = post_routes().with_state(AppState::new(stub.clone()));
    (TestServer::new(app).unwrap(), stub)
}
