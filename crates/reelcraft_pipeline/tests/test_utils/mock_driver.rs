//! Mock language model driver for testing.

use async_trait::async_trait;
use reelcraft_core::{GenerateRequest, GenerateResponse};
use reelcraft_error::{OpenAiError, OpenAiErrorKind, ReelcraftResult};
use reelcraft_interface::ReelcraftDriver;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A single canned response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(OpenAiErrorKind),
}

/// Driver that replays canned responses in order and records every request.
///
/// Clones share state, so a test can keep a clone after handing the driver
/// to a `PipelineContext`.
#[derive(Debug, Clone)]
pub struct MockDriver {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
    model_name: String,
}

impl MockDriver {
    /// Create a mock that returns these texts, one per call.
    pub fn new_sequence<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new_responses(texts.into_iter().map(|t| MockResponse::Success(t.into())))
    }

    /// Create a mock from arbitrary responses.
    pub fn new_responses(responses: impl IntoIterator<Item = MockResponse>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into_iter().collect())),
            requests: Arc::new(Mutex::new(Vec::new())),
            model_name: "mock-model".to_string(),
        }
    }

    /// Number of times generate() was called.
    #[allow(dead_code)]
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Requests received so far.
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReelcraftDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> ReelcraftResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(MockResponse::Success(text)) => Ok(GenerateResponse::new(text)),
            Some(MockResponse::Error(kind)) => Err(OpenAiError::new(kind).into()),
            None => Err(OpenAiError::new(OpenAiErrorKind::EmptyResponse).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
