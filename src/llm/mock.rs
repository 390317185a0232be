use super::TextGenerator;
use crate::error::GenerationError;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Deterministic generator for tests: replays queued outcomes and records
/// every prompt it receives.
pub struct MockGenerator {
    responses: Mutex<VecDeque<Result<String, GenerationError>>>,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: impl Into<String>) -> Self {
        let mock = Self::new();
        mock.add_response(Ok(text.into()));
        mock
    }

    pub fn failing(error: GenerationError) -> Self {
        let mock = Self::new();
        mock.add_response(Err(error));
        mock
    }

    pub fn add_response(&self, response: Result<String, GenerationError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TextGenerator for MockGenerator {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GenerationError::EmptyResponse))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
