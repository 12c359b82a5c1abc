use async_trait::async_trait;

use super::types::{ChatCompletionRequest, ModelResponse};
use crate::utils::AskError;

/// Core trait for anything that can answer a chat completion request
#[async_trait]
pub trait Model: Send + Sync {
    /// Send the request and wait for the complete reply
    async fn chat(&self, request: &ChatCompletionRequest) -> Result<ModelResponse, AskError>;

    /// Endpoint the requests are sent to
    fn endpoint(&self) -> &str;
}
