use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::traits::Model;
use super::types::{ChatCompletionRequest, ChatCompletionResponse, ModelResponse};
use crate::app::Config;
use crate::utils::AskError;

/// Chat client for the LiteLLM proxy
///
/// The proxy speaks the OpenAI wire format and handles provider routing, so the
/// model name is passed through untouched and never affects the endpoint.
pub struct ProxyModel {
    client: Client,
    endpoint: String,
    master_key: String,
}

impl ProxyModel {
    /// Create a client for the proxy described by `config`
    pub fn new(config: &Config) -> Result<Self, AskError> {
        let mut builder = Client::builder();
        // A local proxy must never be routed through HTTP_PROXY/HTTPS_PROXY
        if is_loopback(&config.proxy_url) {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| AskError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.chat_completions_url(),
            master_key: config.master_key.clone(),
        })
    }
}

fn is_loopback(url: &str) -> bool {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .is_some_and(|host| matches!(host.as_str(), "localhost" | "127.0.0.1" | "[::1]"))
}

#[async_trait]
impl Model for ProxyModel {
    async fn chat(&self, request: &ChatCompletionRequest) -> Result<ModelResponse, AskError> {
        debug!("POST {} (model: {})", self.endpoint, request.model);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.master_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AskError::Api { status, body });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| AskError::MalformedResponse(e.to_string()))?;

        let choice = parsed.choices.into_iter().next().ok_or_else(|| {
            AskError::MalformedResponse("response contained no choices".to_string())
        })?;

        if let Some(usage) = &parsed.usage {
            debug!(
                "Tokens used: {} prompt + {} completion = {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        Ok(ModelResponse {
            content: choice.message.content.unwrap_or_default(),
        })
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
