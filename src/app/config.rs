use crate::constants::{
    CHAT_COMPLETIONS_PATH, DEFAULT_LITELLM_MASTER_KEY, DEFAULT_LITELLM_PROXY_URL,
};

/// Connection settings for the LiteLLM proxy
///
/// The binary always runs with `Config::default()`; the fields exist so tests
/// can point the client at a local mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the proxy
    pub proxy_url: String,
    /// Bearer credential sent with every request
    pub master_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proxy_url: DEFAULT_LITELLM_PROXY_URL.to_string(),
            master_key: DEFAULT_LITELLM_MASTER_KEY.to_string(),
        }
    }
}

impl Config {
    /// Full URL of the chat completions endpoint
    pub fn chat_completions_url(&self) -> String {
        format!(
            "{}{}",
            self.proxy_url.trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        )
    }
}
