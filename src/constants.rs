/// Constants module to avoid magic numbers in the codebase

// Network Configuration
pub const DEFAULT_LITELLM_PROXY_URL: &str = "http://localhost:4000";
pub const DEFAULT_LITELLM_MASTER_KEY: &str = "sk-litellm-master-key";
pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

// CLI output
pub const USAGE: &str = "Usage: ask <model_name> \"<your_prompt>\"";
pub const ERROR_PREFIX: &str = "An error occurred: ";
