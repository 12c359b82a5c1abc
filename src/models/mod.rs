// Gateway module for models - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod proxy;
mod traits;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

// Public re-exports - the ONLY way to access model functionality
pub use proxy::ProxyModel;
pub use traits::Model;
pub use types::{ChatCompletionRequest, ChatMessage, MessageRole, ModelResponse};
