pub mod app;
pub mod cli;
pub mod constants;
pub mod models;
pub mod runtime;
pub mod utils;

pub use app::Config;
pub use models::{ChatCompletionRequest, Model, ProxyModel};
pub use runtime::run;
pub use utils::AskError;
