/// Invocation handler - Gateway

mod invocation;

pub use invocation::{ask, execute, run, run_with_config, EXIT_SUCCESS, EXIT_USAGE};
