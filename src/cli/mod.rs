/// CLI argument parsing - Gateway
mod args;

pub use args::Cli;
