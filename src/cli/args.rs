use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "ask")]
#[command(version)]
#[command(about = "Send a single prompt to the local LiteLLM proxy and print the reply", long_about = None)]
pub struct Cli {
    /// Model to query (e.g., ollama/llama3, openai/gpt-4o, anthropic/claude-3-haiku)
    pub model_name: String,

    /// Prompt text, sent verbatim as the only user message
    #[arg(allow_hyphen_values = true)]
    pub prompt: String,

    /// Anything after the prompt is accepted and ignored
    #[arg(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub extra: Vec<String>,

    /// Log diagnostics to stderr (filter with RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}
