use thiserror::Error;

/// Main error type for ask
///
/// Every variant renders as the human-readable detail that follows
/// `An error occurred: ` on standard output.
#[derive(Error, Debug)]
pub enum AskError {
    #[error("Connection error: {0}")]
    Connection(#[from] reqwest::Error),

    #[error("Error code: {} - {body}", .status.as_u16())]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
