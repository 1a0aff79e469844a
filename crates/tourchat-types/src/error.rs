use thiserror::Error;

/// Errors surfaced by the chat pipeline to its transport layer.
///
/// Provider failures never appear here; the provider chain recovers them.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("{0}")]
    Validation(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl ChatError {
    pub fn empty_message() -> Self {
        ChatError::Validation("message must not be empty".to_string())
    }
}

/// Errors from loading `config.toml` or auxiliary input files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {message}")]
    Read { path: String, message: String },

    #[error("invalid config in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("could not determine home directory")]
    NoHomeDir,
}
