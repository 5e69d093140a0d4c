//! Error types for Health Assist.
//!
//! The taxonomy is deliberately small: wizard misuse (advancing past an
//! unmet gate, answering off-step) is a silent rejection rather than an
//! error, because the UI disables those affordances. Only chat input
//! validation and configuration parsing can actually fail.

/// Top-level error type for the assistant.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Chat error: {0}")]
    Chat(#[from] ChatError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Chat input validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Message text is empty")]
    EmptyMessage,

    #[error("A reply is already pending for this session")]
    ReplyPending,
}

/// Result type alias for the assistant.
pub type Result<T> = std::result::Result<T, Error>;
