// Error types for the workflow

use thiserror::Error;

/// Result type alias for workflow operations
pub type Result<T> = std::result::Result<T, WorkflowError>;

/// Errors that can occur while executing a chatbot turn
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The agent run completed without producing a final output
    #[error("agent result is undefined")]
    MissingOutput,

    /// Agent runtime error (transport, auth, malformed response)
    #[error("agent runtime error: {0}")]
    Runner(String),

    /// Configuration error (missing API key, bad endpoint)
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Trace emission error
    #[error("trace emission error: {0}")]
    TraceEmission(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl WorkflowError {
    /// Create an agent runtime error
    pub fn runner(msg: impl Into<String>) -> Self {
        WorkflowError::Runner(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        WorkflowError::Configuration(msg.into())
    }

    /// Create a trace emission error
    pub fn trace(msg: impl Into<String>) -> Self {
        WorkflowError::TraceEmission(msg.into())
    }
}
