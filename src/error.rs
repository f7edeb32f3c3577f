use thiserror::Error;

/// Error type returned by the harness API.
///
/// All variants are convertible to string via `Display`. Nothing here is
/// recovered from inside the harness; callers decide whether a failure is
/// fatal.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Raised when the configured endpoint is not a valid URL.
    #[error("invalid endpoint '{endpoint}': {reason}")]
    Endpoint { endpoint: String, reason: String },

    /// Raised when the initial connection attempt fails.
    #[error("connection to {endpoint} failed: {reason}")]
    Connect { endpoint: String, reason: String },

    /// Raised when emitting on a channel fails.
    #[error("emit on '{channel}' failed: {reason}")]
    Emit {
        channel: &'static str,
        reason: String,
    },

    /// Raised when the prompt cannot be read.
    #[error("prompt read failed: {0}")]
    Io(#[from] std::io::Error),
}
