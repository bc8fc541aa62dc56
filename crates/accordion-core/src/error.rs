//! Error types for the signal system.

/// Result type alias for signal operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the signal system.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The connection ID is invalid or has already been disconnected.
    #[error("invalid or already disconnected connection ID")]
    InvalidConnection,
}
