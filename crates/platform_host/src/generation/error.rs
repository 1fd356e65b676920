//! Failure taxonomy for AI document generation.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors reported by a [`super::ContentGenerationService`].
///
/// Every variant is recoverable: callers show the message inline and offer a retry.
pub enum GenerationError {
    /// The service credential or endpoint is missing.
    #[error("document generation is not configured: {0}")]
    Configuration(String),
    /// The service asked the caller to slow down.
    #[error("the generation service is busy; wait a moment and try again")]
    RateLimited,
    /// The service rejected the configured credential.
    #[error("the generation service rejected the credential (HTTP {status})")]
    Auth {
        /// HTTP status returned by the service.
        status: u16,
    },
    /// Transport failure or unexpected non-success status.
    #[error("could not reach the generation service: {0}")]
    Network(String),
}

impl GenerationError {
    /// Returns whether retrying without changing configuration can succeed.
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Network(_))
    }
}
