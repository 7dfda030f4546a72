//! Error types for envelope construction.

use thiserror::Error;

/// Result type alias using `EnvelopeError`.
pub type Result<T> = std::result::Result<T, EnvelopeError>;

/// Failure to build the JSON envelope for an event.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The event value contains a structure the serializer cannot represent.
    #[error("failed to serialize event to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
