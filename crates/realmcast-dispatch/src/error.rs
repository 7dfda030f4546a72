//! Error taxonomy for webhook dispatch.
//!
//! Per-destination failures are either HTTP failures (the endpoint answered
//! outside the 2xx range) or transport failures (no HTTP response at all).
//! Multi-destination failures always collapse into a single aggregate error
//! carrying the ordered child list, never a loose collection.

use thiserror::Error;

/// Result type alias for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;

/// Errors produced by webhook dispatch.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    /// Remote endpoint answered outside the 2xx range.
    #[error("HTTP error status: {status} for URL: {url}")]
    Http {
        /// Status code returned by the endpoint.
        status: u16,
        /// Destination that produced the response.
        url: String,
        /// Response body, kept for diagnostics.
        body: String,
    },

    /// Request never produced an HTTP response: connection refused, timeout,
    /// DNS failure, or a malformed URL.
    #[error("transport failure for URL: {url}: {message}")]
    Transport {
        /// Destination that could not be reached.
        url: String,
        /// Underlying error description.
        message: String,
    },

    /// Two or more destinations failed within one dispatch sweep.
    #[error("Multiple webhook failures occurred ({failed}/{total} failed)")]
    Multiple {
        /// Number of destinations that failed.
        failed: usize,
        /// Total number of destinations attempted.
        total: usize,
        /// Individual failures, in destination order.
        failures: Vec<DispatchError>,
    },

    /// Dispatcher could not be constructed from its configuration.
    #[error("invalid dispatcher configuration: {message}")]
    Configuration {
        /// Configuration error message.
        message: String,
    },
}

impl DispatchError {
    /// Creates an HTTP failure from a non-2xx response.
    pub fn http(status: u16, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Http { status, url: url.into(), body: body.into() }
    }

    /// Creates a transport failure for one destination.
    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport { url: url.into(), message: message.into() }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Collapses two or more per-destination failures into an aggregate.
    pub fn aggregate(failures: Vec<DispatchError>, total: usize) -> Self {
        Self::Multiple { failed: failures.len(), total, failures }
    }

    /// Individual underlying failures, in destination order.
    ///
    /// For an aggregate this is the full child list; for any other variant it
    /// is a one-element slice containing the error itself, so callers can
    /// enumerate causes uniformly.
    pub fn failures(&self) -> &[DispatchError] {
        match self {
            Self::Multiple { failures, .. } => failures,
            other => std::slice::from_ref(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_message_names_status_and_url() {
        let error = DispatchError::http(500, "http://example.com/hook", "boom");

        assert_eq!(error.to_string(), "HTTP error status: 500 for URL: http://example.com/hook");
    }

    #[test]
    fn aggregate_message_states_failure_ratio() {
        let error = DispatchError::aggregate(
            vec![
                DispatchError::http(500, "http://a/hook", ""),
                DispatchError::transport("http://b/hook", "connection refused"),
            ],
            3,
        );

        assert_eq!(error.to_string(), "Multiple webhook failures occurred (2/3 failed)");
        assert_eq!(error.failures().len(), 2);
    }

    #[test]
    fn failures_accessor_is_uniform_across_variants() {
        let single = DispatchError::transport("http://a/hook", "timed out");
        assert_eq!(single.failures().len(), 1);

        let aggregate = DispatchError::aggregate(
            vec![single.clone(), DispatchError::http(404, "http://b/hook", "")],
            2,
        );
        assert!(matches!(aggregate.failures()[0], DispatchError::Transport { .. }));
        assert!(matches!(aggregate.failures()[1], DispatchError::Http { status: 404, .. }));
    }
}
