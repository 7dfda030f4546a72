//! Webhook fan-out dispatch.
//!
//! This crate implements the delivery side of the event forwarding pipeline:
//! it resolves a configured set of destination URLs once at construction,
//! sends each JSON payload to every destination, and aggregates partial
//! failures into a single reportable outcome.
//!
//! # Delivery semantics
//!
//! Every configured destination is always attempted, in configuration order,
//! regardless of earlier failures. After the sweep:
//!
//! - zero failures succeed,
//! - exactly one failure surfaces that failure directly,
//! - two or more failures collapse into [`DispatchError::Multiple`] carrying
//!   the complete ordered failure list.
//!
//! Delivery is fire-and-report: no retries, no persistence, no queuing.
//!
//! # Example
//!
//! ```no_run
//! use realmcast_dispatch::{DispatchConfig, WebhookDispatcher};
//!
//! # async fn example() -> realmcast_dispatch::Result<()> {
//! let config = DispatchConfig {
//!     webhook_urls: Some("http://localhost:8080/events".to_string()),
//!     host_ip: Some("10.0.0.5".to_string()),
//!     ..DispatchConfig::default()
//! };
//!
//! let dispatcher = WebhookDispatcher::new(&config)?;
//! dispatcher.dispatch_all(r#"{"eventType":"USER_EVENT","event":{}}"#).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod dispatcher;
pub mod error;

pub use config::DispatchConfig;
pub use dispatcher::{resolve_destinations, WebhookDispatcher};
pub use error::{DispatchError, Result};

/// Content type sent with every webhook request.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

/// Default connection-establishment timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECONDS: u64 = 20;
