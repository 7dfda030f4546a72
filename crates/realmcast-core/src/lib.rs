//! Core domain models and event envelope construction.
//!
//! Provides the typed realm event models and the JSON envelope builder used
//! by the webhook forwarding pipeline. All other crates depend on these
//! foundational types.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod envelope;
pub mod error;
pub mod events;

pub use envelope::{build_envelope, ADMIN_EVENT, USER_EVENT};
pub use error::{EnvelopeError, Result};
pub use events::{AdminEvent, UserEvent};
