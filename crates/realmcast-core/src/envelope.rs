//! JSON envelope construction for outbound webhook payloads.
//!
//! Wraps a raw event value with an `eventType` discriminator so receivers
//! can distinguish user events from administrative operations without
//! inspecting the event body.

use serde::Serialize;

use crate::error::Result;

/// Discriminator for user-initiated realm events.
pub const USER_EVENT: &str = "USER_EVENT";

/// Discriminator for administrative realm operations.
pub const ADMIN_EVENT: &str = "ADMIN_EVENT";

/// Wire shape of one payload: `{"eventType": ..., "event": ...}`.
///
/// Field order is part of the wire contract; `eventType` always serializes
/// first.
#[derive(Serialize)]
struct Envelope<'a, T> {
    #[serde(rename = "eventType")]
    event_type: &'a str,
    event: &'a T,
}

/// Wraps `event` with the given discriminator and serializes the result to a
/// JSON string.
///
/// The discriminator is written verbatim. [`USER_EVENT`] and [`ADMIN_EVENT`]
/// are the only values this system produces, but any string is accepted so
/// the builder stays decoupled from the host's event taxonomy.
///
/// # Errors
///
/// Returns [`crate::EnvelopeError::Serialization`] if the event value cannot
/// be represented as JSON. No partial payload is ever produced.
pub fn build_envelope<T: Serialize>(event_type: &str, event: &T) -> Result<String> {
    let envelope = Envelope { event_type, event };
    Ok(serde_json::to_string(&envelope)?)
}
