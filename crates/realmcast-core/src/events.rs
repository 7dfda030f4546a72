//! Typed realm lifecycle event models.
//!
//! Mirrors the wire shape the host identity platform reports: camelCase
//! field names, epoch-millisecond timestamps, optional fields omitted when
//! absent.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-initiated realm event (login, logout, registration, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEvent {
    /// Unique event ID assigned by the host platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// When the event occurred.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub time: DateTime<Utc>,

    /// Event type name as reported by the host, e.g. `LOGIN`.
    #[serde(rename = "type")]
    pub event_type: String,

    /// Realm in which the event occurred.
    pub realm_id: String,

    /// Client application involved, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// Acting user, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Session the event belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Source address of the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    /// Error code when the event records a failed action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Free-form event details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
}

/// An administrative realm operation (resource create, update, delete).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminEvent {
    /// Unique event ID assigned by the host platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// When the operation occurred.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub time: DateTime<Utc>,

    /// Realm the operation targeted.
    pub realm_id: String,

    /// Operation performed, e.g. `CREATE` or `DELETE`.
    pub operation_type: String,

    /// Kind of resource the operation targeted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    /// Path of the targeted resource, e.g. `/users/123`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_path: Option<String>,

    /// JSON representation of the resource after the operation, when the
    /// host was configured to include it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representation: Option<String>,

    /// Error code when the operation failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
