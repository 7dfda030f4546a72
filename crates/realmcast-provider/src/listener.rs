//! Realm event listeners that forward events to webhooks.

use std::sync::Arc;

use realmcast_core::{build_envelope, AdminEvent, UserEvent, ADMIN_EVENT, USER_EVENT};
use realmcast_dispatch::WebhookDispatcher;
use tracing::{debug, error, info};

/// Receives realm lifecycle events from the host platform.
///
/// Implementations must treat delivery as best-effort: a broken webhook must
/// never abort or roll back the primary event being recorded by the host, so
/// handlers log failures and return normally instead of propagating them.
#[async_trait::async_trait]
pub trait RealmEventListener: Send + Sync + std::fmt::Debug {
    /// Handles a user-initiated realm event.
    async fn on_user_event(&self, event: &UserEvent);

    /// Handles an administrative realm operation.
    ///
    /// `include_representation` mirrors the host contract; when `false` the
    /// host has already stripped the resource representation from the event.
    async fn on_admin_event(&self, event: &AdminEvent, include_representation: bool);

    /// Called when the host releases this listener.
    fn close(&self) {}
}

/// Listener that envelopes each event and fans it out to the configured
/// webhook destinations.
#[derive(Debug, Clone)]
pub struct WebhookEventListener {
    dispatcher: Arc<WebhookDispatcher>,
}

impl WebhookEventListener {
    /// Creates a listener over a shared dispatcher.
    pub fn new(dispatcher: Arc<WebhookDispatcher>) -> Self {
        Self { dispatcher }
    }

    async fn deliver(&self, payload: String) {
        debug!(destinations = ?self.dispatcher.destinations(), "forwarding event payload");
        if let Err(e) = self.dispatcher.dispatch_all(&payload).await {
            error!(error = %e, "failed to send event to webhook(s)");
        }
    }
}

#[async_trait::async_trait]
impl RealmEventListener for WebhookEventListener {
    async fn on_user_event(&self, event: &UserEvent) {
        info!(
            event_type = %event.event_type,
            realm_id = %event.realm_id,
            user_id = ?event.user_id,
            "received user event"
        );

        match build_envelope(USER_EVENT, event) {
            Ok(payload) => self.deliver(payload).await,
            Err(e) => error!(error = %e, "failed to serialize user event"),
        }
    }

    async fn on_admin_event(&self, event: &AdminEvent, include_representation: bool) {
        info!(
            operation = %event.operation_type,
            resource = ?event.resource_path,
            realm_id = %event.realm_id,
            include_representation,
            "received admin event"
        );

        match build_envelope(ADMIN_EVENT, event) {
            Ok(payload) => self.deliver(payload).await,
            Err(e) => error!(error = %e, "failed to serialize admin event"),
        }
    }
}
