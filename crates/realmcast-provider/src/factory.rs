//! Plugin factory contract for the host runtime.

use std::sync::Arc;

use realmcast_dispatch::{DispatchConfig, DispatchError, Result, WebhookDispatcher};
use tracing::{debug, info};

use crate::listener::{RealmEventListener, WebhookEventListener};

/// Identifier under which the host registers this listener provider.
pub const PROVIDER_ID: &str = "webhook-event-listener";

/// Host plugin contract.
///
/// The host initializes the factory once with its resolved configuration,
/// then asks it for a listener per session, and closes it at shutdown.
pub trait ListenerProviderFactory: Send + Sync {
    /// Stable identifier the host uses to reference this provider.
    fn id(&self) -> &'static str;

    /// Called once with the resolved configuration, before any `create`.
    ///
    /// # Errors
    ///
    /// Fails when the configuration cannot produce a working dispatcher.
    fn init(&mut self, config: &DispatchConfig) -> Result<()>;

    /// Creates a listener for one host session.
    ///
    /// # Errors
    ///
    /// Fails when the factory has not been initialized.
    fn create(&self) -> Result<Arc<dyn RealmEventListener>>;

    /// Called after all provider factories have been initialized.
    fn post_init(&mut self) {}

    /// Called when the host shuts down.
    fn close(&mut self) {}
}

/// Factory producing [`WebhookEventListener`]s over one shared dispatcher.
///
/// The destination list is resolved exactly once, in [`init`]; every
/// listener created afterwards shares the frozen list and the pooled HTTP
/// client.
///
/// [`init`]: ListenerProviderFactory::init
#[derive(Debug, Default)]
pub struct WebhookListenerFactory {
    dispatcher: Option<Arc<WebhookDispatcher>>,
}

impl WebhookListenerFactory {
    /// Creates an uninitialized factory.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListenerProviderFactory for WebhookListenerFactory {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn init(&mut self, config: &DispatchConfig) -> Result<()> {
        let dispatcher = WebhookDispatcher::new(config)?;
        info!(
            provider_id = PROVIDER_ID,
            destinations = ?dispatcher.destinations(),
            "webhook listener factory initialized"
        );
        self.dispatcher = Some(Arc::new(dispatcher));
        Ok(())
    }

    fn create(&self) -> Result<Arc<dyn RealmEventListener>> {
        let dispatcher = self
            .dispatcher
            .clone()
            .ok_or_else(|| DispatchError::configuration("factory used before init"))?;

        debug!("creating webhook event listener");
        Ok(Arc::new(WebhookEventListener::new(dispatcher)))
    }

    fn close(&mut self) {
        info!(provider_id = PROVIDER_ID, "closing webhook listener factory");
        self.dispatcher = None;
    }
}
