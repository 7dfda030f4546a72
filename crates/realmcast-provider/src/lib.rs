//! Host-integration layer for webhook event forwarding.
//!
//! The host identity platform loads this system as a plugin it controls; this
//! crate models that hosting contract as capability traits and provides the
//! concrete forwarder. Delivery is best-effort and side-channel: every
//! envelope or dispatch failure is logged and swallowed so a broken webhook
//! never blocks the host's primary event processing.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod factory;
pub mod listener;

pub use factory::{ListenerProviderFactory, WebhookListenerFactory, PROVIDER_ID};
pub use listener::{RealmEventListener, WebhookEventListener};
