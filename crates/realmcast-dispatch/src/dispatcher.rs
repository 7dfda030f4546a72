//! Webhook fan-out dispatcher.
//!
//! Resolves the destination list once at construction, then sends each
//! payload to every destination and aggregates partial failures into a
//! single outcome.

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::{
    config::DispatchConfig,
    error::{DispatchError, Result},
    CONTENT_TYPE_JSON,
};

/// Host token replaced by the `host_ip` override wherever it appears.
const HOST_TOKEN: &str = "localhost";

/// Sends JSON payloads to every configured webhook destination.
///
/// The destination list is frozen at construction and each dispatch call
/// allocates its own working state, so a dispatcher behind an `Arc` is safe
/// to invoke from concurrent event deliveries.
#[derive(Debug, Clone)]
pub struct WebhookDispatcher {
    destinations: Vec<String>,
    client: reqwest::Client,
}

impl WebhookDispatcher {
    /// Creates a dispatcher from the given configuration.
    ///
    /// Resolves the destination list (see [`resolve_destinations`]) and
    /// builds an HTTP client with the configured request and connect
    /// timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Configuration`] if the HTTP client cannot be
    /// built.
    pub fn new(config: &DispatchConfig) -> Result<Self> {
        let destinations =
            resolve_destinations(config.webhook_urls.as_deref(), config.host_ip.as_deref());

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| {
                DispatchError::configuration(format!("failed to build HTTP client: {e}"))
            })?;

        info!(destinations = ?destinations, "webhook dispatcher initialized");
        Ok(Self { destinations, client })
    }

    /// Resolved destination URLs, in configured order.
    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    /// Sends `payload` to every configured destination.
    ///
    /// Destinations are attempted sequentially in configured order; a
    /// failing destination never suppresses attempts to the others. With no
    /// destinations configured this is a no-op that performs no network I/O.
    ///
    /// # Errors
    ///
    /// - exactly one destination failed: that failure is returned directly,
    ///   preserving its specific variant and message;
    /// - two or more failed: [`DispatchError::Multiple`] carrying the
    ///   complete ordered failure list.
    pub async fn dispatch_all(&self, payload: &str) -> Result<()> {
        if self.destinations.is_empty() {
            debug!("no webhook destinations configured, skipping dispatch");
            return Ok(());
        }

        let span = info_span!(
            "webhook_dispatch",
            dispatch_id = %Uuid::new_v4(),
            destinations = self.destinations.len(),
        );

        async move {
            debug!(payload_len = payload.len(), "dispatching payload to all destinations");

            let mut failures = Vec::new();
            for url in &self.destinations {
                if let Err(error) = self.send(url, payload).await {
                    warn!(url = %url, error = %error, "webhook delivery failed");
                    failures.push(error);
                }
            }

            if failures.is_empty() {
                return Ok(());
            }
            if failures.len() == 1 {
                return Err(failures.remove(0));
            }
            Err(DispatchError::aggregate(failures, self.destinations.len()))
        }
        .instrument(span)
        .await
    }

    /// Sends the payload to one destination and classifies the outcome.
    async fn send(&self, url: &str, payload: &str) -> Result<()> {
        debug!(url = %url, "sending webhook");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(payload.to_owned())
            .send()
            .await
            .map_err(|e| classify_transport(url, &e))?;

        let status = response.status();
        if status.is_success() {
            info!(url = %url, status = status.as_u16(), "webhook delivered");
            return Ok(());
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("[failed to read response body: {e}]"));
        Err(DispatchError::http(status.as_u16(), url, body))
    }
}

/// Classifies a transport-level `reqwest` error for one destination.
fn classify_transport(url: &str, error: &reqwest::Error) -> DispatchError {
    if error.is_timeout() {
        DispatchError::transport(url, format!("request timed out: {error}"))
    } else if error.is_connect() {
        DispatchError::transport(url, format!("connection failed: {error}"))
    } else {
        DispatchError::transport(url, error.to_string())
    }
}

/// Resolves the raw comma-separated destination configuration into the
/// frozen destination list.
///
/// Splits on `,`, trims each piece, drops blanks, and preserves relative
/// order and duplicates. A non-blank `host_ip` replaces every literal
/// occurrence of `localhost` in every URL. This is a plain substring
/// replacement, not an authority-aware parse: a `localhost` in a path or
/// query component is rewritten too.
pub fn resolve_destinations(urls: Option<&str>, host_ip: Option<&str>) -> Vec<String> {
    let Some(urls) = urls else {
        return Vec::new();
    };
    if urls.trim().is_empty() {
        return Vec::new();
    }

    let replacement = host_ip.map(str::trim).filter(|ip| !ip.is_empty());
    if let Some(ip) = replacement {
        info!(host_ip = %ip, "replacing localhost with host IP in webhook URLs");
    }

    urls.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| match replacement {
            Some(ip) => piece.replace(HOST_TOKEN, ip),
            None => piece.to_owned(),
        })
        .collect()
}
