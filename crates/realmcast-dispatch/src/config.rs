//! Configuration for webhook dispatch.

use std::time::Duration;

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::{DEFAULT_CONNECT_TIMEOUT_SECONDS, DEFAULT_REQUEST_TIMEOUT_SECONDS};

const CONFIG_FILE: &str = "realmcast.toml";

/// Dispatch configuration with defaults, file, and environment overrides.
///
/// Configuration is loaded in priority order:
/// 1. Environment variables (highest priority)
/// 2. Configuration file (`realmcast.toml`)
/// 3. Built-in defaults (lowest priority)
///
/// The configuration is an explicit immutable value passed to the dispatcher
/// constructor; there is no process-wide mutable state. "No webhooks
/// configured" is a valid deployment state, so every field has a usable
/// default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Comma-separated webhook destination URLs.
    ///
    /// Environment variable: `WEBHOOK_URLS`
    #[serde(default, alias = "WEBHOOK_URLS")]
    pub webhook_urls: Option<String>,

    /// Replacement for the literal host token `localhost` in every
    /// destination URL. Lets a containerized deployment rewrite loopback
    /// URLs into reachable container-network addresses.
    ///
    /// Environment variable: `HOST_IP`
    #[serde(default, alias = "HOST_IP")]
    pub host_ip: Option<String>,

    /// HTTP request timeout in seconds.
    ///
    /// Environment variable: `REQUEST_TIMEOUT_SECONDS`
    #[serde(default = "default_request_timeout", alias = "REQUEST_TIMEOUT_SECONDS")]
    pub request_timeout_seconds: u64,

    /// Connection-establishment timeout in seconds.
    ///
    /// Environment variable: `CONNECT_TIMEOUT_SECONDS`
    #[serde(default = "default_connect_timeout", alias = "CONNECT_TIMEOUT_SECONDS")]
    pub connect_timeout_seconds: u64,
}

impl DispatchConfig {
    /// Loads configuration from defaults, `realmcast.toml`, and environment
    /// variable overrides.
    ///
    /// # Errors
    ///
    /// Fails when a source cannot be parsed or a value fails validation.
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(""));

        let config: Self = figment.extract().context("failed to load dispatch configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Per-request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Connection-establishment timeout as a [`Duration`].
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    fn validate(&self) -> Result<()> {
        if self.request_timeout_seconds == 0 {
            anyhow::bail!("request_timeout_seconds must be greater than 0");
        }

        if self.connect_timeout_seconds == 0 {
            anyhow::bail!("connect_timeout_seconds must be greater than 0");
        }

        Ok(())
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            webhook_urls: None,
            host_ip: None,
            request_timeout_seconds: default_request_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECONDS
}

fn default_connect_timeout() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECONDS
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, env, sync::Mutex};

    use super::*;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct TestEnvGuard {
        _lock: std::sync::MutexGuard<'static, ()>,
        vars: Vec<String>,
        originals: HashMap<String, Option<String>>,
    }

    impl TestEnvGuard {
        fn new() -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            Self { _lock: lock, vars: Vec::new(), originals: HashMap::new() }
        }

        fn set_var(&mut self, key: &str, value: &str) {
            if !self.vars.contains(&key.to_string()) {
                self.originals.insert(key.to_string(), env::var(key).ok());
                self.vars.push(key.to_string());
            }
            env::set_var(key, value);
        }
    }

    impl Drop for TestEnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                match self.originals.get(var) {
                    Some(Some(value)) => env::set_var(var, value),
                    Some(None) => env::remove_var(var),
                    None => {},
                }
            }
        }
    }

    #[test]
    fn defaults_match_operational_parameters() {
        let config = DispatchConfig::default();

        assert!(config.webhook_urls.is_none());
        assert!(config.host_ip.is_none());
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.connect_timeout(), Duration::from_secs(20));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn env_variables_override_defaults() {
        let mut guard = TestEnvGuard::new();
        guard.set_var("WEBHOOK_URLS", "http://localhost:8080/a,http://localhost:8081/b");
        guard.set_var("HOST_IP", "10.0.0.5");
        guard.set_var("REQUEST_TIMEOUT_SECONDS", "5");

        let config = DispatchConfig::load().expect("config should load from env");

        assert_eq!(
            config.webhook_urls.as_deref(),
            Some("http://localhost:8080/a,http://localhost:8081/b")
        );
        assert_eq!(config.host_ip.as_deref(), Some("10.0.0.5"));
        assert_eq!(config.request_timeout_seconds, 5);
        assert_eq!(config.connect_timeout_seconds, DEFAULT_CONNECT_TIMEOUT_SECONDS);
    }

    #[test]
    fn zero_timeouts_are_rejected() {
        let config = DispatchConfig { request_timeout_seconds: 0, ..DispatchConfig::default() };
        assert!(config.validate().is_err());

        let config = DispatchConfig { connect_timeout_seconds: 0, ..DispatchConfig::default() };
        assert!(config.validate().is_err());
    }
}
