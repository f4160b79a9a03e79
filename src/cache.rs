//! Optional key-value cache used for connection-status reporting.
//!
//! No extraction data goes through the cache. The only consumer is the
//! `health` command, which asks a [`CacheHandle`] whether the cache is
//! reachable. A missing or unreachable cache degrades to "unavailable" and
//! never blocks extraction.
//!
//! # Design
//!
//! - [`CacheClient`]: capability trait (`connect`, `get`, `set`, `delete`, `exists`, `ping`)
//! - [`UpstashClient`]: Redis over Upstash's REST API, built on reqwest
//! - [`CacheHandle`]: constructed once at startup and passed explicitly;
//!   connects lazily on first use, exactly once, even under concurrent callers
//!
//! Like the original service object, every operation swallows its error:
//! failures are logged and reported as `None` / `false`.

use crate::utils::describe_error;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{error, info, instrument, warn};

/// Capability interface over a key-value cache.
pub trait CacheClient {
    /// Establish (and verify) the connection. Returns whether it succeeded.
    async fn connect(&self) -> bool;
    /// Whether a previous [`CacheClient::connect`] succeeded.
    fn is_connected(&self) -> bool;
    async fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, optionally expiring after `ttl`.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> bool;
    async fn delete(&self, key: &str) -> bool;
    async fn exists(&self, key: &str) -> bool;
    async fn ping(&self) -> bool;
}

/// Failure of a single cache command.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache request failed: {0}")]
    Http(String),
    #[error("cache returned HTTP {0}")]
    Status(u16),
    #[error("cache error: {0}")]
    Server(String),
    #[error("unexpected cache reply: {0}")]
    Unexpected(String),
}

#[derive(Debug, Deserialize)]
struct Reply {
    result: Option<Value>,
    error: Option<String>,
}

/// Redis via the Upstash REST API.
///
/// Each command is a `POST` of a JSON array (`["SET", "k", "v"]`) with a
/// bearer token; the reply is `{"result": ...}` or `{"error": "..."}`.
pub struct UpstashClient {
    http: Client,
    url: String,
    token: String,
    connected: AtomicBool,
}

impl UpstashClient {
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url, token)
    }

    pub fn with_client(http: Client, url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            connected: AtomicBool::new(false),
        }
    }

    async fn command(&self, args: &[&str]) -> Result<Value, CacheError> {
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(&self.token)
            .timeout(Duration::from_secs(10))
            .json(args)
            .send()
            .await
            .map_err(|e| CacheError::Http(describe_error(&e)))?;

        let status = response.status();
        let reply: Reply = match response.json().await {
            Ok(reply) => reply,
            Err(_) if !status.is_success() => return Err(CacheError::Status(status.as_u16())),
            Err(e) => return Err(CacheError::Unexpected(describe_error(&e))),
        };
        if let Some(message) = reply.error {
            return Err(CacheError::Server(message));
        }
        if !status.is_success() {
            return Err(CacheError::Status(status.as_u16()));
        }
        Ok(reply.result.unwrap_or(Value::Null))
    }

    /// Run a command on a connected client, logging and collapsing failures.
    async fn checked(&self, op: &str, key: &str, args: &[&str]) -> Option<Value> {
        if !self.is_connected() {
            return None;
        }
        match self.command(args).await {
            Ok(value) => Some(value),
            Err(e) => {
                error!(op, key, error = %e, "Cache command failed");
                None
            }
        }
    }
}

impl fmt::Debug for UpstashClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstashClient")
            .field("url", &self.url)
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl CacheClient for UpstashClient {
    #[instrument(level = "info", skip_all, fields(url = %self.url))]
    async fn connect(&self) -> bool {
        match self.command(&["PING"]).await {
            Ok(_) => {
                self.connected.store(true, Ordering::SeqCst);
                info!("Successfully connected to cache");
                true
            }
            Err(e) => {
                self.connected.store(false, Ordering::SeqCst);
                error!(error = %e, "Failed to connect to cache");
                false
            }
        }
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn get(&self, key: &str) -> Option<String> {
        match self.checked("get", key, &["GET", key]).await? {
            Value::String(s) => Some(s),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> bool {
        let secs = ttl.map(|t| t.as_secs().max(1).to_string());
        let mut args = vec!["SET", key, value];
        if let Some(secs) = secs.as_deref() {
            args.extend(["EX", secs]);
        }
        self.checked("set", key, &args).await.is_some()
    }

    async fn delete(&self, key: &str) -> bool {
        self.checked("delete", key, &["DEL", key]).await.is_some()
    }

    async fn exists(&self, key: &str) -> bool {
        matches!(
            self.checked("exists", key, &["EXISTS", key]).await,
            Some(Value::Number(n)) if n.as_u64().unwrap_or(0) > 0
        )
    }

    async fn ping(&self) -> bool {
        self.checked("ping", "", &["PING"]).await.is_some()
    }
}

/// What the health check reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Connected,
    Unavailable,
    NotConfigured,
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CacheStatus::Connected => "connected",
            CacheStatus::Unavailable => "unavailable",
            CacheStatus::NotConfigured => "not configured",
        })
    }
}

/// Process-wide cache handle with lazy, one-time connection.
#[derive(Debug)]
pub struct CacheHandle<C> {
    client: Option<C>,
    connected: OnceCell<bool>,
}

impl<C: CacheClient> CacheHandle<C> {
    pub fn new(client: C) -> Self {
        Self {
            client: Some(client),
            connected: OnceCell::new(),
        }
    }

    /// A handle with no cache behind it.
    pub fn disabled() -> Self {
        Self {
            client: None,
            connected: OnceCell::new(),
        }
    }

    /// The connected client, connecting on first call.
    pub async fn client(&self) -> Option<&C> {
        let client = self.client.as_ref()?;
        let connected = *self.connected.get_or_init(|| client.connect()).await;
        connected.then_some(client)
    }

    /// Connect if needed, then ping.
    pub async fn status(&self) -> CacheStatus {
        if self.client.is_none() {
            return CacheStatus::NotConfigured;
        }
        match self.client().await {
            Some(client) if client.ping().await => CacheStatus::Connected,
            _ => CacheStatus::Unavailable,
        }
    }
}

impl CacheHandle<UpstashClient> {
    /// Build from optional settings; blank URL or token disables the cache.
    pub fn from_settings(url: Option<&str>, token: Option<&str>) -> Self {
        let url = url.map(str::trim).filter(|s| !s.is_empty());
        let token = token.map(str::trim).filter(|s| !s.is_empty());
        match (url, token) {
            (Some(url), Some(token)) => Self::new(UpstashClient::new(url, token)),
            _ => {
                warn!("Cache URL or token not configured");
                Self::disabled()
            }
        }
    }
}
