//! Runtime settings.
//!
//! Settings are layered: built-in defaults, then an optional YAML file, then
//! command-line flags and environment variables (see the binary's CLI). The
//! session cookie is loaded once here and reused for every fetch.
//!
//! ```yaml
//! session_cookie: "sid=...; uid=..."
//! fetch_timeout_secs: 30
//! platform_domain: medium.com
//! concurrency: 4
//! redis_url: https://example.upstash.io
//! redis_token: "..."
//! ```

use crate::scrapers::fetch::DEFAULT_TIMEOUT;
use crate::scrapers::medium::MEDIUM_DOMAIN;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid setting: {0}")]
    Invalid(String),
}

/// Settings for one process.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// `Cookie` header value attached to every fetch.
    pub session_cookie: Option<String>,
    /// Upper bound on one fetch, in seconds.
    pub fetch_timeout_secs: u64,
    /// Domain marker URLs must match.
    pub platform_domain: String,
    /// Maximum extractions in flight for multi-URL runs.
    pub concurrency: usize,
    pub redis_url: Option<String>,
    pub redis_token: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            session_cookie: None,
            fetch_timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            platform_domain: MEDIUM_DOMAIN.to_string(),
            concurrency: 4,
            redis_url: None,
            redis_token: None,
        }
    }
}

/// Values that take precedence over the file; `None` leaves a setting alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub session_cookie: Option<String>,
    pub fetch_timeout_secs: Option<u64>,
    pub concurrency: Option<usize>,
    pub redis_url: Option<String>,
    pub redis_token: Option<String>,
}

impl Settings {
    /// Parse settings from YAML. Missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Settings = serde_yaml::from_str(yaml)?;
        settings.normalized().validated()
    }

    /// Load settings from `path`, or defaults when no path is given.
    #[instrument(level = "info")]
    pub async fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let yaml = tokio::fs::read_to_string(Path::new(path))
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_string(),
                source,
            })?;
        let settings = Self::from_yaml_str(&yaml)?;
        info!(config_path = path, "Loaded configuration");
        Ok(settings)
    }

    /// Apply CLI/environment overrides on top of these settings.
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Result<Self, ConfigError> {
        if let Some(cookie) = overrides.session_cookie {
            self.session_cookie = Some(cookie);
        }
        if let Some(secs) = overrides.fetch_timeout_secs {
            self.fetch_timeout_secs = secs;
        }
        if let Some(n) = overrides.concurrency {
            self.concurrency = n;
        }
        if let Some(url) = overrides.redis_url {
            self.redis_url = Some(url);
        }
        if let Some(token) = overrides.redis_token {
            self.redis_token = Some(token);
        }
        self.normalized().validated()
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Blank strings count as absent.
    fn normalized(mut self) -> Self {
        fn blank_to_none(value: Option<String>) -> Option<String> {
            value
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        }
        self.session_cookie = blank_to_none(self.session_cookie);
        self.redis_url = blank_to_none(self.redis_url);
        self.redis_token = blank_to_none(self.redis_token);
        self.platform_domain = self.platform_domain.trim().to_string();
        self
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::Invalid("fetch_timeout_secs must be at least 1".into()));
        }
        if self.concurrency == 0 {
            return Err(ConfigError::Invalid("concurrency must be at least 1".into()));
        }
        if self.platform_domain.is_empty() {
            return Err(ConfigError::Invalid("platform_domain must not be empty".into()));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.fetch_timeout(), Duration::from_secs(30));
        assert_eq!(settings.platform_domain, "medium.com");
        assert_eq!(settings.session_cookie, None);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = Settings::from_yaml_str("session_cookie: \"sid=1\"\nconcurrency: 8\n").unwrap();
        assert_eq!(settings.session_cookie.as_deref(), Some("sid=1"));
        assert_eq!(settings.concurrency, 8);
        assert_eq!(settings.fetch_timeout_secs, 30);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Settings::from_yaml_str("  \n").unwrap(), Settings::default());
    }

    #[test]
    fn test_blank_strings_are_absent() {
        let settings = Settings::from_yaml_str("session_cookie: '  '\nredis_url: ''\n").unwrap();
        assert_eq!(settings.session_cookie, None);
        assert_eq!(settings.redis_url, None);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Settings::from_yaml_str("sesion_cookie: x\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = Settings::from_yaml_str("fetch_timeout_secs: 0\n").unwrap_err();
        assert!(err.to_string().contains("fetch_timeout_secs"));
    }

    #[test]
    fn test_overrides_win() {
        let base = Settings::from_yaml_str("session_cookie: file\nfetch_timeout_secs: 10\n").unwrap();
        let settings = base
            .with_overrides(SettingsOverrides {
                session_cookie: Some("env".into()),
                concurrency: Some(2),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(settings.session_cookie.as_deref(), Some("env"));
        assert_eq!(settings.fetch_timeout_secs, 10);
        assert_eq!(settings.concurrency, 2);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = Settings::load(Some("/definitely/not/here.yaml")).await.unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert_eq!(Settings::load(None).await.unwrap(), Settings::default());
    }

    #[tokio::test]
    async fn test_load_file() {
        let path = std::env::temp_dir().join(format!("freedium-config-{}.yaml", std::process::id()));
        tokio::fs::write(&path, "platform_domain: example.org\n").await.unwrap();
        let settings = Settings::load(path.to_str()).await.unwrap();
        assert_eq!(settings.platform_domain, "example.org");
        let _ = tokio::fs::remove_file(&path).await;
    }
}
