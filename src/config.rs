//! Backend configuration.
//!
//! Everything the front-end needs to know about its backend is resolved once
//! at startup into a [`BackendConfig`] and handed to the component tree via
//! context. Raw values come from build-time environment variables (see
//! `build.rs`), so a deployment picks its backend when the bundle is built.

use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000";
pub const DEFAULT_NETWORK_TEST_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid backend base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("relative backend base {0:?} needs a page origin to resolve against")]
    MissingOrigin(String),

    #[error("unknown wire dialect {0:?} (expected \"camel\" or \"snake\")")]
    UnknownDialect(String),

    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Field naming used in the `/download` request body.
///
/// Backends built from different revisions disagree on the name of the
/// direct-download flag, so the choice is configuration rather than code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireDialect {
    /// `directDownload`
    #[default]
    Camel,
    /// `direct_download`
    Snake,
}

impl WireDialect {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "camel" | "camelcase" => Ok(WireDialect::Camel),
            "snake" | "snake_case" => Ok(WireDialect::Snake),
            _ => Err(ConfigError::UnknownDialect(raw.to_string())),
        }
    }

    pub fn direct_download_key(self) -> &'static str {
        match self {
            WireDialect::Camel => "directDownload",
            WireDialect::Snake => "direct_download",
        }
    }
}

/// Raw, unvalidated settings as they were handed to the build.
#[derive(Debug, Clone, Default)]
pub struct BuildSettings {
    pub api_base: Option<String>,
    pub wire: Option<String>,
    pub fill_defaults: Option<String>,
    pub diagnostics: Option<String>,
    pub network_test_timeout_secs: Option<String>,
    pub log_level: Option<String>,
}

impl BuildSettings {
    pub fn from_build_env() -> Self {
        Self {
            api_base: option_env!("DOWNLOADER_API_BASE").map(str::to_string),
            wire: option_env!("DOWNLOADER_WIRE").map(str::to_string),
            fill_defaults: option_env!("DOWNLOADER_FILL_DEFAULTS").map(str::to_string),
            diagnostics: option_env!("DOWNLOADER_DIAGNOSTICS").map(str::to_string),
            network_test_timeout_secs: option_env!("DOWNLOADER_NETWORK_TEST_TIMEOUT_SECS").map(str::to_string),
            log_level: option_env!("DOWNLOADER_LOG").map(str::to_string),
        }
    }

    /// Log level for the subscriber. Unparseable values fall back to INFO so
    /// logging is available to report the bad configuration itself.
    pub fn log_level(&self) -> tracing::Level {
        self.log_level
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(tracing::Level::INFO)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub base_url: Url,
    pub wire: WireDialect,
    /// Substitute `format=mp4` / `quality=best` when the user leaves them blank.
    pub fill_defaults: bool,
    /// Show the network test / version / update actions under the form.
    pub diagnostics: bool,
    pub network_test_timeout: Duration,
}

impl BackendConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            wire: WireDialect::default(),
            fill_defaults: false,
            diagnostics: true,
            network_test_timeout: Duration::from_secs(DEFAULT_NETWORK_TEST_TIMEOUT_SECS),
        }
    }

    /// Validates raw settings. `origin` is the page origin on the web target
    /// and is only consulted when the base is a path like `/api`.
    pub fn from_settings(settings: &BuildSettings, origin: Option<&str>) -> Result<Self> {
        let raw_base = settings.api_base.as_deref().unwrap_or(DEFAULT_API_BASE);
        let mut config = Self::new(resolve_base(raw_base, origin)?);

        if let Some(raw) = &settings.wire {
            config.wire = WireDialect::parse(raw)?;
        }
        if let Some(raw) = &settings.fill_defaults {
            config.fill_defaults = parse_flag("DOWNLOADER_FILL_DEFAULTS", raw)?;
        }
        if let Some(raw) = &settings.diagnostics {
            config.diagnostics = parse_flag("DOWNLOADER_DIAGNOSTICS", raw)?;
        }
        if let Some(raw) = &settings.network_test_timeout_secs {
            let secs: u64 = raw
                .trim()
                .parse()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    name: "DOWNLOADER_NETWORK_TEST_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
            config.network_test_timeout = Duration::from_secs(secs);
        }

        tracing::info!(
            "Backend configured at {} (wire: {:?}, fill defaults: {}, diagnostics: {})",
            config.base_url,
            config.wire,
            config.fill_defaults,
            config.diagnostics
        );

        Ok(config)
    }

    /// Joins a backend path onto the base, keeping any path prefix the base
    /// carries (`http://host/api` + `/download` -> `http://host/api/download`).
    pub fn endpoint(&self, path: &str) -> std::result::Result<Url, url::ParseError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{}/{}", base, path.trim_start_matches('/')))
    }
}

fn resolve_base(raw: &str, origin: Option<&str>) -> Result<Url> {
    let raw = raw.trim();
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let url = if raw.starts_with('/') {
        let origin = origin.ok_or_else(|| ConfigError::MissingOrigin(raw.to_string()))?;
        Url::parse(origin)
            .and_then(|origin| origin.join(raw))
            .map_err(|e| invalid(e.to_string()))?
    } else {
        Url::parse(raw).map_err(|e| invalid(e.to_string()))?
    };

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme {:?}", other))),
    }
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: raw.to_string(),
        }),
    }
}
