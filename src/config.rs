//! Scraper configuration: target page, browser identity and request timeout.
//!
//! Settings are layered: built-in defaults, then an optional YAML file, then
//! CLI flags (which also read environment variables). See [`crate::cli`].
//!
//! # YAML Format
//!
//! ```yaml
//! target_url: https://www.globo.com
//! user_agent: "Mozilla/5.0 ..."
//! timeout_secs: 10
//! ```

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

/// Homepage scraped when nothing else is configured.
pub const DEFAULT_TARGET_URL: &str = "https://www.globo.com";

/// Desktop Chrome identity sent with the homepage request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Upper bound on a single homepage request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Validated settings for the [`Fetcher`](crate::scrapers::fetch::Fetcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    /// Absolute http(s) URL of the homepage.
    pub target_url: Url,
    /// Value of the `User-Agent` request header.
    pub user_agent: String,
    /// Request timeout, always non-zero.
    pub timeout: Duration,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            // Constant is a valid absolute URL
            target_url: Url::parse(DEFAULT_TARGET_URL).unwrap(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ScraperConfig {
    /// Build a config pointing at `target_url` with the default identity and timeout.
    #[cfg(test)]
    pub fn with_target(target_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            target_url: parse_target_url(target_url)?,
            ..Self::default()
        })
    }
}

/// Raw, unvalidated settings as read from YAML or the command line.
///
/// Every field is optional; unset fields fall through to the next layer.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub target_url: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl ConfigOverrides {
    /// Layer `self` on top of `base`: fields set in `self` win.
    pub fn or(self, base: ConfigOverrides) -> ConfigOverrides {
        ConfigOverrides {
            target_url: self.target_url.or(base.target_url),
            user_agent: self.user_agent.or(base.user_agent),
            timeout_secs: self.timeout_secs.or(base.timeout_secs),
        }
    }

    /// Fill unset fields from the defaults and validate the result.
    pub fn resolve(self) -> Result<ScraperConfig, ConfigError> {
        let defaults = ScraperConfig::default();

        let target_url = match self.target_url {
            Some(raw) => parse_target_url(&raw)?,
            None => defaults.target_url,
        };

        let timeout = match self.timeout_secs {
            Some(0) => return Err(ConfigError::ZeroTimeout),
            Some(secs) => Duration::from_secs(secs),
            None => defaults.timeout,
        };

        Ok(ScraperConfig {
            target_url,
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
            timeout,
        })
    }
}

/// Load overrides from a YAML file.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] if the file cannot be read and
/// [`ConfigError::Parse`] if it is not a valid settings document.
#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub fn load_overrides(path: impl AsRef<Path>) -> Result<ConfigOverrides, ConfigError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: display.clone(),
        source,
    })?;

    // An empty file is a valid "no overrides" document
    if raw.trim().is_empty() {
        debug!("Config file is empty");
        return Ok(ConfigOverrides::default());
    }

    let overrides: ConfigOverrides =
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })?;

    info!(?overrides, "Loaded config file");
    Ok(overrides)
}

fn parse_target_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}
