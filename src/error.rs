//! Error types for fetching the homepage and loading configuration.
//!
//! Extraction has no error type: markup that does not match simply yields
//! fewer posts.

use thiserror::Error;

/// The outbound homepage request failed.
///
/// Every variant carries the target URL so the message surfaced to HTTP
/// callers says what was being fetched.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (DNS, refused, timeout)
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status
    #[error("request to {url} returned an error status: {source}")]
    Status {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be read as text
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Classify a `reqwest` error raised while sending a request.
    pub fn from_send(url: &str, source: reqwest::Error) -> Self {
        if source.is_status() {
            Self::Status {
                url: url.to_string(),
                source,
            }
        } else {
            Self::Transport {
                url: url.to_string(),
                source,
            }
        }
    }

    /// Whether the failure was the request timeout firing.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Client(source) => source.is_timeout(),
            Self::Transport { source, .. }
            | Self::Status { source, .. }
            | Self::Body { source, .. } => source.is_timeout(),
        }
    }
}

/// Startup configuration could not be loaded or is invalid.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML for the expected schema
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// The target URL is not a valid absolute URL
    #[error("invalid target URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The target URL uses a scheme other than http or https
    #[error("unsupported scheme '{scheme}' in target URL, expected http or https")]
    UnsupportedScheme { scheme: String },

    /// A zero timeout would disable the bound on the outbound request
    #[error("timeout_secs must be greater than zero")]
    ZeroTimeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::UnsupportedScheme {
            scheme: "ftp".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported scheme 'ftp' in target URL, expected http or https"
        );
        assert_eq!(
            ConfigError::ZeroTimeout.to_string(),
            "timeout_secs must be greater than zero"
        );
    }

    #[test]
    fn test_invalid_url_message_includes_input() {
        let source = url::Url::parse("not a url").unwrap_err();
        let err = ConfigError::InvalidUrl {
            url: "not a url".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid target URL 'not a url'"));
    }
}
