//! Homepage fetcher.
//!
//! Issues one GET per call with the configured browser identity. There is no
//! retry: the outcome of the single attempt is final, and the configured
//! timeout bounds how long it may take.

use crate::config::ScraperConfig;
use crate::error::FetchError;
use crate::utils::truncate_for_log;
use reqwest::Client;
use tracing::{debug, error, info, instrument};
use url::Url;

/// Fetches the raw HTML of the configured homepage.
///
/// Cheap to clone: the inner `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    target_url: Url,
}

impl Fetcher {
    /// Build a fetcher whose client sends `config.user_agent` and gives up
    /// after `config.timeout`.
    pub fn new(config: &ScraperConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            target_url: config.target_url.clone(),
        })
    }

    /// The URL this fetcher requests.
    pub fn target_url(&self) -> &Url {
        &self.target_url
    }

    /// GET the homepage and return its body as text.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the request cannot be sent, times out,
    /// gets a non-2xx status, or the body cannot be read.
    #[instrument(level = "info", skip_all, fields(url = %self.target_url))]
    pub async fn fetch(&self) -> Result<String, FetchError> {
        let url = self.target_url.as_str();
        info!("Fetching homepage");

        let response = self
            .client
            .get(self.target_url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                error!(error = %e, timeout = e.is_timeout(), "Homepage request failed");
                FetchError::from_send(url, e)
            })?;

        let status = response.status();
        let html = response.text().await.map_err(|source| {
            error!(error = %source, "Failed to read homepage body");
            FetchError::Body {
                url: url.to_string(),
                source,
            }
        })?;

        info!(%status, bytes = html.len(), "Fetched homepage");
        debug!(preview = %truncate_for_log(&html, 200), "Homepage body");
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> ScraperConfig {
        ScraperConfig::with_target(&format!("{}/", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_body_and_sends_user_agent() {
        let server = MockServer::start().await;
        let config = ScraperConfig {
            user_agent: "test-browser/1.0".to_string(),
            ..config_for(&server)
        };

        Mock::given(method("GET"))
            .and(path("/"))
            .and(header("user-agent", "test-browser/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = Fetcher::new(&config).unwrap();
        let html = fetcher.fetch().await.unwrap();
        assert_eq!(html, "<html>ok</html>");
    }

    #[tokio::test]
    async fn test_fetch_default_user_agent_looks_like_browser() {
        let server = MockServer::start().await;

        // The default value contains a comma, so compare the raw header
        Mock::given(method("GET"))
            .and(|req: &wiremock::Request| {
                req.headers
                    .get("user-agent")
                    .and_then(|v| v.to_str().ok())
                    == Some(crate::config::DEFAULT_USER_AGENT)
            })
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = Fetcher::new(&config_for(&server)).unwrap();
        assert_eq!(fetcher.fetch().await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let fetcher = Fetcher::new(&config_for(&server)).unwrap();
        let err = fetcher.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Status { .. }));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let server = MockServer::start().await;
        let config = ScraperConfig {
            timeout: Duration::from_millis(100),
            ..config_for(&server)
        };

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html></html>")
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let fetcher = Fetcher::new(&config).unwrap();
        let err = fetcher.fetch().await.unwrap_err();
        assert!(err.is_timeout());
        assert!(matches!(err, FetchError::Transport { .. }));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Bind then drop to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = ScraperConfig::with_target(&format!("http://{addr}/")).unwrap();
        let fetcher = Fetcher::new(&config).unwrap();

        let err = fetcher.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
        assert!(err.to_string().contains(&addr.to_string()));
    }
}
