//! Homepage scraping: fetch the page, then extract its posts.
//!
//! Scraping follows a two-phase pattern:
//!
//! 1. **Fetching** ([`fetch`]): one GET of the homepage with a browser identity
//! 2. **Extracting** ([`extract`]): parse the HTML and map matching elements to posts
//!
//! Only the fetch can fail. Extraction degrades to fewer (or zero) posts
//! when the markup does not match.

pub mod extract;
pub mod fetch;

use crate::config::ScraperConfig;
use crate::error::FetchError;
use crate::models::Post;
use fetch::Fetcher;
use tracing::instrument;

/// Runs the fetch → extract pipeline for one homepage.
///
/// Holds no per-request state, so one instance serves concurrent requests.
#[derive(Debug, Clone)]
pub struct PostScraper {
    fetcher: Fetcher,
}

impl PostScraper {
    /// Build a scraper for the page described by `config`.
    pub fn new(config: &ScraperConfig) -> Result<Self, FetchError> {
        Ok(Self {
            fetcher: Fetcher::new(config)?,
        })
    }

    /// Fetch the homepage and return its posts in document order.
    #[instrument(level = "info", skip_all)]
    pub async fn scrape_posts(&self) -> Result<Vec<Post>, FetchError> {
        let html = self.fetcher.fetch().await?;
        Ok(extract::extract(&html))
    }

    /// The page being scraped.
    pub fn target_url(&self) -> &url::Url {
        self.fetcher.target_url()
    }
}
