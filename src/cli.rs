//! Command-line interface definitions for the posts server.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every argument is optional and can also be provided via an environment
//! variable. Scraper settings given here override those in the config file.

use crate::config::ConfigOverrides;
use clap::Parser;

/// Command-line arguments for the posts server.
///
/// # Examples
///
/// ```sh
/// # Serve on the default address, scraping the default homepage
/// globo_posts
///
/// # Custom bind address and a YAML config file
/// globo_posts --listen 127.0.0.1:8080 --config ./globo_posts.yaml
///
/// # Point the scraper somewhere else with a shorter timeout
/// globo_posts --target-url http://localhost:9000 --timeout-secs 2
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Address the HTTP server binds to
    #[arg(short, long, env = "LISTEN_ADDR", default_value = "0.0.0.0:3000")]
    pub listen: String,

    /// Optional path to a YAML file with scraper settings
    #[arg(short, long, env = "GLOBO_POSTS_CONFIG")]
    pub config: Option<String>,

    /// Homepage to scrape (absolute http or https URL)
    #[arg(long, env = "TARGET_URL")]
    pub target_url: Option<String>,

    /// User-Agent header sent with the homepage request
    #[arg(long, env = "USER_AGENT")]
    pub user_agent: Option<String>,

    /// Timeout in seconds for the homepage request
    #[arg(long, env = "FETCH_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    /// The scraper settings given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            target_url: self.target_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
