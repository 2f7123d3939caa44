//! HTTP fetcher implementation
//!
//! One blocking-in-spirit GET per call: the menu awaits it before showing the
//! next prompt. Transport failures, malformed URLs and non-2xx responses all
//! collapse into [`FetchError`], which callers treat as "fetch failed".

use crate::config::HttpConfig;
use reqwest::{Client, StatusCode};
use scraper::Html;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Reasons a page could not be fetched
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl { url: String, source: url::ParseError },

    #[error("{status} for url: {url}")]
    Status { url: String, status: StatusCode },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Builds an HTTP client with client-default redirects and headers
///
/// # Arguments
///
/// * `config` - The HTTP section of the configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use scrape_calc::config::HttpConfig;
/// use scrape_calc::headlines::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    let user_agent = config.user_agent.clone().unwrap_or_else(|| {
        format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    });

    let mut builder = Client::builder().user_agent(user_agent);
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}

/// Fetches a URL and returns the response body
///
/// Exactly one request is sent; there are no retries.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let target = Url::parse(url.trim()).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    tracing::debug!("GET {}", target);
    let response = client.get(target).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: response.url().to_string(),
            status,
        });
    }

    let body = response.text().await?;
    tracing::debug!("Fetched {} bytes from {}", body.len(), url);

    Ok(body)
}

/// Fetches a URL and parses the body into an HTML document tree
///
/// Failures are logged here; callers only need to report them and skip
/// extraction.
pub async fn fetch_document(client: &Client, url: &str) -> Result<Html, FetchError> {
    match fetch_page(client, url).await {
        Ok(body) => Ok(Html::parse_document(&body)),
        Err(e) => {
            tracing::error!("Error fetching the URL: {}", e);
            Err(e)
        }
    }
}
