// src/github/client.rs
// =============================================================================
// A thin wrapper around a reqwest Client that knows how to talk to the
// GitHub REST API.
//
// The client is built once from the Config and then borrowed by the
// repository lister and the language fetcher. Every request carries the same
// default headers:
// - User-Agent (GitHub rejects requests without one)
// - Accept: application/vnd.github+json
// - Authorization: token <TOKEN>, only when a token was configured
//
// Any response outside 2xx is turned into an error. Nothing retries.
// =============================================================================

use anyhow::{anyhow, Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

use crate::config::Config;

const USER_AGENT_VALUE: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

pub struct GitHubClient {
    http: Client,
    api_base: Url,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let api_base = Url::parse(&config.api_base)
            .with_context(|| format!("Invalid GitHub API base URL '{}'", config.api_base))?;

        let http = Client::builder()
            .default_headers(default_headers(config.token.as_deref())?)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { http, api_base })
    }

    // Builds `{api_base}/seg1/seg2/...`; each segment is percent-encoded
    pub(crate) fn endpoint<I>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow!("GitHub API base URL cannot take a path: {}", self.api_base))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a GET request and fails on anything but a 2xx status.
    pub(crate) async fn get(&self, url: Url) -> Result<Response> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Failed to fetch {}: HTTP {}", url, status));
        }

        Ok(response)
    }
}

fn default_headers(token: Option<&str>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));

    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("token {}", token))
            .context("GITHUB_TOKEN contains characters that are not valid in an HTTP header")?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}
