// src/github/pages.rs
// =============================================================================
// Lists a user's repositories, one page at a time.
//
// GitHub paginates `GET /users/{user}/repos`. Every page except the last one
// carries a Link header such as:
//
//   Link: <https://api.github.com/user/1/repos?per_page=100&page=2>; rel="next",
//         <https://api.github.com/user/1/repos?per_page=100&page=4>; rel="last"
//
// We follow the `next` URL until a response no longer has one. The pages are
// exposed as a Stream so callers pull them lazily; calling `repo_pages` again
// starts over from the first page.
// =============================================================================

use anyhow::{Context, Result};
use futures::stream::{self, Stream, TryStreamExt};
use reqwest::header::LINK;
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use super::client::GitHubClient;

const PER_PAGE: &str = "100";

/// The fields we need from a repository listing entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub full_name: String,
    #[serde(default)]
    pub fork: bool,
}

impl GitHubClient {
    /// Lazily yields pages of repositories owned by `username`.
    ///
    /// The stream ends after the page without a `rel="next"` link, or right
    /// after the first failed request.
    pub fn repo_pages<'a>(
        &'a self,
        username: &str,
    ) -> Result<impl Stream<Item = Result<Vec<Repository>>> + 'a> {
        let mut first = self.endpoint(["users", username, "repos"])?;
        first.query_pairs_mut().append_pair("per_page", PER_PAGE);

        Ok(stream::try_unfold(Some(first), move |next| async move {
            let Some(url) = next else {
                return Ok::<_, anyhow::Error>(None);
            };

            let response = self.get(url.clone()).await?;
            let next = next_page_url(response.headers())?;

            let repos: Vec<Repository> = response
                .json()
                .await
                .with_context(|| format!("Invalid repository list from {}", url))?;

            debug!("{} repositories on {}", repos.len(), url);
            Ok::<_, anyhow::Error>(Some((repos, next)))
        }))
    }

    /// Drains every page for `username` into one list.
    pub async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>> {
        let pages = self.repo_pages(username)?;
        futures::pin_mut!(pages);

        let mut repositories = Vec::new();
        let mut page_count = 0usize;
        while let Some(page) = pages.try_next().await? {
            page_count += 1;
            repositories.extend(page);
        }

        info!(
            "Found {} repositories for {} across {} page(s)",
            repositories.len(),
            username,
            page_count
        );
        Ok(repositories)
    }

    /// Repositories owned by `username`, forks excluded.
    pub async fn owned_sources(&self, username: &str) -> Result<Vec<Repository>> {
        let repositories = self.list_repositories(username).await?;
        Ok(without_forks(repositories))
    }
}

pub fn without_forks(repositories: Vec<Repository>) -> Vec<Repository> {
    repositories
        .into_iter()
        .filter(|repo| {
            if repo.fork {
                debug!("Skipping fork {}", repo.full_name);
            }
            !repo.fork
        })
        .collect()
}

fn next_page_url(headers: &reqwest::header::HeaderMap) -> Result<Option<Url>> {
    let Some(link) = headers.get(LINK).and_then(|v| v.to_str().ok()) else {
        return Ok(None);
    };

    parse_next_link(link)
        .map(|next| Url::parse(next).with_context(|| format!("Invalid next page link '{}'", next)))
        .transpose()
}

/// Returns the target of the `rel="next"` entry in a Link header value.
pub fn parse_next_link(header: &str) -> Option<&str> {
    header.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        let target = target.strip_prefix('<')?.strip_suffix('>')?;

        let is_next = parts.any(|param| {
            let Some((key, value)) = param.split_once('=') else {
                return false;
            };
            key.trim().eq_ignore_ascii_case("rel")
                && value
                    .trim()
                    .trim_matches('"')
                    .split_whitespace()
                    .any(|rel| rel.eq_ignore_ascii_case("next"))
        });

        is_next.then_some(target)
    })
}
