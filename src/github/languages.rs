// src/github/languages.rs
// =============================================================================
// Fetches the per-language byte counts of one repository:
//
//   GET /repos/{owner}/{repo}/languages
//   { "Rust": 48213, "Shell": 1022 }
//
// The response is a JSON object. We keep its entries in the order GitHub
// sent them, which is why LanguageBreakdown deserializes into a Vec of pairs
// instead of a HashMap.
// =============================================================================

use anyhow::{Context, Result};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use tracing::debug;

use super::client::GitHubClient;

/// Language name to byte count for a single repository, in response order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageBreakdown(Vec<(String, u64)>);

impl LanguageBreakdown {
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(lang, bytes)| (lang.as_str(), *bytes))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for LanguageBreakdown {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(lang, bytes)| (lang.into(), bytes)).collect())
    }
}

impl<'de> Deserialize<'de> for LanguageBreakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BreakdownVisitor;

        impl<'de> Visitor<'de> for BreakdownVisitor {
            type Value = LanguageBreakdown;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping language names to byte counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((lang, bytes)) = map.next_entry::<String, u64>()? {
                    entries.push((lang, bytes));
                }
                Ok(LanguageBreakdown(entries))
            }
        }

        deserializer.deserialize_map(BreakdownVisitor)
    }
}

impl GitHubClient {
    /// Fetches the language breakdown of `full_name` (`owner/repo`).
    pub async fn fetch_languages(&self, full_name: &str) -> Result<LanguageBreakdown> {
        let mut segments = vec!["repos"];
        segments.extend(full_name.split('/'));
        segments.push("languages");
        let url = self.endpoint(segments)?;

        let languages: LanguageBreakdown = self
            .get(url)
            .await
            .with_context(|| format!("Failed to fetch languages for {}", full_name))?
            .json()
            .await
            .with_context(|| format!("Invalid language data for {}", full_name))?;

        if languages.is_empty() {
            debug!("{}: no language data", full_name);
        } else {
            debug!("{}: {} language(s)", full_name, languages.len());
        }
        Ok(languages)
    }
}
