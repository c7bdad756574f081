// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Submodules:
// - client: shared HTTP client with auth headers and status checking
// - pages: paginated repository listing (follows Link: rel="next")
// - languages: per-repository language byte counts
//
// Requests are made one at a time; the first failure aborts the run.
// =============================================================================

mod client;
mod languages;
mod pages;

pub use client::GitHubClient;
pub use languages::LanguageBreakdown;
pub use pages::Repository;
