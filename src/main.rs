// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap (there are none besides --help)
// 2. Read GITHUB_USERNAME / GITHUB_TOKEN into a Config
// 3. List the user's repositories and drop the forks
// 4. Fetch each repository's languages and add them to the tally
// 5. Render the markdown table and write LANG_STATS.md
// 6. Exit with proper code (0 = success, 1 = error)
//
// The report is all-or-nothing: the file is only written after every request
// has succeeded, so a failed run leaves any previous LANG_STATS.md untouched.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - environment inputs
mod github;   // src/github/ - GitHub REST API access
mod stats;    // src/stats/ - aggregation and the markdown report

use clap::Parser;
use cli::Cli;
use config::Config;
use github::{GitHubClient, Repository};
use stats::LanguageTally;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run() -> Result<()> {
    let _cli = Cli::parse();

    // Fails before any network activity when the username is missing
    let config = Config::from_env()?;
    info!("Collecting language stats for {}", config.username);

    generate_report(&config).await?;

    println!("✅ Language stats generated.");
    Ok(())
}

// Runs the whole pipeline for one configuration
async fn generate_report(config: &Config) -> Result<()> {
    let client = GitHubClient::new(config)?;

    let repositories = client.owned_sources(&config.username).await?;
    info!("{} non-fork repositories to inspect", repositories.len());

    let tally = tally_languages(&client, &repositories).await?;
    if tally.is_empty() {
        warn!("No language data found for {}", config.username);
    }
    info!(
        "{} language(s), {} bytes in total",
        tally.len(),
        tally.total()
    );

    let report = stats::render_report(&tally);
    stats::write_report(&config.output_path, &report).await
}

// One request per repository, strictly in sequence
async fn tally_languages(client: &GitHubClient, repositories: &[Repository]) -> Result<LanguageTally> {
    let mut tally = LanguageTally::new();
    for repo in repositories {
        let languages = client.fetch_languages(&repo.full_name).await?;
        tally.merge(&languages);
    }
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::Path;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(server: &MockServer, output: &Path) -> Config {
        let mut config = Config::new("alice", None, server.uri());
        config.output_path = output.to_path_buf();
        config
    }

    async fn mount_repos(server: &MockServer, repos: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/users/alice/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(repos))
            .mount(server)
            .await;
    }

    async fn mount_languages(server: &MockServer, repo: &str, status: u16, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(format!("/repos/alice/{}/languages", repo)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_report_for_two_repositories() {
        let server = MockServer::start().await;
        mount_repos(
            &server,
            json!([
                { "full_name": "alice/a", "fork": false },
                { "full_name": "alice/b", "fork": false },
            ]),
        )
        .await;
        mount_languages(&server, "a", 200, json!({ "Go": 100, "Rust": 300 })).await;
        mount_languages(&server, "b", 200, json!({ "Go": 600 })).await;

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("LANG_STATS.md");
        generate_report(&test_config(&server, &output)).await.unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.ends_with("| Go | 70.00% |\n| Rust | 30.00% |\n"));
    }

    #[tokio::test]
    async fn test_forks_are_never_fetched() {
        let server = MockServer::start().await;
        mount_repos(
            &server,
            json!([
                { "full_name": "alice/a", "fork": false },
                { "full_name": "alice/upstream", "fork": true },
            ]),
        )
        .await;
        mount_languages(&server, "a", 200, json!({ "Rust": 10 })).await;
        Mock::given(method("GET"))
            .and(path("/repos/alice/upstream/languages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "C": 1000 })))
            .expect(0)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("LANG_STATS.md");
        generate_report(&test_config(&server, &output)).await.unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("| Rust | 100.00% |"));
        assert!(!written.contains("| C |"));
    }

    #[tokio::test]
    async fn test_no_repositories_writes_no_data_report() {
        let server = MockServer::start().await;
        mount_repos(&server, json!([])).await;

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("LANG_STATS.md");
        generate_report(&test_config(&server, &output)).await.unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("No language data"));
        assert!(!written.contains('%'));
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_existing_report_untouched() {
        let server = MockServer::start().await;
        mount_repos(
            &server,
            json!([
                { "full_name": "alice/a", "fork": false },
                { "full_name": "alice/b", "fork": false },
            ]),
        )
        .await;
        mount_languages(&server, "a", 200, json!({ "Go": 100 })).await;
        mount_languages(&server, "b", 403, json!({ "message": "API rate limit exceeded" })).await;

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("LANG_STATS.md");
        std::fs::write(&output, "previous report\n").unwrap();

        let err = generate_report(&test_config(&server, &output)).await.unwrap_err();
        assert!(format!("{:#}", err).contains("403"));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous report\n");
    }

    #[tokio::test]
    async fn test_failed_listing_writes_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/alice/repos"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("LANG_STATS.md");

        assert!(generate_report(&test_config(&server, &output)).await.is_err());
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_username_fails_before_any_request() {
        // No server is started: the error must come from configuration alone
        assert!(Config::from_vars(None, None).is_err());
    }
}
