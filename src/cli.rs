// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// lang-stats takes no arguments at all: everything it needs comes from the
// environment (see config.rs). We still go through clap so that --help and
// --version behave like every other CLI, and so that stray arguments are
// rejected instead of silently ignored.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "lang-stats",
    version,
    about = "Tally language usage across a GitHub user's repositories",
    long_about = "lang-stats lists every non-fork repository owned by GITHUB_USERNAME, \
                  sums the bytes GitHub attributes to each language, and writes the \
                  percentages as a markdown table to LANG_STATS.md.\n\n\
                  Environment:\n  \
                  GITHUB_USERNAME  user whose repositories are counted (required)\n  \
                  GITHUB_TOKEN     access token sent with every request (optional)"
)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_accepted() {
        assert!(Cli::try_parse_from(["lang-stats"]).is_ok());
        assert!(Cli::try_parse_from(["lang-stats", "octocat"]).is_err());
        assert!(Cli::try_parse_from(["lang-stats", "--json"]).is_err());
    }
}
