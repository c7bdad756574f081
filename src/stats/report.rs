// src/stats/report.rs
// =============================================================================
// Renders the tally as a markdown table and writes it to disk.
//
// Output (one row per language, biggest first):
//
//   ## 📊 Language Stats
//
//   | Language | Percentage |
//   |----------|------------|
//   | Go | 70.00% |
//   | Rust | 30.00% |
//
// When nothing was counted the table is replaced by a "no data" line, so we
// never divide by a zero total.
// =============================================================================

use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use super::tally::LanguageTally;

pub const HEADING: &str = "## 📊 Language Stats";
pub const NO_DATA: &str = "_No language data available._";

const TABLE_HEADER: &str = "| Language | Percentage |";
const TABLE_SEPARATOR: &str = "|----------|------------|";

/// Share of `total` taken by `bytes`, in percent. `total` must be non-zero.
pub fn percentage(bytes: u64, total: u64) -> f64 {
    bytes as f64 * 100.0 / total as f64
}

/// Produces the report lines, each terminated by a newline.
pub fn render_lines(tally: &LanguageTally) -> Vec<String> {
    let mut lines = vec![format!("{}\n", HEADING), "\n".to_string()];

    let total = tally.total();
    if total == 0 {
        lines.push(format!("{}\n", NO_DATA));
        return lines;
    }

    lines.push(format!("{}\n", TABLE_HEADER));
    lines.push(format!("{}\n", TABLE_SEPARATOR));
    for (lang, bytes) in tally.ranked() {
        lines.push(format!("| {} | {:.2}% |\n", lang, percentage(bytes, total)));
    }

    lines
}

pub fn render_report(tally: &LanguageTally) -> String {
    render_lines(tally).concat()
}

/// Writes the report to `path`, replacing whatever was there.
pub async fn write_report(path: &Path, report: &str) -> Result<()> {
    tokio::fs::write(path, report)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote {} bytes to {}", report.len(), path.display());
    Ok(())
}
