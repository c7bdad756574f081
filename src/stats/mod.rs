// src/stats/mod.rs
// =============================================================================
// Aggregation and reporting.
//
// Submodules:
// - tally: per-language byte totals plus the grand total
// - report: markdown rendering and the file write
// =============================================================================

mod report;
mod tally;

pub use report::{render_report, write_report};
pub use tally::LanguageTally;
