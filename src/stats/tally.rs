// src/stats/tally.rs
// =============================================================================
// Running per-language byte totals across all repositories.
//
// Languages are kept in the order they were first seen. The report sorts by
// size with a stable sort, so equal sizes come out in first-seen order.
// =============================================================================

use std::collections::HashMap;

use crate::github::LanguageBreakdown;

#[derive(Debug, Clone, Default)]
pub struct LanguageTally {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
    total: u64,
}

impl LanguageTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one repository's byte counts to the running totals.
    pub fn merge(&mut self, languages: &LanguageBreakdown) {
        for (lang, bytes) in languages.iter() {
            self.add(lang, bytes);
        }
    }

    pub fn add(&mut self, lang: &str, bytes: u64) {
        match self.index.get(lang) {
            Some(&i) => self.entries[i].1 += bytes,
            None => {
                self.index.insert(lang.to_string(), self.entries.len());
                self.entries.push((lang.to_string(), bytes));
            }
        }
        self.total += bytes;
    }

    /// Sum of every byte count merged so far.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by descending byte count; ties keep first-seen order.
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut ranked: Vec<_> = self
            .entries
            .iter()
            .map(|(lang, bytes)| (lang.as_str(), *bytes))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}
