mod builder;
mod config;

use log::{debug, info};

use std::collections::HashMap;

pub use crate::builder::Builder;
pub use crate::config::*;

/// Tabulates the first-name frequency for the given records.
///
/// The records are processed in one left-to-right pass. For each
/// record, the grouping key is the first whitespace-delimited token of
/// the name, uppercased. The full names keep their original casing and
/// input order in the result.
///
/// There are no error conditions: an empty input yields an analysis
/// with `total = 0` and empty tables. No sorting happens here, the
/// ranking is deferred to [top_entries].
pub fn build_analysis(records: &[StudentRecord]) -> NameAnalysis {
    info!("build_analysis: processing {:?} records", records.len());

    let mut full_names: Vec<String> = Vec::with_capacity(records.len());
    let mut first_names: HashMap<String, FirstNameEntry> = HashMap::new();

    for record in records.iter() {
        let full_name = record.full_name.clone();
        let key = first_token(&full_name);
        let entry = first_names.entry(key).or_default();
        entry.count += 1;
        entry.full_names.push(full_name.clone());
        full_names.push(full_name);
    }

    debug!(
        "build_analysis: {:?} distinct first names",
        first_names.len()
    );
    NameAnalysis {
        total: full_names.len() as u64,
        full_names,
        first_names,
    }
}

/// Returns at most `limit` entries of the frequency table, sorted by
/// descending count.
///
/// Ties are broken by ascending first-token order so that the ranking
/// is deterministic regardless of the table iteration order.
pub fn top_entries<'a>(
    analysis: &'a NameAnalysis,
    limit: usize,
) -> Vec<(&'a str, &'a FirstNameEntry)> {
    let mut entries: Vec<(&str, &FirstNameEntry)> = analysis
        .first_names
        .iter()
        .map(|(name, entry)| (name.as_str(), entry))
        .collect();
    entries.sort_by(|(name_a, entry_a), (name_b, entry_b)| {
        entry_b
            .count
            .cmp(&entry_a.count)
            .then_with(|| name_a.cmp(name_b))
    });
    entries.truncate(limit);
    entries
}

/// Returns the full names containing `term` as a substring, in input
/// order and with their original casing.
///
/// The match is case-insensitive and not anchored to the first token.
/// `term` is expected to be already trimmed and uppercased by the
/// caller; rejecting an empty term is also the caller's job.
pub fn search<'a>(analysis: &'a NameAnalysis, term: &str) -> Vec<&'a str> {
    analysis
        .full_names
        .iter()
        .filter(|full_name| full_name.to_uppercase().contains(term))
        .map(|full_name| full_name.as_str())
        .collect()
}

fn first_token(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .next()
        .unwrap_or(full_name)
        .to_uppercase()
}
