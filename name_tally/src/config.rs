// ********* Input data structures ***********

use std::collections::HashMap;

/// One valid roster row.
///
/// The name is expected to be trimmed and non-empty. Filtering blank
/// rows is the responsibility of the ingestion step (see the builder
/// API), it is not re-validated here.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct StudentRecord {
    pub full_name: String,
}

// ******** Output data structures *********

/// The tally for one first name: how often it occurs and the full
/// names sharing it, in input order and with their original casing.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct FirstNameEntry {
    pub count: u64,
    pub full_names: Vec<String>,
}

/// The aggregation result of one roster load.
///
/// It is built in one pass and never mutated afterwards: a new load
/// replaces the value wholesale. The keys of `first_names` are the
/// uppercased first token of each name.
///
/// Invariant: the sum of all the counts in `first_names` equals
/// `total`, which equals `full_names.len()`.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct NameAnalysis {
    /// All the valid full names, one per record, in input order.
    pub full_names: Vec<String>,
    /// Frequency table keyed by uppercased first token.
    pub first_names: HashMap<String, FirstNameEntry>,
    /// The number of valid records.
    pub total: u64,
}

impl NameAnalysis {
    /// True when the roster had no valid row. Callers are expected to
    /// check this before presenting statistics.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The number of distinct first names.
    pub fn distinct_first_names(&self) -> usize {
        self.first_names.len()
    }

    /// The single highest-count entry, if any.
    pub fn most_common(&self) -> Option<(&str, &FirstNameEntry)> {
        crate::top_entries(self, 1).into_iter().next()
    }
}
