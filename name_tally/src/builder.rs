use log::debug;

pub use crate::config::*;

/// An incremental feeder for roster rows.
///
/// The builder is where blank names get dropped, so that the
/// aggregation core only ever sees trimmed, non-empty records.
///
/// ```
/// pub use name_tally::Builder;
///
/// let mut builder = Builder::new();
/// builder.add_name("Ana Silva");
/// builder.add_name("   ");
///
/// assert_eq!(builder.dropped(), 1);
/// let analysis = builder.build();
/// assert_eq!(analysis.total, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    records: Vec<StudentRecord>,
    dropped: usize,
}

impl Builder {
    pub fn new() -> Builder {
        Builder {
            records: Vec::new(),
            dropped: 0,
        }
    }

    /// Adds one raw name cell. The name is trimmed; blank or
    /// whitespace-only names are dropped. Returns false when the name
    /// was dropped.
    pub fn add_name(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            debug!("add_name: dropping blank name");
            self.dropped += 1;
            false
        } else {
            self.records.push(StudentRecord {
                full_name: trimmed.to_string(),
            });
            true
        }
    }

    /// The number of names dropped so far for being blank.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// The number of valid records accumulated so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Tabulates everything accumulated so far.
    pub fn build(self) -> NameAnalysis {
        crate::build_analysis(&self.records)
    }
}
