//! Frequency report: grouped counts of a column's values.

use std::collections::HashMap;

use tracing::debug;

/// One distinct value and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub key: String,
    pub count: usize,
}

impl FrequencyEntry {
    /// Render as `"{key}, {count}"`.
    pub fn render(&self) -> String {
        format!("{}, {}", self.key, self.count)
    }
}

/// Count each distinct value, most frequent first.
///
/// Values are compared as opaque strings. Equal counts are ordered by key
/// using byte-wise comparison.
pub fn frequency_entries<S: AsRef<str>>(values: &[S]) -> Vec<FrequencyEntry> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value.as_ref()).or_insert(0) += 1;
    }

    let mut entries: Vec<FrequencyEntry> = counts
        .into_iter()
        .map(|(key, count)| FrequencyEntry {
            key: key.to_string(),
            count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    entries
}

/// Rendered frequency report, one `"{key}, {count}"` line per distinct value.
pub fn frequency_report<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let lines: Vec<String> = frequency_entries(values)
        .iter()
        .map(FrequencyEntry::render)
        .collect();
    debug!(values = values.len(), distinct = lines.len(), "built frequency report");
    lines
}
