//! Trailing-word sort: order values by the words from a given position on.

use std::collections::HashMap;

use tracing::debug;

use crate::error::CsvReportError;
use crate::query::options::DuplicateKeyPolicy;
use crate::Result;

/// Word separator within a value.
const WORD_SEPARATOR: char = ' ';

/// A value paired with the key it is ordered by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortEntry {
    pub sort_key: String,
    pub original_value: String,
}

/// Derive the sort key of `value` starting at 1-indexed word `start_word`.
///
/// Every kept word is prefixed with a space, so the key of
/// `"82 Stewart St"` from word 2 is `" Stewart St"`. A `start_word` of 0 or
/// 1 keeps every word; running out of words yields an empty key.
pub fn sort_key(value: &str, start_word: usize) -> String {
    value
        .split(WORD_SEPARATOR)
        .skip(start_word.saturating_sub(1))
        .fold(String::new(), |mut key, word| {
            key.push(WORD_SEPARATOR);
            key.push_str(word);
            key
        })
}

/// Pair every value with its sort key and order by key, byte-wise.
///
/// The sort is stable, so under [`DuplicateKeyPolicy::InsertionOrder`]
/// values with equal keys keep their input order. Under
/// [`DuplicateKeyPolicy::Reject`] the first value to repeat a key fails
/// with [`CsvReportError::DuplicateSortKey`].
pub fn sort_entries<S: AsRef<str>>(
    values: &[S],
    start_word: usize,
    policy: DuplicateKeyPolicy,
) -> Result<Vec<SortEntry>> {
    let mut entries: Vec<SortEntry> = Vec::with_capacity(values.len());
    let mut seen: HashMap<String, usize> = HashMap::new();

    for value in values {
        let value = value.as_ref();
        let key = sort_key(value, start_word);

        if policy == DuplicateKeyPolicy::Reject {
            if let Some(&first) = seen.get(&key) {
                let first = &entries[first];
                return Err(CsvReportError::DuplicateSortKey {
                    key,
                    first: first.original_value.clone(),
                    second: value.to_string(),
                });
            }
            seen.insert(key.clone(), entries.len());
        }

        entries.push(SortEntry {
            sort_key: key,
            original_value: value.to_string(),
        });
    }

    entries.sort_by(|a, b| a.sort_key.cmp(&b.sort_key));
    Ok(entries)
}

/// The original values, ordered by their trailing words.
pub fn sorted_by_trailing_words<S: AsRef<str>>(
    values: &[S],
    start_word: usize,
    policy: DuplicateKeyPolicy,
) -> Result<Vec<String>> {
    let sorted: Vec<String> = sort_entries(values, start_word, policy)?
        .into_iter()
        .map(|entry| entry.original_value)
        .collect();
    debug!(
        values = sorted.len(),
        start_word,
        ?policy,
        "built trailing-word sort report"
    );
    Ok(sorted)
}
