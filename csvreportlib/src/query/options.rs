//! Input options for report generation.
//!
//! This module contains the configuration types that control which columns
//! are reported on and how the reports are produced.

use serde::Serialize;
use std::str::FromStr;

/// Artifact name of the first/last name frequency report.
pub const FREQUENCY_REPORT_NAME: &str = "FirstName And LastName Frequency.txt";
/// Artifact name of the address list report.
pub const ADDRESS_REPORT_NAME: &str = "Address List.txt";

/// What to do when two values derive the same trailing-word sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DuplicateKeyPolicy {
    /// Fail with `DuplicateSortKey`
    #[default]
    Reject,
    /// Keep values with equal keys in their input order
    InsertionOrder,
}

impl FromStr for DuplicateKeyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" | "error" => Ok(DuplicateKeyPolicy::Reject),
            "insertion-order" | "insertion" | "stable" => Ok(DuplicateKeyPolicy::InsertionOrder),
            _ => Err(format!("Unknown duplicate key policy: {}", s)),
        }
    }
}

/// Options for importing a csv source and producing its reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportOptions {
    /// Treat the first line as the header row
    pub has_header: bool,
    /// Columns reported by frequency, in output order
    pub frequency_columns: Vec<String>,
    /// Column whose values are re-sorted by trailing words
    pub sort_column: String,
    /// 1-indexed word the sort key starts at
    pub start_word: usize,
    /// Handling of values that collapse to the same sort key
    pub duplicate_keys: DuplicateKeyPolicy,
    /// Artifact name for the combined frequency report
    pub frequency_report_name: String,
    /// Artifact name for the sorted list report
    pub sorted_report_name: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            frequency_columns: vec!["FirstName".to_string(), "LastName".to_string()],
            sort_column: "Address".to_string(),
            start_word: 2,
            duplicate_keys: DuplicateKeyPolicy::Reject,
            frequency_report_name: FREQUENCY_REPORT_NAME.to_string(),
            sorted_report_name: ADDRESS_REPORT_NAME.to_string(),
        }
    }
}

impl ReportOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set whether the first line is a header.
    pub fn has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Builder: set the frequency report columns.
    pub fn frequency_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.frequency_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set the column sorted by trailing words.
    pub fn sort_column(mut self, column: impl Into<String>) -> Self {
        self.sort_column = column.into();
        self
    }

    /// Builder: set the word the sort key starts at.
    pub fn start_word(mut self, start_word: usize) -> Self {
        self.start_word = start_word;
        self
    }

    /// Builder: set the duplicate sort key policy.
    pub fn duplicate_keys(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.duplicate_keys = policy;
        self
    }

    /// Builder: set both artifact names.
    pub fn report_names(
        mut self,
        frequency: impl Into<String>,
        sorted: impl Into<String>,
    ) -> Self {
        self.frequency_report_name = frequency.into();
        self.sorted_report_name = sorted.into();
        self
    }
}
