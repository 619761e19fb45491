//! Query processing: derive reports from table columns.
//!
//! This module handles the third stage of the pipeline - turning column
//! values into rendered report lines. It provides:
//!
//! - **Options**: Configuration for the import and its reports (`ReportOptions`)
//! - **Frequency**: grouped counts ordered by count then key
//! - **Trailing-word sort**: values ordered by the words from a given position
//!
//! Both report functions are pure.
//!
//! ## Example
//!
//! ```rust,ignore
//! use csvreportlib::query::{frequency_report, sorted_by_trailing_words, DuplicateKeyPolicy};
//!
//! let names = frequency_report(&table.column_values("FirstName")?);
//! let streets = sorted_by_trailing_words(
//!     &table.column_values("Address")?,
//!     2,
//!     DuplicateKeyPolicy::Reject,
//! )?;
//! ```

pub mod frequency;
pub mod options;
pub mod trailing;

pub use frequency::{frequency_entries, frequency_report, FrequencyEntry};
pub use options::{DuplicateKeyPolicy, ReportOptions, ADDRESS_REPORT_NAME, FREQUENCY_REPORT_NAME};
pub use trailing::{sort_entries, sort_key, sorted_by_trailing_words, SortEntry};
