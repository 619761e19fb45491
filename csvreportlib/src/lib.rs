//! # csvreportlib
//!
//! Parse comma-delimited text into a validated table and derive reports
//! from its columns.
//!
//! ## Overview
//!
//! The library is a four-stage pipeline:
//!
//! - **Source**: read raw lines from a file or from memory
//! - **Data**: split lines on `,`, separate the optional header and enforce
//!   a uniform column count
//! - **Query**: frequency reports and trailing-word sorted lists
//! - **Output**: hand reports back in memory or write one file per report
//!
//! There is no quoting or escaping: a comma always starts a new cell.
//!
//! ## Example
//!
//! ```rust
//! use csvreportlib::{Importer, OutputTarget, ProcessOutcome, ReportOptions};
//!
//! let lines = [
//!     "FirstName,LastName,Address,PhoneNumber",
//!     "Jimmy,Smith,102 Long Lane,29384857",
//!     "Clive,Owen,65 Ambling Way,31214788",
//! ];
//!
//! let loaded = Importer::from_lines(lines, ReportOptions::new())
//!     .import_data()
//!     .unwrap();
//!
//! let outcome = loaded.process_output(&OutputTarget::Return).unwrap();
//! assert_eq!(
//!     outcome,
//!     ProcessOutcome::Returned(
//!         [
//!             "Clive, 1", "Jimmy, 1", " ", "Owen, 1", "Smith, 1", " ",
//!             "65 Ambling Way", "102 Long Lane",
//!         ]
//!         .iter()
//!         .map(|s| s.to_string())
//!         .collect()
//!     )
//! );
//! ```

pub mod data;
pub mod error;
pub mod importer;
pub mod output;
pub mod query;
pub mod source;

pub use data::{parse, CsvReader, Table};
pub use error::CsvReportError;
pub use importer::{Importer, LoadedImport};
pub use output::{
    assemble, deliver, write_reports, DirectorySink, LineSink, OutputTarget, ProcessOutcome,
    Report,
};
pub use query::{frequency_report, sorted_by_trailing_words, DuplicateKeyPolicy, ReportOptions};
pub use source::{FileSource, LineSource, MemorySource};

/// Result type for csvreportlib operations
pub type Result<T> = std::result::Result<T, CsvReportError>;
