//! Source access: read raw lines to analyze.
//!
//! This module handles the first stage of the pipeline - getting the raw
//! text lines that the parser consumes. It provides:
//!
//! - **LineSource**: the read boundary the rest of the library calls through
//! - **FileSource**: a csv file on disk, checked for existence up front
//! - **MemorySource**: lines already held in memory
//!
//! ## Example
//!
//! ```rust,ignore
//! use csvreportlib::source::{FileSource, LineSource};
//!
//! let source = FileSource::new("people.csv")?;
//! let lines = source.read_lines()?;
//! ```

pub mod lines;

pub use lines::{FileSource, LineSource, MemorySource};
