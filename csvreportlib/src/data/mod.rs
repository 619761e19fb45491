//! Data collection: parse lines into a table.
//!
//! This module handles the second stage of the pipeline - turning raw lines
//! into a validated, column-addressable table. It provides:
//!
//! - **Parsing**: comma splitting with column-count validation (`parse`)
//! - **Storage**: the read-only `Table` with lookup by column name
//! - **Reading**: `CsvReader`, the unread state that produces a `Table`
//!
//! ## Example
//!
//! ```rust,ignore
//! use csvreportlib::data::{CsvReader, Table};
//! use csvreportlib::source::MemorySource;
//!
//! let table: Table = CsvReader::new(MemorySource::new(lines), true).read()?;
//! let names = table.column_values("FirstName")?;
//! ```

pub mod parser;
pub mod reader;
pub mod table;

pub use parser::{parse, split_line, DELIMITER};
pub use reader::CsvReader;
pub use table::Table;
