//! Two-phase csv reader.
//!
//! A [`CsvReader`] is the unread state: it knows where its lines come from
//! and whether the first one is a header. [`CsvReader::read`] consumes it and
//! yields the parsed [`Table`], so a table only ever exists fully populated.

use tracing::debug;

use crate::data::parser::parse;
use crate::data::table::Table;
use crate::source::LineSource;
use crate::Result;

/// An unread csv source.
#[derive(Debug, Clone)]
pub struct CsvReader<S> {
    source: S,
    has_header: bool,
}

impl<S: LineSource> CsvReader<S> {
    pub fn new(source: S, has_header: bool) -> Self {
        Self { source, has_header }
    }

    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// Read all lines from the source and parse them.
    pub fn read(self) -> Result<Table> {
        debug!(source = %self.source.describe(), has_header = self.has_header, "reading csv");
        let lines = self.source.read_lines()?;
        parse(&lines, self.has_header)
    }
}
