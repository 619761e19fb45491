//! Tabular parser: split delimited lines and validate column counts.
//!
//! Cells are separated by a literal comma. There is no quoting, escaping or
//! trimming, so every comma starts a new cell.

use tracing::{debug, trace};

use crate::data::table::Table;
use crate::error::CsvReportError;
use crate::Result;

/// Cell delimiter.
pub const DELIMITER: char = ',';

/// Split a single line into its cells.
pub fn split_line(line: &str) -> Vec<String> {
    line.split(DELIMITER).map(str::to_string).collect()
}

/// Parse raw lines into a [`Table`].
///
/// When `has_header` is set, line 0 becomes the header and every other line
/// a row. The first processed line (header or data) fixes the baseline
/// column count; the first line that disagrees aborts the parse with
/// [`CsvReportError::StructuralMismatch`] carrying its 1-indexed number.
///
/// # Example
///
/// ```rust
/// use csvreportlib::parse;
///
/// let table = parse(&["Name,City", "Ann,Oslo"], true).unwrap();
/// assert_eq!(table.row_count(), 1);
/// assert!(parse(&["a,b", "1,2,3"], false).is_err());
/// ```
pub fn parse<S: AsRef<str>>(lines: &[S], has_header: bool) -> Result<Table> {
    let mut header = None;
    let mut rows = Vec::with_capacity(lines.len());
    let mut expected: Option<usize> = None;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let cells = split_line(line);
        let found = cells.len();

        match expected {
            None => expected = Some(found),
            Some(expected) if expected != found => {
                return Err(CsvReportError::StructuralMismatch {
                    expected,
                    found,
                    line_number: index + 1,
                    line: line.to_string(),
                });
            }
            Some(_) => {}
        }

        trace!(line_number = index + 1, cells = found, "parsed line");
        if index == 0 && has_header {
            header = Some(cells);
        } else {
            rows.push(cells);
        }
    }

    debug!(
        rows = rows.len(),
        columns = expected.unwrap_or(0),
        has_header = header.is_some(),
        "parsed csv table"
    );
    Ok(Table::new(header, rows))
}
