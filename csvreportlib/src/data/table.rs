//! Tabular store: an in-memory, column-addressable table.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::CsvReportError;
use crate::Result;

/// Parsed csv data: an optional header plus uniformly sized rows.
///
/// Built once by the parser and read-only afterwards. Column names resolve
/// to positions through a map built at construction; values are projected
/// out of the row-major data on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    header: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
    #[serde(skip)]
    positions: HashMap<String, usize>,
}

impl Table {
    /// Build a table from an optional header and its rows.
    ///
    /// Callers guarantee every row has the same length as the header.
    pub(crate) fn new(header: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        let mut table = Self {
            header,
            rows,
            positions: HashMap::new(),
        };
        // Duplicate header names resolve to their first position.
        for (position, name) in table.column_names().into_iter().enumerate() {
            table.positions.entry(name).or_insert(position);
        }
        table
    }

    /// Header names, or `None` when the source had no header row.
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    /// Data rows, excluding the header.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns (zero for a headerless table without rows).
    pub fn column_count(&self) -> usize {
        match &self.header {
            Some(header) => header.len(),
            None => self.rows.first().map_or(0, Vec::len),
        }
    }

    /// Column identifiers: the header, or `"1".."N"` when there is none.
    pub fn column_names(&self) -> Vec<String> {
        match &self.header {
            Some(header) => header.clone(),
            None => (1..=self.column_count()).map(|n| n.to_string()).collect(),
        }
    }

    /// Position of a named column.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.positions
            .get(name)
            .copied()
            .ok_or_else(|| CsvReportError::ColumnNotFound {
                column: name.to_string(),
                available: self.column_names(),
            })
    }

    /// All values of a named column, in row order.
    pub fn column_values(&self, name: &str) -> Result<Vec<String>> {
        let index = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row[index].clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn sample() -> Table {
        Table::new(
            Some(row(&["FirstName", "LastName"])),
            vec![row(&["Jimmy", "Smith"]), row(&["Clive", "Owen"])],
        )
    }

    #[test]
    fn test_column_values_by_header_name() {
        let table = sample();
        assert_eq!(table.column_values("LastName").unwrap(), vec!["Smith", "Owen"]);
        assert_eq!(table.column_index("FirstName").unwrap(), 0);
    }

    #[test]
    fn test_column_not_found() {
        let err = sample().column_values("Address").unwrap_err();
        match err {
            CsvReportError::ColumnNotFound { column, available } => {
                assert_eq!(column, "Address");
                assert_eq!(available, vec!["FirstName", "LastName"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_synthetic_column_names() {
        let table = Table::new(None, vec![row(&["a", "b", "c"]), row(&["d", "e", "f"])]);

        assert_eq!(table.column_names(), vec!["1", "2", "3"]);
        assert_eq!(table.column_values("3").unwrap(), vec!["c", "f"]);
        assert!(table.column_values("0").is_err());
        assert!(table.column_values("4").is_err());
    }

    #[test]
    fn test_header_is_not_a_synthetic_name() {
        assert!(sample().column_values("1").is_err());
    }

    #[test]
    fn test_empty_headerless_table_has_no_columns() {
        let table = Table::new(None, Vec::new());
        assert_eq!(table.column_count(), 0);
        assert!(table.is_empty());
        assert!(table.column_values("1").is_err());
    }

    #[test]
    fn test_duplicate_header_resolves_to_first() {
        let table = Table::new(Some(row(&["A", "A"])), vec![row(&["first", "second"])]);
        assert_eq!(table.column_values("A").unwrap(), vec!["first"]);
    }

    #[test]
    fn test_serializes_header_and_rows() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["header"][1], "LastName");
        assert_eq!(json["rows"][1][0], "Clive");
        assert!(json.get("positions").is_none());
    }
}
