//! High-level import API.
//!
//! An [`Importer`] holds an unread source and its options. Calling
//! [`Importer::import_data`] reads and validates the whole source, producing
//! a [`LoadedImport`] that can build and deliver the standard reports:
//!
//! 1. The frequency report for each configured column, joined with `" "`
//! 2. The configured column sorted by its trailing words

use std::path::Path;

use tracing::{debug, info};

use crate::data::{CsvReader, Table};
use crate::output::{combine_sections, deliver, OutputTarget, ProcessOutcome, Report};
use crate::query::{frequency_report, sorted_by_trailing_words, ReportOptions};
use crate::source::{FileSource, LineSource, MemorySource};
use crate::Result;

/// A csv import that has not been read yet.
#[derive(Debug, Clone)]
pub struct Importer<S> {
    reader: CsvReader<S>,
    options: ReportOptions,
}

impl<S: LineSource> Importer<S> {
    pub fn new(source: S, options: ReportOptions) -> Self {
        Self {
            reader: CsvReader::new(source, options.has_header),
            options,
        }
    }

    /// Read and parse the source.
    pub fn import_data(self) -> Result<LoadedImport> {
        let table = self.reader.read()?;
        info!(rows = table.row_count(), columns = table.column_count(), "imported csv");
        Ok(LoadedImport {
            table,
            options: self.options,
        })
    }
}

impl Importer<FileSource> {
    /// Import from a csv file.
    ///
    /// Fails immediately with `SourceNotFound` if the file does not exist.
    pub fn from_path(path: impl AsRef<Path>, options: ReportOptions) -> Result<Self> {
        Ok(Self::new(FileSource::new(path)?, options))
    }
}

impl Importer<MemorySource> {
    /// Import from lines already in memory.
    pub fn from_lines<I, T>(lines: I, options: ReportOptions) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::new(MemorySource::new(lines), options)
    }
}

/// A fully parsed import, ready to produce reports.
#[derive(Debug, Clone)]
pub struct LoadedImport {
    table: Table,
    options: ReportOptions,
}

impl LoadedImport {
    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Build the frequency report and the trailing-word sorted report.
    pub fn reports(&self) -> Result<Vec<Report>> {
        let mut sections = Vec::with_capacity(self.options.frequency_columns.len());
        for column in &self.options.frequency_columns {
            sections.push(frequency_report(&self.table.column_values(column)?));
        }

        let sorted = sorted_by_trailing_words(
            &self.table.column_values(&self.options.sort_column)?,
            self.options.start_word,
            self.options.duplicate_keys,
        )?;

        debug!(
            frequency_columns = ?self.options.frequency_columns,
            sort_column = %self.options.sort_column,
            "built reports"
        );
        Ok(vec![
            Report::new(
                self.options.frequency_report_name.clone(),
                combine_sections(sections),
            ),
            Report::new(self.options.sorted_report_name.clone(), sorted),
        ])
    }

    /// Build the reports and hand them to `target`.
    pub fn process_output(&self, target: &OutputTarget) -> Result<ProcessOutcome> {
        let reports = self.reports()?;
        deliver(&reports, target)
    }
}
