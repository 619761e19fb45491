//! Write mode: persist each report as its own artifact.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::report::{assemble, Report};
use crate::error::CsvReportError;
use crate::Result;

/// Where rendered lines are written.
pub trait LineSink {
    /// Write `lines` as the artifact `name`, returning where it landed.
    fn write_lines(&self, name: &str, lines: &[String]) -> Result<PathBuf>;
}

/// Writes artifacts as files inside an existing directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// The directory is not created; a missing directory surfaces as a
    /// [`CsvReportError::WriteFailure`] on the first write.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl LineSink for DirectorySink {
    fn write_lines(&self, name: &str, lines: &[String]) -> Result<PathBuf> {
        let path = self.dir.join(name);
        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        fs::write(&path, content).map_err(|source| CsvReportError::WriteFailure {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), lines = lines.len(), "wrote report");
        Ok(path)
    }
}

/// Write every report to the sink, in order.
///
/// Each artifact is self-contained, so no separator lines are written.
pub fn write_reports(reports: &[Report], sink: &impl LineSink) -> Result<Vec<PathBuf>> {
    reports
        .iter()
        .map(|report| sink.write_lines(&report.name, &report.lines))
        .collect()
}

/// Whether reports are handed back or written out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    /// Return mode: concatenate reports in memory
    #[default]
    Return,
    /// Write mode: one file per report inside this directory
    Directory(PathBuf),
}

/// Result of delivering reports to an [`OutputTarget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Combined report lines (return mode)
    Returned(Vec<String>),
    /// Paths of the written artifacts (write mode)
    Written(Vec<PathBuf>),
}

/// Deliver reports according to the target.
pub fn deliver(reports: &[Report], target: &OutputTarget) -> Result<ProcessOutcome> {
    match target {
        OutputTarget::Return => Ok(ProcessOutcome::Returned(assemble(reports))),
        OutputTarget::Directory(dir) => {
            let written = write_reports(reports, &DirectorySink::new(dir))?;
            Ok(ProcessOutcome::Written(written))
        }
    }
}
