//! Line sources: file and in-memory readers.
//!
//! The whole source is materialized in one read; there is no streaming.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::CsvReportError;
use crate::Result;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Something that can hand back its full contents as text lines.
pub trait LineSource {
    /// Read every line of the source, in order.
    fn read_lines(&self) -> Result<Vec<String>>;

    /// Human-readable name for logs and messages.
    fn describe(&self) -> String;
}

/// A csv file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a file source.
    ///
    /// Fails with [`CsvReportError::SourceNotFound`] if the path is not an
    /// existing file, so a missing input is reported before any processing
    /// starts. A directory counts as missing.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(CsvReportError::SourceNotFound(path.to_path_buf()));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileSource {
    fn read_lines(&self) -> Result<Vec<String>> {
        let content = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                CsvReportError::SourceNotFound(self.path.clone())
            } else {
                CsvReportError::SourceRead {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;
        let lines = split_lines(&content);
        debug!(path = %self.path.display(), lines = lines.len(), "read csv source");
        Ok(lines)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Lines already held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lines: Vec<String>,
}

impl MemorySource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for MemorySource {
    fn read_lines(&self) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }

    fn describe(&self) -> String {
        format!("<memory: {} lines>", self.lines.len())
    }
}

/// Split file content into lines, dropping a leading byte-order mark.
///
/// Both `\n` and `\r\n` terminate a line; a final terminator does not
/// produce a trailing empty line.
fn split_lines(content: &str) -> Vec<String> {
    content
        .strip_prefix(BYTE_ORDER_MARK)
        .unwrap_or(content)
        .lines()
        .map(str::to_string)
        .collect()
}
