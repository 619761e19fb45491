//! Named reports and return-mode assembly.

use serde::Serialize;

/// Line placed between consecutive reports (and report sections).
pub const REPORT_SEPARATOR: &str = " ";

/// A rendered report and the artifact name it is written under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Artifact name (e.g. "Address List.txt")
    pub name: String,
    /// Rendered lines
    pub lines: Vec<String>,
}

impl Report {
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }
}

/// Join line sequences with a single separator line between each pair.
///
/// No separator is added before the first or after the last sequence.
pub fn combine_sections<I>(sections: I) -> Vec<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut combined = Vec::new();
    for (index, section) in sections.into_iter().enumerate() {
        if index > 0 {
            combined.push(REPORT_SEPARATOR.to_string());
        }
        combined.extend(section);
    }
    combined
}

/// Return mode: concatenate every report into one line sequence.
pub fn assemble(reports: &[Report]) -> Vec<String> {
    combine_sections(reports.iter().map(|report| report.lines.clone()))
}
