//! Output: assemble and deliver reports.
//!
//! This module handles the fourth and final stage of the pipeline -
//! handing rendered reports to the caller. It provides:
//!
//! - **Report**: a named sequence of rendered lines
//! - **Return mode**: `assemble` joins reports with a `" "` separator line
//! - **Write mode**: `write_reports` persists each report through a `LineSink`
//!
//! ## Example
//!
//! ```rust,ignore
//! use csvreportlib::output::{deliver, OutputTarget, Report};
//!
//! let reports = vec![Report::new("Address List.txt", addresses)];
//! deliver(&reports, &OutputTarget::Directory("out".into()))?;
//! ```

pub mod report;
pub mod sink;

pub use report::{assemble, combine_sections, Report, REPORT_SEPARATOR};
pub use sink::{deliver, write_reports, DirectorySink, LineSink, OutputTarget, ProcessOutcome};
