//! Output formatting for scored candidates

pub mod formatter;

pub use formatter::{OutputFormat, ReportGenerator};
