//! navigator-export
//!
//! Patient report generation: a Tera template renders the record to
//! Markdown, and the Markdown converts to DOCX for download.

pub mod docx;
pub mod error;
pub mod render;
pub mod report;
pub mod styles;

pub use crate::error::ExportError;
pub use crate::report::{ReportFile, ReportFormat, export_report};
