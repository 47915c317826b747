//! Output formatting

use crate::demo::{Section, TourReport};
use crate::output::human::{human_report, human_sections};
use crate::output::json::{json_report, json_sections};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Render a tour report. `verbose` adds section headers in human output.
pub fn format_report(report: &TourReport, format: &OutputFormat, verbose: bool) -> String {
    match format {
        OutputFormat::Human => human_report(report, verbose),
        OutputFormat::Json => json_report(report),
    }
}

/// Render the section catalog for `primer list`.
pub fn format_sections(sections: &[Section], format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => human_sections(sections),
        OutputFormat::Json => json_sections(sections),
    }
}
