//! Human-readable output formatting

use crate::demo::{Section, TourReport};

/// Printed lines in program order. Verbose mode puts a header above each
/// section.
pub fn human_report(report: &TourReport, verbose: bool) -> String {
    let mut output = String::new();
    for (i, section) in report.sections.iter().enumerate() {
        if verbose {
            if i > 0 {
                output.push('\n');
            }
            let header = format!("== {} ==", section.name);
            output.push_str(&header);
            output.push('\n');
        }
        for line in &section.lines {
            output.push_str(line);
            output.push('\n');
        }
    }
    output
}

pub fn human_sections(sections: &[Section]) -> String {
    let width = sections.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let mut output = String::new();
    for section in sections {
        output.push_str(&format!(
            "{:<width$}  {}",
            section.name,
            section.summary,
            width = width
        ));
        if !section.requires.is_empty() {
            output.push_str(&format!(" (after {})", section.requires.join(", ")));
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::{SectionReport, SECTIONS};

    fn report() -> TourReport {
        TourReport {
            sections: vec![
                SectionReport {
                    name: "math".to_string(),
                    lines: vec!["gcd_val = 4".to_string()],
                    completed: true,
                },
                SectionReport {
                    name: "sets".to_string(),
                    lines: vec!["{3, 4}".to_string()],
                    completed: true,
                },
            ],
            sections_completed: 2,
            success: true,
            error: None,
        }
    }

    #[test]
    fn test_plain_lines() {
        assert_eq!(human_report(&report(), false), "gcd_val = 4\n{3, 4}\n");
    }

    #[test]
    fn test_verbose_headers() {
        assert_eq!(
            human_report(&report(), true),
            "== math ==\ngcd_val = 4\n\n== sets ==\n{3, 4}\n"
        );
    }

    #[test]
    fn test_section_listing() {
        let listing = human_sections(SECTIONS);
        assert_eq!(listing.lines().count(), SECTIONS.len());
        assert!(listing.contains("loops"));
        assert!(listing.contains("(after lists)"));
    }
}
