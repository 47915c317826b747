//! JSON output formatting

use serde_json::json;

use crate::demo::{Section, TourReport};

pub fn json_report(report: &TourReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

pub fn json_sections(sections: &[Section]) -> String {
    serde_json::to_string_pretty(&json!({ "sections": sections }))
        .unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::{SectionReport, SECTIONS};
    use serde_json::Value;

    #[test]
    fn test_report_shape() {
        let report = TourReport {
            sections: vec![SectionReport {
                name: "lists".to_string(),
                lines: vec!["apple".to_string()],
                completed: false,
            }],
            sections_completed: 0,
            success: false,
            error: Some("IndexError: pop from empty list".to_string()),
        };
        let parsed: Value = serde_json::from_str(&json_report(&report)).unwrap();
        assert_eq!(parsed["success"], false);
        assert_eq!(parsed["sections"][0]["lines"][0], "apple");
        assert_eq!(parsed["error"], "IndexError: pop from empty list");
    }

    #[test]
    fn test_sections_skip_run_fn() {
        let parsed: Value = serde_json::from_str(&json_sections(SECTIONS)).unwrap();
        let first = &parsed["sections"][0];
        assert_eq!(first["name"], "variables");
        assert!(first.get("run").is_none());
    }
}
