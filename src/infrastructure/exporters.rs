//! Report exporters.
//!
//! `TextExporter` renders a human-readable summary, `JsonExporter` the
//! pretty-printed serde form.

use anyhow::{Context, Result};

use crate::application::report::Report;
use crate::ports::ReportExporter;

pub struct TextExporter;

impl ReportExporter for TextExporter {
    fn export(&self, report: &Report) -> Result<String> {
        let mut lines = Vec::new();
        match report {
            Report::Comparison(c) => {
                let verdict = if c.equivalent { "equivalent" } else { "different" };
                lines.push(format!("{} vs {}: {}", c.left, c.right, verdict));
                if let Some(diff) = &c.difference {
                    lines.push(format!("  left:  {}", diff.left));
                    lines.push(format!("  right: {}", diff.right));
                }
            }
            Report::Duplicates { groups } => {
                if groups.is_empty() {
                    lines.push("no duplicates".to_string());
                }
                for (i, group) in groups.iter().enumerate() {
                    lines.push(format!("group {}: {}", i + 1, group.members.join(", ")));
                    lines.push(format!("  {}", single_line(&group.text)));
                }
            }
            Report::Findings { findings } => {
                if findings.is_empty() {
                    lines.push("no findings".to_string());
                }
                for finding in findings {
                    lines.push(format!("{}: {}", finding.fragment, finding.kind.description()));
                    lines.push(format!("  {}", single_line(&finding.text)));
                }
            }
        }
        Ok(lines.join("\n"))
    }
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub struct JsonExporter;

impl ReportExporter for JsonExporter {
    fn export(&self, report: &Report) -> Result<String> {
        serde_json::to_string_pretty(report).context("Failed to serialize report")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::report::{Comparison, Difference, DuplicateGroup};

    fn comparison() -> Report {
        Report::Comparison(Comparison {
            left: "a".into(),
            right: "b".into(),
            equivalent: false,
            difference: Some(Difference {
                left: "x".into(),
                right: "y".into(),
            }),
        })
    }

    #[test]
    fn test_text_comparison() {
        let out = TextExporter.export(&comparison()).unwrap();
        assert_eq!(out, "a vs b: different\n  left:  x\n  right: y");
    }

    #[test]
    fn test_text_duplicates_collapses_whitespace() {
        let report = Report::Duplicates {
            groups: vec![DuplicateGroup {
                members: vec!["f".into(), "g".into()],
                text: "{\n  a++;\n}".into(),
            }],
        };
        let out = TextExporter.export(&report).unwrap();
        assert_eq!(out, "group 1: f, g\n  { a++; }");
    }

    #[test]
    fn test_json_is_tagged() {
        let out = JsonExporter.export(&comparison()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["report"], "comparison");
        assert_eq!(value["equivalent"], false);
        assert_eq!(value["difference"]["right"], "y");
    }
}
