//! @ai:module:intent Markdown report generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api MarkdownReporter
//! @ai:module:stateless true

use crate::metrics::UserMetrics;
use crate::report::ComparisonReport;
use anyhow::Result;
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// @ai:intent Trait for Markdown report generation
pub trait MarkdownReporterTrait: Send + Sync {
    /// @ai:intent Generate Markdown report from results
    fn generate(&self, report: &ComparisonReport, output_path: &Path) -> Result<()>;
}

/// @ai:intent Generates Markdown reports from comparison results
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// @ai:intent Create a new Markdown reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Escape characters that break a table cell
    /// @ai:effects pure
    fn escape_cell(value: &str) -> String {
        value.replace('|', "\\|")
    }

    /// @ai:intent Generate title section
    /// @ai:effects pure
    fn generate_summary(report: &ComparisonReport) -> String {
        let mut output = String::new();

        writeln!(output, "# Codeforces User Comparison").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "**Date:** {}", report.timestamp).unwrap();
        writeln!(output, "**Users:** {}", report.users.len()).unwrap();
        writeln!(output).unwrap();

        output
    }

    /// @ai:intent Generate error list section
    /// @ai:effects pure
    fn generate_error_section(report: &ComparisonReport) -> String {
        let mut output = String::new();

        if report.errors.is_empty() {
            return output;
        }

        writeln!(output, "## Errors").unwrap();
        writeln!(output).unwrap();
        for error in &report.errors {
            writeln!(output, "- {}", error).unwrap();
        }
        writeln!(output).unwrap();

        output
    }

    /// @ai:intent Generate the metrics table, one column per user
    /// @ai:effects pure
    fn generate_metrics_table(users: &[UserMetrics]) -> String {
        let mut output = String::new();

        writeln!(output, "## Metrics").unwrap();
        writeln!(output).unwrap();

        if users.is_empty() {
            writeln!(output, "Could not fetch stats for any of the handles.").unwrap();
            writeln!(output).unwrap();
            return output;
        }

        let handles: Vec<String> = users.iter().map(|u| Self::escape_cell(&u.handle)).collect();
        writeln!(output, "| Metric | {} |", handles.join(" | ")).unwrap();
        writeln!(output, "|--------|{}", "------|".repeat(users.len())).unwrap();

        let entries: Vec<_> = users.iter().map(|u| u.entries()).collect();

        for (row, key) in UserMetrics::KEYS.iter().enumerate().skip(1) {
            let values: Vec<String> = entries
                .iter()
                .map(|e| Self::escape_cell(&e[row].1))
                .collect();
            writeln!(output, "| {} | {} |", key, values.join(" | ")).unwrap();
        }

        writeln!(output).unwrap();
        output
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownReporterTrait for MarkdownReporter {
    /// @ai:intent Generate Markdown report to file
    /// @ai:effects fs:write
    fn generate(&self, report: &ComparisonReport, output_path: &Path) -> Result<()> {
        let mut content = String::new();

        content.push_str(&Self::generate_summary(report));
        content.push_str(&Self::generate_error_section(report));
        content.push_str(&Self::generate_metrics_table(&report.users));

        std::fs::write(output_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Rating;
    use tempfile::TempDir;

    #[test]
    fn test_generate_markdown_report() {
        let reporter = MarkdownReporter::new();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("results.md");

        let report = ComparisonReport {
            timestamp: "2026-10-18T00:00:00Z".to_string(),
            users: vec![
                UserMetrics {
                    handle: "tourist".to_string(),
                    total_solved: 2500,
                    max_solved_rating: Rating::Exact(3500),
                    ..Default::default()
                },
                UserMetrics {
                    handle: "petr".to_string(),
                    total_solved: 2100,
                    ..Default::default()
                },
            ],
            errors: vec!["Error for ghost: not found".to_string()],
        };

        reporter.generate(&report, &output).unwrap();
        let content = std::fs::read_to_string(&output).unwrap();

        assert!(content.contains("# Codeforces User Comparison"));
        assert!(content.contains("| Metric | tourist | petr |"));
        assert!(content.contains("| Total Solved | 2500 | 2100 |"));
        assert!(content.contains("| Max Problem Rating (solved) | 3500 | 0 |"));
        assert!(content.contains("- Error for ghost: not found"));
        assert!(!content.contains("| User |"));
    }

    #[test]
    fn test_table_without_users() {
        let table = MarkdownReporter::generate_metrics_table(&[]);
        assert!(table.contains("Could not fetch stats for any of the handles."));
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(MarkdownReporter::escape_cell("a|b"), "a\\|b");
    }
}
