//! @ai:module:intent Display and persistence of comparison results
//! @ai:module:layer infrastructure
//! @ai:module:public_api ComparisonReport, ReportGenerator, TableRenderer, JsonReporter, MarkdownReporter, ChartGenerator

pub mod charts;
pub mod json_report;
pub mod markdown_report;
pub mod table;

pub use charts::{ChartGenerator, ChartGeneratorTrait};
pub use json_report::{JsonReporter, JsonReporterTrait};
pub use markdown_report::{MarkdownReporter, MarkdownReporterTrait};
pub use table::TableRenderer;

use crate::metrics::{UserMetrics, UserOutcome};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// @ai:intent Outcome of one comparison request, split into columns and error lines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub timestamp: String,
    pub users: Vec<UserMetrics>,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ComparisonReport {
    /// @ai:intent Split outcomes, keeping request order within each group
    /// @ai:effects time
    pub fn from_outcomes(outcomes: Vec<UserOutcome>) -> Self {
        let mut users = Vec::new();
        let mut errors = Vec::new();

        for outcome in outcomes {
            match outcome {
                Ok(metrics) => users.push(metrics),
                Err(e) => errors.push(e.to_string()),
            }
        }

        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            users,
            errors,
        }
    }

    /// @ai:intent Whether no handle produced metrics
    /// @ai:effects pure
    pub fn all_failed(&self) -> bool {
        self.users.is_empty()
    }
}

/// @ai:intent Combined report generator
pub struct ReportGenerator {
    json: JsonReporter,
    markdown: MarkdownReporter,
    charts: ChartGenerator,
}

impl ReportGenerator {
    /// @ai:intent Create a new report generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            json: JsonReporter::new(),
            markdown: MarkdownReporter::new(),
            charts: ChartGenerator::new(),
        }
    }

    /// @ai:intent Write results.json, results.md, and the chart
    /// @ai:effects fs:write
    pub fn generate_all(&self, report: &ComparisonReport, output_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(output_dir)?;

        self.json.generate(report, &output_dir.join("results.json"))?;
        self.generate_readable(report, output_dir)?;

        tracing::info!("Reports generated in {}", output_dir.display());
        Ok(())
    }

    /// @ai:intent Write results.md and the chart, skipping the chart without data
    /// @ai:effects fs:write
    pub fn generate_readable(&self, report: &ComparisonReport, output_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(output_dir)?;

        self.markdown
            .generate(report, &output_dir.join("results.md"))?;

        if report.all_failed() {
            tracing::warn!("No successful handles, skipping chart");
        } else {
            self.charts.generate_all(report, output_dir)?;
        }

        Ok(())
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    #[test]
    fn test_from_outcomes_splits_and_keeps_order() {
        let outcomes = vec![
            Ok(UserMetrics {
                handle: "b".to_string(),
                ..Default::default()
            }),
            Err(FetchError::new("x", "timed out")),
            Ok(UserMetrics {
                handle: "a".to_string(),
                ..Default::default()
            }),
        ];

        let report = ComparisonReport::from_outcomes(outcomes);
        let handles: Vec<_> = report.users.iter().map(|u| u.handle.as_str()).collect();

        assert_eq!(handles, vec!["b", "a"]);
        assert_eq!(report.errors, vec!["Error for x: timed out"]);
        assert!(!report.all_failed());
    }

    #[test]
    fn test_all_failed() {
        let report = ComparisonReport::from_outcomes(vec![Err(FetchError::new("x", "boom"))]);
        assert!(report.all_failed());
    }
}
