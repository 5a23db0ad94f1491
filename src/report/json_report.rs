//! @ai:module:intent JSON report generation
//! @ai:module:layer infrastructure
//! @ai:module:public_api JsonReporter
//! @ai:module:stateless true

use crate::report::ComparisonReport;
use anyhow::{Context, Result};
use std::path::Path;

/// @ai:intent Trait for JSON report generation
pub trait JsonReporterTrait: Send + Sync {
    /// @ai:intent Generate JSON report from results
    fn generate(&self, report: &ComparisonReport, output_path: &Path) -> Result<()>;

    /// @ai:intent Read a previously written JSON report
    fn load(&self, path: &Path) -> Result<ComparisonReport>;
}

/// @ai:intent Generates JSON reports from comparison results
pub struct JsonReporter;

impl JsonReporter {
    /// @ai:intent Create a new JSON reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReporterTrait for JsonReporter {
    /// @ai:intent Generate JSON report to file
    /// @ai:effects fs:write
    fn generate(&self, report: &ComparisonReport, output_path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        std::fs::write(output_path, json)?;
        Ok(())
    }

    /// @ai:intent Read a previously written JSON report
    /// @ai:effects fs:read
    fn load(&self, path: &Path) -> Result<ComparisonReport> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read results file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse results file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{Rating, UserMetrics};
    use tempfile::TempDir;

    #[test]
    fn test_generate_then_load() {
        let reporter = JsonReporter::new();
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("results.json");

        let report = ComparisonReport {
            timestamp: "2026-10-18T00:00:00Z".to_string(),
            users: vec![UserMetrics {
                handle: "tourist".to_string(),
                total_solved: 10,
                total_attempted: 12,
                max_solved_rating: Rating::Exact(3500),
                max_attempted_rating: Rating::Estimated(1033.5),
                languages_used: "C++ (10)".to_string(),
                ..Default::default()
            }],
            errors: vec!["Error for ghost: not found".to_string()],
        };

        reporter.generate(&report, &output).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("\"Total Solved\": 10"));

        let loaded = reporter.load(&output).unwrap();
        assert_eq!(loaded, report);
    }
}
