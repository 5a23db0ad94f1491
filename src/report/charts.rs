//! @ai:module:intent Chart generation for comparison results
//! @ai:module:layer infrastructure
//! @ai:module:public_api ChartGenerator
//! @ai:module:stateless true

use crate::report::ComparisonReport;
use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

/// @ai:intent Trait for chart generation
pub trait ChartGeneratorTrait: Send + Sync {
    /// @ai:intent Generate all charts from results
    fn generate_all(&self, report: &ComparisonReport, output_dir: &Path) -> Result<Vec<String>>;
}

/// @ai:intent Generates charts from comparison results
pub struct ChartGenerator;

impl ChartGenerator {
    /// @ai:intent Create a new chart generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Bar chart of solved vs attempted problems per user
    /// @ai:pre report has at least one user
    /// @ai:effects fs:write
    fn generate_solved_chart(&self, report: &ComparisonReport, output_path: &Path) -> Result<()> {
        let root = BitMapBackend::new(output_path, (800, 500)).into_drawing_area();
        root.fill(&WHITE)?;

        let data: Vec<_> = report
            .users
            .iter()
            .map(|u| {
                (
                    u.handle.as_str(),
                    u.total_solved as f64,
                    u.total_attempted as f64,
                )
            })
            .collect();

        let y_max = data
            .iter()
            .map(|(_, _, attempted)| *attempted)
            .fold(1.0, f64::max)
            * 1.1;

        let mut chart = ChartBuilder::on(&root)
            .caption("Solved vs Attempted Problems", ("sans-serif", 25))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0..data.len() as i32, 0f64..y_max)?;

        chart
            .configure_mesh()
            .x_labels(data.len())
            .y_desc("Unique problems")
            .x_label_formatter(&|x| {
                data.get(*x as usize)
                    .map(|(name, _, _)| name.to_string())
                    .unwrap_or_default()
            })
            .draw()?;

        chart
            .draw_series(data.iter().enumerate().map(|(i, (_, _, attempted))| {
                Rectangle::new(
                    [(i as i32, 0.0), (i as i32 + 1, *attempted)],
                    BLUE.mix(0.4).filled(),
                )
            }))?
            .label("Attempted")
            .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], BLUE.mix(0.4).filled()));

        chart
            .draw_series(data.iter().enumerate().map(|(i, (_, solved, _))| {
                Rectangle::new(
                    [(i as i32, 0.0), (i as i32 + 1, *solved)],
                    GREEN.mix(0.7).filled(),
                )
            }))?
            .label("Solved")
            .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], GREEN.mix(0.7).filled()));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}

impl Default for ChartGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartGeneratorTrait for ChartGenerator {
    /// @ai:intent Generate all charts
    /// @ai:effects fs:write
    fn generate_all(&self, report: &ComparisonReport, output_dir: &Path) -> Result<Vec<String>> {
        std::fs::create_dir_all(output_dir)?;

        let solved_path = output_dir.join("solved.png");
        self.generate_solved_chart(report, &solved_path)?;

        Ok(vec!["solved.png".to_string()])
    }
}
