//! @ai:module:intent Render a comparison as a terminal grid, one column per user
//! @ai:module:layer presentation
//! @ai:module:public_api TableRenderer
//! @ai:module:stateless true

use crate::metrics::UserMetrics;
use crate::report::ComparisonReport;
use colored::Colorize;

const HEADER: &str = "Comparison Metrics";
const ALL_FAILED: &str = "Could not fetch stats for any of the handles.";

/// @ai:intent Terminal renderer for comparison reports
pub struct TableRenderer {
    wrap_width: usize,
}

impl TableRenderer {
    /// @ai:intent Create a renderer that wraps value cells at the given width
    /// @ai:pre wrap_width > 0
    /// @ai:effects pure
    pub fn new(wrap_width: usize) -> Self {
        Self {
            wrap_width: wrap_width.max(1),
        }
    }

    /// @ai:intent Render error lines followed by the metrics grid
    /// @ai:effects pure
    pub fn render(&self, report: &ComparisonReport) -> String {
        let mut output = String::new();

        for error in &report.errors {
            output.push_str(&format!("{}\n", error.red()));
        }

        if report.all_failed() {
            if !report.errors.is_empty() {
                output.push('\n');
            }
            output.push_str(ALL_FAILED);
            output.push('\n');
            return output;
        }

        if !report.errors.is_empty() {
            output.push('\n');
        }

        output.push_str(&self.render_grid(&report.users));
        output
    }

    /// @ai:intent Build the key column plus one wrapped column per user
    /// @ai:effects pure
    fn render_grid(&self, users: &[UserMetrics]) -> String {
        let rows: Vec<(&str, Vec<Vec<String>>)> = UserMetrics::KEYS
            .iter()
            .skip(1)
            .enumerate()
            .map(|(i, key)| {
                let cells = users
                    .iter()
                    .map(|u| self.wrap(&u.entries()[i + 1].1))
                    .collect();
                (*key, cells)
            })
            .collect();

        let key_width = UserMetrics::KEYS
            .iter()
            .map(|k| k.chars().count())
            .chain(std::iter::once(HEADER.chars().count()))
            .max()
            .unwrap_or(0);

        let column_widths: Vec<usize> = users
            .iter()
            .enumerate()
            .map(|(c, user)| {
                rows.iter()
                    .flat_map(|(_, cells)| cells[c].iter().map(|line| line.chars().count()))
                    .chain(std::iter::once(user.handle.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut output = String::new();

        let header_cells: Vec<String> = users.iter().map(|u| u.handle.clone()).collect();
        let header = format_line(HEADER, key_width, &header_cells, &column_widths);
        output.push_str(&header.bold().to_string());
        output.push('\n');

        let separator: Vec<String> = std::iter::once("-".repeat(key_width))
            .chain(column_widths.iter().map(|w| "-".repeat(*w)))
            .collect();
        output.push_str(&separator.join("-+-"));
        output.push('\n');

        for (key, cells) in &rows {
            let height = cells.iter().map(|lines| lines.len()).max().unwrap_or(1);

            for line in 0..height {
                let label = if line == 0 { *key } else { "" };
                let values: Vec<String> = cells
                    .iter()
                    .map(|lines| lines.get(line).cloned().unwrap_or_default())
                    .collect();
                output.push_str(&format_line(label, key_width, &values, &column_widths));
                output.push('\n');
            }
        }

        output
    }

    /// @ai:intent Greedy word wrap; a single overlong word stays whole
    /// @ai:effects pure
    fn wrap(&self, text: &str) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();

        for word in text.split_whitespace() {
            if !current.is_empty()
                && current.chars().count() + 1 + word.chars().count() > self.wrap_width
            {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }

        if !current.is_empty() || lines.is_empty() {
            lines.push(current);
        }

        lines
    }
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new(32)
    }
}

fn format_line(label: &str, key_width: usize, cells: &[String], widths: &[usize]) -> String {
    let mut parts = vec![format!("{:<width$}", label, width = key_width)];
    parts.extend(
        cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w)),
    );
    parts.join(" | ").trim_end().to_string()
}
