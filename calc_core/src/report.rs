//! # Calculation Reports
//!
//! A [`Report`] is an ordered list of human-readable result lines under a
//! project name, the same lines shown on screen after each calculation.
//! It renders to paginated plain text here and to PDF via [`crate::pdf`].
//!
//! ## Example
//!
//! ```rust
//! use calc_core::report::Report;
//!
//! let mut report = Report::new("V-101");
//! report.push("UG-99 Hydrotest Pressure: 1.95 MPa");
//!
//! let text = report.render_text();
//! assert!(text.contains("ASME Sec VIII Div 1 Report - V-101"));
//! assert!(text.contains("Page 1 of 1"));
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::EquationTracker;
use crate::materials::MaterialTable;
use crate::project::Project;

/// Result lines per page in the text rendering
pub const LINES_PER_PAGE: usize = 40;

/// Report title prefix
pub const REPORT_TITLE: &str = "ASME Sec VIII Div 1 Report";

/// Ordered result lines for one project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    pub project_name: String,
    #[serde(default)]
    pub engineer: String,
    #[serde(default)]
    pub client: String,
    /// Design code edition printed in the header
    #[serde(default)]
    pub code: String,
    pub lines: Vec<String>,
    /// Equations behind the lines, for the PDF appendix
    #[serde(default)]
    pub equations: EquationTracker,
}

impl Report {
    pub fn new(project_name: impl Into<String>) -> Self {
        Report {
            project_name: project_name.into(),
            ..Default::default()
        }
    }

    /// Evaluate every project item and collect one line per item.
    ///
    /// Failed items appear as an error line naming the item, so the report
    /// always accounts for everything in the project.
    pub fn from_project(project: &Project, table: &MaterialTable) -> Self {
        let mut report = Report {
            project_name: project.meta.project_name.clone(),
            engineer: project.meta.engineer.clone(),
            client: project.meta.client.clone(),
            code: project.settings.code.clone(),
            ..Default::default()
        };

        for evaluation in project.evaluate_all(table) {
            match &evaluation.outcome {
                Ok(outcome) => {
                    report.push(outcome.summary_line());
                    if let Some(item) = project.get_item(&evaluation.id) {
                        for equation in item.equations() {
                            report.equations.record_for_member(
                                equation,
                                item.code_paragraph(),
                                evaluation.label.clone(),
                            );
                        }
                    }
                }
                Err(e) => report.push(format!(
                    "{} '{}' not evaluated: {}",
                    evaluation.calc_type, evaluation.label, e
                )),
            }
        }

        report
    }

    /// Append a result line
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn title(&self) -> String {
        format!("{} - {}", REPORT_TITLE, self.project_name)
    }

    /// Number of text pages; an empty report still has one page
    pub fn page_count(&self) -> usize {
        self.lines.len().div_ceil(LINES_PER_PAGE).max(1)
    }

    /// Render as plain text, `LINES_PER_PAGE` lines per page, each page
    /// headed by the title and closed by a "Page x of y" footer. Pages are
    /// separated by form feeds.
    pub fn render_text(&self) -> String {
        let title = self.title();
        let rule = "=".repeat(title.chars().count());
        let pages = self.page_count();

        let mut chunks: Vec<&[String]> = self.lines.chunks(LINES_PER_PAGE).collect();
        if chunks.is_empty() {
            chunks.push(&[]);
        }

        let mut out = String::new();
        for (i, chunk) in chunks.iter().enumerate() {
            if i > 0 {
                out.push('\u{000C}');
            }
            out.push_str(&title);
            out.push('\n');
            out.push_str(&rule);
            out.push('\n');
            if i == 0 {
                if !self.engineer.is_empty() {
                    out.push_str(&format!("Engineer: {}\n", self.engineer));
                }
                if !self.client.is_empty() {
                    out.push_str(&format!("Client: {}\n", self.client));
                }
                if !self.code.is_empty() {
                    out.push_str(&format!("Code: {}\n", self.code));
                }
            }
            out.push('\n');
            for line in chunk.iter() {
                out.push_str(line);
                out.push('\n');
            }
            out.push_str(&format!("\nPage {} of {}\n", i + 1, pages));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{CalculationItem, HydrotestInput, ReinforcementInput, ShellInput};

    #[test]
    fn test_empty_report_has_one_page() {
        let report = Report::new("Empty");
        assert_eq!(report.page_count(), 1);
        let text = report.render_text();
        assert!(text.contains("Page 1 of 1"));
        assert!(!text.contains('\u{000C}'));
    }

    #[test]
    fn test_pagination() {
        let mut report = Report::new("Long");
        for i in 0..(LINES_PER_PAGE + 1) {
            report.push(format!("line {}", i));
        }
        assert_eq!(report.page_count(), 2);

        let text = report.render_text();
        let pages: Vec<&str> = text.split('\u{000C}').collect();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].contains("line 39"));
        assert!(pages[0].contains("Page 1 of 2"));
        assert!(pages[1].contains("line 40"));
        assert!(pages[1].starts_with("ASME Sec VIII Div 1 Report - Long"));
    }

    #[test]
    fn test_lines_keep_order() {
        let mut report = Report::new("Order");
        report.push("first");
        report.push("second");
        let text = report.render_text();
        assert!(text.find("first").unwrap() < text.find("second").unwrap());
    }

    #[test]
    fn test_from_project() {
        let mut project = Project::new("Engineer", "V-7", "Client");
        project.add_item(CalculationItem::Reinforcement(ReinforcementInput {
            label: "N1".to_string(),
            nozzle_diameter_mm: 100.0,
            shell_thickness_mm: 12.0,
            nozzle_thickness_mm: 10.0,
            repad_thickness_mm: 8.0,
            repad_diameter_mm: 200.0,
        }));
        project.add_item(CalculationItem::Shell(ShellInput {
            label: "S1".to_string(),
            design_pressure_mpa: 1.0,
            inside_radius_mm: 500.0,
            material: "SA-999".to_string(),
            design_temp_c: 100.0,
            joint_efficiency: 0.85,
            corrosion_allowance_mm: 1.0,
            allowable_stress_mpa: None,
        }));
        project.add_item(CalculationItem::Hydrotest(HydrotestInput {
            label: "HT".to_string(),
            mawp_mpa: 1.5,
            test_factor: 1.3,
        }));

        let report = Report::from_project(&project, MaterialTable::builtin());
        assert_eq!(report.project_name, "V-7");
        assert_eq!(report.lines.len(), 3);
        assert!(report.lines[0].starts_with("Appendix 1-7 Reinforcement: Required = 1200.00 mm²"));
        assert!(report.lines[1].starts_with("Shell 'S1' not evaluated: Material not found"));
        assert_eq!(report.lines[2], "UG-99 Hydrotest Pressure: 1.95 MPa");

        // Failed items contribute no equations
        assert_eq!(report.equations.unique_equations().len(), 3);
    }
}
