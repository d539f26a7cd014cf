//! # Equation Registry
//!
//! Central registry of the pressure vessel equations used in calculations.
//! Each equation has metadata including the code paragraph, formulas, and
//! variable definitions.
//!
//! ## Usage
//!
//! ```rust
//! use calc_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record_for_member(Equation::ShellRequiredThickness, "Shell course 1", "S-1");
//!
//! let meta = Equation::ShellRequiredThickness.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to the code paragraph an equation comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// ASME Boiler and Pressure Vessel Code, Section VIII, Division 1
    AsmeViii1 {
        edition: u16,
        paragraph: &'static str,
    },
    /// Simplified empirical rule standing in for a chart procedure
    Empirical { replaces: &'static str },
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::AsmeViii1 { edition, paragraph } => {
                format!("ASME BPVC VIII-1 ({}) {}", edition, paragraph)
            }
            CodeReference::Empirical { replaces } => {
                format!("Simplified estimate (in place of {})", replaces)
            }
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the report appendix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Internal pressure wall thickness (shells and heads)
    InternalPressure,
    /// External pressure thickness and allowable pressure
    ExternalPressure,
    /// Opening reinforcement areas
    Reinforcement,
    /// Pressure testing
    Testing,
}

impl EquationCategory {
    pub const ALL: [EquationCategory; 4] = [
        EquationCategory::InternalPressure,
        EquationCategory::ExternalPressure,
        EquationCategory::Reinforcement,
        EquationCategory::Testing,
    ];

    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::InternalPressure => "Internal Pressure",
            EquationCategory::ExternalPressure => "External Pressure",
            EquationCategory::Reinforcement => "Opening Reinforcement",
            EquationCategory::Testing => "Pressure Testing",
        }
    }

    /// Sort order for the appendix (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::InternalPressure => 1,
            EquationCategory::ExternalPressure => 2,
            EquationCategory::Reinforcement => 3,
            EquationCategory::Testing => 4,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "P", "R", "S")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "MPa", "mm")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// What the equation calculates
    pub description: &'static str,
    /// The formula in Typst math notation
    pub formula_typst: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code paragraph reference
    pub reference: CodeReference,
    pub variables: Vec<Variable>,
    pub assumptions: Vec<&'static str>,
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// t = PR / (SE - 0.6P)
    ShellRequiredThickness,
    /// t = PD / (2KSE - 0.2P)
    HeadRequiredThickness,
    /// t_n = t + CA
    NominalThickness,
    /// t = P_ext D_o / F
    ExternalPressureThickness,
    /// Stepped P_a(L/D_o)
    ExternalPressureChart,
    /// A = d t_s
    ReinforcementRequiredArea,
    /// A_1 = d t_n, A_5 = π((D_p/2)² - (d/2)²) t_p / d
    ReinforcementAvailableArea,
    /// P_T = MAWP × factor
    HydrotestPressure,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::ShellRequiredThickness => EquationMetadata {
                name: "Cylindrical Shell Thickness",
                description: "Minimum shell thickness for internal pressure based on circumferential stress",
                formula_typst: r#"$t = (P R) / (S E - 0.6 P)$"#,
                formula_plain: "t = P*R / (S*E - 0.6*P)",
                reference: CodeReference::AsmeViii1 { edition: 2023, paragraph: "UG-27(c)(1)" },
                variables: vec![
                    Variable::new("t", "Required thickness", "mm"),
                    Variable::new("P", "Internal design pressure", "MPa"),
                    Variable::new("R", "Inside radius", "mm"),
                    Variable::new("S", "Allowable stress at design temperature", "MPa"),
                    Variable::new("E", "Weld joint efficiency", "1"),
                ],
                assumptions: vec![
                    "Thin-wall shell: P <= 0.385 S E",
                    "Denominator S E - 0.6 P must be positive",
                ],
                category: EquationCategory::InternalPressure,
                source_module: "equations/vessel.rs",
                source_function: "shell_required_thickness",
            },

            Equation::HeadRequiredThickness => EquationMetadata {
                name: "2:1 Ellipsoidal Head Thickness",
                description: "Minimum thickness of a 2:1 ellipsoidal head under internal pressure",
                formula_typst: r#"$t = (P D) / (2 K S E - 0.2 P)$"#,
                formula_plain: "t = P*D / (2*K*S*E - 0.2*P), K = 0.90",
                reference: CodeReference::AsmeViii1 { edition: 2023, paragraph: "UG-32(c)" },
                variables: vec![
                    Variable::new("t", "Required thickness", "mm"),
                    Variable::new("P", "Internal design pressure", "MPa"),
                    Variable::new("D", "Inside diameter", "mm"),
                    Variable::new("K", "Head form factor (0.90)", "1"),
                    Variable::new("S", "Allowable stress at design temperature", "MPa"),
                    Variable::new("E", "Weld joint efficiency", "1"),
                ],
                assumptions: vec!["Form factor fixed at K = 0.90"],
                category: EquationCategory::InternalPressure,
                source_module: "equations/vessel.rs",
                source_function: "head_required_thickness",
            },

            Equation::NominalThickness => EquationMetadata {
                name: "Nominal Thickness",
                description: "Required thickness plus corrosion allowance",
                formula_typst: r#"$t_n = t + C A$"#,
                formula_plain: "t_n = t + CA",
                reference: CodeReference::AsmeViii1 { edition: 2023, paragraph: "UG-25" },
                variables: vec![
                    Variable::new("t_n", "Nominal thickness", "mm"),
                    Variable::new("C A", "Corrosion allowance", "mm"),
                ],
                assumptions: vec!["Mill tolerance not included"],
                category: EquationCategory::InternalPressure,
                source_module: "equations/vessel.rs",
                source_function: "nominal_thickness",
            },

            Equation::ExternalPressureThickness => EquationMetadata {
                name: "External Pressure Thickness (Simplified)",
                description: "Conservative thickness estimate for a shell under external pressure",
                formula_typst: r#"$t = (P_"ext" D_o) / F$"#,
                formula_plain: "t = P_ext * D_o / F, F = 0.25",
                reference: CodeReference::Empirical { replaces: "UG-28 chart procedure" },
                variables: vec![
                    Variable::new("t", "Estimated thickness", "mm"),
                    Variable::new("P_\"ext\"", "External design pressure", "MPa"),
                    Variable::new("D_o", "Outside diameter", "mm"),
                    Variable::new("F", "Empirical constant (0.25)", "MPa"),
                ],
                assumptions: vec![
                    "Placeholder for the factor A / factor B iteration",
                    "Unsupported length does not enter the thickness estimate",
                ],
                category: EquationCategory::ExternalPressure,
                source_module: "equations/vessel.rs",
                source_function: "external_pressure_thickness",
            },

            Equation::ExternalPressureChart => EquationMetadata {
                name: "Allowable External Pressure (Chart Steps)",
                description: "Stepped allowable pressure by curve and length-to-diameter ratio",
                formula_typst: r#"$P_a = f("curve", L / D_o)$"#,
                formula_plain: "P_a = step(curve, L/D_o) with bands L/D_o <= 2, <= 4, > 4",
                reference: CodeReference::Empirical { replaces: "UG-28 / Section II-D charts" },
                variables: vec![
                    Variable::new("P_a", "Allowable external pressure", "MPa"),
                    Variable::new("L", "Unsupported length", "mm"),
                    Variable::new("D_o", "Outside diameter", "mm"),
                ],
                assumptions: vec![
                    "Curve B: 0.40 / 0.30 / 0.20 MPa",
                    "Curve D: 0.60 / 0.45 / 0.35 MPa",
                    "No interpolation between bands",
                ],
                category: EquationCategory::ExternalPressure,
                source_module: "equations/vessel.rs",
                source_function: "chart_allowable_pressure",
            },

            Equation::ReinforcementRequiredArea => EquationMetadata {
                name: "Required Reinforcement Area",
                description: "Area removed from the shell by the nozzle opening",
                formula_typst: r#"$A = d t_s$"#,
                formula_plain: "A = d * t_s",
                reference: CodeReference::AsmeViii1 { edition: 2023, paragraph: "Appendix 1-7" },
                variables: vec![
                    Variable::new("A", "Required area", "mm²"),
                    Variable::new("d", "Nozzle diameter", "mm"),
                    Variable::new("t_s", "Shell thickness", "mm"),
                ],
                assumptions: vec!["Correction factor F = 1.0"],
                category: EquationCategory::Reinforcement,
                source_module: "equations/vessel.rs",
                source_function: "reinforcement_required_area",
            },

            Equation::ReinforcementAvailableArea => EquationMetadata {
                name: "Available Reinforcement Area",
                description: "Area contributed by the nozzle wall and the reinforcing pad",
                formula_typst: r#"$A_"avail" = d t_n + pi ((D_p / 2)^2 - (d / 2)^2) t_p / d$"#,
                formula_plain: "A_avail = d*t_n + pi*((D_p/2)^2 - (d/2)^2) * (t_p/d)",
                reference: CodeReference::AsmeViii1 { edition: 2023, paragraph: "Appendix 1-7" },
                variables: vec![
                    Variable::new("t_n", "Nozzle wall thickness", "mm"),
                    Variable::new("D_p", "Reinforcing pad outer diameter", "mm"),
                    Variable::new("t_p", "Reinforcing pad thickness", "mm"),
                ],
                assumptions: vec!["Shell excess thickness and weld areas not credited"],
                category: EquationCategory::Reinforcement,
                source_module: "equations/vessel.rs",
                source_function: "repad_area",
            },

            Equation::HydrotestPressure => EquationMetadata {
                name: "Hydrostatic Test Pressure",
                description: "Minimum hydrostatic test pressure",
                formula_typst: r#"$P_T = "MAWP" times f$"#,
                formula_plain: "P_T = MAWP * factor",
                reference: CodeReference::AsmeViii1 { edition: 2023, paragraph: "UG-99(b)" },
                variables: vec![
                    Variable::new("P_T", "Test pressure", "MPa"),
                    Variable::new("\"MAWP\"", "Maximum allowable working pressure", "MPa"),
                    Variable::new("f", "Test factor (1.3 standard)", "1"),
                ],
                assumptions: vec!["Stress ratio (test/design temperature) taken as 1.0"],
                category: EquationCategory::Testing,
                source_module: "equations/vessel.rs",
                source_function: "hydrotest_pressure",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::ShellRequiredThickness,
    Equation::HeadRequiredThickness,
    Equation::NominalThickness,
    Equation::ExternalPressureThickness,
    Equation::ExternalPressureChart,
    Equation::ReinforcementRequiredArea,
    Equation::ReinforcementAvailableArea,
    Equation::HydrotestPressure,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquationUsage {
    pub equation: Equation,
    /// Where/why it was used (e.g., "UG-27 shell")
    pub context: String,
    /// The calculation label this equation was applied to
    pub member_label: Option<String>,
}

impl EquationUsage {
    pub fn for_member(equation: Equation, context: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
            member_label: Some(label.into()),
        }
    }
}

/// Collector for equation usage across a set of calculations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record equation usage for a labelled calculation
    pub fn record_for_member(&mut self, equation: Equation, context: impl Into<String>, label: impl Into<String>) {
        self.usages.push(EquationUsage::for_member(equation, context, label));
    }

    pub fn is_empty(&self) -> bool {
        self.usages.is_empty()
    }

    /// Unique equations in first-use order
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group usages by equation
    pub fn by_equation(&self) -> HashMap<Equation, Vec<&EquationUsage>> {
        let mut map: HashMap<Equation, Vec<&EquationUsage>> = HashMap::new();
        for usage in &self.usages {
            map.entry(usage.equation).or_default().push(usage);
        }
        map
    }

    /// Unique equations grouped by category, categories in sort order
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }
}

// ============================================================================
// Typst Appendix Generation
// ============================================================================

impl EquationTracker {
    /// Generate Typst markup for the "List of Equations" appendix.
    ///
    /// ```rust
    /// use calc_core::equations::registry::{Equation, EquationTracker};
    ///
    /// let mut tracker = EquationTracker::new();
    /// tracker.record_for_member(Equation::HydrotestPressure, "UG-99 hydrotest", "HT-1");
    ///
    /// let typst = tracker.generate_appendix_typst();
    /// assert!(typst.contains("Hydrostatic Test Pressure"));
    /// ```
    pub fn generate_appendix_typst(&self) -> String {
        let mut output = String::new();

        output.push_str(r##"
#pagebreak()

#align(center)[
  #block(width: 100%, fill: rgb("#f0f0f0"), inset: 12pt, radius: 4pt)[
    #text(size: 18pt, weight: "bold")[Appendix: List of Equations]
  ]
]

#v(12pt)
"##);

        let by_category = self.by_category();
        if by_category.is_empty() {
            output.push_str("#text(style: \"italic\")[No equations recorded for this report.]\n");
            return output;
        }

        let usage_by_eq = self.by_equation();

        for (category, equations) in by_category {
            output.push_str(&format!("\n== {}\n\n", category.display_name()));

            for equation in equations {
                let meta = equation.metadata();

                output.push_str(&format!("=== {}\n\n", meta.name));
                output.push_str(&format!("#text(size: 10pt)[{}]\n\n", escape_typst(meta.description)));
                output.push_str(&format!("*Formula:* {}\n\n", meta.formula_typst));
                output.push_str(&format!("*Reference:* {}\n\n", meta.reference.citation()));

                if !meta.variables.is_empty() {
                    output.push_str("#table(\n");
                    output.push_str("  columns: (auto, 1fr, auto),\n");
                    output.push_str("  inset: 6pt,\n");
                    output.push_str("  stroke: 0.5pt,\n");
                    output.push_str("  table.header([*Symbol*], [*Description*], [*Units*]),\n");
                    for var in &meta.variables {
                        output.push_str(&variable_row(var));
                    }
                    output.push_str(")\n\n");
                }

                if let Some(usages) = usage_by_eq.get(&equation) {
                    let mut labels: Vec<&str> = usages
                        .iter()
                        .filter_map(|u| u.member_label.as_deref())
                        .collect();
                    labels.sort();
                    labels.dedup();
                    if !labels.is_empty() {
                        let escaped: Vec<String> = labels.iter().map(|l| escape_typst(l)).collect();
                        output.push_str(&format!("*Applied to:* {}\n\n", escaped.join(", ")));
                    }
                }

                if !meta.assumptions.is_empty() {
                    output.push_str("*Assumptions:*\n");
                    for assumption in &meta.assumptions {
                        output.push_str(&format!("- {}\n", escape_typst(assumption)));
                    }
                    output.push('\n');
                }

                output.push_str("#line(length: 100%, stroke: 0.25pt + gray)\n\n");
            }
        }

        output
    }
}

/// One row of the appendix variable table. The symbol is math; the other
/// cells are escaped text.
fn variable_row(var: &Variable) -> String {
    format!(
        "  [${}$], [{}], [{}],\n",
        var.symbol,
        escape_typst(var.description),
        escape_typst(var.units)
    )
}

/// Escape special Typst markup characters in free text
pub(crate) fn escape_typst(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '*' | '_' | '#' | '$' | '@' | '<' | '>' | '\\' | '`' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

/// Generate the EQUATIONS.md reference document for every registered equation.
///
/// ```rust
/// use calc_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("UG-27(c)(1)"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(r#"# Vesselcalc Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

Units: pressure and stress in MPa, lengths in mm, areas in mm².

---

"#);

    for category in EquationCategory::ALL {
        let equations = Equation::in_category(category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol.replace('"', ""),
                        var.description,
                        var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n",
        ALL_EQUATIONS.len(),
        EquationCategory::ALL.len()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 8);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_typst.is_empty(), "Equation {:?} has no Typst formula", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no plain formula", eq);
            assert!(meta.source_module.ends_with(".rs"));
        }
    }

    #[test]
    fn test_every_category_populated() {
        for category in EquationCategory::ALL {
            assert!(!Equation::in_category(category).is_empty(), "{:?} is empty", category);
        }
    }

    #[test]
    fn test_code_reference_citation() {
        let reference = CodeReference::AsmeViii1 { edition: 2023, paragraph: "UG-99(b)" };
        assert_eq!(reference.citation(), "ASME BPVC VIII-1 (2023) UG-99(b)");
    }

    #[test]
    fn test_tracker_dedup_and_order() {
        let mut tracker = EquationTracker::new();
        tracker.record_for_member(Equation::HydrotestPressure, "UG-99", "HT-1");
        tracker.record_for_member(Equation::ShellRequiredThickness, "UG-27", "S-1");
        tracker.record_for_member(Equation::ShellRequiredThickness, "UG-27", "S-2");

        assert_eq!(tracker.usages.len(), 3);
        assert_eq!(
            tracker.unique_equations(),
            vec![Equation::HydrotestPressure, Equation::ShellRequiredThickness]
        );

        let by_cat = tracker.by_category();
        assert_eq!(by_cat[0].0, EquationCategory::InternalPressure);
        assert_eq!(by_cat[1].0, EquationCategory::Testing);
    }

    #[test]
    fn test_generate_appendix_typst() {
        let mut tracker = EquationTracker::new();
        tracker.record_for_member(Equation::ShellRequiredThickness, "UG-27", "Shell_1");
        let typst = tracker.generate_appendix_typst();
        assert!(typst.contains("Appendix: List of Equations"));
        assert!(typst.contains("Cylindrical Shell Thickness"));
        assert!(typst.contains("UG-27(c)(1)"));
        assert!(typst.contains("Shell\\_1"));
    }

    #[test]
    fn test_generate_appendix_empty_tracker() {
        let typst = EquationTracker::new().generate_appendix_typst();
        assert!(typst.contains("No equations recorded"));
    }

    #[test]
    fn test_appendix_escapes_descriptions() {
        let var = Variable::new("t_p", "Pad *outer* width_#1", "mm");
        assert_eq!(variable_row(&var), "  [$t_p$], [Pad \\*outer\\* width\\_\\#1], [mm],\n");

        let mut tracker = EquationTracker::new();
        for &equation in ALL_EQUATIONS {
            tracker.record_for_member(equation, "all", "item");
        }
        let typst = tracker.generate_appendix_typst();
        for &equation in ALL_EQUATIONS {
            let meta = equation.metadata();
            assert!(typst.contains(&format!("#text(size: 10pt)[{}]", escape_typst(meta.description))));
            for var in &meta.variables {
                assert!(typst.contains(&variable_row(var)));
            }
        }
    }

    #[test]
    fn test_escape_typst() {
        assert_eq!(escape_typst("A*B_#1"), "A\\*B\\_\\#1");
        assert_eq!(escape_typst("[x]"), "\\[x\\]");
        assert_eq!(escape_typst("plain"), "plain");
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();
        assert!(markdown.contains("# Vesselcalc Equations Reference"));
        for category in EquationCategory::ALL {
            assert!(markdown.contains(category.display_name()));
        }
        assert!(markdown.contains("**Total Equations:** 8"));
    }
}
