//! # Pressure Vessel Calculations
//!
//! One module per code paragraph. Each follows the pattern:
//!
//! - a pure evaluator over scalar inputs (e.g. [`shell::shell_thickness`])
//! - `*Input` - labelled input set as collected by a front end (JSON-serializable)
//! - `*Result` - calculation results (JSON-serializable)
//! - `calculate(input, ...) -> CalcResult<*Result>` - validates, resolves the
//!   allowable stress where needed, and runs the evaluator
//!
//! ## Available Calculations
//!
//! - [`shell`] - UG-27 cylindrical shell thickness
//! - [`head`] - UG-32 ellipsoidal head thickness
//! - [`external_pressure`] - UG-28 external pressure (simplified)
//! - [`reinforcement`] - Appendix 1-7 nozzle reinforcement areas
//! - [`hydrotest`] - UG-99 hydrostatic test pressure

pub mod external_pressure;
pub mod head;
pub mod hydrotest;
pub mod reinforcement;
pub mod shell;

use serde::{Deserialize, Serialize};

use crate::equations::Equation;
use crate::errors::{CalcError, CalcResult};
use crate::materials::MaterialTable;

pub use external_pressure::{ExternalPressureInput, ExternalPressureResult};
pub use head::{HeadInput, HeadResult};
pub use hydrotest::{HydrotestInput, HydrotestResult};
pub use reinforcement::{ReinforcementInput, ReinforcementResult};
pub use shell::{ShellInput, ShellResult};

/// Required and nominal wall thickness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThicknessResult {
    /// Minimum thickness from the pressure formula (mm)
    pub required_thickness_mm: f64,
    /// Required thickness plus corrosion allowance (mm)
    pub nominal_thickness_mm: f64,
}

/// Reject a formula denominator that is zero, negative, or NaN.
pub(crate) fn check_denominator(calculation_type: &str, expression: &str, denominator: f64) -> CalcResult<()> {
    if denominator.is_nan() || denominator <= 0.0 {
        return Err(CalcError::non_physical(calculation_type, expression, denominator));
    }
    Ok(())
}

/// Resolve the allowable stress for an input set: an explicit override wins,
/// otherwise the (material, temperature) row from the table.
pub(crate) fn resolve_allowable_stress(
    material: &str,
    design_temp_c: f64,
    override_mpa: Option<f64>,
    table: &MaterialTable,
) -> CalcResult<f64> {
    if let Some(s) = override_mpa {
        if s <= 0.0 || !s.is_finite() {
            return Err(CalcError::invalid_input(
                "allowable_stress_mpa",
                s.to_string(),
                "Allowable stress must be positive",
            ));
        }
        return Ok(s);
    }
    table.lookup(material, design_temp_c).ok_or_else(|| {
        CalcError::material_not_found(format!(
            "{} at {} °C (no allowable stress for selected temperature)",
            material,
            design_temp_c.trunc()
        ))
    })
}

/// Shared range check used by the `validate` methods.
pub(crate) fn require_positive(field: &str, value: f64, what: &str) -> CalcResult<()> {
    if value <= 0.0 || !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{} must be positive", what),
        ));
    }
    Ok(())
}

/// Joint efficiency and corrosion allowance checks shared by shell and head.
pub(crate) fn validate_efficiency_and_allowance(joint_efficiency: f64, corrosion_allowance_mm: f64) -> CalcResult<()> {
    if !(0.7..=1.0).contains(&joint_efficiency) {
        return Err(CalcError::invalid_input(
            "joint_efficiency",
            joint_efficiency.to_string(),
            "Joint efficiency must be between 0.7 and 1.0",
        ));
    }
    if corrosion_allowance_mm < 0.0 || !corrosion_allowance_mm.is_finite() {
        return Err(CalcError::invalid_input(
            "corrosion_allowance_mm",
            corrosion_allowance_mm.to_string(),
            "Corrosion allowance cannot be negative",
        ));
    }
    Ok(())
}

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single project while
/// keeping clean, tagged JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// UG-27 cylindrical shell
    Shell(ShellInput),
    /// UG-32 ellipsoidal head
    Head(HeadInput),
    /// UG-28 external pressure
    ExternalPressure(ExternalPressureInput),
    /// Appendix 1-7 nozzle reinforcement
    Reinforcement(ReinforcementInput),
    /// UG-99 hydrotest
    Hydrotest(HydrotestInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Shell(i) => &i.label,
            CalculationItem::Head(i) => &i.label,
            CalculationItem::ExternalPressure(i) => &i.label,
            CalculationItem::Reinforcement(i) => &i.label,
            CalculationItem::Hydrotest(i) => &i.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Shell(_) => "Shell",
            CalculationItem::Head(_) => "Head",
            CalculationItem::ExternalPressure(_) => "External Pressure",
            CalculationItem::Reinforcement(_) => "Reinforcement",
            CalculationItem::Hydrotest(_) => "Hydrotest",
        }
    }

    /// Code paragraph the calculation implements
    pub fn code_paragraph(&self) -> &'static str {
        match self {
            CalculationItem::Shell(_) => "UG-27",
            CalculationItem::Head(_) => "UG-32",
            CalculationItem::ExternalPressure(_) => "UG-28",
            CalculationItem::Reinforcement(_) => "Appendix 1-7",
            CalculationItem::Hydrotest(_) => "UG-99",
        }
    }

    /// Equations applied by this calculation, for the report appendix
    pub fn equations(&self) -> Vec<Equation> {
        match self {
            CalculationItem::Shell(_) => vec![Equation::ShellRequiredThickness, Equation::NominalThickness],
            CalculationItem::Head(_) => vec![Equation::HeadRequiredThickness, Equation::NominalThickness],
            CalculationItem::ExternalPressure(_) => {
                vec![Equation::ExternalPressureThickness, Equation::ExternalPressureChart]
            }
            CalculationItem::Reinforcement(_) => vec![
                Equation::ReinforcementRequiredArea,
                Equation::ReinforcementAvailableArea,
            ],
            CalculationItem::Hydrotest(_) => vec![Equation::HydrotestPressure],
        }
    }

    /// Validate and evaluate the item. Shell and head items take their
    /// allowable stress from `table` unless the input overrides it.
    pub fn evaluate(&self, table: &MaterialTable) -> CalcResult<CalculationOutcome> {
        Ok(match self {
            CalculationItem::Shell(i) => CalculationOutcome::Shell(shell::calculate(i, table)?),
            CalculationItem::Head(i) => CalculationOutcome::Head(head::calculate(i, table)?),
            CalculationItem::ExternalPressure(i) => {
                CalculationOutcome::ExternalPressure(external_pressure::calculate(i)?)
            }
            CalculationItem::Reinforcement(i) => {
                CalculationOutcome::Reinforcement(reinforcement::calculate(i)?)
            }
            CalculationItem::Hydrotest(i) => CalculationOutcome::Hydrotest(hydrotest::calculate(i)?),
        })
    }
}

/// Result of evaluating a [`CalculationItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutcome {
    Shell(ShellResult),
    Head(HeadResult),
    ExternalPressure(ExternalPressureResult),
    Reinforcement(ReinforcementResult),
    Hydrotest(HydrotestResult),
}

impl CalculationOutcome {
    /// One-line human-readable summary, as shown on screen and in reports
    pub fn summary_line(&self) -> String {
        match self {
            CalculationOutcome::Shell(r) => format!(
                "UG-27 Shell Thickness: Required = {:.2} mm, Nominal = {:.2} mm",
                r.thickness.required_thickness_mm, r.thickness.nominal_thickness_mm
            ),
            CalculationOutcome::Head(r) => format!(
                "UG-32 Head Thickness: Required = {:.2} mm, Nominal = {:.2} mm",
                r.thickness.required_thickness_mm, r.thickness.nominal_thickness_mm
            ),
            CalculationOutcome::ExternalPressure(r) => format!(
                "UG-28 External Pressure: Thickness = {:.2} mm, Allowable Pressure ({}) = {:.3} MPa",
                r.thickness_mm, r.curve, r.allowable_pressure_mpa
            ),
            CalculationOutcome::Reinforcement(r) => format!(
                "Appendix 1-7 Reinforcement: Required = {:.2} mm², Available = {:.2} mm²",
                r.required_area_mm2, r.available_area_mm2
            ),
            CalculationOutcome::Hydrotest(r) => {
                format!("UG-99 Hydrotest Pressure: {:.2} MPa", r.test_pressure_mpa)
            }
        }
    }
}
