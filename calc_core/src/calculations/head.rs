//! # 2:1 Ellipsoidal Head Thickness (UG-32)
//!
//! ```text
//! t_req = P·D / (2·K·S·E − 0.2·P),  K = 0.90
//! t_nom = t_req + CA
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    check_denominator, require_positive, resolve_allowable_stress, validate_efficiency_and_allowance,
    ThicknessResult,
};
use crate::equations::vessel;
use crate::errors::CalcResult;
use crate::materials::MaterialTable;

/// Input parameters for an ellipsoidal head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadInput {
    /// User label (e.g., "Top head")
    pub label: String,

    /// Internal design pressure P (MPa)
    pub design_pressure_mpa: f64,

    /// Inside diameter D (mm)
    pub inside_diameter_mm: f64,

    /// Material specification used for the stress lookup
    pub material: String,

    /// Design temperature (°C)
    pub design_temp_c: f64,

    /// Weld joint efficiency E (0.7 - 1.0)
    pub joint_efficiency: f64,

    /// Corrosion allowance CA (mm)
    pub corrosion_allowance_mm: f64,

    /// Explicit allowable stress S (MPa); skips the table lookup when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowable_stress_mpa: Option<f64>,
}

impl HeadInput {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("design_pressure_mpa", self.design_pressure_mpa, "Design pressure")?;
        require_positive("inside_diameter_mm", self.inside_diameter_mm, "Inside diameter")?;
        validate_efficiency_and_allowance(self.joint_efficiency, self.corrosion_allowance_mm)
    }
}

/// Results from the head calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadResult {
    /// Allowable stress S used (MPa)
    pub allowable_stress_mpa: f64,

    #[serde(flatten)]
    pub thickness: ThicknessResult,
}

/// Evaluate UG-32(c) for scalar inputs.
///
/// Fails with `NonPhysicalInput` when `2*K*S*E - 0.2*P <= 0`.
pub fn head_thickness(p: f64, d: f64, s: f64, e: f64, ca: f64) -> CalcResult<ThicknessResult> {
    check_denominator("UG-32 head thickness", "2*K*S*E - 0.2*P", vessel::head_denominator(p, s, e))?;

    let required = vessel::head_required_thickness(p, d, s, e);
    Ok(ThicknessResult {
        required_thickness_mm: required,
        nominal_thickness_mm: vessel::nominal_thickness(required, ca),
    })
}

/// Calculate head thickness for a labelled input set.
pub fn calculate(input: &HeadInput, table: &MaterialTable) -> CalcResult<HeadResult> {
    input.validate()?;

    let s = resolve_allowable_stress(
        &input.material,
        input.design_temp_c,
        input.allowable_stress_mpa,
        table,
    )?;

    let thickness = head_thickness(
        input.design_pressure_mpa,
        input.inside_diameter_mm,
        s,
        input.joint_efficiency,
        input.corrosion_allowance_mm,
    )?;

    debug!(
        label = %input.label,
        s_mpa = s,
        t_req = thickness.required_thickness_mm,
        "UG-32 head evaluated"
    );

    Ok(HeadResult {
        allowable_stress_mpa: s,
        thickness,
    })
}
