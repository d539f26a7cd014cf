//! # Cylindrical Shell Thickness (UG-27)
//!
//! Minimum wall thickness of a cylindrical shell under internal pressure,
//! governed by circumferential (hoop) stress per UG-27(c)(1):
//!
//! ```text
//! t_req = P·R / (S·E − 0.6·P)
//! t_nom = t_req + CA
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::shell::shell_thickness;
//!
//! let t = shell_thickness(1.0, 500.0, 138.0, 0.85, 1.0).unwrap();
//! assert!((t.required_thickness_mm - 4.284).abs() < 0.01);
//! assert_eq!(t.nominal_thickness_mm, t.required_thickness_mm + 1.0);
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

/// Input parameters for a cylindrical shell.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Shell",
///   "design_pressure_mpa": 1.0,
///   "inside_radius_mm": 500.0,
///   "material": "SA-516-70",
///   "design_temp_c": 100.0,
///   "joint_efficiency": 0.85,
///   "corrosion_allowance_mm": 1.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellInput {
    /// User label (e.g., "Shell course 1")
    pub label: String,

    /// Internal design pressure P (MPa)
    pub design_pressure_mpa: f64,

    /// Inside radius R (mm)
    pub inside_radius_mm: f64,

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

impl ShellInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("design_pressure_mpa", self.design_pressure_mpa, "Design pressure")?;
        require_positive("inside_radius_mm", self.inside_radius_mm, "Inside radius")?;
        validate_efficiency_and_allowance(self.joint_efficiency, self.corrosion_allowance_mm)
    }
}

/// Results from the shell calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellResult {
    /// Allowable stress S used (MPa)
    pub allowable_stress_mpa: f64,

    #[serde(flatten)]
    pub thickness: ThicknessResult,
}

/// Evaluate UG-27(c)(1) for scalar inputs.
///
/// # Arguments
///
/// * `p` - Internal pressure (MPa)
/// * `r` - Inside radius (mm)
/// * `s` - Allowable stress (MPa)
/// * `e` - Joint efficiency
/// * `ca` - Corrosion allowance (mm)
///
/// # Returns
///
/// * `Ok(ThicknessResult)` - required and nominal thickness
/// * `Err(CalcError::NonPhysicalInput)` - if `S*E - 0.6*P <= 0`
pub fn shell_thickness(p: f64, r: f64, s: f64, e: f64, ca: f64) -> CalcResult<ThicknessResult> {
    check_denominator("UG-27 shell thickness", "S*E - 0.6*P", vessel::shell_denominator(p, s, e))?;

    let required = vessel::shell_required_thickness(p, r, s, e);
    Ok(ThicknessResult {
        required_thickness_mm: required,
        nominal_thickness_mm: vessel::nominal_thickness(required, ca),
    })
}

/// Calculate shell thickness for a labelled input set.
pub fn calculate(input: &ShellInput, table: &MaterialTable) -> CalcResult<ShellResult> {
    input.validate()?;

    let s = resolve_allowable_stress(
        &input.material,
        input.design_temp_c,
        input.allowable_stress_mpa,
        table,
    )?;

    let thickness = shell_thickness(
        input.design_pressure_mpa,
        input.inside_radius_mm,
        s,
        input.joint_efficiency,
        input.corrosion_allowance_mm,
    )?;

    debug!(
        label = %input.label,
        s_mpa = s,
        t_req = thickness.required_thickness_mm,
        "UG-27 shell evaluated"
    );

    Ok(ShellResult {
        allowable_stress_mpa: s,
        thickness,
    })
}
