//! # Nozzle Reinforcement Areas (Appendix 1-7)
//!
//! Area-replacement check: area removed by the opening versus area supplied
//! by the nozzle wall and an annular reinforcing pad.
//!
//! ```text
//! A_req   = d · t_shell
//! A_noz   = d · t_nozzle
//! A_pad   = π((D_p/2)² − (d/2)²) · (t_p / d)
//! A_avail = A_noz + A_pad
//! ```
//!
//! No pass/fail verdict is produced; the caller compares the two areas.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::require_positive;
use crate::equations::vessel;
use crate::errors::CalcResult;

/// Input parameters for a nozzle opening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementInput {
    /// User label (e.g., "N1 inlet")
    pub label: String,

    /// Nozzle diameter d (mm)
    pub nozzle_diameter_mm: f64,

    /// Shell thickness t_shell (mm)
    pub shell_thickness_mm: f64,

    /// Nozzle wall thickness t_n (mm)
    pub nozzle_thickness_mm: f64,

    /// Pad thickness t_p (mm)
    pub repad_thickness_mm: f64,

    /// Pad outside diameter D_p (mm)
    pub repad_diameter_mm: f64,
}

impl ReinforcementInput {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("nozzle_diameter_mm", self.nozzle_diameter_mm, "Nozzle diameter")?;
        require_positive("shell_thickness_mm", self.shell_thickness_mm, "Shell thickness")?;
        require_positive("nozzle_thickness_mm", self.nozzle_thickness_mm, "Nozzle thickness")?;
        require_positive("repad_thickness_mm", self.repad_thickness_mm, "Repad thickness")?;
        require_positive("repad_diameter_mm", self.repad_diameter_mm, "Repad diameter")
    }
}

/// Reinforcement areas (mm²).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcementResult {
    pub required_area_mm2: f64,
    pub nozzle_area_mm2: f64,
    pub repad_area_mm2: f64,
    /// Nozzle plus pad contribution
    pub available_area_mm2: f64,
}

/// Evaluate required and available areas for scalar inputs.
pub fn reinforcement_areas(
    d_nozzle: f64,
    t_shell: f64,
    t_nozzle: f64,
    t_repad: f64,
    d_repad: f64,
) -> ReinforcementResult {
    let nozzle = vessel::nozzle_wall_area(d_nozzle, t_nozzle);
    let repad = vessel::repad_area(d_nozzle, d_repad, t_repad);
    ReinforcementResult {
        required_area_mm2: vessel::reinforcement_required_area(d_nozzle, t_shell),
        nozzle_area_mm2: nozzle,
        repad_area_mm2: repad,
        available_area_mm2: nozzle + repad,
    }
}

pub fn calculate(input: &ReinforcementInput) -> CalcResult<ReinforcementResult> {
    input.validate()?;

    let result = reinforcement_areas(
        input.nozzle_diameter_mm,
        input.shell_thickness_mm,
        input.nozzle_thickness_mm,
        input.repad_thickness_mm,
        input.repad_diameter_mm,
    );

    debug!(
        label = %input.label,
        required = result.required_area_mm2,
        available = result.available_area_mm2,
        "Appendix 1-7 reinforcement evaluated"
    );

    Ok(result)
}
