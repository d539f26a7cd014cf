//! # Pressure Vessel Formulas
//!
//! Closed-form equations from ASME BPVC Section VIII, Division 1. These are the
//! raw arithmetic kernels: no validation, no error handling. The evaluators in
//! [`crate::calculations`] wrap them and reject non-physical denominators.
//!
//! ## Notation
//!
//! - `P` = Internal design pressure (MPa)
//! - `R` = Inside radius (mm)
//! - `D` = Inside diameter (mm)
//! - `S` = Allowable stress at design temperature (MPa)
//! - `E` = Weld joint efficiency (dimensionless)
//! - `K` = Head form factor (dimensionless)
//! - `t` = Thickness (mm)
//!
//! ## References
//!
//! - UG-27(c)(1): Cylindrical shells, circumferential stress
//! - UG-32(c): 2:1 ellipsoidal heads
//! - UG-28: External pressure (simplified here, see [`EXTERNAL_PRESSURE_FACTOR`])
//! - Appendix 1-7: Nozzle reinforcement, area replacement
//! - UG-99: Standard hydrostatic test

use serde::{Deserialize, Serialize};

/// Form factor K for 2:1 ellipsoidal heads (UG-32(c))
pub const HEAD_FORM_FACTOR: f64 = 0.90;

/// Empirical divisor F used by the simplified UG-28 thickness estimate.
///
/// The real UG-28 procedure iterates through the geometry and material
/// charts (factors A and B). This constant stands in for that procedure and
/// must stay at 0.25 so results match earlier reports.
pub const EXTERNAL_PRESSURE_FACTOR: f64 = 0.25;

// =============================================================================
// UG-27 CYLINDRICAL SHELL
// =============================================================================

/// Denominator of the UG-27(c)(1) thickness formula: `S*E - 0.6*P`
#[inline]
pub fn shell_denominator(p: f64, s: f64, e: f64) -> f64 {
    s * e - 0.6 * p
}

/// Required shell thickness for internal pressure
///
/// # Formula (UG-27(c)(1))
/// - t = P*R / (S*E - 0.6*P)
///
/// Returns a negative or infinite value when the denominator is not positive.
#[inline]
pub fn shell_required_thickness(p: f64, r: f64, s: f64, e: f64) -> f64 {
    p * r / shell_denominator(p, s, e)
}

// =============================================================================
// UG-32 ELLIPSOIDAL HEAD
// =============================================================================

/// Denominator of the UG-32(c) head formula: `2*K*S*E - 0.2*P`
#[inline]
pub fn head_denominator(p: f64, s: f64, e: f64) -> f64 {
    2.0 * HEAD_FORM_FACTOR * s * e - 0.2 * p
}

/// Required 2:1 ellipsoidal head thickness
///
/// # Formula (UG-32(c))
/// - t = P*D / (2*K*S*E - 0.2*P), K = 0.90
#[inline]
pub fn head_required_thickness(p: f64, d: f64, s: f64, e: f64) -> f64 {
    p * d / head_denominator(p, s, e)
}

/// Nominal thickness: required thickness plus corrosion allowance
#[inline]
pub fn nominal_thickness(t_required: f64, corrosion_allowance: f64) -> f64 {
    t_required + corrosion_allowance
}

// =============================================================================
// UG-28 EXTERNAL PRESSURE (SIMPLIFIED)
// =============================================================================

/// Simplified thickness estimate for external pressure: t = P_ext * D_o / F
#[inline]
pub fn external_pressure_thickness(p_ext: f64, d_o: f64) -> f64 {
    p_ext * d_o / EXTERNAL_PRESSURE_FACTOR
}

/// Named curve on the simplified UG-28 allowable-pressure chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartCurve {
    /// Carbon and low-alloy steel curve
    #[serde(rename = "Curve B")]
    CurveB,
    /// Higher-strength curve
    #[serde(rename = "Curve D")]
    CurveD,
}

impl ChartCurve {
    pub const ALL: [ChartCurve; 2] = [ChartCurve::CurveB, ChartCurve::CurveD];

    /// Display name as printed on the chart ("Curve B", "Curve D")
    pub fn display_name(&self) -> &'static str {
        match self {
            ChartCurve::CurveB => "Curve B",
            ChartCurve::CurveD => "Curve D",
        }
    }

    /// Allowable pressure steps for L/D_o bands (≤2, ≤4, >4), in MPa
    fn steps(&self) -> [f64; 3] {
        match self {
            ChartCurve::CurveB => [0.40, 0.30, 0.20],
            ChartCurve::CurveD => [0.60, 0.45, 0.35],
        }
    }
}

impl std::fmt::Display for ChartCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Stepped allowable external pressure for a length-to-diameter ratio.
///
/// Band edges are inclusive on the upper side: ratio = 2.0 falls in the first
/// band, ratio = 4.0 in the second.
#[inline]
pub fn chart_allowable_pressure(curve: ChartCurve, length_to_diameter: f64) -> f64 {
    let [short, medium, long] = curve.steps();
    if length_to_diameter <= 2.0 {
        short
    } else if length_to_diameter <= 4.0 {
        medium
    } else {
        long
    }
}

// =============================================================================
// APPENDIX 1-7 NOZZLE REINFORCEMENT
// =============================================================================

/// Area removed by the opening: A = d * t_shell
#[inline]
pub fn reinforcement_required_area(d_nozzle: f64, t_shell: f64) -> f64 {
    d_nozzle * t_shell
}

/// Area contributed by the nozzle wall: A = d * t_nozzle
#[inline]
pub fn nozzle_wall_area(d_nozzle: f64, t_nozzle: f64) -> f64 {
    d_nozzle * t_nozzle
}

/// Area contributed by the reinforcing pad:
/// A = π((D_p/2)² - (d/2)²) * (t_p / d)
#[inline]
pub fn repad_area(d_nozzle: f64, d_repad: f64, t_repad: f64) -> f64 {
    let annulus = std::f64::consts::PI * ((d_repad / 2.0).powi(2) - (d_nozzle / 2.0).powi(2));
    annulus * (t_repad / d_nozzle)
}

// =============================================================================
// UG-99 HYDROSTATIC TEST
// =============================================================================

/// Hydrostatic test pressure: P_T = MAWP * factor
#[inline]
pub fn hydrotest_pressure(mawp: f64, factor: f64) -> f64 {
    mawp * factor
}
