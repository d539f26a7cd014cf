//! # External Pressure (UG-28, simplified)
//!
//! Two pieces:
//!
//! - a thickness estimate `t = P_ext · D_o / F` with the fixed empirical
//!   factor F = 0.25
//! - a stepped allowable-pressure chart keyed by curve and `L/D_o` band
//!
//! Neither reproduces the full factor-A / factor-B chart procedure. The
//! constants are kept as-is so results match existing calculation sheets.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::require_positive;
use crate::equations::vessel::{self, ChartCurve};
use crate::errors::{CalcError, CalcResult};

impl FromStr for ChartCurve {
    type Err = CalcError;

    /// Accepts "Curve B", "B", "curve-d", "CurveD" and similar.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_uppercase();
        match normalized.strip_prefix("CURVE").unwrap_or(&normalized) {
            "B" => Ok(ChartCurve::CurveB),
            "D" => Ok(ChartCurve::CurveD),
            _ => Err(CalcError::invalid_input(
                "curve",
                s,
                "Unknown chart curve (expected \"Curve B\" or \"Curve D\")",
            )),
        }
    }
}

/// Input parameters for the external pressure check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalPressureInput {
    /// User label
    pub label: String,

    /// External design pressure P_ext (MPa)
    pub external_pressure_mpa: f64,

    /// Outside diameter D_o (mm)
    pub outside_diameter_mm: f64,

    /// Unsupported length L (mm)
    pub unsupported_length_mm: f64,

    /// Chart curve for the allowable-pressure lookup
    pub curve: ChartCurve,
}

impl ExternalPressureInput {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("external_pressure_mpa", self.external_pressure_mpa, "External pressure")?;
        require_positive("outside_diameter_mm", self.outside_diameter_mm, "Outside diameter")?;
        require_positive("unsupported_length_mm", self.unsupported_length_mm, "Unsupported length")
    }
}

/// Results from the external pressure check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalPressureResult {
    pub curve: ChartCurve,

    /// Simplified thickness estimate (mm)
    pub thickness_mm: f64,

    /// L / D_o
    pub length_to_diameter: f64,

    /// Allowable external pressure from the chart (MPa)
    pub allowable_pressure_mpa: f64,
}

/// Thickness estimate for external pressure.
///
/// `_unsupported_length` does not enter the formula; it is part of the
/// signature so callers pass the same geometry to this and
/// [`allowable_external_pressure`].
pub fn external_pressure_thickness(p_ext: f64, d_o: f64, _unsupported_length: f64) -> f64 {
    vessel::external_pressure_thickness(p_ext, d_o)
}

/// Allowable external pressure for a curve and geometry, via the `L/D_o` ratio.
pub fn allowable_external_pressure(curve: ChartCurve, d_o: f64, unsupported_length: f64) -> f64 {
    vessel::chart_allowable_pressure(curve, unsupported_length / d_o)
}

/// Run both the thickness estimate and the chart lookup.
pub fn calculate(input: &ExternalPressureInput) -> CalcResult<ExternalPressureResult> {
    input.validate()?;

    let d_o = input.outside_diameter_mm;
    let l = input.unsupported_length_mm;
    let result = ExternalPressureResult {
        curve: input.curve,
        thickness_mm: external_pressure_thickness(input.external_pressure_mpa, d_o, l),
        length_to_diameter: l / d_o,
        allowable_pressure_mpa: allowable_external_pressure(input.curve, d_o, l),
    };

    debug!(
        label = %input.label,
        curve = %input.curve,
        ratio = result.length_to_diameter,
        "UG-28 external pressure evaluated"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_b_boundary_ratio() {
        // L/D_o = 2.0 is inside the first band
        assert_eq!(allowable_external_pressure(ChartCurve::CurveB, 1000.0, 2000.0), 0.40);
    }

    #[test]
    fn test_chart_bands() {
        assert_eq!(allowable_external_pressure(ChartCurve::CurveB, 1000.0, 3000.0), 0.30);
        assert_eq!(allowable_external_pressure(ChartCurve::CurveB, 1000.0, 4000.0), 0.30);
        assert_eq!(allowable_external_pressure(ChartCurve::CurveB, 1000.0, 4001.0), 0.20);
        assert_eq!(allowable_external_pressure(ChartCurve::CurveD, 1000.0, 500.0), 0.60);
        assert_eq!(allowable_external_pressure(ChartCurve::CurveD, 1000.0, 3500.0), 0.45);
        assert_eq!(allowable_external_pressure(ChartCurve::CurveD, 1000.0, 9000.0), 0.35);
    }

    #[test]
    fn test_thickness_ignores_length() {
        let a = external_pressure_thickness(0.1, 1000.0, 100.0);
        let b = external_pressure_thickness(0.1, 1000.0, 90_000.0);
        assert_eq!(a, b);
        assert_eq!(a, 400.0);
    }

    #[test]
    fn test_parse_curve() {
        assert_eq!("Curve B".parse::<ChartCurve>().unwrap(), ChartCurve::CurveB);
        assert_eq!("b".parse::<ChartCurve>().unwrap(), ChartCurve::CurveB);
        assert_eq!("curve-d".parse::<ChartCurve>().unwrap(), ChartCurve::CurveD);
        assert_eq!("CurveD".parse::<ChartCurve>().unwrap(), ChartCurve::CurveD);
    }

    #[test]
    fn test_unknown_curve_is_error() {
        let err = "Curve X".parse::<ChartCurve>().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!("".parse::<ChartCurve>().is_err());
    }

    #[test]
    fn test_curve_serializes_as_chart_name() {
        let json = serde_json::to_string(&ChartCurve::CurveD).unwrap();
        assert_eq!(json, "\"Curve D\"");
    }

    #[test]
    fn test_calculate() {
        let input = ExternalPressureInput {
            label: "Vacuum".to_string(),
            external_pressure_mpa: 0.1,
            outside_diameter_mm: 1000.0,
            unsupported_length_mm: 5000.0,
            curve: ChartCurve::CurveD,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.length_to_diameter, 5.0);
        assert_eq!(result.allowable_pressure_mpa, 0.35);
    }

    #[test]
    fn test_zero_diameter_rejected() {
        let input = ExternalPressureInput {
            label: "Bad".to_string(),
            external_pressure_mpa: 0.1,
            outside_diameter_mm: 0.0,
            unsupported_length_mm: 5000.0,
            curve: ChartCurve::CurveB,
        };
        assert!(calculate(&input).is_err());
    }
}
