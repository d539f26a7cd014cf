//! # Hydrostatic Test Pressure (UG-99)
//!
//! `P_T = MAWP · factor`, with the factor typically 1.3 (current editions)
//! or 1.5 (older editions).

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::require_positive;
use crate::equations::vessel;
use crate::errors::CalcResult;

/// Input parameters for the hydrotest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrotestInput {
    pub label: String,

    /// Maximum allowable working pressure (MPa)
    pub mawp_mpa: f64,

    /// Test factor applied to MAWP
    pub test_factor: f64,
}

impl HydrotestInput {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("mawp_mpa", self.mawp_mpa, "MAWP")?;
        require_positive("test_factor", self.test_factor, "Test factor")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HydrotestResult {
    /// Hydrostatic test pressure (MPa)
    pub test_pressure_mpa: f64,
}

pub fn calculate(input: &HydrotestInput) -> CalcResult<HydrotestResult> {
    input.validate()?;

    let test_pressure_mpa = vessel::hydrotest_pressure(input.mawp_mpa, input.test_factor);
    debug!(label = %input.label, test_pressure_mpa, "UG-99 hydrotest evaluated");

    Ok(HydrotestResult { test_pressure_mpa })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_hydrotest() {
        let input = HydrotestInput {
            label: "HT".to_string(),
            mawp_mpa: 1.5,
            test_factor: 1.3,
        };
        let result = calculate(&input).unwrap();
        assert!((result.test_pressure_mpa - 1.95).abs() < 1e-12);
    }

    #[test]
    fn test_negative_factor_rejected() {
        let input = HydrotestInput {
            label: "HT".to_string(),
            mawp_mpa: 1.5,
            test_factor: -1.3,
        };
        assert!(calculate(&input).is_err());
    }
}
