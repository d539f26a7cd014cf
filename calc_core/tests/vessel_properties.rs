//! Property tests for the evaluators and the material lookup.

use calc_core::calculations::external_pressure::allowable_external_pressure;
use calc_core::calculations::head::head_thickness;
use calc_core::calculations::hydrotest;
use calc_core::calculations::reinforcement::reinforcement_areas;
use calc_core::calculations::shell::shell_thickness;
use calc_core::calculations::HydrotestInput;
use calc_core::equations::ChartCurve;
use calc_core::materials::{allowable_stress, MaterialTable};
use calc_core::CalcError;
use proptest::prelude::*;

proptest! {
    #[test]
    fn shell_nominal_is_required_plus_allowance(
        p in 0.01_f64..20.0,
        r in 1.0_f64..5000.0,
        s in 50.0_f64..300.0,
        e in 0.7_f64..=1.0,
        ca in 0.0_f64..10.0,
    ) {
        let t = shell_thickness(p, r, s, e, ca).unwrap();
        prop_assert!(t.required_thickness_mm > 0.0);
        prop_assert_eq!(t.nominal_thickness_mm, t.required_thickness_mm + ca);
    }

    #[test]
    fn head_nominal_is_required_plus_allowance(
        p in 0.01_f64..20.0,
        d in 10.0_f64..10000.0,
        s in 50.0_f64..300.0,
        e in 0.7_f64..=1.0,
        ca in 0.0_f64..10.0,
    ) {
        let t = head_thickness(p, d, s, e, ca).unwrap();
        prop_assert!(t.required_thickness_mm > 0.0);
        prop_assert_eq!(t.nominal_thickness_mm, t.required_thickness_mm + ca);
    }

    #[test]
    fn shell_rejects_non_positive_denominator(
        s in 1.0_f64..300.0,
        e in 0.7_f64..=1.0,
        k in 1.01_f64..10.0,
    ) {
        // 0.6*P = k*S*E, so S*E - 0.6*P < 0
        let p = k * s * e / 0.6;
        let err = shell_thickness(p, 500.0, s, e, 1.0).unwrap_err();
        let is_non_physical = matches!(err, CalcError::NonPhysicalInput { .. });
        prop_assert!(is_non_physical);
    }

    #[test]
    fn head_rejects_non_positive_denominator(
        s in 1.0_f64..300.0,
        e in 0.7_f64..=1.0,
        k in 1.01_f64..10.0,
    ) {
        // 0.2*P = k*1.8*S*E
        let p = k * 1.8 * s * e / 0.2;
        prop_assert!(head_thickness(p, 1000.0, s, e, 1.0).is_err());
    }

    #[test]
    fn evaluators_are_pure(
        p in 0.01_f64..20.0,
        r in 1.0_f64..5000.0,
        s in 50.0_f64..300.0,
        e in 0.7_f64..=1.0,
        ca in 0.0_f64..10.0,
    ) {
        let a = shell_thickness(p, r, s, e, ca).unwrap();
        let b = shell_thickness(p, r, s, e, ca).unwrap();
        prop_assert_eq!(a.required_thickness_mm.to_bits(), b.required_thickness_mm.to_bits());
        prop_assert_eq!(a.nominal_thickness_mm.to_bits(), b.nominal_thickness_mm.to_bits());

        let h1 = head_thickness(p, 2.0 * r, s, e, ca).unwrap();
        let h2 = head_thickness(p, 2.0 * r, s, e, ca).unwrap();
        prop_assert_eq!(h1, h2);

        let n1 = reinforcement_areas(r, ca + 1.0, e, s / 10.0, 3.0 * r);
        let n2 = reinforcement_areas(r, ca + 1.0, e, s / 10.0, 3.0 * r);
        prop_assert_eq!(n1.available_area_mm2.to_bits(), n2.available_area_mm2.to_bits());
    }

    #[test]
    fn chart_pressure_is_stepped_and_non_increasing(
        d_o in 100.0_f64..5000.0,
        ratio_a in 0.1_f64..10.0,
        ratio_b in 0.1_f64..10.0,
    ) {
        for curve in ChartCurve::ALL {
            let (short, long) = if ratio_a <= ratio_b { (ratio_a, ratio_b) } else { (ratio_b, ratio_a) };
            let p_short = allowable_external_pressure(curve, d_o, short * d_o);
            let p_long = allowable_external_pressure(curve, d_o, long * d_o);
            prop_assert!(p_short >= p_long);
            prop_assert!([0.40, 0.30, 0.20, 0.60, 0.45, 0.35].contains(&p_short));
        }
    }

    #[test]
    fn repad_never_reduces_available_area(
        d in 10.0_f64..500.0,
        extra in 0.0_f64..500.0,
        t_n in 1.0_f64..50.0,
        t_p in 1.0_f64..50.0,
    ) {
        let r = reinforcement_areas(d, 10.0, t_n, t_p, d + extra);
        prop_assert!(r.repad_area_mm2 >= 0.0);
        prop_assert!(r.available_area_mm2 >= r.nozzle_area_mm2);
    }

    #[test]
    fn untabulated_temperatures_miss(temp in 21_i32..50) {
        prop_assert_eq!(allowable_stress("SA-516-70", temp as f64), None);
    }

    #[test]
    fn fractional_temperatures_truncate(frac in 0.0_f64..0.999) {
        let table = MaterialTable::builtin();
        prop_assert_eq!(table.lookup("SA-240-304", 100.0 + frac), Some(115.0));
    }
}

#[test]
fn reference_values() {
    let head = head_thickness(1.0, 1000.0, 138.0, 0.85, 1.0).unwrap();
    assert!((head.required_thickness_mm - 4.76).abs() < 0.03);
    assert!((head.nominal_thickness_mm - 5.76).abs() < 0.03);

    assert_eq!(allowable_external_pressure(ChartCurve::CurveB, 1000.0, 2000.0), 0.40);
    assert_eq!(reinforcement_areas(100.0, 12.0, 10.0, 8.0, 200.0).required_area_mm2, 1200.0);

    let ht = hydrotest::calculate(&HydrotestInput {
        label: "HT".to_string(),
        mawp_mpa: 1.5,
        test_factor: 1.3,
    })
    .unwrap();
    assert!((ht.test_pressure_mpa - 1.95).abs() < 1e-12);

    assert!(shell_thickness(10.0, 500.0, 5.0, 0.7, 1.0).is_err());
}
