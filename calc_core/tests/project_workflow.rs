//! End-to-end: build a project, save it, reload it, and report on it.

use std::env::temp_dir;
use std::fs;

use calc_core::calculations::{
    CalculationItem, CalculationOutcome, ExternalPressureInput, HeadInput, HydrotestInput,
    ReinforcementInput, ShellInput,
};
use calc_core::equations::ChartCurve;
use calc_core::materials::MaterialTable;
use calc_core::{load_project, save_project, Project, Report};

fn sample_project() -> Project {
    let mut project = Project::new("J. Smith", "My_Vessel_Project", "ACME Refining");
    let settings = project.settings.clone();

    project.add_item(CalculationItem::Shell(ShellInput {
        label: "Shell".to_string(),
        design_pressure_mpa: 1.0,
        inside_radius_mm: 500.0,
        material: "SA-516-70".to_string(),
        design_temp_c: 100.0,
        joint_efficiency: settings.default_joint_efficiency,
        corrosion_allowance_mm: settings.default_corrosion_allowance_mm,
        allowable_stress_mpa: None,
    }));
    project.add_item(CalculationItem::Head(HeadInput {
        label: "Heads".to_string(),
        design_pressure_mpa: 1.0,
        inside_diameter_mm: 1000.0,
        material: "SA-516-70".to_string(),
        design_temp_c: 100.0,
        joint_efficiency: settings.default_joint_efficiency,
        corrosion_allowance_mm: settings.default_corrosion_allowance_mm,
        allowable_stress_mpa: None,
    }));
    project.add_item(CalculationItem::ExternalPressure(ExternalPressureInput {
        label: "Vacuum".to_string(),
        external_pressure_mpa: 0.1,
        outside_diameter_mm: 1000.0,
        unsupported_length_mm: 2000.0,
        curve: ChartCurve::CurveB,
    }));
    project.add_item(CalculationItem::Reinforcement(ReinforcementInput {
        label: "N1".to_string(),
        nozzle_diameter_mm: 100.0,
        shell_thickness_mm: 12.0,
        nozzle_thickness_mm: 10.0,
        repad_thickness_mm: 8.0,
        repad_diameter_mm: 200.0,
    }));
    project.add_item(CalculationItem::Hydrotest(HydrotestInput {
        label: "Shop test".to_string(),
        mawp_mpa: 1.5,
        test_factor: settings.default_test_factor,
    }));
    project
}

#[test]
fn project_survives_save_and_load() {
    let path = temp_dir().join(format!("vesselcalc_workflow_{}.pvc", std::process::id()));
    let project = sample_project();
    save_project(&project, &path).unwrap();

    let loaded = load_project(&path).unwrap();
    assert_eq!(loaded.order, project.order);
    for (id, item) in project.items_in_order() {
        assert_eq!(loaded.get_item(&id), Some(item));
    }

    let _ = fs::remove_file(&path);
}

#[test]
fn every_item_evaluates() {
    let project = sample_project();
    let results = project.evaluate_all(MaterialTable::builtin());
    assert_eq!(results.len(), 5);
    assert!(results.iter().all(|r| r.outcome.is_ok()));

    match results[1].outcome.as_ref().unwrap() {
        CalculationOutcome::Head(head) => {
            assert_eq!(head.allowable_stress_mpa, 138.0);
            assert!((head.thickness.nominal_thickness_mm - 5.7407).abs() < 1e-3);
        }
        other => panic!("expected head outcome, got {:?}", other),
    }
}

#[test]
fn text_report_lists_results_in_order() {
    let project = sample_project();
    let report = Report::from_project(&project, MaterialTable::builtin());

    assert_eq!(
        report.lines,
        vec![
            "UG-27 Shell Thickness: Required = 4.28 mm, Nominal = 5.28 mm".to_string(),
            "UG-32 Head Thickness: Required = 4.74 mm, Nominal = 5.74 mm".to_string(),
            "UG-28 External Pressure: Thickness = 400.00 mm, Allowable Pressure (Curve B) = 0.400 MPa"
                .to_string(),
            "Appendix 1-7 Reinforcement: Required = 1200.00 mm², Available = 2884.96 mm²".to_string(),
            "UG-99 Hydrotest Pressure: 1.95 MPa".to_string(),
        ]
    );

    let text = report.render_text();
    assert!(text.starts_with("ASME Sec VIII Div 1 Report - My_Vessel_Project"));
    assert!(text.contains("Engineer: J. Smith"));
    assert!(text.contains("Page 1 of 1"));
}

#[test]
fn project_material_table_overrides_builtin() {
    let csv_path = temp_dir().join(format!("vesselcalc_stress_{}.csv", std::process::id()));
    fs::write(&csv_path, "Material,Temp_C,Allowable_Stress_MPa\nSA-516-70,100,100\n").unwrap();

    let mut project = sample_project();
    project.settings.material_table = Some(csv_path.clone());
    let table = project.material_table();
    let results = project.evaluate_all(&table);

    match results[0].outcome.as_ref().unwrap() {
        CalculationOutcome::Shell(shell) => assert_eq!(shell.allowable_stress_mpa, 100.0),
        other => panic!("expected shell outcome, got {:?}", other),
    }

    let _ = fs::remove_file(&csv_path);
}

#[test]
fn broken_material_table_only_fails_lookups() {
    let csv_path = temp_dir().join(format!("vesselcalc_bad_stress_{}.csv", std::process::id()));
    fs::write(&csv_path, "Grade,Temp,Stress\nSA-516-70,100,138\n").unwrap();

    for table_path in [csv_path.clone(), temp_dir().join("vesselcalc_no_such_stress.csv")] {
        let mut project = sample_project();
        project.settings.material_table = Some(table_path);
        let table = project.material_table();
        let results = project.evaluate_all(&table);

        assert_eq!(results.len(), 5);
        let codes: Vec<Option<&str>> = results
            .iter()
            .map(|r| r.outcome.as_ref().err().map(|e| e.error_code()))
            .collect();
        assert_eq!(
            codes,
            vec![Some("MATERIAL_NOT_FOUND"), Some("MATERIAL_NOT_FOUND"), None, None, None]
        );

        let report = Report::from_project(&project, &table);
        assert_eq!(report.lines.len(), 5);
        assert_eq!(report.lines[4], "UG-99 Hydrotest Pressure: 1.95 MPa");
    }

    let _ = fs::remove_file(&csv_path);
}
