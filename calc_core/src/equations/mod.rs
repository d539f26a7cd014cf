//! # Pressure Vessel Equations
//!
//! All formulas used by the evaluators, kept in one place so they can be
//! checked line by line against the code paragraphs they cite.
//!
//! ## Modules
//!
//! - [`vessel`] - Raw thickness, area, and pressure formulas
//! - [`registry`] - Equation metadata and tracking for the report appendix
//!
//! ## Units
//!
//! Pressures and stresses in MPa, lengths in mm, areas in mm².

pub mod registry;
pub mod vessel;

pub use vessel::{
    chart_allowable_pressure,
    external_pressure_thickness,
    head_denominator,
    head_required_thickness,
    hydrotest_pressure,
    nominal_thickness,
    nozzle_wall_area,
    reinforcement_required_area,
    repad_area,
    shell_denominator,
    shell_required_thickness,
    ChartCurve,
    EXTERNAL_PRESSURE_FACTOR,
    HEAD_FORM_FACTOR,
};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
