//! # calc_core - Pressure Vessel Calculation Engine
//!
//! `calc_core` computes required and nominal wall thicknesses, nozzle
//! reinforcement areas, and test pressures for pressure-vessel components
//! per ASME Section VIII Division 1. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Every evaluator is a pure function of its inputs
//! - **JSON-First**: All input and result types implement Serialize/Deserialize
//! - **Rich Errors**: Non-physical inputs are reported, never returned as a
//!   negative or infinite thickness
//! - **Optional Lookups**: A material table miss is `None`, not an error
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::shell::shell_thickness;
//! use calc_core::materials::allowable_stress;
//!
//! let s = allowable_stress("SA-516-70", 100.0).unwrap();
//! let t = shell_thickness(1.0, 500.0, s, 0.85, 1.0).unwrap();
//! println!("t_req = {:.2} mm, t_nom = {:.2} mm", t.required_thickness_mm, t.nominal_thickness_mm);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Shell, head, external pressure, reinforcement, hydrotest
//! - [`equations`] - Raw formulas and the equation registry
//! - [`materials`] - Allowable stress table and lookup
//! - [`project`] - Project container, metadata, and settings
//! - [`report`] - Result lines and text rendering
//! - [`pdf`] - Typst PDF rendering
//! - [`errors`] - Structured error types
//! - [`file_io`] - Project files with atomic saves

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod pdf;
pub mod project;
pub mod report;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutcome};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, save_project};
pub use materials::{allowable_stress, MaterialTable};
pub use project::{GlobalSettings, Project, ProjectMetadata};
pub use report::Report;
