//! # Vesselcalc CLI Application
//!
//! Terminal front end for the pressure vessel calculations in `calc_core`.
//! Each calculation subcommand prints the one-line result; `--json` adds the
//! full result as JSON and `--project` appends the input to a `.pvc` file.
//!
//! ```text
//! calc_cli shell --pressure 1.0 --radius 500 --material SA-516-70 --temp 100
//! calc_cli hydrotest --mawp 1.5 --project v101.pvc
//! calc_cli report v101.pvc --format pdf
//! ```

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use calc_core::calculations::{
    CalculationItem, ExternalPressureInput, HeadInput, HydrotestInput, ReinforcementInput,
    ShellInput,
};
use calc_core::equations::{generate_equations_markdown, ChartCurve};
use calc_core::file_io::{load_or_create_project, load_project, save_project};
use calc_core::materials::MaterialTable;
use calc_core::pdf::{render_report_pdf, report_file_name};
use calc_core::project::{GlobalSettings, ItemEvaluation, Project};
use calc_core::report::Report;
use calc_core::{CalcError, CalcResult};

#[derive(Parser)]
#[command(name = "calc_cli")]
#[command(about = "Vesselcalc CLI - ASME Sec VIII Div 1 pressure vessel calculator", long_about = None)]
struct Cli {
    /// Print results (and errors) as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Allowable stress table (CSV: Material,Temp_C,Allowable_Stress_MPa)
    #[arg(long, global = true, value_name = "CSV")]
    materials: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by the calculation subcommands
#[derive(Args)]
struct ItemOptions {
    /// Label for the calculation
    #[arg(long)]
    label: Option<String>,

    /// Append the calculation to this project file (created if missing)
    #[arg(long, value_name = "PVC")]
    project: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// UG-27 cylindrical shell thickness
    Shell {
        /// Design pressure P (MPa)
        #[arg(long)]
        pressure: f64,
        /// Inside radius R (mm)
        #[arg(long)]
        radius: f64,
        #[command(flatten)]
        material: MaterialArgs,
        #[command(flatten)]
        options: ItemOptions,
    },
    /// UG-32 2:1 ellipsoidal head thickness
    Head {
        /// Design pressure P (MPa)
        #[arg(long)]
        pressure: f64,
        /// Inside diameter D (mm)
        #[arg(long)]
        diameter: f64,
        #[command(flatten)]
        material: MaterialArgs,
        #[command(flatten)]
        options: ItemOptions,
    },
    /// UG-28 external pressure thickness and chart allowable
    External {
        /// External pressure P_ext (MPa)
        #[arg(long)]
        pressure: f64,
        /// Outside diameter D_o (mm)
        #[arg(long)]
        diameter: f64,
        /// Unsupported length L (mm)
        #[arg(long)]
        length: f64,
        /// Chart curve ("Curve B" or "Curve D")
        #[arg(long, default_value = "Curve B")]
        curve: ChartCurve,
        #[command(flatten)]
        options: ItemOptions,
    },
    /// Appendix 1-7 nozzle reinforcement areas
    Reinforcement {
        /// Nozzle diameter (mm)
        #[arg(long)]
        nozzle_diameter: f64,
        /// Shell thickness (mm)
        #[arg(long)]
        shell_thickness: f64,
        /// Nozzle wall thickness (mm)
        #[arg(long)]
        nozzle_thickness: f64,
        /// Repad thickness (mm)
        #[arg(long)]
        repad_thickness: f64,
        /// Repad outer diameter (mm)
        #[arg(long)]
        repad_diameter: f64,
        #[command(flatten)]
        options: ItemOptions,
    },
    /// UG-99 hydrostatic test pressure
    Hydrotest {
        /// Maximum allowable working pressure (MPa)
        #[arg(long)]
        mawp: f64,
        /// Test factor [default: project setting, 1.3]
        #[arg(long)]
        factor: Option<f64>,
        #[command(flatten)]
        options: ItemOptions,
    },
    /// Look up an allowable stress
    Material {
        /// Material specification (e.g., SA-516-70)
        name: String,
        /// Temperature (°C), truncated to whole degrees
        temp: f64,
    },
    /// List the materials and temperatures in the stress table
    Materials,
    /// Evaluate every calculation in a project file
    Run {
        /// Path to the .pvc project file
        project_path: PathBuf,
    },
    /// Write a report for a project file
    Report {
        /// Path to the .pvc project file
        project_path: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
        /// Output file (text defaults to stdout, PDF to <project>_ASME_Report.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the equations reference (markdown)
    Equations {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Material, temperature, and weld options for shell and head
#[derive(Args)]
struct MaterialArgs {
    /// Material specification
    #[arg(long, default_value = "SA-516-70")]
    material: String,
    /// Design temperature (°C)
    #[arg(long, default_value_t = 100.0)]
    temp: f64,
    /// Weld joint efficiency E [default: project setting, 0.85]
    #[arg(long)]
    efficiency: Option<f64>,
    /// Corrosion allowance (mm) [default: project setting, 1.0]
    #[arg(long)]
    ca: Option<f64>,
    /// Allowable stress override (MPa); skips the table lookup
    #[arg(long)]
    stress: Option<f64>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Pdf,
}

fn main() -> ExitCode {
    // stdout carries results and JSON; logs go to stderr
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let json = cli.json;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if json {
                if let Ok(text) = serde_json::to_string_pretty(&e) {
                    eprintln!("{}", text);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CalcResult<()> {
    let ctx = Context {
        json: cli.json,
        materials: cli.materials,
    };

    match cli.command {
        Commands::Shell { pressure, radius, material, options } => {
            let (project, settings) = ctx.open_project(&options)?;
            let item = CalculationItem::Shell(ShellInput {
                label: options.label.clone().unwrap_or_else(|| "Shell".to_string()),
                design_pressure_mpa: pressure,
                inside_radius_mm: radius,
                material: material.material,
                design_temp_c: material.temp,
                joint_efficiency: material.efficiency.unwrap_or(settings.default_joint_efficiency),
                corrosion_allowance_mm: material.ca.unwrap_or(settings.default_corrosion_allowance_mm),
                allowable_stress_mpa: material.stress,
            });
            ctx.calculate(item, project, &options)
        }
        Commands::Head { pressure, diameter, material, options } => {
            let (project, settings) = ctx.open_project(&options)?;
            let item = CalculationItem::Head(HeadInput {
                label: options.label.clone().unwrap_or_else(|| "Head".to_string()),
                design_pressure_mpa: pressure,
                inside_diameter_mm: diameter,
                material: material.material,
                design_temp_c: material.temp,
                joint_efficiency: material.efficiency.unwrap_or(settings.default_joint_efficiency),
                corrosion_allowance_mm: material.ca.unwrap_or(settings.default_corrosion_allowance_mm),
                allowable_stress_mpa: material.stress,
            });
            ctx.calculate(item, project, &options)
        }
        Commands::External { pressure, diameter, length, curve, options } => {
            let item = CalculationItem::ExternalPressure(ExternalPressureInput {
                label: options.label.clone().unwrap_or_else(|| "External pressure".to_string()),
                external_pressure_mpa: pressure,
                outside_diameter_mm: diameter,
                unsupported_length_mm: length,
                curve,
            });
            let (project, _) = ctx.open_project(&options)?;
            ctx.calculate(item, project, &options)
        }
        Commands::Reinforcement {
            nozzle_diameter,
            shell_thickness,
            nozzle_thickness,
            repad_thickness,
            repad_diameter,
            options,
        } => {
            let item = CalculationItem::Reinforcement(ReinforcementInput {
                label: options.label.clone().unwrap_or_else(|| "Nozzle".to_string()),
                nozzle_diameter_mm: nozzle_diameter,
                shell_thickness_mm: shell_thickness,
                nozzle_thickness_mm: nozzle_thickness,
                repad_thickness_mm: repad_thickness,
                repad_diameter_mm: repad_diameter,
            });
            let (project, _) = ctx.open_project(&options)?;
            ctx.calculate(item, project, &options)
        }
        Commands::Hydrotest { mawp, factor, options } => {
            let (project, settings) = ctx.open_project(&options)?;
            let item = CalculationItem::Hydrotest(HydrotestInput {
                label: options.label.clone().unwrap_or_else(|| "Hydrotest".to_string()),
                mawp_mpa: mawp,
                test_factor: factor.unwrap_or(settings.default_test_factor),
            });
            ctx.calculate(item, project, &options)
        }
        Commands::Material { name, temp } => ctx.cmd_material(&name, temp),
        Commands::Materials => ctx.cmd_materials(),
        Commands::Run { project_path } => ctx.cmd_run(&project_path),
        Commands::Report { project_path, format, output } => {
            ctx.cmd_report(&project_path, format, output.as_deref())
        }
        Commands::Equations { output } => cmd_equations(output.as_deref()),
    }
}

/// Global flags carried into every subcommand
struct Context {
    json: bool,
    materials: Option<PathBuf>,
}

impl Context {
    /// Open the `--project` target, if any, with the settings that supply
    /// defaults for omitted options.
    fn open_project(&self, options: &ItemOptions) -> CalcResult<(Option<Project>, GlobalSettings)> {
        match options.project.as_deref() {
            Some(path) => {
                let project = load_or_create_project(path)?;
                let settings = project.settings.clone();
                Ok((Some(project), settings))
            }
            None => Ok((None, GlobalSettings::default())),
        }
    }

    /// Stress table: `--materials` first, then the project's table, then the
    /// built-in one. An unreadable CSV gives an empty table, so lookups miss.
    fn table(&self, project: Option<&Project>) -> Cow<'static, MaterialTable> {
        if let Some(path) = &self.materials {
            return Cow::Owned(MaterialTable::load_or_empty(path));
        }
        match project {
            Some(p) => p.material_table(),
            None => Cow::Borrowed(MaterialTable::builtin()),
        }
    }

    fn calculate(
        &self,
        item: CalculationItem,
        mut project: Option<Project>,
        options: &ItemOptions,
    ) -> CalcResult<()> {
        let table = self.table(project.as_ref());
        let outcome = item.evaluate(&table)?;

        println!("{}", outcome.summary_line());
        if self.json {
            println!("{}", to_json(&outcome)?);
        }

        if let (Some(project), Some(path)) = (project.as_mut(), options.project.as_deref()) {
            let id = project.add_item(item);
            save_project(project, path)?;
            info!(%id, path = %path.display(), "calculation added to project");
            println!("Saved to {}", path.display());
        }
        Ok(())
    }

    fn cmd_material(&self, name: &str, temp: f64) -> CalcResult<()> {
        let table = self.table(None);
        let stress = table.lookup(name, temp);

        if self.json {
            let value = serde_json::json!({
                "material": name,
                "temp_c": temp.trunc(),
                "allowable_stress_mpa": stress,
            });
            println!("{}", to_json(&value)?);
            return Ok(());
        }

        match stress {
            Some(s) => println!("{} at {} °C: S = {:.1} MPa", name, temp.trunc(), s),
            None => println!("Material properties not found for selected temperature."),
        }
        Ok(())
    }

    fn cmd_materials(&self) -> CalcResult<()> {
        let table = self.table(None);

        if self.json {
            println!("{}", to_json(table.records())?);
            return Ok(());
        }

        if table.is_empty() {
            println!("Material table is empty");
            return Ok(());
        }
        println!(
            "Materials ({}):",
            table.source.as_deref().unwrap_or("in memory")
        );
        for material in table.materials() {
            let temps: Vec<String> = table
                .temperatures(material)
                .iter()
                .map(|t| t.to_string())
                .collect();
            println!("  {} - {} °C", material, temps.join(", "));
        }
        Ok(())
    }

    fn cmd_run(&self, project_path: &Path) -> CalcResult<()> {
        let project = load_project(project_path)?;
        let table = self.table(Some(&project));
        let results = project.evaluate_all(&table);

        if self.json {
            println!("{}", to_json(&evaluations_json(&results))?);
            return Ok(());
        }

        println!("Project: {} ({} items)", project.meta.project_name, results.len());
        for r in &results {
            match &r.outcome {
                Ok(outcome) => println!("  [{}] {}", r.label, outcome.summary_line()),
                Err(e) => println!("  [{}] ERROR: {}", r.label, e),
            }
        }
        Ok(())
    }

    fn cmd_report(&self, project_path: &Path, format: ReportFormat, output: Option<&Path>) -> CalcResult<()> {
        let project = load_project(project_path)?;
        let table = self.table(Some(&project));
        let report = Report::from_project(&project, &table);
        debug!(lines = report.lines.len(), "report assembled");

        match format {
            ReportFormat::Text => {
                let text = report.render_text();
                match output {
                    Some(path) => write_file(path, text.as_bytes())?,
                    None => print!("{}", text),
                }
            }
            ReportFormat::Pdf => {
                let bytes = render_report_pdf(&report)?;
                let path = output
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from(report_file_name(&report.project_name)));
                write_file(&path, &bytes)?;
            }
        }
        Ok(())
    }
}

/// JSON array for `run --json`: one object per item, failures included
fn evaluations_json(results: &[ItemEvaluation]) -> serde_json::Value {
    let items: Vec<serde_json::Value> = results
        .iter()
        .map(|r| {
            let outcome = match &r.outcome {
                Ok(o) => serde_json::to_value(o),
                Err(e) => serde_json::to_value(e),
            };
            serde_json::json!({
                "id": r.id,
                "label": r.label,
                "ok": r.outcome.is_ok(),
                "result": outcome.unwrap_or(serde_json::Value::Null),
            })
        })
        .collect();
    serde_json::Value::Array(items)
}

fn cmd_equations(output: Option<&Path>) -> CalcResult<()> {
    let markdown = generate_equations_markdown();
    match output {
        Some(path) => write_file(path, markdown.as_bytes()),
        None => {
            print!("{}", markdown);
            Ok(())
        }
    }
}

fn write_file(path: &Path, contents: &[u8]) -> CalcResult<()> {
    fs::write(path, contents)
        .map_err(|e| CalcError::file_error("write", path.display().to_string(), e.to_string()))?;
    println!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> CalcResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })
}
