//! # Materials Database
//!
//! Allowable stress lookup for pressure vessel plate and forging materials
//! (ASME Section II, Part D values at selected temperatures).
//!
//! The table is keyed by (material, integer temperature in °C). Lookups match
//! exactly: there is no interpolation between tabulated temperatures, and the
//! temperature is truncated to a whole degree before matching.
//!
//! A lookup never fails. A missing row, an unreadable file, or a malformed
//! table all come back as `None`; failures to read the table are logged at
//! `warn` level.
//!
//! ## Data Source
//!
//! The built-in table is `assets/materials/allowable_stress.csv`, embedded at
//! compile time. A project may point at its own CSV with the same columns:
//!
//! ```text
//! Material,Temp_C,Allowable_Stress_MPa
//! SA-516-70,100,138
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::{allowable_stress, MaterialTable};
//!
//! assert_eq!(allowable_stress("SA-516-70", 100.0), Some(138.0));
//! assert_eq!(allowable_stress("SA-516-70", 105.0), None); // not tabulated
//!
//! let table = MaterialTable::builtin();
//! assert!(table.materials().contains(&"SA-105"));
//! ```

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{CalcError, CalcResult};

/// Material grades offered by the calculator
pub const MATERIAL_GRADES: [&str; 3] = ["SA-516-70", "SA-240-304", "SA-105"];

const BUILTIN_CSV: &str = include_str!("../../../assets/materials/allowable_stress.csv");

static BUILTIN_TABLE: Lazy<MaterialTable> = Lazy::new(|| {
    MaterialTable::parse_csv(BUILTIN_CSV, "builtin").unwrap_or_else(|e| {
        warn!(error = %e, "built-in material table failed to parse");
        MaterialTable::default()
    })
});

/// One row of the allowable stress table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialStressRecord {
    /// Material specification (e.g., "SA-516-70")
    pub material: String,
    /// Tabulated temperature (°C)
    pub temp_c: i32,
    /// Allowable stress S (MPa)
    pub allowable_stress_mpa: f64,
}

/// Allowable stress table indexed by (material, temperature).
#[derive(Debug, Clone, Default)]
pub struct MaterialTable {
    index: HashMap<(String, i32), f64>,
    records: Vec<MaterialStressRecord>,
    /// Where the table came from ("builtin" or a file path)
    pub source: Option<String>,
}

impl MaterialTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The table embedded in the binary, parsed on first use
    pub fn builtin() -> &'static MaterialTable {
        &BUILTIN_TABLE
    }

    /// Load a table from a CSV file
    pub fn load_from_csv(path: &Path) -> CalcResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CalcError::file_error("open", path.display().to_string(), e.to_string())
        })?;
        Self::parse_csv(&contents, &path.display().to_string())
    }

    /// Load a table from a CSV file, falling back to an empty table.
    ///
    /// Read and parse failures are logged; every lookup against the fallback
    /// misses.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load_from_csv(path) {
            Ok(table) => table,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "error reading material properties");
                MaterialTable {
                    source: Some(path.display().to_string()),
                    ..MaterialTable::default()
                }
            }
        }
    }

    /// Parse CSV text with `Material`, `Temp_C` and `Allowable_Stress_MPa`
    /// columns (any order, header names case-insensitive).
    pub fn parse_csv(contents: &str, source: &str) -> CalcResult<Self> {
        let mut lines = contents.lines();

        let header_line = lines
            .next()
            .ok_or_else(|| CalcError::file_error("read", source, "CSV file is empty"))?;

        let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();
        let col_index = |name: &str| -> CalcResult<usize> {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or_else(|| CalcError::file_error("parse", source, format!("Missing '{}' column", name)))
        };

        let material_idx = col_index("Material")?;
        let temp_idx = col_index("Temp_C")?;
        let stress_idx = col_index("Allowable_Stress_MPa")?;

        let mut table = MaterialTable::new();
        table.source = Some(source.to_string());

        for (i, line) in lines.enumerate() {
            let line_num = i + 2;
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            let field = |idx: usize| -> CalcResult<&str> {
                fields.get(idx).copied().filter(|f| !f.is_empty()).ok_or_else(|| {
                    CalcError::file_error("parse", source, format!("Line {}: missing field", line_num))
                })
            };

            let material = field(material_idx)?.to_string();
            let temp_c = parse_temperature(field(temp_idx)?).ok_or_else(|| {
                CalcError::file_error("parse", source, format!("Line {}: Temp_C is not a whole number", line_num))
            })?;
            let allowable_stress_mpa: f64 = field(stress_idx)?.parse().map_err(|_| {
                CalcError::file_error(
                    "parse",
                    source,
                    format!("Line {}: Allowable_Stress_MPa is not a number", line_num),
                )
            })?;

            table.insert(MaterialStressRecord {
                material,
                temp_c,
                allowable_stress_mpa,
            });
        }

        Ok(table)
    }

    /// Insert a row. The first row for a (material, temperature) key wins.
    pub fn insert(&mut self, record: MaterialStressRecord) {
        let key = (record.material.clone(), record.temp_c);
        if self.index.contains_key(&key) {
            debug!(material = %record.material, temp_c = record.temp_c, "duplicate material row ignored");
            return;
        }
        self.index.insert(key, record.allowable_stress_mpa);
        self.records.push(record);
    }

    /// Exact-match lookup. The temperature is truncated toward zero before
    /// matching; non-finite temperatures never match.
    pub fn lookup(&self, material: &str, temp_c: f64) -> Option<f64> {
        let temp = whole_degrees(temp_c)?;
        self.index.get(&(material.to_string(), temp)).copied()
    }

    /// Distinct material names, in table order
    pub fn materials(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for record in &self.records {
            if !names.contains(&record.material.as_str()) {
                names.push(&record.material);
            }
        }
        names
    }

    /// Tabulated temperatures for one material, ascending
    pub fn temperatures(&self, material: &str) -> Vec<i32> {
        let mut temps: Vec<i32> = self
            .records
            .iter()
            .filter(|r| r.material == material)
            .map(|r| r.temp_c)
            .collect();
        temps.sort_unstable();
        temps
    }

    pub fn records(&self) -> &[MaterialStressRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Look up the allowable stress in the built-in table.
pub fn allowable_stress(material: &str, temp_c: f64) -> Option<f64> {
    MaterialTable::builtin().lookup(material, temp_c)
}

/// Look up the allowable stress in a CSV file on disk.
///
/// The file is read on every call. Any read or parse failure is logged and
/// reported as `None`, same as a missing row.
pub fn allowable_stress_from_file(path: &Path, material: &str, temp_c: f64) -> Option<f64> {
    MaterialTable::load_or_empty(path).lookup(material, temp_c)
}

/// Truncate a temperature to whole degrees, `None` if it cannot be represented
fn whole_degrees(temp_c: f64) -> Option<i32> {
    if !temp_c.is_finite() {
        return None;
    }
    let t = temp_c.trunc();
    if t < i32::MIN as f64 || t > i32::MAX as f64 {
        return None;
    }
    Some(t as i32)
}

/// Parse a Temp_C cell: integers, or decimals with no fractional part ("100.0")
fn parse_temperature(s: &str) -> Option<i32> {
    if let Ok(t) = s.parse::<i32>() {
        return Some(t);
    }
    let value: f64 = s.parse().ok()?;
    if value.fract() != 0.0 {
        return None;
    }
    whole_degrees(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    #[test]
    fn test_builtin_table_loaded() {
        let table = MaterialTable::builtin();
        assert!(!table.is_empty());
        assert_eq!(table.source.as_deref(), Some("builtin"));
        for grade in MATERIAL_GRADES {
            assert!(table.materials().contains(&grade), "{} missing", grade);
        }
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(allowable_stress("SA-516-70", 100.0), Some(138.0));
        assert_eq!(allowable_stress("SA-240-304", 100.0), Some(115.0));
    }

    #[test]
    fn test_temperature_truncated_before_matching() {
        assert_eq!(allowable_stress("SA-240-304", 100.9), Some(115.0));
        assert_eq!(allowable_stress("SA-240-304", 99.9), None);
    }

    #[test]
    fn test_miss_returns_none() {
        // No interpolation between 100 and 150
        assert_eq!(allowable_stress("SA-516-70", 120.0), None);
        assert_eq!(allowable_stress("SA-999", 100.0), None);
        // Material names match exactly
        assert_eq!(allowable_stress("sa-516-70", 100.0), None);
    }

    #[test]
    fn test_non_finite_temperature_is_a_miss() {
        assert_eq!(allowable_stress("SA-516-70", f64::NAN), None);
        assert_eq!(allowable_stress("SA-516-70", f64::INFINITY), None);
    }

    #[test]
    fn test_temperatures_sorted() {
        let temps = MaterialTable::builtin().temperatures("SA-105");
        assert_eq!(temps.first(), Some(&20));
        assert!(temps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_parse_csv_columns_any_order() {
        let csv = "Temp_C,Allowable_Stress_MPa,Material\n100,120.5,X-1\n";
        let table = MaterialTable::parse_csv(csv, "inline").unwrap();
        assert_eq!(table.lookup("X-1", 100.0), Some(120.5));
    }

    #[test]
    fn test_parse_csv_first_row_wins() {
        let csv = "Material,Temp_C,Allowable_Stress_MPa\nX,20,100\nX,20,90\n";
        let table = MaterialTable::parse_csv(csv, "inline").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("X", 20.0), Some(100.0));
    }

    #[test]
    fn test_parse_csv_decimal_temperature() {
        let csv = "Material,Temp_C,Allowable_Stress_MPa\nX,20.0,100\n";
        let table = MaterialTable::parse_csv(csv, "inline").unwrap();
        assert_eq!(table.lookup("X", 20.0), Some(100.0));
    }

    #[test]
    fn test_parse_csv_malformed() {
        assert!(MaterialTable::parse_csv("", "inline").is_err());
        assert!(MaterialTable::parse_csv("Material,Temp\nX,20\n", "inline").is_err());
        assert!(
            MaterialTable::parse_csv("Material,Temp_C,Allowable_Stress_MPa\nX,hot,100\n", "inline").is_err()
        );
        assert!(
            MaterialTable::parse_csv("Material,Temp_C,Allowable_Stress_MPa\nX,20.5,100\n", "inline").is_err()
        );
    }

    #[test]
    fn test_missing_file_is_a_miss() {
        let path = temp_dir().join("vesselcalc_test_no_such_table.csv");
        assert_eq!(allowable_stress_from_file(&path, "SA-516-70", 100.0), None);
    }

    #[test]
    fn test_malformed_file_is_a_miss() {
        let path = temp_dir().join("vesselcalc_test_bad_table.csv");
        std::fs::write(&path, "not,a,table\n1,2,3\n").unwrap();
        assert_eq!(allowable_stress_from_file(&path, "SA-516-70", 100.0), None);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unreadable_table_falls_back_to_empty() {
        let path = temp_dir().join("vesselcalc_test_missing_fallback.csv");
        let table = MaterialTable::load_or_empty(&path);
        assert!(table.is_empty());
        assert_eq!(table.source, Some(path.display().to_string()));
        assert_eq!(table.lookup("SA-516-70", 100.0), None);
    }

    #[test]
    fn test_lookup_from_file() {
        let path = temp_dir().join("vesselcalc_test_good_table.csv");
        std::fs::write(&path, "Material,Temp_C,Allowable_Stress_MPa\nSA-516-70,75,140\n").unwrap();
        assert_eq!(allowable_stress_from_file(&path, "SA-516-70", 75.0), Some(140.0));
        let _ = std::fs::remove_file(&path);
    }
}
