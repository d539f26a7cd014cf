//! # Project Data Structures
//!
//! The `Project` struct is the root container for a vessel's calculations.
//! Projects serialize to `.pvc` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, project info, timestamps)
//! ├── settings: GlobalSettings (code edition, defaults, material table)
//! ├── items: HashMap<Uuid, CalculationItem> (all calculations)
//! └── order: Vec<Uuid> (display / report order)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::project::Project;
//! use calc_core::calculations::{CalculationItem, HydrotestInput};
//!
//! let mut project = Project::new("Jane Engineer", "V-101 Separator", "ACME Corp");
//! project.add_item(CalculationItem::Hydrotest(HydrotestInput {
//!     label: "Shop test".to_string(),
//!     mawp_mpa: 1.5,
//!     test_factor: project.settings.default_test_factor,
//! }));
//!
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! assert!(json.contains("V-101 Separator"));
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::calculations::{CalculationItem, CalculationOutcome};
use crate::errors::CalcResult;
use crate::materials::MaterialTable;

/// Current schema version for .pvc files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// Items live in a UUID-keyed map; `order` records the sequence in which they
/// were added so reports list results the way the engineer entered them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, project info)
    pub meta: ProjectMetadata,

    /// Global settings (code edition, defaults)
    pub settings: GlobalSettings,

    /// All calculation items, keyed by UUID
    pub items: HashMap<Uuid, CalculationItem>,

    /// Item ids in insertion order
    #[serde(default)]
    pub order: Vec<Uuid>,
}

/// Outcome of evaluating one project item.
#[derive(Debug, Clone)]
pub struct ItemEvaluation {
    pub id: Uuid,
    pub label: String,
    pub calc_type: &'static str,
    pub outcome: CalcResult<CalculationOutcome>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Example
    ///
    /// ```rust
    /// use calc_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "V-200", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// assert_eq!(project.item_count(), 0);
    /// ```
    pub fn new(
        engineer: impl Into<String>,
        project_name: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                project_name: project_name.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            items: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Add a calculation item to the project.
    ///
    /// Returns the UUID assigned to the item.
    pub fn add_item(&mut self, item: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.order.push(id);
        self.touch();
        id
    }

    /// Remove a calculation item by UUID.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculationItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.order.retain(|o| o != id);
            self.touch();
        }
        item
    }

    /// Get a calculation item by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&CalculationItem> {
        self.items.get(id)
    }

    /// Items in insertion order.
    ///
    /// Items missing from `order` (e.g. hand-edited files) follow, sorted by
    /// label so the sequence stays deterministic.
    pub fn items_in_order(&self) -> Vec<(Uuid, &CalculationItem)> {
        let mut listed: Vec<(Uuid, &CalculationItem)> = self
            .order
            .iter()
            .filter_map(|id| self.items.get(id).map(|item| (*id, item)))
            .collect();

        let mut stray: Vec<(Uuid, &CalculationItem)> = self
            .items
            .iter()
            .filter(|(id, _)| !self.order.contains(id))
            .map(|(id, item)| (*id, item))
            .collect();
        stray.sort_by(|a, b| a.1.label().cmp(b.1.label()).then(a.0.cmp(&b.0)));

        listed.extend(stray);
        listed
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Material table for this project: the configured CSV if set, otherwise
    /// the built-in table.
    ///
    /// A configured CSV that cannot be read yields an empty table, so items
    /// needing a stress lookup fail with `MaterialNotFound` and the rest still
    /// evaluate.
    pub fn material_table(&self) -> Cow<'static, MaterialTable> {
        match &self.settings.material_table {
            Some(path) => Cow::Owned(MaterialTable::load_or_empty(path)),
            None => Cow::Borrowed(MaterialTable::builtin()),
        }
    }

    /// Evaluate every item, in order, against `table`.
    ///
    /// One failing item does not stop the others.
    pub fn evaluate_all(&self, table: &MaterialTable) -> Vec<ItemEvaluation> {
        let results: Vec<ItemEvaluation> = self
            .items_in_order()
            .into_iter()
            .map(|(id, item)| ItemEvaluation {
                id,
                label: item.label().to_string(),
                calc_type: item.calc_type(),
                outcome: item.evaluate(table),
            })
            .collect();

        let failed = results.iter().filter(|r| r.outcome.is_err()).count();
        info!(
            project = %self.meta.project_name,
            items = results.len(),
            failed,
            "project evaluated"
        );
        results
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Project / vessel name, printed on reports
    pub project_name: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Global project settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    /// Design code edition (e.g., "ASME BPVC VIII-1 2023")
    pub code: String,

    /// Default weld joint efficiency for new shell/head items
    pub default_joint_efficiency: f64,

    /// Default corrosion allowance for new shell/head items (mm)
    pub default_corrosion_allowance_mm: f64,

    /// Default hydrotest factor
    pub default_test_factor: f64,

    /// External allowable stress table; the built-in table is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_table: Option<PathBuf>,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            code: "ASME BPVC VIII-1 2023".to_string(),
            default_joint_efficiency: 0.85,
            default_corrosion_allowance_mm: 1.0,
            default_test_factor: 1.3,
            material_table: None,
        }
    }
}
