use crate::collect::{collect_scenarios, resolve_root};
use crate::error::ReportError;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// File counts for a single scenario directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioRecord {
    /// The base name of the scenario directory
    pub name: String,
    /// The number of entries matching [crate::STATE_FILE_PATTERN]
    pub states: usize,
    /// The number of entries matching [crate::ERROR_FILE_PATTERN]
    pub errors: usize,
}

/// Aggregate counts over every scenario in a [Report]
///
/// Field order is the order of the keys in the serialized JSON block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportTotals {
    pub scenario_count: usize,
    pub total_states: usize,
    pub total_errors: usize,
}

/// The scenarios found under one root directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    root: PathBuf,
    scenarios: Vec<ScenarioRecord>,
}

impl Report {
    /// Create a report from scenarios that were already collected
    pub fn new(root: PathBuf, scenarios: Vec<ScenarioRecord>) -> Self {
        Self { root, scenarios }
    }

    /// Resolve `root` and collect the scenarios beneath it
    ///
    /// A root that does not exist, or is not a directory, gives an empty report.
    pub fn collect(root: &Path) -> Result<Self, ReportError> {
        let root = resolve_root(root)?;
        let scenarios = collect_scenarios(&root)?;
        info!(
            "Collected {} scenarios from {}",
            scenarios.len(),
            root.display()
        );

        Ok(Self::new(root, scenarios))
    }

    /// The resolved root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scenarios, ordered by directory name
    pub fn scenarios(&self) -> &[ScenarioRecord] {
        &self.scenarios
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn totals(&self) -> ReportTotals {
        self.scenarios
            .iter()
            .fold(ReportTotals::default(), |totals, scenario| ReportTotals {
                scenario_count: totals.scenario_count + 1,
                total_states: totals.total_states + scenario.states,
                total_errors: totals.total_errors + scenario.errors,
            })
    }
}
