//! Side-by-side comparison across stored simulations.

use super::SimulationStore;
use crate::error::SimResult;
use serde::Serialize;

/// One row per found simulation, keyed by its display name. Cell order
/// follows the requested metric order; a name that resolves to neither a
/// derived metric nor an input parameter yields an empty cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub metrics: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

impl SimulationStore {
    /// Build a comparison over the requested ids and metric names.
    ///
    /// Unknown ids are skipped rather than failing the table — the UI
    /// routinely submits stale selections. Values are raw pass-throughs
    /// of the stored numbers, looked up in the merged metric∪input
    /// namespace. No aggregation, no formatting.
    pub fn compare(&self, ids: &[&str], metric_names: &[&str]) -> SimResult<ComparisonTable> {
        let mut rows = Vec::new();
        for id in ids {
            let record = match self.get(id) {
                Ok(r) => r,
                Err(_) => {
                    log::debug!("compare skipping unknown simulation {id}");
                    continue;
                }
            };
            let merged = record.data.merged_view()?;
            let values = metric_names
                .iter()
                .map(|name| merged.get(*name).copied())
                .collect();
            rows.push(ComparisonRow {
                name: record.name.clone(),
                values,
            });
        }
        Ok(ComparisonTable {
            metrics: metric_names.iter().map(|m| m.to_string()).collect(),
            rows,
        })
    }
}
