//! In-memory simulation history.
//!
//! RULE: append/delete only. A record is never mutated after save().
//! The id counter counts every simulation ever created in this store's
//! lifetime — delete() does not decrement it, only clear() resets it.
//!
//! One store per session. The store carries no locking and no
//! versioning; sharing one instance across concurrent sessions is a
//! caller bug, not a supported mode.

use crate::{
    clock::{Clock, WallClock},
    engine::MetricSet,
    error::{SimError, SimResult},
    types::SimId,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

mod compare;
pub use compare::{ComparisonRow, ComparisonTable};

/// One immutable snapshot: a display name, a save-time stamp, and the
/// metric set (inputs included) exactly as the engine returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    pub id: SimId,
    pub name: String,
    pub timestamp: String,
    pub data: MetricSet,
}

pub struct SimulationStore {
    records: Vec<SimulationRecord>,
    counter: u64,
    clock: Box<dyn Clock>,
}

impl SimulationStore {
    pub fn new() -> Self {
        Self::with_clock(Box::new(WallClock))
    }

    /// Store with an injected clock. Tests pin timestamps this way.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            records: Vec::new(),
            counter: 0,
            clock,
        }
    }

    /// Persist a computed metric set under the next sequential id.
    ///
    /// A blank or whitespace-only name falls back to the id itself.
    /// Never fails: the id is store-assigned, so there is no uniqueness
    /// constraint to violate.
    pub fn save(&mut self, name: Option<&str>, data: MetricSet) -> SimulationRecord {
        self.counter += 1;
        let id: SimId = format!("Sim {}", self.counter);
        let name = match name.map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => id.clone(),
        };
        let record = SimulationRecord {
            id,
            name,
            timestamp: self.clock.timestamp(),
            data,
        };
        log::info!("saved simulation {} ({})", record.id, record.name);
        self.records.push(record.clone());
        record
    }

    /// The only operation that surfaces a definite error: an unknown id
    /// is a NotFound, propagated to the caller, never retried.
    pub fn get(&self, id: &str) -> SimResult<&SimulationRecord> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| SimError::SimulationNotFound { id: id.to_string() })
    }

    /// All records in creation order.
    pub fn list(&self) -> &[SimulationRecord] {
        &self.records
    }

    /// Remove a record. Deleting an unknown id is a silent no-op — the
    /// UI routinely deletes stale selections. Returns whether anything
    /// was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() < before;
        if removed {
            log::info!("deleted simulation {id}");
        } else {
            log::debug!("delete ignored unknown simulation {id}");
        }
        removed
    }

    /// Drop every record and restart id numbering at "Sim 1". This is a
    /// reset to the initial state, not merely a bulk delete.
    pub fn clear(&mut self) {
        self.records.clear();
        self.counter = 0;
        log::info!("cleared simulation history");
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ── Export views, id-addressed ─────────────────────────────

    pub fn inputs_view(&self, id: &str) -> SimResult<BTreeMap<String, f64>> {
        self.get(id)?.data.inputs_view()
    }

    pub fn metrics_view(&self, id: &str) -> SimResult<BTreeMap<String, f64>> {
        self.get(id)?.data.metrics_view()
    }

    pub fn merged_view(&self, id: &str) -> SimResult<BTreeMap<String, f64>> {
        self.get(id)?.data.merged_view()
    }
}

impl Default for SimulationStore {
    fn default() -> Self {
        Self::new()
    }
}
