//! salesmetrics-core — sales-metrics derivation engine and simulation history.
//!
//! Two components, strict dependency order:
//!   1. MetricsEngine — pure mapping from a ParameterSet to a MetricSet.
//!      No state, no I/O.
//!   2. SimulationStore — in-memory history of saved metric sets.
//!      Append/delete only; a record is never mutated after save.
//!
//! RULES:
//!   - The engine never fails on missing inputs: absent fields are zero.
//!   - A ratio over a zero denominator degrades to 0.0, never NaN or Inf.
//!   - History is volatile: nothing survives process exit.
//!   - One SimulationStore per session. Never share one across sessions.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod params;
pub mod projection;
pub mod store;
pub mod types;
pub mod unit_economics;
