//! Export views over a computed MetricSet.
//!
//! RULE: exporters (CSV, JSON, report generators) are external
//! collaborators. They receive raw numbers under canonical field names
//! and do their own currency/percentage formatting — none of that
//! happens here.
//!
//! Three views per record:
//!   - inputs_view:  the parameters only
//!   - metrics_view: the derived metrics only, unit-economics lifted flat
//!   - merged_view:  the flat union of both
//!
//! Views are BTreeMaps so key order is stable run to run.

use crate::engine::MetricSet;
use crate::error::SimResult;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Copy every top-level numeric field of a JSON object into the view.
/// Nested objects are skipped; the caller lifts them explicitly.
fn collect_numeric(view: &mut BTreeMap<String, f64>, object: &Value) {
    if let Value::Object(fields) = object {
        for (key, value) in fields {
            if let Some(n) = value.as_f64() {
                view.insert(key.clone(), n);
            }
        }
    }
}

impl MetricSet {
    /// The exact parameters this set was derived from.
    pub fn inputs_view(&self) -> SimResult<BTreeMap<String, f64>> {
        let value = serde_json::to_value(&self.inputs)?;
        let mut view = BTreeMap::new();
        collect_numeric(&mut view, &value);
        Ok(view)
    }

    /// Every derived metric, inputs excluded. The unit-economics block,
    /// when present, appears flat under its own metric names.
    pub fn metrics_view(&self) -> SimResult<BTreeMap<String, f64>> {
        let value = serde_json::to_value(self)?;
        let mut view = BTreeMap::new();
        collect_numeric(&mut view, &value);
        if let Some(block) = value.get("unit_economics") {
            collect_numeric(&mut view, block);
        }
        Ok(view)
    }

    /// Flat union of metrics_view and inputs_view. The two namespaces are
    /// disjoint by construction, so no entry shadows another.
    pub fn merged_view(&self) -> SimResult<BTreeMap<String, f64>> {
        let mut view = self.metrics_view()?;
        view.extend(self.inputs_view()?);
        Ok(view)
    }

    /// Look up a single value by name in the merged namespace.
    pub fn value(&self, name: &str) -> SimResult<Option<f64>> {
        Ok(self.merged_view()?.get(name).copied())
    }
}

// ── Chart-feed orderings ─────────────────────────────────────────────
//
// Pure orderings of already-derived numbers. The excluded chart layer
// renders them; nothing here draws anything.

/// One step of the revenue-breakdown sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownStep {
    pub label: &'static str,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    Revenue,
    Cost,
    Profit,
}

/// One bar of the profit waterfall. Cost stages carry negative values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterfallStage {
    pub label: &'static str,
    pub value: f64,
    pub kind: StageKind,
}

impl MetricSet {
    /// Gross revenue, then what remains after discounts, after refunds,
    /// and after the seasonality adjustment.
    pub fn revenue_breakdown(&self) -> Vec<BreakdownStep> {
        vec![
            BreakdownStep {
                label: "gross_revenue",
                amount: self.revenue,
            },
            BreakdownStep {
                label: "after_discounts",
                amount: self.revenue - self.discounts_given,
            },
            BreakdownStep {
                label: "after_refunds",
                amount: self.revenue - self.discounts_given - self.refunds_given,
            },
            BreakdownStep {
                label: "seasonality_adjusted",
                amount: self.seasonality_adjusted_revenue,
            },
        ]
    }

    /// Revenue down to net profit, one stage per deduction.
    pub fn profit_waterfall(&self) -> Vec<WaterfallStage> {
        vec![
            WaterfallStage {
                label: "revenue",
                value: self.revenue,
                kind: StageKind::Revenue,
            },
            WaterfallStage {
                label: "cogs",
                value: -self.inputs.cogs,
                kind: StageKind::Cost,
            },
            WaterfallStage {
                label: "gross_profit",
                value: self.gross_profit,
                kind: StageKind::Profit,
            },
            WaterfallStage {
                label: "operating_expenses",
                value: -self.inputs.operating_expenses,
                kind: StageKind::Cost,
            },
            WaterfallStage {
                label: "commission",
                value: -self.commission,
                kind: StageKind::Cost,
            },
            WaterfallStage {
                label: "marketing",
                value: -self.total_marketing_spend,
                kind: StageKind::Cost,
            },
            WaterfallStage {
                label: "net_profit",
                value: self.net_profit,
                kind: StageKind::Profit,
            },
        ]
    }
}
