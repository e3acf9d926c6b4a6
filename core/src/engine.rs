//! The metrics-derivation engine — the heart of the calculator.
//!
//! FORMULA CHAIN (fixed, documented, never reordered):
//!   1. Funnel:      retention, opportunities, customers
//!   2. Revenue:     revenue, discounts, refunds, seasonality adjustment
//!   3. Costs:       lead/meeting costs, commission, marketing spend
//!   4. Bottom line: gross/operating/net profit, break-even point
//!   5. Ratios:      profit margin, ROI, CLTV:CAC
//!
//! RULES:
//!   - compute() is a pure function of its ParameterSet. Same inputs,
//!     bit-identical outputs. No shared mutable state, no I/O.
//!   - A ratio whose denominator is legitimately zero degrades to 0.0.
//!     An undefined ratio reads as "no signal yet" — never NaN, never
//!     Inf, never an error.
//!   - The engine never rejects inputs. Missing fields arrived as 0.0
//!     from the schema; range checks live at the input layer.

use crate::{config::EngineConfig, params::ParameterSet, unit_economics::UnitEconomics};
use serde::{Deserialize, Serialize};

/// Every metric derived from one ParameterSet, plus the exact inputs
/// that produced it. Immutable once handed to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    // Funnel
    pub customer_retention_rate: f64,
    pub opportunities: f64,
    pub customers: f64,
    // Revenue
    pub revenue: f64,
    pub discounts_given: f64,
    pub refunds_given: f64,
    pub seasonality_adjusted_revenue: f64,
    // Costs
    pub total_cost_leads: f64,
    pub total_cost_meetings: f64,
    pub commission: f64,
    pub total_marketing_spend: f64,
    // Bottom line
    pub gross_profit: f64,
    pub operating_profit: f64,
    pub net_profit: f64,
    pub break_even_point: f64,
    // Ratios
    pub profit_margin: f64,
    pub roi: f64,
    pub cltv_cac_ratio: f64,
    /// Alternate cost/LTV chain, attached when the config asks for it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_economics: Option<UnitEconomics>,
    /// The exact inputs this set was derived from.
    pub inputs: ParameterSet,
}

pub struct MetricsEngine {
    config: EngineConfig,
}

impl MetricsEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Derive the full metric chain from one set of inputs.
    pub fn compute(&self, inputs: &ParameterSet) -> MetricSet {
        let p = inputs;

        // ── Funnel ─────────────────────────────────────────────
        let customer_retention_rate = 1.0 - p.churn_rate;
        let opportunities = p.leads_generated * p.lead_conversion_rate;
        let customers = opportunities * p.opportunity_conversion_rate;

        // ── Revenue ────────────────────────────────────────────
        let revenue = customers * p.average_deal_size;
        let discounts_given = revenue * p.discount_rate;
        let refunds_given = revenue * p.refund_rate;
        let seasonality_adjusted_revenue = revenue * (1.0 + p.seasonality_adjustment);

        // ── Costs ──────────────────────────────────────────────
        let total_cost_leads = p.leads_generated * p.cost_per_lead;
        let total_cost_meetings = p.meetings_held * p.cost_per_meeting;
        let commission = revenue * p.sales_commission_rate;
        let total_marketing_spend = p.marketing_spend + p.product_dev_cost;

        // ── Bottom line ────────────────────────────────────────
        let gross_profit = revenue - p.cogs;
        let operating_profit = gross_profit - p.operating_expenses;
        let net_profit = operating_profit - commission - total_marketing_spend;
        let break_even_point = total_cost_leads + total_cost_meetings;

        // ── Ratios ─────────────────────────────────────────────
        let profit_margin = if revenue > 0.0 {
            (revenue - (p.cogs + p.operating_expenses)) / revenue
        } else {
            0.0
        };
        let roi = if total_marketing_spend > 0.0 {
            (net_profit / total_marketing_spend) * 100.0
        } else {
            0.0
        };
        let cltv_cac_ratio = if p.customer_acquisition_cost > 0.0 {
            p.avg_customer_lifetime_value / p.customer_acquisition_cost
        } else {
            0.0
        };

        let unit_economics = if self.config.include_unit_economics {
            Some(UnitEconomics::derive(p, commission, profit_margin))
        } else {
            None
        };

        log::debug!(
            "computed metrics: revenue={revenue:.2} net_profit={net_profit:.2} roi={roi:.2}%"
        );

        MetricSet {
            customer_retention_rate,
            opportunities,
            customers,
            revenue,
            discounts_given,
            refunds_given,
            seasonality_adjusted_revenue,
            total_cost_leads,
            total_cost_meetings,
            commission,
            total_marketing_spend,
            gross_profit,
            operating_profit,
            net_profit,
            break_even_point,
            profit_margin,
            roi,
            cltv_cac_ratio,
            unit_economics,
            inputs: p.clone(),
        }
    }
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
