//! The input-parameter catalog.
//!
//! One explicit schema instead of an untyped name→value bag: every known
//! parameter is a named, defaulted f64 field, so the catalog is checked at
//! construction time while a missing key still deserializes to 0.0.
//!
//! Rates are fractions in [0,1] — the input layer divides percentages by
//! 100 before they reach this struct. Monetary fields are non-negative by
//! convention; range enforcement is the input layer's job, not ours.
//! Several catalog members are collected but consumed by no formula —
//! they still round-trip through storage, projections, and comparisons.

use crate::error::SimResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    // ── Sales ──────────────────────────────────────────────────
    pub leads_generated: f64,
    pub lead_conversion_rate: f64,
    pub opportunity_conversion_rate: f64,
    pub average_deal_size: f64,
    pub cost_per_lead: f64,
    pub cost_per_meeting: f64,
    pub meetings_held: f64,
    pub follow_ups_per_lead: f64,
    pub sales_cycle_length: f64,
    pub sales_team_salary: f64,

    // ── Marketing ──────────────────────────────────────────────
    pub marketing_spend: f64,
    pub product_dev_cost: f64,
    pub discount_rate: f64,
    pub refund_rate: f64,
    pub seasonality_adjustment: f64,
    pub impressions: f64,
    pub click_through_rate: f64,

    // ── Offer ──────────────────────────────────────────────────
    pub churn_rate: f64,
    pub contract_length: f64,
    pub renewal_rate: f64,
    pub customer_acquisition_cost: f64,
    pub avg_customer_lifetime_value: f64,
    pub sales_commission_rate: f64,

    // ── Operations ─────────────────────────────────────────────
    pub cogs: f64,
    pub operating_expenses: f64,
    pub fixed_costs: f64,
    pub fulfillment_cost_per_order: f64,

    // ── Cash ───────────────────────────────────────────────────
    pub total_addressable_market: f64,
    pub cash_on_hand: f64,
    pub assets: f64,
    pub liabilities: f64,
    pub debt: f64,
    pub interest_rate: f64,
}

impl ParameterSet {
    /// Parse from JSON. Unknown keys are ignored, missing keys become 0.0.
    pub fn from_json_str(raw: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// A representative parameter set. Used by the runner's demo mode
    /// and as a baseline in tests.
    pub fn example() -> Self {
        Self {
            leads_generated: 100.0,
            lead_conversion_rate: 0.20,
            opportunity_conversion_rate: 0.30,
            average_deal_size: 1000.0,
            cost_per_lead: 10.0,
            cost_per_meeting: 50.0,
            meetings_held: 30.0,
            follow_ups_per_lead: 3.0,
            sales_cycle_length: 30.0,
            sales_team_salary: 20000.0,
            marketing_spend: 5000.0,
            product_dev_cost: 10000.0,
            discount_rate: 0.10,
            refund_rate: 0.05,
            seasonality_adjustment: 0.10,
            churn_rate: 0.10,
            contract_length: 12.0,
            customer_acquisition_cost: 200.0,
            avg_customer_lifetime_value: 5000.0,
            sales_commission_rate: 0.05,
            cogs: 5000.0,
            operating_expenses: 10000.0,
            ..Self::default()
        }
    }
}
