//! Unit-economics formula block — the alternate cost and LTV chain.
//!
//! Kept apart from the canonical chain because the two derive customer
//! lifetime value differently: the canonical CLTV:CAC ratio consumes the
//! directly-supplied `avg_customer_lifetime_value`, while `customer_ltv`
//! here is margin-derived. Independent names, no shadowing.

use crate::params::ParameterSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitEconomics {
    pub variable_costs: f64,
    pub total_costs: f64,
    pub customer_lifetime: f64,
    pub customer_ltv: f64,
}

impl UnitEconomics {
    /// Derive the block from raw inputs plus two already-derived canonical
    /// metrics (commission and profit margin).
    pub fn derive(p: &ParameterSet, commission: f64, profit_margin: f64) -> Self {
        let variable_costs = p.leads_generated * p.cost_per_lead;
        let total_costs =
            p.fixed_costs + variable_costs + commission + p.cogs + p.operating_expenses;
        // Zero churn means no observed lifetime signal, not an infinite one.
        let customer_lifetime = if p.churn_rate > 0.0 {
            1.0 / p.churn_rate
        } else {
            0.0
        };
        let customer_ltv = (p.average_deal_size * profit_margin) * customer_lifetime;

        Self {
            variable_costs,
            total_costs,
            customer_lifetime,
            customer_ltv,
        }
    }
}
