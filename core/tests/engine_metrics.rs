//! Canonical formula-chain tests.
//!
//! The worked scenario below is the reference case for the whole chain:
//! every derived value is asserted against a hand-computed expectation.

use salesmetrics_core::engine::{MetricSet, MetricsEngine};
use salesmetrics_core::params::ParameterSet;

fn scenario_inputs() -> ParameterSet {
    ParameterSet {
        leads_generated: 100.0,
        lead_conversion_rate: 0.2,
        opportunity_conversion_rate: 0.3,
        average_deal_size: 1000.0,
        cost_per_lead: 10.0,
        cost_per_meeting: 50.0,
        meetings_held: 30.0,
        cogs: 5000.0,
        operating_expenses: 10000.0,
        sales_commission_rate: 0.05,
        marketing_spend: 5000.0,
        product_dev_cost: 10000.0,
        discount_rate: 0.1,
        refund_rate: 0.05,
        seasonality_adjustment: 0.1,
        churn_rate: 0.1,
        customer_acquisition_cost: 200.0,
        avg_customer_lifetime_value: 5000.0,
        ..ParameterSet::default()
    }
}

fn compute(inputs: &ParameterSet) -> MetricSet {
    MetricsEngine::default().compute(inputs)
}

fn assert_close(name: &str, actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{name}: computed={actual}, expected={expected}"
    );
}

/// The full worked scenario, one assertion per derived metric.
#[test]
fn worked_scenario_matches_hand_computation() {
    let m = compute(&scenario_inputs());

    assert_close("customer_retention_rate", m.customer_retention_rate, 0.9);
    assert_close("opportunities", m.opportunities, 20.0);
    assert_close("customers", m.customers, 6.0);
    assert_close("revenue", m.revenue, 6000.0);
    assert_close("discounts_given", m.discounts_given, 600.0);
    assert_close("refunds_given", m.refunds_given, 300.0);
    assert_close(
        "seasonality_adjusted_revenue",
        m.seasonality_adjusted_revenue,
        6600.0,
    );
    assert_close("total_cost_leads", m.total_cost_leads, 1000.0);
    assert_close("total_cost_meetings", m.total_cost_meetings, 1500.0);
    assert_close("commission", m.commission, 300.0);
    assert_close("total_marketing_spend", m.total_marketing_spend, 15000.0);
    assert_close("gross_profit", m.gross_profit, 1000.0);
    assert_close("operating_profit", m.operating_profit, -9000.0);
    assert_close("net_profit", m.net_profit, -24300.0);
    assert_close("break_even_point", m.break_even_point, 2500.0);
    assert_close("profit_margin", m.profit_margin, -1.5);
    assert_close("roi", m.roi, -162.0);
    assert_close("cltv_cac_ratio", m.cltv_cac_ratio, 25.0);
}

/// All-zero inputs: every additive metric is 0, every ratio degrades to
/// 0, and nothing panics or produces NaN/Inf.
#[test]
fn all_zero_inputs_yield_all_zero_metrics() {
    let m = compute(&ParameterSet::default());

    assert_close("opportunities", m.opportunities, 0.0);
    assert_close("customers", m.customers, 0.0);
    assert_close("revenue", m.revenue, 0.0);
    assert_close("net_profit", m.net_profit, 0.0);
    assert_close("break_even_point", m.break_even_point, 0.0);
    assert_close("profit_margin", m.profit_margin, 0.0);
    assert_close("roi", m.roi, 0.0);
    assert_close("cltv_cac_ratio", m.cltv_cac_ratio, 0.0);
    // Zero churn reads as full retention.
    assert_close("customer_retention_rate", m.customer_retention_rate, 1.0);

    for (name, value) in m.merged_view().unwrap() {
        assert!(
            value.is_finite(),
            "{name} must stay finite on zero inputs, got {value}"
        );
    }
}

/// profit_margin degrades to 0 when there is no revenue, even with
/// nonzero costs that would otherwise make the ratio -Inf.
#[test]
fn profit_margin_is_zero_without_revenue() {
    let inputs = ParameterSet {
        cogs: 5000.0,
        operating_expenses: 10000.0,
        ..ParameterSet::default()
    };
    let m = compute(&inputs);
    assert_close("profit_margin", m.profit_margin, 0.0);
}

/// roi degrades to 0 when no marketing money was spent, regardless of
/// the sign of net profit.
#[test]
fn roi_is_zero_without_marketing_spend() {
    let inputs = ParameterSet {
        leads_generated: 10.0,
        lead_conversion_rate: 0.5,
        opportunity_conversion_rate: 0.5,
        average_deal_size: 400.0,
        ..ParameterSet::default()
    };
    let m = compute(&inputs);
    assert!(m.net_profit > 0.0, "scenario should be profitable");
    assert_close("roi", m.roi, 0.0);
}

/// cltv_cac_ratio degrades to 0 when acquisition cost is zero.
#[test]
fn cltv_cac_ratio_is_zero_without_acquisition_cost() {
    let inputs = ParameterSet {
        avg_customer_lifetime_value: 5000.0,
        ..ParameterSet::default()
    };
    let m = compute(&inputs);
    assert_close("cltv_cac_ratio", m.cltv_cac_ratio, 0.0);
}

/// Missing JSON keys deserialize to 0.0 and the chain still computes.
#[test]
fn missing_parameters_default_to_zero() {
    let inputs = ParameterSet::from_json_str(
        r#"{"leads_generated": 50.0, "lead_conversion_rate": 0.4}"#,
    )
    .unwrap();

    assert_close("cost_per_lead default", inputs.cost_per_lead, 0.0);
    assert_close("churn_rate default", inputs.churn_rate, 0.0);

    let m = compute(&inputs);
    assert_close("opportunities", m.opportunities, 20.0);
    assert_close("revenue", m.revenue, 0.0);
    assert_close("roi", m.roi, 0.0);
}

/// Unknown JSON keys are ignored — schema variants stay interchangeable.
#[test]
fn unknown_parameters_are_ignored() {
    let inputs = ParameterSet::from_json_str(
        r#"{"leads_generated": 10.0, "booked_meetings": 99.0}"#,
    )
    .unwrap();
    assert_close("leads_generated", inputs.leads_generated, 10.0);
}

/// The stored back-reference is the exact input set, untouched.
#[test]
fn metric_set_carries_its_inputs_verbatim() {
    let inputs = scenario_inputs();
    let m = compute(&inputs);
    assert_eq!(m.inputs, inputs, "inputs must be stored unmodified");
}
