//! Unit-economics block tests: the alternate cost/LTV chain and its
//! config toggle.

use salesmetrics_core::config::EngineConfig;
use salesmetrics_core::engine::MetricsEngine;
use salesmetrics_core::params::ParameterSet;

fn scenario_inputs() -> ParameterSet {
    ParameterSet {
        leads_generated: 100.0,
        lead_conversion_rate: 0.2,
        opportunity_conversion_rate: 0.3,
        average_deal_size: 1000.0,
        cost_per_lead: 10.0,
        sales_commission_rate: 0.05,
        cogs: 5000.0,
        operating_expenses: 10000.0,
        fixed_costs: 2000.0,
        churn_rate: 0.1,
        ..ParameterSet::default()
    }
}

fn assert_close(name: &str, actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{name}: computed={actual}, expected={expected}"
    );
}

/// variable costs, total costs, lifetime, and margin-derived LTV on a
/// worked scenario.
#[test]
fn extended_chain_matches_hand_computation() {
    let m = MetricsEngine::default().compute(&scenario_inputs());
    let ue = m.unit_economics.as_ref().expect("block should be attached");

    // revenue 6000, commission 300, margin (6000 - 15000) / 6000 = -1.5
    assert_close("variable_costs", ue.variable_costs, 1000.0);
    assert_close("total_costs", ue.total_costs, 18300.0);
    assert_close("customer_lifetime", ue.customer_lifetime, 10.0);
    assert_close("customer_ltv", ue.customer_ltv, -15000.0);
}

/// Zero churn gates the lifetime ratio to 0, which zeroes the LTV too.
#[test]
fn zero_churn_yields_zero_lifetime_and_ltv() {
    let inputs = ParameterSet {
        churn_rate: 0.0,
        ..scenario_inputs()
    };
    let m = MetricsEngine::default().compute(&inputs);
    let ue = m.unit_economics.as_ref().unwrap();

    assert_close("customer_lifetime", ue.customer_lifetime, 0.0);
    assert_close("customer_ltv", ue.customer_ltv, 0.0);
}

/// The margin-derived customer_ltv is independent of the directly
/// supplied avg_customer_lifetime_value input.
#[test]
fn margin_derived_ltv_ignores_the_direct_input() {
    let inputs = ParameterSet {
        avg_customer_lifetime_value: 123456.0,
        ..scenario_inputs()
    };
    let m = MetricsEngine::default().compute(&inputs);
    let ue = m.unit_economics.as_ref().unwrap();

    assert_close("customer_ltv", ue.customer_ltv, -15000.0);
}

/// The config toggle removes the block entirely — and with it, its
/// entries in the metrics view.
#[test]
fn config_toggle_detaches_the_block() {
    let engine = MetricsEngine::new(EngineConfig {
        include_unit_economics: false,
    });
    let m = engine.compute(&scenario_inputs());

    assert!(m.unit_economics.is_none());
    let view = m.metrics_view().unwrap();
    assert!(!view.contains_key("customer_ltv"));
    assert!(!view.contains_key("total_costs"));

    // Canonical chain is unaffected by the toggle.
    assert_close("revenue", m.revenue, 6000.0);
}

/// Detached and attached sets serialize to different shapes but
/// deserialize back without loss.
#[test]
fn metric_set_round_trips_with_and_without_the_block() {
    let with = MetricsEngine::default().compute(&scenario_inputs());
    let without = MetricsEngine::new(EngineConfig {
        include_unit_economics: false,
    })
    .compute(&scenario_inputs());

    for m in [&with, &without] {
        let json = serde_json::to_string(m).unwrap();
        let back: salesmetrics_core::engine::MetricSet = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, m, "metric set changed across a JSON round trip");
    }
}
