//! Tests for the sensitivity analyzer
//!
//! These tests verify:
//! - Exactly 5 rows at the fixed factors, baseline in the middle
//! - Pure re-invocation semantics (deltas against the factor-1.00 run)
//! - Graceful degradation on unknown parameter keys
//! - The whole-set sweep

use crate::analysis::{SWEEP_FACTORS, analyze, analyze_all, analyze_param};
use crate::config::ParameterSet;
use crate::model::ParameterId;

#[test]
fn test_five_rows_at_fixed_factors() {
    let table = analyze_param(ParameterId::TonsPerHectare, &ParameterSet::default());

    assert_eq!(table.rows.len(), 5);
    let factors: Vec<f64> = table.rows.iter().map(|r| r.factor).collect();
    assert_eq!(factors, SWEEP_FACTORS);
}

#[test]
fn test_baseline_row_has_zero_delta() {
    let table = analyze_param(ParameterId::TonsPerHectare, &ParameterSet::default());

    let baseline = table.baseline_row().expect("factor 1.00 row present");
    assert_eq!(baseline.days_fed_delta, 0.0);
    assert_eq!(baseline.cost_delta, 0.0);
    assert_eq!(baseline.parameter_value, table.baseline_value);
}

#[test]
fn test_scaled_input_values() {
    let params = ParameterSet::default();
    let table = analyze_param(ParameterId::InitialAreaHa, &params);

    for (row, factor) in table.rows.iter().zip(SWEEP_FACTORS) {
        assert!(
            (row.parameter_value - params.initial_area_ha * factor).abs() < 1e-12,
            "row {factor} carries the scaled input"
        );
    }
}

#[test]
fn test_yield_parameter_moves_days_fed_not_cost() {
    let table = analyze_param(ParameterId::TonsPerHectare, &ParameterSet::default());

    // Per-hectare yield scales harvest linearly and leaves cost untouched.
    assert!(table.rows[0].days_fed_delta < 0.0);
    assert!(table.rows[4].days_fed_delta > 0.0);
    for row in &table.rows {
        assert_eq!(row.cost_delta, 0.0, "yield does not change cost");
    }
}

#[test]
fn test_cost_parameter_moves_cost_not_days_fed() {
    let table = analyze_param(ParameterId::CostWeeding, &ParameterSet::default());

    assert!(table.rows[0].cost_delta < 0.0);
    assert!(table.rows[4].cost_delta > 0.0);
    for row in &table.rows {
        assert_eq!(row.days_fed_delta, 0.0, "cost does not change harvest");
    }
}

#[test]
fn test_unknown_key_degrades_to_empty_table() {
    let table = analyze("no_such_parameter", &ParameterSet::default());

    assert!(table.is_empty());
    assert_eq!(table.parameter, "no_such_parameter");
    assert_eq!(table.baseline_value, 0.0);
}

#[test]
fn test_string_key_entry_matches_typed_entry() {
    let params = ParameterSet::default();
    let by_key = analyze("harvest_efficiency", &params);
    let by_id = analyze_param(ParameterId::HarvestEfficiency, &params);

    assert_eq!(by_key.parameter, by_id.parameter);
    assert_eq!(by_key.rows.len(), by_id.rows.len());
    for (a, b) in by_key.rows.iter().zip(&by_id.rows) {
        assert_eq!(a.days_fed, b.days_fed);
        assert_eq!(a.cost, b.cost);
    }
}

#[test]
fn test_analyze_all_covers_every_parameter() {
    let tables = analyze_all(&ParameterSet::default());

    assert_eq!(tables.len(), ParameterId::ALL.len());
    for (table, id) in tables.iter().zip(ParameterId::ALL) {
        assert_eq!(table.parameter, id.key(), "order matches ParameterId::ALL");
        assert_eq!(table.rows.len(), 5);
    }
}

#[test]
fn test_parameter_id_key_round_trip() {
    for id in ParameterId::ALL {
        let parsed: ParameterId = id.key().parse().expect("key parses back");
        assert_eq!(parsed, id);
    }
    assert!("weeding_cost".parse::<ParameterId>().is_err());
}
