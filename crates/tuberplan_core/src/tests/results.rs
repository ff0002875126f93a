//! Tests for SimulationResult structure and accessors

use crate::config::ParameterSet;
use crate::simulation::simulate;

#[test]
fn test_main_generation_iterator() {
    let result = simulate(&ParameterSet::default());

    let names: Vec<&str> = result.main_generations().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["Generation 1", "Generation 2", "Generation 3"]);
}

#[test]
fn test_sub_generation_iterator() {
    let result = simulate(&ParameterSet::default());

    let subs: Vec<&str> = result.sub_generations().map(|g| g.name.as_str()).collect();
    assert_eq!(subs.len(), 9);
    assert_eq!(subs[0], "Generation 1a");
    assert_eq!(subs[8], "Generation 3c");
}

#[test]
fn test_generation_lookup_by_name() {
    let result = simulate(&ParameterSet::default());

    assert!(result.generation("Generation 2b").is_some());
    assert!(result.generation("Generation 4").is_none());
}

#[test]
fn test_totals_are_sums_over_all_nodes() {
    let result = simulate(&ParameterSet::default());

    let tons: f64 = result.generations.iter().map(|g| g.tons_harvested).sum();
    let cost: f64 = result.generations.iter().map(|g| g.cost).sum();
    let child_days: f64 = result
        .generations
        .iter()
        .map(|g| g.vitamin_a_child_days)
        .sum();

    assert_eq!(result.total_tons, tons);
    assert_eq!(result.total_cost, cost);
    assert_eq!(result.total_vitamin_a_child_days, child_days);
}

#[test]
fn test_children_fed_is_floor_of_child_days_per_year() {
    let result = simulate(&ParameterSet::default());

    let expected = (result.total_vitamin_a_child_days / 365.0).floor() as u64;
    assert_eq!(result.children_fed_annually, expected);
}
