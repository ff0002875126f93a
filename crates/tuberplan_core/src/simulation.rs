//! The deterministic propagation-chain engine.
//!
//! One call to [`simulate`] expands a [`ParameterSet`] into the fixed
//! 12-node generation chain, computes each node's harvest, cost and
//! nutrition values, and aggregates chain totals plus an annualized
//! projection. The topology never varies at runtime, so it is encoded as a
//! deterministic loop over 3 main generations x {main, a, b, c} rather than
//! a general tree structure.
//!
//! The engine never fails on finite input: every division is routed through
//! a guarded helper that defines the dependent quantity as zero when the
//! divisor is zero or non-finite.

use crate::config::{ParameterSet, YieldMode};
use crate::model::{AnnualProjection, GenerationResult, SimulationResult};

/// Main generations in the chain.
pub const MAIN_GENERATIONS: usize = 3;

/// Yield fractions for the a/b/c vine-cutting harvests of every main
/// generation. Successive harvests from the same unrenewed land decline.
pub const SUB_YIELD_FRACTIONS: [f64; 3] = [0.40, 0.25, 0.15];

const SUB_LABELS: [&str; 3] = ["a", "b", "c"];
const DAYS_PER_YEAR: f64 = 365.0;

/// Division defined as zero when the divisor is zero or non-finite.
pub(crate) fn guarded_div(numerator: f64, divisor: f64) -> f64 {
    if divisor == 0.0 || !divisor.is_finite() {
        0.0
    } else {
        numerator / divisor
    }
}

/// Run the full chain for one parameter set.
#[must_use]
pub fn simulate(params: &ParameterSet) -> SimulationResult {
    // Compounded probability that a planted slip becomes usable output.
    // Only multiplies into per-plant mode yields.
    let survival_factor = params.slip_establishment_rate
        * params.crop_survival_rate
        * params.storage_survival_rate;

    let full_cost_ha = full_preparation_cost_per_hectare(params);
    let maintenance_cost_ha = maintenance_cost_per_hectare(params);

    let mut generations = Vec::with_capacity(MAIN_GENERATIONS * 4);
    // Harvested tuber count of the previous main generation; seeds the next
    // one through the replant math.
    let mut seed_tubers = 0.0;

    for number in 1..=MAIN_GENERATIONS {
        let (area, slips, purchase_cost) = if number == 1 {
            // The one node across all 12 that pays slip purchase cost.
            (
                params.initial_area_ha,
                params.initial_slips,
                params.initial_slips * params.slip_cost,
            )
        } else {
            let area = if number == 2 {
                params.gen2_area_ha
            } else {
                params.gen3_area_ha
            };
            let slips = seed_tubers * params.replant_fraction * params.slips_per_tuber;
            (area, slips, 0.0)
        };

        let main = build_node(
            params,
            format!("Generation {number}"),
            area,
            slips,
            1.0,
            full_cost_ha * area + purchase_cost,
            survival_factor,
        );
        seed_tubers = main.tubers_harvested;

        // All three siblings share this input; they differ only in the
        // yield fraction applied to harvested mass.
        let cutting_slips = slips * params.crop_survival_rate * params.vine_cuttings_per_plant;

        generations.push(main);
        for (fraction, label) in SUB_YIELD_FRACTIONS.into_iter().zip(SUB_LABELS) {
            generations.push(build_node(
                params,
                format!("Generation {number}{label}"),
                area,
                cutting_slips,
                fraction,
                maintenance_cost_ha * area,
                survival_factor,
            ));
        }
    }

    aggregate(params, generations)
}

/// Full land preparation: all labor categories, all supply categories, and
/// irrigation, converted from per-area-unit to per-hectare.
fn full_preparation_cost_per_hectare(params: &ParameterSet) -> f64 {
    let labor = params.cost_clearing
        + params.cost_forking
        + params.cost_planting
        + params.cost_weeding
        + params.cost_fertilizer_application
        + params.cost_harvesting;
    let supplies = params.cost_herbicide
        + params.cost_fertilizer
        + params.cost_tools
        + params.cost_other
        + params.cost_transport;
    (labor + supplies + params.cost_irrigation) * params.acres_per_hectare
}

/// Maintenance-only cost for vine-cutting sub-nodes, which reuse prepared
/// land: no clearing, forking, herbicide, planting labor, or slip purchase.
fn maintenance_cost_per_hectare(params: &ParameterSet) -> f64 {
    (params.cost_weeding
        + params.cost_fertilizer_application
        + params.cost_harvesting
        + params.cost_transport)
        * params.acres_per_hectare
}

/// Build one chain node. Mode-specific math is isolated to the harvest
/// branch; everything downstream of (tubers, tons) is mode-agnostic.
fn build_node(
    params: &ParameterSet,
    name: String,
    area_ha: f64,
    slips_planted: f64,
    yield_fraction: f64,
    cost: f64,
    survival_factor: f64,
) -> GenerationResult {
    let (tubers_harvested, tons_harvested) = match params.yield_mode {
        YieldMode::PerHectare => {
            let tons =
                area_ha * params.tons_per_hectare * params.harvest_efficiency * yield_fraction;
            let tubers = guarded_div(tons * params.grams_per_ton, params.grams_per_tuber);
            (tubers, tons)
        }
        YieldMode::PerPlant => {
            let tubers = slips_planted * params.tubers_per_plant * survival_factor;
            let tons = guarded_div(tubers * params.grams_per_tuber, params.grams_per_ton)
                * params.harvest_efficiency
                * yield_fraction;
            (tubers, tons)
        }
    };

    let calories_per_ton = if params.grams_per_tuber > 0.0 && params.grams_per_ton > 0.0 {
        params.grams_per_ton / params.grams_per_tuber * params.calories_per_tuber
    } else {
        0.0
    };
    let days_fed = guarded_div(
        tons_harvested * calories_per_ton,
        params.population * params.calories_per_person_per_day,
    );

    let vitamin_a_mcg = tons_harvested * (params.grams_per_ton / 100.0) * params.vitamin_a_per_100g;
    let vitamin_a_child_days = guarded_div(vitamin_a_mcg, params.child_vitamin_a_need);

    GenerationResult {
        name,
        area_ha,
        slips_planted,
        tubers_harvested,
        tons_harvested,
        days_fed,
        vitamin_a_mcg,
        vitamin_a_child_days,
        cost,
    }
}

fn aggregate(params: &ParameterSet, generations: Vec<GenerationResult>) -> SimulationResult {
    let total_tons: f64 = generations.iter().map(|g| g.tons_harvested).sum();
    let total_days_fed: f64 = generations.iter().map(|g| g.days_fed).sum();
    let total_cost: f64 = generations.iter().map(|g| g.cost).sum();
    let total_vitamin_a_child_days: f64 =
        generations.iter().map(|g| g.vitamin_a_child_days).sum();

    let children_fed_annually = (total_vitamin_a_child_days / DAYS_PER_YEAR).floor() as u64;

    let cost_per_person = if params.population > 0.0 {
        total_cost / params.population
    } else {
        0.0
    };
    let cost_per_person_per_day = guarded_div(total_cost, total_days_fed * params.population);

    // Main generations run back to back; sub-node harvests overlap their
    // parent's cycle and add no extra days.
    let chain_days = MAIN_GENERATIONS as f64 * params.days_to_harvest;
    // Capped so an operation cannot claim more annual throughput than both
    // the calendar and its stated cycle cadence allow.
    let scale_factor = guarded_div(DAYS_PER_YEAR, chain_days).min(params.cycles_per_year);

    let annual = AnnualProjection {
        chain_days,
        cycles_per_year: params.cycles_per_year,
        scale_factor,
        tons: total_tons * scale_factor,
        days_fed: total_days_fed * scale_factor,
        cost: total_cost * scale_factor,
    };

    SimulationResult {
        generations,
        total_tons,
        total_days_fed,
        total_cost,
        total_vitamin_a_child_days,
        children_fed_annually,
        cost_per_person,
        cost_per_person_per_day,
        annual,
    }
}
