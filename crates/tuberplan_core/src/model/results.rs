//! Simulation results
//!
//! Contains the output types from running the propagation chain: one
//! [`GenerationResult`] per node of the fixed 12-node chain, aggregate
//! scalars, and the annualized projection. All values are owned by the
//! caller; the engine retains nothing between runs.

use serde::{Deserialize, Serialize};

/// One node of the propagation chain.
///
/// Either a main generation (seeded by initial or replanted tubers on its
/// own land allocation) or a vine-cutting sub-generation (a repeat harvest
/// from the parent's land, declining with each pass).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Display name, e.g. "Generation 2" or "Generation 2b"
    pub name: String,
    /// Land area occupied (hectares)
    pub area_ha: f64,
    /// Planting units (slips) established on that land
    pub slips_planted: f64,
    /// Harvested tuber count
    pub tubers_harvested: f64,
    /// Harvested mass (tons)
    pub tons_harvested: f64,
    /// Days the harvest covers the target population's calorie target
    pub days_fed: f64,
    /// Vitamin A produced (mcg)
    pub vitamin_a_mcg: f64,
    /// Child-days of Vitamin A need covered
    pub vitamin_a_child_days: f64,
    /// Monetary cost attributed to this node
    pub cost: f64,
}

/// Projection of the fixed-duration chain onto a 365-day year.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnnualProjection {
    /// Chain duration in days (main generations are sequential; sub-node
    /// harvests overlap their parent's cycle and add no extra days)
    pub chain_days: f64,
    /// Stated cycle cadence input
    pub cycles_per_year: f64,
    /// min(365 / chain_days, cycles_per_year)
    pub scale_factor: f64,
    pub tons: f64,
    pub days_fed: f64,
    pub cost: f64,
}

/// Complete results from a single simulation run.
///
/// `generations` always holds exactly 12 nodes in fixed order: each main
/// generation immediately followed by its a/b/c vine-cutting sub-nodes.
/// Degenerate inputs still produce all 12 nodes, zero-valued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub generations: Vec<GenerationResult>,

    pub total_tons: f64,
    pub total_days_fed: f64,
    pub total_cost: f64,
    pub total_vitamin_a_child_days: f64,
    /// floor(total Vitamin A child-days / 365)
    pub children_fed_annually: u64,
    /// Total cost over the full chain period, per person
    pub cost_per_person: f64,
    pub cost_per_person_per_day: f64,

    pub annual: AnnualProjection,
}

impl SimulationResult {
    /// The three main-generation nodes, in order.
    pub fn main_generations(&self) -> impl Iterator<Item = &GenerationResult> {
        self.generations.iter().step_by(4)
    }

    /// The nine vine-cutting sub-nodes, in order.
    pub fn sub_generations(&self) -> impl Iterator<Item = &GenerationResult> {
        self.generations
            .iter()
            .enumerate()
            .filter(|(i, _)| i % 4 != 0)
            .map(|(_, g)| g)
    }

    /// Look up a node by display name.
    #[must_use]
    pub fn generation(&self, name: &str) -> Option<&GenerationResult> {
        self.generations.iter().find(|g| g.name == name)
    }
}
