//! Simulation configuration
//!
//! The main configuration type is [`ParameterSet`], which contains every
//! numeric input the engine depends on plus the yield-mode discriminant.
//! A run never mutates its input: the sensitivity analyzer clones the set
//! and scales one value at a time via [`ParameterSet::with_scaled`].
//!
//! # Conceptual Organization
//!
//! **Field facts** (what is planted where):
//! - `initial_slips`, `initial_area_ha`, `gen2_area_ha`, `gen3_area_ha`
//!
//! **Agronomy assumptions** (rates you might compare across scenarios):
//! - survival rates, tubers/cuttings per plant, replant math, yield inputs
//!
//! **Accounting inputs** (per-area-unit costs, conversions, population):
//! - cost table, mass/calorie conversions, calorie and Vitamin A targets

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::ParameterId;

/// How a node's harvest is computed.
///
/// The same node-construction routine handles both; the mode is a single
/// branch point in the harvest math, not a parallel code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YieldMode {
    /// Mass from land area and a tons/hectare rate; tuber count derived
    /// backward from mass.
    #[default]
    PerHectare,
    /// Tuber count from established slips and the compounded survival
    /// factor; mass derived from tuber count.
    PerPlant,
}

/// Complete parameter set for one simulation run.
///
/// All numeric inputs are finite `f64`s; strict range checks live in
/// [`ParameterSet::validate`] and are the caller's gate. The engine itself
/// only guards its divisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    pub yield_mode: YieldMode,

    // Initial conditions
    pub initial_slips: f64,
    pub initial_area_ha: f64,
    pub gen2_area_ha: f64,
    pub gen3_area_ha: f64,

    // Survival/loss rates (each 0..=1)
    pub slip_establishment_rate: f64,
    pub crop_survival_rate: f64,
    pub storage_survival_rate: f64,

    // Biological rates
    pub tubers_per_plant: f64,
    pub vine_cuttings_per_plant: f64,
    pub replant_fraction: f64,
    pub slips_per_tuber: f64,

    // Yield-mode inputs
    pub tons_per_hectare: f64,
    pub harvest_efficiency: f64,

    // Conversions
    pub grams_per_tuber: f64,
    pub grams_per_ton: f64,
    pub calories_per_tuber: f64,
    pub vitamin_a_per_100g: f64,
    pub child_vitamin_a_need: f64,

    // Population/targets
    pub population: f64,
    pub calories_per_person_per_day: f64,

    // Cost inputs, per area unit (acre); `acres_per_hectare` converts
    pub cost_clearing: f64,
    pub cost_forking: f64,
    pub cost_planting: f64,
    pub cost_weeding: f64,
    pub cost_fertilizer_application: f64,
    pub cost_harvesting: f64,
    pub cost_herbicide: f64,
    pub cost_fertilizer: f64,
    pub cost_tools: f64,
    pub cost_other: f64,
    pub cost_transport: f64,
    pub cost_irrigation: f64,
    pub slip_cost: f64,
    pub acres_per_hectare: f64,

    // Time inputs
    pub days_to_harvest: f64,
    pub cycles_per_year: f64,
}

impl Default for ParameterSet {
    /// A realistic orange-fleshed sweet potato demonstration scenario.
    fn default() -> Self {
        Self {
            yield_mode: YieldMode::PerHectare,
            initial_slips: 1_200_000.0,
            initial_area_ha: 34.3,
            gen2_area_ha: 50.0,
            gen3_area_ha: 75.0,
            slip_establishment_rate: 0.85,
            crop_survival_rate: 0.90,
            storage_survival_rate: 0.95,
            tubers_per_plant: 4.0,
            vine_cuttings_per_plant: 3.0,
            replant_fraction: 0.10,
            slips_per_tuber: 4.0,
            tons_per_hectare: 10.0,
            harvest_efficiency: 0.90,
            grams_per_tuber: 200.0,
            grams_per_ton: 1_000_000.0,
            calories_per_tuber: 180.0,
            vitamin_a_per_100g: 709.0,
            child_vitamin_a_need: 400.0,
            population: 5_000.0,
            calories_per_person_per_day: 2_100.0,
            cost_clearing: 120.0,
            cost_forking: 80.0,
            cost_planting: 60.0,
            cost_weeding: 45.0,
            cost_fertilizer_application: 25.0,
            cost_harvesting: 70.0,
            cost_herbicide: 35.0,
            cost_fertilizer: 90.0,
            cost_tools: 20.0,
            cost_other: 15.0,
            cost_transport: 40.0,
            cost_irrigation: 55.0,
            slip_cost: 0.02,
            acres_per_hectare: 2.471,
            days_to_harvest: 120.0,
            cycles_per_year: 2.0,
        }
    }
}

impl ParameterSet {
    /// Read one numeric parameter by id.
    #[must_use]
    pub fn value(&self, id: ParameterId) -> f64 {
        match id {
            ParameterId::InitialSlips => self.initial_slips,
            ParameterId::InitialAreaHa => self.initial_area_ha,
            ParameterId::Gen2AreaHa => self.gen2_area_ha,
            ParameterId::Gen3AreaHa => self.gen3_area_ha,
            ParameterId::SlipEstablishmentRate => self.slip_establishment_rate,
            ParameterId::CropSurvivalRate => self.crop_survival_rate,
            ParameterId::StorageSurvivalRate => self.storage_survival_rate,
            ParameterId::TubersPerPlant => self.tubers_per_plant,
            ParameterId::VineCuttingsPerPlant => self.vine_cuttings_per_plant,
            ParameterId::ReplantFraction => self.replant_fraction,
            ParameterId::SlipsPerTuber => self.slips_per_tuber,
            ParameterId::TonsPerHectare => self.tons_per_hectare,
            ParameterId::HarvestEfficiency => self.harvest_efficiency,
            ParameterId::GramsPerTuber => self.grams_per_tuber,
            ParameterId::GramsPerTon => self.grams_per_ton,
            ParameterId::CaloriesPerTuber => self.calories_per_tuber,
            ParameterId::VitaminAPer100g => self.vitamin_a_per_100g,
            ParameterId::ChildVitaminANeed => self.child_vitamin_a_need,
            ParameterId::Population => self.population,
            ParameterId::CaloriesPerPersonPerDay => self.calories_per_person_per_day,
            ParameterId::CostClearing => self.cost_clearing,
            ParameterId::CostForking => self.cost_forking,
            ParameterId::CostPlanting => self.cost_planting,
            ParameterId::CostWeeding => self.cost_weeding,
            ParameterId::CostFertilizerApplication => self.cost_fertilizer_application,
            ParameterId::CostHarvesting => self.cost_harvesting,
            ParameterId::CostHerbicide => self.cost_herbicide,
            ParameterId::CostFertilizer => self.cost_fertilizer,
            ParameterId::CostTools => self.cost_tools,
            ParameterId::CostOther => self.cost_other,
            ParameterId::CostTransport => self.cost_transport,
            ParameterId::CostIrrigation => self.cost_irrigation,
            ParameterId::SlipCost => self.slip_cost,
            ParameterId::AcresPerHectare => self.acres_per_hectare,
            ParameterId::DaysToHarvest => self.days_to_harvest,
            ParameterId::CyclesPerYear => self.cycles_per_year,
        }
    }

    /// Write one numeric parameter by id. Used by form-style adapters that
    /// populate the set from keyed input, and by the sensitivity analyzer.
    pub fn set_value(&mut self, id: ParameterId, value: f64) {
        let field = match id {
            ParameterId::InitialSlips => &mut self.initial_slips,
            ParameterId::InitialAreaHa => &mut self.initial_area_ha,
            ParameterId::Gen2AreaHa => &mut self.gen2_area_ha,
            ParameterId::Gen3AreaHa => &mut self.gen3_area_ha,
            ParameterId::SlipEstablishmentRate => &mut self.slip_establishment_rate,
            ParameterId::CropSurvivalRate => &mut self.crop_survival_rate,
            ParameterId::StorageSurvivalRate => &mut self.storage_survival_rate,
            ParameterId::TubersPerPlant => &mut self.tubers_per_plant,
            ParameterId::VineCuttingsPerPlant => &mut self.vine_cuttings_per_plant,
            ParameterId::ReplantFraction => &mut self.replant_fraction,
            ParameterId::SlipsPerTuber => &mut self.slips_per_tuber,
            ParameterId::TonsPerHectare => &mut self.tons_per_hectare,
            ParameterId::HarvestEfficiency => &mut self.harvest_efficiency,
            ParameterId::GramsPerTuber => &mut self.grams_per_tuber,
            ParameterId::GramsPerTon => &mut self.grams_per_ton,
            ParameterId::CaloriesPerTuber => &mut self.calories_per_tuber,
            ParameterId::VitaminAPer100g => &mut self.vitamin_a_per_100g,
            ParameterId::ChildVitaminANeed => &mut self.child_vitamin_a_need,
            ParameterId::Population => &mut self.population,
            ParameterId::CaloriesPerPersonPerDay => &mut self.calories_per_person_per_day,
            ParameterId::CostClearing => &mut self.cost_clearing,
            ParameterId::CostForking => &mut self.cost_forking,
            ParameterId::CostPlanting => &mut self.cost_planting,
            ParameterId::CostWeeding => &mut self.cost_weeding,
            ParameterId::CostFertilizerApplication => &mut self.cost_fertilizer_application,
            ParameterId::CostHarvesting => &mut self.cost_harvesting,
            ParameterId::CostHerbicide => &mut self.cost_herbicide,
            ParameterId::CostFertilizer => &mut self.cost_fertilizer,
            ParameterId::CostTools => &mut self.cost_tools,
            ParameterId::CostOther => &mut self.cost_other,
            ParameterId::CostTransport => &mut self.cost_transport,
            ParameterId::CostIrrigation => &mut self.cost_irrigation,
            ParameterId::SlipCost => &mut self.slip_cost,
            ParameterId::AcresPerHectare => &mut self.acres_per_hectare,
            ParameterId::DaysToHarvest => &mut self.days_to_harvest,
            ParameterId::CyclesPerYear => &mut self.cycles_per_year,
        };
        *field = value;
    }

    /// A copy with only `id`'s value multiplied by `factor`.
    #[must_use]
    pub fn with_scaled(&self, id: ParameterId, factor: f64) -> Self {
        let mut scaled = self.clone();
        scaled.set_value(id, self.value(id) * factor);
        scaled
    }

    /// Strict boundary validation: every parameter must be finite, rates
    /// must lie in 0..=1, everything else must be non-negative.
    ///
    /// Collects every violation rather than stopping at the first, so an
    /// adapter can report the whole form at once.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for id in ParameterId::ALL {
            let value = self.value(id);
            if !value.is_finite() {
                errors.push(ValidationError::NonFinite {
                    parameter: id,
                    value,
                });
                continue;
            }

            let (min, max) = bounds(id);
            if value < min || value > max {
                errors.push(ValidationError::OutOfRange {
                    parameter: id,
                    value,
                    min,
                    max,
                });
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Accepted range per parameter: rates are fractions, everything else is
/// any non-negative number.
fn bounds(id: ParameterId) -> (f64, f64) {
    match id {
        ParameterId::SlipEstablishmentRate
        | ParameterId::CropSurvivalRate
        | ParameterId::StorageSurvivalRate
        | ParameterId::HarvestEfficiency
        | ParameterId::ReplantFraction => (0.0, 1.0),
        _ => (0.0, f64::INFINITY),
    }
}
