//! Typed identifiers for the numeric simulation parameters.
//!
//! Every numeric field of [`crate::config::ParameterSet`] has one variant
//! here. The stable snake_case key is the wire/CLI spelling; `label()` is the
//! human-readable spelling used in reports. The yield-mode discriminant is
//! not a numeric parameter and has no id.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseParameterIdError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterId {
    // Initial conditions
    InitialSlips,
    InitialAreaHa,
    Gen2AreaHa,
    Gen3AreaHa,
    // Survival/loss rates
    SlipEstablishmentRate,
    CropSurvivalRate,
    StorageSurvivalRate,
    // Biological rates
    TubersPerPlant,
    VineCuttingsPerPlant,
    ReplantFraction,
    SlipsPerTuber,
    // Yield-mode inputs
    TonsPerHectare,
    HarvestEfficiency,
    // Conversions
    GramsPerTuber,
    GramsPerTon,
    CaloriesPerTuber,
    VitaminAPer100g,
    ChildVitaminANeed,
    // Population/targets
    Population,
    CaloriesPerPersonPerDay,
    // Cost inputs (per area unit unless noted)
    CostClearing,
    CostForking,
    CostPlanting,
    CostWeeding,
    CostFertilizerApplication,
    CostHarvesting,
    CostHerbicide,
    CostFertilizer,
    CostTools,
    CostOther,
    CostTransport,
    CostIrrigation,
    SlipCost,
    AcresPerHectare,
    // Time inputs
    DaysToHarvest,
    CyclesPerYear,
}

impl ParameterId {
    /// All numeric parameters, in report order.
    pub const ALL: [ParameterId; 36] = [
        ParameterId::InitialSlips,
        ParameterId::InitialAreaHa,
        ParameterId::Gen2AreaHa,
        ParameterId::Gen3AreaHa,
        ParameterId::SlipEstablishmentRate,
        ParameterId::CropSurvivalRate,
        ParameterId::StorageSurvivalRate,
        ParameterId::TubersPerPlant,
        ParameterId::VineCuttingsPerPlant,
        ParameterId::ReplantFraction,
        ParameterId::SlipsPerTuber,
        ParameterId::TonsPerHectare,
        ParameterId::HarvestEfficiency,
        ParameterId::GramsPerTuber,
        ParameterId::GramsPerTon,
        ParameterId::CaloriesPerTuber,
        ParameterId::VitaminAPer100g,
        ParameterId::ChildVitaminANeed,
        ParameterId::Population,
        ParameterId::CaloriesPerPersonPerDay,
        ParameterId::CostClearing,
        ParameterId::CostForking,
        ParameterId::CostPlanting,
        ParameterId::CostWeeding,
        ParameterId::CostFertilizerApplication,
        ParameterId::CostHarvesting,
        ParameterId::CostHerbicide,
        ParameterId::CostFertilizer,
        ParameterId::CostTools,
        ParameterId::CostOther,
        ParameterId::CostTransport,
        ParameterId::CostIrrigation,
        ParameterId::SlipCost,
        ParameterId::AcresPerHectare,
        ParameterId::DaysToHarvest,
        ParameterId::CyclesPerYear,
    ];

    /// Stable snake_case key, used by the CLI and serialized forms.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ParameterId::InitialSlips => "initial_slips",
            ParameterId::InitialAreaHa => "initial_area_ha",
            ParameterId::Gen2AreaHa => "gen2_area_ha",
            ParameterId::Gen3AreaHa => "gen3_area_ha",
            ParameterId::SlipEstablishmentRate => "slip_establishment_rate",
            ParameterId::CropSurvivalRate => "crop_survival_rate",
            ParameterId::StorageSurvivalRate => "storage_survival_rate",
            ParameterId::TubersPerPlant => "tubers_per_plant",
            ParameterId::VineCuttingsPerPlant => "vine_cuttings_per_plant",
            ParameterId::ReplantFraction => "replant_fraction",
            ParameterId::SlipsPerTuber => "slips_per_tuber",
            ParameterId::TonsPerHectare => "tons_per_hectare",
            ParameterId::HarvestEfficiency => "harvest_efficiency",
            ParameterId::GramsPerTuber => "grams_per_tuber",
            ParameterId::GramsPerTon => "grams_per_ton",
            ParameterId::CaloriesPerTuber => "calories_per_tuber",
            ParameterId::VitaminAPer100g => "vitamin_a_per_100g",
            ParameterId::ChildVitaminANeed => "child_vitamin_a_need",
            ParameterId::Population => "population",
            ParameterId::CaloriesPerPersonPerDay => "calories_per_person_per_day",
            ParameterId::CostClearing => "cost_clearing",
            ParameterId::CostForking => "cost_forking",
            ParameterId::CostPlanting => "cost_planting",
            ParameterId::CostWeeding => "cost_weeding",
            ParameterId::CostFertilizerApplication => "cost_fertilizer_application",
            ParameterId::CostHarvesting => "cost_harvesting",
            ParameterId::CostHerbicide => "cost_herbicide",
            ParameterId::CostFertilizer => "cost_fertilizer",
            ParameterId::CostTools => "cost_tools",
            ParameterId::CostOther => "cost_other",
            ParameterId::CostTransport => "cost_transport",
            ParameterId::CostIrrigation => "cost_irrigation",
            ParameterId::SlipCost => "slip_cost",
            ParameterId::AcresPerHectare => "acres_per_hectare",
            ParameterId::DaysToHarvest => "days_to_harvest",
            ParameterId::CyclesPerYear => "cycles_per_year",
        }
    }

    /// Human-readable label for reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ParameterId::InitialSlips => "Initial slips planted",
            ParameterId::InitialAreaHa => "Initial land area (ha)",
            ParameterId::Gen2AreaHa => "Generation 2 land area (ha)",
            ParameterId::Gen3AreaHa => "Generation 3 land area (ha)",
            ParameterId::SlipEstablishmentRate => "Slip establishment rate",
            ParameterId::CropSurvivalRate => "Crop/pest survival rate",
            ParameterId::StorageSurvivalRate => "Storage survival rate",
            ParameterId::TubersPerPlant => "Tubers per surviving plant",
            ParameterId::VineCuttingsPerPlant => "Vine cuttings per surviving plant",
            ParameterId::ReplantFraction => "Tuber replant fraction",
            ParameterId::SlipsPerTuber => "Slips per replanted tuber",
            ParameterId::TonsPerHectare => "Yield (t/ha)",
            ParameterId::HarvestEfficiency => "Harvest efficiency",
            ParameterId::GramsPerTuber => "Average tuber mass (g)",
            ParameterId::GramsPerTon => "Grams per ton",
            ParameterId::CaloriesPerTuber => "Calories per tuber",
            ParameterId::VitaminAPer100g => "Vitamin A per 100 g (mcg)",
            ParameterId::ChildVitaminANeed => "Child Vitamin A need (mcg/day)",
            ParameterId::Population => "Target population",
            ParameterId::CaloriesPerPersonPerDay => "Calorie target (per person/day)",
            ParameterId::CostClearing => "Land clearing cost",
            ParameterId::CostForking => "Forking cost",
            ParameterId::CostPlanting => "Planting labor cost",
            ParameterId::CostWeeding => "Weeding cost",
            ParameterId::CostFertilizerApplication => "Fertilizer application cost",
            ParameterId::CostHarvesting => "Harvesting cost",
            ParameterId::CostHerbicide => "Herbicide cost",
            ParameterId::CostFertilizer => "Fertilizer cost",
            ParameterId::CostTools => "Tools cost",
            ParameterId::CostOther => "Other supplies cost",
            ParameterId::CostTransport => "Transport cost",
            ParameterId::CostIrrigation => "Irrigation cost",
            ParameterId::SlipCost => "Slip purchase cost (per slip)",
            ParameterId::AcresPerHectare => "Acres per hectare",
            ParameterId::DaysToHarvest => "Days to harvest (per cycle)",
            ParameterId::CyclesPerYear => "Cycles per year",
        }
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ParameterId {
    type Err = ParseParameterIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParameterId::ALL
            .iter()
            .copied()
            .find(|id| id.key() == s)
            .ok_or_else(|| ParseParameterIdError {
                key: s.to_string(),
            })
    }
}
