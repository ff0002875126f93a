//! On-disk scenario formats.
//!
//! Scenarios are named parameter sets kept in one YAML document; the format
//! is meant to be hand-editable, so everything optional defaults cleanly.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tuberplan_core::ParameterSet;

/// Top-level scenario file: every saved scenario plus the active one.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScenarioFile {
    /// The currently active scenario name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_scenario: Option<String>,
    pub scenarios: HashMap<String, Scenario>,
}

/// One named parameter set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<jiff::Timestamp>,

    pub parameters: ParameterSet,
}

impl Scenario {
    /// Wrap a parameter set, stamped with the current time.
    pub fn new(parameters: ParameterSet, description: Option<String>) -> Self {
        Self {
            description,
            saved_at: Some(jiff::Timestamp::now()),
            parameters,
        }
    }

    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Save to YAML string
    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }
}

impl ScenarioFile {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_saphyr::Error> {
        serde_saphyr::from_str(yaml)
    }

    /// Save to YAML string
    pub fn to_yaml(&self) -> Result<String, serde_saphyr::ser::Error> {
        serde_saphyr::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use tuberplan_core::YieldMode;

    use super::*;

    #[test]
    fn test_scenario_round_trip() {
        let scenario = Scenario::new(
            ParameterSet {
                yield_mode: YieldMode::PerPlant,
                initial_slips: 500_000.0,
                tons_per_hectare: 12.5,
                ..ParameterSet::default()
            },
            Some("Wet-season pilot plot".to_string()),
        );

        let yaml = scenario.to_yaml().unwrap();
        let back = Scenario::from_yaml(&yaml).unwrap();

        assert_eq!(back.description.as_deref(), Some("Wet-season pilot plot"));
        assert_eq!(back.parameters.yield_mode, YieldMode::PerPlant);
        assert_eq!(back.parameters.initial_slips, 500_000.0);
        assert_eq!(back.parameters.tons_per_hectare, 12.5);
        assert_eq!(back.parameters, scenario.parameters);
    }

    #[test]
    fn test_scenario_file_with_multiple_scenarios() {
        let mut file = ScenarioFile::default();
        file.scenarios.insert(
            "baseline".to_string(),
            Scenario::new(ParameterSet::default(), None),
        );
        file.scenarios.insert(
            "expanded".to_string(),
            Scenario::new(
                ParameterSet {
                    gen3_area_ha: 150.0,
                    ..ParameterSet::default()
                },
                Some("Doubled Gen-3 allocation".to_string()),
            ),
        );
        file.active_scenario = Some("expanded".to_string());

        let yaml = file.to_yaml().unwrap();
        let back = ScenarioFile::from_yaml(&yaml).unwrap();

        assert_eq!(back.scenarios.len(), 2);
        assert_eq!(back.active_scenario.as_deref(), Some("expanded"));
        assert_eq!(back.scenarios["expanded"].parameters.gen3_area_ha, 150.0);
    }

    #[test]
    fn test_missing_parameters_fill_from_defaults() {
        // Hand-edited files may omit fields; they fall back to the
        // built-in demonstration values.
        let yaml = "parameters:\n  tons_per_hectare: 8.0\n";
        let scenario = Scenario::from_yaml(yaml).unwrap();

        assert_eq!(scenario.parameters.tons_per_hectare, 8.0);
        assert_eq!(
            scenario.parameters.population,
            ParameterSet::default().population
        );
        assert!(scenario.saved_at.is_none());
    }
}
