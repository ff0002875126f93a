//! Tests for strict boundary validation

use crate::config::ParameterSet;
use crate::error::ValidationError;
use crate::model::ParameterId;

#[test]
fn test_default_scenario_is_valid() {
    assert!(ParameterSet::default().validate().is_ok());
}

#[test]
fn test_non_finite_value_rejected() {
    let params = ParameterSet {
        tons_per_hectare: f64::NAN,
        ..ParameterSet::default()
    };

    let errors = params.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors[0],
        ValidationError::NonFinite {
            parameter: ParameterId::TonsPerHectare,
            ..
        }
    ));
}

#[test]
fn test_rate_above_one_rejected() {
    let params = ParameterSet {
        crop_survival_rate: 1.5,
        ..ParameterSet::default()
    };

    let errors = params.validate().unwrap_err();
    match &errors[0] {
        ValidationError::OutOfRange {
            parameter,
            min,
            max,
            ..
        } => {
            assert_eq!(*parameter, ParameterId::CropSurvivalRate);
            assert_eq!((*min, *max), (0.0, 1.0));
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
}

#[test]
fn test_negative_cost_rejected() {
    let params = ParameterSet {
        cost_weeding: -5.0,
        ..ParameterSet::default()
    };

    assert!(params.validate().is_err());
}

#[test]
fn test_all_violations_collected() {
    let params = ParameterSet {
        harvest_efficiency: 2.0,
        population: f64::INFINITY,
        slip_cost: -0.01,
        ..ParameterSet::default()
    };

    let errors = params.validate().unwrap_err();
    assert_eq!(errors.len(), 3);
}

#[test]
fn test_error_messages_name_the_parameter() {
    let params = ParameterSet {
        replant_fraction: -0.2,
        ..ParameterSet::default()
    };

    let errors = params.validate().unwrap_err();
    let message = errors[0].to_string();
    assert!(message.contains("replant_fraction"), "got: {message}");
}
