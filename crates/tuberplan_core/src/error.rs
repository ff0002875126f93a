use std::fmt;

use crate::model::ParameterId;

/// A parameter value rejected by strict boundary validation.
///
/// The engine itself never raises these: its internal arithmetic absorbs
/// degenerate values through zero-guards. Validation is the adapter layer's
/// gate in front of the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    NonFinite {
        parameter: ParameterId,
        value: f64,
    },
    OutOfRange {
        parameter: ParameterId,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonFinite { parameter, value } => {
                write!(f, "{} must be a finite number, got {value}", parameter.key())
            }
            ValidationError::OutOfRange {
                parameter,
                value,
                min,
                max,
            } => {
                if max.is_infinite() {
                    write!(f, "{} must be >= {min}, got {value}", parameter.key())
                } else {
                    write!(
                        f,
                        "{} must be between {min} and {max}, got {value}",
                        parameter.key()
                    )
                }
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A string key that names no known numeric parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseParameterIdError {
    pub key: String,
}

impl fmt::Display for ParseParameterIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown parameter key {:?}", self.key)
    }
}

impl std::error::Error for ParseParameterIdError {}
