//! Integration tests for the tuberplan simulation engine
//!
//! Tests are organized by topic:
//! - `simulation` - Chain construction, harvest/cost/nutrition math, guards
//! - `analysis` - Sensitivity sweeps
//! - `results` - Result structure and accessors
//! - `validation` - Strict boundary validation of parameter sets

mod analysis;
mod results;
mod validation;

use crate::config::ParameterSet;
use crate::model::ParameterId;

/// A parameter set with every numeric input zeroed; degenerate on purpose.
pub(crate) fn zeroed() -> ParameterSet {
    let mut params = ParameterSet::default();
    for id in ParameterId::ALL {
        params.set_value(id, 0.0);
    }
    params
}
