//! Single-parameter sensitivity sweeps.
//!
//! The analyzer is pure re-invocation: for each factor it clones the
//! parameter set, scales one value, and re-runs the unmodified engine.
//! There is no incremental shortcut, so correctness follows directly from
//! the engine's. The engine is O(1) (a fixed 12-node chain), so the 5x
//! work per sweep is constant-bounded.

use serde::{Deserialize, Serialize};

use crate::config::ParameterSet;
use crate::model::ParameterId;
use crate::simulation::simulate;

/// Perturbation factors applied to the swept parameter, in row order.
/// The middle row is the unscaled baseline.
pub const SWEEP_FACTORS: [f64; 5] = [0.75, 0.90, 1.00, 1.10, 1.25];

/// One sweep step: the scaled input and the resulting chain totals, with
/// signed deltas against the baseline (factor 1.00) run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SensitivityRow {
    pub factor: f64,
    pub parameter_value: f64,
    pub days_fed: f64,
    pub cost: f64,
    pub days_fed_delta: f64,
    pub cost_delta: f64,
}

/// Sweep results for one parameter: exactly 5 rows for a known parameter,
/// no rows for an unknown key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityTable {
    /// The swept parameter's key, as requested
    pub parameter: String,
    pub baseline_value: f64,
    pub rows: Vec<SensitivityRow>,
}

impl SensitivityTable {
    /// The no-op result for a key that names no numeric parameter.
    #[must_use]
    pub fn empty(parameter: &str) -> Self {
        Self {
            parameter: parameter.to_string(),
            baseline_value: 0.0,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The factor-1.00 row, if the table is populated.
    #[must_use]
    pub fn baseline_row(&self) -> Option<&SensitivityRow> {
        self.rows.iter().find(|r| r.factor == 1.0)
    }
}

/// Sweep one parameter named by its string key.
///
/// An unknown key degrades to an empty table rather than failing, mirroring
/// the engine's zero-guard policy.
#[must_use]
pub fn analyze(parameter_id: &str, params: &ParameterSet) -> SensitivityTable {
    match parameter_id.parse::<ParameterId>() {
        Ok(id) => analyze_param(id, params),
        Err(_) => SensitivityTable::empty(parameter_id),
    }
}

/// Sweep one parameter by typed id.
#[must_use]
pub fn analyze_param(id: ParameterId, params: &ParameterSet) -> SensitivityTable {
    let baseline = simulate(params);

    let rows = SWEEP_FACTORS
        .into_iter()
        .map(|factor| {
            let scaled = params.with_scaled(id, factor);
            let result = simulate(&scaled);
            SensitivityRow {
                factor,
                parameter_value: scaled.value(id),
                days_fed: result.total_days_fed,
                cost: result.total_cost,
                days_fed_delta: result.total_days_fed - baseline.total_days_fed,
                cost_delta: result.total_cost - baseline.total_cost,
            }
        })
        .collect();

    SensitivityTable {
        parameter: id.key().to_string(),
        baseline_value: params.value(id),
        rows,
    }
}

/// Sweep every numeric parameter, one table each, in [`ParameterId::ALL`]
/// order.
#[cfg(feature = "parallel")]
#[must_use]
pub fn analyze_all(params: &ParameterSet) -> Vec<SensitivityTable> {
    use rayon::prelude::*;

    ParameterId::ALL
        .par_iter()
        .map(|&id| analyze_param(id, params))
        .collect()
}

/// Sweep every numeric parameter, one table each, in [`ParameterId::ALL`]
/// order.
#[cfg(not(feature = "parallel"))]
#[must_use]
pub fn analyze_all(params: &ParameterSet) -> Vec<SensitivityTable> {
    ParameterId::ALL
        .iter()
        .map(|&id| analyze_param(id, params))
        .collect()
}
