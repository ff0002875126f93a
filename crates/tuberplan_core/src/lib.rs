//! Tuber crop propagation planning library
//!
//! This crate provides a deterministic simulation engine for multi-generation
//! sweet potato yield, cost, and nutrition projections. It supports:
//! - A fixed 12-node propagation chain (3 main generations, each with three
//!   declining vine-cutting harvests from the same land)
//! - Tuber-replanting and vine-cutting propagation math
//! - Two yield-computation modes (per-hectare and per-plant)
//! - Full-preparation vs maintenance-only cost attribution
//! - Calorie and Vitamin-A coverage projections for a target population
//! - Annualized projection of the fixed-duration chain
//! - Single-parameter sensitivity sweeps over the same engine
//!
//! # Example
//!
//! ```ignore
//! use tuberplan_core::{ParameterSet, simulate, analyze};
//!
//! let params = ParameterSet::default();
//! let result = simulate(&params);
//! println!("total harvest: {:.1} t", result.total_tons);
//!
//! let table = analyze("tons_per_hectare", &params);
//! for row in &table.rows {
//!     println!("x{:.2} -> {:.0} days fed", row.factor, row.days_fed);
//! }
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{
    SWEEP_FACTORS, SensitivityRow, SensitivityTable, analyze, analyze_all, analyze_param,
};
pub use config::{ParameterSet, YieldMode};
pub use error::{ParseParameterIdError, ValidationError};
pub use model::{AnnualProjection, GenerationResult, ParameterId, SimulationResult};
pub use simulation::simulate;
