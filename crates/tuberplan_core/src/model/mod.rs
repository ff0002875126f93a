mod ids;
mod results;

pub use ids::ParameterId;
pub use results::{AnnualProjection, GenerationResult, SimulationResult};
