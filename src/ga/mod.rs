//! GA core: chromosome encoding, attrition evaluation, selection, engine.
//!
//! # Encoding
//!
//! A chromosome assigns each ATO section (gene position) one target index
//! (gene value). Fitness is the weighted value of *destroyed* capability:
//! the attrition model scores surviving targets, and fitness is that cost
//! subtracted from the scenario's total destroyable value.
//!
//! # Submodules
//!
//! - [`attrition`]: the combat model and its strategic-value weights
//!
//! # Reference
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"
//! - Holland (1975), "Adaptation in Natural and Artificial Systems"

pub mod attrition;
mod chromosome;
mod engine;
mod fitness;
mod report;

pub use attrition::{cost_constant, evaluate_cost};
pub use chromosome::{breed_offspring, StrikeChromosome};
pub use engine::{GaConfig, GaEngine};
pub use fitness::{evaluate_population, fittest_index, prepare_roulette, FitnessRecord};
pub use report::BestAssignment;
