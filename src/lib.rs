//! Genetic-algorithm strike planning.
//!
//! Assigns a fixed ATO of strike aircraft sections to a fixed list of
//! JTAR ground targets, evolving assignments across generations to
//! minimize the weighted value of surviving target capability.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `AircraftSection`, `Target`, `Scenario`
//! - **`ga`**: The GA core — `StrikeChromosome`, attrition evaluation,
//!   fitness statistics, `GaEngine`, `BestAssignment`
//! - **`campaign`**: Scheduled experiment driver with an append-only
//!   CSV log (the only I/O in the crate)
//! - **`validation`**: Startup integrity checks (fatal configuration errors)
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use strike_optim::ga::{GaConfig, GaEngine};
//! use strike_optim::models::Scenario;
//!
//! let mut engine = GaEngine::new(Scenario::standard(), GaConfig::default()).unwrap();
//! let mut rng = SmallRng::seed_from_u64(42);
//! engine.run(100, &mut rng);
//!
//! let best = engine.best().unwrap();
//! println!("fitness {} ({:.1}%)", best.fitness, best.efficiency_pct);
//! ```
//!
//! # References
//!
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//!   Machine Learning"
//! - JP 3-60, "Joint Targeting"

pub mod campaign;
pub mod ga;
pub mod models;
pub mod validation;
