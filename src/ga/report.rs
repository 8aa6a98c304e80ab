//! Best-organism report.
//!
//! The only externally consumed output of the GA core: the fittest
//! assignment of a finished population, with its fitness and efficiency
//! against the scenario's total destroyable value.

use serde::{Deserialize, Serialize};

use crate::models::Scenario;

use super::fitness::{evaluate_population, fittest_index};
use super::StrikeChromosome;

/// The fittest organism of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestAssignment {
    /// Gene sequence: assigned target index per section.
    pub assignment: Vec<usize>,
    /// Resolved pairing: (mission number, JTAR number) per section.
    pub strikes: Vec<(String, i32)>,
    /// Fitness of the best organism.
    pub fitness: f64,
    /// `fitness / cost_constant × 100`.
    pub efficiency_pct: f64,
}

impl BestAssignment {
    /// Extracts the report from a finished population.
    ///
    /// Re-evaluates every organism and scan-locates the maximum. Returns
    /// `None` for an empty population.
    pub fn extract(
        population: &[StrikeChromosome],
        scenario: &Scenario,
        cost_constant: f64,
    ) -> Option<Self> {
        if population.is_empty() {
            return None;
        }

        let records = evaluate_population(population, scenario, cost_constant);
        let best = &records[fittest_index(&records)];
        let chromosome = &population[best.index];

        let strikes = scenario
            .sections
            .iter()
            .zip(&chromosome.genes)
            .map(|(section, &tgt)| (section.msn.clone(), scenario.targets[tgt].num_jtar))
            .collect();

        Some(Self {
            assignment: chromosome.genes.clone(),
            strikes,
            fitness: best.fitness,
            efficiency_pct: best.fitness / cost_constant * 100.0,
        })
    }
}
