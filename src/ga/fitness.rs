//! Fitness bookkeeping for one generation.
//!
//! Fitness is `cost_constant - cost`: higher is better, and an organism
//! that destroys every target scores the full constant. Records keep the
//! organism's original population slot so the descending-fitness sort can
//! be mapped back to chromosomes.
//!
//! # Reference
//! Goldberg (1989), Ch. 1.3: fitness scaling and roulette-wheel sampling

use crate::models::Scenario;

use super::attrition::evaluate_cost;
use super::StrikeChromosome;

/// Per-organism fitness statistics for one generation.
#[derive(Debug, Clone)]
pub struct FitnessRecord {
    /// Weighted value of surviving targets (non-negative).
    pub cost: f64,
    /// `cost_constant - cost`; may be negative.
    pub fitness: f64,
    /// Fitness as a fraction of the generation total.
    pub norm_fitness: f64,
    /// Running sum of normalized fitness in descending-fitness order.
    pub accum_fitness: f64,
    /// The organism's slot in the unsorted population.
    pub index: usize,
}

/// Evaluates every organism in a population.
///
/// Records come back in population order with `index` preset; normalized
/// and cumulative fields are zero until [`prepare_roulette`] runs.
pub fn evaluate_population(
    population: &[StrikeChromosome],
    scenario: &Scenario,
    cost_constant: f64,
) -> Vec<FitnessRecord> {
    population
        .iter()
        .enumerate()
        .map(|(index, chromosome)| {
            let cost = evaluate_cost(chromosome, scenario);
            FitnessRecord {
                cost,
                fitness: cost_constant - cost,
                norm_fitness: 0.0,
                accum_fitness: 0.0,
                index,
            }
        })
        .collect()
}

/// Position of the maximum-fitness record, by linear scan.
///
/// Never relies on sort order, so it is correct both before and after
/// [`prepare_roulette`]. Ties resolve to the earliest position.
pub fn fittest_index(records: &[FitnessRecord]) -> usize {
    let mut best = 0;
    for (i, rec) in records.iter().enumerate().skip(1) {
        if rec.fitness > records[best].fitness {
            best = i;
        }
    }
    best
}

/// Prepares a generation's records for roulette-wheel selection.
///
/// Normalizes fitness against the generation total, sorts descending by
/// fitness, and builds the cumulative curve (rank 0 holds its own
/// normalized value). When the total is zero, negative, or non-finite the
/// generation is degenerate and every organism gets uniform normalized
/// fitness, so selection degrades to a uniform draw instead of dividing
/// by zero.
pub fn prepare_roulette(records: &mut [FitnessRecord]) {
    if records.is_empty() {
        return;
    }

    let total: f64 = records.iter().map(|r| r.fitness).sum();
    if total > 0.0 && total.is_finite() {
        for rec in records.iter_mut() {
            rec.norm_fitness = rec.fitness / total;
        }
    } else {
        let uniform = 1.0 / records.len() as f64;
        for rec in records.iter_mut() {
            rec.norm_fitness = uniform;
        }
    }

    records.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));

    let mut running = 0.0;
    for rec in records.iter_mut() {
        running += rec.norm_fitness;
        rec.accum_fitness = running;
    }
}
