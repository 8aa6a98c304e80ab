//! Generational GA engine.
//!
//! Owns the current/next population buffers and drives the
//! evaluate → breed → swap lifecycle. Selection is fitness-proportionate
//! (roulette wheel over the cumulative curve from [`prepare_roulette`])
//! with one elite carried per generation.
//!
//! # Reference
//! Goldberg (1989), Ch. 3: reproduction, crossover, mutation

use rand::Rng;

use crate::models::Scenario;
use crate::validation::{validate_config, validate_scenario, ValidationError};

use super::attrition::cost_constant;
use super::chromosome::{breed_offspring, StrikeChromosome};
use super::fitness::{evaluate_population, fittest_index, prepare_roulette, FitnessRecord};
use super::report::BestAssignment;

/// GA run parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Organisms per generation.
    pub population_size: usize,
    /// Per-gene mutation probability in [0, 1].
    pub mutation_rate: f64,
    /// Redraw attempts when the wheel keeps landing on an excluded rank.
    pub selection_retries: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            mutation_rate: 0.01,
            selection_retries: 32,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the selection retry bound.
    pub fn with_selection_retries(mut self, retries: usize) -> Self {
        self.selection_retries = retries;
        self
    }
}

/// Generational GA over one strike scenario.
///
/// The engine owns two population buffers. Each generation is produced
/// wholesale into the next buffer, buffers are swapped, and the stale
/// buffer is cleared. Chromosomes never survive by reference; elitism is
/// a value copy.
#[derive(Debug)]
pub struct GaEngine {
    scenario: Scenario,
    config: GaConfig,
    cost_constant: f64,
    current: Vec<StrikeChromosome>,
    next: Vec<StrikeChromosome>,
}

impl GaEngine {
    /// Creates an engine after validating the scenario and configuration.
    ///
    /// Configuration errors are fatal: the engine refuses to construct.
    pub fn new(scenario: Scenario, config: GaConfig) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();
        if let Err(e) = validate_scenario(&scenario) {
            errors.extend(e);
        }
        if let Err(e) = validate_config(&config) {
            errors.extend(e);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let cost_constant = cost_constant(&scenario.targets);
        Ok(Self {
            scenario,
            config,
            cost_constant,
            current: Vec::new(),
            next: Vec::new(),
        })
    }

    /// Fills generation 0 with uniform-random assignments.
    pub fn initialize_population<R: Rng>(&mut self, rng: &mut R) {
        let num_genes = self.scenario.num_sections();
        let num_targets = self.scenario.num_targets();
        self.current = (0..self.config.population_size)
            .map(|_| StrikeChromosome::random(num_genes, num_targets, rng))
            .collect();
        self.next.clear();
    }

    /// The current population.
    pub fn population(&self) -> &[StrikeChromosome] {
        &self.current
    }

    /// The scenario under optimization.
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// The run configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The fitness zero-floor, fixed at construction.
    pub fn cost_constant(&self) -> f64 {
        self.cost_constant
    }

    /// Runs the requested number of generations, sequentially and in full.
    ///
    /// Initializes the population first if that has not happened yet.
    /// There is no convergence check.
    pub fn run<R: Rng>(&mut self, generations: usize, rng: &mut R) {
        if self.current.is_empty() {
            self.initialize_population(rng);
        }

        for _ in 0..generations {
            let mut records =
                evaluate_population(&self.current, &self.scenario, self.cost_constant);
            self.produce_next_generation(&mut records, rng);
            std::mem::swap(&mut self.current, &mut self.next);
            self.next.clear();
        }
    }

    /// Reports the fittest organism of the current population.
    ///
    /// Re-evaluates every organism. `None` only when the population has
    /// never been initialized.
    pub fn best(&self) -> Option<BestAssignment> {
        BestAssignment::extract(&self.current, &self.scenario, self.cost_constant)
    }

    /// Breeds the next generation: one elite plus n-1 roulette offspring.
    fn produce_next_generation<R: Rng>(&mut self, records: &mut [FitnessRecord], rng: &mut R) {
        // Elite by scan over the unsorted records; sort order is not
        // established yet.
        let elite_slot = records[fittest_index(records)].index;
        self.next.push(self.current[elite_slot].clone());

        prepare_roulette(records);

        let num_targets = self.scenario.num_targets();
        for _ in 1..self.config.population_size {
            let rank1 = spin_wheel(records, None, self.config.selection_retries, rng);
            let rank2 = spin_wheel(records, Some(rank1), self.config.selection_retries, rng);
            let parent1 = &self.current[records[rank1].index];
            let parent2 = &self.current[records[rank2].index];
            let child =
                breed_offspring(parent1, parent2, num_targets, self.config.mutation_rate, rng);
            self.next.push(child);
        }
    }
}

/// Roulette-wheel draw over the prepared cumulative curve.
///
/// Picks the first sorted rank whose cumulative fitness exceeds a fresh
/// uniform draw, retrying with new draws while it lands on the excluded
/// rank. After `retries` failed draws the fallback is the next distinct
/// rank after the excluded one, wrapping. Termination is guaranteed even
/// when one organism holds the entire fitness mass.
fn spin_wheel<R: Rng>(
    records: &[FitnessRecord],
    exclude: Option<usize>,
    retries: usize,
    rng: &mut R,
) -> usize {
    let last = records.len() - 1;
    for _ in 0..retries.max(1) {
        let r = rng.random::<f64>();
        let rank = records
            .iter()
            .position(|rec| rec.accum_fitness > r)
            .unwrap_or(last);
        if Some(rank) != exclude {
            return rank;
        }
    }

    match exclude {
        Some(e) if records.len() > 1 => (e + 1) % records.len(),
        Some(e) => e,
        None => last,
    }
}
