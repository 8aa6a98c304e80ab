//! Assignment chromosome for the strike GA.
//!
//! # Encoding
//!
//! A chromosome is a fixed-length vector of target indices: position =
//! section index into the ATO, value = assigned target index. Any section
//! may be assigned any target, including one already assigned elsewhere.
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization and
//! Machine Learning", Ch. 3

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One candidate section→target assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrikeChromosome {
    /// Assigned target index per gene position.
    pub genes: Vec<usize>,
}

impl StrikeChromosome {
    /// Creates a chromosome with uniform-random target assignments.
    pub fn random<R: Rng>(num_genes: usize, num_targets: usize, rng: &mut R) -> Self {
        let genes = (0..num_genes)
            .map(|_| rng.random_range(0..num_targets))
            .collect();
        Self { genes }
    }

    /// Creates a chromosome from explicit gene values.
    pub fn from_genes(genes: Vec<usize>) -> Self {
        Self { genes }
    }

    /// Number of gene positions.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Validates the gene-range invariant: every value in `[0, num_targets)`.
    pub fn is_valid(&self, num_targets: usize) -> bool {
        self.genes.iter().all(|&g| g < num_targets)
    }
}

/// Breeds one offspring by single-point crossover with per-gene mutation.
///
/// The split point is strictly interior, drawn uniformly from
/// `[1, len - 2]`; genes before it copy from `parent1`, genes from it
/// onward copy from `parent2`. Each copied gene independently mutates to
/// a fresh uniform target index when a [0,1) draw is `<= mutation_rate`.
/// With fewer than three genes no interior point exists and the split is 1.
pub fn breed_offspring<R: Rng>(
    parent1: &StrikeChromosome,
    parent2: &StrikeChromosome,
    num_targets: usize,
    mutation_rate: f64,
    rng: &mut R,
) -> StrikeChromosome {
    let len = parent1.len();
    debug_assert_eq!(len, parent2.len());

    let split = if len < 3 {
        1
    } else {
        rng.random_range(1..=len - 2)
    };

    let mut genes = Vec::with_capacity(len);
    for k in 0..len {
        let parent_gene = if k < split {
            parent1.genes[k]
        } else {
            parent2.genes[k]
        };
        if rng.random::<f64>() <= mutation_rate {
            genes.push(rng.random_range(0..num_targets));
        } else {
            genes.push(parent_gene);
        }
    }

    StrikeChromosome { genes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_random_chromosome_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        let ch = StrikeChromosome::random(10, 10, &mut rng);

        assert_eq!(ch.len(), 10);
        assert!(ch.is_valid(10));
    }

    #[test]
    fn test_is_valid_rejects_out_of_range() {
        let ch = StrikeChromosome::from_genes(vec![0, 3, 9]);
        assert!(ch.is_valid(10));
        assert!(!ch.is_valid(9));
    }

    #[test]
    fn test_breed_no_mutation_is_pure_crossover() {
        let mut rng = SmallRng::seed_from_u64(42);
        let p1 = StrikeChromosome::from_genes(vec![0; 10]);
        let p2 = StrikeChromosome::from_genes(vec![1; 10]);

        let child = breed_offspring(&p1, &p2, 2, 0.0, &mut rng);

        assert_eq!(child.len(), 10);
        // A strictly interior split leaves at least one gene from each parent
        assert!(child.genes.contains(&0));
        assert!(child.genes.contains(&1));
        // Prefix from parent 1, suffix from parent 2, one switch point
        let switches = child.genes.windows(2).filter(|w| w[0] != w[1]).count();
        assert_eq!(switches, 1);
        assert_eq!(child.genes[0], 0);
        assert_eq!(child.genes[9], 1);
    }

    #[test]
    fn test_breed_full_mutation_redraws_every_gene() {
        let mut rng = SmallRng::seed_from_u64(42);
        // Parents agree on a gene value outside the redraw range, so any
        // surviving parent gene would be caught by the range check.
        let p1 = StrikeChromosome::from_genes(vec![99; 10]);
        let p2 = StrikeChromosome::from_genes(vec![99; 10]);

        let child = breed_offspring(&p1, &p2, 10, 1.0, &mut rng);

        assert!(child.is_valid(10));
        assert!(child.genes.iter().all(|&g| g != 99));
    }

    #[test]
    fn test_breed_stays_in_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        let p1 = StrikeChromosome::random(10, 5, &mut rng);
        let p2 = StrikeChromosome::random(10, 5, &mut rng);

        for _ in 0..200 {
            let child = breed_offspring(&p1, &p2, 5, 0.25, &mut rng);
            assert!(child.is_valid(5));
        }
    }

    #[test]
    fn test_breed_short_chromosomes() {
        let mut rng = SmallRng::seed_from_u64(3);
        let p1 = StrikeChromosome::from_genes(vec![0]);
        let p2 = StrikeChromosome::from_genes(vec![1]);

        // One gene: no interior split exists, whole genome from parent 1
        let child = breed_offspring(&p1, &p2, 2, 0.0, &mut rng);
        assert_eq!(child.genes, vec![0]);

        // Two genes: one from each parent
        let p1 = StrikeChromosome::from_genes(vec![0, 0]);
        let p2 = StrikeChromosome::from_genes(vec![1, 1]);
        let child = breed_offspring(&p1, &p2, 2, 0.0, &mut rng);
        assert_eq!(child.genes, vec![0, 1]);
    }
}
