//! Parent selection.
//!
//! The GA uses truncation selection with a fixed elite of two: the two
//! lowest-fitness individuals of the current population become the
//! parents of every child in the next generation.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;

/// Number of parents kept by truncation selection.
pub const PARENT_COUNT: usize = 2;

/// Returns the indices of the two best individuals, best first.
///
/// Ranking uses a stable sort, so among equal fitness values the
/// individual that appears earlier in `population` wins.
///
/// # Panics
/// Panics if `population` has fewer than two members.
pub fn select_parents<I: Individual>(population: &[I]) -> (usize, usize) {
    assert!(
        population.len() >= PARENT_COUNT,
        "truncation selection needs at least two individuals"
    );

    let ranked = rank(population);
    (ranked[0], ranked[1])
}

/// Population indices ordered from best to worst fitness (stable).
pub fn rank<I: Individual>(population: &[I]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..population.len()).collect();
    indices.sort_by(|&a, &b| {
        population[a]
            .fitness()
            .partial_cmp(&population[b].fitness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    indices
}
