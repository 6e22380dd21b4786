//! Candidate timetables.

use std::sync::Arc;

use crate::fitness::Score;
use crate::ga::Individual;
use crate::pool::{CoursePool, Gene};
use crate::slot::TimeSlot;

/// One candidate timetable: exactly one chosen option per pool course.
///
/// Genes are positionally aligned with [`CoursePool::courses`]. A schedule
/// is a value: edits produce a new schedule via [`with_gene`](Self::with_gene)
/// and never touch a shared gene list.
///
/// The cached fitness starts at [`Score::MAX`] and is filled in by the
/// optimizers after evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    genes: Vec<Gene>,
    fitness: Score,
}

impl Schedule {
    pub fn new(genes: Vec<Gene>) -> Self {
        Self {
            genes,
            fitness: Score::MAX,
        }
    }

    /// Builds a schedule by picking `choices[i]` as the option of course `i`.
    ///
    /// # Panics
    /// Panics if `choices` does not have one in-range entry per course.
    pub fn from_choices(pool: &CoursePool, choices: &[usize]) -> Self {
        assert_eq!(choices.len(), pool.len(), "one choice per course required");
        let genes = pool
            .courses()
            .iter()
            .zip(choices)
            .map(|(course, &choice)| Arc::clone(&course.options()[choice]))
            .collect();
        Self::new(genes)
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn gene(&self, index: usize) -> &[TimeSlot] {
        &self.genes[index]
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Returns a copy with gene `index` replaced.
    pub fn with_gene(&self, index: usize, gene: Gene) -> Self {
        let mut genes = self.genes.clone();
        genes[index] = gene;
        Self::new(genes)
    }

    /// Pairs each course key with its assigned slots, in pool order.
    pub fn assignments<'a>(
        &'a self,
        pool: &'a CoursePool,
    ) -> impl Iterator<Item = (&'a str, &'a [TimeSlot])> + 'a {
        pool.keys().zip(self.genes.iter().map(|g| &g[..]))
    }
}

impl Individual for Schedule {
    type Fitness = Score;

    fn fitness(&self) -> Score {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: Score) {
        self.fitness = fitness;
    }
}
