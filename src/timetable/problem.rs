//! Timetable problem definition.
//!
//! Implements [`GaProblem`] and [`SaProblem`] for a [`CoursePool`], bridging
//! the domain model to the generic optimizers.

use rand::Rng;

use super::operators;
use crate::fitness::{evaluate, PreferenceMode, Score};
use crate::ga::{GaProblem, MutationContext};
use crate::hybrid::{anneal_genes, generation_temperature};
use crate::pool::CoursePool;
use crate::sa::SaProblem;
use crate::schedule::Schedule;

/// How a GA child is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationStrategy {
    /// Redraw each gene with probability `rate`, unconditionally.
    #[default]
    Resample,
    /// Metropolis sweep with the generation-indexed linear temperature.
    Annealed,
}

/// Timetable optimization over one course pool and preference mode.
///
/// # Example
/// ```
/// use u_timetable::fitness::PreferenceMode;
/// use u_timetable::ga::{GaConfig, GaRunner};
/// use u_timetable::pool::CoursePool;
/// use u_timetable::timetable::TimetableProblem;
///
/// let pool = CoursePool::new()
///     .with_course("A", [["Mon1"], ["Tue1"]])?
///     .with_course("B", [["Mon1"], ["Wed2"]])?;
/// let problem = TimetableProblem::new(&pool, PreferenceMode::None);
/// let result = GaRunner::run(&problem, &GaConfig::default().with_seed(1))?;
/// assert_eq!(result.best_fitness, 0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimetableProblem<'a> {
    pool: &'a CoursePool,
    mode: PreferenceMode,
    mutation: MutationStrategy,
}

impl<'a> TimetableProblem<'a> {
    pub fn new(pool: &'a CoursePool, mode: PreferenceMode) -> Self {
        Self {
            pool,
            mode,
            mutation: MutationStrategy::default(),
        }
    }

    pub fn with_mutation(mut self, mutation: MutationStrategy) -> Self {
        self.mutation = mutation;
        self
    }

    pub fn pool(&self) -> &'a CoursePool {
        self.pool
    }

    pub fn mode(&self) -> PreferenceMode {
        self.mode
    }

    pub fn mutation(&self) -> MutationStrategy {
        self.mutation
    }
}

impl GaProblem for TimetableProblem<'_> {
    type Individual = Schedule;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Schedule {
        operators::random_schedule(self.pool, rng)
    }

    fn evaluate(&self, individual: &Schedule) -> Score {
        evaluate(individual, self.mode)
    }

    fn crossover<R: Rng>(&self, parent1: &Schedule, parent2: &Schedule, rng: &mut R) -> Schedule {
        operators::crossover(parent1, parent2, rng)
    }

    fn mutate<R: Rng>(&self, individual: &mut Schedule, context: &MutationContext, rng: &mut R) {
        *individual = match self.mutation {
            MutationStrategy::Resample => {
                operators::mutate(individual, self.pool, context.rate, rng)
            }
            MutationStrategy::Annealed => {
                let temperature = generation_temperature(context.generation, context.max_generations);
                anneal_genes(individual, self.pool, self.mode, context.rate, temperature, rng)
            }
        };
    }

    fn on_generation(&self, generation: usize, best_fitness: Score) {
        tracing::trace!(generation, best_fitness, "timetable generation done");
    }
}

impl SaProblem for TimetableProblem<'_> {
    type Solution = Schedule;
    type Cost = Score;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Schedule {
        operators::random_schedule(self.pool, rng)
    }

    fn cost(&self, solution: &Schedule) -> Score {
        evaluate(solution, self.mode)
    }

    fn neighbor<R: Rng>(&self, solution: &Schedule, rng: &mut R) -> Schedule {
        operators::random_neighbor(solution, self.pool, rng)
    }
}
