//! One-call timetable optimization.
//!
//! [`Solver`] takes a course pool and a [`SolverConfig`], runs the chosen
//! optimizer, and returns the best schedule with its score.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::problem::TimetableProblem;
use crate::error::TimetableError;
use crate::fitness::{evaluate, PreferenceMode, Score};
use crate::ga::{GaConfig, GaResult, GaRunner};
use crate::hybrid::{HybridConfig, HybridRunner};
use crate::pool::CoursePool;
use crate::sa::{SaConfig, SaRunner};
use crate::schedule::Schedule;
use crate::slot::TimeSlot;

/// Which optimizer to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Genetic algorithm with resampling mutation.
    #[default]
    Genetic,
    /// Simulated annealing; returns the final state, not the best seen.
    Annealing,
    /// Genetic algorithm with annealed mutation.
    Hybrid,
}

/// Everything one optimization run needs besides the pool.
///
/// Only the section matching `algorithm` is read.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    pub algorithm: Algorithm,
    pub preference: PreferenceMode,
    pub ga: GaConfig,
    pub sa: SaConfig,
    pub hybrid: HybridConfig,
}

impl SolverConfig {
    pub fn new(algorithm: Algorithm, preference: PreferenceMode) -> Self {
        Self {
            algorithm,
            preference,
            ..Self::default()
        }
    }

    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    pub fn with_sa(mut self, sa: SaConfig) -> Self {
        self.sa = sa;
        self
    }

    pub fn with_hybrid(mut self, hybrid: HybridConfig) -> Self {
        self.hybrid = hybrid;
        self
    }

    /// Sets the seed of every optimizer section.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.ga = self.ga.with_seed(seed);
        self.sa = self.sa.with_seed(seed);
        self.hybrid = self.hybrid.with_seed(seed);
        self
    }

    /// Validates the section used by `algorithm`.
    pub fn validate(&self) -> Result<(), TimetableError> {
        match self.algorithm {
            Algorithm::Genetic => self.ga.validate()?,
            Algorithm::Annealing => self.sa.validate()?,
            Algorithm::Hybrid => self.hybrid.validate()?,
        }
        Ok(())
    }
}

/// Outcome of a solver run.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Best schedule found (final state for [`Algorithm::Annealing`]).
    pub schedule: Schedule,
    /// Score of `schedule`.
    pub score: Score,
    /// Optimizer that produced the result.
    pub algorithm: Algorithm,
    /// Generations (GA, hybrid) or iterations (SA) performed.
    pub steps: usize,
    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

impl Solution {
    /// Pairs each course key with its assigned slots, in pool order.
    pub fn assignments<'a>(
        &'a self,
        pool: &'a CoursePool,
    ) -> impl Iterator<Item = (&'a str, &'a [TimeSlot])> + 'a {
        self.schedule.assignments(pool)
    }

    fn from_ga(result: GaResult<Schedule>, algorithm: Algorithm) -> Self {
        Self {
            score: result.best_fitness,
            schedule: result.best,
            algorithm,
            steps: result.generations,
            cancelled: result.cancelled,
        }
    }
}

/// Runs one optimization over a borrowed, read-only pool.
///
/// # Example
/// ```
/// use u_timetable::fitness::PreferenceMode;
/// use u_timetable::pool::CoursePool;
/// use u_timetable::timetable::{Algorithm, Solver, SolverConfig};
///
/// let pool = CoursePool::new()
///     .with_course("A", [["월1"], ["화1"]])?
///     .with_course("B", [["월1"], ["수2"]])?;
/// let config = SolverConfig::new(Algorithm::Hybrid, PreferenceMode::None).with_seed(5);
/// let solution = Solver::new(&pool, config).solve()?;
/// assert_eq!(solution.score, 0);
/// # Ok::<(), u_timetable::error::TimetableError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    pool: &'a CoursePool,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    pub fn new(pool: &'a CoursePool, config: SolverConfig) -> Self {
        Self { pool, config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Runs the configured optimizer.
    ///
    /// An empty pool yields an empty schedule with score 0 without
    /// searching.
    ///
    /// # Errors
    /// Returns [`TimetableError::Config`] if the configuration is invalid.
    pub fn solve(&self) -> Result<Solution, TimetableError> {
        self.solve_with_cancel(None)
    }

    /// Runs the configured optimizer with an optional cancellation token.
    #[tracing::instrument(
        level = "debug",
        name = "Timetable Solve",
        skip(self, cancel),
        fields(courses = self.pool.len(), algorithm = ?self.config.algorithm)
    )]
    pub fn solve_with_cancel(
        &self,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Solution, TimetableError> {
        self.config.validate()?;

        let algorithm = self.config.algorithm;
        let mode = self.config.preference;

        if self.pool.is_empty() {
            tracing::debug!("empty course pool, nothing to optimize");
            let schedule = Schedule::new(Vec::new());
            return Ok(Solution {
                score: evaluate(&schedule, mode),
                schedule,
                algorithm,
                steps: 0,
                cancelled: false,
            });
        }

        let solution = match algorithm {
            Algorithm::Genetic => {
                let problem = TimetableProblem::new(self.pool, mode);
                let result = GaRunner::run_with_cancel(&problem, &self.config.ga, cancel)?;
                Solution::from_ga(result, algorithm)
            }
            Algorithm::Hybrid => {
                let result =
                    HybridRunner::run_with_cancel(self.pool, mode, &self.config.hybrid, cancel)?;
                Solution::from_ga(result, algorithm)
            }
            Algorithm::Annealing => {
                let problem = TimetableProblem::new(self.pool, mode);
                let result = SaRunner::run_with_cancel(&problem, &self.config.sa, cancel)?;
                Solution {
                    schedule: result.solution,
                    score: result.cost,
                    algorithm,
                    steps: result.iterations,
                    cancelled: result.cancelled,
                }
            }
        };

        tracing::debug!(
            score = solution.score,
            steps = solution.steps,
            cancelled = solution.cancelled,
            "timetable solved"
        );
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn clash_pool() -> CoursePool {
        CoursePool::from_courses([
            ("A", vec![vec!["Mon1"], vec!["Tue1"]]),
            ("B", vec![vec!["Mon1"], vec!["Wed2"]]),
        ])
        .unwrap()
    }

    #[test]
    fn test_every_algorithm_solves_small_pool() {
        let pool = clash_pool();
        for algorithm in [Algorithm::Genetic, Algorithm::Annealing, Algorithm::Hybrid] {
            let config = SolverConfig::new(algorithm, PreferenceMode::None).with_seed(42);
            let solution = Solver::new(&pool, config).solve().unwrap();

            assert_eq!(solution.algorithm, algorithm);
            assert!(solution.score >= 0);
            assert_eq!(solution.score, evaluate(&solution.schedule, PreferenceMode::None));
            assert_eq!(solution.schedule.len(), pool.len());
        }
    }

    #[test]
    fn test_empty_pool_scores_zero() {
        let pool = CoursePool::new();
        for algorithm in [Algorithm::Genetic, Algorithm::Annealing, Algorithm::Hybrid] {
            let config = SolverConfig::new(algorithm, PreferenceMode::Cram);
            let solution = Solver::new(&pool, config).solve().unwrap();
            assert!(solution.schedule.is_empty());
            assert_eq!(solution.score, 0);
            assert_eq!(solution.steps, 0);
        }
    }

    #[test]
    fn test_invalid_section_is_reported() {
        let pool = clash_pool();
        let config = SolverConfig::new(Algorithm::Genetic, PreferenceMode::None)
            .with_ga(GaConfig::default().with_population_size(1));
        let err = Solver::new(&pool, config).solve().unwrap_err();
        assert_eq!(err, TimetableError::Config(ConfigError::PopulationTooSmall(1)));
    }

    #[test]
    fn test_unused_section_is_not_validated() {
        let pool = clash_pool();
        let config = SolverConfig::new(Algorithm::Annealing, PreferenceMode::None)
            .with_ga(GaConfig::default().with_population_size(1))
            .with_seed(1);
        assert!(Solver::new(&pool, config).solve().is_ok());
    }

    #[test]
    fn test_assignments_use_pool_keys() {
        let pool = clash_pool();
        let config = SolverConfig::new(Algorithm::Genetic, PreferenceMode::None).with_seed(3);
        let solution = Solver::new(&pool, config).solve().unwrap();
        let keys: Vec<&str> = solution.assignments(&pool).map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["A", "B"]);
    }
}
