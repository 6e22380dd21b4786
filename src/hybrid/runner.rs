//! Hybrid GA+SA execution.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::config::HybridConfig;
use crate::error::ConfigError;
use crate::fitness::PreferenceMode;
use crate::ga::{GaResult, GaRunner};
use crate::pool::CoursePool;
use crate::schedule::Schedule;
use crate::timetable::{MutationStrategy, TimetableProblem};

/// Executes the hybrid optimizer: the GA loop of [`GaRunner`] with the
/// annealed mutation of [`anneal_genes`](super::anneal_genes).
pub struct HybridRunner;

impl HybridRunner {
    /// Runs the hybrid optimization over `pool`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn run(
        pool: &CoursePool,
        mode: PreferenceMode,
        config: &HybridConfig,
    ) -> Result<GaResult<Schedule>, ConfigError> {
        Self::run_with_cancel(pool, mode, config, None)
    }

    /// Runs the hybrid optimization with an optional cancellation token,
    /// polled once per generation.
    pub fn run_with_cancel(
        pool: &CoursePool,
        mode: PreferenceMode,
        config: &HybridConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<Schedule>, ConfigError> {
        let problem = TimetableProblem::new(pool, mode).with_mutation(MutationStrategy::Annealed);
        GaRunner::run_with_cancel(&problem, &config.ga, cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::evaluate;
    use crate::ga::Individual;

    fn clash_pool() -> CoursePool {
        CoursePool::from_courses([
            ("A", vec![vec!["Mon1"], vec!["Tue1"]]),
            ("B", vec![vec!["Mon1"], vec!["Wed2"]]),
        ])
        .unwrap()
    }

    #[test]
    fn test_finds_conflict_free_schedule() {
        let pool = clash_pool();
        let config = HybridConfig::default()
            .with_max_generations(50)
            .with_population_size(10)
            .with_seed(42);

        let result = HybridRunner::run(&pool, PreferenceMode::None, &config).unwrap();

        assert_eq!(result.best_fitness, 0);
        assert_eq!(evaluate(&result.best, PreferenceMode::None), 0);
        assert_eq!(result.generations, 50);
    }

    #[test]
    fn test_best_never_regresses() {
        let pool = CoursePool::from_courses([
            ("A", vec![vec!["Mon1-2"], vec!["Tue1"], vec!["Wed3"]]),
            ("B", vec![vec!["Mon2"], vec!["Tue1-3"], vec!["Thu5"]]),
            ("C", vec![vec!["Wed3"], vec!["Mon1"], vec!["Fri2"]]),
            ("D", vec![vec!["Tue2"], vec!["Fri2"], vec!["Mon2"]]),
        ])
        .unwrap();
        let config = HybridConfig::default().with_max_generations(40).with_seed(7);

        let result = HybridRunner::run(&pool, PreferenceMode::MaxGaps, &config).unwrap();

        for window in result.fitness_history.windows(2) {
            assert!(window[1] <= window[0]);
        }
        assert_eq!(
            result.best.fitness(),
            evaluate(&result.best, PreferenceMode::MaxGaps)
        );
    }

    #[test]
    fn test_population_too_small() {
        let pool = clash_pool();
        let config = HybridConfig::default().with_population_size(1);
        assert_eq!(
            HybridRunner::run(&pool, PreferenceMode::None, &config).unwrap_err(),
            ConfigError::PopulationTooSmall(1)
        );
    }
}
