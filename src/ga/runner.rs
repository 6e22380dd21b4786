//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.
//!
//! Every generation is rebuilt from scratch: the two best members of the
//! current population parent all `population_size` children, and the
//! children replace the population entirely. Only the best-ever individual
//! survives across generations, as a value owned by the loop.

use super::config::GaConfig;
use super::selection::select_parents;
use super::types::{Fitness, GaProblem, Individual, MutationContext};
use crate::error::ConfigError;
use crate::random::rng_from_seed;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual seen during the entire run.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// Total number of generations built.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best-ever fitness after the initial population and after each
    /// generation. Never increases.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, ConfigError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// The flag is polled once per generation, before the generation is
    /// built. When set, the run returns the best solution found so far.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Individual>, ConfigError> {
        config.validate()?;

        let mut rng = rng_from_seed(config.seed);

        // 1. Initialize population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();

        // 2. Evaluate initial population
        evaluate_population(problem, &mut population, config.parallel);

        // 3. Track best
        let mut best = find_best(&population).clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness().to_f64());

        tracing::debug!(
            population = config.population_size,
            generations = config.max_generations,
            initial_best = ?best.fitness(),
            "GA started"
        );

        let mut generations = 0usize;
        let mut cancelled = false;

        // 4. Evolutionary loop
        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let (p1, p2) = select_parents(&population);
            let context = MutationContext {
                rate: config.mutation_rate,
                generation: gen,
                max_generations: config.max_generations,
            };

            let mut next_gen: Vec<P::Individual> = Vec::with_capacity(config.population_size);
            for _ in 0..config.population_size {
                let mut child = problem.crossover(&population[p1], &population[p2], &mut rng);
                problem.mutate(&mut child, &context, &mut rng);
                next_gen.push(child);
            }

            evaluate_population(problem, &mut next_gen, config.parallel);
            population = next_gen;
            generations = gen + 1;

            // Strictly better only: the first individual to reach a score keeps it.
            let gen_best = find_best(&population);
            if gen_best.fitness() < best.fitness() {
                best = gen_best.clone();
                tracing::trace!(generation = gen, best = ?best.fitness(), "GA improved");
            }

            fitness_history.push(best.fitness().to_f64());
            problem.on_generation(gen + 1, best.fitness());
        }

        tracing::debug!(
            generations,
            cancelled,
            best = ?best.fitness(),
            "GA finished"
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations,
            cancelled,
            fitness_history,
        })
    }
}

/// Evaluate all individuals in the population.
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    #[cfg(feature = "parallel")]
    if parallel {
        population.par_iter_mut().for_each(|ind| {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        });
        return;
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Find the individual with the best (lowest) fitness.
///
/// The earliest member wins among equals. The population is never empty
/// here because `population_size >= 2` is validated.
fn find_best<I: Individual>(population: &[I]) -> &I {
    let mut best = &population[0];
    for ind in &population[1..] {
        if ind.fitness() < best.fitness() {
            best = ind;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
