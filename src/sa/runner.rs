//! SA execution loop.
//!
//! One state is walked through the search space: at every iteration a
//! neighbor is proposed, accepted by the Metropolis criterion, and the
//! temperature is multiplied by the cooling rate. The run ends when the
//! temperature is no longer above the stop temperature.
//!
//! The result is the final *current* state. No separate best-ever state is
//! kept, so the returned cost can be worse than a state visited earlier.

use super::acceptance::metropolis_accept;
use super::config::SaConfig;
use super::types::SaProblem;
use crate::error::ConfigError;
use crate::ga::Fitness;
use crate::random::rng_from_seed;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone, C> {
    /// The state the search ended in.
    pub solution: S,

    /// Cost of `solution`.
    pub cost: C,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Current cost at the start, every `history_interval` iterations,
    /// and at the end.
    pub cost_history: Vec<f64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn run<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
    ) -> Result<SaResult<P::Solution, P::Cost>, ConfigError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs SA with an optional cancellation token, polled once per
    /// iteration.
    pub fn run_with_cancel<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution, P::Cost>, ConfigError> {
        config.validate()?;

        let mut rng = rng_from_seed(config.seed);

        let mut current = problem.initial_solution(&mut rng);
        let mut current_cost = problem.cost(&current);

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        let history_interval = config.history_interval.max(1);
        let mut cost_history = Vec::new();
        cost_history.push(current_cost.to_f64());

        tracing::debug!(
            initial_temperature = config.initial_temperature,
            cooling_rate = config.cooling_rate,
            stop_temperature = config.stop_temperature,
            initial_cost = ?current_cost,
            "SA started"
        );

        while temperature > config.stop_temperature {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                break;
            }

            let neighbor = problem.neighbor(&current, &mut rng);
            let neighbor_cost = problem.cost(&neighbor);
            let delta = neighbor_cost.to_f64() - current_cost.to_f64();

            if metropolis_accept(delta, temperature, &mut rng) {
                if delta < 0.0 {
                    improving_moves += 1;
                }
                current = neighbor;
                current_cost = neighbor_cost;
                accepted_moves += 1;
            }

            iterations += 1;
            if iterations % history_interval == 0 {
                cost_history.push(current_cost.to_f64());
            }
            tracing::trace!(iteration = iterations, temperature, cost = ?current_cost, "SA step");

            temperature *= config.cooling_rate;
        }

        if iterations % history_interval != 0 {
            cost_history.push(current_cost.to_f64());
        }

        tracing::debug!(
            iterations,
            accepted_moves,
            cancelled,
            cost = ?current_cost,
            "SA finished"
        );

        Ok(SaResult {
            solution: current,
            cost: current_cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
            cost_history,
        })
    }
}
