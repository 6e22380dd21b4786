//! Core trait for Simulated Annealing.

use rand::Rng;

use crate::ga::Fitness;

/// Defines a Simulated Annealing problem.
///
/// The user implements neighbor generation and cost evaluation.
/// The SA framework handles temperature management, acceptance
/// criterion, and cooling.
///
/// # Minimization
///
/// SA minimizes the cost function. For maximization, negate the cost.
///
/// # Examples
///
/// ```ignore
/// struct Quadratic;
///
/// impl SaProblem for Quadratic {
///     type Solution = i64;
///     type Cost = i64;
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> i64 {
///         rng.random_range(-100..100)
///     }
///
///     fn cost(&self, x: &i64) -> i64 {
///         x * x
///     }
///
///     fn neighbor<R: Rng>(&self, x: &i64, rng: &mut R) -> i64 {
///         x + rng.random_range(-3..=3)
///     }
/// }
/// ```
///
/// # References
///
/// Kirkpatrick et al. (1983), Cerny (1985)
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// The cost type. Differences are taken in `f64`.
    type Cost: Fitness;

    /// Creates a random initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a solution. Lower is better.
    fn cost(&self, solution: &Self::Solution) -> Self::Cost;

    /// Generates a neighbor of the current solution.
    ///
    /// Must return a new value; `solution` itself is left untouched.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R) -> Self::Solution;
}
