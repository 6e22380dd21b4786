//! Core trait definitions for the GA framework.
//!
//! The two central traits, [`Individual`] and [`GaProblem`], define the
//! contract between the generic GA engine and domain-specific problem
//! implementations.

use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// Lower fitness is considered better (minimization).
///
/// Built-in implementations exist for `i64`, `f64` and `f32`.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    ///
    /// Used for initial/uninitialized individuals.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for logging, statistics and
    /// acceptance probabilities.
    fn to_f64(self) -> f64;
}

impl Fitness for i64 {
    fn worst() -> Self {
        i64::MAX
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for f32 {
    fn worst() -> Self {
        f32::INFINITY
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness value. The GA framework calls
/// [`GaProblem::evaluate`] to compute fitness, then stores it via
/// [`set_fitness`](Individual::set_fitness).
pub trait Individual: Clone + Send + Sync {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the current fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Sets the fitness of this individual.
    ///
    /// Called by the GA framework after evaluation.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Where the run currently stands, handed to [`GaProblem::mutate`].
///
/// Lets a problem adapt its mutation to run progress, e.g. by cooling an
/// annealing temperature over the generations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationContext {
    /// Per-gene mutation probability from the configuration.
    pub rate: f64,
    /// Zero-based index of the generation being built.
    pub generation: usize,
    /// Total generations of the run.
    pub max_generations: usize,
}

/// Defines a GA optimization problem.
///
/// 1. **Initialization**: How to create random individuals
/// 2. **Evaluation**: How to compute fitness
/// 3. **Crossover**: How to recombine two parents into one child
/// 4. **Mutation**: How to perturb a child
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the GA runner may evaluate
/// individuals in parallel using rayon (`parallel` feature).
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual and returns its fitness.
    ///
    /// Must be a pure function of the individual. Lower is better.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Produces one child by recombining two parents.
    ///
    /// The default implementation clones parent1 (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Self::Individual {
        parent1.clone()
    }

    /// Mutates a freshly built child in place.
    ///
    /// Called once for every child; the problem decides per gene whether
    /// to change anything, typically using `context.rate`.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(
        &self,
        _individual: &mut Self::Individual,
        _context: &MutationContext,
        _rng: &mut R,
    ) {
    }

    /// Called at the end of each generation with the best-ever fitness.
    ///
    /// The default implementation is a no-op.
    fn on_generation(
        &self,
        _generation: usize,
        _best_fitness: <Self::Individual as Individual>::Fitness,
    ) {
    }
}
