//! Timetable optimization.
//!
//! Connects the course pool and scoring model to the generic optimizers:
//!
//! - [`TimetableProblem`]: implements the GA and SA problem traits
//! - [`operators`]: schedule initialization, crossover, mutation, neighbors
//! - [`Solver`]: runs one configured optimizer and returns a [`Solution`]

pub mod operators;
mod problem;
mod solver;

pub use problem::{MutationStrategy, TimetableProblem};
pub use solver::{Algorithm, Solution, Solver, SolverConfig};
