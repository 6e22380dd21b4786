//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases as the temperature cools geometrically, allowing the search
//! to escape local optima.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

pub mod acceptance;
mod config;
mod runner;
mod types;

pub use acceptance::{acceptance_probability, metropolis_accept, MIN_TEMPERATURE};
pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
pub use types::SaProblem;
