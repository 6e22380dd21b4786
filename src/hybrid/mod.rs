//! Hybrid GA + Simulated Annealing.
//!
//! The evolutionary loop is the plain GA (truncation selection, uniform
//! crossover, full generational replacement, best-ever tracking). Only the
//! mutation step differs: each child goes through a per-course Metropolis
//! sweep ([`anneal_genes`]) whose temperature falls linearly with the
//! generation index ([`generation_temperature`]).
//!
//! The linear schedule here is independent of the geometric cooling of
//! the standalone [`sa`](crate::sa) optimizer.

mod config;
mod runner;
mod sweep;

pub use config::{HybridConfig, DEFAULT_HYBRID_MUTATION_RATE};
pub use runner::HybridRunner;
pub use sweep::{anneal_genes, generation_temperature, TEMPERATURE_FLOOR};
