//! Genetic Algorithm framework.
//!
//! A generic GA built on trait-based abstractions. Problems implement
//! [`GaProblem`], which specifies how to create, evaluate, crossover, and
//! mutate individuals.
//!
//! Each generation: select the two best members (truncation selection),
//! breed a full replacement population by crossover and mutation, evaluate
//! it, and update the best-ever individual.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with associated fitness type
//! - [`GaProblem`]: Problem definition: initialization, evaluation and operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final optimization result with statistics
//!
//! # Submodules
//!
//! - [`operators`]: Uniform crossover and resampling mutation on gene vectors
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::{rank, select_parents, PARENT_COUNT};
pub use types::{Fitness, GaProblem, Individual, MutationContext};
