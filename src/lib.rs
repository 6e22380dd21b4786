//! Course timetable optimization.
//!
//! Given a pool of courses, each offered in a few mutually exclusive
//! sections, searches for the weekly timetable with the lowest
//! conflict/preference penalty.
//!
//! - **Slots** ([`slot`]): compact day+period tokens such as `월3` or
//!   `Tue2-4`, decoded into `(day, period)` slots.
//! - **Scoring** ([`fitness`]): `10` per extra claim on an occupied slot,
//!   plus a per-day adjustment chosen by [`PreferenceMode`](fitness::PreferenceMode).
//! - **Genetic Algorithm** ([`ga`]): truncation selection of the two best,
//!   uniform crossover, per-gene resampling, best-ever tracking.
//! - **Simulated Annealing** ([`sa`]): single-trajectory search with
//!   Metropolis acceptance and geometric cooling.
//! - **Hybrid** ([`hybrid`]): the GA loop with a Metropolis sweep as
//!   mutation, cooled linearly over the generations.
//!
//! [`timetable::Solver`] runs any of the three on a
//! [`CoursePool`](pool::CoursePool).
//!
//! # Example
//!
//! ```
//! use u_timetable::fitness::PreferenceMode;
//! use u_timetable::pool::CoursePool;
//! use u_timetable::timetable::{Algorithm, Solver, SolverConfig};
//!
//! let pool = CoursePool::new()
//!     .with_course("Algorithms", [["Mon1-2"], ["Wed3-4"]])?
//!     .with_course("Compilers", [["Mon2"], ["Thu1"]])?
//!     .with_course("Networks", [["Wed4"], ["Fri5"]])?;
//!
//! let config = SolverConfig::new(Algorithm::Genetic, PreferenceMode::AvoidMorning).with_seed(42);
//! let solution = Solver::new(&pool, config).solve()?;
//!
//! for (course, slots) in solution.assignments(&pool) {
//!     let slots: Vec<String> = slots.iter().map(|s| s.to_string()).collect();
//!     println!("{course}: {}", slots.join(", "));
//! }
//! # Ok::<(), u_timetable::error::TimetableError>(())
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialization of configuration types and course pools
//! - `parallel`: rayon-parallel population evaluation

pub mod error;
pub mod fitness;
pub mod ga;
pub mod hybrid;
pub mod pool;
pub mod random;
pub mod sa;
pub mod schedule;
pub mod slot;
pub mod timetable;
