//! Metropolis acceptance criterion.
//!
//! Shared by the annealing runner and the annealed mutation of the hybrid
//! optimizer.

use rand::Rng;

/// Temperatures are clamped to at least this value before dividing.
pub const MIN_TEMPERATURE: f64 = 1e-9;

/// Probability of accepting a move that changes the cost by `delta`.
///
/// `1.0` for non-worsening moves, otherwise `exp(-delta / temperature)`.
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta <= 0.0 {
        1.0
    } else {
        (-delta / temperature.max(MIN_TEMPERATURE)).exp()
    }
}

/// Decides whether to take a move with cost change `delta`.
///
/// Improving moves are taken without consuming randomness; any other move
/// is taken with [`acceptance_probability`].
pub fn metropolis_accept<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if delta < 0.0 {
        return true;
    }
    rng.random::<f64>() < acceptance_probability(delta, temperature)
}
