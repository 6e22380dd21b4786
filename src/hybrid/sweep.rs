//! Annealed mutation.
//!
//! Replaces the GA's blind gene redraw with a Metropolis sweep over the
//! courses, cooled linearly across generations.

use rand::Rng;

use crate::fitness::{evaluate, PreferenceMode, Score};
use crate::ga::Individual;
use crate::pool::CoursePool;
use crate::sa::metropolis_accept;
use crate::schedule::Schedule;

/// Lowest temperature the generation schedule reaches.
pub const TEMPERATURE_FLOOR: f64 = 0.01;

/// Temperature used while building generation `generation` of `total`.
///
/// Falls linearly from `1.0` at the first generation and never drops below
/// [`TEMPERATURE_FLOOR`], so late generations can still accept a worse
/// move.
///
/// ```
/// use u_timetable::hybrid::generation_temperature;
///
/// assert_eq!(generation_temperature(0, 100), 1.0);
/// assert!((generation_temperature(50, 100) - 0.5).abs() < 1e-12);
/// assert_eq!(generation_temperature(999, 1000), 0.01);
/// ```
pub fn generation_temperature(generation: usize, total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }
    (1.0 - generation as f64 / total as f64).max(TEMPERATURE_FLOOR)
}

/// Runs one Metropolis sweep over the courses of `individual`.
///
/// Each course is proposed for change with probability `rate`. A proposal
/// redraws that course's gene and is accepted with probability `1` when it
/// does not worsen the score, else `exp(-delta / temperature)`. Courses are
/// visited in pool order and each proposal is judged against the schedule
/// as left by the earlier ones.
///
/// The returned schedule carries its score as fitness.
pub fn anneal_genes<R: Rng>(
    individual: &Schedule,
    pool: &CoursePool,
    mode: PreferenceMode,
    rate: f64,
    temperature: f64,
    rng: &mut R,
) -> Schedule {
    let mut current = individual.clone();
    let mut current_score: Score = evaluate(&current, mode);

    for i in 0..pool.len() {
        if rng.random::<f64>() >= rate {
            continue;
        }
        let candidate = current.with_gene(i, pool.random_gene(i, rng));
        let candidate_score = evaluate(&candidate, mode);
        let delta = (candidate_score - current_score) as f64;

        if metropolis_accept(delta, temperature, rng) {
            current = candidate;
            current_score = candidate_score;
        }
    }

    current.set_fitness(current_score);
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn clash_pool() -> CoursePool {
        CoursePool::from_courses([
            ("A", vec![vec!["Mon1"], vec!["Tue1"]]),
            ("B", vec![vec!["Mon1"], vec!["Wed2"]]),
        ])
        .unwrap()
    }

    #[test]
    fn test_temperature_schedule() {
        assert_eq!(generation_temperature(0, 10), 1.0);
        assert!((generation_temperature(3, 10) - 0.7).abs() < 1e-12);
        assert!((generation_temperature(9, 10) - 0.1).abs() < 1e-12);
        assert_eq!(generation_temperature(999, 1000), TEMPERATURE_FLOOR);
        assert_eq!(generation_temperature(0, 0), 1.0);
    }

    #[test]
    fn test_temperature_is_positive_and_non_increasing() {
        let total = 250;
        let temps: Vec<f64> = (0..total).map(|g| generation_temperature(g, total)).collect();
        assert!(temps.iter().all(|&t| t >= TEMPERATURE_FLOOR));
        assert!(temps.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn test_rate_zero_keeps_schedule_and_scores_it() {
        let pool = clash_pool();
        let mut rng = create_rng(1);
        let s = Schedule::from_choices(&pool, &[0, 0]);
        let out = anneal_genes(&s, &pool, PreferenceMode::None, 0.0, 1.0, &mut rng);
        assert_eq!(out.genes(), s.genes());
        assert_eq!(out.fitness(), 10);
    }

    #[test]
    fn test_never_worsens_at_floor_temperature() {
        // At T = 0.01 a +10 move is accepted with probability e^-1000.
        let pool = clash_pool();
        let mut rng = create_rng(2);
        let optimal = Schedule::from_choices(&pool, &[1, 0]);
        for _ in 0..200 {
            let out = anneal_genes(&optimal, &pool, PreferenceMode::None, 1.0, TEMPERATURE_FLOOR, &mut rng);
            assert_eq!(out.fitness(), 0);
        }
    }

    #[test]
    fn test_fitness_matches_evaluation() {
        let pool = clash_pool();
        let mut rng = create_rng(3);
        let s = Schedule::from_choices(&pool, &[0, 0]);
        for _ in 0..50 {
            let out = anneal_genes(&s, &pool, PreferenceMode::AvoidMorning, 0.5, 1.0, &mut rng);
            assert_eq!(out.fitness(), evaluate(&out, PreferenceMode::AvoidMorning));
        }
    }

    #[test]
    fn test_input_untouched() {
        let pool = clash_pool();
        let mut rng = create_rng(4);
        let s = Schedule::from_choices(&pool, &[0, 0]);
        let before = s.clone();
        let _ = anneal_genes(&s, &pool, PreferenceMode::None, 1.0, 1.0, &mut rng);
        assert_eq!(s, before);
    }
}
