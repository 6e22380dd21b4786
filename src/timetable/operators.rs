//! Timetable search operators.
//!
//! Every operator returns a new [`Schedule`]; inputs are never modified.
//! Genes are drawn from the pool's pre-expanded options.

use rand::Rng;

use crate::ga::operators::{resample_mutation, uniform_crossover};
use crate::pool::CoursePool;
use crate::schedule::Schedule;

/// Draws one option per course, uniformly and independently.
pub fn random_schedule<R: Rng>(pool: &CoursePool, rng: &mut R) -> Schedule {
    let genes = (0..pool.len()).map(|i| pool.random_gene(i, rng)).collect();
    Schedule::new(genes)
}

/// Builds a child taking each course's gene from either parent with equal
/// probability.
pub fn crossover<R: Rng>(parent1: &Schedule, parent2: &Schedule, rng: &mut R) -> Schedule {
    Schedule::new(uniform_crossover(parent1.genes(), parent2.genes(), rng))
}

/// Redraws each course's gene from scratch with probability `rate`.
pub fn mutate<R: Rng>(individual: &Schedule, pool: &CoursePool, rate: f64, rng: &mut R) -> Schedule {
    let mut genes = individual.genes().to_vec();
    resample_mutation(&mut genes, rate, rng, |i, r| pool.random_gene(i, r));
    Schedule::new(genes)
}

/// Copies the schedule with one uniformly chosen course redrawn.
///
/// The redrawn option may equal the current one. An empty schedule is
/// returned unchanged.
pub fn random_neighbor<R: Rng>(schedule: &Schedule, pool: &CoursePool, rng: &mut R) -> Schedule {
    if pool.is_empty() {
        return schedule.clone();
    }
    let target = rng.random_range(0..pool.len());
    schedule.with_gene(target, pool.random_gene(target, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::slot::{Day, TimeSlot};

    fn pool() -> CoursePool {
        CoursePool::from_courses([
            ("A", vec![vec!["Mon1"], vec!["Tue1"]]),
            ("B", vec![vec!["Mon1"], vec!["Wed2"]]),
            ("C", vec![vec!["Thu3-4"], vec!["Fri1"], vec!["Sat2"]]),
        ])
        .unwrap()
    }

    fn is_option_of(pool: &CoursePool, s: &Schedule) -> bool {
        s.genes()
            .iter()
            .zip(pool.courses())
            .all(|(g, c)| c.options().iter().any(|o| o == g))
    }

    #[test]
    fn test_random_schedule_matches_pool_layout() {
        let pool = pool();
        let mut rng = create_rng(1);
        for _ in 0..15 {
            let s = &random_schedule(&pool, &mut rng);
            assert_eq!(s.len(), pool.len());
            assert!(is_option_of(&pool, s));
        }
    }

    #[test]
    fn test_crossover_genes_come_from_parents() {
        let pool = pool();
        let mut rng = create_rng(2);
        let a = Schedule::from_choices(&pool, &[0, 0, 0]);
        let b = Schedule::from_choices(&pool, &[1, 1, 1]);

        for _ in 0..50 {
            let child = crossover(&a, &b, &mut rng);
            for i in 0..pool.len() {
                assert!(child.gene(i) == a.gene(i) || child.gene(i) == b.gene(i));
            }
        }
    }

    #[test]
    fn test_mutate_rate_zero_is_identity() {
        let pool = pool();
        let mut rng = create_rng(3);
        let s = Schedule::from_choices(&pool, &[1, 0, 2]);
        let m = mutate(&s, &pool, 0.0, &mut rng);
        assert_eq!(m.genes(), s.genes());
    }

    #[test]
    fn test_mutate_does_not_touch_input() {
        let pool = pool();
        let mut rng = create_rng(4);
        let s = Schedule::from_choices(&pool, &[0, 0, 0]);
        let before = s.clone();
        for _ in 0..20 {
            let m = mutate(&s, &pool, 1.0, &mut rng);
            assert!(is_option_of(&pool, &m));
        }
        assert_eq!(s, before);
    }

    #[test]
    fn test_neighbor_changes_at_most_one_course() {
        let pool = pool();
        let mut rng = create_rng(5);
        let s = Schedule::from_choices(&pool, &[0, 0, 0]);
        for _ in 0..50 {
            let n = random_neighbor(&s, &pool, &mut rng);
            let changed = (0..pool.len()).filter(|&i| n.gene(i) != s.gene(i)).count();
            assert!(changed <= 1);
            assert!(is_option_of(&pool, &n));
        }
        assert_eq!(s.gene(2), &[TimeSlot::new(Day::Thu, 3), TimeSlot::new(Day::Thu, 4)]);
    }

    #[test]
    fn test_neighbor_of_empty_schedule() {
        let pool = CoursePool::new();
        let mut rng = create_rng(6);
        let s = random_schedule(&pool, &mut rng);
        assert!(random_neighbor(&s, &pool, &mut rng).is_empty());
    }
}
