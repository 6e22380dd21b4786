//! Generic gene-vector operators.
//!
//! These work on any `&[G]` gene vector whose positions are aligned
//! across individuals: position `i` always means the same decision
//! variable.
//!
//! # Crossover
//!
//! - [`uniform_crossover`]: each position taken from either parent with
//!   equal probability, independently of every other position
//!
//! # Mutation
//!
//! - [`resample_mutation`]: each position independently redrawn from
//!   scratch with a fixed probability, ignoring its current value

use rand::Rng;

/// Uniform (discrete) recombination.
///
/// Draws one coin per position; there is no linkage between positions.
///
/// # Panics
/// Panics if the parents differ in length.
///
/// # Examples
///
/// ```
/// use u_timetable::ga::operators::uniform_crossover;
/// use u_timetable::random::create_rng;
///
/// let mut rng = create_rng(1);
/// let child = uniform_crossover(&[0, 0, 0, 0], &[1, 1, 1, 1], &mut rng);
/// assert_eq!(child.len(), 4);
/// ```
pub fn uniform_crossover<G: Clone, R: Rng>(parent1: &[G], parent2: &[G], rng: &mut R) -> Vec<G> {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have the same gene layout"
    );

    parent1
        .iter()
        .zip(parent2)
        .map(|(a, b)| if rng.random_bool(0.5) { a.clone() } else { b.clone() })
        .collect()
}

/// Redraws each gene with probability `rate`.
///
/// `draw(i, rng)` produces a fresh value for position `i`; it is called
/// only for the positions selected for mutation. Returns the number of
/// redrawn positions.
pub fn resample_mutation<G, R, F>(genes: &mut [G], rate: f64, rng: &mut R, mut draw: F) -> usize
where
    R: Rng,
    F: FnMut(usize, &mut R) -> G,
{
    let mut mutated = 0;
    for (i, gene) in genes.iter_mut().enumerate() {
        if rng.random::<f64>() < rate {
            *gene = draw(i, rng);
            mutated += 1;
        }
    }
    mutated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_uniform_crossover_takes_genes_from_parents() {
        let mut rng = create_rng(42);
        let p1 = vec![0u8; 64];
        let p2 = vec![1u8; 64];
        let child = uniform_crossover(&p1, &p2, &mut rng);

        assert_eq!(child.len(), 64);
        let from_p2 = child.iter().filter(|&&g| g == 1).count();
        assert!(from_p2 > 10 && from_p2 < 54, "expected a mix, got {from_p2}");
    }

    #[test]
    fn test_uniform_crossover_identical_parents() {
        let mut rng = create_rng(42);
        let p = vec![3, 1, 4, 1, 5];
        assert_eq!(uniform_crossover(&p, &p, &mut rng), p);
    }

    #[test]
    #[should_panic(expected = "same gene layout")]
    fn test_uniform_crossover_length_mismatch() {
        let mut rng = create_rng(42);
        uniform_crossover(&[1, 2], &[1], &mut rng);
    }

    #[test]
    fn test_resample_rate_zero_and_one() {
        let mut rng = create_rng(42);
        let mut genes = vec![0usize; 10];

        assert_eq!(resample_mutation(&mut genes, 0.0, &mut rng, |_, _| 9), 0);
        assert!(genes.iter().all(|&g| g == 0));

        assert_eq!(resample_mutation(&mut genes, 1.0, &mut rng, |i, _| i), 10);
        assert_eq!(genes, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_resample_rate_is_per_gene() {
        let mut rng = create_rng(7);
        let mut genes = vec![0u32; 10_000];
        let n = resample_mutation(&mut genes, 0.1, &mut rng, |_, _| 1);
        assert!((800..1200).contains(&n), "expected ~1000 mutations, got {n}");
    }
}
