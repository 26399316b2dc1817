//! Random reference-string generation.
//!
//! Produces the uniform random workloads surfaces offer as an alternative to
//! a hand-typed reference string. The caller supplies the RNG, so tests and
//! benches stay reproducible with a seeded [`StdRng`](rand::rngs::StdRng)
//! while the engine itself remains fully deterministic.

use std::ops::RangeInclusive;

use rand::Rng;

/// Generates `len` page references drawn uniformly from `pages` (inclusive
/// on both ends).
///
/// # Example
///
/// ```
/// use pagesim::workload::random_reference_string;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let refs = random_reference_string(&mut rng, 16, 0..=9);
/// assert_eq!(refs.len(), 16);
/// assert!(refs.iter().all(|page| (0..=9).contains(page)));
/// ```
pub fn random_reference_string<R>(rng: &mut R, len: usize, pages: RangeInclusive<u32>) -> Vec<u32>
where
    R: Rng + ?Sized,
{
    (0..len).map(|_| rng.gen_range(pages.clone())).collect()
}
