//! OPT (Optimal, a.k.a. Belady / MIN) page-replacement policy.
//!
//! Clairvoyant eviction: on a fault with a full frame set, evict the
//! resident page whose next use lies farthest in the future. A page never
//! referenced again has infinite distance and is the preferred victim. No
//! online policy can fault less on the same input, which makes OPT the
//! baseline the other policies are measured against.
//!
//! ## Architecture
//!
//! ```text
//!   reference sequence:  ... [current] │ [f0] [f1] [f2] [f3] [f4] ...
//!                                      │ ◄──────── future ─────────►
//!                                      │
//!   frames: [A] [B] [C]                │   next_use(A) = 4
//!            │   │   │                 │   next_use(B) = 1
//!            │   │   └── next use at 1 │   next_use(C) = ∞  ◄─ EVICT
//!            │   └────── next use at 4 │
//!            └────────── never again   │
//! ```
//!
//! ## Tie-break
//!
//! When several resident pages share the maximal distance (most commonly:
//! several pages are never used again), the victim is the **first such page
//! in current memory order**. The scan keeps a strictly-greater comparison,
//! so the earliest maximal entry wins. Deterministic and documented so
//! independent implementations agree on identical input.
//!
//! ## Complexity
//!
//! The lookahead scan is O(capacity · remaining) per fault, O(N² · capacity)
//! overall. Fine at simulation scale; a precomputed next-occurrence table
//! would not change any observable output.
//!
//! ## Example Usage
//!
//! ```
//! use pagesim::policy::opt::OptFrames;
//! use pagesim::traits::ReplacementPolicy;
//!
//! let mut frames = OptFrames::new(2).unwrap();
//! frames.reference(&1, &[2, 3, 1]);
//! frames.reference(&2, &[3, 1]);
//!
//! // 3 faults; 2 is never used again while 1 is, so 2 is evicted.
//! let outcome = frames.reference(&3, &[1]);
//! assert_eq!(outcome.evicted(), Some(&2));
//! assert_eq!(frames.snapshot(), vec![1, 3]);
//! ```

use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::error::InvalidCapacity;
use crate::traits::{RefOutcome, ReplacementPolicy};

/// Distance to a page's next occurrence in the unprocessed suffix.
///
/// `usize::MAX` stands in for "never used again"; real indices are bounded
/// by the sequence length, far below it.
#[inline]
fn next_use<P: PartialEq>(page: &P, future: &[P]) -> usize {
    future
        .iter()
        .position(|upcoming| upcoming == page)
        .unwrap_or(usize::MAX)
}

/// OPT frame set: entry-ordered pages evicted by farthest next use.
///
/// Snapshot order is entry order (order pages entered memory), kept for
/// trace readability; OPT's decisions never depend on it beyond the
/// documented tie-break.
///
/// # Example
///
/// ```
/// use pagesim::policy::opt::OptFrames;
/// use pagesim::traits::ReplacementPolicy;
///
/// let mut frames = OptFrames::new(3).unwrap();
/// frames.reference(&1, &[2, 3, 4, 1]);
/// frames.reference(&2, &[3, 4, 1]);
/// frames.reference(&3, &[4, 1]);
///
/// // Full. Next uses: 1 → index 1, 2 → never, 3 → never.
/// // 2 and 3 tie at infinity; 2 is first in memory order.
/// let outcome = frames.reference(&4, &[1]);
/// assert_eq!(outcome.evicted(), Some(&2));
/// ```
pub struct OptFrames<P>
where
    P: Clone + Eq + Hash,
{
    /// Resident pages in the order they entered memory.
    frames: Vec<P>,
    /// Residency index; mirrors `frames` exactly.
    resident: FxHashSet<P>,
    /// Frame capacity, at least 1.
    capacity: usize,
}

impl<P> OptFrames<P>
where
    P: Clone + Eq + Hash,
{
    /// Creates an empty OPT frame set.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCapacity`] if `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use pagesim::policy::opt::OptFrames;
    ///
    /// assert!(OptFrames::<u32>::new(3).is_ok());
    /// assert!(OptFrames::<u32>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, InvalidCapacity> {
        if capacity == 0 {
            return Err(InvalidCapacity::new(capacity));
        }
        Ok(Self {
            frames: Vec::with_capacity(capacity),
            resident: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
            capacity,
        })
    }

    /// Index of the eviction victim: the resident page with the farthest
    /// next use, first-in-memory-order on ties.
    ///
    /// Only called with a non-empty frame set.
    fn victim_index(&self, future: &[P]) -> usize {
        let mut victim = 0;
        let mut farthest = 0;
        for (idx, page) in self.frames.iter().enumerate() {
            let distance = next_use(page, future);
            // Strictly greater keeps the first maximal page on ties.
            if idx == 0 || distance > farthest {
                victim = idx;
                farthest = distance;
            }
        }
        victim
    }

    #[cfg(debug_assertions)]
    fn validate_invariants(&self) {
        debug_assert_eq!(
            self.frames.len(),
            self.resident.len(),
            "frame order and residency index have different sizes"
        );
        debug_assert!(
            self.frames.len() <= self.capacity,
            "frame set exceeds capacity"
        );
        for page in &self.frames {
            debug_assert!(
                self.resident.contains(page),
                "framed page missing from residency index"
            );
        }
    }
}

impl<P> ReplacementPolicy<P> for OptFrames<P>
where
    P: Clone + Eq + Hash,
{
    fn reference(&mut self, page: &P, future: &[P]) -> RefOutcome<P> {
        if self.resident.contains(page) {
            // OPT hit rule: no reordering; every eviction recomputes from
            // the full lookahead anyway.
            return RefOutcome::Hit;
        }

        let mut evicted = None;
        if self.frames.len() == self.capacity {
            let victim = self.frames.remove(self.victim_index(future));
            self.resident.remove(&victim);
            evicted = Some(victim);
        }

        self.frames.push(page.clone());
        self.resident.insert(page.clone());

        #[cfg(debug_assertions)]
        self.validate_invariants();

        RefOutcome::Fault { evicted }
    }

    #[inline]
    fn snapshot(&self) -> Vec<P> {
        self.frames.clone()
    }

    #[inline]
    fn contains(&self, page: &P) -> bool {
        self.resident.contains(page)
    }

    #[inline]
    fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<P> std::fmt::Debug for OptFrames<P>
where
    P: Clone + Eq + Hash + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptFrames")
            .field("capacity", &self.capacity)
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==============================================
    // Lookahead Distances
    // ==============================================

    mod lookahead {
        use super::*;

        #[test]
        fn next_use_finds_first_occurrence() {
            assert_eq!(next_use(&3, &[1, 3, 2, 3]), 1);
            assert_eq!(next_use(&1, &[1, 3, 2, 3]), 0);
        }

        #[test]
        fn next_use_of_absent_page_is_infinite() {
            assert_eq!(next_use(&9, &[1, 2, 3]), usize::MAX);
            assert_eq!(next_use(&9, &[]), usize::MAX);
        }
    }

    // ==============================================
    // Eviction Decisions
    // ==============================================

    mod eviction {
        use super::*;

        #[test]
        fn evicts_page_used_farthest_in_future() {
            let mut frames = OptFrames::new(3).unwrap();
            frames.reference(&1, &[]);
            frames.reference(&2, &[]);
            frames.reference(&3, &[]);

            // Next uses: 1 → 0, 2 → 1, 3 → 5. Evict 3.
            let outcome = frames.reference(&4, &[1, 2, 5, 1, 2, 3]);
            assert_eq!(outcome.evicted(), Some(&3));
            assert_eq!(frames.snapshot(), vec![1, 2, 4]);
        }

        #[test]
        fn never_used_again_beats_distant_use() {
            let mut frames = OptFrames::new(2).unwrap();
            frames.reference(&1, &[]);
            frames.reference(&2, &[]);

            // 1 recurs eventually, 2 never does.
            let outcome = frames.reference(&3, &[5, 6, 7, 1]);
            assert_eq!(outcome.evicted(), Some(&2));
        }

        #[test]
        fn hit_neither_evicts_nor_reorders() {
            let mut frames = OptFrames::new(2).unwrap();
            frames.reference(&1, &[]);
            frames.reference(&2, &[]);

            assert_eq!(frames.reference(&1, &[2, 1]), RefOutcome::Hit);
            assert_eq!(frames.snapshot(), vec![1, 2]);
        }

        #[test]
        fn empty_future_evicts_first_in_memory_order() {
            let mut frames = OptFrames::new(2).unwrap();
            frames.reference(&1, &[]);
            frames.reference(&2, &[]);

            // Nothing recurs; everything ties at infinity.
            let outcome = frames.reference(&3, &[]);
            assert_eq!(outcome.evicted(), Some(&1));
        }
    }

    // ==============================================
    // Tie-break Determinism
    // ==============================================

    mod tie_break {
        use super::*;

        #[test]
        fn first_maximal_page_in_memory_order_wins() {
            let mut frames = OptFrames::new(3).unwrap();
            frames.reference(&1, &[]);
            frames.reference(&2, &[]);
            frames.reference(&3, &[]);

            // 1 recurs; 2 and 3 tie at infinity. 2 entered memory first.
            let outcome = frames.reference(&4, &[1]);
            assert_eq!(outcome.evicted(), Some(&2));
        }

        #[test]
        fn later_infinite_distance_does_not_displace_first() {
            let mut frames = OptFrames::new(3).unwrap();
            frames.reference(&1, &[]);
            frames.reference(&2, &[]);
            frames.reference(&3, &[]);

            // 2 and 3 are both never used again; the scan must not let the
            // later one win the tie.
            let outcome = frames.reference(&4, &[1, 1, 1]);
            assert_eq!(outcome.evicted(), Some(&2));
        }

        #[test]
        fn repeated_runs_pick_the_same_victim() {
            for _ in 0..20 {
                let mut frames = OptFrames::new(3).unwrap();
                frames.reference(&10, &[]);
                frames.reference(&20, &[]);
                frames.reference(&30, &[]);
                assert_eq!(frames.reference(&40, &[10]).evicted(), Some(&20));
            }
        }
    }

    // ==============================================
    // Edge Cases
    // ==============================================

    mod edge_cases {
        use super::*;

        #[test]
        fn zero_capacity_is_rejected() {
            assert!(OptFrames::<u32>::new(0).is_err());
        }

        #[test]
        fn single_frame_keeps_only_current_page() {
            let mut frames = OptFrames::new(1).unwrap();
            frames.reference(&1, &[2, 1]);
            assert_eq!(frames.reference(&2, &[1]).evicted(), Some(&1));
            assert_eq!(frames.snapshot(), vec![2]);
        }

        #[test]
        fn fills_before_evicting() {
            let mut frames = OptFrames::new(3).unwrap();
            for page in [1, 2, 3] {
                assert_eq!(
                    frames.reference(&page, &[]),
                    RefOutcome::Fault { evicted: None }
                );
            }
            assert_eq!(frames.len(), 3);
        }
    }
}
