//! LRU (Least Recently Used) page-replacement policy.
//!
//! Evicts the page whose last use lies farthest in the past. The frame set
//! doubles as a recency queue: front = least recently used, back = most
//! recently used.
//!
//! ## Architecture
//!
//! ```text
//!   ┌───────────────────────────────────────────────────────────────┐
//!   │                     LruFrames<P> Layout                       │
//!   │                                                               │
//!   │   order: Vec<P>                    resident: FxHashSet<P>     │
//!   │                                                               │
//!   │   ┌──────────────────────────┐     residency index,           │
//!   │   │ LRU              MRU     │     mirrors `order`            │
//!   │   ├──────────────────────────┤                                │
//!   │   │ [p3] [p1] [p4] [p2]      │                                │
//!   │   │  ↑               ↑       │                                │
//!   │   │ EVICT          insert /  │                                │
//!   │   │                promote   │                                │
//!   │   └──────────────────────────┘                                │
//!   └───────────────────────────────────────────────────────────────┘
//!
//! Reference Flow
//! ──────────────
//!
//!   reference(page):
//!     hit   → remove page from its position, re-append at MRU end
//!     fault → evict front (LRU) if full, append page at MRU end
//! ```
//!
//! Insertion-on-fault and promotion-on-hit both append to the back, so the
//! front always holds the true LRU candidate.
//!
//! ## Operations
//!
//! | Operation   | Time   | Notes                                      |
//! |-------------|--------|--------------------------------------------|
//! | `reference` | O(cap) | Hit promotion scans the recency order      |
//! | `snapshot`  | O(cap) | Owned copy, LRU first                      |
//! | `contains`  | O(1)   | Residency-index lookup                     |
//!
//! The linear promotion scan is deliberate: frame counts in a
//! page-replacement simulation are small, and the ordered `Vec` is exactly
//! the snapshot the trace records. A position index would change nothing
//! observable.
//!
//! ## Example Usage
//!
//! ```
//! use pagesim::policy::lru::LruFrames;
//! use pagesim::traits::ReplacementPolicy;
//!
//! let mut frames = LruFrames::new(3).unwrap();
//! for page in [1, 2, 3] {
//!     frames.reference(&page, &[]);
//! }
//!
//! // Hitting 1 promotes it, so 2 is now the LRU candidate.
//! frames.reference(&1, &[]);
//! let outcome = frames.reference(&4, &[]);
//! assert_eq!(outcome.evicted(), Some(&2));
//! assert_eq!(frames.snapshot(), vec![3, 1, 4]);
//! ```

use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::error::InvalidCapacity;
use crate::traits::{RefOutcome, ReplacementPolicy};

/// LRU frame set: recency-ordered pages with a residency index.
///
/// Snapshot order is recency order, least-recently-used first.
///
/// # Example
///
/// ```
/// use pagesim::policy::lru::LruFrames;
/// use pagesim::traits::ReplacementPolicy;
///
/// let mut frames = LruFrames::new(2).unwrap();
/// frames.reference(&1, &[]);
/// frames.reference(&2, &[]);
/// frames.reference(&1, &[]); // promote
/// assert_eq!(frames.snapshot(), vec![2, 1]);
/// ```
pub struct LruFrames<P>
where
    P: Clone + Eq + Hash,
{
    /// Resident pages in recency order: front = LRU, back = MRU.
    order: Vec<P>,
    /// Residency index; mirrors `order` exactly.
    resident: FxHashSet<P>,
    /// Frame capacity, at least 1.
    capacity: usize,
}

impl<P> LruFrames<P>
where
    P: Clone + Eq + Hash,
{
    /// Creates an empty LRU frame set.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCapacity`] if `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use pagesim::policy::lru::LruFrames;
    ///
    /// assert!(LruFrames::<u32>::new(4).is_ok());
    /// assert!(LruFrames::<u32>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, InvalidCapacity> {
        if capacity == 0 {
            return Err(InvalidCapacity::new(capacity));
        }
        Ok(Self {
            order: Vec::with_capacity(capacity),
            resident: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
            capacity,
        })
    }

    /// Moves an already-resident page to the MRU end.
    fn promote(&mut self, page: &P) {
        if let Some(pos) = self.order.iter().position(|p| p == page) {
            let page = self.order.remove(pos);
            self.order.push(page);
        }
    }

    #[cfg(debug_assertions)]
    fn validate_invariants(&self) {
        debug_assert_eq!(
            self.order.len(),
            self.resident.len(),
            "recency order and residency index have different sizes"
        );
        debug_assert!(
            self.order.len() <= self.capacity,
            "frame set exceeds capacity"
        );
        for page in &self.order {
            debug_assert!(
                self.resident.contains(page),
                "ordered page missing from residency index"
            );
        }
    }
}

impl<P> ReplacementPolicy<P> for LruFrames<P>
where
    P: Clone + Eq + Hash,
{
    fn reference(&mut self, page: &P, _future: &[P]) -> RefOutcome<P> {
        if self.resident.contains(page) {
            // LRU hit rule: promote to the most-recently-used end.
            self.promote(page);

            #[cfg(debug_assertions)]
            self.validate_invariants();

            return RefOutcome::Hit;
        }

        let mut evicted = None;
        if self.order.len() == self.capacity {
            let victim = self.order.remove(0);
            self.resident.remove(&victim);
            evicted = Some(victim);
        }

        self.order.push(page.clone());
        self.resident.insert(page.clone());

        #[cfg(debug_assertions)]
        self.validate_invariants();

        RefOutcome::Fault { evicted }
    }

    #[inline]
    fn snapshot(&self) -> Vec<P> {
        self.order.clone()
    }

    #[inline]
    fn contains(&self, page: &P) -> bool {
        self.resident.contains(page)
    }

    #[inline]
    fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<P> std::fmt::Debug for LruFrames<P>
where
    P: Clone + Eq + Hash + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LruFrames")
            .field("capacity", &self.capacity)
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}
