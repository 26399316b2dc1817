//! FIFO (First In, First Out) page-replacement policy.
//!
//! Evicts the page that entered memory earliest. Hits do not change
//! eviction priority, so the frame set is a plain insertion queue:
//!
//! ```text
//!   queue: [A] ─ [B] ─ [C] ─ [D]
//!           ↑                 ↑
//!         oldest            newest
//!         EVICT             insert
//! ```
//!
//! ## Operations
//!
//! | Operation   | Time   | Notes                                  |
//! |-------------|--------|----------------------------------------|
//! | `reference` | O(1)*  | *Amortized; hash probe + queue ends    |
//! | `snapshot`  | O(cap) | Owned copy in insertion order          |
//! | `contains`  | O(1)   | Residency-index lookup                 |
//!
//! ## Example Usage
//!
//! ```
//! use pagesim::policy::fifo::FifoFrames;
//! use pagesim::traits::ReplacementPolicy;
//!
//! let mut frames = FifoFrames::new(3).unwrap();
//! for page in [1, 2, 3] {
//!     frames.reference(&page, &[]);
//! }
//!
//! // Hitting 1 does not protect it; FIFO ignores recency.
//! frames.reference(&1, &[]);
//! let outcome = frames.reference(&4, &[]);
//! assert_eq!(outcome.evicted(), Some(&1));
//! ```

use std::collections::VecDeque;
use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::error::InvalidCapacity;
use crate::traits::{RefOutcome, ReplacementPolicy};

/// FIFO frame set: insertion-ordered queue with a residency index.
///
/// Snapshot order is insertion order, oldest first.
///
/// # Example
///
/// ```
/// use pagesim::policy::fifo::FifoFrames;
/// use pagesim::traits::ReplacementPolicy;
///
/// let mut frames = FifoFrames::new(2).unwrap();
/// frames.reference(&10, &[]);
/// frames.reference(&20, &[]);
/// assert_eq!(frames.snapshot(), vec![10, 20]);
/// ```
pub struct FifoFrames<P>
where
    P: Clone + Eq + Hash,
{
    /// Resident pages in insertion order, oldest at the front.
    queue: VecDeque<P>,
    /// Residency index; mirrors `queue` exactly.
    resident: FxHashSet<P>,
    /// Frame capacity, at least 1.
    capacity: usize,
}

impl<P> FifoFrames<P>
where
    P: Clone + Eq + Hash,
{
    /// Creates an empty FIFO frame set.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCapacity`] if `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use pagesim::policy::fifo::FifoFrames;
    ///
    /// assert!(FifoFrames::<u32>::new(3).is_ok());
    /// assert!(FifoFrames::<u32>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, InvalidCapacity> {
        if capacity == 0 {
            return Err(InvalidCapacity::new(capacity));
        }
        Ok(Self {
            queue: VecDeque::with_capacity(capacity),
            resident: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
            capacity,
        })
    }

    #[cfg(debug_assertions)]
    fn validate_invariants(&self) {
        debug_assert_eq!(
            self.queue.len(),
            self.resident.len(),
            "queue and residency index have different sizes"
        );
        debug_assert!(
            self.queue.len() <= self.capacity,
            "frame set exceeds capacity"
        );
        for page in &self.queue {
            debug_assert!(
                self.resident.contains(page),
                "queued page missing from residency index"
            );
        }
    }
}

impl<P> ReplacementPolicy<P> for FifoFrames<P>
where
    P: Clone + Eq + Hash,
{
    fn reference(&mut self, page: &P, _future: &[P]) -> RefOutcome<P> {
        if self.resident.contains(page) {
            // FIFO hit rule: no reordering.
            return RefOutcome::Hit;
        }

        let mut evicted = None;
        if self.queue.len() == self.capacity {
            if let Some(victim) = self.queue.pop_front() {
                self.resident.remove(&victim);
                evicted = Some(victim);
            }
        }

        self.queue.push_back(page.clone());
        self.resident.insert(page.clone());

        #[cfg(debug_assertions)]
        self.validate_invariants();

        RefOutcome::Fault { evicted }
    }

    #[inline]
    fn snapshot(&self) -> Vec<P> {
        self.queue.iter().cloned().collect()
    }

    #[inline]
    fn contains(&self, page: &P) -> bool {
        self.resident.contains(page)
    }

    #[inline]
    fn len(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<P> std::fmt::Debug for FifoFrames<P>
where
    P: Clone + Eq + Hash + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FifoFrames")
            .field("capacity", &self.capacity)
            .field("queue", &self.queue)
            .finish_non_exhaustive()
    }
}
