//! # Replacement-Policy Trait Seam
//!
//! This module defines the single trait shared by the three frame-set
//! implementations (FIFO, LRU, OPT), so the simulation driver, the lazy
//! [`Steps`](crate::sim::Steps) iterator and the [`Policy`](crate::sim::Policy)
//! enum dispatch are written once against one interface.
//!
//! ## Architecture
//!
//! ```text
//!                  ┌──────────────────────────────────────────────┐
//!                  │          ReplacementPolicy<P>                │
//!                  │                                              │
//!                  │  reference(&mut, &P, future) → RefOutcome<P> │
//!                  │  snapshot(&) → Vec<P>                        │
//!                  │  contains(&, &P) → bool                      │
//!                  │  len(&) → usize                              │
//!                  │  capacity(&) → usize                         │
//!                  └──────────────────┬───────────────────────────┘
//!                                     │
//!            ┌────────────────────────┼────────────────────────┐
//!            ▼                        ▼                        ▼
//!   ┌─────────────────┐     ┌─────────────────┐     ┌─────────────────┐
//!   │ FifoFrames<P>   │     │ LruFrames<P>    │     │ OptFrames<P>    │
//!   │                 │     │                 │     │                 │
//!   │ insertion queue │     │ recency order   │     │ entry order +   │
//!   │ hits: no-op     │     │ hits: promote   │     │ lookahead evict │
//!   │ ignores future  │     │ ignores future  │     │ REQUIRES future │
//!   └─────────────────┘     └─────────────────┘     └─────────────────┘
//! ```
//!
//! ## Design Notes
//!
//! - `reference` takes the **unprocessed suffix** of the reference sequence
//!   (exclusive of the current page). Only OPT reads it; FIFO and LRU accept
//!   and ignore it. Threading the suffix through the trait keeps the driver
//!   policy-agnostic instead of special-casing the clairvoyant policy.
//! - `snapshot` returns an **owned, ordered copy** of the resident pages.
//!   Trace entries must not alias live state, so the copy happens at the
//!   seam rather than in the driver.
//! - Frame-set types are **not thread-safe**; a simulation call owns its
//!   frame set exclusively for its duration.

use std::hash::Hash;

/// Result of processing one page reference against a frame set.
///
/// A `Fault` carries the evicted page when the frame set was full, so
/// surfaces can display replacement decisions step by step.
///
/// # Example
///
/// ```
/// use pagesim::policy::fifo::FifoFrames;
/// use pagesim::traits::{RefOutcome, ReplacementPolicy};
///
/// let mut frames = FifoFrames::new(1).unwrap();
/// assert!(frames.reference(&1, &[]).is_fault());
/// assert_eq!(frames.reference(&1, &[]), RefOutcome::Hit);
/// assert_eq!(
///     frames.reference(&2, &[]),
///     RefOutcome::Fault { evicted: Some(1) }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefOutcome<P> {
    /// The page was already resident. No fault is counted.
    Hit,
    /// The page was missing and has been inserted; `evicted` is the page
    /// removed to make room, or `None` when the frame set had spare room.
    Fault {
        /// Page removed by the policy's eviction rule, if any.
        evicted: Option<P>,
    },
}

impl<P> RefOutcome<P> {
    /// Returns `true` if this outcome is a page fault.
    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, RefOutcome::Fault { .. })
    }

    /// Returns the evicted page, if this outcome evicted one.
    #[inline]
    pub fn evicted(&self) -> Option<&P> {
        match self {
            RefOutcome::Fault {
                evicted: Some(page),
            } => Some(page),
            _ => None,
        }
    }
}

/// Interface shared by all frame-set (eviction policy) implementations.
///
/// A frame set holds at most `capacity` distinct pages. Processing a
/// reference either hits (page resident) or faults (page inserted, possibly
/// evicting one resident page per the policy's rule).
///
/// # Type Parameters
///
/// - `P`: Page identifier, `Clone + Eq + Hash`
///
/// # Example
///
/// ```
/// use pagesim::policy::lru::LruFrames;
/// use pagesim::traits::ReplacementPolicy;
///
/// fn replay<F: ReplacementPolicy<u32>>(frames: &mut F, refs: &[u32]) -> usize {
///     let mut faults = 0;
///     for (i, page) in refs.iter().enumerate() {
///         if frames.reference(page, &refs[i + 1..]).is_fault() {
///             faults += 1;
///         }
///     }
///     faults
/// }
///
/// let mut frames = LruFrames::new(2).unwrap();
/// assert_eq!(replay(&mut frames, &[1, 2, 1, 2, 1, 2]), 2);
/// ```
pub trait ReplacementPolicy<P>
where
    P: Clone + Eq + Hash,
{
    /// Processes one page reference.
    ///
    /// `future` is the not-yet-processed suffix of the reference sequence,
    /// excluding `page` itself. Policies without lookahead ignore it.
    fn reference(&mut self, page: &P, future: &[P]) -> RefOutcome<P>;

    /// Returns an owned copy of the resident pages in policy order.
    fn snapshot(&self) -> Vec<P>;

    /// Returns `true` if the page is currently resident.
    fn contains(&self, page: &P) -> bool;

    /// Returns the number of resident pages.
    fn len(&self) -> usize;

    /// Returns `true` if no pages are resident.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the frame capacity. Always at least 1.
    fn capacity(&self) -> usize;
}
