//! Frame-set implementations, one module per eviction policy.
//!
//! | Policy | Module    | Eviction basis          | Hit rule        | Lookahead |
//! |--------|-----------|-------------------------|-----------------|-----------|
//! | FIFO   | [`fifo`]  | Insertion order         | No reordering   | No        |
//! | LRU    | [`lru`]   | Least recent use        | Promote to MRU  | No        |
//! | OPT    | [`opt`]   | Farthest next use       | No reordering   | Yes       |
//!
//! All three implement [`ReplacementPolicy`](crate::traits::ReplacementPolicy)
//! and are normally driven through [`simulate`](crate::sim::simulate) rather
//! than used directly.

pub mod fifo;
pub mod lru;
pub mod opt;

pub use fifo::FifoFrames;
pub use lru::LruFrames;
pub use opt::OptFrames;
