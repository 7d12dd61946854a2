//! Deterministic 0/1 knapsack packing.
//!
//! `knapsack-core` selects the profit-maximizing subset of a candidate pool
//! under an integer weight budget. The dynamic-programming table only samples
//! multiples of the gcd of the item weights, which shrinks it without losing
//! any reachable solution. Packing either consumes the selected items from
//! the caller's pool or leaves the pool as it was.
//!
//! Identical inputs always produce identical selections: among equally
//! profitable alternatives the earlier pool entries win.

pub mod math;
pub mod packing;
pub mod pool;
pub mod types;

pub use packing::{pack, Packer, PackerConfig};
pub use types::{KnapsackItem, PackError, PackMode, PackingPlan, PackingResult, WeightedItem};
