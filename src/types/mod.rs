pub mod identifiers;
pub mod item;
pub mod packing;

pub use identifiers::SelectionDigest;
pub use item::{KnapsackItem, WeightedItem};
pub use packing::{PackError, PackMode, PackingMetadata, PackingPlan, PackingResult};
