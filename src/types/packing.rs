use serde::{Deserialize, Serialize};

use crate::math::GcdError;

/// What happens to the caller's pool once a selection has been made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackMode {
    /// Selected items are moved out of the pool into the result.
    #[default]
    Consume,
    /// The pool is left untouched; the result holds clones of its entries.
    Replenish,
}

/// Metadata describing the outcome of a packing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingMetadata {
    pub capacity: i64,
    /// Largest multiple of `weight_gcd` not exceeding `capacity`.
    pub quantized_capacity: i64,
    pub weight_gcd: i64,

    pub items_considered: usize,
    pub items_selected: usize,
    pub items_excluded: usize,

    pub total_weight: i64,
    pub total_profit: f64,
}

/// The decision half of a packing: which pool positions to take.
///
/// A plan is computed without touching the pool. Applying it is a separate,
/// explicit step (`select` or `consume`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingPlan {
    /// Taken pool indices, strictly ascending.
    pub taken: Vec<usize>,
    pub total_weight: i64,
    pub total_profit: f64,
    pub metadata: PackingMetadata,
}

/// The items placed in the knapsack, in original pool order.
#[derive(Debug, Clone)]
pub struct PackingResult<T> {
    pub items: Vec<T>,
    pub total_weight: i64,
    pub plan: PackingPlan,
}

impl<T> PackingResult<T> {
    pub fn total_weight(&self) -> i64 {
        self.total_weight
    }

    pub fn total_profit(&self) -> f64 {
        self.plan.total_profit
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PackError {
    #[error("Invalid capacity: {0} (must be >= 0)")]
    NegativeCapacity(i64),

    #[error("Invalid weight {weight} for item at index {index} (must be > 0)")]
    NonPositiveWeight { index: usize, weight: i64 },

    #[error("Capacity {capacity} with weight gcd {gcd} is too large to tabulate")]
    CapacityTooLarge { capacity: i64, gcd: i64 },

    #[error("Plan takes index {index} but the pool has {pool_len} items")]
    PlanMismatch { index: usize, pool_len: usize },

    #[error(transparent)]
    Gcd(#[from] GcdError),
}
