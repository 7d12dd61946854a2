use std::rc::Rc;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Anything that can be packed: an integer weight in the same units as the
/// knapsack capacity, and a real-valued profit.
///
/// The engine only ever reads these two accessors. Weights must be strictly
/// positive; packing rejects a pool containing anything else.
pub trait KnapsackItem {
    fn weight(&self) -> i64;
    fn profit(&self) -> f64;
}

impl<T: KnapsackItem + ?Sized> KnapsackItem for &T {
    fn weight(&self) -> i64 {
        (**self).weight()
    }

    fn profit(&self) -> f64 {
        (**self).profit()
    }
}

impl<T: KnapsackItem + ?Sized> KnapsackItem for Box<T> {
    fn weight(&self) -> i64 {
        (**self).weight()
    }

    fn profit(&self) -> f64 {
        (**self).profit()
    }
}

impl<T: KnapsackItem + ?Sized> KnapsackItem for Rc<T> {
    fn weight(&self) -> i64 {
        (**self).weight()
    }

    fn profit(&self) -> f64 {
        (**self).profit()
    }
}

impl<T: KnapsackItem + ?Sized> KnapsackItem for Arc<T> {
    fn weight(&self) -> i64 {
        (**self).weight()
    }

    fn profit(&self) -> f64 {
        (**self).profit()
    }
}

/// A plain labelled item for callers that have no domain type of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedItem {
    pub label: String,
    pub weight: i64,
    pub profit: f64,
}

impl WeightedItem {
    pub fn new(label: impl Into<String>, weight: i64, profit: f64) -> Self {
        Self {
            label: label.into(),
            weight,
            profit,
        }
    }

    /// An item whose profit equals its weight (e.g. volume packed into a truck).
    pub fn uniform(label: impl Into<String>, weight: i64) -> Self {
        Self::new(label, weight, weight as f64)
    }
}

impl KnapsackItem for WeightedItem {
    fn weight(&self) -> i64 {
        self.weight
    }

    fn profit(&self) -> f64 {
        self.profit
    }
}
