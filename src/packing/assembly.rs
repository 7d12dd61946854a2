use crate::pool::remove_indices;
use crate::types::{
    KnapsackItem, PackError, PackingMetadata, PackingPlan, PackingResult, SelectionDigest,
};

/// Quantization parameters the plan was solved under.
pub(crate) struct Quantization {
    pub gcd: i64,
    pub quantized_capacity: i64,
}

/// Turn per-index decisions into a plan with a single forward pass over the
/// pool, so that `taken` follows pool order regardless of how the decisions
/// were reached.
pub(crate) fn assemble_plan<T: KnapsackItem>(
    pool: &[T],
    capacity: i64,
    quantization: Quantization,
    decisions: &[bool],
) -> PackingPlan {
    debug_assert_eq!(pool.len(), decisions.len());

    let mut taken = Vec::new();
    let mut total_weight = 0;
    let mut total_profit = 0.0;

    for (index, (item, &take)) in pool.iter().zip(decisions).enumerate() {
        if take {
            taken.push(index);
            total_weight += item.weight();
            total_profit += item.profit();
        }
    }

    debug_assert!(total_weight <= capacity, "packing exceeds capacity");

    let metadata = PackingMetadata {
        capacity,
        quantized_capacity: quantization.quantized_capacity,
        weight_gcd: quantization.gcd,
        items_considered: pool.len(),
        items_selected: taken.len(),
        items_excluded: pool.len() - taken.len(),
        total_weight,
        total_profit,
    };

    PackingPlan {
        taken,
        total_weight,
        total_profit,
        metadata,
    }
}

impl PackingPlan {
    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }

    /// Borrow the planned items out of `pool`, leaving it untouched.
    ///
    /// `pool` must be the pool the plan was computed from; a plan that
    /// points past its end is rejected.
    pub fn select<T>(self, pool: &[T]) -> Result<PackingResult<&T>, PackError> {
        self.check_fits(pool.len())?;
        let items: Vec<&T> = self.taken.iter().map(|&i| &pool[i]).collect();

        Ok(PackingResult {
            items,
            total_weight: self.total_weight,
            plan: self,
        })
    }

    /// Move the planned items out of `pool`, preserving the order of what
    /// remains.
    ///
    /// `pool` must be the pool the plan was computed from; a plan that
    /// points past its end is rejected and the pool is left untouched.
    pub fn consume<T>(self, pool: &mut Vec<T>) -> Result<PackingResult<T>, PackError> {
        self.check_fits(pool.len())?;
        // In range of a live Vec, so every index fits in an i64.
        let items = remove_indices(pool, self.taken.iter().map(|&i| i as i64));
        debug_assert_eq!(items.len(), self.taken.len());

        Ok(PackingResult {
            items,
            total_weight: self.total_weight,
            plan: self,
        })
    }

    fn check_fits(&self, pool_len: usize) -> Result<(), PackError> {
        match self.taken.iter().find(|&&i| i >= pool_len) {
            Some(&index) => Err(PackError::PlanMismatch { index, pool_len }),
            None => Ok(()),
        }
    }

    pub fn digest(&self) -> Result<SelectionDigest, serde_json::Error> {
        SelectionDigest::from_plan(self)
    }
}

impl<'a, T: Clone> PackingResult<&'a T> {
    pub fn cloned(self) -> PackingResult<T> {
        PackingResult {
            items: self.items.into_iter().cloned().collect(),
            total_weight: self.total_weight,
            plan: self.plan,
        }
    }
}
