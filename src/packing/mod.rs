mod assembly;
pub mod config;
mod table;

use crate::math::gcd_all;
use crate::types::{KnapsackItem, PackError, PackMode, PackingPlan, PackingResult};
use assembly::{assemble_plan, Quantization};
pub use config::PackerConfig;
use table::DpTable;

/// 0/1 knapsack packer.
///
/// Every call is independent: the DP table is built for that call and
/// dropped before it returns. The only side effect is the removal of
/// selected items from the pool under [`PackMode::Consume`].
#[derive(Debug, Clone, Default)]
pub struct Packer {
	config: PackerConfig,
}

impl Packer {
	pub fn new(config: PackerConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &PackerConfig {
		&self.config
	}

	/// Compute the profit-maximizing subset of `pool` whose total weight does
	/// not exceed `capacity`, without touching the pool.
	pub fn plan<T: KnapsackItem>(&self, pool: &[T], capacity: i64) -> Result<PackingPlan, PackError> {
		// 0. Validation, before anything is allocated
		if capacity < 0 {
			return Err(PackError::NegativeCapacity(capacity));
		}
		if let Some((index, weight)) = pool
			.iter()
			.map(|item| item.weight())
			.enumerate()
			.find(|&(_, weight)| weight <= 0)
		{
			return Err(PackError::NonPositiveWeight { index, weight });
		}

		if pool.is_empty() || capacity == 0 {
			tracing::debug!(items = pool.len(), capacity, "nothing to pack");
			let quantization = Quantization {
				gcd: 0,
				quantized_capacity: 0,
			};
			return Ok(assemble_plan(pool, capacity, quantization, &vec![false; pool.len()]));
		}

		// 1. Quantization
		// Every weight is a positive i64, so the gcd is at most the smallest weight.
		let gcd = gcd_all(pool.iter().map(|item| item.weight()))? as i64;
		let quantized_capacity = gcd * (capacity / gcd);

		// No selection outweighs the whole pool, and every budget at or above
		// that total yields the same decisions, so the table stops there.
		let pool_weight = pool
			.iter()
			.try_fold(0_i64, |acc, item| acc.checked_add(item.weight()))
			.unwrap_or(i64::MAX);
		let budget_steps = capacity.min(pool_weight) / gcd;

		let columns = usize::try_from(budget_steps)
			.ok()
			.and_then(|steps| steps.checked_add(1))
			.filter(|&columns| columns.checked_mul(pool.len() + 1).is_some())
			.ok_or(PackError::CapacityTooLarge { capacity, gcd })?;

		tracing::debug!(
			items = pool.len(),
			capacity,
			gcd,
			quantized_capacity,
			columns,
			"packing"
		);

		let steps: Vec<usize> = pool
			.iter()
			.map(|item| usize::try_from(item.weight() / gcd).unwrap_or(usize::MAX))
			.collect();
		let profits: Vec<f64> = pool.iter().map(|item| item.profit()).collect();

		// 2. Table
		let table = DpTable::build(&steps, &profits, columns).map_err(|err| {
			tracing::debug!(%err, columns, "cannot allocate packing table");
			PackError::CapacityTooLarge { capacity, gcd }
		})?;

		// 3. Backtrack
		let decisions = table.backtrack(&steps);
		let best_profit = table.best_profit();
		drop(table);

		// 4. Assembly in pool order
		let quantization = Quantization {
			gcd,
			quantized_capacity,
		};
		let plan = assemble_plan(pool, capacity, quantization, &decisions);

		tracing::debug!(
			selected = plan.taken.len(),
			total_weight = plan.total_weight,
			total_profit = plan.total_profit,
			best_profit,
			"packed"
		);

		Ok(plan)
	}

	/// Pack `pool` according to the configured mode.
	pub fn pack<T>(&self, pool: &mut Vec<T>, capacity: i64) -> Result<PackingResult<T>, PackError>
	where
		T: KnapsackItem + Clone,
	{
		match self.config.mode {
			PackMode::Consume => self.consume(pool, capacity),
			PackMode::Replenish => Ok(self.replenish(pool, capacity)?.cloned()),
		}
	}

	/// Pack from `pool` and remove the packed items from it.
	///
	/// The pool is mutated only once the plan has been computed successfully.
	pub fn consume<T: KnapsackItem>(
		&self,
		pool: &mut Vec<T>,
		capacity: i64,
	) -> Result<PackingResult<T>, PackError> {
		let plan = self.plan(pool, capacity)?;
		plan.consume(pool)
	}

	/// Pack from `pool` by reference, leaving it unchanged.
	pub fn replenish<'a, T: KnapsackItem>(
		&self,
		pool: &'a [T],
		capacity: i64,
	) -> Result<PackingResult<&'a T>, PackError> {
		let plan = self.plan(pool, capacity)?;
		plan.select(pool)
	}
}

/// One-shot packing with an explicit mode.
pub fn pack<T>(pool: &mut Vec<T>, capacity: i64, mode: PackMode) -> Result<PackingResult<T>, PackError>
where
	T: KnapsackItem + Clone,
{
	Packer::new(PackerConfig { mode }).pack(pool, capacity)
}
