use std::collections::TryReserveError;

/// Dynamic-programming table over (item prefix, quantized weight budget).
///
/// Column `k` stands for a budget of `k * gcd` weight units, so every item
/// weight is expressed as a whole number of columns (`steps`). Row 0 and
/// column 0 are all zero.
pub(crate) struct DpTable {
    columns: usize,
    // opt[n][k]: best profit using items 1..=n within budget k
    opt: Vec<f64>,
    // sol[n][k]: does that optimum take item n?
    sol: Vec<bool>,
}

impl DpTable {
    /// Fails only when the table cannot be allocated.
    pub(crate) fn build(
        steps: &[usize],
        profits: &[f64],
        columns: usize,
    ) -> Result<Self, TryReserveError> {
        debug_assert_eq!(steps.len(), profits.len(), "steps and profits must align");

        let rows = steps.len() + 1;
        let cells = rows * columns;

        let mut opt: Vec<f64> = Vec::new();
        opt.try_reserve_exact(cells)?;
        opt.resize(cells, 0.0);

        let mut sol: Vec<bool> = Vec::new();
        sol.try_reserve_exact(cells)?;
        sol.resize(cells, false);

        for n in 1..rows {
            let step = steps[n - 1];
            let profit = profits[n - 1];
            let prev = (n - 1) * columns;
            let cur = n * columns;

            for k in 1..columns {
                let skip = opt[prev + k];
                let take = if step <= k {
                    profit + opt[prev + k - step]
                } else {
                    f64::NEG_INFINITY
                };

                opt[cur + k] = skip.max(take);
                // Strict: on a tie the item is left out, so among equal
                // alternatives the earlier pool entry wins.
                sol[cur + k] = take > skip;
            }
        }

        Ok(Self { columns, opt, sol })
    }

    pub(crate) fn best_profit(&self) -> f64 {
        self.opt.last().copied().unwrap_or(0.0)
    }

    /// Walk back from the full table corner to a per-item take decision,
    /// indexed by pool position.
    pub(crate) fn backtrack(&self, steps: &[usize]) -> Vec<bool> {
        let mut take = vec![false; steps.len()];
        let mut k = self.columns - 1;

        for n in (1..=steps.len()).rev() {
            if self.sol[n * self.columns + k] {
                take[n - 1] = true;
                k -= steps[n - 1];
            }
        }

        take
    }
}
