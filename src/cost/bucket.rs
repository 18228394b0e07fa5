use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, trace};

use super::{exponentiation_cost, OpCount, MAX_BLOCK_SIZE, MAX_TAU};
use crate::error::{EstimateError, Result};

// --- Plan ---

/// Derived quantities of a bucket-method prover run.
///
/// The prover keeps one checkpoint every `checkpoint_interval` squarings of
/// the delay chain, and for each of the `blocks_per_checkpoint` windows it
/// folds all `bound` checkpoints into `2^block_size` buckets before
/// combining them along a `2^k1 x 2^k0` grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BucketPlan {
    pub tau: u64,
    /// T = 2^tau sequential squarings.
    pub steps: u64,
    pub block_size: u64,
    pub blocks_per_checkpoint: u64,
    pub checkpoint_interval: u64,
    /// Row bits, `block_size / 2`.
    pub k1: u64,
    /// Column bits, `block_size - k1`.
    pub k0: u64,
    /// Checkpoints folded per window, `ceil(T / checkpoint_interval)`.
    pub bound: u64,
}

/// Cost of one window, split by where each charge is made.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PhaseCosts {
    pub advance: OpCount,
    pub reset: OpCount,
    pub fill: OpCount,
    pub rows: OpCount,
    pub columns: OpCount,
}

impl PhaseCosts {
    pub fn total(&self) -> OpCount {
        self.advance + self.reset + self.fill + self.rows + self.columns
    }
}

impl BucketPlan {
    pub fn new(tau: u64, block_size: u64, blocks_per_checkpoint: u64) -> Result<Self> {
        if block_size == 0 {
            return Err(EstimateError::ZeroBlockSize);
        }
        if blocks_per_checkpoint == 0 {
            return Err(EstimateError::ZeroBlocksPerCheckpoint);
        }
        if block_size > MAX_BLOCK_SIZE {
            return Err(EstimateError::block_size_too_large(block_size));
        }
        if tau > MAX_TAU {
            return Err(EstimateError::tau_too_large(tau));
        }

        let steps = 1u64 << tau;
        let checkpoint_interval = block_size
            .checked_mul(blocks_per_checkpoint)
            .ok_or(EstimateError::Overflow)?;
        let k1 = block_size / 2;
        let k0 = block_size - k1;
        let bound = steps.div_ceil(checkpoint_interval);

        let plan = BucketPlan {
            tau,
            steps,
            block_size,
            blocks_per_checkpoint,
            checkpoint_interval,
            k1,
            k0,
            bound,
        };
        debug!(steps, checkpoint_interval, k1, k0, bound, "derived bucket plan");
        Ok(plan)
    }

    /// Number of buckets, `2^block_size`.
    pub fn buckets(&self) -> u64 {
        1u64 << self.block_size
    }

    pub fn rows(&self) -> u64 {
        1u64 << self.k1
    }

    pub fn columns(&self) -> u64 {
        1u64 << self.k0
    }

    /// Charges for a single window; every window costs the same.
    pub fn group_cost(&self) -> PhaseCosts {
        PhaseCosts {
            advance: self.advance_cost(),
            reset: self.reset_cost(),
            fill: self.fill_cost(),
            rows: self.row_pass_cost(),
            columns: self.column_pass_cost(),
        }
    }

    /// One squaring per window bit of the running result.
    fn advance_cost(&self) -> OpCount {
        OpCount::squarings(self.block_size)
    }

    /// Setting the buckets to the identity is bookkeeping.
    fn reset_cost(&self) -> OpCount {
        OpCount::ZERO
    }

    /// One multiplication per checkpoint; choosing its bucket is a lookup.
    fn fill_cost(&self) -> OpCount {
        OpCount::multiplications(self.bound)
    }

    /// Row `i` multiplies its `2^k0` buckets, raises the product to
    /// `i << k0` and folds it into the result.
    fn row_pass_cost(&self) -> OpCount {
        let per_row = self.columns() + 1;
        let mut cost = OpCount::ZERO;
        for i in 0..self.rows() {
            cost += OpCount::multiplications(per_row);
            cost += exponentiation_cost(i << self.k0);
        }
        cost
    }

    /// Column `j` multiplies its `2^k1` buckets, raises the product to `j`
    /// and folds it into the result.
    fn column_pass_cost(&self) -> OpCount {
        let per_column = self.rows() + 1;
        let mut cost = OpCount::ZERO;
        for j in 0..self.columns() {
            cost += OpCount::multiplications(per_column);
            cost += exponentiation_cost(j);
        }
        cost
    }
}

// --- Simulation ---

/// Count the squarings and multiplications a blank prover performs for
/// T = 2^`tau` steps.
pub fn simulate(tau: u64, block_size: u64, blocks_per_checkpoint: u64) -> Result<OpCount> {
    let plan = BucketPlan::new(tau, block_size, blocks_per_checkpoint)?;
    simulate_plan(&plan)
}

/// Same totals as [`simulate`], with windows spread over the rayon pool.
pub fn simulate_parallel(
    tau: u64,
    block_size: u64,
    blocks_per_checkpoint: u64,
) -> Result<OpCount> {
    let plan = BucketPlan::new(tau, block_size, blocks_per_checkpoint)?;
    simulate_plan_parallel(&plan)
}

pub fn simulate_plan(plan: &BucketPlan) -> Result<OpCount> {
    let total = accumulate_windows(plan.group_cost().total(), plan.blocks_per_checkpoint)?;
    info!(
        squarings = total.squarings,
        multiplications = total.multiplications,
        "simulation finished"
    );
    Ok(total)
}

pub fn simulate_plan_parallel(plan: &BucketPlan) -> Result<OpCount> {
    let window = plan.group_cost().total();
    let total = (0..plan.blocks_per_checkpoint)
        .into_par_iter()
        .map(|_| Some(window))
        .try_reduce(|| OpCount::ZERO, |a, b| a.checked_add(b))
        .ok_or(EstimateError::Overflow)?;
    info!(
        squarings = total.squarings,
        multiplications = total.multiplications,
        "parallel simulation finished"
    );
    Ok(total)
}

/// Charge `window` once per window, counting down like the prover does.
///
/// Run time is linear in `windows`.
fn accumulate_windows(window: OpCount, windows: u64) -> Result<OpCount> {
    let mut total = OpCount::ZERO;
    for index in (0..windows).rev() {
        trace!(index, ?window, "window charged");
        total = total.checked_add(window).ok_or(EstimateError::Overflow)?;
    }
    Ok(total)
}
