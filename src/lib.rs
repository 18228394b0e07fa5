pub mod cost;
pub mod error;
pub mod logging;
pub mod overhead;

pub use cost::{exponentiation_cost, simulate, simulate_parallel, BucketPlan, Estimate, OpCount};
pub use error::{EstimateError, OverheadError};

/// Plan and simulate a blank-prover run for T = 2^`tau` steps.
pub fn estimate(
    tau: u64,
    block_size: u64,
    blocks_per_checkpoint: u64,
    parallel: bool,
) -> Result<Estimate, EstimateError> {
    let plan = BucketPlan::new(tau, block_size, blocks_per_checkpoint)?;
    Estimate::run(plan, parallel)
}
