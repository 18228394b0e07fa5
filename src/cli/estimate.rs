use clap::Args;
use tracing::debug;

use vdf_cost::EstimateError;

use super::exit_with_usage;

#[derive(Args)]
pub struct EstimateArgs {
    /// log2 of the number of sequential squarings T
    #[arg(allow_negative_numbers = true)]
    pub log2_t: Option<i64>,
    /// Bits per window
    #[arg(allow_negative_numbers = true)]
    pub block_size: Option<i64>,
    /// Windows aggregated per stored checkpoint
    #[arg(allow_negative_numbers = true)]
    pub blocks_per_checkpoint: Option<i64>,
    /// Print the estimate as JSON instead of the four labeled lines
    #[arg(long)]
    pub json: bool,
    /// Also print what a single window costs, phase by phase
    #[arg(long)]
    pub breakdown: bool,
    /// Spread windows over all cores; totals are identical
    #[arg(long)]
    pub parallel: bool,
}

/// Negative counts are usage errors, reported with `error`.
fn non_negative(value: i64, error: EstimateError) -> u64 {
    match u64::try_from(value) {
        Ok(v) => v,
        Err(_) => exit_with_usage(Some(&error)),
    }
}

pub fn cmd_estimate(args: EstimateArgs) {
    let (tau, block_size, blocks_per_checkpoint) =
        match (args.log2_t, args.block_size, args.blocks_per_checkpoint) {
            (Some(tau), Some(k), Some(bpc)) => (tau, k, bpc),
            _ => exit_with_usage(None),
        };
    let tau = non_negative(tau, EstimateError::NegativeStepExponent(tau));
    let block_size = non_negative(block_size, EstimateError::ZeroBlockSize);
    let blocks_per_checkpoint =
        non_negative(blocks_per_checkpoint, EstimateError::ZeroBlocksPerCheckpoint);
    debug!(tau, block_size, blocks_per_checkpoint, "estimating");

    let estimate =
        match vdf_cost::estimate(tau, block_size, blocks_per_checkpoint, args.parallel) {
            Ok(e) => e,
            Err(e) => exit_with_usage(Some(&e)),
        };

    if args.json {
        println!("{}", estimate.to_json());
        return;
    }
    print!("{}", estimate.format_report());
    if args.breakdown {
        print!("\n{}", estimate.format_breakdown());
    }
}
