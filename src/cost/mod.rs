/// Operation-count model for a blank VDF prover.
///
/// Nothing here touches group elements. Each step a bucket-method prover
/// would take is charged as squarings and multiplications, which is enough
/// to compare window and checkpoint choices before writing the real prover.
pub mod bucket;
pub mod count;
pub mod exponent;
pub mod report;

pub use bucket::{
    simulate, simulate_parallel, simulate_plan, simulate_plan_parallel, BucketPlan, PhaseCosts,
};
pub use count::OpCount;
pub use exponent::exponentiation_cost;
pub use report::Estimate;

/// Largest log2(T) whose step count fits in a u64.
pub const MAX_TAU: u64 = 63;

/// Largest window; keeps `2^block_size` and every per-window count in a u64.
pub const MAX_BLOCK_SIZE: u64 = 62;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EstimateError;

    /// Per-window totals summed analytically instead of by walking the grid.
    fn closed_form_window(plan: &BucketPlan) -> OpCount {
        // sum over 0 < i < 2^m of (bit_length(i) - 1)
        fn shifted_bit_lengths(m: u64) -> i128 {
            (m as i128 - 2) * (1i128 << m) + 2
        }
        // sum over 0 < i < 2^m of (popcount(i) - 1)
        fn extra_ones(m: u64) -> i128 {
            if m == 0 {
                return 0;
            }
            (m as i128) * (1i128 << (m - 1)) - (1i128 << m) + 1
        }

        let (k1, k0) = (plan.k1, plan.k0);
        let rows = 1i128 << k1;
        let cols = 1i128 << k0;
        let squarings = plan.block_size as i128
            + shifted_bit_lengths(k1)
            + (k0 as i128) * (rows - 1)
            + shifted_bit_lengths(k0);
        let multiplications = plan.bound as i128
            + rows * (cols + 1)
            + cols * (rows + 1)
            + extra_ones(k1)
            + extra_ones(k0);
        OpCount::new(squarings as u64, multiplications as u64)
    }

    #[test]
    fn test_hand_traced_fixture() {
        // T=16, interval=4, bound=4, k1=k0=1; per window S=3, M=16.
        let plan = BucketPlan::new(4, 2, 2).unwrap();
        assert_eq!(plan.steps, 16);
        assert_eq!(plan.checkpoint_interval, 4);
        assert_eq!(plan.bound, 4);
        assert_eq!((plan.k1, plan.k0), (1, 1));
        assert_eq!(simulate(4, 2, 2).unwrap(), OpCount::new(6, 32));
    }

    #[test]
    fn test_phase_attribution() {
        let plan = BucketPlan::new(4, 2, 2).unwrap();
        let phases = plan.group_cost();
        assert_eq!(phases.advance, OpCount::new(2, 0));
        assert_eq!(phases.reset, OpCount::ZERO);
        assert_eq!(phases.fill, OpCount::new(0, 4));
        // rows: 2 x (2 folds + 1 combine); exponent 2 costs one squaring
        assert_eq!(phases.rows, OpCount::new(1, 6));
        // columns: exponents 0 and 1 are free
        assert_eq!(phases.columns, OpCount::new(0, 6));
        assert_eq!(phases.total(), OpCount::new(3, 16));
    }

    #[test]
    fn test_single_bit_window() {
        let plan = BucketPlan::new(4, 1, 1).unwrap();
        assert_eq!((plan.k1, plan.k0), (0, 1));
        assert_eq!(plan.rows(), 1);
        assert_eq!(plan.columns(), 2);
        assert_eq!(plan.buckets(), 2);
        assert_eq!(plan.bound, 16);

        let phases = plan.group_cost();
        assert_eq!(phases.advance, OpCount::new(1, 0));
        assert_eq!(phases.rows, OpCount::new(0, 3));
        assert_eq!(phases.columns, OpCount::new(0, 4));
        assert_eq!(simulate(4, 1, 1).unwrap(), OpCount::new(1, 23));
    }

    #[test]
    fn test_bound_rounds_up() {
        // 2^5 / 9 = 3.55..
        let plan = BucketPlan::new(5, 3, 3).unwrap();
        assert_eq!(plan.checkpoint_interval, 9);
        assert_eq!(plan.bound, 4);
        // interval larger than T still needs one checkpoint
        let plan = BucketPlan::new(0, 4, 4).unwrap();
        assert_eq!(plan.steps, 1);
        assert_eq!(plan.bound, 1);
    }

    #[test]
    fn test_matches_closed_form() {
        for tau in [0u64, 4, 10, 20, 36] {
            for block_size in 1..=12u64 {
                for bpc in [1u64, 2, 3, 8, 16] {
                    let plan = BucketPlan::new(tau, block_size, bpc).unwrap();
                    let expected = closed_form_window(&plan).checked_mul(bpc).unwrap();
                    assert_eq!(
                        simulate_plan(&plan).unwrap(),
                        expected,
                        "tau={} k={} bpc={}",
                        tau,
                        block_size,
                        bpc
                    );
                }
            }
        }
    }

    #[test]
    fn test_deterministic_and_no_drift() {
        let first = simulate(36, 22, 16).unwrap();
        let second = simulate(36, 22, 16).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        for (tau, k, bpc) in [(4, 2, 2), (20, 7, 5), (36, 16, 33), (39, 22, 16)] {
            assert_eq!(
                simulate_parallel(tau, k, bpc).unwrap(),
                simulate(tau, k, bpc).unwrap(),
                "tau={} k={} bpc={}",
                tau,
                k,
                bpc
            );
        }
    }

    #[test]
    fn test_doubling_blocks_per_checkpoint() {
        let base = BucketPlan::new(30, 10, 8).unwrap();
        let doubled = BucketPlan::new(30, 10, 16).unwrap();
        assert_eq!(doubled.checkpoint_interval, 2 * base.checkpoint_interval);
        assert!(doubled.bound <= base.bound);

        let base_window = base.group_cost();
        let doubled_window = doubled.group_cost();
        // window overhead is independent of the checkpoint spacing
        assert_eq!(base_window.advance, doubled_window.advance);
        assert_eq!(base_window.rows, doubled_window.rows);
        assert_eq!(base_window.columns, doubled_window.columns);
        // fewer checkpoints to fold per window
        assert!(doubled_window.fill.multiplications < base_window.fill.multiplications);

        let base_total = simulate_plan(&base).unwrap();
        let doubled_total = simulate_plan(&doubled).unwrap();
        assert_eq!(doubled_total.squarings, 2 * base_total.squarings);
    }

    #[test]
    fn test_rejects_degenerate_parameters() {
        assert_eq!(simulate(10, 0, 4), Err(EstimateError::ZeroBlockSize));
        assert_eq!(simulate(10, 4, 0), Err(EstimateError::ZeroBlocksPerCheckpoint));
        assert!(matches!(
            simulate(10, MAX_BLOCK_SIZE + 1, 4),
            Err(EstimateError::BlockSizeTooLarge { .. })
        ));
        assert!(matches!(
            simulate(MAX_TAU + 1, 4, 4),
            Err(EstimateError::StepExponentTooLarge { tau: 64, max: 63 })
        ));
    }

    #[test]
    fn test_checkpoint_interval_overflow() {
        assert_eq!(
            BucketPlan::new(10, 62, u64::MAX),
            Err(EstimateError::Overflow)
        );
    }

    #[test]
    fn test_largest_step_count() {
        let plan = BucketPlan::new(MAX_TAU, 1, 1).unwrap();
        assert_eq!(plan.steps, 1u64 << 63);
        assert_eq!(plan.bound, 1u64 << 63);
        let total = simulate_plan(&plan).unwrap();
        assert_eq!(total.multiplications, (1u64 << 63) + 7);
    }

    #[test]
    fn test_ratio() {
        let total = simulate(4, 2, 2).unwrap();
        assert_eq!(total.total(), 38);
        assert!((total.ratio(16) - 16.0 / 38.0).abs() < 1e-12);
        assert!(OpCount::ZERO.ratio(16).is_infinite());
    }
}
