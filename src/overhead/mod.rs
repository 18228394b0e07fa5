//! Closed-form prover overhead for Wesolowski-style VDF proofs.
//!
//! Where [`crate::cost`] counts every operation of one concrete plan, this
//! model picks the window size `kappa` and checkpoint spacing `gamma` that
//! minimise `r * (T / kappa + gamma * 2^kappa)` under a memory bound, and
//! extends that to provers that split the delay into several proofs
//! (n-iterated) or run Pietrzak halving rounds first (hybrid).

pub mod params;
pub mod report;

use serde::Serialize;
use tracing::debug;

pub use params::OverheadParams;
pub use report::{format_table, overhead_table, OverheadRow, ProverKind};

/// The cheapest `(kappa, gamma)` found for a step count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProofChoice {
    pub kappa: u64,
    pub gamma: u64,
    pub cost: u64,
}

/// Checkpoints of an n-iterated prover and the cost of its final proof.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IteratedPlan {
    pub checkpoints: Vec<u64>,
    pub cost: u64,
}

pub struct OverheadModel {
    params: OverheadParams,
}

impl OverheadModel {
    pub fn new(params: OverheadParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &OverheadParams {
        &self.params
    }

    /// Time to compute one proof over `steps` squarings with window
    /// `kappa` and one checkpoint kept every `gamma * kappa` steps.
    pub fn cost_of_proof(&self, steps: u64, gamma: u64, kappa: u64) -> u64 {
        let work = steps as f64 / kappa as f64 + gamma as f64 * pow2(kappa);
        (self.params.mult_square_ratio * work).ceil() as u64
    }

    /// Like [`Self::cost_of_proof`], after `rounds` Pietrzak halvings have
    /// cut the delay to `ceil(steps / 2^rounds)`.
    pub fn cost_of_proof_for_hybrid(
        &self,
        steps: u64,
        rounds: u64,
        gamma: u64,
        kappa: u64,
    ) -> u64 {
        // 2^rounds past u64 leaves at most one step
        let reduced = match u32::try_from(rounds).ok().and_then(|r| 1u64.checked_shl(r)) {
            Some(divisor) => steps.div_ceil(divisor),
            None => u64::from(steps > 0),
        } as f64;
        let security = self.params.security_level as f64;
        let challenge = if reduced == 0.0 {
            0.0
        } else {
            1.5 * security * pow2(rounds) * reduced / (kappa as f64 * gamma as f64)
        };
        let work = reduced / kappa as f64 + gamma as f64 * pow2(kappa) + challenge;
        (self.params.mult_square_ratio * work).ceil() as u64
    }

    /// Smallest spacing whose checkpoint table fits in the memory bound.
    fn gamma(&self, steps: u64, kappa: u64) -> u64 {
        if self.params.memory_bound == 0 {
            return 1;
        }
        let bound = self.params.memory_bound as f64;
        let modulus = self.params.modulus_length as f64;
        (steps as f64 / (bound * kappa as f64) * modulus).ceil() as u64
    }

    fn minimise(&self, steps: u64, cost: impl Fn(u64, u64) -> u64) -> Option<ProofChoice> {
        let mut best: Option<ProofChoice> = None;
        for kappa in 1..ceil_log2(steps) {
            let gamma = self.gamma(steps, kappa);
            let candidate = cost(gamma, kappa);
            if best.map_or(true, |b| candidate < b.cost) {
                best = Some(ProofChoice {
                    kappa,
                    gamma,
                    cost: candidate,
                });
            }
        }
        best
    }

    /// Best window for a single proof over `steps` squarings. `None` when
    /// `steps <= 2` leaves no window size to try.
    pub fn best_choice(&self, steps: u64) -> Option<ProofChoice> {
        self.minimise(steps, |gamma, kappa| self.cost_of_proof(steps, gamma, kappa))
    }

    /// Cost of the best single proof, 0 when there is nothing to choose.
    pub fn optimize(&self, steps: u64) -> u64 {
        self.best_choice(steps).map_or(0, |c| c.cost)
    }

    pub fn best_hybrid_choice(&self, steps: u64, rounds: u64) -> Option<ProofChoice> {
        self.minimise(steps, |gamma, kappa| {
            self.cost_of_proof_for_hybrid(steps, rounds, gamma, kappa)
        })
    }

    pub fn optimize_hybrid(&self, steps: u64, rounds: u64) -> u64 {
        self.best_hybrid_choice(steps, rounds).map_or(0, |c| c.cost)
    }

    /// Checkpoints of a continuously busy prover: each one lands where the
    /// proof for the previous segment finishes.
    pub fn find_checkpoints(&self, first: u64, n: usize) -> Vec<u64> {
        let mut checkpoints = Vec::with_capacity(n.max(1));
        checkpoints.push(first);
        for x in 0..n.saturating_sub(1) {
            let next = self.optimize(checkpoints[x]);
            checkpoints.push(next);
        }
        checkpoints
    }

    fn checkpoint_sum(&self, first: u64, n: usize) -> u64 {
        self.find_checkpoints(first, n)
            .into_iter()
            .fold(0u64, u64::saturating_add)
    }

    /// Place `n` checkpoints so the segments tile `steps` and return the
    /// cost of the proof still owed after the delay ends. `n = 0` is
    /// treated as a single proof.
    pub fn optimize_iterated(&self, steps: u64, n: usize) -> IteratedPlan {
        if n <= 1 {
            return IteratedPlan {
                checkpoints: vec![0],
                cost: self.optimize(steps),
            };
        }

        let mut checkpoint = steps / 2;
        let mut step = steps / 4;
        while step != 0 {
            let mut total = self.checkpoint_sum(checkpoint, n);
            while total < steps {
                checkpoint += step;
                total = self.checkpoint_sum(checkpoint, n);
            }
            while total > steps {
                checkpoint = checkpoint.saturating_sub(step);
                total = self.checkpoint_sum(checkpoint, n);
            }
            step /= 2;
        }
        debug!(checkpoint, n, "first checkpoint settled");

        let mut checkpoints = self.find_checkpoints(checkpoint, n);
        let last = checkpoints.pop().unwrap_or(0);
        IteratedPlan {
            checkpoints,
            cost: self.optimize(last),
        }
    }
}

/// `2^exp`, infinite once the exponent leaves the `i32` range.
fn pow2(exp: u64) -> f64 {
    2f64.powi(i32::try_from(exp).unwrap_or(i32::MAX))
}

/// `ceil(log2(n))`, 0 for n <= 1.
fn ceil_log2(n: u64) -> u64 {
    if n <= 1 {
        return 0;
    }
    u64::from(u64::BITS - (n - 1).leading_zeros())
}
