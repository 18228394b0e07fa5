use serde::Serialize;

use super::bucket::{BucketPlan, PhaseCosts};
use super::OpCount;
use crate::error::Result;

/// A finished simulation: the plan it ran, what one window costs and the
/// totals over every window.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Estimate {
    pub plan: BucketPlan,
    pub per_window: PhaseCosts,
    pub total: OpCount,
    /// T / (M + S).
    pub ratio: f64,
}

impl Estimate {
    pub fn new(plan: BucketPlan, total: OpCount) -> Self {
        Estimate {
            per_window: plan.group_cost(),
            ratio: total.ratio(plan.steps),
            plan,
            total,
        }
    }

    /// Run the simulation for `plan`, optionally on the rayon pool.
    pub fn run(plan: BucketPlan, parallel: bool) -> Result<Self> {
        let total = if parallel {
            super::simulate_plan_parallel(&plan)?
        } else {
            super::simulate_plan(&plan)?
        };
        Ok(Estimate::new(plan, total))
    }

    /// The four labeled lines printed by `blankprover`.
    pub fn format_report(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("T = {}\n", self.plan.steps));
        out.push_str(&format!("squarings: S = {}\n", self.total.squarings));
        out.push_str(&format!(
            "multiplications: M = {}\n",
            self.total.multiplications
        ));
        out.push_str(&format!("ratio: T/(M+S) = {:.6}\n", self.ratio));
        out
    }

    /// Per-phase breakdown of a single window.
    pub fn format_breakdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Window cost (x{} windows, k1={}, k0={}, bound={}):\n",
            self.plan.blocks_per_checkpoint, self.plan.k1, self.plan.k0, self.plan.bound
        ));
        out.push_str(&format!("{:<10} {:>20} {:>20}\n", "phase", "S", "M"));
        out.push_str(&"-".repeat(52));
        out.push('\n');
        let phases = [
            ("advance", self.per_window.advance),
            ("reset", self.per_window.reset),
            ("fill", self.per_window.fill),
            ("rows", self.per_window.rows),
            ("columns", self.per_window.columns),
        ];
        for (name, cost) in phases {
            out.push_str(&format!(
                "{:<10} {:>20} {:>20}\n",
                name, cost.squarings, cost.multiplications
            ));
        }
        out.push_str(&"-".repeat(52));
        out.push('\n');
        let window = self.per_window.total();
        out.push_str(&format!(
            "{:<10} {:>20} {:>20}\n",
            "TOTAL", window.squarings, window.multiplications
        ));
        out
    }

    pub fn to_json(&self) -> String {
        // Only plain integers and a float; serialisation cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
