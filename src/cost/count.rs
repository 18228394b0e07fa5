use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Group operations charged by the cost model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpCount {
    pub squarings: u64,
    pub multiplications: u64,
}

impl OpCount {
    pub const ZERO: OpCount = OpCount {
        squarings: 0,
        multiplications: 0,
    };

    pub fn new(squarings: u64, multiplications: u64) -> Self {
        Self {
            squarings,
            multiplications,
        }
    }

    pub fn squarings(n: u64) -> Self {
        Self::new(n, 0)
    }

    pub fn multiplications(n: u64) -> Self {
        Self::new(0, n)
    }

    /// S + M, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.squarings.saturating_add(self.multiplications)
    }

    /// Component-wise sum, `None` if either counter overflows.
    pub fn checked_add(self, rhs: OpCount) -> Option<OpCount> {
        Some(OpCount {
            squarings: self.squarings.checked_add(rhs.squarings)?,
            multiplications: self.multiplications.checked_add(rhs.multiplications)?,
        })
    }

    /// `self` repeated `times` times, `None` on overflow.
    pub fn checked_mul(self, times: u64) -> Option<OpCount> {
        Some(OpCount {
            squarings: self.squarings.checked_mul(times)?,
            multiplications: self.multiplications.checked_mul(times)?,
        })
    }

    /// Sequential steps per charged operation: `steps / (S + M)`.
    pub fn ratio(&self, steps: u64) -> f64 {
        steps as f64 / (self.squarings as f64 + self.multiplications as f64)
    }
}

impl Add for OpCount {
    type Output = OpCount;

    fn add(self, rhs: OpCount) -> OpCount {
        OpCount::new(
            self.squarings + rhs.squarings,
            self.multiplications + rhs.multiplications,
        )
    }
}

impl AddAssign for OpCount {
    fn add_assign(&mut self, rhs: OpCount) {
        self.squarings += rhs.squarings;
        self.multiplications += rhs.multiplications;
    }
}
