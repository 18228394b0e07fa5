use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::OverheadError;

/// Hardware and protocol assumptions behind the analytic model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverheadParams {
    /// Cost of one multiplication in squarings. The default assumes a
    /// multiplication has 1.2x the latency of a squaring and four can run
    /// in parallel.
    pub mult_square_ratio: f64,
    /// Bit length of the RSA modulus.
    pub modulus_length: u64,
    /// Bits of precomputed checkpoint storage; 0 means unbounded.
    pub memory_bound: u64,
    pub security_level: u64,
}

impl Default for OverheadParams {
    fn default() -> Self {
        OverheadParams {
            mult_square_ratio: 1.2 / 4.0,
            modulus_length: 2048,
            // 8 MB
            memory_bound: 8 * 8 * (1 << 20),
            security_level: 128,
        }
    }
}

impl OverheadParams {
    /// Read parameters from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, OverheadError> {
        let content = std::fs::read_to_string(path)?;
        let params: OverheadParams = serde_json::from_str(&content)?;
        params.validate()?;
        debug!(path = %path.display(), ?params, "loaded overhead parameters");
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), OverheadError> {
        if !self.mult_square_ratio.is_finite() || self.mult_square_ratio <= 0.0 {
            return Err(OverheadError::InvalidParams(
                "mult_square_ratio must be a positive number",
            ));
        }
        if self.modulus_length == 0 {
            return Err(OverheadError::InvalidParams(
                "modulus_length must be at least 1 bit",
            ));
        }
        Ok(())
    }

    pub fn describe(&self) -> String {
        format!(
            "mult/square ratio {}, modulus {} bits, memory bound {} bits, security {} bits",
            self.mult_square_ratio, self.modulus_length, self.memory_bound, self.security_level
        )
    }
}
