//! Error types for the estimators.
//!
//! Every `EstimateError` is a parameter problem the caller can fix by
//! choosing different inputs; the CLI reports them as usage errors.

use thiserror::Error;

use crate::cost::{MAX_BLOCK_SIZE, MAX_TAU};

pub type Result<T> = core::result::Result<T, EstimateError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    #[error("block size must be at least 1 bit")]
    ZeroBlockSize,
    #[error("blocks per checkpoint must be at least 1")]
    ZeroBlocksPerCheckpoint,
    #[error("block size {block_size} exceeds the supported maximum of {max} bits")]
    BlockSizeTooLarge { block_size: u64, max: u64 },
    #[error("log2(T) must not be negative, got {0}")]
    NegativeStepExponent(i64),
    #[error("log2(T) = {tau} exceeds the supported maximum of {max}")]
    StepExponentTooLarge { tau: u64, max: u64 },
    #[error("operation counters overflowed 64 bits")]
    Overflow,
}

impl EstimateError {
    pub(crate) fn block_size_too_large(block_size: u64) -> Self {
        Self::BlockSizeTooLarge {
            block_size,
            max: MAX_BLOCK_SIZE,
        }
    }

    pub(crate) fn tau_too_large(tau: u64) -> Self {
        Self::StepExponentTooLarge { tau, max: MAX_TAU }
    }
}

#[derive(Error, Debug)]
pub enum OverheadError {
    #[error("cannot read parameters: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed parameters: {0}")]
    Params(#[from] serde_json::Error),
    #[error("invalid parameters: {0}")]
    InvalidParams(&'static str),
}
