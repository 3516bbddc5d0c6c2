//! Transform engine seam
//!
//! Buffers and plans are owned values. Dropping a buffer releases it and
//! dropping a plan destroys it along with the buffers bound to it, so every
//! exit path of a trial cleans up.

pub mod hermitian;
pub mod rustfft_engine;

pub use rustfft_engine::RustFftEngine;
pub use hermitian::HermitianIter;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Planning strategy requested from the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanMode {
    /// Cheap-to-construct plan; no search for the fastest algorithm
    #[default]
    Estimate,
    /// Portable scalar plan, skips CPU feature detection
    Scalar,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("transform length must be non-zero")]
    ZeroLength,
    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("allocation failed: {0}")]
    Allocation(String),
    #[error("execution failed: {0}")]
    Execution(String),
}

/// A forward transform bound to its input and output buffers
pub trait TransformPlan {
    /// Run the transform, overwriting the bound output buffer
    fn execute(&mut self) -> Result<(), EngineError>;

    /// Bound output buffer
    fn output(&self) -> &[Complex64];
}

/// Allocate / plan / execute capabilities consumed by the driver
pub trait TransformEngine {
    type ComplexBuffer: AsRef<[Complex64]> + AsMut<[Complex64]>;
    type RealBuffer: AsRef<[f64]> + AsMut<[f64]>;
    type Plan: TransformPlan;

    /// Fresh buffer of `n` complex elements
    fn allocate_complex(&self, n: usize) -> Result<Self::ComplexBuffer, EngineError>;

    /// Fresh buffer of `n` real elements
    fn allocate_real(&self, n: usize) -> Result<Self::RealBuffer, EngineError>;

    /// 1-D forward complex-to-complex plan of length `n`
    fn plan_forward_complex(
        &self,
        n: usize,
        input: Self::ComplexBuffer,
        output: Self::ComplexBuffer,
        mode: PlanMode,
    ) -> Result<Self::Plan, EngineError>;

    /// 1-D forward real-to-complex plan of length `n`, producing `n/2+1` outputs
    fn plan_forward_real(
        &self,
        n: usize,
        input: Self::RealBuffer,
        output: Self::ComplexBuffer,
        mode: PlanMode,
    ) -> Result<Self::Plan, EngineError>;
}

/// Length check shared by engine implementations
pub(crate) fn check_len(expected: usize, actual: usize) -> Result<(), EngineError> {
    if expected == actual {
        Ok(())
    } else {
        Err(EngineError::LengthMismatch { expected, actual })
    }
}
