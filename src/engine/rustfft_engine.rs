//! Production transform engine backed by `rustfft` and `realfft`
//!
//! Every plan gets its own planner, so plan construction is always cold:
//! no twiddle tables or algorithm choices carry over between trials.
//! Real-to-complex plans go through `realfft`, which only offers the
//! feature-detecting planner, so `PlanMode::Scalar` affects c2c plans only.

use super::{check_len, EngineError, PlanMode, TransformEngine, TransformPlan};
use num_complex::Complex64;
use realfft::{RealFftPlanner, RealToComplex};
use rustfft::{Fft, FftPlanner, FftPlannerScalar};
use std::sync::Arc;
use tracing::trace;

/// Stateless engine; each call allocates and plans from scratch
#[derive(Debug, Clone, Copy, Default)]
pub struct RustFftEngine;

impl RustFftEngine {
    pub fn new() -> Self {
        Self
    }

    fn plan(n: usize, mode: PlanMode) -> Arc<dyn Fft<f64>> {
        match mode {
            PlanMode::Estimate => FftPlanner::<f64>::new().plan_fft_forward(n),
            PlanMode::Scalar => FftPlannerScalar::<f64>::new().plan_fft_forward(n),
        }
    }
}

/// Zero-filled buffer; capacity failure is reported instead of aborting
fn alloc_zeroed<T: Clone + Default>(n: usize) -> Result<Vec<T>, EngineError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(n)
        .map_err(|e| EngineError::Allocation(e.to_string()))?;
    buf.resize(n, T::default());
    Ok(buf)
}

enum Kernel {
    Complex {
        fft: Arc<dyn Fft<f64>>,
        input: Vec<Complex64>,
    },
    Real {
        r2c: Arc<dyn RealToComplex<f64>>,
        input: Vec<f64>,
    },
}

/// Plan owning its bound buffers; dropping it releases all of them
pub struct RustFftPlan {
    kernel: Kernel,
    output: Vec<Complex64>,
    scratch: Vec<Complex64>,
}

impl TransformPlan for RustFftPlan {
    /// The input buffer doubles as scratch in both kinds and is left
    /// unspecified afterwards.
    fn execute(&mut self) -> Result<(), EngineError> {
        match &mut self.kernel {
            Kernel::Complex { fft, input } => {
                fft.process_outofplace_with_scratch(input, &mut self.output, &mut self.scratch);
                Ok(())
            }
            Kernel::Real { r2c, input } => r2c
                .process_with_scratch(input, &mut self.output, &mut self.scratch)
                .map_err(|e| EngineError::Execution(e.to_string())),
        }
    }

    fn output(&self) -> &[Complex64] {
        &self.output
    }
}

impl TransformEngine for RustFftEngine {
    type ComplexBuffer = Vec<Complex64>;
    type RealBuffer = Vec<f64>;
    type Plan = RustFftPlan;

    fn allocate_complex(&self, n: usize) -> Result<Vec<Complex64>, EngineError> {
        alloc_zeroed(n)
    }

    fn allocate_real(&self, n: usize) -> Result<Vec<f64>, EngineError> {
        alloc_zeroed(n)
    }

    fn plan_forward_complex(
        &self,
        n: usize,
        input: Vec<Complex64>,
        output: Vec<Complex64>,
        mode: PlanMode,
    ) -> Result<RustFftPlan, EngineError> {
        if n == 0 {
            return Err(EngineError::ZeroLength);
        }
        check_len(n, input.len())?;
        check_len(n, output.len())?;

        let fft = Self::plan(n, mode);
        let scratch = alloc_zeroed(fft.get_outofplace_scratch_len())?;
        trace!(n, ?mode, scratch = scratch.len(), "planned c2c");

        Ok(RustFftPlan {
            kernel: Kernel::Complex { fft, input },
            output,
            scratch,
        })
    }

    fn plan_forward_real(
        &self,
        n: usize,
        input: Vec<f64>,
        output: Vec<Complex64>,
        mode: PlanMode,
    ) -> Result<RustFftPlan, EngineError> {
        if n == 0 {
            return Err(EngineError::ZeroLength);
        }
        check_len(n, input.len())?;
        check_len(n / 2 + 1, output.len())?;

        let r2c = RealFftPlanner::<f64>::new().plan_fft_forward(n);
        let scratch = alloc_zeroed(r2c.get_scratch_len())?;
        trace!(n, ?mode, scratch = scratch.len(), "planned r2c");

        Ok(RustFftPlan {
            kernel: Kernel::Real { r2c, input },
            output,
            scratch,
        })
    }
}
