//! FFT Latency Bench
//!
//! Measures two phases of a forward FFT workflow across a fixed matrix of
//! sizes and transform kinds:
//! - init: buffer allocation, input copy and plan construction
//! - exec: running the plan
//!
//! ## Architecture
//! - Clock: monotonic wall-clock timestamps
//! - Engine: allocate/plan/execute seam, `rustfft` in production
//! - Bench: trial loop, incremental averages, report lines
//! - Testing: simulated clock and counting engine (`testing` feature)

pub mod bench;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod types;

pub use bench::{BenchmarkDriver, ExperimentReport, RunningAverage};
pub use clock::{Clock, MonotonicClock, Timestamp};
pub use config::BenchConfig;
pub use engine::{EngineError, PlanMode, RustFftEngine, TransformEngine, TransformPlan};
pub use error::BenchError;
pub use types::{ExperimentSpec, TransformKind, TrialMeasurement};

/// Run the default matrix against `rustfft`, writing one line per experiment
pub fn run_default<W: std::io::Write + ?Sized>(out: &mut W) -> Result<Vec<ExperimentReport>, BenchError> {
    let driver = BenchmarkDriver::new(RustFftEngine::new(), MonotonicClock::new(), BenchConfig::default())?;
    driver.run_and_emit(out)
}
