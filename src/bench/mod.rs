//! Benchmark module
//! Trial loop, running averages, synthetic input and report lines

pub mod average;
pub mod driver;
pub mod input;
pub mod report;

pub use average::RunningAverage;
pub use driver::{BenchmarkDriver, TrialAverages};
pub use input::InputBuffer;
pub use report::{emit, ExperimentReport, REPORT_SCALE};
