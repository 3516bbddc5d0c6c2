//! Experiment summary and report line

use super::average::RunningAverage;
use crate::types::{ExperimentSpec, TransformKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// Divisor applied to nanosecond averages before printing them as "ms".
///
/// This is NOT a true ns -> ms conversion (that would be 1e6). The reference
/// benchmark divides by 1000 and labels the result milliseconds, and the
/// printed numbers are kept comparable with it. Values shown as "ms" are
/// really microseconds.
pub const REPORT_SCALE: f64 = 1000.0;

/// Final averages for one (kind, size) experiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub kind: TransformKind,
    pub size: usize,
    pub trials: u64,
    pub init_avg_ns: f64,
    pub exec_avg_ns: f64,
}

impl ExperimentReport {
    pub fn from_averages(spec: ExperimentSpec, init: RunningAverage, exec: RunningAverage) -> Self {
        Self {
            kind: spec.kind,
            size: spec.size,
            trials: init.count(),
            init_avg_ns: init.mean(),
            exec_avg_ns: exec.mean(),
        }
    }

    pub fn spec(&self) -> ExperimentSpec {
        ExperimentSpec::new(self.kind, self.size)
    }

    /// Reported init value (see [`REPORT_SCALE`])
    pub fn init_ms(&self) -> f64 {
        self.init_avg_ns / REPORT_SCALE
    }

    /// Reported exec value (see [`REPORT_SCALE`])
    pub fn exec_ms(&self) -> f64 {
        self.exec_avg_ns / REPORT_SCALE
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={}, {}, init: {:.6}ms, exec: {:.6}ms",
            self.size,
            self.kind.label(),
            self.init_ms(),
            self.exec_ms()
        )
    }
}

/// Write one report line
pub fn emit<W: Write + ?Sized>(out: &mut W, report: &ExperimentReport) -> std::io::Result<()> {
    writeln!(out, "{}", report)
}
