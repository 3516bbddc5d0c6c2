//! Core types for the benchmark matrix

use serde::{Deserialize, Serialize};
use std::fmt;

/// Transform kinds under test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    /// N complex in, N complex out
    ComplexToComplex,
    /// N real in, N/2+1 complex out
    RealToComplex,
}

impl TransformKind {
    /// Label used in the report line
    pub fn label(&self) -> &'static str {
        match self {
            TransformKind::ComplexToComplex => "complex",
            TransformKind::RealToComplex => "real",
        }
    }

    /// Number of complex outputs for an input of length `n`
    pub fn output_len(&self, n: usize) -> usize {
        match self {
            TransformKind::ComplexToComplex => n,
            TransformKind::RealToComplex => n / 2 + 1,
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One cell of the experiment matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExperimentSpec {
    pub kind: TransformKind,
    pub size: usize,
}

impl ExperimentSpec {
    pub const fn new(kind: TransformKind, size: usize) -> Self {
        Self { kind, size }
    }

    pub const fn complex(size: usize) -> Self {
        Self::new(TransformKind::ComplexToComplex, size)
    }

    pub const fn real(size: usize) -> Self {
        Self::new(TransformKind::RealToComplex, size)
    }
}

impl fmt::Display for ExperimentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} n={}", self.kind, self.size)
    }
}

/// Durations captured by a single trial, in nanoseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrialMeasurement {
    /// Allocation + copy + plan construction
    pub init_ns: u64,
    /// Plan execution
    pub exec_ns: u64,
}
