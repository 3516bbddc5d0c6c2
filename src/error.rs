//! Benchmark error types

use crate::engine::EngineError;
use crate::types::ExperimentSpec;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    /// Engine failure mid-experiment; the timing series is void
    #[error("engine failure in {spec}: {source}")]
    Engine {
        spec: ExperimentSpec,
        #[source]
        source: EngineError,
    },

    #[error("invalid benchmark config: {0}")]
    InvalidConfig(String),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
