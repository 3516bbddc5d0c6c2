//! Configuration module

use crate::engine::PlanMode;
use crate::error::BenchError;
use crate::types::ExperimentSpec;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Trials per experiment in the default run
pub const DEFAULT_TRIALS: u32 = 1000;

/// Sizes exercised for every transform kind in the default run
pub const DEFAULT_SIZES: [usize; 2] = [100, 10_000];

/// Benchmark configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Experiments in run order
    pub experiments: Vec<ExperimentSpec>,

    /// Trials per experiment
    pub trials: u32,

    /// Seed for synthetic input generation
    pub seed: u64,

    /// Planning strategy passed to the engine
    #[serde(default)]
    pub plan_mode: PlanMode,
}

impl Default for BenchConfig {
    fn default() -> Self {
        let complex = DEFAULT_SIZES.iter().map(|&n| ExperimentSpec::complex(n));
        let real = DEFAULT_SIZES.iter().map(|&n| ExperimentSpec::real(n));

        Self {
            experiments: complex.chain(real).collect(),
            trials: DEFAULT_TRIALS,
            seed: 0,
            plan_mode: PlanMode::Estimate,
        }
    }
}

impl BenchConfig {
    /// Load config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: BenchConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if self.trials == 0 {
            return Err(BenchError::InvalidConfig("trials must be at least 1".into()));
        }
        if self.experiments.is_empty() {
            return Err(BenchError::InvalidConfig("experiment matrix is empty".into()));
        }
        if let Some(spec) = self.experiments.iter().find(|s| s.size == 0) {
            return Err(BenchError::InvalidConfig(format!(
                "{} experiment has size 0",
                spec.kind
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransformKind;

    #[test]
    fn test_default_matrix_order() {
        let config = BenchConfig::default();
        assert_eq!(
            config.experiments,
            vec![
                ExperimentSpec::complex(100),
                ExperimentSpec::complex(10_000),
                ExperimentSpec::real(100),
                ExperimentSpec::real(10_000),
            ]
        );
        assert_eq!(config.trials, 1000);
        assert_eq!(config.plan_mode, PlanMode::Estimate);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.json");

        let config = BenchConfig {
            experiments: vec![ExperimentSpec::new(TransformKind::RealToComplex, 64)],
            trials: 10,
            seed: 42,
            plan_mode: PlanMode::Scalar,
        };
        config.save(&path).unwrap();

        let loaded = BenchConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_plan_mode_defaults_when_missing() {
        let json = r#"{"experiments":[{"kind":"complex_to_complex","size":8}],"trials":3,"seed":1}"#;
        let config: BenchConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.plan_mode, PlanMode::Estimate);
    }

    #[test]
    fn test_rejects_invalid() {
        let zero_trials = BenchConfig { trials: 0, ..BenchConfig::default() };
        assert!(matches!(zero_trials.validate(), Err(BenchError::InvalidConfig(_))));

        let empty = BenchConfig { experiments: vec![], ..BenchConfig::default() };
        assert!(matches!(empty.validate(), Err(BenchError::InvalidConfig(_))));

        let zero_size = BenchConfig {
            experiments: vec![ExperimentSpec::complex(0)],
            ..BenchConfig::default()
        };
        assert!(matches!(zero_size.validate(), Err(BenchError::InvalidConfig(_))));
    }
}
