//! Per-experiment trial loop
//!
//! Each trial times two windows:
//! - init: allocate input, copy the pre-generated signal in, allocate
//!   output, build the plan
//! - exec: run the plan
//!
//! The plan and both buffers are released after the second timestamp, so
//! cleanup cost stays out of both windows.

use super::average::RunningAverage;
use super::input::InputBuffer;
use super::report::{emit, ExperimentReport};
use crate::clock::Clock;
use crate::config::BenchConfig;
use crate::engine::{check_len, EngineError, TransformEngine, TransformPlan};
use crate::error::{BenchError, Result};
use crate::types::{ExperimentSpec, TrialMeasurement};
use num_complex::Complex64;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Write;
use tracing::{debug, info, trace};

/// Running init/exec averages for one experiment
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrialAverages {
    pub init: RunningAverage,
    pub exec: RunningAverage,
}

impl TrialAverages {
    #[must_use]
    pub fn update(self, m: TrialMeasurement) -> Self {
        Self {
            init: self.init.update(m.init_ns),
            exec: self.exec.update(m.exec_ns),
        }
    }
}

/// Benchmark driver over a transform engine and a clock
pub struct BenchmarkDriver<E, C> {
    engine: E,
    clock: C,
    config: BenchConfig,
}

impl<E: TransformEngine, C: Clock> BenchmarkDriver<E, C> {
    pub fn new(engine: E, clock: C, config: BenchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { engine, clock, config })
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Run the whole experiment matrix in configured order
    pub fn run_all(&self) -> Result<Vec<ExperimentReport>> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.config
            .experiments
            .iter()
            .map(|spec| self.run_experiment(spec, &mut rng))
            .collect()
    }

    /// Run the matrix, writing each report line as soon as its experiment ends
    pub fn run_and_emit<W: Write + ?Sized>(&self, out: &mut W) -> Result<Vec<ExperimentReport>> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let mut reports = Vec::with_capacity(self.config.experiments.len());

        for spec in &self.config.experiments {
            let report = self.run_experiment(spec, &mut rng)?;
            emit(out, &report)?;
            out.flush()?;
            reports.push(report);
        }

        Ok(reports)
    }

    /// Generate input for `spec` and run the configured number of trials on it
    pub fn run_experiment(&self, spec: &ExperimentSpec, rng: &mut ChaCha8Rng) -> Result<ExperimentReport> {
        info!(kind = %spec.kind, n = spec.size, trials = self.config.trials, "starting experiment");

        let input = InputBuffer::generate(spec, rng);
        let averages = self.run_trials(spec, &input, TrialAverages::default())?;
        let report = ExperimentReport::from_averages(*spec, averages.init, averages.exec);

        info!(
            kind = %spec.kind,
            n = spec.size,
            init_avg_ns = report.init_avg_ns,
            exec_avg_ns = report.exec_avg_ns,
            "experiment finished"
        );
        Ok(report)
    }

    /// Fold `config.trials` trials into `averages` and hand them back
    pub fn run_trials(
        &self,
        spec: &ExperimentSpec,
        input: &InputBuffer,
        averages: TrialAverages,
    ) -> Result<TrialAverages> {
        let mut averages = averages;

        for i in 0..self.config.trials {
            let m = self
                .run_trial(input)
                .map_err(|source| BenchError::Engine { spec: *spec, source })?;
            trace!(trial = i, init_ns = m.init_ns, exec_ns = m.exec_ns, "trial");
            averages = averages.update(m);
        }

        debug!(%spec, trials = averages.init.count(), "trials complete");
        Ok(averages)
    }

    /// One allocate -> copy -> plan -> execute -> release cycle
    pub fn run_trial(&self, input: &InputBuffer) -> std::result::Result<TrialMeasurement, EngineError> {
        match input {
            InputBuffer::Complex(samples) => self.trial_complex(samples),
            InputBuffer::Real(samples) => self.trial_real(samples),
        }
    }

    fn trial_complex(&self, samples: &[Complex64]) -> std::result::Result<TrialMeasurement, EngineError> {
        let n = samples.len();
        let mode = self.config.plan_mode;

        let start = self.clock.now();
        let mut input = self.engine.allocate_complex(n)?;
        check_len(n, input.as_ref().len())?;
        input.as_mut().copy_from_slice(samples);
        let output = self.engine.allocate_complex(n)?;
        let mut plan = self.engine.plan_forward_complex(n, input, output, mode)?;
        let t1 = self.clock.now();

        plan.execute()?;
        let t2 = self.clock.now();

        drop(plan);
        Ok(TrialMeasurement {
            init_ns: t1.nanos_since(start),
            exec_ns: t2.nanos_since(t1),
        })
    }

    fn trial_real(&self, samples: &[f64]) -> std::result::Result<TrialMeasurement, EngineError> {
        let n = samples.len();
        let mode = self.config.plan_mode;

        let start = self.clock.now();
        let mut input = self.engine.allocate_real(n)?;
        check_len(n, input.as_ref().len())?;
        input.as_mut().copy_from_slice(samples);
        let output = self.engine.allocate_complex(n / 2 + 1)?;
        let mut plan = self.engine.plan_forward_real(n, input, output, mode)?;
        let t1 = self.clock.now();

        plan.execute()?;
        let t2 = self.clock.now();

        drop(plan);
        Ok(TrialMeasurement {
            init_ns: t1.nanos_since(start),
            exec_ns: t2.nanos_since(t1),
        })
    }
}
