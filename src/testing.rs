//! Instrumented clock and engine for exercising the driver
//!
//! `FakeEngine` does no transform work. It counts every allocate, release,
//! plan, execute and destroy, and advances a shared `SimulatedClock` by
//! configurable amounts so trial durations are exact.

use crate::clock::{Clock, Timestamp};
use crate::engine::{check_len, EngineError, PlanMode, TransformEngine, TransformPlan};
use num_complex::Complex64;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Clock that only moves when told to
#[derive(Debug, Clone, Default)]
pub struct SimulatedClock {
    nanos: Arc<AtomicU64>,
}

impl SimulatedClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ns: u64) {
        self.nanos.fetch_add(ns, Ordering::Relaxed);
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.nanos.load(Ordering::Relaxed))
    }
}

/// Simulated cost of each engine call, in nanoseconds
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeCosts {
    pub allocate_ns: u64,
    pub plan_ns: u64,
    pub execute_ns: u64,
    pub release_ns: u64,
}

/// Call counters shared between the engine and everything it hands out
#[derive(Debug, Default)]
pub struct EngineCalls {
    pub complex_allocs: AtomicU64,
    pub real_allocs: AtomicU64,
    pub releases: AtomicU64,
    pub plans_created: AtomicU64,
    pub plans_destroyed: AtomicU64,
    pub executions: AtomicU64,
}

impl EngineCalls {
    pub fn allocations(&self) -> u64 {
        self.complex_allocs.load(Ordering::Relaxed) + self.real_allocs.load(Ordering::Relaxed)
    }

    pub fn releases(&self) -> u64 {
        self.releases.load(Ordering::Relaxed)
    }

    pub fn plans_created(&self) -> u64 {
        self.plans_created.load(Ordering::Relaxed)
    }

    pub fn plans_destroyed(&self) -> u64 {
        self.plans_destroyed.load(Ordering::Relaxed)
    }

    pub fn executions(&self) -> u64 {
        self.executions.load(Ordering::Relaxed)
    }

    /// Buffers allocated and not yet released
    pub fn live_buffers(&self) -> u64 {
        self.allocations() - self.releases()
    }

    /// Plans created and not yet destroyed
    pub fn live_plans(&self) -> u64 {
        self.plans_created() - self.plans_destroyed()
    }
}

/// Buffer that reports its own release
pub struct FakeBuffer<T> {
    data: Vec<T>,
    calls: Arc<EngineCalls>,
    clock: SimulatedClock,
    release_ns: u64,
}

impl<T> AsRef<[T]> for FakeBuffer<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> AsMut<[T]> for FakeBuffer<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Drop for FakeBuffer<T> {
    fn drop(&mut self) {
        self.calls.releases.fetch_add(1, Ordering::Relaxed);
        self.clock.advance(self.release_ns);
    }
}

enum FakeInput {
    Complex(#[allow(dead_code)] FakeBuffer<Complex64>),
    Real(#[allow(dead_code)] FakeBuffer<f64>),
}

/// Plan that owns its buffers and reports its own destruction
pub struct FakePlan {
    _input: FakeInput,
    output: FakeBuffer<Complex64>,
    calls: Arc<EngineCalls>,
    clock: SimulatedClock,
    execute_ns: u64,
    fail: bool,
}

impl TransformPlan for FakePlan {
    fn execute(&mut self) -> Result<(), EngineError> {
        self.clock.advance(self.execute_ns);
        self.calls.executions.fetch_add(1, Ordering::Relaxed);
        if self.fail {
            return Err(EngineError::Execution("injected failure".into()));
        }
        Ok(())
    }

    fn output(&self) -> &[Complex64] {
        self.output.as_ref()
    }
}

impl Drop for FakePlan {
    fn drop(&mut self) {
        self.calls.plans_destroyed.fetch_add(1, Ordering::Relaxed);
    }
}

/// Counting engine driven by a [`SimulatedClock`]
pub struct FakeEngine {
    clock: SimulatedClock,
    costs: FakeCosts,
    calls: Arc<EngineCalls>,
    fail_execute_at: Option<u64>,
}

impl FakeEngine {
    pub fn new(clock: SimulatedClock, costs: FakeCosts) -> Self {
        Self {
            clock,
            costs,
            calls: Arc::new(EngineCalls::default()),
            fail_execute_at: None,
        }
    }

    /// Make the plan created as call number `plan_index` (0-based) fail on execute
    pub fn fail_execute_at(mut self, plan_index: u64) -> Self {
        self.fail_execute_at = Some(plan_index);
        self
    }

    pub fn calls(&self) -> Arc<EngineCalls> {
        self.calls.clone()
    }

    fn buffer<T: Clone + Default>(&self, n: usize) -> FakeBuffer<T> {
        self.clock.advance(self.costs.allocate_ns);
        FakeBuffer {
            data: vec![T::default(); n],
            calls: self.calls.clone(),
            clock: self.clock.clone(),
            release_ns: self.costs.release_ns,
        }
    }

    fn plan(&self, input: FakeInput, output: FakeBuffer<Complex64>) -> FakePlan {
        self.clock.advance(self.costs.plan_ns);
        let index = self.calls.plans_created.fetch_add(1, Ordering::Relaxed);
        FakePlan {
            _input: input,
            output,
            calls: self.calls.clone(),
            clock: self.clock.clone(),
            execute_ns: self.costs.execute_ns,
            fail: self.fail_execute_at == Some(index),
        }
    }
}

impl TransformEngine for FakeEngine {
    type ComplexBuffer = FakeBuffer<Complex64>;
    type RealBuffer = FakeBuffer<f64>;
    type Plan = FakePlan;

    fn allocate_complex(&self, n: usize) -> Result<FakeBuffer<Complex64>, EngineError> {
        self.calls.complex_allocs.fetch_add(1, Ordering::Relaxed);
        Ok(self.buffer(n))
    }

    fn allocate_real(&self, n: usize) -> Result<FakeBuffer<f64>, EngineError> {
        self.calls.real_allocs.fetch_add(1, Ordering::Relaxed);
        Ok(self.buffer(n))
    }

    fn plan_forward_complex(
        &self,
        n: usize,
        input: FakeBuffer<Complex64>,
        output: FakeBuffer<Complex64>,
        _mode: PlanMode,
    ) -> Result<FakePlan, EngineError> {
        if n == 0 {
            return Err(EngineError::ZeroLength);
        }
        check_len(n, input.as_ref().len())?;
        check_len(n, output.as_ref().len())?;
        Ok(self.plan(FakeInput::Complex(input), output))
    }

    fn plan_forward_real(
        &self,
        n: usize,
        input: FakeBuffer<f64>,
        output: FakeBuffer<Complex64>,
        _mode: PlanMode,
    ) -> Result<FakePlan, EngineError> {
        if n == 0 {
            return Err(EngineError::ZeroLength);
        }
        check_len(n, input.as_ref().len())?;
        check_len(n / 2 + 1, output.as_ref().len())?;
        Ok(self.plan(FakeInput::Real(input), output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_releases_plan_and_buffers() {
        let clock = SimulatedClock::new();
        let engine = FakeEngine::new(clock, FakeCosts::default());
        let calls = engine.calls();

        let input = engine.allocate_real(10).unwrap();
        let output = engine.allocate_complex(6).unwrap();
        let plan = engine.plan_forward_real(10, input, output, PlanMode::Estimate).unwrap();
        assert_eq!(calls.live_buffers(), 2);
        assert_eq!(calls.live_plans(), 1);

        drop(plan);
        assert_eq!(calls.live_buffers(), 0);
        assert_eq!(calls.live_plans(), 0);
    }

    #[test]
    fn test_plan_error_still_releases_buffers() {
        let engine = FakeEngine::new(SimulatedClock::new(), FakeCosts::default());
        let calls = engine.calls();

        let input = engine.allocate_complex(4).unwrap();
        let output = engine.allocate_complex(3).unwrap();
        let err = engine.plan_forward_complex(4, input, output, PlanMode::Estimate).err();

        assert_eq!(err, Some(EngineError::LengthMismatch { expected: 4, actual: 3 }));
        assert_eq!(calls.live_buffers(), 0);
        assert_eq!(calls.plans_created(), 0);
    }

    #[test]
    fn test_clock_advances_by_costs() {
        let clock = SimulatedClock::new();
        let costs = FakeCosts { allocate_ns: 3, plan_ns: 100, execute_ns: 50, release_ns: 7 };
        let engine = FakeEngine::new(clock.clone(), costs);

        let input = engine.allocate_complex(2).unwrap();
        let output = engine.allocate_complex(2).unwrap();
        let mut plan = engine.plan_forward_complex(2, input, output, PlanMode::Estimate).unwrap();
        assert_eq!(clock.now(), Timestamp(106));

        plan.execute().unwrap();
        assert_eq!(clock.now(), Timestamp(156));

        drop(plan);
        assert_eq!(clock.now(), Timestamp(170));
    }
}
