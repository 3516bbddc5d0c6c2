//! Synthetic input signals

use crate::types::{ExperimentSpec, TransformKind};
use num_complex::Complex64;
use rand::Rng;

/// Lower bound of generated sample values (inclusive)
pub const SAMPLE_MIN: f64 = -100.0;
/// Upper bound of generated sample values (exclusive)
pub const SAMPLE_MAX: f64 = 100.0;

/// Pre-generated experiment input, read-only during trials
#[derive(Debug, Clone, PartialEq)]
pub enum InputBuffer {
    Complex(Vec<Complex64>),
    Real(Vec<f64>),
}

#[inline]
fn sample<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // u in [0, 1) maps to [-100, 100)
    (SAMPLE_MAX - SAMPLE_MIN) * (rng.gen::<f64>() - 0.5)
}

/// `n` complex samples, real and imaginary parts drawn independently
pub fn generate_complex<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Complex64> {
    (0..n)
        .map(|_| {
            let re = sample(rng);
            let im = sample(rng);
            Complex64::new(re, im)
        })
        .collect()
}

/// `n` real samples
pub fn generate_real<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<f64> {
    (0..n).map(|_| sample(rng)).collect()
}

impl InputBuffer {
    pub fn generate<R: Rng + ?Sized>(spec: &ExperimentSpec, rng: &mut R) -> Self {
        match spec.kind {
            TransformKind::ComplexToComplex => Self::Complex(generate_complex(spec.size, rng)),
            TransformKind::RealToComplex => Self::Real(generate_real(spec.size, rng)),
        }
    }

    pub fn kind(&self) -> TransformKind {
        match self {
            Self::Complex(_) => TransformKind::ComplexToComplex,
            Self::Real(_) => TransformKind::RealToComplex,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Complex(samples) => samples.len(),
            Self::Real(samples) => samples.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
