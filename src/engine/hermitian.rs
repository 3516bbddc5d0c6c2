//! Full-spectrum view over a real-to-complex half spectrum
//!
//! A real signal of length n has `X[n-k] == conj(X[k])`, so the r2c output
//! only stores bins `0..=n/2`. This iterator walks the stored bins forward
//! and then mirrors them back, conjugated, to produce all n bins.

use num_complex::Complex64;

pub struct HermitianIter<'a> {
    half: &'a [Complex64],
    n: usize,
    pos: usize,
}

impl<'a> HermitianIter<'a> {
    /// `half` must hold at least `n/2 + 1` bins when `n > 0`
    pub fn new(half: &'a [Complex64], n: usize) -> Self {
        debug_assert!(n == 0 || half.len() > n / 2);
        Self { half, n, pos: 0 }
    }
}

impl Iterator for HermitianIter<'_> {
    type Item = Complex64;

    fn next(&mut self) -> Option<Complex64> {
        if self.pos >= self.n {
            return None;
        }
        let k = self.pos;
        self.pos += 1;
        if k <= self.n / 2 {
            Some(self.half[k])
        } else {
            Some(self.half[self.n - k].conj())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.n - self.pos;
        (left, Some(left))
    }
}

impl ExactSizeIterator for HermitianIter<'_> {}
