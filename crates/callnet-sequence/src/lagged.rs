//! The lagged Fibonacci generator itself.

use crate::seed::{seed_value, SeedCoefficients};
use crate::{LONG_LAG, MODULUS, SHORT_LAG};

/// Infinite, reproducible sequence of values in `[0, 999999]`.
///
/// Each instance owns its ring and cursor; restarting the sequence means
/// building a fresh generator with the same coefficients.
#[derive(Debug, Clone)]
pub struct LaggedFibonacci {
    ring: [u32; LONG_LAG],
    cursor: u64,
    coefficients: SeedCoefficients,
}

impl LaggedFibonacci {
    /// Generator seeded with the canonical coefficients.
    pub fn new() -> Self {
        Self::with_coefficients(SeedCoefficients::CANONICAL)
    }

    /// Generator seeded with custom polynomial coefficients.
    pub fn with_coefficients(coefficients: SeedCoefficients) -> Self {
        let mut ring = [0u32; LONG_LAG];
        let lag = LONG_LAG as i64;
        for i in (1 - lag)..=0 {
            ring[((i + lag) % lag) as usize] = seed_value(i, coefficients);
        }

        Self {
            ring,
            cursor: 0,
            coefficients,
        }
    }

    /// Produce the next value of the sequence.
    #[inline]
    pub fn next_value(&mut self) -> u32 {
        let k = self.cursor;
        let idx = (k % LONG_LAG as u64) as usize;
        let short = ((k + (LONG_LAG - SHORT_LAG) as u64) % LONG_LAG as u64) as usize;
        // k - 55 lands on the slot being overwritten
        let long = idx;

        let value = (self.ring[short] + self.ring[long]) % MODULUS;
        self.ring[idx] = value;
        self.cursor += 1;
        value
    }

    /// Draw one call: `(caller, called)`.
    #[inline]
    pub fn next_pair(&mut self) -> (u32, u32) {
        let caller = self.next_value();
        let called = self.next_value();
        (caller, called)
    }

    /// Number of values drawn since seeding.
    pub fn draws(&self) -> u64 {
        self.cursor
    }

    /// Coefficients this generator was seeded with.
    pub fn coefficients(&self) -> SeedCoefficients {
        self.coefficients
    }
}

impl Default for LaggedFibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for LaggedFibonacci {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
