//! RNG module - swappable randomness for food placement and piece selection
//!
//! Both engines draw every random number through [`RandomSource`], so tests can
//! inject a scripted sequence and production can use a seeded LCG or any
//! `rand` generator.

use rand::RngCore;

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Return a value in `[0, bound)`. `bound` must be non-zero.
    fn next_below(&mut self, bound: u32) -> u32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.next_range(bound)
    }
}

/// Adapter exposing any `rand` generator as a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RandRng<R>(pub R);

impl<R: RngCore> RandomSource for RandRng<R> {
    fn next_below(&mut self, bound: u32) -> u32 {
        use rand::Rng;
        self.0.gen_range(0..bound)
    }
}

/// Replays a fixed script of values, wrapping around when exhausted.
///
/// Each scripted value is reduced modulo the requested bound, so a script
/// written for one bound stays in range for any other.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0);
        }
        Self { values, cursor: 0 }
    }

    /// Number of values consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v % bound
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}
