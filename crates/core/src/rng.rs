//! RNG module - random sources for piece selection
//!
//! The piece factory never touches a global generator; it draws from a
//! [`RandomSource`] it was handed. [`SimpleRng`] is the deterministic default,
//! so a seed fully determines the piece sequence.

/// Capability to pick an index uniformly from `0..len`.
pub trait RandomSource {
    /// Return a value in `0..len`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
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
        // state = a * state + c (mod 2^32), a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits of the state; the low bits of an LCG have very short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (a seed that reproduces the rest of the sequence).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_index(&mut self, len: usize) -> usize {
        self.next_range(len as u32) as usize
    }
}
