//! RNG module - uniform block colors from a seeded generator
//!
//! Every new entry block is drawn uniformly from the five-color palette.
//! A simple LCG keeps games reproducible from their seed, which the tests
//! and benchmarks rely on.

use crate::types::{BlockColor, PALETTE};

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
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (((self.next_u32() as u64) * (max as u64)) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Source of entry-block colors
#[derive(Debug, Clone)]
pub struct ColorSource {
    rng: SimpleRng,
}

impl ColorSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next color, uniform over the palette
    pub fn next_color(&mut self) -> BlockColor {
        let i = self.rng.next_range(PALETTE.len() as u32) as usize;
        PALETTE[i]
    }

    /// Current generator state, usable as the seed of the next game
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for ColorSource {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(5) < 5);
        }
    }

    #[test]
    fn test_color_source_covers_palette() {
        let mut source = ColorSource::new(7);
        let mut counts = [0u32; 5];
        for _ in 0..5000 {
            let color = source.next_color();
            let i = PALETTE.iter().position(|c| *c == color).unwrap();
            counts[i] += 1;
        }
        // Roughly uniform: each color near 1000 draws.
        for (i, n) in counts.iter().enumerate() {
            assert!(*n > 800 && *n < 1200, "color {} drawn {} times", i, n);
        }
    }

    #[test]
    fn test_color_source_same_seed_same_sequence() {
        let mut a = ColorSource::new(42);
        let mut b = ColorSource::new(42);
        for _ in 0..50 {
            assert_eq!(a.next_color(), b.next_color());
        }
    }
}
