//! Fast pseudo random number generator.

// Based on MIT-licensed code (c) 2012 by Olivier Gillet (ol.gillet@gmail.com)

/// Linear congruential generator with per-instance state, so every channel
/// can own an independent stream.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(0x21)
    }
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn seed(&mut self, seed: u32) {
        self.state = seed;
    }

    #[inline]
    pub fn next_word(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn next_float(&mut self) -> f32 {
        self.next_word() as f32 / 4294967296.0
    }

    /// Uniform draw in `[-1, 1)`.
    #[inline]
    pub fn next_bipolar(&mut self) -> f32 {
        self.next_float() * 2.0 - 1.0
    }
}
