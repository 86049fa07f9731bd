//! Multi-channel circular delay buffer.
//!
//! A fixed-capacity sample arena allocated once at stream configuration and
//! indexed with modulo arithmetic by the engine. All channels share one write
//! cursor (owned by the engine), which keeps them phase-locked.

use alloc::vec;
use alloc::vec::Vec;

/// Per-channel circular sample store. Owns no cursor logic; indices are
/// caller-computed via modulo arithmetic and must be in `[0, capacity)`.
#[derive(Debug, Default)]
pub struct DelayBuffer {
    samples: Vec<f32>,
    channels: usize,
    capacity: usize,
}

impl DelayBuffer {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            channels: 0,
            capacity: 0,
        }
    }

    /// Size the storage, zero-filled. The single allocation of this type;
    /// must not be called from the audio callback.
    pub fn allocate(&mut self, channels: usize, capacity: usize) {
        self.samples = vec![0.0; channels * capacity];
        self.channels = channels;
        self.capacity = capacity;
    }

    /// Zero all channels without reallocating.
    pub fn clear(&mut self) {
        self.samples.fill(0.0);
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn read(&self, channel: usize, index: usize) -> f32 {
        debug_assert!(channel < self.channels && index < self.capacity);
        self.samples[channel * self.capacity + index]
    }

    #[inline]
    pub fn write(&mut self, channel: usize, index: usize, value: f32) {
        debug_assert!(channel < self.channels && index < self.capacity);
        self.samples[channel * self.capacity + index] = value;
    }
}
