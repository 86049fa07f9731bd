#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod decay;
pub mod delay_buffer;
pub mod engine;
pub mod excitation;
pub mod mixer;
pub mod params;
pub mod pitch;
pub mod random;

/// Delay buffer length in seconds, per channel.
pub const BUFFER_SECONDS: f32 = 2.0;

/// Shortest supported delay, in samples.
pub const MIN_DELAY_SAMPLES: usize = 1;

/// Maximum number of audio channels (stereo).
pub const MAX_CHANNELS: usize = 2;
