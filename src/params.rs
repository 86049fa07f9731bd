//! Host parameter store interface.
//!
//! The engine never depends on a concrete automation or UI framework; it
//! reads a snapshot of these parameters once per block through [`ParamStore`]
//! and publishes exactly one derived value (the pitch-tracked delay length)
//! back through the same interface. Implementations must be lock-free on
//! both sides: `read` and `publish` are called from the real-time audio
//! thread.

use core::sync::atomic::{AtomicU32, Ordering};

/// Host-visible, automatable parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamId {
    /// Decay control, mapped through [`crate::decay::map_decay`].
    Feedback,
    /// Dry signal gain in dB.
    DryGainDb,
    /// Wet signal gain in dB.
    WetGainDb,
    /// Blend between the two nearest delay taps.
    Color,
    /// Delay length in samples. Derived from pitch by the engine and
    /// published back so the control surface tracks the audio-driven value.
    DelaySamples,
    /// MIDI note number driving the pitch tracker.
    NoteNumber,
    /// Feedback sign inversion (odd-harmonics-dominant tone). Nonzero = on.
    SquareMode,
}

pub const NUM_PARAMS: usize = 7;

impl ParamId {
    pub const ALL: [ParamId; NUM_PARAMS] = [
        ParamId::Feedback,
        ParamId::DryGainDb,
        ParamId::WetGainDb,
        ParamId::Color,
        ParamId::DelaySamples,
        ParamId::NoteNumber,
        ParamId::SquareMode,
    ];

    /// Declared host-facing range.
    pub fn range(self) -> (f32, f32) {
        match self {
            ParamId::Feedback => (0.0, 1.0),
            ParamId::DryGainDb => (-60.0, 12.0),
            ParamId::WetGainDb => (-60.0, 12.0),
            ParamId::Color => (0.0, 1.0),
            ParamId::DelaySamples => (10.0, 10000.0),
            ParamId::NoteNumber => (0.0, 128.0),
            ParamId::SquareMode => (0.0, 1.0),
        }
    }

    pub fn default_value(self) -> f32 {
        match self {
            ParamId::Feedback => 0.1,
            ParamId::DryGainDb => 0.0,
            ParamId::WetGainDb => -15.0,
            ParamId::Color => 0.5,
            ParamId::DelaySamples => 200.0,
            ParamId::NoteNumber => 60.0,
            ParamId::SquareMode => 0.0,
        }
    }

    fn index(self) -> usize {
        match self {
            ParamId::Feedback => 0,
            ParamId::DryGainDb => 1,
            ParamId::WetGainDb => 2,
            ParamId::Color => 3,
            ParamId::DelaySamples => 4,
            ParamId::NoteNumber => 5,
            ParamId::SquareMode => 6,
        }
    }
}

/// Capability interface over the host-owned parameter object.
pub trait ParamStore {
    /// Latest published value. Wait-free; called from the audio thread.
    fn read(&self, id: ParamId) -> f32;

    /// Publish a value, clamped to the declared range. Wait-free; this is
    /// the readback path for engine-derived parameters and must never block
    /// on the control thread.
    fn publish(&self, id: ParamId, value: f32);
}

/// Lock-free parameter store backed by one atomic slot per parameter.
///
/// Values are f32 bit patterns in `AtomicU32`s with relaxed ordering: each
/// slot is an independent single-writer register, so no ordering between
/// parameters is needed and a reader always observes some complete value.
#[derive(Debug)]
pub struct AtomicParamStore {
    slots: [AtomicU32; NUM_PARAMS],
}

impl Default for AtomicParamStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AtomicParamStore {
    /// Create a store seeded with every parameter's default value.
    pub fn new() -> Self {
        let slots = core::array::from_fn(|i| {
            AtomicU32::new(ParamId::ALL[i].default_value().to_bits())
        });

        Self { slots }
    }
}

impl ParamStore for AtomicParamStore {
    #[inline]
    fn read(&self, id: ParamId) -> f32 {
        f32::from_bits(self.slots[id.index()].load(Ordering::Relaxed))
    }

    #[inline]
    fn publish(&self, id: ParamId, value: f32) {
        let (min, max) = id.range();
        self.slots[id.index()].store(value.clamp(min, max).to_bits(), Ordering::Relaxed);
    }
}

/// Timestamped note-on within a block. Note-off and other event types are
/// not consumed by the engine.
#[derive(Debug, Clone, Copy)]
pub struct NoteEvent {
    /// Sample offset from the start of the block.
    pub offset: usize,
    /// MIDI note number.
    pub note: u8,
}
