//! Block driver and resonator core.
//!
//! Runs the per-sample Karplus-Strong loop inside the host's audio callback:
//! reads a parameter snapshot once per block, re-tunes or reseeds the delay
//! line, then recirculates the delayed signal through the damping filter.
//! Nothing here allocates, locks or blocks after [`Engine::configure`].

#[allow(unused_imports)]
use num_traits::float::Float;

use no_denormals::no_denormals;

use crate::decay::map_decay;
use crate::delay_buffer::DelayBuffer;
use crate::excitation::{ExcitationController, ExcitationMode};
use crate::mixer::{db_to_gain, mix};
use crate::params::{NoteEvent, ParamId, ParamStore};
use crate::pitch::{note_to_frequency, samples_for_frequency};
use crate::{BUFFER_SECONDS, MAX_CHANNELS, MIN_DELAY_SAMPLES};

/// Feedback loop arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTopology {
    /// The dry input enters the feedback sum and the wet output is the comb
    /// residue (`total - dry`): a pluck layered under the dry signal.
    CombMix,
    /// Only the damped tap recirculates; the undamped tap is the wet output.
    Resonator,
}

/// Static engine configuration, fixed per instance. Square mode is not part
/// of this: it is a click-free sign flip and stays automatable at block rate
/// through the parameter store.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub topology: FeedbackTopology,
    pub excitation: ExcitationMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            topology: FeedbackTopology::CombMix,
            excitation: ExcitationMode::Sustained,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No storage allocated; entered at construction and on teardown.
    Idle,
    /// Buffer allocated, cursor advancing.
    Running,
}

/// Parameter snapshot taken once per block. Values may lag true automation
/// by up to one block; they are never re-read mid-block.
#[derive(Debug, Clone, Copy)]
struct BlockParams {
    feedback: f32,
    color: f32,
    dry_gain: f32,
    wet_gain: f32,
}

/// Single resonant voice spanning all channels of the stream.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    state: EngineState,
    buffer: DelayBuffer,
    excitation: ExcitationController,

    // Shared across channels; advances once per sample, keeping the
    // channels phase-locked.
    write_position: usize,
    delay_samples: usize,
    sample_rate: f32,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: EngineState::Idle,
            buffer: DelayBuffer::new(),
            excitation: ExcitationController::new(),
            write_position: 0,
            delay_samples: MIN_DELAY_SAMPLES,
            sample_rate: 0.0,
        }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn write_position(&self) -> usize {
        self.write_position
    }

    pub fn delay_samples(&self) -> usize {
        self.delay_samples
    }

    /// Allocate storage for a stream. Returns `false` for unsupported
    /// layouts (only mono and stereo are accepted), leaving the engine
    /// idle. Never called concurrently with [`Engine::process`]; the host
    /// stops the stream around configuration changes.
    pub fn configure(&mut self, channels: usize, sample_rate: f32) -> bool {
        if channels == 0 || channels > MAX_CHANNELS || sample_rate <= 0.0 {
            self.state = EngineState::Idle;
            return false;
        }

        // The line must hold at least the minimum delay plus the write slot.
        let capacity = (sample_rate * BUFFER_SECONDS).ceil() as usize;
        if capacity <= MIN_DELAY_SAMPLES {
            self.state = EngineState::Idle;
            return false;
        }
        self.buffer.allocate(channels, capacity);
        self.sample_rate = sample_rate;
        self.write_position = 0;
        self.delay_samples = MIN_DELAY_SAMPLES;
        self.state = EngineState::Running;

        true
    }

    /// Stream teardown; drops back to idle. Storage is kept for the next
    /// [`Engine::configure`].
    pub fn release(&mut self) {
        self.state = EngineState::Idle;
    }

    /// Process one block in place. `channels` holds one buffer per
    /// configured channel, all of equal length; `events` are note-ons in
    /// timestamp order. Real-time safe.
    pub fn process<P: ParamStore>(
        &mut self,
        channels: &mut [&mut [f32]],
        events: &[NoteEvent],
        params: &P,
    ) {
        if self.state != EngineState::Running || channels.is_empty() {
            return;
        }
        debug_assert_eq!(channels.len(), self.buffer.channels());

        let block_params = self.snapshot(params);
        let block_len = channels[0].len();

        no_denormals(|| match self.config.excitation {
            ExcitationMode::Triggered => {
                // Split the block at each event: render up to the trigger,
                // reseed, resume. The last trigger wins for the tail.
                let mut start = 0;
                for event in events {
                    let offset = event.offset.min(block_len);
                    self.render(channels, start, offset, &block_params);
                    self.trigger(event.note, params);
                    start = offset;
                }
                self.render(channels, start, block_len, &block_params);
            }
            ExcitationMode::Sustained => {
                self.retune(params.read(ParamId::NoteNumber), params);
                self.render(channels, 0, block_len, &block_params);
            }
        });
    }

    fn snapshot<P: ParamStore>(&self, params: &P) -> BlockParams {
        let mut feedback = map_decay(params.read(ParamId::Feedback));
        if params.read(ParamId::SquareMode) >= 0.5 {
            // Every other reflection flips polarity, pushing the spectrum
            // toward odd harmonics.
            feedback = -feedback;
        }

        BlockParams {
            feedback,
            color: params.read(ParamId::Color).clamp(0.0, 1.0),
            dry_gain: db_to_gain(params.read(ParamId::DryGainDb)),
            wet_gain: db_to_gain(params.read(ParamId::WetGainDb)),
        }
    }

    /// Recompute the delay length from a pitch and publish it back so the
    /// control surface follows the audio-driven value. One-way: audio to
    /// displayed parameter, never the reverse.
    fn retune<P: ParamStore>(&mut self, note: f32, params: &P) {
        let frequency = note_to_frequency(note);
        let samples = samples_for_frequency(frequency, self.sample_rate);
        self.delay_samples = samples.clamp(MIN_DELAY_SAMPLES, self.buffer.capacity() - 1);
        params.publish(ParamId::DelaySamples, self.delay_samples as f32);
    }

    fn trigger<P: ParamStore>(&mut self, note: u8, params: &P) {
        self.retune(note as f32, params);
        self.excitation.trigger(&mut self.buffer, self.delay_samples);
        self.write_position = 0;
    }

    fn render(
        &mut self,
        channels: &mut [&mut [f32]],
        start: usize,
        end: usize,
        block_params: &BlockParams,
    ) {
        let capacity = self.buffer.capacity();
        let feed_dry = self.config.excitation == ExcitationMode::Sustained;

        for sample in start..end {
            let read_position = (self.write_position + capacity - self.delay_samples) % capacity;
            let tap_b_position = (read_position + capacity - 1) % capacity;

            // Every channel processes the same sample index against the
            // same cursor pair.
            for (channel, data) in channels.iter_mut().enumerate() {
                let dry = data[sample];
                let tap_a = self.buffer.read(channel, read_position);
                let tap_b = self.buffer.read(channel, tap_b_position);

                // Two-tap blend acting as a tunable low-pass inside the
                // loop; softens the metallic edge of the raw algorithm.
                let filtered =
                    tap_a * block_params.color + tap_b * (1.0 - block_params.color);

                let wet = match self.config.topology {
                    FeedbackTopology::CombMix => {
                        let total = dry + block_params.feedback * filtered;
                        self.buffer.write(channel, self.write_position, total);
                        total - dry
                    }
                    FeedbackTopology::Resonator => {
                        let input = if feed_dry { dry } else { 0.0 };
                        self.buffer.write(
                            channel,
                            self.write_position,
                            (filtered + input) * block_params.feedback,
                        );
                        tap_a
                    }
                };

                data[sample] = mix(dry, wet, block_params.dry_gain, block_params.wet_gain);
            }

            // Once per sample, not once per channel-sample.
            self.write_position = (self.write_position + 1) % capacity;
        }
    }
}
