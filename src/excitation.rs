//! Excitation strategies for the resonator.

use crate::delay_buffer::DelayBuffer;
use crate::random::Lcg;

/// How the delay line receives energy. The two modes are mutually exclusive
/// per engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExcitationMode {
    /// Note-on events reseed the line with a noise burst; the tone decays
    /// naturally between triggers (percussive pluck).
    Triggered,
    /// No reseeding; the delay length is re-tuned every block and the live
    /// dry input feeds the loop continuously (drone/resonator).
    Sustained,
}

/// Seeds the delay line on trigger events. Each channel owns an independent
/// noise stream so the stereo image decorrelates.
#[derive(Debug)]
pub struct ExcitationController {
    noise: [Lcg; crate::MAX_CHANNELS],
}

impl Default for ExcitationController {
    fn default() -> Self {
        Self::new()
    }
}

impl ExcitationController {
    pub fn new() -> Self {
        Self {
            noise: [Lcg::new(0x21), Lcg::new(0x8d5a)],
        }
    }

    /// Reseed for a new pluck: clear the line, then overwrite the most
    /// recent `delay_samples` of each channel with uniform noise in
    /// `[-1, 1]`. With the write cursor reset to 0, the read cursor lands
    /// exactly on the seeded tail.
    pub fn trigger(&mut self, buffer: &mut DelayBuffer, delay_samples: usize) {
        let capacity = buffer.capacity();
        let delay_samples = delay_samples.min(capacity - 1);

        buffer.clear();
        for channel in 0..buffer.channels() {
            let noise = &mut self.noise[channel];
            for i in capacity - delay_samples..capacity {
                buffer.write(channel, i, noise.next_bipolar());
            }
        }
    }
}
