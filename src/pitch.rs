//! MIDI note to frequency and frequency to delay length conversion.

#[allow(unused_imports)]
use num_traits::float::Float;

use crate::MIN_DELAY_SAMPLES;

/// 12-tone equal temperament, referenced to A4 = 440 Hz.
#[inline]
pub fn note_to_frequency(midi_note: f32) -> f32 {
    let midi_note = midi_note.clamp(0.0, 128.0);

    440.0 * ((midi_note - 69.0) / 12.0).exp2()
}

/// Delay line length in samples for a given fundamental.
///
/// The result is one sample short of `sample_rate / frequency`: the feedback
/// filter's own tap adds a one-sample delay, and subtracting it here keeps
/// the fundamental in tune. Degenerate frequencies clamp to the minimum
/// delay instead of dividing by zero.
#[inline]
pub fn samples_for_frequency(frequency_hz: f32, sample_rate: f32) -> usize {
    if frequency_hz <= 0.0 {
        return MIN_DELAY_SAMPLES;
    }

    let samples = (sample_rate / frequency_hz - 0.5) as i32;

    (samples.max(MIN_DELAY_SAMPLES as i32)) as usize
}
