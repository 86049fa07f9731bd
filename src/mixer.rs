//! Dry/wet mixing with decibel-scaled gains.

#[allow(unused_imports)]
use num_traits::float::Float;

/// Gains at or below this level are treated as silence.
pub const SILENCE_FLOOR_DB: f32 = -60.0;

/// Decibels to linear gain, with a hard zero at the silence floor instead of
/// a true negative-infinity ramp (avoids denormal/underflow artifacts).
#[inline]
pub fn db_to_gain(db: f32) -> f32 {
    if db <= SILENCE_FLOOR_DB {
        0.0
    } else {
        10.0f32.powf(db * 0.05)
    }
}

/// Combine dry and wet signals with independent gains. No normalization and
/// no clipping; the output may exceed unity and downstream headroom is the
/// caller's concern.
#[inline]
pub fn mix(dry: f32, wet: f32, dry_gain: f32, wet_gain: f32) -> f32 {
    dry * dry_gain + wet * wet_gain
}
