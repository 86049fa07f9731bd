//! Decay control to feedback coefficient mapping.

#[allow(unused_imports)]
use num_traits::float::Float;

/// Remap a linear decay control in `[0, 1]` to a feedback coefficient.
///
/// A raw coefficient near 1.0 decays almost inaudibly slowly, which crams
/// the useful decay times into the top of the control's travel. The
/// exponential curve spreads them evenly; the divisor normalizes the output
/// to reach 1.0 at full control.
#[inline]
pub fn map_decay(control: f32) -> f32 {
    let control = control.clamp(0.0, 1.0);

    // The normalization overshoots 1.0 by ~7e-5 at full control; cap it so
    // the coefficient never leaves [0, 1].
    ((1.0 - (-4.8 * control).exp()) / 0.9917).min(1.0)
}
