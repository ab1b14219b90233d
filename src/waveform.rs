//! Waveform Shaping and Modulation Math
//!
//! Stateless building blocks for the oscillator core. Every shape is a
//! function of the phase alone, in the range -1..1; scaling to the ±5V
//! output convention happens in the core.

use libm::Libm;
use std::f64::consts::TAU;

/// Middle C, the pitch produced at 0V / knob centre.
pub const FREQ_C4: f64 = 261.6256;

/// Lower bound of the effective pulse width.
pub const PULSE_WIDTH_MIN: f64 = 0.01;

/// Upper bound of the effective pulse width.
pub const PULSE_WIDTH_MAX: f64 = 0.99;

/// Peak output voltage for all waveforms.
pub const OUTPUT_SCALE: f64 = 5.0;

/// Time for the sync light to fade from full brightness to off, in seconds.
pub const SYNC_LIGHT_FADE: f64 = 0.15;

/// Exponential pitch law: doubles per octave above `reference`.
#[inline]
pub fn pitch_to_frequency(reference: f64, octaves: f64) -> f64 {
    reference * Libm::<f64>::pow(2.0, octaves)
}

/// Linear FM offset in Hz. A ±5V signal at full depth swings by ±`reference`.
#[inline]
pub fn fm_offset(reference: f64, depth: f64, cv: f64) -> f64 {
    depth * cv * reference / 5.0
}

#[inline]
pub fn sine(phase: f64) -> f64 {
    Libm::<f64>::sin(TAU * phase)
}

/// Symmetric triangle: +1 at phase 0 and 1, -1 at phase 0.5.
#[inline]
pub fn triangle(phase: f64) -> f64 {
    4.0 * (phase - 0.5).abs() - 1.0
}

/// Rising ramp from -1 to 1 across the cycle, no band-limiting.
#[inline]
pub fn sawtooth(phase: f64) -> f64 {
    2.0 * phase - 1.0
}

/// High while the phase is below the pulse width.
#[inline]
pub fn pulse(phase: f64, width: f64) -> f64 {
    if phase < width {
        1.0
    } else {
        -1.0
    }
}

/// Pulse width after optional modulation, clamped to
/// [`PULSE_WIDTH_MIN`, `PULSE_WIDTH_MAX`].
///
/// `pwm` is `(depth, cv)` when the modulation jack is patched. A ±10V
/// signal at full depth moves the width by ±0.5 before clamping.
#[inline]
pub fn effective_pulse_width(base: f64, pwm: Option<(f64, f64)>) -> f64 {
    let mut width = base;
    if let Some((depth, cv)) = pwm {
        width += (cv / 10.0) * depth * 0.5;
    }
    width.clamp(PULSE_WIDTH_MIN, PULSE_WIDTH_MAX)
}

/// Amplitude multiplier: 1 at zero depth, the normalized signal at full depth.
#[inline]
pub fn am_gain(depth: f64, cv: f64) -> f64 {
    (1.0 - depth) + (cv / 10.0) * depth
}

/// Fold a phase that overshot by less than one cycle back into [0, 1).
#[inline]
pub fn wrap_phase(phase: f64) -> f64 {
    if phase >= 1.0 {
        phase - 1.0
    } else if phase < 0.0 {
        // A tiny negative phase can round up to exactly 1.0
        let wrapped = phase + 1.0;
        if wrapped >= 1.0 {
            0.0
        } else {
            wrapped
        }
    } else {
        phase
    }
}

/// Linear fade of an indicator light, floored at zero.
#[inline]
pub fn decay_light(level: f64, sample_time: f64) -> f64 {
    (level - sample_time / SYNC_LIGHT_FADE).max(0.0)
}
