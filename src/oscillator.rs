//! Oscillator Core
//!
//! One phase accumulator drives sine, triangle, sawtooth and pulse outputs,
//! alongside an independent white noise output. Pitch follows the 1V/octave
//! law; FM, PWM, AM and hard sync are each applied only when their jack is
//! patched, which is why those inputs are `Option`s rather than voltages
//! that default to zero.
//!
//! [`Oscillator::process`] is called once per sample by the host. It does
//! not allocate, block or log.

use crate::rng::Rng;
use crate::trigger::{SchmittTrigger, SYNC_HIGH_THRESHOLD, SYNC_LOW_THRESHOLD};
use crate::waveform::{self, FREQ_C4, OUTPUT_SCALE};

/// Per-sample snapshot of knobs and jacks.
///
/// `None` on a modulation input means no cable is connected, which bypasses
/// that modulation entirely. `Some(0.0)` is a patched cable carrying 0V.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlInputs {
    /// Pitch knob, in octaves relative to the reference frequency
    pub pitch: f64,
    /// 1V/octave pitch CV (0V when unpatched)
    pub pitch_cv: f64,
    /// Base pulse width, 0..1
    pub pulse_width: f64,
    /// PWM depth knob, -1..1
    pub pwm_depth: f64,
    pub pwm_cv: Option<f64>,
    /// FM depth knob, -1..1
    pub fm_depth: f64,
    pub fm_cv: Option<f64>,
    /// AM depth knob, 0..1
    pub am_depth: f64,
    pub am_cv: Option<f64>,
    pub sync: Option<f64>,
}

impl Default for ControlInputs {
    fn default() -> Self {
        Self {
            pitch: 0.0,
            pitch_cv: 0.0,
            pulse_width: 0.5,
            pwm_depth: 0.0,
            pwm_cv: None,
            fm_depth: 0.0,
            fm_cv: None,
            am_depth: 0.0,
            am_cv: None,
            sync: None,
        }
    }
}

/// Voltages and light levels produced by one call to [`Oscillator::process`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SampleOutputs {
    pub sine: f64,
    pub triangle: f64,
    pub sawtooth: f64,
    pub square: f64,
    pub noise: f64,
    /// FM depth indicator, 0..1
    pub fm_light: f64,
    /// Sync flash indicator, 0..1
    pub sync_light: f64,
}

/// State carried from one sample to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillatorState {
    phase: f64,
    sync_trigger: SchmittTrigger,
    sync_light: f64,
}

impl OscillatorState {
    pub fn new() -> Self {
        Self {
            phase: 0.0,
            sync_trigger: SchmittTrigger::new(),
            sync_light: 0.0,
        }
    }

    /// Current phase, always in [0, 1)
    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn sync_light(&self) -> f64 {
        self.sync_light
    }

    pub fn sync_trigger(&self) -> &SchmittTrigger {
        &self.sync_trigger
    }

    /// Advance the accumulator by one increment and wrap it once.
    ///
    /// Handles at most one wrap: `|increment|` is expected to stay below 1.
    #[inline]
    pub fn advance_phase(&mut self, increment: f64) {
        self.phase = waveform::wrap_phase(self.phase + increment);
    }
}

impl Default for OscillatorState {
    fn default() -> Self {
        Self::new()
    }
}

/// The oscillator core.
#[derive(Debug, Clone)]
pub struct Oscillator {
    state: OscillatorState,
    rng: Rng,
    reference: f64,
}

impl Oscillator {
    pub fn new() -> Self {
        Self {
            state: OscillatorState::new(),
            rng: Rng::default(),
            reference: FREQ_C4,
        }
    }

    /// Use a fixed noise seed, for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Rng::from_seed(seed);
        self
    }

    /// Frequency produced with pitch knob and CV at zero.
    pub fn with_reference_frequency(mut self, reference: f64) -> Self {
        self.reference = reference;
        self
    }

    pub fn reference_frequency(&self) -> f64 {
        self.reference
    }

    pub fn state(&self) -> &OscillatorState {
        &self.state
    }

    pub fn phase(&self) -> f64 {
        self.state.phase
    }

    /// Back to phase zero with the sync detector re-armed and the light off.
    pub fn reset(&mut self) {
        self.state = OscillatorState::new();
    }

    /// Frequency in Hz for the given controls, including FM when patched.
    #[inline]
    pub fn frequency(&self, inputs: &ControlInputs) -> f64 {
        let mut freq =
            waveform::pitch_to_frequency(self.reference, inputs.pitch + inputs.pitch_cv);
        if let Some(cv) = inputs.fm_cv {
            freq += waveform::fm_offset(self.reference, inputs.fm_depth, cv);
        }
        freq
    }

    /// Render one sample. `sample_time` is the duration of this sample in
    /// seconds and may change from call to call.
    ///
    /// The outputs reflect the phase before this call's advance, so a sync
    /// edge produces a sample at phase exactly zero.
    pub fn process(&mut self, inputs: &ControlInputs, sample_time: f64) -> SampleOutputs {
        let phase_increment = self.frequency(inputs) * sample_time;
        let fm_light = match inputs.fm_cv {
            Some(_) => inputs.fm_depth.abs(),
            None => 0.0,
        };

        if let Some(sync) = inputs.sync {
            if self
                .state
                .sync_trigger
                .process(sync, SYNC_LOW_THRESHOLD, SYNC_HIGH_THRESHOLD)
            {
                self.state.phase = 0.0;
                self.state.sync_light = 1.0;
            }
        }
        self.state.sync_light = waveform::decay_light(self.state.sync_light, sample_time);

        let phase = self.state.phase;
        let mut sine = waveform::sine(phase);
        let mut triangle = waveform::triangle(phase);
        let mut sawtooth = waveform::sawtooth(phase);

        let width = waveform::effective_pulse_width(
            inputs.pulse_width,
            inputs.pwm_cv.map(|cv| (inputs.pwm_depth, cv)),
        );
        let mut square = waveform::pulse(phase, width);
        let noise = self.rng.next_f64_bipolar();

        if let Some(cv) = inputs.am_cv {
            let am = waveform::am_gain(inputs.am_depth, cv);
            sine *= am;
            triangle *= am;
            sawtooth *= am;
            square *= am;
        }

        self.state.advance_phase(phase_increment);

        SampleOutputs {
            sine: sine * OUTPUT_SCALE,
            triangle: triangle * OUTPUT_SCALE,
            sawtooth: sawtooth * OUTPUT_SCALE,
            square: square * OUTPUT_SCALE,
            noise: noise * OUTPUT_SCALE,
            fm_light,
            sync_light: self.state.sync_light,
        }
    }
}

impl Default for Oscillator {
    fn default() -> Self {
        Self::new()
    }
}
