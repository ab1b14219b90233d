//! Wavemaker Host Module
//!
//! Binds the oscillator core to a host: knobs live in [`Params`], jacks
//! arrive as [`PortValues`], and each tick writes five outputs and two
//! light levels back.

use crate::error::ParamError;
use crate::oscillator::{ControlInputs, Oscillator};
use crate::params::{ParamInfo, ParamKind, Params};
use crate::port::{GraphModule, LightDef, PortDef, PortId, PortSpec, PortValues, SignalKind};

pub const VOCT_INPUT: PortId = 0;
pub const PWM_INPUT: PortId = 1;
pub const FM_INPUT: PortId = 2;
pub const SYNC_INPUT: PortId = 3;
pub const AM_INPUT: PortId = 4;

pub const SIN_OUTPUT: PortId = 10;
pub const TRI_OUTPUT: PortId = 11;
pub const SAW_OUTPUT: PortId = 12;
pub const SQR_OUTPUT: PortId = 13;
pub const NOISE_OUTPUT: PortId = 14;

pub const FM_LIGHT: PortId = 20;
pub const SYNC_LIGHT: PortId = 21;

/// Five-waveform oscillator with FM, PWM, AM and hard sync.
pub struct Wavemaker {
    oscillator: Oscillator,
    params: Params,
    spec: PortSpec,
    lights: Vec<LightDef>,
}

impl Wavemaker {
    pub fn new() -> Self {
        Self::with_oscillator(Oscillator::new())
    }

    /// Fixed noise seed, for reproducible renders
    pub fn with_seed(seed: u64) -> Self {
        Self::with_oscillator(Oscillator::new().with_seed(seed))
    }

    pub fn with_oscillator(oscillator: Oscillator) -> Self {
        tracing::debug!(
            reference_hz = oscillator.reference_frequency(),
            "creating wavemaker"
        );
        Self {
            oscillator,
            params: Params::default(),
            spec: PortSpec {
                inputs: vec![
                    PortDef::new(VOCT_INPUT, "voct", SignalKind::VoltPerOctave)
                        .with_description("Pitch (1V / octave)"),
                    PortDef::new(PWM_INPUT, "pwm", SignalKind::CvBipolar)
                        .with_description("Pulse width modulation"),
                    PortDef::new(FM_INPUT, "fm", SignalKind::CvBipolar)
                        .with_description("Frequency modulation"),
                    PortDef::new(SYNC_INPUT, "sync", SignalKind::Trigger)
                        .with_description("Sync"),
                    PortDef::new(AM_INPUT, "am", SignalKind::CvBipolar)
                        .with_description("Amplitude modulation"),
                ],
                outputs: vec![
                    PortDef::new(SIN_OUTPUT, "sin", SignalKind::Audio).with_description("Sine"),
                    PortDef::new(TRI_OUTPUT, "tri", SignalKind::Audio)
                        .with_description("Triangle"),
                    PortDef::new(SAW_OUTPUT, "saw", SignalKind::Audio)
                        .with_description("Sawtooth"),
                    PortDef::new(SQR_OUTPUT, "sqr", SignalKind::Audio).with_description("Square"),
                    PortDef::new(NOISE_OUTPUT, "noise", SignalKind::Audio)
                        .with_description("White noise"),
                ],
            },
            lights: vec![
                LightDef::new(FM_LIGHT, "fm", "Frequency modulation"),
                LightDef::new(SYNC_LIGHT, "sync", "Sync"),
            ],
        }
    }

    /// Start from a knob preset
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    pub fn oscillator(&self) -> &Oscillator {
        &self.oscillator
    }

    /// Snapshot knobs and jacks for one sample. Unpatched modulation jacks
    /// stay `None`; an unpatched pitch jack reads as 0V.
    pub fn control_inputs(&self, inputs: &PortValues) -> ControlInputs {
        ControlInputs {
            pitch: self.params.pitch,
            pitch_cv: inputs.get_or(VOCT_INPUT, 0.0),
            pulse_width: self.params.pulse_width,
            pwm_depth: self.params.pwm_depth,
            pwm_cv: inputs.get(PWM_INPUT),
            fm_depth: self.params.fm_depth,
            fm_cv: inputs.get(FM_INPUT),
            am_depth: self.params.am_depth,
            am_cv: inputs.get(AM_INPUT),
            sync: inputs.get(SYNC_INPUT),
        }
    }

    /// Set a knob by host id, clamped to its travel.
    pub fn try_set_param(&mut self, id: u32, value: f64) -> Result<f64, ParamError> {
        let kind = ParamKind::from_id(id).ok_or(ParamError::UnknownParam(id))?;
        let applied = self.params.set(kind, value);
        tracing::debug!(param = kind.name(), requested = value, applied, "set param");
        Ok(applied)
    }
}

impl Default for Wavemaker {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphModule for Wavemaker {
    fn port_spec(&self) -> &PortSpec {
        &self.spec
    }

    fn lights(&self) -> &[LightDef] {
        &self.lights
    }

    fn tick(&mut self, sample_time: f64, inputs: &PortValues, outputs: &mut PortValues) {
        let controls = self.control_inputs(inputs);
        let out = self.oscillator.process(&controls, sample_time);

        outputs.set(SIN_OUTPUT, out.sine);
        outputs.set(TRI_OUTPUT, out.triangle);
        outputs.set(SAW_OUTPUT, out.sawtooth);
        outputs.set(SQR_OUTPUT, out.square);
        outputs.set(NOISE_OUTPUT, out.noise);
        outputs.set(FM_LIGHT, out.fm_light);
        outputs.set(SYNC_LIGHT, out.sync_light);
    }

    fn reset(&mut self) {
        tracing::trace!("reset wavemaker");
        self.oscillator.reset();
    }

    fn param_infos(&self) -> Vec<ParamInfo> {
        self.params.infos()
    }

    fn get_param(&self, id: u32) -> Option<f64> {
        ParamKind::from_id(id).map(|kind| self.params.get(kind))
    }

    fn set_param(&mut self, id: u32, value: f64) {
        if let Err(err) = self.try_set_param(id, value) {
            tracing::warn!(%err, "ignoring parameter change");
        }
    }

    fn type_id(&self) -> &'static str {
        "wavemaker"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waveform::FREQ_C4;
    use approx::assert_abs_diff_eq;

    const SAMPLE_TIME: f64 = 1.0 / 48000.0;

    #[test]
    fn test_port_names() {
        let module = Wavemaker::with_seed(1);
        let spec = module.port_spec();
        assert_eq!(spec.inputs.len(), 5);
        assert_eq!(spec.outputs.len(), 5);
        assert_eq!(spec.input_by_name("voct").map(|p| p.id), Some(VOCT_INPUT));
        assert_eq!(
            spec.input_by_id(VOCT_INPUT).map(|p| p.description.as_str()),
            Some("Pitch (1V / octave)")
        );
        assert_eq!(spec.output_by_name("noise").map(|p| p.id), Some(NOISE_OUTPUT));
        assert_eq!(module.lights().len(), 2);
        assert_eq!(module.type_id(), "wavemaker");
    }

    #[test]
    fn test_tick_writes_outputs_and_lights() {
        let mut module = Wavemaker::with_seed(1);
        let inputs = PortValues::new();
        let mut outputs = PortValues::new();

        module.tick(SAMPLE_TIME, &inputs, &mut outputs);

        for id in [
            SIN_OUTPUT,
            TRI_OUTPUT,
            SAW_OUTPUT,
            SQR_OUTPUT,
            NOISE_OUTPUT,
            FM_LIGHT,
            SYNC_LIGHT,
        ] {
            assert!(outputs.has(id), "missing port {}", id);
        }
        assert_eq!(outputs.get(SAW_OUTPUT), Some(-5.0));
        assert_eq!(outputs.get(SQR_OUTPUT), Some(5.0));
        assert_eq!(outputs.get(FM_LIGHT), Some(0.0));
    }

    #[test]
    fn test_missing_jacks_stay_disconnected() {
        let module = Wavemaker::with_seed(1);
        let controls = module.control_inputs(&PortValues::new());
        assert_eq!(controls.pitch_cv, 0.0);
        assert_eq!(controls.fm_cv, None);
        assert_eq!(controls.pwm_cv, None);
        assert_eq!(controls.am_cv, None);
        assert_eq!(controls.sync, None);

        let mut inputs = PortValues::new();
        inputs.set(FM_INPUT, 0.0);
        inputs.set(SYNC_INPUT, 0.0);
        let controls = module.control_inputs(&inputs);
        assert_eq!(controls.fm_cv, Some(0.0));
        assert_eq!(controls.sync, Some(0.0));
    }

    #[test]
    fn test_fm_light_follows_knob_only_when_patched() {
        let mut module = Wavemaker::with_seed(1);
        module.set_param(ParamKind::FmDepth.id(), -0.6);

        let mut inputs = PortValues::new();
        let mut outputs = PortValues::new();
        module.tick(SAMPLE_TIME, &inputs, &mut outputs);
        assert_eq!(outputs.get(FM_LIGHT), Some(0.0));

        inputs.set(FM_INPUT, 2.0);
        module.tick(SAMPLE_TIME, &inputs, &mut outputs);
        assert_abs_diff_eq!(outputs.get(FM_LIGHT).unwrap(), 0.6);
    }

    #[test]
    fn test_voct_input_doubles_frequency() {
        let mut module = Wavemaker::with_seed(1);
        let mut inputs = PortValues::new();
        inputs.set(VOCT_INPUT, 1.0);
        let mut outputs = PortValues::new();

        module.tick(SAMPLE_TIME, &inputs, &mut outputs);
        assert_abs_diff_eq!(
            module.oscillator().phase(),
            2.0 * FREQ_C4 * SAMPLE_TIME,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_sync_through_ports() {
        let mut module = Wavemaker::with_seed(1);
        let mut inputs = PortValues::new();
        let mut outputs = PortValues::new();

        inputs.set(SYNC_INPUT, 0.0);
        for _ in 0..50 {
            module.tick(SAMPLE_TIME, &inputs, &mut outputs);
        }
        inputs.set(SYNC_INPUT, 10.0);
        module.tick(SAMPLE_TIME, &inputs, &mut outputs);
        assert_eq!(outputs.get(SAW_OUTPUT), Some(-5.0));
        assert!(outputs.get(SYNC_LIGHT).unwrap() > 0.99);

        module.reset();
        assert_eq!(module.oscillator().phase(), 0.0);
        assert_eq!(module.oscillator().state().sync_light(), 0.0);
    }

    #[test]
    fn test_params_by_id() {
        let mut module = Wavemaker::with_seed(1);
        assert_eq!(module.try_set_param(1, 0.25), Ok(0.25));
        assert_eq!(module.get_param(1), Some(0.25));
        assert_eq!(module.try_set_param(0, 9.0), Ok(5.0));
        assert_eq!(module.try_set_param(42, 1.0), Err(ParamError::UnknownParam(42)));

        // Unknown ids are ignored through the trait
        module.set_param(42, 1.0);
        assert_eq!(module.get_param(42), None);
        assert_eq!(*module.params(), {
            let mut p = Params::default();
            p.pulse_width = 0.25;
            p.pitch = 5.0;
            p
        });
    }

    #[test]
    fn test_param_infos() {
        let module = Wavemaker::with_seed(1).with_params(Params {
            pitch: -1.0,
            ..Default::default()
        });
        let infos = module.param_infos();
        assert_eq!(infos.len(), 5);
        assert_eq!(infos[0].name, "freq");
        assert_eq!(infos[0].value, -1.0);
        assert_abs_diff_eq!(infos[0].display_value(), FREQ_C4 / 2.0, epsilon = 1e-9);
    }
}
