//! Panel Parameters
//!
//! The five knobs of the oscillator, their ranges and defaults, and the
//! descriptors a host uses to label and display them.

use crate::error::ParamError;
use crate::waveform::{self, FREQ_C4};
use serde::{Deserialize, Serialize};

/// Identifies one knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// Coarse pitch, in octaves around C4
    Pitch,
    PulseWidth,
    PwmDepth,
    FmDepth,
    AmDepth,
}

impl ParamKind {
    pub const ALL: [ParamKind; 5] = [
        ParamKind::Pitch,
        ParamKind::PulseWidth,
        ParamKind::PwmDepth,
        ParamKind::FmDepth,
        ParamKind::AmDepth,
    ];

    /// Host-facing parameter id
    pub fn id(self) -> u32 {
        match self {
            ParamKind::Pitch => 0,
            ParamKind::PulseWidth => 1,
            ParamKind::PwmDepth => 2,
            ParamKind::FmDepth => 3,
            ParamKind::AmDepth => 4,
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            ParamKind::Pitch => "freq",
            ParamKind::PulseWidth => "pw",
            ParamKind::PwmDepth => "pw_mod",
            ParamKind::FmDepth => "fm",
            ParamKind::AmDepth => "am",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ParamKind::Pitch => "Frequency",
            ParamKind::PulseWidth => "Pulse width",
            ParamKind::PwmDepth => "Pulse width modulation",
            ParamKind::FmDepth => "Frequency modulation",
            ParamKind::AmDepth => "Amplitude modulation",
        }
    }

    /// Knob travel (min, max)
    pub fn range(self) -> (f64, f64) {
        match self {
            ParamKind::Pitch => (-5.0, 5.0),
            ParamKind::PulseWidth => (0.001, 0.999),
            ParamKind::PwmDepth => (-1.0, 1.0),
            ParamKind::FmDepth => (-1.0, 1.0),
            ParamKind::AmDepth => (0.0, 1.0),
        }
    }

    pub fn default_value(self) -> f64 {
        match self {
            ParamKind::PulseWidth => 0.5,
            _ => 0.0,
        }
    }

    pub fn format(self) -> ValueFormat {
        match self {
            ParamKind::Pitch => ValueFormat::Frequency,
            _ => ValueFormat::Percent,
        }
    }
}

/// Knob positions. Deserializing fills missing fields with defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    pub pitch: f64,
    pub pulse_width: f64,
    pub pwm_depth: f64,
    pub fm_depth: f64,
    pub am_depth: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            pitch: ParamKind::Pitch.default_value(),
            pulse_width: ParamKind::PulseWidth.default_value(),
            pwm_depth: ParamKind::PwmDepth.default_value(),
            fm_depth: ParamKind::FmDepth.default_value(),
            am_depth: ParamKind::AmDepth.default_value(),
        }
    }
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: ParamKind) -> f64 {
        match kind {
            ParamKind::Pitch => self.pitch,
            ParamKind::PulseWidth => self.pulse_width,
            ParamKind::PwmDepth => self.pwm_depth,
            ParamKind::FmDepth => self.fm_depth,
            ParamKind::AmDepth => self.am_depth,
        }
    }

    /// Set a knob, clamped to its travel. Returns the value applied.
    pub fn set(&mut self, kind: ParamKind, value: f64) -> f64 {
        let (min, max) = kind.range();
        let value = value.clamp(min, max);
        let slot = match kind {
            ParamKind::Pitch => &mut self.pitch,
            ParamKind::PulseWidth => &mut self.pulse_width,
            ParamKind::PwmDepth => &mut self.pwm_depth,
            ParamKind::FmDepth => &mut self.fm_depth,
            ParamKind::AmDepth => &mut self.am_depth,
        };
        *slot = value;
        value
    }

    pub fn set_by_name(&mut self, name: &str, value: f64) -> Result<f64, ParamError> {
        let kind =
            ParamKind::from_name(name).ok_or_else(|| ParamError::UnknownName(name.to_string()))?;
        Ok(self.set(kind, value))
    }

    /// Reject any knob outside its travel.
    pub fn validate(&self) -> Result<(), ParamError> {
        for kind in ParamKind::ALL {
            let (min, max) = kind.range();
            let value = self.get(kind);
            if !(min..=max).contains(&value) {
                return Err(ParamError::OutOfRange {
                    name: kind.name(),
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }

    /// Load a preset such as `{"pitch": 1.0, "pulse_width": 0.25}`.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, ParamError> {
        let params: Params = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String, ParamError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Descriptors for every knob, carrying the current values
    pub fn infos(&self) -> Vec<ParamInfo> {
        ParamKind::ALL
            .into_iter()
            .map(|kind| ParamInfo::from_kind(kind).with_value(self.get(kind)))
            .collect()
    }
}

/// How a knob value is presented to the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ValueFormat {
    /// Plain number with the given precision
    Decimal { places: u8 },
    /// Value in octaves around C4, shown in Hz
    Frequency,
    /// Unit value shown as 0..100%
    #[default]
    Percent,
}

impl ValueFormat {
    /// Map a raw knob value to the number shown
    pub fn display_value(&self, value: f64) -> f64 {
        match self {
            ValueFormat::Decimal { .. } => value,
            ValueFormat::Frequency => waveform::pitch_to_frequency(FREQ_C4, value),
            ValueFormat::Percent => value * 100.0,
        }
    }

    pub fn format(&self, value: f64) -> String {
        let shown = self.display_value(value);
        match self {
            ValueFormat::Decimal { places } => {
                format!("{:.prec$}", shown, prec = *places as usize)
            }
            ValueFormat::Frequency => {
                if shown >= 1000.0 {
                    format!("{:.2} kHz", shown / 1000.0)
                } else {
                    format!("{:.1} Hz", shown)
                }
            }
            ValueFormat::Percent => format!("{:.0}%", shown),
        }
    }
}

/// Complete parameter descriptor for host binding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamInfo {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub unit: Option<String>,
    pub format: ValueFormat,
}

impl ParamInfo {
    pub fn from_kind(kind: ParamKind) -> Self {
        let (min, max) = kind.range();
        let format = kind.format();
        let unit = match format {
            ValueFormat::Frequency => Some("Hz".to_string()),
            ValueFormat::Percent => Some("%".to_string()),
            ValueFormat::Decimal { .. } => None,
        };
        Self {
            id: kind.id(),
            name: kind.name().to_string(),
            description: kind.description().to_string(),
            value: kind.default_value(),
            min,
            max,
            default: kind.default_value(),
            unit,
            format,
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Get the normalized (0-1) knob position
    pub fn normalized(&self) -> f64 {
        if (self.max - self.min).abs() < 1e-10 {
            return 0.0;
        }
        ((self.value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    pub fn display_value(&self) -> f64 {
        self.format.display_value(self.value)
    }

    pub fn format_value(&self) -> String {
        self.format.format(self.value)
    }
}
