//! Signal Conventions and Port System
//!
//! Names the jacks and lights a module exposes to its host, and the
//! type-erased interface the host drives once per sample. A host reports a
//! patched jack by placing its voltage in [`PortValues`]; an unpatched jack
//! is simply absent.

use crate::params::ParamInfo;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for a port or light within a module
pub type PortId = u32;

/// Semantic signal classification following hardware modular conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalKind {
    /// Audio signal, AC-coupled, typically ±5V peak
    Audio,

    /// Bipolar control voltage, ±10V at full modulation depth
    CvBipolar,

    /// Pitch CV following 1V/octave, 0V = C4
    VoltPerOctave,

    /// Trigger or clock edges, compared against a threshold
    Trigger,
}

impl SignalKind {
    /// Returns the typical voltage range (min, max) for this signal type
    pub fn voltage_range(&self) -> (f64, f64) {
        match self {
            SignalKind::Audio => (-5.0, 5.0),
            SignalKind::CvBipolar => (-10.0, 10.0),
            SignalKind::VoltPerOctave => (-5.0, 5.0),
            SignalKind::Trigger => (0.0, 10.0),
        }
    }
}

/// Definition of a single port (input or output)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortDef {
    pub id: PortId,

    /// Short name used for lookups (e.g. "voct", "saw")
    pub name: String,

    /// Label shown by the host
    pub description: String,

    pub kind: SignalKind,
}

impl PortDef {
    pub fn new(id: PortId, name: impl Into<String>, kind: SignalKind) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            kind,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Specification of all ports for a module
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortSpec {
    pub inputs: Vec<PortDef>,
    pub outputs: Vec<PortDef>,
}

impl PortSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_by_name(&self, name: &str) -> Option<&PortDef> {
        self.inputs.iter().find(|p| p.name == name)
    }

    pub fn output_by_name(&self, name: &str) -> Option<&PortDef> {
        self.outputs.iter().find(|p| p.name == name)
    }

    pub fn input_by_id(&self, id: PortId) -> Option<&PortDef> {
        self.inputs.iter().find(|p| p.id == id)
    }

    pub fn output_by_id(&self, id: PortId) -> Option<&PortDef> {
        self.outputs.iter().find(|p| p.id == id)
    }
}

/// Panel indicator. Brightness is written to the output values under `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightDef {
    pub id: PortId,
    pub name: String,
    pub description: String,
}

impl LightDef {
    pub fn new(id: PortId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Runtime port values container. A missing entry is an unpatched jack.
#[derive(Debug, Clone, Default)]
pub struct PortValues {
    pub values: HashMap<PortId, f64>,
}

impl PortValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Voltage on a patched jack, `None` when unpatched
    pub fn get(&self, id: PortId) -> Option<f64> {
        self.values.get(&id).copied()
    }

    pub fn get_or(&self, id: PortId, default: f64) -> f64 {
        self.values.get(&id).copied().unwrap_or(default)
    }

    pub fn set(&mut self, id: PortId, value: f64) {
        self.values.insert(id, value);
    }

    /// Unpatch a jack
    pub fn disconnect(&mut self, id: PortId) {
        self.values.remove(&id);
    }

    pub fn has(&self, id: PortId) -> bool {
        self.values.contains_key(&id)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// Type-erased module interface driven by a host
pub trait GraphModule: Send {
    /// Returns the module's port specification
    fn port_spec(&self) -> &PortSpec;

    /// Indicator lights, written alongside the outputs
    fn lights(&self) -> &[LightDef] {
        &[]
    }

    /// Process one sample lasting `sample_time` seconds
    fn tick(&mut self, sample_time: f64, inputs: &PortValues, outputs: &mut PortValues);

    /// Reset internal state
    fn reset(&mut self);

    /// Parameter descriptors with current values
    fn param_infos(&self) -> Vec<ParamInfo> {
        Vec::new()
    }

    fn get_param(&self, _id: u32) -> Option<f64> {
        None
    }

    fn set_param(&mut self, _id: u32, _value: f64) {}

    /// Get module type identifier
    fn type_id(&self) -> &'static str {
        "unknown"
    }
}
