//! # Wavemaker: Five-Waveform Oscillator Core
//!
//! `wavemaker` is a per-sample oscillator for modular synthesis hosts. One
//! phase accumulator drives sine, triangle, sawtooth and pulse outputs, next
//! to an independent white noise output, with 1V/octave pitch, linear FM,
//! pulse width modulation, amplitude modulation and hard sync.
//!
//! ## Architecture
//!
//! - **Core** - [`oscillator::Oscillator`] renders one sample per call from a
//!   [`ControlInputs`] snapshot; unpatched modulation jacks are `None`
//! - **Shaping** - [`waveform`] holds the stateless math, [`trigger`] the
//!   sync edge detector, [`rng`] the per-instance noise source
//! - **Host binding** - [`module::Wavemaker`] names ports, lights and knobs
//!   and drives the core through [`GraphModule`]
//!
//! ## Quick Start
//!
//! ```rust
//! use wavemaker::prelude::*;
//!
//! let mut osc = Oscillator::new().with_seed(1);
//! let inputs = ControlInputs {
//!     pitch: 1.0,
//!     fm_depth: 0.5,
//!     fm_cv: Some(2.5),
//!     ..Default::default()
//! };
//!
//! let out = osc.process(&inputs, 1.0 / 48000.0);
//! assert!(out.sawtooth.abs() <= 5.0);
//! ```

pub mod error;
pub mod module;
pub mod oscillator;
pub mod params;
pub mod port;
pub mod rng;
pub mod trigger;
pub mod waveform;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::ParamError;
    pub use crate::module::Wavemaker;
    pub use crate::oscillator::{ControlInputs, Oscillator, OscillatorState, SampleOutputs};
    pub use crate::params::{ParamInfo, ParamKind, Params, ValueFormat};
    pub use crate::port::{GraphModule, LightDef, PortDef, PortId, PortSpec, PortValues, SignalKind};
    pub use crate::rng::Rng;
    pub use crate::trigger::SchmittTrigger;
    pub use crate::waveform::FREQ_C4;
}

// Re-export key types at crate root for convenience
pub use prelude::*;
