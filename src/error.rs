//! Errors raised on the host side of the module.
//!
//! The audio path never fails; these only come out of parameter access and
//! preset loading.

/// Failure to address or apply a parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    UnknownParam(u32),
    UnknownName(String),
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    Config(String),
}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamError::UnknownParam(id) => write!(f, "Unknown parameter id: {}", id),
            ParamError::UnknownName(name) => write!(f, "Unknown parameter: {}", name),
            ParamError::OutOfRange {
                name,
                value,
                min,
                max,
            } => write!(
                f,
                "Parameter {} = {} outside [{}, {}]",
                name, value, min, max
            ),
            ParamError::Config(msg) => write!(f, "Invalid parameter config: {}", msg),
        }
    }
}

impl std::error::Error for ParamError {}

#[cfg(feature = "json")]
impl From<serde_json::Error> for ParamError {
    fn from(err: serde_json::Error) -> Self {
        ParamError::Config(err.to_string())
    }
}
