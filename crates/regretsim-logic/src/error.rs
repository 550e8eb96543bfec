//! Caller-contract violations.
//!
//! Every valid input produces a value, so the only errors the engine can
//! report are inputs that were never valid to begin with.

use thiserror::Error;

/// Invalid input handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// A decision input outside \[0, 100\].
    #[error("invalid input: {field} = {value} is outside [0, 100]")]
    InputOutOfRange { field: &'static str, value: i64 },
    /// A life-path tag that is not one of the six known paths.
    #[error("invalid input: unknown life path `{0}`")]
    UnknownLifePath(String),
    /// A decision-dimension key that is not one of the six sliders.
    #[error("invalid input: unknown decision dimension `{0}`")]
    UnknownDimension(String),
}
