//! # Error Types
//!
//! Absence is never an error in oncemap: a missing value, a refused second
//! transform, or a function returning `None` all resolve to the `Absent`
//! variant of the container. The errors here cover the two places where a
//! caller genuinely needs a reason: narrowing an untyped handle to the wrong
//! type, and loading a malformed configuration.

use thiserror::Error;

use crate::handle::Slot;

/// Top-level error type for oncemap.
#[derive(Error, Debug)]
pub enum OncemapError {
    /// A typed cast did not match the handle's dynamic type.
    #[error(transparent)]
    Cast(#[from] CastMismatch),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// A handle was narrowed to a type it does not hold.
///
/// Local to the cast that produced it; the container the handle was taken
/// from is unaffected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot cast {slot} handle holding `{found}` as `{expected}`")]
pub struct CastMismatch {
    /// The requested type.
    pub expected: &'static str,
    /// The type actually held, or `"absent"` for an absent handle.
    pub found: &'static str,
    /// Which slot of the container the handle was taken from.
    pub slot: Slot,
}

/// Error while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// YAML document could not be parsed.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON document could not be parsed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Document parsed but violates a constraint.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
