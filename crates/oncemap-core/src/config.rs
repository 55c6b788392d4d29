//! # Configuration
//!
//! Settings a host application may want to tune without recompiling: how a
//! bridge treats a stage whose transform never ran, and how tracing output
//! is filtered and formatted.
//!
//! ```yaml
//! bridge_policy: carry_unconsumed
//! telemetry:
//!   filter: "oncemap_state=trace"
//!   json: true
//! ```
//!
//! Every field has a default, so an empty document is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How a bridge treats a stage that was never transformed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgePolicy {
    /// An untransformed stage bridges to absent.
    #[default]
    Strict,
    /// An untransformed stage forwards its start value. Only applicable
    /// where the start and next types coincide.
    CarryUnconsumed,
}

impl std::fmt::Display for BridgePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Strict => "strict",
            Self::CarryUnconsumed => "carry_unconsumed",
        };
        f.write_str(s)
    }
}

/// Tracing subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TelemetryConfig {
    /// Default `EnvFilter` directive, used when `RUST_LOG` is unset.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            json: false,
        }
    }
}

/// Top-level oncemap configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OncemapConfig {
    pub bridge_policy: BridgePolicy,
    pub telemetry: TelemetryConfig,
}

impl OncemapConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.telemetry.filter.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "telemetry.filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
