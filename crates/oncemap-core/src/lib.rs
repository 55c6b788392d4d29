//! # oncemap-core — Foundational Types for oncemap
//!
//! The leaf crate of the workspace. It defines everything the staged
//! container needs that is not the state machine itself:
//!
//! - **Handles** (`handle.rs`): untyped views over whatever a container
//!   currently holds, tagged with a closed [`Slot`] kind, narrowed back to a
//!   concrete type through a checked downcast.
//! - **Errors** (`error.rs`): [`CastMismatch`], the only error the container
//!   API reports, plus configuration errors and the top-level [`OncemapError`].
//! - **Configuration** (`config.rs`): bridge policy and telemetry settings,
//!   loadable from YAML or JSON.
//! - **Telemetry** (`telemetry.rs`): `tracing-subscriber` installation.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `oncemap-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod config;
pub mod error;
pub mod handle;
pub mod telemetry;

// Re-export primary types for ergonomic imports.
pub use config::{BridgePolicy, OncemapConfig, TelemetryConfig};
pub use error::{CastMismatch, ConfigError, OncemapError};
pub use handle::{cast, Handle, OwnedHandle, Slot};
pub use telemetry::init_tracing;
