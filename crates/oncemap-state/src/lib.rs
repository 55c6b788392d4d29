//! # oncemap-state — Single-Shot Staged Optional Container
//!
//! `Maybe<A, B>` holds an optional value that may be transformed from `A`
//! to `B` exactly once. Each operation consumes the container and returns a
//! new one; nothing is mutated in place.
//!
//! ## Operations
//!
//! - **Construct** (`maybe.rs`): [`Maybe::of`] maps `Some`/`None` to
//!   present/absent.
//! - **Transform** (`maybe.rs`): [`Maybe::map`] runs the stage's single
//!   permitted function. A second `map` on the same stage yields `Absent`.
//! - **Bridge** (`bridge.rs`): [`Maybe::bridge`] turns a consumed
//!   `Maybe<A, B>` into an unconsumed `Maybe<B, C>`, opening the next stage.
//! - **Extract** (`maybe.rs`): [`Maybe::get`] returns an untyped
//!   [`Handle`], narrowed with [`Handle::cast`] or [`cast`].
//!
//! ## Design
//!
//! A present container carries a [`Stage`], either `Unconsumed(A)` or
//! `Consumed(B)`. Whether the transform has run is the variant itself, not a
//! flag beside two optional slots. Absence carries no reason.
//!
//! ```
//! use oncemap_state::Maybe;
//!
//! let squared = Maybe::<i32, i32>::of(Some(42)).map(|n| Some(n * n));
//! assert_eq!(squared.get().cast::<i32>(), Ok(&1764));
//!
//! // The stage is spent.
//! assert!(squared.map(|n| Some(n + 1)).is_absent());
//! ```
//!
//! A transform must produce the stage's declared next type:
//!
//! ```compile_fail
//! use oncemap_state::Maybe;
//!
//! // ERROR: expected `Option<String>`, found `Option<i32>`
//! let _ = Maybe::<i32, String>::of(Some(1)).map(|n| Some(n));
//! ```

pub mod bridge;
pub mod maybe;
pub mod stage;

pub use maybe::Maybe;
pub use stage::{Stage, StageKind};

// ─── Core re-exports ────────────────────────────────────────────────

pub use oncemap_core::{cast, BridgePolicy, CastMismatch, Handle, OwnedHandle, Slot};
