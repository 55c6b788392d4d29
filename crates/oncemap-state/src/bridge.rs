//! # Bridging Between Stages
//!
//! A stage permits one transform. To keep going, a consumed `Maybe<A, B>`
//! is bridged into a fresh `Maybe<B, C>` whose start value is the previous
//! stage's result:
//!
//! ```text
//! Maybe<A, B>                          Maybe<B, C>
//! Present(Consumed(b))  ──bridge()──▶  Present(Unconsumed(b))
//! Present(Unconsumed(a)) ──bridge()──▶ Absent
//! Absent                ──bridge()──▶  Absent
//! ```
//!
//! A bridge only relabels a value that already exists; it never creates
//! one. An unconsumed stage has no `B` to carry, so it bridges to `Absent`.
//! When the two types of a stage coincide, [`Maybe::bridge_with`] can be
//! told to forward the untransformed start value instead.

use oncemap_core::BridgePolicy;

use crate::maybe::Maybe;
use crate::stage::{Stage, StageKind};

impl<A, B> Maybe<A, B> {
    /// Start the next stage, seeded with this stage's transformed value.
    pub fn bridge<C>(self) -> Maybe<B, C> {
        match self {
            Self::Present(Stage::Consumed(next)) => {
                tracing::trace!(
                    from = %StageKind::Consumed,
                    to = %StageKind::Unconsumed,
                    "stage bridged"
                );
                Maybe::Present(Stage::Unconsumed(next))
            }
            Self::Present(Stage::Unconsumed(_)) => {
                tracing::debug!(
                    stage = %StageKind::Unconsumed,
                    policy = %BridgePolicy::Strict,
                    "bridge refused: stage was never transformed"
                );
                Maybe::Absent
            }
            Self::Absent => Maybe::Absent,
        }
    }
}

impl<A> Maybe<A, A> {
    /// Start the next stage under an explicit [`BridgePolicy`].
    ///
    /// With [`BridgePolicy::CarryUnconsumed`] an untransformed stage forwards
    /// its start value unchanged. Consumed and absent stages bridge exactly
    /// as [`Maybe::bridge`] does under either policy.
    pub fn bridge_with<C>(self, policy: BridgePolicy) -> Maybe<A, C> {
        match (self, policy) {
            (Self::Present(Stage::Unconsumed(start)), BridgePolicy::CarryUnconsumed) => {
                tracing::trace!(
                    from = %StageKind::Unconsumed,
                    to = %StageKind::Unconsumed,
                    policy = %policy,
                    "untransformed stage carried forward"
                );
                Maybe::Present(Stage::Unconsumed(start))
            }
            (this, _) => this.bridge(),
        }
    }
}
