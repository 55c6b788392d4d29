//! # The Staged Optional Container
//!
//! `Maybe<A, B>` is an optional value that may be transformed from `A` to
//! `B` at most once. Every operation consumes the container and returns a
//! new one.
//!
//! ## States
//!
//! ```text
//! of(Some) ──▶ Present(Unconsumed(A)) ──map(f) / f→Some──▶ Present(Consumed(B))
//!    │                 │                                          │
//!    │         map(f) / f→None                                 map(_)
//!    ▼                 ▼                                          ▼
//! of(None) ──▶      Absent  ◀──────────────────────────────────────┘
//!                     │
//!                   map(_)  (f never invoked)
//!                     ▼
//!                   Absent
//! ```
//!
//! A second `map` on a consumed stage is refused by returning `Absent`, not
//! by panicking. Continuing past one transform requires
//! [`bridge`](Maybe::bridge), which starts a new stage.

use std::any::Any;

use oncemap_core::{Handle, OwnedHandle};
use serde::{Deserialize, Serialize};

use crate::stage::{Stage, StageKind};

/// An optional value permitting a single `A → B` transform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Maybe<A, B> {
    /// A value is held.
    Present(Stage<A, B>),
    /// No value. Absorbing: `map` on it stays absent.
    Absent,
}

impl<A, B> Default for Maybe<A, B> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<A, B> From<Option<A>> for Maybe<A, B> {
    fn from(value: Option<A>) -> Self {
        Self::of(value)
    }
}

impl<A, B> Maybe<A, B> {
    /// Start a stage from a possibly-absent value.
    pub fn of(value: Option<A>) -> Self {
        match value {
            Some(start) => Self::Present(Stage::Unconsumed(start)),
            None => Self::Absent,
        }
    }

    pub fn absent() -> Self {
        Self::Absent
    }

    pub fn kind(&self) -> StageKind {
        match self {
            Self::Present(stage) => stage.kind(),
            Self::Absent => StageKind::Absent,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Whether this stage's transform has already run.
    pub fn is_transformed(&self) -> bool {
        matches!(self, Self::Present(Stage::Consumed(_)))
    }

    /// The start value, if the transform has not run.
    pub fn start(&self) -> Option<&A> {
        match self {
            Self::Present(Stage::Unconsumed(start)) => Some(start),
            _ => None,
        }
    }

    /// The transformed value, if the transform has run.
    pub fn next(&self) -> Option<&B> {
        match self {
            Self::Present(Stage::Consumed(next)) => Some(next),
            _ => None,
        }
    }

    pub fn into_next(self) -> Option<B> {
        match self {
            Self::Present(Stage::Consumed(next)) => Some(next),
            _ => None,
        }
    }

    /// Apply the stage's single transform.
    ///
    /// `f` runs only on an unconsumed stage. The result is present only if
    /// `f` returns `Some`; an absent or already-consumed container yields
    /// `Absent` without calling `f`.
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnOnce(A) -> Option<B>,
    {
        match self {
            Self::Absent => Self::Absent,
            Self::Present(Stage::Consumed(_)) => {
                tracing::debug!(
                    stage = %StageKind::Consumed,
                    "transform refused: stage already consumed"
                );
                Self::Absent
            }
            Self::Present(Stage::Unconsumed(start)) => match f(start) {
                Some(next) => {
                    tracing::trace!(
                        from = %StageKind::Unconsumed,
                        to = %StageKind::Consumed,
                        "stage transformed"
                    );
                    Self::Present(Stage::Consumed(next))
                }
                None => {
                    tracing::debug!(
                        stage = %StageKind::Unconsumed,
                        "transform yielded no value"
                    );
                    Self::Absent
                }
            },
        }
    }
}

impl<A: Any, B: Any> Maybe<A, B> {
    /// Untyped view of whatever the container currently holds.
    pub fn get(&self) -> Handle<'_> {
        match self {
            Self::Present(Stage::Unconsumed(start)) => Handle::start(start),
            Self::Present(Stage::Consumed(next)) => Handle::next(next),
            Self::Absent => Handle::absent(),
        }
    }

    /// Consume the container into an owning untyped handle.
    pub fn into_handle(self) -> OwnedHandle {
        match self {
            Self::Present(Stage::Unconsumed(start)) => OwnedHandle::start(start),
            Self::Present(Stage::Consumed(next)) => OwnedHandle::next(next),
            Self::Absent => OwnedHandle::absent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use oncemap_core::Slot;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: String,
        age: u32,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct NameLength {
        len: usize,
    }

    fn person() -> Person {
        Person {
            name: "test name".into(),
            age: 38,
        }
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn test_of_some_is_unconsumed() {
        let m = Maybe::<Person, NameLength>::of(Some(person()));
        assert_eq!(m.kind(), StageKind::Unconsumed);
        assert!(m.is_present());
        assert!(!m.is_transformed());
        assert_eq!(m.start(), Some(&person()));
        assert_eq!(m.next(), None);
    }

    #[test]
    fn test_of_none_is_absent() {
        let m = Maybe::<Person, NameLength>::of(None);
        assert!(m.is_absent());
        assert_eq!(m.kind(), StageKind::Absent);
        assert_eq!(m, Maybe::absent());
        assert_eq!(m, Maybe::default());
    }

    #[test]
    fn test_from_option() {
        let m: Maybe<u8, u8> = Some(3).into();
        assert_eq!(m, Maybe::Present(Stage::Unconsumed(3)));
    }

    // ── Transform ────────────────────────────────────────────────────

    #[test]
    fn test_map_same_type() {
        let m1 = Maybe::<Person, Person>::of(Some(person()));
        let m2 = m1.clone().map(|mut p| {
            p.name = "new test name".into();
            Some(p)
        });
        assert_ne!(m1, m2);
        assert!(m2.is_transformed());
        assert_eq!(m2.next().map(|p| p.name.as_str()), Some("new test name"));
        // the source container is a separate value
        assert_eq!(m1.start(), Some(&person()));
    }

    #[test]
    fn test_map_between_types() {
        let m = Maybe::<Person, NameLength>::of(Some(person())).map(|p| {
            Some(NameLength {
                len: p.name.len(),
            })
        });
        assert_eq!(m.kind(), StageKind::Consumed);
        assert_eq!(m.into_next(), Some(NameLength { len: 9 }));
    }

    #[test]
    fn test_map_returning_none_is_absent() {
        let m = Maybe::<Person, NameLength>::of(Some(person())).map(|_| None);
        assert!(m.is_absent());
    }

    #[test]
    fn test_absent_after_none_absorbs_next_map() {
        let calls = Cell::new(0);
        let m = Maybe::<Person, Person>::of(Some(person()))
            .map(|_| None)
            .map(|p| {
                calls.set(calls.get() + 1);
                Some(p)
            });
        assert!(m.is_absent());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_second_map_is_refused() {
        let calls = Cell::new(0);
        let m = Maybe::<Person, Person>::of(Some(person()))
            .map(Some)
            .map(|p| {
                calls.set(calls.get() + 1);
                Some(p)
            });
        assert!(m.is_absent());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_map_on_absent_never_calls() {
        let calls = Cell::new(0);
        let m = Maybe::<i32, i32>::of(None).map(|n| {
            calls.set(calls.get() + 1);
            Some(n)
        });
        assert!(m.is_absent());
        assert_eq!(calls.get(), 0);
    }

    // ── Extraction ───────────────────────────────────────────────────

    #[test]
    fn test_get_square() {
        let m = Maybe::<i32, i32>::of(Some(42)).map(|n| Some(n * n));
        let h = m.get();
        assert_eq!(h.slot(), Slot::Next);
        assert_eq!(h.cast::<i32>(), Ok(&1764));
    }

    #[test]
    fn test_get_before_transform_is_start_value() {
        let m = Maybe::<Person, NameLength>::of(Some(person()));
        let h = m.get();
        assert_eq!(h.slot(), Slot::Start);
        assert_eq!(h.cast::<Person>().unwrap().age, 38);
        assert!(h.cast::<NameLength>().is_err());
    }

    #[test]
    fn test_get_absent() {
        let m = Maybe::<i32, String>::absent();
        let h = m.get();
        assert!(h.is_absent());
        assert_eq!(h.cast::<i32>().unwrap_err().slot, Slot::Absent);
    }

    #[test]
    fn test_into_handle_downcasts_owned() {
        let h = Maybe::<&'static str, String>::of(Some("abc"))
            .map(|s| Some(s.to_uppercase()))
            .into_handle();
        assert_eq!(h.slot(), Slot::Next);
        assert_eq!(h.downcast::<String>().unwrap(), "ABC");
    }

    // ── Serialization ────────────────────────────────────────────────

    #[test]
    fn test_serde_round_trip() {
        let m = Maybe::<u32, String>::of(Some(7)).map(|n| Some(n.to_string()));
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"Present":{"Consumed":"7"}}"#);
        let back: Maybe<u32, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        assert_eq!(
            serde_json::to_string(&Maybe::<u32, String>::absent()).unwrap(),
            r#""Absent""#
        );
    }
}
