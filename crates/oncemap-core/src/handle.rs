//! # Untyped Handles
//!
//! A container in oncemap holds either its stage's start value, its
//! transformed value, or nothing. Extraction hands that payload out without
//! committing to a type: a [`Handle`] borrows it, an [`OwnedHandle`] owns it.
//! The caller narrows the handle back with a checked downcast.
//!
//! ## Kind Tag
//!
//! Every handle carries a closed [`Slot`] tag and the `type_name` of the
//! value it holds alongside the `dyn Any` payload. The tag tells the caller
//! which slot the value came from without a cast, and both feed the
//! [`CastMismatch`] produced when a cast fails.
//!
//! An absent handle has no payload and never casts, whatever the target type.

use std::any::{type_name, Any};

use serde::{Deserialize, Serialize};

use crate::error::CastMismatch;

/// `found` value reported when casting an absent handle.
const ABSENT_TYPE_NAME: &str = "absent";

/// Which part of a container a handle was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// The stage's start value, before its transform ran.
    Start,
    /// The value produced by the stage's transform.
    Next,
    /// The container was absent; there is no value.
    Absent,
}

impl Slot {
    /// Canonical upper-case name of the slot.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::Next => "NEXT",
            Self::Absent => "ABSENT",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn mismatch<T: Any>(slot: Slot, found: &'static str) -> CastMismatch {
    CastMismatch {
        expected: type_name::<T>(),
        found,
        slot,
    }
}

// ─── Borrowed Handle ─────────────────────────────────────────────────

/// A borrowed, untyped view over a container's current payload.
#[derive(Debug, Clone, Copy)]
pub struct Handle<'a> {
    slot: Slot,
    type_name: &'static str,
    value: Option<&'a dyn Any>,
}

impl<'a> Handle<'a> {
    /// Handle over a stage's start value.
    pub fn start<T: Any>(value: &'a T) -> Self {
        Self {
            slot: Slot::Start,
            type_name: type_name::<T>(),
            value: Some(value),
        }
    }

    /// Handle over a stage's transformed value.
    pub fn next<T: Any>(value: &'a T) -> Self {
        Self {
            slot: Slot::Next,
            type_name: type_name::<T>(),
            value: Some(value),
        }
    }

    /// Handle identifying an absent container.
    pub fn absent() -> Self {
        Self {
            slot: Slot::Absent,
            type_name: ABSENT_TYPE_NAME,
            value: None,
        }
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// Type name of the held value, or `"absent"`.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// Whether a cast to `T` would succeed.
    pub fn is<T: Any>(&self) -> bool {
        self.value.is_some_and(|v| v.is::<T>())
    }

    /// Narrow the handle to `&T`.
    ///
    /// The returned reference borrows from the container, not the handle,
    /// so the handle itself may be dropped.
    pub fn cast<T: Any>(&self) -> Result<&'a T, CastMismatch> {
        self.value
            .and_then(|v| v.downcast_ref::<T>())
            .ok_or_else(|| mismatch::<T>(self.slot, self.type_name))
    }
}

/// Narrow `handle` to `&T`. Free-function form of [`Handle::cast`].
pub fn cast<'a, T: Any>(handle: &Handle<'a>) -> Result<&'a T, CastMismatch> {
    handle.cast::<T>()
}

// ─── Owned Handle ────────────────────────────────────────────────────

/// An owning, untyped payload taken out of a consumed container.
#[derive(Debug)]
pub struct OwnedHandle {
    slot: Slot,
    type_name: &'static str,
    value: Option<Box<dyn Any>>,
}

impl OwnedHandle {
    /// Owned handle over a stage's start value.
    pub fn start<T: Any>(value: T) -> Self {
        Self {
            slot: Slot::Start,
            type_name: type_name::<T>(),
            value: Some(Box::new(value)),
        }
    }

    /// Owned handle over a stage's transformed value.
    pub fn next<T: Any>(value: T) -> Self {
        Self {
            slot: Slot::Next,
            type_name: type_name::<T>(),
            value: Some(Box::new(value)),
        }
    }

    /// Owned handle identifying an absent container.
    pub fn absent() -> Self {
        Self {
            slot: Slot::Absent,
            type_name: ABSENT_TYPE_NAME,
            value: None,
        }
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// Borrow as a [`Handle`].
    pub fn as_handle(&self) -> Handle<'_> {
        Handle {
            slot: self.slot,
            type_name: self.type_name,
            value: self.value.as_deref(),
        }
    }

    /// Take the payload out as `T`.
    ///
    /// On mismatch the payload is dropped along with the handle.
    pub fn downcast<T: Any>(self) -> Result<T, CastMismatch> {
        let err = mismatch::<T>(self.slot, self.type_name);
        match self.value {
            Some(boxed) => boxed.downcast::<T>().map(|v| *v).map_err(|_| err),
            None => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Person {
        name: String,
        age: u32,
    }

    fn person() -> Person {
        Person {
            name: "test name".into(),
            age: 38,
        }
    }

    #[test]
    fn test_start_handle_casts_to_held_type() {
        let p = person();
        let h = Handle::start(&p);
        assert_eq!(h.slot(), Slot::Start);
        assert!(h.is::<Person>());
        assert_eq!(h.cast::<Person>().unwrap(), &p);
    }

    #[test]
    fn test_cast_outlives_handle() {
        let value = 7_u64;
        let r: &u64 = {
            let h = Handle::next(&value);
            h.cast::<u64>().unwrap()
        };
        assert_eq!(*r, 7);
    }

    #[test]
    fn test_wrong_type_is_mismatch() {
        let value = 42_i32;
        let err = cast::<i64>(&Handle::next(&value)).unwrap_err();
        assert_eq!(err.expected, "i64");
        assert_eq!(err.found, "i32");
        assert_eq!(err.slot, Slot::Next);
    }

    #[test]
    fn test_absent_handle_never_casts() {
        let h = Handle::absent();
        assert!(h.is_absent());
        assert!(!h.is::<()>());
        let err = h.cast::<()>().unwrap_err();
        assert_eq!(err.found, "absent");
        assert_eq!(err.slot, Slot::Absent);
    }

    #[test]
    fn test_owned_downcast_returns_value() {
        let h = OwnedHandle::start(person());
        assert_eq!(h.type_name(), std::any::type_name::<Person>());
        assert_eq!(h.downcast::<Person>().unwrap(), person());
    }

    #[test]
    fn test_owned_downcast_mismatch() {
        let err = OwnedHandle::next(String::from("x"))
            .downcast::<u8>()
            .unwrap_err();
        assert_eq!(err.found, std::any::type_name::<String>());
        assert!(OwnedHandle::absent().downcast::<String>().is_err());
    }

    #[test]
    fn test_owned_as_handle_borrows_payload() {
        let owned = OwnedHandle::next(vec![1_u8, 2, 3]);
        let h = owned.as_handle();
        assert_eq!(h.slot(), Slot::Next);
        assert_eq!(h.cast::<Vec<u8>>().unwrap(), &vec![1, 2, 3]);
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(Slot::Start.to_string(), "START");
        assert_eq!(Slot::Next.to_string(), "NEXT");
        assert_eq!(Slot::Absent.to_string(), "ABSENT");
    }
}
