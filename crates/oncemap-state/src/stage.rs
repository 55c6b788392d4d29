//! # Stage Payloads
//!
//! A present container is in exactly one of two stages: its start value is
//! waiting for the stage's single transform, or the transform has run and
//! the container holds its result. Encoding that as a sum type leaves no
//! room for a "transformed but no result" combination.

use serde::{Deserialize, Serialize};

/// Payload of a present container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage<A, B> {
    /// The start value; the stage's transform has not run.
    Unconsumed(A),
    /// The transform's result; no further transform is permitted.
    Consumed(B),
}

impl<A, B> Stage<A, B> {
    pub fn kind(&self) -> StageKind {
        match self {
            Self::Unconsumed(_) => StageKind::Unconsumed,
            Self::Consumed(_) => StageKind::Consumed,
        }
    }
}

/// Runtime view of where a container sits in its stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StageKind {
    /// Present, transform not yet applied.
    Unconsumed,
    /// Present, transform applied.
    Consumed,
    /// No value (terminal within a stage).
    Absent,
}

impl StageKind {
    /// Whether no transform or bridge can ever produce a value from here.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Whether a transform may still run.
    pub fn accepts_transform(&self) -> bool {
        matches!(self, Self::Unconsumed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unconsumed => "UNCONSUMED",
            Self::Consumed => "CONSUMED",
            Self::Absent => "ABSENT",
        }
    }
}

impl std::fmt::Display for StageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
