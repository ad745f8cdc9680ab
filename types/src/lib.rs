//! Core domain types for the quantum vault.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the
//! application.

mod ids;
mod stability;

pub use ids::ObjectId;
pub use stability::Stability;

use std::fmt;

use thiserror::Error;

/// Terminal failure: an object's stability dropped to or below zero.
///
/// This is not a recoverable per-call error. The session controller is the
/// only component allowed to observe it, and must halt the session without
/// processing further commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("SYSTEM COLLAPSED! INITIATING EVACUATION... (Exploded Object ID: {id})")]
pub struct CollapseError {
    id: ObjectId,
}

impl CollapseError {
    #[must_use]
    pub fn new(id: ObjectId) -> Self {
        Self { id }
    }

    /// The object whose stability hit zero.
    #[must_use]
    pub fn object_id(&self) -> &ObjectId {
        &self.id
    }
}

/// Recoverable lookup failure: the referenced id is not in the inventory.
///
/// Reported to the operator and the session continues. Must never escalate
/// to [`CollapseError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("object not found: {id}")]
pub struct NotFoundError {
    id: ObjectId,
}

impl NotFoundError {
    #[must_use]
    pub fn new(id: ObjectId) -> Self {
        Self { id }
    }

    #[must_use]
    pub fn object_id(&self) -> &ObjectId {
        &self.id
    }
}

/// Fixed per-variant severity tag. Informational only; never used in any
/// stability computation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct DangerLevel(u8);

impl DangerLevel {
    #[must_use]
    pub const fn new(level: u8) -> Self {
        Self(level)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for DangerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
