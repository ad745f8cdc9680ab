use std::fmt;

use crate::{CollapseError, ObjectId};

/// Bounded health value shared by every object variant.
///
/// Invariant: `0.0 <= value <= 100.0`. Crossing the lower bound is fatal to
/// the whole session: the stored value clamps to zero and the mutator fails
/// with a [`CollapseError`] naming the owning object.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Stability(f64);

impl Stability {
    pub const MAX: f64 = 100.0;

    /// Every object starts fully stable.
    pub const FULL: Stability = Stability(Self::MAX);

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Store a proposed value, clamping at both bounds.
    ///
    /// A proposal above the ceiling silently clamps to 100. A proposal at or
    /// below zero clamps to 0 *and* fails with the terminal collapse error.
    /// No side effects beyond the stored value; printing is the caller's
    /// responsibility.
    pub fn set(&mut self, proposed: f64, owner: &ObjectId) -> Result<(), CollapseError> {
        if proposed <= 0.0 {
            self.0 = 0.0;
            return Err(CollapseError::new(owner.clone()));
        }
        self.0 = proposed.min(Self::MAX);
        Ok(())
    }

    /// Apply a delta to the current value via [`Stability::set`].
    pub fn shift(&mut self, delta: f64, owner: &ObjectId) -> Result<(), CollapseError> {
        self.set(self.0 + delta, owner)
    }
}

impl Default for Stability {
    fn default() -> Self {
        Self::FULL
    }
}

/// Two decimal places, everywhere an operator sees a stability value.
impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
