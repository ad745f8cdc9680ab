use std::fmt;

/// Opaque object identifier.
///
/// Sequentially assigned ids use the `NESNE-<n>` scheme. Uniqueness is by
/// monotonic counter only; nothing validates it, and lookups are defined as
/// first-match in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Wrap an operator-supplied id verbatim (lookups take arbitrary input).
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The id assigned to the `n`-th created object.
    #[must_use]
    pub fn sequential(n: u64) -> Self {
        Self(format!("NESNE-{n}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
