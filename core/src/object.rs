//! The behavioral contract shared by every object variant.

use vault_types::{CollapseError, DangerLevel, ObjectId, Stability};

/// Outcome of a successful [`QuantumObject::analyze`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Stability after the analysis delta was applied.
    pub stability: Stability,
    /// Variant-specific informational note, if the variant has one.
    pub note: Option<&'static str>,
}

/// Outcome of an emergency cooling. Cooling only ever raises stability, so
/// there is no failure case.
#[derive(Debug, Clone, PartialEq)]
pub struct CoolingReport {
    /// Stability after the +50 boost (clamped at 100).
    pub stability: Stability,
    /// Variant-specific confirmation line, naming the cooled object.
    pub message: String,
}

/// Capability set implemented by every stored object.
pub trait QuantumObject {
    fn id(&self) -> &ObjectId;

    fn stability(&self) -> Stability;

    fn danger_level(&self) -> DangerLevel;

    /// Perturb stability by the variant's fixed delta.
    ///
    /// Fails with [`CollapseError`] when the delta would push stability to or
    /// below zero; the stored value is clamped to zero first, so the object
    /// is observably destroyed even though the session is about to end.
    fn analyze(&mut self) -> Result<AnalysisReport, CollapseError>;

    /// Explicit capability query for emergency cooling.
    ///
    /// Callers must branch on this before attempting to cool; a `None` means
    /// the variant does not support cooling, which is the caller's condition
    /// to report, not a runtime failure of the object.
    fn as_coolable(&mut self) -> Option<&mut dyn Coolable> {
        None
    }

    /// One-line status shared by all variants: id, stability to two decimal
    /// places, danger level.
    fn status_line(&self) -> String {
        format!(
            "ID: {} | Stability: %{} | Danger: {}",
            self.id(),
            self.stability(),
            self.danger_level()
        )
    }
}

/// Emergency cooling, implemented only by the critical variants.
pub trait Coolable {
    /// Restore 50 points of stability, clamped at the ceiling. Cooling never
    /// lowers stability, so it cannot trigger a collapse.
    fn emergency_cool(&mut self) -> CoolingReport;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::{AntiMatter, DataPacket};

    #[test]
    fn status_line_format_is_shared_across_variants() {
        let packet = DataPacket::new(ObjectId::sequential(1));
        assert_eq!(
            packet.status_line(),
            "ID: NESNE-1 | Stability: %100.00 | Danger: 1"
        );

        let mut anti = AntiMatter::new(ObjectId::sequential(2));
        anti.analyze().unwrap();
        assert_eq!(
            anti.status_line(),
            "ID: NESNE-2 | Stability: %75.00 | Danger: 10"
        );
    }
}
