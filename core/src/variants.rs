//! The three concrete object kinds.
//!
//! Each variant fixes a danger level and an analysis delta at construction;
//! the critical two (DarkMatter, AntiMatter) additionally carry the cooling
//! capability. All variants start at full stability.

use vault_types::{CollapseError, DangerLevel, ObjectId, Stability};

use crate::object::{AnalysisReport, Coolable, CoolingReport, QuantumObject};

/// Stability restored by one emergency cooling, shared by all coolable kinds.
const COOLING_BOOST: f64 = 50.0;

/// The object kinds a session can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    DataPacket,
    DarkMatter,
    AntiMatter,
}

impl VariantKind {
    pub const ALL: [VariantKind; 3] = [
        VariantKind::DataPacket,
        VariantKind::DarkMatter,
        VariantKind::AntiMatter,
    ];

    /// Display name used in the add-confirmation line.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            VariantKind::DataPacket => "DataPacket",
            VariantKind::DarkMatter => "DarkMatter",
            VariantKind::AntiMatter => "AntiMatter",
        }
    }

    /// Construct a fresh object of this kind.
    #[must_use]
    pub fn spawn(self, id: ObjectId) -> Box<dyn QuantumObject> {
        match self {
            VariantKind::DataPacket => Box::new(DataPacket::new(id)),
            VariantKind::DarkMatter => Box::new(DarkMatter::new(id)),
            VariantKind::AntiMatter => Box::new(AntiMatter::new(id)),
        }
    }
}

/// Inert data carrier. Cheap to analyze, impossible to cool.
#[derive(Debug)]
pub struct DataPacket {
    id: ObjectId,
    stability: Stability,
}

impl DataPacket {
    pub const DANGER: DangerLevel = DangerLevel::new(1);
    const ANALYZE_DELTA: f64 = -5.0;

    #[must_use]
    pub fn new(id: ObjectId) -> Self {
        Self {
            id,
            stability: Stability::FULL,
        }
    }
}

impl QuantumObject for DataPacket {
    fn id(&self) -> &ObjectId {
        &self.id
    }

    fn stability(&self) -> Stability {
        self.stability
    }

    fn danger_level(&self) -> DangerLevel {
        Self::DANGER
    }

    fn analyze(&mut self) -> Result<AnalysisReport, CollapseError> {
        self.stability.shift(Self::ANALYZE_DELTA, &self.id)?;
        Ok(AnalysisReport {
            stability: self.stability,
            note: None,
        })
    }
}

/// Critical variant: erodes faster under analysis, supports cooling.
#[derive(Debug)]
pub struct DarkMatter {
    id: ObjectId,
    stability: Stability,
}

impl DarkMatter {
    pub const DANGER: DangerLevel = DangerLevel::new(5);
    const ANALYZE_DELTA: f64 = -15.0;

    #[must_use]
    pub fn new(id: ObjectId) -> Self {
        Self {
            id,
            stability: Stability::FULL,
        }
    }
}

impl QuantumObject for DarkMatter {
    fn id(&self) -> &ObjectId {
        &self.id
    }

    fn stability(&self) -> Stability {
        self.stability
    }

    fn danger_level(&self) -> DangerLevel {
        Self::DANGER
    }

    fn analyze(&mut self) -> Result<AnalysisReport, CollapseError> {
        self.stability.shift(Self::ANALYZE_DELTA, &self.id)?;
        Ok(AnalysisReport {
            stability: self.stability,
            note: None,
        })
    }

    fn as_coolable(&mut self) -> Option<&mut dyn Coolable> {
        Some(self)
    }
}

impl Coolable for DarkMatter {
    fn emergency_cool(&mut self) -> CoolingReport {
        // Cannot fail: the boost is strictly positive.
        let _ = self.stability.shift(COOLING_BOOST, &self.id);
        CoolingReport {
            stability: self.stability,
            message: format!("{} cooled. Stability restored.", self.id),
        }
    }
}

/// The most dangerous kind. Analysis shakes the fabric of the universe.
#[derive(Debug)]
pub struct AntiMatter {
    id: ObjectId,
    stability: Stability,
}

impl AntiMatter {
    pub const DANGER: DangerLevel = DangerLevel::new(10);
    const ANALYZE_DELTA: f64 = -25.0;
    const ANALYZE_NOTE: &'static str = "The fabric of the universe trembles...";

    #[must_use]
    pub fn new(id: ObjectId) -> Self {
        Self {
            id,
            stability: Stability::FULL,
        }
    }
}

impl QuantumObject for AntiMatter {
    fn id(&self) -> &ObjectId {
        &self.id
    }

    fn stability(&self) -> Stability {
        self.stability
    }

    fn danger_level(&self) -> DangerLevel {
        Self::DANGER
    }

    fn analyze(&mut self) -> Result<AnalysisReport, CollapseError> {
        self.stability.shift(Self::ANALYZE_DELTA, &self.id)?;
        Ok(AnalysisReport {
            stability: self.stability,
            note: Some(Self::ANALYZE_NOTE),
        })
    }

    fn as_coolable(&mut self) -> Option<&mut dyn Coolable> {
        Some(self)
    }
}

impl Coolable for AntiMatter {
    fn emergency_cool(&mut self) -> CoolingReport {
        let _ = self.stability.shift(COOLING_BOOST, &self.id);
        CoolingReport {
            stability: self.stability,
            message: format!("Critical cooling performed on {}!", self.id),
        }
    }
}
