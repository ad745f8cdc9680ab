//! The session state machine.

use vault_core::{Inventory, VariantKind};
use vault_types::{CollapseError, NotFoundError, ObjectId, Stability};

use crate::variant_source::VariantSource;

/// Whole-process session phase. `Halted` is terminal: once entered (by a
/// collapse or a graceful exit) no further operation touches the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Running,
    Halted,
}

/// What a session operation produced. Rendering is the shell's job; events
/// carry everything it needs to print.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    ObjectAdded {
        kind: VariantKind,
        id: ObjectId,
    },
    /// One status line per object, insertion order.
    InventoryListed {
        lines: Vec<String>,
    },
    Analyzed {
        id: ObjectId,
        stability: Stability,
        note: Option<&'static str>,
    },
    Cooled {
        message: String,
        status: String,
    },
    /// The target exists but lacks the cooling capability.
    CoolingRefused {
        id: ObjectId,
    },
    /// Recoverable: the id is not in the inventory. The session continues.
    ObjectMissing(NotFoundError),
    /// Terminal: an object's stability hit zero. The session is now halted
    /// and the shell must end the process after printing the banner.
    Collapsed(CollapseError),
    /// The operation was refused because the session is already halted.
    Halted,
}

/// Session controller: sole owner of the inventory and the id counter.
pub struct Session {
    inventory: Inventory,
    variants: Box<dyn VariantSource>,
    next_serial: u64,
    phase: SessionPhase,
}

impl Session {
    #[must_use]
    pub fn new(variants: impl VariantSource + 'static) -> Self {
        Self {
            inventory: Inventory::new(),
            variants: Box::new(variants),
            next_serial: 1,
            phase: SessionPhase::Running,
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Create a randomly-typed object under the next sequential id.
    pub fn add_object(&mut self) -> SessionEvent {
        if self.phase == SessionPhase::Halted {
            return SessionEvent::Halted;
        }
        let kind = self.variants.next_variant();
        let id = ObjectId::sequential(self.next_serial);
        self.next_serial += 1;
        self.inventory.add(kind.spawn(id.clone()));
        tracing::info!(kind = kind.label(), %id, "object added");
        SessionEvent::ObjectAdded { kind, id }
    }

    #[must_use]
    pub fn list_inventory(&self) -> SessionEvent {
        if self.phase == SessionPhase::Halted {
            return SessionEvent::Halted;
        }
        SessionEvent::InventoryListed {
            lines: self
                .inventory
                .iter()
                .map(|object| object.status_line())
                .collect(),
        }
    }

    /// Analyze the target, eroding its stability. A collapse here latches
    /// the terminal phase before the event is returned.
    pub fn analyze(&mut self, id: &ObjectId) -> SessionEvent {
        if self.phase == SessionPhase::Halted {
            return SessionEvent::Halted;
        }
        let Some(object) = self.inventory.find_by_id(id) else {
            return SessionEvent::ObjectMissing(NotFoundError::new(id.clone()));
        };
        match object.analyze() {
            Ok(report) => SessionEvent::Analyzed {
                id: id.clone(),
                stability: report.stability,
                note: report.note,
            },
            Err(failure) => {
                self.phase = SessionPhase::Halted;
                tracing::error!(id = %failure.object_id(), "stability collapsed, session halted");
                SessionEvent::Collapsed(failure)
            }
        }
    }

    /// Cool the target if it carries the capability. Cooling only raises
    /// stability, so this can never collapse the session.
    pub fn emergency_cool(&mut self, id: &ObjectId) -> SessionEvent {
        if self.phase == SessionPhase::Halted {
            return SessionEvent::Halted;
        }
        let Some(object) = self.inventory.find_by_id(id) else {
            return SessionEvent::ObjectMissing(NotFoundError::new(id.clone()));
        };
        let report = match object.as_coolable() {
            Some(coolable) => coolable.emergency_cool(),
            None => {
                return SessionEvent::CoolingRefused { id: id.clone() };
            }
        };
        SessionEvent::Cooled {
            message: report.message,
            status: object.status_line(),
        }
    }

    /// Graceful shutdown (menu option 5). Same terminal phase as a collapse,
    /// without the failure protocol.
    pub fn close(&mut self) {
        self.phase = SessionPhase::Halted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant_source::SequenceVariantSource;

    fn session_with(script: &[VariantKind]) -> Session {
        Session::new(SequenceVariantSource::new(script.iter().copied()))
    }

    fn id(n: u64) -> ObjectId {
        ObjectId::sequential(n)
    }

    #[test]
    fn add_assigns_sequential_ids() {
        let mut session = session_with(&[
            VariantKind::DataPacket,
            VariantKind::DarkMatter,
            VariantKind::AntiMatter,
        ]);
        assert_eq!(
            session.add_object(),
            SessionEvent::ObjectAdded {
                kind: VariantKind::DataPacket,
                id: id(1)
            }
        );
        assert_eq!(
            session.add_object(),
            SessionEvent::ObjectAdded {
                kind: VariantKind::DarkMatter,
                id: id(2)
            }
        );
        assert_eq!(
            session.add_object(),
            SessionEvent::ObjectAdded {
                kind: VariantKind::AntiMatter,
                id: id(3)
            }
        );
        assert_eq!(session.inventory().len(), 3);
    }

    #[test]
    fn analyze_then_cool_a_dark_matter() {
        let mut session = session_with(&[
            VariantKind::DataPacket,
            VariantKind::DarkMatter,
            VariantKind::AntiMatter,
        ]);
        for _ in 0..3 {
            session.add_object();
        }

        let event = session.analyze(&id(2));
        let SessionEvent::Analyzed {
            id: target,
            stability,
            note,
        } = event
        else {
            panic!("expected Analyzed, got {event:?}");
        };
        assert_eq!(target, id(2));
        assert_eq!(stability.value(), 85.0);
        assert_eq!(note, None);

        // 85 + 50 clamps at the ceiling.
        let event = session.emergency_cool(&id(2));
        let SessionEvent::Cooled { message, status } = event else {
            panic!("expected Cooled, got {event:?}");
        };
        assert_eq!(message, "NESNE-2 cooled. Stability restored.");
        assert_eq!(status, "ID: NESNE-2 | Stability: %100.00 | Danger: 5");
    }

    #[test]
    fn analysis_notes_surface_in_the_event() {
        let mut session = session_with(&[VariantKind::AntiMatter]);
        session.add_object();
        let SessionEvent::Analyzed { note, .. } = session.analyze(&id(1)) else {
            panic!("expected Analyzed");
        };
        assert_eq!(note, Some("The fabric of the universe trembles..."));
    }

    #[test]
    fn unknown_ids_are_recoverable() {
        let mut session = session_with(&[VariantKind::DataPacket]);
        session.add_object();

        let event = session.analyze(&ObjectId::new("NESNE-404"));
        assert_eq!(
            event,
            SessionEvent::ObjectMissing(NotFoundError::new(ObjectId::new("NESNE-404")))
        );
        assert_eq!(session.phase(), SessionPhase::Running);

        let event = session.emergency_cool(&ObjectId::new("bogus"));
        assert!(matches!(event, SessionEvent::ObjectMissing(_)));
        assert_eq!(session.phase(), SessionPhase::Running);
    }

    #[test]
    fn cooling_a_data_packet_is_refused_without_mutation() {
        let mut session = session_with(&[VariantKind::DataPacket]);
        session.add_object();

        assert_eq!(
            session.emergency_cool(&id(1)),
            SessionEvent::CoolingRefused { id: id(1) }
        );
        let SessionEvent::InventoryListed { lines } = session.list_inventory() else {
            panic!("expected listing");
        };
        assert_eq!(lines, ["ID: NESNE-1 | Stability: %100.00 | Danger: 1"]);
    }

    #[test]
    fn listing_preserves_insertion_order() {
        let mut session = session_with(&[VariantKind::DarkMatter, VariantKind::DataPacket]);
        session.add_object();
        session.add_object();
        let SessionEvent::InventoryListed { lines } = session.list_inventory() else {
            panic!("expected listing");
        };
        assert_eq!(
            lines,
            [
                "ID: NESNE-1 | Stability: %100.00 | Danger: 5",
                "ID: NESNE-2 | Stability: %100.00 | Danger: 1",
            ]
        );
    }

    #[test]
    fn twentieth_analysis_collapses_and_freezes_the_session() {
        let mut session = session_with(&[VariantKind::DataPacket]);
        session.add_object();

        for _ in 0..19 {
            assert!(matches!(
                session.analyze(&id(1)),
                SessionEvent::Analyzed { .. }
            ));
        }

        let event = session.analyze(&id(1));
        let SessionEvent::Collapsed(failure) = event else {
            panic!("expected Collapsed, got {event:?}");
        };
        assert_eq!(failure.object_id(), &id(1));
        assert_eq!(session.phase(), SessionPhase::Halted);

        // Frozen: no 21st command is processed, the inventory is untouched.
        assert_eq!(session.add_object(), SessionEvent::Halted);
        assert_eq!(session.analyze(&id(1)), SessionEvent::Halted);
        assert_eq!(session.list_inventory(), SessionEvent::Halted);
        assert_eq!(session.inventory().len(), 1);
    }

    #[test]
    fn close_is_a_graceful_halt() {
        let mut session = session_with(&[]);
        session.close();
        assert_eq!(session.phase(), SessionPhase::Halted);
        assert_eq!(session.add_object(), SessionEvent::Halted);
    }
}
