//! Append-only object store, insertion order preserved.

use vault_types::ObjectId;

use crate::object::QuantumObject;

/// Ordered collection of every object created during a session.
///
/// Append-only: objects are never removed, even after a collapse freezes the
/// session. Owned exclusively by the session controller.
#[derive(Default)]
pub struct Inventory {
    objects: Vec<Box<dyn QuantumObject>>,
}

impl Inventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: Box<dyn QuantumObject>) {
        tracing::debug!(id = %object.id(), "object stored");
        self.objects.push(object);
    }

    /// Linear scan in insertion order; first match wins. Ids are expected
    /// but not enforced unique, so a scan is the correct general contract.
    pub fn find_by_id(&mut self, id: &ObjectId) -> Option<&mut (dyn QuantumObject + '_)> {
        self.objects
            .iter_mut()
            .find(|object| object.id() == id)
            .map(|object| &mut **object as &mut dyn QuantumObject)
    }

    /// Read-only view in insertion order, for display only.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &dyn QuantumObject> {
        self.objects.iter().map(|object| object.as_ref())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::VariantKind;

    #[test]
    fn preserves_insertion_order() {
        let mut inventory = Inventory::new();
        inventory.add(VariantKind::DataPacket.spawn(ObjectId::sequential(1)));
        inventory.add(VariantKind::DarkMatter.spawn(ObjectId::sequential(2)));
        inventory.add(VariantKind::AntiMatter.spawn(ObjectId::sequential(3)));

        let ids: Vec<String> = inventory
            .iter()
            .map(|object| object.id().to_string())
            .collect();
        assert_eq!(ids, ["NESNE-1", "NESNE-2", "NESNE-3"]);
        assert_eq!(inventory.len(), 3);
    }

    #[test]
    fn find_by_id_returns_the_first_match_on_collision() {
        let mut inventory = Inventory::new();
        let shared = ObjectId::new("NESNE-1");
        inventory.add(VariantKind::DataPacket.spawn(shared.clone()));
        inventory.add(VariantKind::AntiMatter.spawn(shared.clone()));

        let found = inventory.find_by_id(&shared).unwrap();
        assert_eq!(found.danger_level().value(), 1);
    }

    #[test]
    fn find_by_id_misses_unknown_ids() {
        let mut inventory = Inventory::new();
        assert!(inventory.is_empty());
        assert!(inventory.find_by_id(&ObjectId::new("NESNE-404")).is_none());
    }
}
