//! Component storage
//!
//! Each component kind lives in its own [`ComponentTable`]: a dense array of
//! values, a parallel array of owning entities, and a sparse entity → slot
//! map. Lookups are O(1), iteration is over the dense arrays in insertion
//! order, and removal swaps the last element into the vacated slot.
//!
//! Because removal reorders the dense arrays, removing from a table while
//! walking it by index can skip or revisit elements. Callers that mutate a
//! table during a loop over it should iterate a snapshot of
//! [`ComponentTable::entities`] instead.

use std::collections::HashMap;

use super::{Component, Entity};

/// Errors raised by component storage
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EcsError {
    /// The entity already owns a component of this kind
    #[error("entity {entity:?} already has a {component} component")]
    DuplicateComponent {
        /// Offending entity
        entity: Entity,
        /// Component type name
        component: &'static str,
    },
}

/// Dense storage for one component kind
pub struct ComponentTable<T: Component> {
    components: Vec<T>,
    entities: Vec<Entity>,
    // Only holds the most recent slot for entities inserted with duplicates
    slots: HashMap<Entity, usize>,
    has_duplicates: bool,
}

impl<T: Component> ComponentTable<T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            entities: Vec::new(),
            slots: HashMap::new(),
            has_duplicates: false,
        }
    }

    /// Insert a component, failing if the entity already has one
    pub fn insert(&mut self, entity: Entity, component: T) -> Result<&mut T, EcsError> {
        if self.slots.contains_key(&entity) {
            return Err(EcsError::DuplicateComponent {
                entity,
                component: T::type_name(),
            });
        }
        Ok(self.push(entity, component))
    }

    /// Insert a component, replacing any existing one
    pub fn insert_or_replace(&mut self, entity: Entity, component: T) -> &mut T {
        if let Some(&slot) = self.slots.get(&entity) {
            self.components[slot] = component;
            &mut self.components[slot]
        } else {
            self.push(entity, component)
        }
    }

    /// Append a component even if the entity already has one
    ///
    /// Only meaningful for tables that are consumed by iteration (such as
    /// per-frame event records). `get` on such an entity returns the most
    /// recently appended value.
    pub fn insert_with_duplicates(&mut self, entity: Entity, component: T) -> &mut T {
        self.has_duplicates |= self.slots.contains_key(&entity);
        self.push(entity, component)
    }

    fn push(&mut self, entity: Entity, component: T) -> &mut T {
        let slot = self.components.len();
        self.slots.insert(entity, slot);
        self.entities.push(entity);
        self.components.push(component);
        &mut self.components[slot]
    }

    /// Get the component for an entity
    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.slots.get(&entity).map(|&slot| &self.components[slot])
    }

    /// Get the component for an entity mutably
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        match self.slots.get(&entity) {
            Some(&slot) => Some(&mut self.components[slot]),
            None => None,
        }
    }

    /// Whether the entity has a component in this table
    pub fn has(&self, entity: Entity) -> bool {
        self.slots.contains_key(&entity)
    }

    /// Remove the entity's component; no-op if absent
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let slot = self.slots.remove(&entity)?;
        let last = self.components.len() - 1;
        if slot != last {
            let moved = self.entities[last];
            // A duplicate-inserted entity may still own older slots; only
            // repoint the sparse entry if it referenced the moved slot.
            if self.slots.get(&moved) == Some(&last) {
                self.slots.insert(moved, slot);
            }
        }
        self.entities.swap_remove(slot);
        Some(self.components.swap_remove(slot))
    }

    /// Remove every component owned by the entity, including duplicates
    ///
    /// Returns how many components were removed.
    pub fn remove_all(&mut self, entity: Entity) -> usize {
        if !self.has_duplicates {
            return usize::from(self.remove(entity).is_some());
        }

        let mut removed = 0;
        let mut i = 0;
        while i < self.entities.len() {
            if self.entities[i] == entity {
                self.entities.swap_remove(i);
                self.components.swap_remove(i);
                removed += 1;
            } else {
                i += 1;
            }
        }
        if removed > 0 {
            self.slots.clear();
            for (slot, &owner) in self.entities.iter().enumerate() {
                self.slots.insert(owner, slot);
            }
        }
        removed
    }

    /// Remove every component
    pub fn clear(&mut self) {
        self.components.clear();
        self.entities.clear();
        self.slots.clear();
        self.has_duplicates = false;
    }

    /// Number of stored components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Entities in dense (insertion) order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Components in dense (insertion) order
    pub fn components(&self) -> &[T] {
        &self.components
    }

    /// Iterate `(entity, component)` pairs in dense order
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.entities.iter().copied().zip(self.components.iter())
    }

    /// Move every `(entity, component)` pair out, leaving the table empty
    pub fn drain(&mut self) -> impl Iterator<Item = (Entity, T)> + '_ {
        self.slots.clear();
        self.has_duplicates = false;
        self.entities.drain(..).zip(self.components.drain(..))
    }
}

impl<T: Component> Default for ComponentTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Type-erased access used by the registry to purge an entity everywhere
pub trait ErasedTable {
    /// Remove the entity's component; no-op if absent
    fn remove_entity(&mut self, entity: Entity);
    /// Whether the entity has a component in this table
    fn has_entity(&self, entity: Entity) -> bool;
    /// Remove every component
    fn clear_all(&mut self);
    /// Number of stored components
    fn size(&self) -> usize;
}

impl<T: Component> ErasedTable for ComponentTable<T> {
    fn remove_entity(&mut self, entity: Entity) {
        self.remove_all(entity);
    }

    fn has_entity(&self, entity: Entity) -> bool {
        self.has(entity)
    }

    fn clear_all(&mut self) {
        self.clear();
    }

    fn size(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::EntityAllocator;

    #[derive(Debug, Clone, PartialEq)]
    struct Health(i32);
    impl Component for Health {}

    fn entities(n: usize) -> Vec<Entity> {
        let mut allocator = EntityAllocator::new();
        (0..n).map(|_| allocator.allocate()).collect()
    }

    #[test]
    fn test_insert_and_get() {
        let e = entities(1);
        let mut table = ComponentTable::new();
        table.insert(e[0], Health(10)).unwrap();
        assert!(table.has(e[0]));
        assert_eq!(table.get(e[0]), Some(&Health(10)));
    }

    #[test]
    fn test_duplicate_insert_fails() {
        let e = entities(1);
        let mut table = ComponentTable::new();
        table.insert(e[0], Health(10)).unwrap();
        let err = table.insert(e[0], Health(20)).unwrap_err();
        assert!(matches!(err, EcsError::DuplicateComponent { entity, .. } if entity == e[0]));
        assert_eq!(table.get(e[0]), Some(&Health(10)));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let e = entities(2);
        let mut table = ComponentTable::new();
        table.insert(e[0], Health(1)).unwrap();
        assert!(table.remove(e[1]).is_none());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_remove_swaps_last_into_slot() {
        let e = entities(3);
        let mut table = ComponentTable::new();
        for (i, &entity) in e.iter().enumerate() {
            table.insert(entity, Health(i as i32)).unwrap();
        }

        assert_eq!(table.remove(e[0]), Some(Health(0)));
        assert_eq!(table.entities(), &[e[2], e[1]]);
        assert_eq!(table.get(e[2]), Some(&Health(2)));
        assert_eq!(table.get(e[1]), Some(&Health(1)));
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let e = entities(3);
        let mut table = ComponentTable::new();
        for (i, &entity) in e.iter().enumerate() {
            table.insert(entity, Health(i as i32)).unwrap();
        }
        let order: Vec<_> = table.iter().map(|(entity, _)| entity).collect();
        assert_eq!(order, e);
    }

    #[test]
    fn test_insert_with_duplicates_appends() {
        let e = entities(2);
        let mut table = ComponentTable::new();
        table.insert_with_duplicates(e[0], Health(1));
        table.insert_with_duplicates(e[0], Health(2));
        table.insert_with_duplicates(e[1], Health(3));
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(e[0]), Some(&Health(2)));

        assert_eq!(table.remove_all(e[0]), 2);
        assert_eq!(table.len(), 1);
        assert!(!table.has(e[0]));
        assert_eq!(table.get(e[1]), Some(&Health(3)));
    }

    #[test]
    fn test_snapshot_iteration_survives_removal() {
        let e = entities(4);
        let mut table = ComponentTable::new();
        for (i, &entity) in e.iter().enumerate() {
            table.insert(entity, Health(i as i32)).unwrap();
        }

        let mut visited = Vec::new();
        for entity in table.entities().to_vec() {
            visited.push(entity);
            table.remove(entity);
        }
        assert_eq!(visited, e);
        assert!(table.is_empty());
    }

    #[test]
    fn test_drain_empties_table() {
        let e = entities(2);
        let mut table = ComponentTable::new();
        table.insert(e[0], Health(1)).unwrap();
        table.insert(e[1], Health(2)).unwrap();
        let drained: Vec<_> = table.drain().collect();
        assert_eq!(drained, vec![(e[0], Health(1)), (e[1], Health(2))]);
        assert!(table.is_empty());
        assert!(!table.has(e[0]));
    }
}
