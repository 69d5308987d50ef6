//! Entity implementation
//!
//! Entities are opaque handles allocated from a generational arena. An
//! entity carries no data of its own; what it "is" is decided by the
//! component tables that currently hold data for it.

use slotmap::{new_key_type, Key, SlotMap};
use std::fmt;

new_key_type! {
    /// Arena key backing an [`Entity`]
    pub struct EntityKey;
}

/// Entity identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity {
    key: EntityKey,
}

impl Entity {
    /// Create an entity handle from an arena key
    pub(super) fn new(key: EntityKey) -> Self {
        Self { key }
    }

    /// Get the slot index of this entity
    pub fn id(&self) -> u32 {
        // KeyData packs (generation << 32) | index
        (self.key.data().as_ffi() & 0xFFFF_FFFF) as u32
    }

    /// Get the generation of this entity's slot
    pub fn generation(&self) -> u32 {
        (self.key.data().as_ffi() >> 32) as u32
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({}v{})", self.id(), self.generation())
    }
}

/// Allocates and recycles entity handles
#[derive(Default)]
pub struct EntityAllocator {
    slots: SlotMap<EntityKey, ()>,
}

impl EntityAllocator {
    /// Create an empty allocator
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh entity
    pub fn allocate(&mut self) -> Entity {
        Entity::new(self.slots.insert(()))
    }

    /// Free an entity; returns false if it was already freed
    pub fn free(&mut self, entity: Entity) -> bool {
        self.slots.remove(entity.key).is_some()
    }

    /// Whether the handle still refers to a live slot
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.slots.contains_key(entity.key)
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no entities are alive
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Free every entity
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_unique() {
        let mut allocator = EntityAllocator::new();
        let a = allocator.allocate();
        let b = allocator.allocate();
        assert_ne!(a, b);
        assert_eq!(allocator.len(), 2);
    }

    #[test]
    fn test_stale_handle_after_free() {
        let mut allocator = EntityAllocator::new();
        let a = allocator.allocate();
        assert!(allocator.free(a));
        assert!(!allocator.is_alive(a));
        assert!(!allocator.free(a));

        // The slot is recycled with a new generation
        let b = allocator.allocate();
        assert_eq!(a.id(), b.id());
        assert_ne!(a.generation(), b.generation());
        assert!(!allocator.is_alive(a));
        assert!(allocator.is_alive(b));
    }
}
