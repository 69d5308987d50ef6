//! Callbacks into systems outside the collision core
//!
//! Rendering, the HUD and the AI live elsewhere. Resolvers notify them
//! through [`CollisionHooks`]; every method has a no-op default so a host
//! only overrides what it needs.

use crate::ecs::components::{ConsumableKind, ProjectileKind};
use crate::ecs::{Entity, World};

/// Notifications raised during collision resolution
pub trait CollisionHooks {
    /// An entity's render representation was removed
    fn on_render_destroyed(&mut self, _entity: Entity) {}

    /// The player's weapon was swapped, e.g. back to the harpoon when out of ammo
    fn on_weapon_swapped(&mut self, _kind: ProjectileKind) {}

    /// A player's inventory count changed
    fn on_inventory_changed(&mut self, _player: Entity, _kind: ConsumableKind) {}

    /// An enemy bounced off a wall and should pick a new heading
    fn choose_new_direction(&mut self, _world: &mut World, _enemy: Entity, _wall: Entity) {}
}

/// Hooks that ignore every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl CollisionHooks for NoopHooks {}

/// Hooks that record every notification, for tests and debugging
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingHooks {
    /// Entities whose render representation was removed
    pub destroyed_renders: Vec<Entity>,
    /// Weapon swaps in order
    pub weapon_swaps: Vec<ProjectileKind>,
    /// Inventory changes in order
    pub inventory_changes: Vec<(Entity, ConsumableKind)>,
    /// Direction change requests in order
    pub direction_requests: Vec<(Entity, Entity)>,
}

impl CollisionHooks for RecordingHooks {
    fn on_render_destroyed(&mut self, entity: Entity) {
        self.destroyed_renders.push(entity);
    }

    fn on_weapon_swapped(&mut self, kind: ProjectileKind) {
        self.weapon_swaps.push(kind);
    }

    fn on_inventory_changed(&mut self, player: Entity, kind: ConsumableKind) {
        self.inventory_changes.push((player, kind));
    }

    fn choose_new_direction(&mut self, _world: &mut World, enemy: Entity, wall: Entity) {
        self.direction_requests.push((enemy, wall));
    }
}
