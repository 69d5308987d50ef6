//! ECS World implementation
//!
//! The world is the single owner of all component data. Every component
//! kind the game uses has a named table so that systems can borrow several
//! tables mutably at once through disjoint field access.

use super::components::*;
use super::storage::{ComponentTable, ErasedTable};
use super::{Entity, EntityAllocator};
use crate::physics::collision::CollisionMesh;

macro_rules! world_tables {
    ($( $(#[$doc:meta])* $field:ident : $ty:ty ),* $(,)?) => {
        /// ECS World containing all entities and components
        pub struct World {
            allocator: EntityAllocator,
            $( $(#[$doc])* pub $field: ComponentTable<$ty>, )*
        }

        impl World {
            /// Create an empty world
            pub fn new() -> Self {
                Self {
                    allocator: EntityAllocator::new(),
                    $( $field: ComponentTable::new(), )*
                }
            }

            fn for_each_table_mut(&mut self, mut f: impl FnMut(&mut dyn ErasedTable)) {
                $( f(&mut self.$field); )*
            }

            /// Visit every table with its field name
            pub fn for_each_table(&self, mut f: impl FnMut(&'static str, &dyn ErasedTable)) {
                $( f(stringify!($field), &self.$field); )*
            }
        }
    };
}

world_tables! {
    // physics
    /// World placement
    positions: Position,
    /// Velocity and acceleration
    motions: Motion,
    /// Momentum-conserving bodies
    masses: Mass,
    /// Fine collision meshes (on player mesh sub-entities)
    collision_meshes: CollisionMesh,

    // player
    /// Player characters
    players: Player,
    /// Player projectiles
    player_projectiles: PlayerProjectile,
    /// Player consumable counts
    inventories: Inventory,
    /// Dying players
    death_timers: DeathTimer,

    // enemy
    /// Enemies
    deadlys: Deadly,
    /// Enemy projectiles
    enemy_projectiles: EnemyProjectile,
    /// Enemies flinging themselves
    acts_as_projectile: ActsAsProjectile,
    /// Bosses
    bosses: Boss,
    /// Oxygen modification cooldowns
    modify_oxygen_cd: ModifyOxygenCd,

    // ai
    /// Player tracking state
    tracks_player: TracksPlayer,
    /// Wander mode
    wanders: Wander,

    // oxygen
    /// Oxygen pools
    oxygen: Oxygen,
    /// Oxygen modifiers carried by damage sources
    oxygen_modifiers: OxygenModifier,
    /// Hit flash timers
    damage_indicators: DamageIndicator,
    /// Splash radii
    aoe: AreaOfEffect,

    // status
    /// Stun sources
    stuns: Stun,
    /// Stunned targets
    stunned: Stunned,
    /// Knockback sources
    knockbacks: Knockback,

    // level
    /// Solid walls
    active_walls: ActiveWall,
    /// Doors
    active_doors: ActiveDoor,
    /// Door destinations
    door_connections: DoorConnection,
    /// Smashable obstacles
    breakables: Breakable,
    /// Pending room transitions
    room_transitions: RoomTransition,
    /// Touchable objects
    interactables: Interactable,
    /// Pickups
    consumables: Consumable,

    // audio / render
    /// Pending sound requests
    sounds: Sound,
    /// Render representation handles
    renderables: Renderable,
}

impl World {
    /// Create a new entity with no components
    pub fn create_entity(&mut self) -> Entity {
        self.allocator.allocate()
    }

    /// Remove every component of an entity and free its handle
    pub fn destroy_entity(&mut self, entity: Entity) {
        self.remove_all_components_of(entity);
        self.allocator.free(entity);
    }

    /// Whether the handle refers to a live entity
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.allocator.is_alive(entity)
    }

    /// Number of live entities
    pub fn entity_count(&self) -> usize {
        self.allocator.len()
    }

    /// Remove the entity from every table
    ///
    /// The handle stays allocated; an entity's existence is the union of its
    /// components, so it is effectively gone from the simulation.
    pub fn remove_all_components_of(&mut self, entity: Entity) {
        self.for_each_table_mut(|table| table.remove_entity(entity));
    }

    /// Clear every table and free all entities
    pub fn clear(&mut self) {
        self.for_each_table_mut(|table| table.clear_all());
        self.allocator.clear();
    }

    /// Names of the tables holding data for an entity
    pub fn components_of(&self, entity: Entity) -> Vec<&'static str> {
        let mut names = Vec::new();
        self.for_each_table(|name, table| {
            if table.has_entity(entity) {
                names.push(name);
            }
        });
        names
    }

    /// Attach a sound unless one is already pending on the entity
    pub fn request_sound(&mut self, entity: Entity, id: SoundId) {
        if !self.sounds.has(entity) {
            self.sounds.insert_or_replace(entity, Sound::new(id));
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec2;

    #[test]
    fn test_remove_all_components_of() {
        let mut world = World::new();
        let enemy = world.create_entity();
        let other = world.create_entity();
        world.positions.insert(enemy, Position::default()).unwrap();
        world.motions.insert(enemy, Motion::default()).unwrap();
        world.deadlys.insert(enemy, Deadly).unwrap();
        world.positions.insert(other, Position::default()).unwrap();

        world.remove_all_components_of(enemy);

        assert!(world.components_of(enemy).is_empty());
        assert!(world.positions.has(other));
        // Handle stays allocated until destroyed
        assert!(world.is_alive(enemy));
    }

    #[test]
    fn test_destroy_entity_frees_handle() {
        let mut world = World::new();
        let e = world.create_entity();
        world.positions.insert(e, Position::new(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0))).unwrap();
        world.destroy_entity(e);
        assert!(!world.is_alive(e));
        assert!(!world.positions.has(e));
    }

    #[test]
    fn test_components_of_lists_tables() {
        let mut world = World::new();
        let wall = world.create_entity();
        world.positions.insert(wall, Position::default()).unwrap();
        world.active_walls.insert(wall, ActiveWall).unwrap();
        assert_eq!(world.components_of(wall), vec!["positions", "active_walls"]);
    }

    #[test]
    fn test_request_sound_keeps_first() {
        let mut world = World::new();
        let e = world.create_entity();
        world.request_sound(e, SoundId::Explosion);
        world.request_sound(e, SoundId::Door);
        assert_eq!(world.sounds.get(e), Some(&Sound::new(SoundId::Explosion)));
    }

    #[test]
    fn test_clear() {
        let mut world = World::new();
        let e = world.create_entity();
        world.positions.insert(e, Position::default()).unwrap();
        world.clear();
        assert_eq!(world.entity_count(), 0);
        assert!(world.positions.is_empty());
        assert!(!world.is_alive(e));
    }
}
