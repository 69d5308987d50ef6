//! Collision categories
//!
//! An entity's role in a collision is the set of marker components it
//! carries. [`Category::of`] snapshots that set as a bitset so routing can
//! match on it instead of querying every table by hand.

use bitflags::bitflags;

use crate::ecs::{Entity, World};

bitflags! {
    /// Component-presence bitset used for collision routing
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Category: u16 {
        /// Has `Player`
        const PLAYER = 1 << 0;
        /// Has `Deadly`
        const ENEMY = 1 << 1;
        /// Has `PlayerProjectile`
        const PLAYER_PROJECTILE = 1 << 2;
        /// Has `EnemyProjectile`
        const ENEMY_PROJECTILE = 1 << 3;
        /// Has `ActiveWall`
        const ACTIVE_WALL = 1 << 4;
        /// Has `ActiveDoor`
        const ACTIVE_DOOR = 1 << 5;
        /// Has `Breakable`
        const BREAKABLE = 1 << 6;
        /// Has `Consumable`
        const CONSUMABLE = 1 << 7;
        /// Has `Interactable`
        const INTERACTABLE = 1 << 8;
        /// Has `Motion`
        const MOTION = 1 << 9;
        /// Has `Mass`
        const MASS = 1 << 10;
    }
}

impl Category {
    /// Categories an entity currently belongs to
    pub fn of(world: &World, entity: Entity) -> Self {
        let mut category = Self::empty();
        category.set(Self::PLAYER, world.players.has(entity));
        category.set(Self::ENEMY, world.deadlys.has(entity));
        category.set(Self::PLAYER_PROJECTILE, world.player_projectiles.has(entity));
        category.set(Self::ENEMY_PROJECTILE, world.enemy_projectiles.has(entity));
        category.set(Self::ACTIVE_WALL, world.active_walls.has(entity));
        category.set(Self::ACTIVE_DOOR, world.active_doors.has(entity));
        category.set(Self::BREAKABLE, world.breakables.has(entity));
        category.set(Self::CONSUMABLE, world.consumables.has(entity));
        category.set(Self::INTERACTABLE, world.interactables.has(entity));
        category.set(Self::MOTION, world.motions.has(entity));
        category.set(Self::MASS, world.masses.has(entity));
        category
    }
}
