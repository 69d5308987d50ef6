//! Game-wide simulation state
//!
//! State that belongs to the running game rather than to any one entity:
//! which screens or cutscenes currently freeze the world, who the player is,
//! and what the player has equipped.

use bitflags::bitflags;

use crate::ecs::components::ProjectileKind;
use crate::ecs::Entity;

bitflags! {
    /// Reasons the simulation may be frozen
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FreezeFlags: u16 {
        /// Intro cutscene playing
        const INTRO = 1 << 0;
        /// Start screen shown
        const START = 1 << 1;
        /// Game paused
        const PAUSED = 1 << 2;
        /// Krab boss cutscene playing
        const KRAB_CUTSCENE = 1 << 3;
        /// Sharkman boss cutscene playing
        const SHARKMAN_CUTSCENE = 1 << 4;
        /// Death screen shown
        const DEATH = 1 << 5;
        /// End screen shown
        const END = 1 << 6;
        /// Moving to another room
        const ROOM_TRANSITION = 1 << 7;
    }
}

/// The player's equipped gun and what it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loadout {
    /// Gun entity
    pub weapon: Entity,
    /// Projectile entity fired by the gun
    pub projectile: Entity,
    /// Projectile behaviour
    pub kind: ProjectileKind,
}

/// Global state threaded through the frame driver
#[derive(Debug, Clone, Default)]
pub struct SimulationState {
    /// Active freeze reasons; empty while the game is running
    pub freeze: FreezeFlags,

    /// The player entity, once spawned
    pub player: Option<Entity>,

    /// Currently equipped weapon
    pub equipped: Option<Loadout>,

    /// Harpoon gun loadout the player falls back to when out of ammo
    pub harpoon: Option<Loadout>,
}

impl SimulationState {
    /// Create a running state with no player
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set the player and equip the harpoon gun
    pub fn with_player(mut self, player: Entity, harpoon: Loadout) -> Self {
        self.player = Some(player);
        self.harpoon = Some(harpoon);
        self.equipped = Some(harpoon);
        self
    }

    /// Whether anything currently freezes the simulation
    pub fn is_frozen(&self) -> bool {
        !self.freeze.is_empty()
    }

    /// Whether a room transition is in progress
    pub fn is_room_transitioning(&self) -> bool {
        self.freeze.contains(FreezeFlags::ROOM_TRANSITION)
    }

    /// Equipped projectile entity, if any
    pub fn equipped_projectile(&self) -> Option<Entity> {
        self.equipped.map(|loadout| loadout.projectile)
    }

    /// Whether `entity` is the equipped projectile
    pub fn is_equipped_projectile(&self, entity: Entity) -> bool {
        self.equipped_projectile() == Some(entity)
    }

    /// Swap back to the harpoon gun
    ///
    /// Returns false if no harpoon loadout is known.
    pub fn equip_harpoon(&mut self) -> bool {
        match self.harpoon {
            Some(harpoon) => {
                self.equipped = Some(harpoon);
                true
            }
            None => false,
        }
    }
}
