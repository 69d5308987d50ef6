//! Player-side components: the diver, their projectiles and ammo

use crate::ecs::{Component, Entity};

/// The player character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    /// Sub-entity carrying the fine collision mesh
    pub collision_mesh: Entity,
}

impl Component for Player {}

/// Player projectile behaviours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectileKind {
    /// Plain single-target spear
    Harpoon,
    /// Single-target, applies a debuff
    Net,
    /// Multi-hit shockwave that lingers
    Concussive,
    /// Single-target, explodes on impact
    Torpedo,
    /// Multi-hit lingering bait
    Shrimp,
}

impl ProjectileKind {
    /// Whether detection stops after the first enemy hit
    pub fn is_single_target(self) -> bool {
        matches!(self, Self::Harpoon | Self::Net | Self::Torpedo)
    }

    /// Whether the projectile's lifecycle is managed by its lingering effect
    /// instead of being reloaded on hit
    pub fn lingers(self) -> bool {
        matches!(self, Self::Concussive | Self::Shrimp)
    }

    /// Inventory slot consumed by this projectile, if it uses ammo
    pub fn ammo(self) -> Option<ConsumableKind> {
        match self {
            Self::Harpoon => None,
            Self::Net => Some(ConsumableKind::Net),
            Self::Concussive => Some(ConsumableKind::Concussor),
            Self::Torpedo => Some(ConsumableKind::Torpedo),
            Self::Shrimp => Some(ConsumableKind::Shrimp),
        }
    }
}

/// A projectile fired by the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerProjectile {
    /// True while the projectile follows its gun instead of flying
    pub is_loaded: bool,

    /// Behaviour type
    pub kind: ProjectileKind,

    /// Whether the projectile sprite is mirrored (fired to the left)
    pub is_flipped: bool,
}

impl Component for PlayerProjectile {}

impl PlayerProjectile {
    /// A projectile in flight
    pub fn flying(kind: ProjectileKind) -> Self {
        Self {
            is_loaded: false,
            kind,
            is_flipped: false,
        }
    }

    /// A projectile resting in its gun
    pub fn loaded(kind: ProjectileKind) -> Self {
        Self {
            is_loaded: true,
            kind,
            is_flipped: false,
        }
    }
}

/// Things the player can pick up and carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsumableKind {
    /// Net ammo
    Net,
    /// Concussive ammo
    Concussor,
    /// Torpedo ammo
    Torpedo,
    /// Shrimp ammo
    Shrimp,
    /// Door key
    Key,
}

/// Per-player consumable counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inventory {
    /// Net ammo
    pub nets: u32,
    /// Concussive ammo
    pub concussors: u32,
    /// Torpedo ammo
    pub torpedoes: u32,
    /// Shrimp ammo
    pub shrimp: u32,
    /// Keys
    pub keys: u32,
}

impl Component for Inventory {}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            nets: 3,
            concussors: 3,
            torpedoes: 3,
            shrimp: 3,
            keys: 0,
        }
    }
}

impl Inventory {
    fn slot_mut(&mut self, kind: ConsumableKind) -> &mut u32 {
        match kind {
            ConsumableKind::Net => &mut self.nets,
            ConsumableKind::Concussor => &mut self.concussors,
            ConsumableKind::Torpedo => &mut self.torpedoes,
            ConsumableKind::Shrimp => &mut self.shrimp,
            ConsumableKind::Key => &mut self.keys,
        }
    }

    /// Count held of a consumable
    pub fn count(&self, kind: ConsumableKind) -> u32 {
        match kind {
            ConsumableKind::Net => self.nets,
            ConsumableKind::Concussor => self.concussors,
            ConsumableKind::Torpedo => self.torpedoes,
            ConsumableKind::Shrimp => self.shrimp,
            ConsumableKind::Key => self.keys,
        }
    }

    /// Add to a consumable count, saturating
    pub fn add(&mut self, kind: ConsumableKind, amount: u32) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(amount);
    }

    /// Whether a projectile kind has no ammo left
    pub fn is_out_of(&self, kind: ProjectileKind) -> bool {
        kind.ammo().is_some_and(|ammo| self.count(ammo) == 0)
    }
}

/// Player is dying; counts down to the death screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeathTimer {
    /// Remaining milliseconds
    pub remaining_ms: f32,
}

impl Component for DeathTimer {}
