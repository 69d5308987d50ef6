//! Enemy and AI-state components
//!
//! The AI behaviour itself runs outside the collision core. Collision
//! resolution only flips the flags defined here.

use crate::ecs::Component;

/// Marks an entity as an enemy that hurts the player on contact
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadly;

impl Component for Deadly {}

/// A projectile fired by an enemy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnemyProjectile;

impl Component for EnemyProjectile {}

/// An enemy currently flinging itself at the player
///
/// Removed as soon as the enemy hits something, returning it to normal AI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActsAsProjectile;

impl Component for ActsAsProjectile {}

/// Boss archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossKind {
    /// Crab boss
    Krab,
    /// Charging shark boss; smashes crates while chasing the player
    Sharkman,
}

/// Boss state shared with the AI system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boss {
    /// Archetype
    pub kind: BossKind,

    /// Milliseconds until the boss may pick its next attack
    pub curr_cd_ms: f32,
}

impl Component for Boss {}

impl Boss {
    /// Create a boss with no cooldown pending
    pub fn new(kind: BossKind) -> Self {
        Self {
            kind,
            curr_cd_ms: 0.0,
        }
    }
}

/// AI that chases the player when in range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracksPlayer {
    /// Whether the entity is currently chasing
    pub active_track: bool,
}

impl Component for TracksPlayer {}

/// AI wander mode marker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wander;

impl Component for Wander {}

/// Cooldown between oxygen modifications from the same source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModifyOxygenCd {
    /// Milliseconds left; the source is inactive while positive
    pub curr_cd_ms: f32,

    /// Cooldown restarted after every application
    pub max_cd_ms: f32,
}

impl Component for ModifyOxygenCd {}

impl ModifyOxygenCd {
    /// Create a ready cooldown
    pub fn new(max_cd_ms: f32) -> Self {
        Self {
            curr_cd_ms: 0.0,
            max_cd_ms,
        }
    }

    /// Whether the source is still cooling down
    pub fn is_active(&self) -> bool {
        self.curr_cd_ms > 0.0
    }

    /// Restart the cooldown
    pub fn restart(&mut self) {
        self.curr_cd_ms = self.max_cd_ms;
    }
}
