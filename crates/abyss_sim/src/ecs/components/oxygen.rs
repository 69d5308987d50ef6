//! Oxygen (health) and damage components
//!
//! Everything that can be hurt, the player, enemies and breakables alike,
//! carries an [`Oxygen`] pool. Sources of damage or healing carry an
//! [`OxygenModifier`].

use crate::ecs::Component;

/// Oxygen pool; the entity's health
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oxygen {
    /// Current level
    pub level: f32,

    /// Maximum level
    pub capacity: f32,
}

impl Component for Oxygen {}

impl Oxygen {
    /// Create a full pool
    pub fn full(capacity: f32) -> Self {
        Self {
            level: capacity,
            capacity,
        }
    }

    /// Add `amount` (negative to drain), clamped to `[0, capacity]`
    pub fn modify(&mut self, amount: f32) {
        self.level = (self.level + amount).clamp(0.0, self.capacity);
    }

    /// Whether the pool is exhausted
    pub fn is_depleted(&self) -> bool {
        self.level <= 0.0
    }
}

/// Oxygen change applied to whatever this entity touches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OxygenModifier {
    /// Negative values drain, positive values refill
    pub amount: f32,
}

impl Component for OxygenModifier {}

/// Hit flash timer shown after taking damage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageIndicator {
    /// Milliseconds left to show the indicator
    pub timer_ms: f32,
}

impl Component for DamageIndicator {}

/// Splash radius for exploding projectiles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaOfEffect {
    /// Radius in room units
    pub radius: f32,
}

impl Component for AreaOfEffect {}
