//! Debuff components
//!
//! Sources (enemies, nets, concussive blasts) carry the debuff they inflict;
//! targets receive the matching status.

use crate::ecs::Component;

/// Stuns whatever this entity hits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stun {
    /// Stun length in milliseconds
    pub duration_ms: f32,
}

impl Component for Stun {}

/// The entity is stunned and cannot act
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stunned {
    /// Milliseconds left
    pub remaining_ms: f32,
}

impl Component for Stunned {}

/// Shoves whatever this entity hits away from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knockback {
    /// Speed added to the target, pointing away from the source
    pub strength: f32,
}

impl Component for Knockback {}
