//! Sound request component
//!
//! The audio collaborator plays and removes these each frame.

use crate::ecs::Component;

/// Sound effects the simulation can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    /// Torpedo detonation
    Explosion,
    /// Door opening
    Door,
    /// Item pickup
    Pickup,
}

/// Pending request to play a sound on an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sound {
    /// Which sound to play
    pub id: SoundId,
}

impl Component for Sound {}

impl Sound {
    /// Create a sound request
    pub fn new(id: SoundId) -> Self {
        Self { id }
    }
}
